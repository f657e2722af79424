//! Star Chart frontend entry point.

mod app;
mod components;
mod config;
mod context;
mod export;
mod i18n;
mod markdown;
mod resources;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
