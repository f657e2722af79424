//! Save / share / export / reset actions. Everything reads the model
//! through a snapshot; the render tree is never consulted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::context::AppContext;
use crate::export;
use crate::i18n::strings;
use crate::storage;
use crate::store::{store_reset, store_snapshot, use_app_store};

async fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.is_ok()
}

#[component]
pub fn ActionBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_save = move |_| {
        let s = strings(ctx.lang.get_untracked());
        if storage::persist_state(&store_snapshot(&store)) {
            ctx.notify(s.saved_ok);
        } else {
            ctx.notify(s.save_failed);
        }
    };

    let on_share = move |_| {
        let s = strings(ctx.lang.get_untracked());
        match storage::share_link(&store_snapshot(&store)) {
            Some(link) => {
                spawn_local(async move {
                    let s = strings(ctx.lang.get_untracked());
                    if copy_to_clipboard(&link).await {
                        ctx.notify(s.link_copied);
                    } else {
                        // No clipboard access: surface the link itself.
                        ctx.notify(link);
                    }
                });
            }
            None => ctx.notify(s.link_failed),
        }
    };

    let on_export_json = move |_| {
        if let Err(err) = export::export_json(&store_snapshot(&store)) {
            ctx.notify(err);
        }
    };

    let on_export_csv = move |_| {
        if let Err(err) = export::export_csv(&store_snapshot(&store)) {
            ctx.notify(err);
        }
    };

    let on_reset = move |_| {
        let s = strings(ctx.lang.get_untracked());
        let confirmed = web_sys::window()
            .and_then(|window| window.confirm_with_message(s.reset_confirm).ok())
            .unwrap_or(false);
        if confirmed {
            store_reset(&store);
        }
    };

    view! {
        <div class="action-bar">
            <button class="btn-primary" on:click=on_save>
                {move || ctx.strings().save_chart}
            </button>
            <button class="btn-secondary" on:click=on_share>
                {move || ctx.strings().share_chart}
            </button>
            <button class="btn-secondary" on:click=on_export_json>
                {move || ctx.strings().export_json}
            </button>
            <button class="btn-secondary" on:click=on_export_csv>
                {move || ctx.strings().export_csv}
            </button>
            <button class="btn-danger" on:click=on_reset>
                {move || ctx.strings().reset_chart}
            </button>
        </div>
    }
}
