//! Star Chart Frontend App
//!
//! Startup order follows the original: load resources, overlay the
//! saved state, then overlay a share-link payload if one is in the
//! URL. The board renders only after the model is assembled.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::create_dnd_signals;
use wasm_bindgen::JsValue;

use star_chart_core::placement::{self, Location};
use star_chart_core::share;
use star_chart_core::AppState;

use crate::components::{
    ActionBar, LangSwitch, TierBoard, TierModal, TierModalState, ToolModal, ToolModalState,
    UnrankedPool,
};
use crate::context::AppContext;
use crate::i18n::{strings, Lang};
use crate::resources;
use crate::storage;
use crate::store::{store_apply_state, store_set_features, AppStore, UiState};

fn browser_lang() -> Lang {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|code| {
            if code.starts_with("zh") {
                Lang::Zh
            } else {
                Lang::En
            }
        })
        .unwrap_or(Lang::Zh)
}

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(UiState::default());
    provide_context(store);

    let (lang, set_lang) = signal(storage::load_lang().unwrap_or_else(browser_lang));
    let (status, set_status) = signal(None::<String>);
    let ctx = AppContext::new((lang, set_lang), (status, set_status));
    provide_context(ctx);

    let dnd = create_dnd_signals();
    provide_context(dnd);

    let (ready, set_ready) = signal(false);
    let tool_modal = RwSignal::new(ToolModalState::Closed);
    let tier_modal = RwSignal::new(TierModalState::Closed);

    // Assemble the model once on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            let tiers = resources::load_tiers().await;
            let placed = resources::load_items().await;
            let features = resources::load_features().await;

            if placed.is_empty() {
                ctx.notify(strings(ctx.lang.get_untracked()).load_failed);
            }

            let mut state = AppState {
                tiers,
                ai_items: placed.iter().map(|row| row.item.clone()).collect(),
                custom_ai_items: Vec::new(),
            };

            let saved = storage::load_state();
            if saved.is_none() {
                // First run: adopt the tier annotations shipped with
                // the resource.
                for row in &placed {
                    if let Some(tier_id) = row.tier() {
                        let destination = Location::Tier(tier_id.to_string());
                        if let Err(err) =
                            placement::move_item(&mut state.tiers, &row.item.id, &destination)
                        {
                            web_sys::console::warn_1(&JsValue::from_str(&format!(
                                "[app] resource placement dropped: {err}"
                            )));
                        }
                    }
                }
            }
            if let Some(saved) = saved {
                state.merge_saved(saved);
            }
            if let Some(payload) = storage::shared_payload_from_url() {
                share::apply(&mut state, payload);
            }
            state.normalize_placements();

            store_apply_state(&store, state);
            store_set_features(&store, features);
            set_ready.set(true);
        });
    });

    let on_open = Callback::new(move |id: String| tool_modal.set(ToolModalState::View(id)));
    let on_add_tool = Callback::new(move |_: ()| tool_modal.set(ToolModalState::Add));
    let on_add_tier = Callback::new(move |_: ()| tier_modal.set(TierModalState::Add));
    let on_edit_tier = Callback::new(move |id: String| tier_modal.set(TierModalState::Edit(id)));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div class="app-titles">
                    <h1>{move || ctx.strings().app_title}</h1>
                    <p class="app-subtitle">{move || ctx.strings().app_subtitle}</p>
                </div>
                <LangSwitch />
            </header>

            <main class="main-content">
                {move || if ready.get() {
                    view! {
                        <div class="board">
                            <UnrankedPool on_open=on_open on_add=on_add_tool />
                            <TierBoard
                                on_open=on_open
                                on_add_tier=on_add_tier
                                on_edit_tier=on_edit_tier
                            />
                            <ActionBar />
                        </div>
                    }.into_any()
                } else {
                    view! { <p class="loading">{move || ctx.strings().loading}</p> }.into_any()
                }}
            </main>

            {move || ctx.status.get().map(|message| view! {
                <div class="status-toast">{message}</div>
            })}

            <ToolModal state=tool_modal />
            <TierModal state=tier_modal />
        </div>
    }
}
