//! Add/edit dialog for tiers. Validation lives in the core state ops;
//! this form just relays the rejection reason as a status message.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use star_chart_core::TierDraft;

use crate::context::AppContext;
use crate::i18n::strings;
use crate::store::{store_add_tier, store_edit_tier, use_app_store, UiStateStoreFields};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TierModalState {
    Closed,
    Add,
    Edit(String),
}

const DEFAULT_NEW_TIER_COLOR: &str = "#a29bfe";

#[component]
pub fn TierModal(state: RwSignal<TierModalState>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (tier_id, set_tier_id) = signal(String::new());
    let (name_zh, set_name_zh) = signal(String::new());
    let (name_en, set_name_en) = signal(String::new());
    let (color, set_color) = signal(DEFAULT_NEW_TIER_COLOR.to_string());

    Effect::new(move |_| match state.get() {
        TierModalState::Closed => {}
        TierModalState::Add => {
            set_tier_id.set(String::new());
            set_name_zh.set(String::new());
            set_name_en.set(String::new());
            set_color.set(DEFAULT_NEW_TIER_COLOR.to_string());
        }
        TierModalState::Edit(id) => {
            let tiers = store.tiers().get_untracked();
            if let Some(tier) = tiers.iter().find(|tier| tier.id == id) {
                set_tier_id.set(tier.id.clone());
                set_name_zh.set(tier.name_zh.clone());
                set_name_en.set(tier.name_en.clone());
                set_color.set(tier.color.clone());
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match state.get_untracked() {
            TierModalState::Add => {
                let draft = TierDraft {
                    id: tier_id.get_untracked(),
                    name_zh: name_zh.get_untracked(),
                    name_en: name_en.get_untracked(),
                    color: color.get_untracked(),
                };
                match store_add_tier(&store, draft) {
                    Ok(()) => state.set(TierModalState::Closed),
                    Err(err) => ctx.notify(err.to_string()),
                }
            }
            TierModalState::Edit(id) => {
                let result = store_edit_tier(
                    &store,
                    &id,
                    Some(name_zh.get_untracked().trim().to_string()),
                    Some(name_en.get_untracked().trim().to_string()),
                    Some(color.get_untracked().trim().to_string()),
                );
                match result {
                    Ok(()) => state.set(TierModalState::Closed),
                    Err(err) => ctx.notify(err.to_string()),
                }
            }
            TierModalState::Closed => {}
        }
    };

    view! {
        {move || if state.get() == TierModalState::Closed {
            view! { <div></div> }.into_any()
        } else {
            let is_add = state.get() == TierModalState::Add;
            let lang = ctx.lang;
            let s = move || strings(lang.get());
            view! {
                <div class="modal-overlay">
                    <div class="modal-content tier-modal">
                        <div class="modal-header">
                            <span class="modal-title">
                                {move || if is_add { s().tier_modal_add_title } else { s().tier_modal_edit_title }}
                            </span>
                            <button class="close-btn" on:click=move |_| state.set(TierModalState::Closed)>
                                "×"
                            </button>
                        </div>

                        <form class="modal-form" on:submit=on_submit>
                            <div class="editor-section">
                                <label class="editor-label">{move || s().tier_id_label}</label>
                                <input
                                    type="text"
                                    class="field-input"
                                    maxlength="8"
                                    prop:value=move || tier_id.get()
                                    prop:disabled=!is_add
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_tier_id.set(input.value());
                                    }
                                />
                            </div>

                            <div class="editor-section">
                                <label class="editor-label">{move || s().tier_name_zh_label}</label>
                                <input
                                    type="text"
                                    class="field-input"
                                    prop:value=move || name_zh.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_name_zh.set(input.value());
                                    }
                                />
                            </div>

                            <div class="editor-section">
                                <label class="editor-label">{move || s().tier_name_en_label}</label>
                                <input
                                    type="text"
                                    class="field-input"
                                    prop:value=move || name_en.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_name_en.set(input.value());
                                    }
                                />
                            </div>

                            <div class="editor-section">
                                <label class="editor-label">{move || s().tier_color_label}</label>
                                <input
                                    type="color"
                                    class="color-input"
                                    prop:value=move || color.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_color.set(input.value());
                                    }
                                />
                            </div>

                            <div class="modal-footer">
                                <div class="footer-buttons">
                                    <button type="submit" class="btn-primary">
                                        {move || if is_add { s().add } else { s().save_changes }}
                                    </button>
                                    <button
                                        type="button"
                                        class="btn-secondary"
                                        on:click=move |_| state.set(TierModalState::Closed)
                                    >
                                        {move || s().cancel}
                                    </button>
                                </div>
                            </div>
                        </form>
                    </div>
                </div>
            }.into_any()
        }}
    }
}
