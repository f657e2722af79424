//! The tool modal: one dialog covering add, read-only view and edit.
//!
//! Field population follows the modal state signal: opening View or
//! Edit loads the stored record, cancelling an edit falls back to View
//! which reloads the untouched record. The modal keeps its own
//! language toggle, persisted separately from the page language.

use std::collections::BTreeMap;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use star_chart_core::item::{build_release_date, split_release_date};
use star_chart_core::{ToolItem, ToolItemDraft, ToolItemPatch};

use crate::components::{BilingualField, FeatureEditor};
use crate::context::AppContext;
use crate::i18n::{strings, Lang};
use crate::markdown::render_markdown;
use crate::storage;
use crate::store::{store_add_custom_item, store_get_item, store_update_item, use_app_store};

/// Which face of the modal is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolModalState {
    Closed,
    Add,
    View(String),
    Edit(String),
}

const MODAL_LANG_SLOT: &str = "tool";

#[component]
pub fn ToolModal(state: RwSignal<ToolModalState>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let initial_lang = storage::load_modal_lang(MODAL_LANG_SLOT).unwrap_or(ctx.lang.get_untracked());
    let (modal_lang, set_modal_lang) = signal(initial_lang);

    let (name_en, set_name_en) = signal(String::new());
    let (name_zh, set_name_zh) = signal(String::new());
    let (icon, set_icon) = signal(String::new());
    let (website, set_website) = signal(String::new());
    let (release_year, set_release_year) = signal(String::new());
    let (release_month, set_release_month) = signal(String::new());
    let (desc_en, set_desc_en) = signal(String::new());
    let (desc_zh, set_desc_zh) = signal(String::new());
    let (scores, set_scores) = signal(BTreeMap::<String, u8>::new());

    let populate = move |item: Option<ToolItem>| match item {
        Some(item) => {
            let (year, month) = split_release_date(&item.release_date);
            set_name_en.set(item.name_en);
            set_name_zh.set(item.name_zh);
            set_icon.set(item.icon);
            set_website.set(item.tool_website);
            set_release_year.set(year);
            set_release_month.set(month);
            set_desc_en.set(item.description_en);
            set_desc_zh.set(item.description_zh);
            set_scores.set(item.features);
        }
        None => {
            set_name_en.set(String::new());
            set_name_zh.set(String::new());
            set_icon.set(String::new());
            set_website.set(String::new());
            set_release_year.set(String::new());
            set_release_month.set(String::new());
            set_desc_en.set(String::new());
            set_desc_zh.set(String::new());
            set_scores.set(BTreeMap::new());
        }
    };

    // Reload the form whenever the modal face changes; an Edit -> View
    // transition (cancel) restores the stored record.
    Effect::new(move |_| match state.get() {
        ToolModalState::Closed => {}
        ToolModalState::Add => populate(None),
        ToolModalState::View(id) | ToolModalState::Edit(id) => {
            populate(store_get_item(&store, &id))
        }
    });

    let editing = Signal::derive(move || {
        matches!(
            state.get(),
            ToolModalState::Add | ToolModalState::Edit(_)
        )
    });

    let switch_lang = move |lang: Lang| {
        set_modal_lang.set(lang);
        storage::save_modal_lang(MODAL_LANG_SLOT, lang);
    };

    let name_label = Signal::derive(move || {
        let lang = modal_lang.get();
        let s = strings(lang);
        if lang.prefer_en() {
            s.name_en_label.to_string()
        } else {
            s.name_zh_label.to_string()
        }
    });
    let desc_label = Signal::derive(move || {
        let lang = modal_lang.get();
        let s = strings(lang);
        if lang.prefer_en() {
            s.desc_en_label.to_string()
        } else {
            s.desc_zh_label.to_string()
        }
    });

    let preview_html = move || {
        let text = if modal_lang.get().prefer_en() {
            desc_en.get()
        } else {
            desc_zh.get()
        };
        render_markdown(&text)
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let release_date = build_release_date(
            &release_month.get_untracked(),
            &release_year.get_untracked(),
        );
        match state.get_untracked() {
            ToolModalState::Add => {
                let draft = ToolItemDraft {
                    name_en: name_en.get_untracked(),
                    name_zh: name_zh.get_untracked(),
                    icon: icon.get_untracked(),
                    release_date,
                    tool_website: website.get_untracked(),
                    description_en: desc_en.get_untracked(),
                    description_zh: desc_zh.get_untracked(),
                    features: scores.get_untracked(),
                };
                match store_add_custom_item(&store, draft) {
                    Ok(_) => state.set(ToolModalState::Closed),
                    Err(err) => ctx.notify(err.to_string()),
                }
            }
            ToolModalState::Edit(id) => {
                let patch = ToolItemPatch {
                    name_en: Some(name_en.get_untracked().trim().to_string()),
                    name_zh: Some(name_zh.get_untracked().trim().to_string()),
                    icon: Some(icon.get_untracked().trim().to_string()),
                    release_date: Some(release_date),
                    tool_website: Some(website.get_untracked().trim().to_string()),
                    description_en: Some(desc_en.get_untracked()),
                    description_zh: Some(desc_zh.get_untracked()),
                    features: Some(scores.get_untracked()),
                };
                match store_update_item(&store, &id, patch) {
                    Ok(_) => state.set(ToolModalState::View(id)),
                    Err(err) => ctx.notify(err.to_string()),
                }
            }
            _ => {}
        }
    };

    let on_cancel = move |_| match state.get_untracked() {
        ToolModalState::Edit(id) => state.set(ToolModalState::View(id)),
        _ => state.set(ToolModalState::Closed),
    };

    let on_edit = move |_| {
        if let ToolModalState::View(id) = state.get_untracked() {
            state.set(ToolModalState::Edit(id));
        }
    };

    let title = move || {
        let s = strings(modal_lang.get());
        match state.get() {
            ToolModalState::Add => s.add_tool_title,
            ToolModalState::Edit(_) => s.edit_tool_title,
            _ => s.tool_details_title,
        }
    };

    let shown_id = move || match state.get() {
        ToolModalState::View(id) | ToolModalState::Edit(id) => id,
        _ => String::new(),
    };

    view! {
        {move || if state.get() == ToolModalState::Closed {
            view! { <div></div> }.into_any()
        } else {
            let s = move || strings(modal_lang.get());
            view! {
                <div class="modal-overlay">
                    <div
                        class="modal-content"
                        data-mode=move || if editing.get() { "edit" } else { "read-only" }
                        data-language=move || modal_lang.get().code()
                    >
                        <div class="modal-header">
                            <span class="modal-title">{title}</span>
                            <div class="lang-switch">
                                <button
                                    type="button"
                                    class=move || if modal_lang.get() == Lang::Zh { "lang-btn active" } else { "lang-btn" }
                                    on:click=move |_| switch_lang(Lang::Zh)
                                >
                                    "中文"
                                </button>
                                <button
                                    type="button"
                                    class=move || if modal_lang.get() == Lang::En { "lang-btn active" } else { "lang-btn" }
                                    on:click=move |_| switch_lang(Lang::En)
                                >
                                    "EN"
                                </button>
                            </div>
                            <button class="close-btn" on:click=move |_| state.set(ToolModalState::Closed)>
                                "×"
                            </button>
                        </div>

                        <form class="modal-form" on:submit=on_submit>
                            {move || {
                                let id = shown_id();
                                if id.is_empty() {
                                    view! { <span></span> }.into_any()
                                } else {
                                    view! { <p class="tool-id">{id}</p> }.into_any()
                                }
                            }}

                            <BilingualField
                                label=name_label
                                value_en=name_en
                                set_value_en=set_name_en
                                value_zh=name_zh
                                set_value_zh=set_name_zh
                                lang=modal_lang
                                editing=editing
                            />

                            <div class="editor-section">
                                <label class="editor-label">{move || s().icon_label}</label>
                                {move || if editing.get() {
                                    view! {
                                        <input
                                            type="text"
                                            class="field-input"
                                            prop:value=move || icon.get()
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                set_icon.set(input.value());
                                            }
                                        />
                                    }.into_any()
                                } else {
                                    view! {
                                        <span class="field-value">
                                            {move || {
                                                let value = icon.get();
                                                if value.is_empty() { s().none_value.to_string() } else { value }
                                            }}
                                        </span>
                                    }.into_any()
                                }}
                            </div>

                            <div class="editor-section">
                                <label class="editor-label">{move || s().website_label}</label>
                                {move || if editing.get() {
                                    view! {
                                        <input
                                            type="text"
                                            class="field-input"
                                            prop:value=move || website.get()
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                set_website.set(input.value());
                                            }
                                        />
                                    }.into_any()
                                } else if website.get().is_empty() {
                                    view! { <span class="field-value">{move || s().none_value}</span> }.into_any()
                                } else {
                                    view! {
                                        <a class="field-value" href=move || website.get() target="_blank" rel="noopener">
                                            {move || website.get()}
                                        </a>
                                    }.into_any()
                                }}
                            </div>

                            <div class="editor-section">
                                <label class="editor-label">{move || s().release_label}</label>
                                {move || if editing.get() {
                                    view! {
                                        <div class="release-inputs">
                                            <input
                                                type="text"
                                                class="field-input release-year"
                                                placeholder=move || s().year_placeholder
                                                prop:value=move || release_year.get()
                                                on:input=move |ev| {
                                                    let target = ev.target().unwrap();
                                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                    set_release_year.set(input.value());
                                                }
                                            />
                                            <input
                                                type="text"
                                                class="field-input release-month"
                                                placeholder=move || s().month_placeholder
                                                prop:value=move || release_month.get()
                                                on:input=move |ev| {
                                                    let target = ev.target().unwrap();
                                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                    set_release_month.set(input.value());
                                                }
                                            />
                                        </div>
                                    }.into_any()
                                } else {
                                    view! {
                                        <span class="field-value">
                                            {move || {
                                                let date = build_release_date(
                                                    &release_month.get(),
                                                    &release_year.get(),
                                                );
                                                if date.is_empty() { s().none_value.to_string() } else { date }
                                            }}
                                        </span>
                                    }.into_any()
                                }}
                            </div>

                            <BilingualField
                                label=desc_label
                                value_en=desc_en
                                set_value_en=set_desc_en
                                value_zh=desc_zh
                                set_value_zh=set_desc_zh
                                lang=modal_lang
                                editing=editing
                                multiline=true
                            />

                            <div class="editor-section">
                                <label class="editor-label">{move || s().preview_label}</label>
                                <div class="markdown-preview" inner_html=preview_html></div>
                            </div>

                            <FeatureEditor
                                scores=scores
                                set_scores=set_scores
                                lang=modal_lang
                                editing=editing
                            />

                            <div class="modal-footer">
                                {move || if editing.get() {
                                    let submit_label = if matches!(state.get(), ToolModalState::Add) {
                                        s().add
                                    } else {
                                        s().save_changes
                                    };
                                    view! {
                                        <div class="footer-buttons">
                                            <button type="submit" class="btn-primary">{submit_label}</button>
                                            <button type="button" class="btn-secondary" on:click=on_cancel>
                                                {move || s().cancel}
                                            </button>
                                        </div>
                                    }.into_any()
                                } else {
                                    view! {
                                        <div class="footer-buttons">
                                            <button type="button" class="btn-primary" on:click=on_edit>
                                                {move || s().edit}
                                            </button>
                                            <button
                                                type="button"
                                                class="btn-secondary"
                                                on:click=move |_| state.set(ToolModalState::Closed)
                                            >
                                                {move || s().close}
                                            </button>
                                        </div>
                                    }.into_any()
                                }}
                            </div>
                        </form>
                    </div>
                </div>
            }.into_any()
        }}
    }
}
