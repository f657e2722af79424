//! A bilingual editable field: two language values behind one label,
//! showing the active modal language, as an input in edit mode and a
//! plain value otherwise. Both modal families build their forms from
//! this instead of duplicating the EN/ZH visibility dance per field.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::i18n::Lang;

#[component]
pub fn BilingualField(
    /// Label for the active language.
    label: Signal<String>,
    value_en: ReadSignal<String>,
    set_value_en: WriteSignal<String>,
    value_zh: ReadSignal<String>,
    set_value_zh: WriteSignal<String>,
    /// Modal-local language, not the page language.
    lang: ReadSignal<Lang>,
    editing: Signal<bool>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let active_value = move || {
        if lang.get().prefer_en() {
            value_en.get()
        } else {
            value_zh.get()
        }
    };
    let set_active = move |value: String| {
        if lang.get_untracked().prefer_en() {
            set_value_en.set(value);
        } else {
            set_value_zh.set(value);
        }
    };

    view! {
        <div class="editor-section">
            <label class="editor-label">{move || label.get()}</label>
            {move || if editing.get() {
                if multiline {
                    view! {
                        <textarea
                            class="field-input"
                            rows="5"
                            prop:value=active_value
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_active(area.value());
                            }
                        ></textarea>
                    }
                    .into_any()
                } else {
                    view! {
                        <input
                            type="text"
                            class="field-input"
                            prop:value=active_value
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_active(input.value());
                            }
                        />
                    }
                    .into_any()
                }
            } else {
                view! {
                    <span class="field-value">
                        {move || {
                            let value = active_value();
                            if value.is_empty() {
                                ctx.strings().none_value.to_string()
                            } else {
                                value
                            }
                        }}
                    </span>
                }
                .into_any()
            }}
        </div>
    }
}
