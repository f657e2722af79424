//! Feature-score rows: sliders in edit mode, bars in read-only mode.
//! A stored 0 stays in the map but is hidden from read-only display.

use std::collections::BTreeMap;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use star_chart_core::item::clamp_score;
use star_chart_core::FeatureDef;

use crate::context::AppContext;
use crate::i18n::Lang;
use crate::store::{use_app_store, UiStateStoreFields};

fn feature_label(defs: &[FeatureDef], id: &str, prefer_en: bool) -> String {
    defs.iter()
        .find(|def| def.id == id)
        .map(|def| def.display_name(prefer_en).to_string())
        .unwrap_or_else(|| id.to_string())
}

#[component]
pub fn FeatureEditor(
    scores: ReadSignal<BTreeMap<String, u8>>,
    set_scores: WriteSignal<BTreeMap<String, u8>>,
    /// Modal-local language.
    lang: ReadSignal<Lang>,
    editing: Signal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (selected, set_selected) = signal(String::new());

    let rated_ids = move || scores.get().into_keys().collect::<Vec<_>>();
    let available = move || {
        let present = scores.get();
        store
            .features()
            .get()
            .into_iter()
            .filter(|def| !present.contains_key(&def.id))
            .collect::<Vec<_>>()
    };

    let add_selected = move |_| {
        let id = selected.get_untracked();
        if id.is_empty() {
            return;
        }
        set_scores.update(|scores| {
            scores.entry(id.clone()).or_insert(0);
        });
        set_selected.set(String::new());
    };

    view! {
        <div class="editor-section features-section">
            <label class="editor-label">{move || ctx.strings().features_label}</label>

            {move || if editing.get() {
                view! {
                    <div class="feature-editing">
                    <div class="feature-rows-container">
                        <For
                            each=rated_ids
                            key=|id| id.clone()
                            children=move |id| {
                                let remove_id = id.clone();
                                let input_id = id.clone();
                                let display_id = id.clone();
                                let label = {
                                    let id = id.clone();
                                    move || {
                                        feature_label(
                                            &store.features().get(),
                                            &id,
                                            lang.get().prefer_en(),
                                        )
                                    }
                                };
                                let initial = scores.get_untracked().get(&id).copied().unwrap_or(0);
                                view! {
                                    <div class="feature-row" data-feature-id=id.clone()>
                                        <div class="feature-controls">
                                            <button
                                                type="button"
                                                class="remove-feature-btn"
                                                on:click=move |_| set_scores.update(|scores| {
                                                    scores.remove(&remove_id);
                                                })
                                            >
                                                "−"
                                            </button>
                                            <label>{label}</label>
                                        </div>
                                        <div class="feature-slider-container">
                                            <input
                                                type="range"
                                                min="0"
                                                max="100"
                                                class="feature-slider"
                                                prop:value=initial.to_string()
                                                on:input=move |ev| {
                                                    let target = ev.target().unwrap();
                                                    let input = target
                                                        .dyn_ref::<web_sys::HtmlInputElement>()
                                                        .unwrap();
                                                    let value =
                                                        input.value().parse::<i64>().unwrap_or(0);
                                                    set_scores.update(|scores| {
                                                        scores.insert(
                                                            input_id.clone(),
                                                            clamp_score(value),
                                                        );
                                                    });
                                                }
                                            />
                                            <span class="feature-score-display">
                                                {move || {
                                                    scores
                                                        .get()
                                                        .get(&display_id)
                                                        .copied()
                                                        .unwrap_or(0)
                                                }}
                                            </span>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <div class="feature-add-row">
                        <select
                            class="feature-select"
                            prop:value=move || selected.get()
                            on:change=move |ev| {
                                let target = ev.target().unwrap();
                                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                set_selected.set(select.value());
                            }
                        >
                            <option value="">"…"</option>
                            {move || {
                                let prefer_en = lang.get().prefer_en();
                                available()
                                    .into_iter()
                                    .map(|def| {
                                        let name = def.display_name(prefer_en).to_string();
                                        view! { <option value=def.id.clone()>{name}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <button type="button" class="add-feature-btn btn-secondary" on:click=add_selected>
                            {move || ctx.strings().add_feature}
                        </button>
                    </div>
                    </div>
                }
                .into_any()
            } else {
                let rated = scores
                    .get()
                    .into_iter()
                    .filter(|(_, score)| *score > 0)
                    .collect::<Vec<_>>();
                if rated.is_empty() {
                    view! { <p class="no-features">{ctx.strings().no_features}</p> }.into_any()
                } else {
                    let prefer_en = lang.get().prefer_en();
                    let defs = store.features().get();
                    rated
                        .into_iter()
                        .map(|(id, score)| {
                            let name = feature_label(&defs, &id, prefer_en);
                            view! {
                                <div class="feature-row read-only">
                                    <label>{name}</label>
                                    <div class="feature-score-bar">
                                        <div
                                            class="feature-score-fill"
                                            style=format!("width: {score}%;")
                                        ></div>
                                    </div>
                                    <span class="feature-score-display">{score}</span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
