//! The tier list with its add/remove controls.

use leptos::prelude::*;

use crate::components::TierRow;
use crate::context::AppContext;
use crate::i18n;
use crate::store::{store_remove_last_tier, use_app_store, UiStateStoreFields};

#[component]
pub fn TierBoard(
    on_open: Callback<String>,
    on_add_tier: Callback<()>,
    on_edit_tier: Callback<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let tiers = move || store.tiers().get();

    let remove_last = move |_| {
        let lang = ctx.lang.get_untracked();
        match store_remove_last_tier(&store) {
            Ok(removed) => {
                let name = removed.display_name(lang.prefer_en()).to_string();
                ctx.notify(i18n::tier_removed_msg(lang, &name, removed.items.len()));
            }
            Err(err) => ctx.notify(err.to_string()),
        }
    };

    view! {
        <section class="tier-section">
            <div class="section-header">
                <h2>{move || ctx.strings().tier_list_title}</h2>
                <div class="tier-controls">
                    <button class="btn-secondary" on:click=move |_| on_add_tier.run(())>
                        {move || ctx.strings().add_tier}
                    </button>
                    <button class="btn-secondary" on:click=remove_last>
                        {move || ctx.strings().remove_tier}
                    </button>
                </div>
            </div>
            <div class="tiers-container">
                <For
                    each=tiers
                    key=|tier| {
                        (
                            tier.id.clone(),
                            tier.name_zh.clone(),
                            tier.name_en.clone(),
                            tier.color.clone(),
                        )
                    }
                    children=move |tier| {
                        view! { <TierRow tier=tier on_open=on_open on_edit=on_edit_tier /> }
                    }
                />
            </div>
        </section>
    }
}
