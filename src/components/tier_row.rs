//! One tier: colored label plus its dropzone.

use leptos::prelude::*;
use leptos_dragdrop::{
    is_hovering, make_on_dragleave, make_on_dragover, take_drop, DndSignals, DropTarget,
};
use star_chart_core::placement::Location;
use star_chart_core::Tier;

use crate::components::ToolCard;
use crate::context::AppContext;
use crate::store::{store_move_item, store_tier_items, use_app_store};

#[component]
pub fn TierRow(
    tier: Tier,
    on_open: Callback<String>,
    /// Opens the tier modal in edit mode.
    on_edit: Callback<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let dnd = expect_context::<DndSignals>();

    let tier_id = tier.id.clone();
    let target = DropTarget::Tier(tier_id.clone());

    // Membership is read from the store, not the prop, so drops
    // re-render this row without re-keying the whole board.
    let items = {
        let tier_id = tier_id.clone();
        move || store_tier_items(&store, &tier_id)
    };

    let zone_class = {
        let target = target.clone();
        move || {
            let mut class = String::from("tier-dropzone");
            if is_hovering(&dnd, &target) {
                class.push_str(" over");
            }
            class
        }
    };

    let on_dragover = make_on_dragover(dnd, target.clone());
    let on_dragleave = make_on_dragleave(dnd, target);
    let on_drop = {
        let tier_id = tier_id.clone();
        move |ev: web_sys::DragEvent| {
            if let Some(drag) = take_drop(&dnd, &ev) {
                let destination = Location::Tier(tier_id.clone());
                if let Err(err) = store_move_item(&store, &drag.item_id, &destination) {
                    ctx.notify(err.to_string());
                }
            }
        }
    };

    let label_style = format!(
        "background-color: {}; color: {};",
        tier.color,
        tier.text_color()
    );
    let label_tier = tier.clone();
    let label = move || {
        label_tier
            .display_name(ctx.lang.get().prefer_en())
            .to_string()
    };
    let edit_id = tier_id.clone();
    let card_source = tier_id.clone();

    view! {
        <div class="tier-row" data-tier=tier.id.clone()>
            <div class="tier-label" style=label_style>
                <span class="tier-name">{label}</span>
                <button
                    class="tier-edit-btn"
                    title=move || ctx.strings().edit_tier
                    on:click=move |_| on_edit.run(edit_id.clone())
                >
                    "✎"
                </button>
            </div>
            <div
                class=zone_class
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <For
                    each=items
                    key=|item| item.id.clone()
                    children=move |item| {
                        let source = DropTarget::Tier(card_source.clone());
                        view! { <ToolCard item=item source=source on_open=on_open /> }
                    }
                />
            </div>
        </div>
    }
}
