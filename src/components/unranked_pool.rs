//! The unranked pool: every tool not placed in a tier.

use leptos::prelude::*;
use leptos_dragdrop::{
    is_hovering, make_on_dragleave, make_on_dragover, take_drop, DndSignals, DropTarget,
};
use star_chart_core::placement::Location;

use crate::components::ToolCard;
use crate::context::AppContext;
use crate::store::{store_move_item, store_unranked_items, use_app_store};

#[component]
pub fn UnrankedPool(
    on_open: Callback<String>,
    /// Opens the "add tool" modal.
    on_add: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let dnd = expect_context::<DndSignals>();

    let items = move || store_unranked_items(&store);
    let is_empty = move || store_unranked_items(&store).is_empty();

    let zone_class = move || {
        let mut class = String::from("item-grid");
        if is_hovering(&dnd, &DropTarget::Pool) {
            class.push_str(" over");
        }
        class
    };

    let on_dragover = make_on_dragover(dnd, DropTarget::Pool);
    let on_dragleave = make_on_dragleave(dnd, DropTarget::Pool);
    let on_drop = move |ev: web_sys::DragEvent| {
        if let Some(drag) = take_drop(&dnd, &ev) {
            if let Err(err) = store_move_item(&store, &drag.item_id, &Location::Pool) {
                ctx.notify(err.to_string());
            }
        }
    };

    view! {
        <section class="pool-section">
            <div class="section-header">
                <h2>{move || ctx.strings().unranked_title}</h2>
                <button class="btn-secondary" on:click=move |_| on_add.run(())>
                    {move || ctx.strings().add_custom_ai}
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
                        view! { <ToolCard item=item source=DropTarget::Pool on_open=on_open /> }
                    }
                />
                {move || if is_empty() {
                    view! { <p class="pool-empty">{ctx.strings().pool_empty}</p> }.into_any()
                } else {
                    view! { <span></span> }.into_any()
                }}
            </div>
        </section>
    }
}
