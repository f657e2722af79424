//! Draggable tool card shown in the pool and in tier dropzones.

use leptos::prelude::*;
use leptos_dragdrop::{is_dragging, make_on_dragend, make_on_dragstart, DndSignals, DropTarget};
use star_chart_core::ToolItem;

use crate::config::DEFAULT_ICON;
use crate::context::AppContext;

#[component]
pub fn ToolCard(
    item: ToolItem,
    /// Container this card currently sits in.
    source: DropTarget,
    /// Opens the tool modal with this card's id.
    on_open: Callback<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = expect_context::<DndSignals>();

    let id = item.id.clone();
    let open_id = item.id.clone();
    let drag_id = item.id.clone();
    let icon = if item.icon.is_empty() {
        DEFAULT_ICON.to_string()
    } else {
        item.icon.clone()
    };
    let alt = format!("{} logo", item.display_name(false));

    let display_item = item.clone();
    let display = move || {
        display_item
            .display_name(ctx.lang.get().prefer_en())
            .to_string()
    };

    let card_class = move || {
        let mut class = String::from("ai-item");
        if is_dragging(&dnd, &drag_id) {
            class.push_str(" dragging");
        }
        class
    };

    let on_dragstart = make_on_dragstart(dnd, id.clone(), source);
    let on_dragend = make_on_dragend(dnd);

    view! {
        <div
            class=card_class
            draggable="true"
            data-id=id
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:click=move |_| on_open.run(open_id.clone())
        >
            <img class="ai-item-icon" src=icon alt=alt />
            <span class="ai-item-name">{display}</span>
        </div>
    }
}
