//! Leptos DragDrop Utilities
//!
//! Thin wrappers around the native HTML5 drag events for moving cards
//! between dropzones. One drag is in flight at a time (the browser
//! never fires a second dragstart before dragend), so the whole state
//! is a pair of signals: what is being dragged, and which zone the
//! pointer is over.

use leptos::prelude::*;
use web_sys::DragEvent;

/// A container a card can be dropped on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// The unranked pool grid.
    Pool,
    /// A tier dropzone, by tier id.
    Tier(String),
}

/// The card currently being dragged and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveDrag {
    pub item_id: String,
    pub source: DropTarget,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<ActiveDrag>>,
    pub dragging_write: WriteSignal<Option<ActiveDrag>>,
    /// Zone under the cursor, for hover highlighting only. Never feeds
    /// the data model.
    pub hover_read: ReadSignal<Option<DropTarget>>,
    pub hover_write: WriteSignal<Option<DropTarget>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<ActiveDrag>);
    let (hover_read, hover_write) = signal(None::<DropTarget>);
    DndSignals {
        dragging_read,
        dragging_write,
        hover_read,
        hover_write,
    }
}

/// End the drag: clears the payload and every hover highlight, so a
/// release outside any dropzone cannot leave a zone stuck highlighted.
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.hover_write.set(None);
}

/// dragstart handler for a card.
pub fn make_on_dragstart(
    dnd: DndSignals,
    item_id: String,
    source: DropTarget,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            let _ = transfer.set_data("text/plain", &item_id);
        }
        dnd.dragging_write.set(Some(ActiveDrag {
            item_id: item_id.clone(),
            source: source.clone(),
        }));
    }
}

/// dragend handler for a card. Fires on drop and on cancel alike; no
/// model mutation happens here.
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| end_drag(&dnd)
}

/// dragover handler for a zone: allows the drop and marks the hover.
pub fn make_on_dragover(
    dnd: DndSignals,
    target: DropTarget,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
        if dnd.dragging_read.get_untracked().is_some()
            && dnd.hover_read.get_untracked().as_ref() != Some(&target)
        {
            dnd.hover_write.set(Some(target.clone()));
        }
    }
}

/// dragleave handler for a zone: only clears its own highlight.
pub fn make_on_dragleave(
    dnd: DndSignals,
    target: DropTarget,
) -> impl Fn(DragEvent) + Clone + 'static {
    move |_ev: DragEvent| {
        if dnd.hover_read.get_untracked().as_ref() == Some(&target) {
            dnd.hover_write.set(None);
        }
    }
}

/// Consume a drop: returns the payload (if a drag was in flight) and
/// resets all drag state. The caller resolves the move against its own
/// zone identity.
pub fn take_drop(dnd: &DndSignals, ev: &DragEvent) -> Option<ActiveDrag> {
    ev.prevent_default();
    ev.stop_propagation();
    let payload = dnd.dragging_read.get_untracked();
    end_drag(dnd);
    payload
}

/// Tracked read for hover styling of a zone.
pub fn is_hovering(dnd: &DndSignals, target: &DropTarget) -> bool {
    dnd.hover_read.get().as_ref() == Some(target)
}

/// Tracked read for styling the card being dragged.
pub fn is_dragging(dnd: &DndSignals, item_id: &str) -> bool {
    dnd.dragging_read
        .get()
        .is_some_and(|drag| drag.item_id == item_id)
}
