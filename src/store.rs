//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. All
//! mutations funnel through the `store_*` helpers, which run the core
//! operations and persist to localStorage on success; components
//! never edit the lists directly.

use leptos::prelude::*;
use reactive_stores::Store;

use star_chart_core::catalog;
use star_chart_core::config as core_config;
use star_chart_core::placement::{self, Location, MoveOutcome};
use star_chart_core::{
    AppState, FeatureDef, Result, Tier, TierDraft, ToolItem, ToolItemDraft, ToolItemPatch,
};

use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Ordered tiers with their placements
    pub tiers: Vec<Tier>,
    /// Tool catalog loaded from the resource
    pub ai_items: Vec<ToolItem>,
    /// User-created tools
    pub custom_ai_items: Vec<ToolItem>,
    /// Feature definitions for the score editor
    pub features: Vec<FeatureDef>,
}

/// Type alias for the store
pub type AppStore = Store<UiState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Snapshots
// ========================

/// Untracked copy of the persisted aggregate.
pub fn store_snapshot(store: &AppStore) -> AppState {
    AppState {
        tiers: store.tiers().get_untracked(),
        ai_items: store.ai_items().get_untracked(),
        custom_ai_items: store.custom_ai_items().get_untracked(),
    }
}

/// Replace the board wholesale (startup, reset, share import).
pub fn store_apply_state(store: &AppStore, state: AppState) {
    *store.tiers().write() = state.tiers;
    *store.ai_items().write() = state.ai_items;
    *store.custom_ai_items().write() = state.custom_ai_items;
}

pub fn store_set_features(store: &AppStore, features: Vec<FeatureDef>) {
    *store.features().write() = features;
}

// ========================
// Tracked reads for views
// ========================

/// All known tools, catalog first then custom. Tracked.
pub fn store_all_items(store: &AppStore) -> Vec<ToolItem> {
    let mut items = store.ai_items().get();
    items.extend(store.custom_ai_items().get());
    items
}

/// Tools not placed in any tier. Tracked.
pub fn store_unranked_items(store: &AppStore) -> Vec<ToolItem> {
    let tiers = store.tiers().get();
    store_all_items(store)
        .into_iter()
        .filter(|item| placement::location_of(&tiers, &item.id) == Location::Pool)
        .collect()
}

/// Tools placed in one tier, in placement order. Tracked.
pub fn store_tier_items(store: &AppStore, tier_id: &str) -> Vec<ToolItem> {
    let tiers = store.tiers().get();
    let Some(tier) = tiers.iter().find(|tier| tier.id == tier_id) else {
        return Vec::new();
    };
    let all = store_all_items(store);
    tier.items
        .iter()
        .filter_map(|id| catalog::find_item(&all, id).cloned())
        .collect()
}

/// Untracked lookup for modal population.
pub fn store_get_item(store: &AppStore, id: &str) -> Option<ToolItem> {
    store
        .ai_items()
        .get_untracked()
        .into_iter()
        .chain(store.custom_ai_items().get_untracked())
        .find(|item| item.id == id)
}

// ========================
// Mutations
// ========================

/// Place an item; persists only when something actually moved.
pub fn store_move_item(store: &AppStore, item_id: &str, target: &Location) -> Result<MoveOutcome> {
    let outcome = {
        let mut tiers = store.tiers().write();
        placement::move_item(tiers.as_mut_slice(), item_id, target)?
    };
    if outcome == MoveOutcome::Moved {
        storage::persist_state(&store_snapshot(store));
    }
    Ok(outcome)
}

pub fn store_add_custom_item(store: &AppStore, draft: ToolItemDraft) -> Result<ToolItem> {
    let mut state = store_snapshot(store);
    let item = state.add_custom_item(draft)?;
    storage::persist_state(&state);
    store.custom_ai_items().write().push(item.clone());
    Ok(item)
}

pub fn store_update_item(store: &AppStore, id: &str, patch: ToolItemPatch) -> Result<ToolItem> {
    let mut state = store_snapshot(store);
    let updated = state.update_item(id, patch)?;
    storage::persist_state(&state);
    storage::refresh_items_cache(&state.ai_items);
    store_apply_state(store, state);
    Ok(updated)
}

pub fn store_add_tier(store: &AppStore, draft: TierDraft) -> Result<()> {
    let mut state = store_snapshot(store);
    state.add_tier(draft)?;
    storage::persist_state(&state);
    store_apply_state(store, state);
    Ok(())
}

pub fn store_edit_tier(
    store: &AppStore,
    tier_id: &str,
    name_zh: Option<String>,
    name_en: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let mut state = store_snapshot(store);
    state.edit_tier(tier_id, name_zh, name_en, color)?;
    storage::persist_state(&state);
    store_apply_state(store, state);
    Ok(())
}

/// Remove the bottom tier; its occupants become unranked.
pub fn store_remove_last_tier(store: &AppStore) -> Result<Tier> {
    let mut state = store_snapshot(store);
    let last_id = state
        .tiers
        .last()
        .map(|tier| tier.id.clone())
        .ok_or(star_chart_core::Error::TierMinimum(core_config::MIN_TIERS))?;
    let removed = state.remove_tier(&last_id)?;
    storage::persist_state(&state);
    store_apply_state(store, state);
    Ok(removed)
}

/// Back to the seeded board: custom tools and placements are dropped,
/// the loaded catalog stays.
pub fn store_reset(store: &AppStore) {
    storage::clear_state();
    *store.tiers().write() = core_config::default_tiers();
    *store.custom_ai_items().write() = Vec::new();
}
