//! End-to-end board scenarios: drag flows, tier management and the
//! export/import round trip, driven through the public API only.

use star_chart_core::codec;
use star_chart_core::config;
use star_chart_core::placement::{self, Location, MoveOutcome};
use star_chart_core::share;
use star_chart_core::{AppState, ToolItem, ToolItemDraft, ToolItemPatch};

fn tool(id: &str, name_en: &str) -> ToolItem {
    ToolItem {
        id: id.into(),
        name_en: name_en.into(),
        name_zh: String::new(),
        icon: String::new(),
        release_date: String::new(),
        tool_website: String::new(),
        description_en: String::new(),
        description_zh: String::new(),
        features: Default::default(),
    }
}

fn board() -> AppState {
    let mut state = AppState::with_default_tiers();
    state.tiers.truncate(2); // S and A, the configured minimum
    state.ai_items = vec![tool("AI001", "First")];
    state
}

#[test]
fn drag_scenario_from_pool_through_two_tiers() {
    let mut state = board();
    assert_eq!(state.unranked_items().len(), 1);

    let outcome =
        placement::move_item(&mut state.tiers, "AI001", &Location::Tier("S".into())).unwrap();
    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(state.tiers[0].items, vec!["AI001"]);
    assert!(state.tiers[1].items.is_empty());
    assert!(state.unranked_items().is_empty());

    let outcome =
        placement::move_item(&mut state.tiers, "AI001", &Location::Tier("A".into())).unwrap();
    assert_eq!(outcome, MoveOutcome::Moved);
    assert!(state.tiers[0].items.is_empty());
    assert_eq!(state.tiers[1].items, vec!["AI001"]);
}

#[test]
fn full_session_survives_a_save_and_share_cycle() {
    let mut state = AppState::with_default_tiers();
    state.ai_items = vec![tool("AI001", "First"), tool("AI002", "Second")];

    let added = state
        .add_custom_item(ToolItemDraft {
            name_en: "Mine".into(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(added.id, "AI003");

    placement::move_item(&mut state.tiers, "AI001", &Location::Tier("S".into())).unwrap();
    placement::move_item(&mut state.tiers, &added.id, &Location::Tier("B".into())).unwrap();

    // Save/reload: what localStorage does, minus the browser.
    let blob = serde_json::to_string(&state).unwrap();
    let mut reloaded = AppState::with_default_tiers();
    reloaded.ai_items = state.ai_items.clone();
    reloaded.merge_saved(serde_json::from_str(&blob).unwrap());
    reloaded.normalize_placements();
    assert_eq!(reloaded.tiers, state.tiers);
    assert_eq!(reloaded.custom_ai_items, state.custom_ai_items);

    // Share link: minimized payload, fresh catalog on the other side.
    let link_blob = share::encode(&state).unwrap();
    let mut other = AppState::with_default_tiers();
    other.ai_items = state.ai_items.clone();
    share::apply(&mut other, share::decode(&link_blob).unwrap());
    assert_eq!(
        placement::location_of(&other.tiers, "AI001"),
        Location::Tier("S".into())
    );
    assert!(other.get_item("AI003").is_some());
}

#[test]
fn export_reflects_the_model_and_reimports_cleanly() {
    let mut state = AppState::with_default_tiers();
    state.ai_items = vec![tool("AI001", "Commas, everywhere"), tool("AI002", "Plain")];
    placement::move_item(&mut state.tiers, "AI002", &Location::Tier("D".into())).unwrap();

    let rows = state.placed_items();
    assert_eq!(rows[0].tier(), None);
    assert_eq!(rows[1].tier(), Some("D"));

    let csv = codec::encode_items_csv(&rows).unwrap();
    let json = codec::encode_items_json(&rows).unwrap();
    assert_eq!(codec::decode_items_csv(&csv).unwrap(), rows);
    assert_eq!(codec::decode_items_json(&json).unwrap(), rows);

    // A fresh board seeded from the export lands items back in place.
    let mut fresh = AppState::with_default_tiers();
    let imported = codec::decode_items_json(&json).unwrap();
    for placed in &imported {
        fresh.ai_items.push(placed.item.clone());
    }
    for placed in &imported {
        if let Some(tier_id) = placed.tier() {
            placement::move_item(
                &mut fresh.tiers,
                &placed.item.id,
                &Location::Tier(tier_id.to_string()),
            )
            .unwrap();
        }
    }
    assert_eq!(
        placement::location_of(&fresh.tiers, "AI002"),
        Location::Tier("D".into())
    );
}

#[test]
fn tier_management_respects_bounds_and_frees_items() {
    let mut state = AppState::with_default_tiers();
    state.ai_items = vec![tool("AI001", "First")];
    let seeded = state.tiers.len();

    // Fill up to the cap.
    for n in seeded..config::MAX_TIERS {
        state
            .add_tier(star_chart_core::TierDraft {
                id: format!("T{n}"),
                name_en: format!("Tier {n}"),
                color: "#123456".into(),
                ..Default::default()
            })
            .unwrap();
    }
    assert!(state
        .add_tier(star_chart_core::TierDraft {
            id: "overflow".into(),
            name_en: "Overflow".into(),
            color: "#fff".into(),
            ..Default::default()
        })
        .is_err());

    placement::move_item(&mut state.tiers, "AI001", &Location::Tier("T5".into())).unwrap();
    let removed = state.remove_tier("T5").unwrap();
    assert_eq!(removed.items, vec!["AI001"]);
    assert_eq!(
        placement::location_of(&state.tiers, "AI001"),
        Location::Pool
    );

    // Shrink to the floor and verify the floor holds.
    while state.tiers.len() > config::MIN_TIERS {
        let last = state.tiers.last().unwrap().id.clone();
        state.remove_tier(&last).unwrap();
    }
    let last = state.tiers.last().unwrap().id.clone();
    assert!(state.remove_tier(&last).is_err());
    assert_eq!(state.tiers.len(), config::MIN_TIERS);
}

#[test]
fn editing_a_tool_patches_only_the_given_fields() {
    let mut state = board();
    state
        .update_item(
            "AI001",
            ToolItemPatch {
                description_en: Some("Updated **markdown**".into()),
                ..Default::default()
            },
        )
        .unwrap();
    let item = state.get_item("AI001").unwrap();
    assert_eq!(item.description_en, "Updated **markdown**");
    assert_eq!(item.name_en, "First");
}
