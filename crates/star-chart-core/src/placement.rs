//! Placement of items into tiers.
//!
//! The invariant this module maintains: every known item id is in
//! exactly one place, either a single tier's `items` list or the
//! implicit unranked pool (absence from every tier).

use crate::error::{Error, Result};
use crate::tier::Tier;

/// Where an item currently lives, or where a drop wants it to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The unranked pool. Membership is implicit; nothing is stored.
    Pool,
    Tier(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The item was dropped back onto its current container; nothing
    /// changed and the caller must not persist.
    NoOp,
}

/// Current location of `item_id`: the first tier listing it, else Pool.
pub fn location_of(tiers: &[Tier], item_id: &str) -> Location {
    tiers
        .iter()
        .find(|tier| tier.items.iter().any(|id| id == item_id))
        .map(|tier| Location::Tier(tier.id.clone()))
        .unwrap_or(Location::Pool)
}

/// Move `item_id` to `target`.
///
/// The target is resolved before anything is touched, so an unknown
/// tier id leaves the board unchanged. A completed move first removes
/// the id from every tier; that also heals a board that was already
/// inconsistent (the same id listed twice).
pub fn move_item(tiers: &mut [Tier], item_id: &str, target: &Location) -> Result<MoveOutcome> {
    if location_of(tiers, item_id) == *target {
        return Ok(MoveOutcome::NoOp);
    }

    let target_index = match target {
        Location::Pool => None,
        Location::Tier(tier_id) => {
            let Some(index) = tiers.iter().position(|tier| tier.id == *tier_id) else {
                log::warn!("move of `{item_id}` aborted: no tier `{tier_id}` on the board");
                return Err(Error::UnknownTier(tier_id.clone()));
            };
            Some(index)
        }
    };

    for tier in tiers.iter_mut() {
        tier.items.retain(|id| id != item_id);
    }

    if let Some(index) = target_index {
        let items = &mut tiers[index].items;
        if !items.iter().any(|id| id == item_id) {
            items.push(item_id.to_string());
        }
    }

    Ok(MoveOutcome::Moved)
}

/// True when no item id appears in more than one tier.
pub fn is_consistent(tiers: &[Tier]) -> bool {
    let mut seen = std::collections::HashSet::new();
    tiers
        .iter()
        .flat_map(|tier| tier.items.iter())
        .all(|id| seen.insert(id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Vec<Tier> {
        ["S", "A"]
            .into_iter()
            .map(|id| Tier {
                id: id.to_string(),
                name_zh: String::new(),
                name_en: String::new(),
                color: "#fff".to_string(),
                items: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn moving_between_tiers_keeps_one_location() {
        let mut tiers = board();

        assert_eq!(location_of(&tiers, "AI001"), Location::Pool);
        let outcome = move_item(&mut tiers, "AI001", &Location::Tier("S".into())).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(tiers[0].items, vec!["AI001"]);
        assert!(tiers[1].items.is_empty());

        move_item(&mut tiers, "AI001", &Location::Tier("A".into())).unwrap();
        assert!(tiers[0].items.is_empty());
        assert_eq!(tiers[1].items, vec!["AI001"]);
        assert!(is_consistent(&tiers));
    }

    #[test]
    fn dropping_on_current_container_is_a_no_op() {
        let mut tiers = board();
        move_item(&mut tiers, "AI001", &Location::Tier("S".into())).unwrap();

        let before = tiers.clone();
        let outcome = move_item(&mut tiers, "AI001", &Location::Tier("S".into())).unwrap();
        assert_eq!(outcome, MoveOutcome::NoOp);
        assert_eq!(tiers, before);

        let outcome = move_item(&mut tiers, "AI999", &Location::Pool).unwrap();
        assert_eq!(outcome, MoveOutcome::NoOp);
        assert_eq!(tiers, before);
    }

    #[test]
    fn moving_to_pool_removes_from_all_tiers() {
        let mut tiers = board();
        move_item(&mut tiers, "AI001", &Location::Tier("A".into())).unwrap();
        move_item(&mut tiers, "AI001", &Location::Pool).unwrap();
        assert_eq!(location_of(&tiers, "AI001"), Location::Pool);
        assert!(tiers.iter().all(|t| t.items.is_empty()));
    }

    #[test]
    fn unknown_target_tier_leaves_board_unchanged() {
        let mut tiers = board();
        move_item(&mut tiers, "AI001", &Location::Tier("S".into())).unwrap();
        let before = tiers.clone();

        let err = move_item(&mut tiers, "AI001", &Location::Tier("Z".into())).unwrap_err();
        assert!(matches!(err, Error::UnknownTier(id) if id == "Z"));
        assert_eq!(tiers, before);
    }

    #[test]
    fn completed_move_heals_a_duplicated_id() {
        let mut tiers = board();
        // Corrupt the board by hand: the same id in both tiers.
        tiers[0].items.push("AI001".into());
        tiers[1].items.push("AI001".into());
        assert!(!is_consistent(&tiers));

        move_item(&mut tiers, "AI001", &Location::Tier("A".into())).unwrap();
        assert!(tiers[0].items.is_empty());
        assert_eq!(tiers[1].items, vec!["AI001"]);
        assert!(is_consistent(&tiers));
    }

    #[test]
    fn ordering_within_a_tier_is_insertion_order() {
        let mut tiers = board();
        for id in ["AI003", "AI001", "AI002"] {
            move_item(&mut tiers, id, &Location::Tier("S".into())).unwrap();
        }
        assert_eq!(tiers[0].items, vec!["AI003", "AI001", "AI002"]);
    }
}
