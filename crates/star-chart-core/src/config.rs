//! Board limits and the seeded tier set.

use crate::tier::Tier;

/// Removing a tier is refused once only this many remain.
pub const MIN_TIERS: usize = 2;
/// Adding a tier is refused at this count.
pub const MAX_TIERS: usize = 10;
/// Cap on user-created tool items.
pub const MAX_CUSTOM_ITEMS: usize = 20;

/// Prefix of generated tool ids (`AI001`, `AI002`, ...).
pub const ITEM_ID_PREFIX: &str = "AI";
/// Generated id numbers are zero-padded to this width.
pub const ITEM_ID_DIGITS: usize = 3;

/// Tier set seeded on first run.
pub fn default_tiers() -> Vec<Tier> {
    [
        ("S", "恆星級", "Stellar", "#ff7979"),
        ("A", "行星級", "Planetary", "#ffbe76"),
        ("B", "衛星級", "Satellite", "#f6e58d"),
        ("C", "彗星級", "Comet", "#7ed6df"),
        ("D", "隕石級", "Meteor", "#dff9fb"),
    ]
    .into_iter()
    .map(|(id, zh, en, color)| Tier {
        id: id.to_string(),
        name_zh: zh.to_string(),
        name_en: en.to_string(),
        color: color.to_string(),
        items: Vec::new(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_tiers_are_within_bounds() {
        let tiers = default_tiers();
        assert!(tiers.len() >= MIN_TIERS);
        assert!(tiers.len() <= MAX_TIERS);
        assert_eq!(tiers[0].id, "S");
        assert!(tiers.iter().all(|t| t.items.is_empty()));
    }
}
