//! The persisted application state: tiers plus the two item lists.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::codec::PlacedItem;
use crate::config::{self, MAX_CUSTOM_ITEMS, MAX_TIERS, MIN_TIERS};
use crate::error::{Error, Result};
use crate::item::{ToolItem, ToolItemDraft, ToolItemPatch};
use crate::placement::{self, Location};
use crate::tier::{Tier, TierDraft};

/// Everything the board needs to come back after a reload. Wire names
/// (`aiItems`, `customAIItems`) match the historical localStorage blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub tiers: Vec<Tier>,
    #[serde(rename = "aiItems", default)]
    pub ai_items: Vec<ToolItem>,
    #[serde(rename = "customAIItems", default)]
    pub custom_ai_items: Vec<ToolItem>,
}

impl AppState {
    pub fn with_default_tiers() -> Self {
        Self {
            tiers: config::default_tiers(),
            ..Default::default()
        }
    }

    pub fn all_items(&self) -> impl Iterator<Item = &ToolItem> {
        self.ai_items.iter().chain(self.custom_ai_items.iter())
    }

    pub fn get_item(&self, id: &str) -> Option<&ToolItem> {
        self.all_items().find(|item| item.id == id)
    }

    /// Items not placed in any tier, in catalog order.
    pub fn unranked_items(&self) -> Vec<&ToolItem> {
        self.all_items()
            .filter(|item| placement::location_of(&self.tiers, &item.id) == Location::Pool)
            .collect()
    }

    /// Every item annotated with its current tier, for export. Reads
    /// the model only; the render tree never participates.
    pub fn placed_items(&self) -> Vec<PlacedItem> {
        self.all_items()
            .map(|item| {
                let tier_id = match placement::location_of(&self.tiers, &item.id) {
                    Location::Tier(id) => id,
                    Location::Pool => String::new(),
                };
                PlacedItem {
                    item: item.clone(),
                    tier_id,
                }
            })
            .collect()
    }

    // ---- item operations ----

    pub fn add_custom_item(&mut self, draft: ToolItemDraft) -> Result<ToolItem> {
        catalog::validate_draft(&draft)?;
        if self.custom_ai_items.len() >= MAX_CUSTOM_ITEMS {
            return Err(Error::CustomItemLimit(MAX_CUSTOM_ITEMS));
        }
        let all: Vec<ToolItem> = self.all_items().cloned().collect();
        let id = catalog::next_item_id(&all);
        let item = catalog::item_from_draft(id, draft);
        self.custom_ai_items.push(item.clone());
        Ok(item)
    }

    /// Merge `patch` onto the item; the patch is validated against the
    /// merged result first, so a failed update changes nothing.
    pub fn update_item(&mut self, id: &str, patch: ToolItemPatch) -> Result<ToolItem> {
        let slot = self
            .ai_items
            .iter_mut()
            .chain(self.custom_ai_items.iter_mut())
            .find(|item| item.id == id)
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))?;

        let mut merged = slot.clone();
        catalog::apply_patch(&mut merged, patch);
        if !merged.has_name() {
            return Err(Error::NameRequired);
        }
        *slot = merged.clone();
        Ok(merged)
    }

    // ---- tier operations ----

    pub fn add_tier(&mut self, draft: TierDraft) -> Result<()> {
        let id = draft.id.trim();
        if id.is_empty() {
            return Err(Error::TierIdEmpty);
        }
        if self
            .tiers
            .iter()
            .any(|tier| tier.id.to_lowercase() == id.to_lowercase())
        {
            return Err(Error::DuplicateTierId(id.to_string()));
        }
        if draft.name_zh.trim().is_empty() && draft.name_en.trim().is_empty() {
            return Err(Error::NameRequired);
        }
        if draft.color.trim().is_empty() {
            return Err(Error::TierColorEmpty);
        }
        if self.tiers.len() >= MAX_TIERS {
            return Err(Error::TierLimit(MAX_TIERS));
        }
        self.tiers.push(Tier {
            id: id.to_string(),
            name_zh: draft.name_zh.trim().to_string(),
            name_en: draft.name_en.trim().to_string(),
            color: draft.color.trim().to_string(),
            items: Vec::new(),
        });
        Ok(())
    }

    /// Remove a tier; its occupants simply become unranked. Refused at
    /// the minimum tier count.
    pub fn remove_tier(&mut self, tier_id: &str) -> Result<Tier> {
        if self.tiers.len() <= MIN_TIERS {
            return Err(Error::TierMinimum(MIN_TIERS));
        }
        let index = self
            .tiers
            .iter()
            .position(|tier| tier.id == tier_id)
            .ok_or_else(|| Error::UnknownTier(tier_id.to_string()))?;
        let removed = self.tiers.remove(index);
        if !removed.items.is_empty() {
            log::warn!(
                "tier `{}` removed with {} item(s); they return to the pool",
                removed.id,
                removed.items.len()
            );
        }
        Ok(removed)
    }

    pub fn edit_tier(
        &mut self,
        tier_id: &str,
        name_zh: Option<String>,
        name_en: Option<String>,
        color: Option<String>,
    ) -> Result<()> {
        let tier = self
            .tiers
            .iter_mut()
            .find(|tier| tier.id == tier_id)
            .ok_or_else(|| Error::UnknownTier(tier_id.to_string()))?;
        if let Some(name_zh) = name_zh {
            tier.name_zh = name_zh;
        }
        if let Some(name_en) = name_en {
            tier.name_en = name_en;
        }
        if let Some(color) = color {
            tier.color = color;
        }
        Ok(())
    }

    // ---- load-time merging ----

    /// Overlay a saved state: custom items are taken wholesale, saved
    /// tiers update matching ids and unknown saved tiers are appended.
    /// The authoritative `ai_items` list is not replaced; only its
    /// placements travel through `tiers`.
    pub fn merge_saved(&mut self, saved: AppState) {
        self.custom_ai_items = saved.custom_ai_items;
        self.merge_tiers(saved.tiers);
    }

    pub fn merge_tiers(&mut self, incoming: Vec<Tier>) {
        for saved_tier in incoming {
            match self.tiers.iter_mut().find(|tier| tier.id == saved_tier.id) {
                Some(existing) => {
                    existing.name_zh = saved_tier.name_zh;
                    existing.name_en = saved_tier.name_en;
                    existing.color = saved_tier.color;
                    existing.items = saved_tier.items;
                }
                None => self.tiers.push(saved_tier),
            }
        }
    }

    /// Drop placements of unknown items and duplicate placements
    /// (first occurrence wins), so merged external data cannot violate
    /// the one-location invariant.
    pub fn normalize_placements(&mut self) {
        let known: std::collections::HashSet<String> =
            self.all_items().map(|item| item.id.clone()).collect();
        let mut seen = std::collections::HashSet::new();
        for tier in &mut self.tiers {
            tier.items
                .retain(|id| known.contains(id) && seen.insert(id.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ToolItem {
        ToolItem {
            id: id.into(),
            name_en: id.into(),
            name_zh: String::new(),
            icon: String::new(),
            release_date: String::new(),
            tool_website: String::new(),
            description_en: String::new(),
            description_zh: String::new(),
            features: Default::default(),
        }
    }

    fn state() -> AppState {
        let mut state = AppState::with_default_tiers();
        state.ai_items = vec![item("AI001"), item("AI002")];
        state
    }

    #[test]
    fn add_custom_item_assigns_next_id() {
        let mut state = state();
        state.ai_items.push(item("AI007"));
        let added = state
            .add_custom_item(ToolItemDraft {
                name_en: "Foo".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(added.id, "AI008");
        assert_eq!(state.custom_ai_items.len(), 1);
    }

    #[test]
    fn add_custom_item_honors_the_cap() {
        let mut state = state();
        for n in 0..MAX_CUSTOM_ITEMS {
            state
                .add_custom_item(ToolItemDraft {
                    name_en: format!("tool {n}"),
                    ..Default::default()
                })
                .unwrap();
        }
        let err = state
            .add_custom_item(ToolItemDraft {
                name_en: "one too many".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::CustomItemLimit(_)));
        assert_eq!(state.custom_ai_items.len(), MAX_CUSTOM_ITEMS);
    }

    #[test]
    fn update_missing_item_fails() {
        let mut state = state();
        let err = state
            .update_item("AI999", ToolItemPatch::default())
            .unwrap_err();
        assert!(matches!(err, Error::ItemNotFound(_)));
    }

    #[test]
    fn update_cannot_blank_both_names() {
        let mut state = state();
        let err = state
            .update_item(
                "AI001",
                ToolItemPatch {
                    name_en: Some(String::new()),
                    name_zh: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::NameRequired));
        assert_eq!(state.get_item("AI001").unwrap().name_en, "AI001");
    }

    #[test]
    fn duplicate_tier_id_is_rejected_case_insensitively() {
        let mut state = state();
        let before = state.tiers.clone();
        let err = state
            .add_tier(TierDraft {
                id: "s".into(),
                name_en: "Again".into(),
                color: "#fff".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateTierId(_)));
        assert_eq!(state.tiers, before);
    }

    #[test]
    fn tier_validation_rejects_empty_fields() {
        let mut state = state();
        assert!(matches!(
            state.add_tier(TierDraft::default()),
            Err(Error::TierIdEmpty)
        ));
        assert!(matches!(
            state.add_tier(TierDraft {
                id: "F".into(),
                color: "#fff".into(),
                ..Default::default()
            }),
            Err(Error::NameRequired)
        ));
        assert!(matches!(
            state.add_tier(TierDraft {
                id: "F".into(),
                name_en: "Frontier".into(),
                ..Default::default()
            }),
            Err(Error::TierColorEmpty)
        ));
    }

    #[test]
    fn remove_tier_refuses_at_minimum() {
        let mut state = state();
        state.tiers.truncate(MIN_TIERS);
        let before = state.tiers.clone();
        let err = state.remove_tier("A").unwrap_err();
        assert!(matches!(err, Error::TierMinimum(_)));
        assert_eq!(state.tiers, before);
    }

    #[test]
    fn removed_tier_items_become_unranked() {
        let mut state = state();
        placement::move_item(&mut state.tiers, "AI001", &Location::Tier("B".into())).unwrap();
        state.remove_tier("B").unwrap();
        assert_eq!(
            placement::location_of(&state.tiers, "AI001"),
            Location::Pool
        );
        assert!(state.unranked_items().iter().any(|i| i.id == "AI001"));
    }

    #[test]
    fn merge_saved_updates_and_appends_tiers() {
        let mut state = state();
        let mut saved = AppState::default();
        saved.custom_ai_items = vec![item("AI100")];
        saved.tiers = vec![
            Tier {
                id: "S".into(),
                name_zh: "改名".into(),
                name_en: "Renamed".into(),
                color: "#123456".into(),
                items: vec!["AI001".into()],
            },
            Tier {
                id: "F".into(),
                name_zh: String::new(),
                name_en: "Extra".into(),
                color: "#abcdef".into(),
                items: Vec::new(),
            },
        ];
        state.merge_saved(saved);

        assert_eq!(state.custom_ai_items.len(), 1);
        let s = state.tiers.iter().find(|t| t.id == "S").unwrap();
        assert_eq!(s.name_en, "Renamed");
        assert_eq!(s.items, vec!["AI001"]);
        assert!(state.tiers.iter().any(|t| t.id == "F"));
    }

    #[test]
    fn normalize_drops_unknown_and_duplicate_placements() {
        let mut state = state();
        state.tiers[0].items = vec!["AI001".into(), "AI404".into()];
        state.tiers[1].items = vec!["AI001".into(), "AI002".into()];
        state.normalize_placements();

        assert_eq!(state.tiers[0].items, vec!["AI001"]);
        assert_eq!(state.tiers[1].items, vec!["AI002"]);
        assert!(placement::is_consistent(&state.tiers));
    }

    #[test]
    fn placed_items_annotate_current_tiers() {
        let mut state = state();
        placement::move_item(&mut state.tiers, "AI002", &Location::Tier("S".into())).unwrap();
        let placed = state.placed_items();
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].tier_id, "");
        assert_eq!(placed[1].tier_id, "S");
    }
}
