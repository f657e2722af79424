//! Item catalog helpers: lookup, id assignment and patch merging.

use crate::config::{ITEM_ID_DIGITS, ITEM_ID_PREFIX};
use crate::error::{Error, Result};
use crate::item::{ToolItem, ToolItemDraft, ToolItemPatch};

pub fn find_item<'a>(items: &'a [ToolItem], id: &str) -> Option<&'a ToolItem> {
    items.iter().find(|item| item.id == id)
}

/// Next generated id: the highest numeric suffix among ids shaped like
/// `AI` + digits, plus one, zero-padded to three digits.
pub fn next_item_id(items: &[ToolItem]) -> String {
    let max = items
        .iter()
        .filter_map(|item| item.id.strip_prefix(ITEM_ID_PREFIX))
        .filter(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|rest| rest.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{ITEM_ID_PREFIX}{:0width$}", max + 1, width = ITEM_ID_DIGITS)
}

/// A draft must carry a name in at least one language.
pub fn validate_draft(draft: &ToolItemDraft) -> Result<()> {
    if draft.name_en.trim().is_empty() && draft.name_zh.trim().is_empty() {
        return Err(Error::NameRequired);
    }
    Ok(())
}

pub fn item_from_draft(id: String, draft: ToolItemDraft) -> ToolItem {
    ToolItem {
        id,
        name_en: draft.name_en.trim().to_string(),
        name_zh: draft.name_zh.trim().to_string(),
        icon: draft.icon.trim().to_string(),
        release_date: draft.release_date,
        tool_website: draft.tool_website.trim().to_string(),
        description_en: draft.description_en,
        description_zh: draft.description_zh,
        features: draft.features,
    }
}

/// Shallow merge: every `Some` field of the patch wins.
pub fn apply_patch(item: &mut ToolItem, patch: ToolItemPatch) {
    if let Some(name_en) = patch.name_en {
        item.name_en = name_en;
    }
    if let Some(name_zh) = patch.name_zh {
        item.name_zh = name_zh;
    }
    if let Some(icon) = patch.icon {
        item.icon = icon;
    }
    if let Some(release_date) = patch.release_date {
        item.release_date = release_date;
    }
    if let Some(tool_website) = patch.tool_website {
        item.tool_website = tool_website;
    }
    if let Some(description_en) = patch.description_en {
        item.description_en = description_en;
    }
    if let Some(description_zh) = patch.description_zh {
        item.description_zh = description_zh;
    }
    if let Some(features) = patch.features {
        item.features = features;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: &str) -> ToolItem {
        ToolItem {
            id: id.into(),
            name_en: "x".into(),
            name_zh: String::new(),
            icon: String::new(),
            release_date: String::new(),
            tool_website: String::new(),
            description_en: String::new(),
            description_zh: String::new(),
            features: Default::default(),
        }
    }

    #[test]
    fn next_id_increments_highest_suffix() {
        let items = vec![named("AI002"), named("AI007"), named("AI001")];
        assert_eq!(next_item_id(&items), "AI008");
    }

    #[test]
    fn next_id_ignores_foreign_id_shapes() {
        let items = vec![named("tool-1"), named("AIxx"), named("AI"), named("AI004")];
        assert_eq!(next_item_id(&items), "AI005");
    }

    #[test]
    fn next_id_on_empty_catalog_starts_at_one() {
        assert_eq!(next_item_id(&[]), "AI001");
    }

    #[test]
    fn next_id_grows_past_the_padding() {
        let items = vec![named("AI999")];
        assert_eq!(next_item_id(&items), "AI1000");
    }

    #[test]
    fn draft_without_any_name_is_rejected() {
        let draft = ToolItemDraft {
            name_en: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(validate_draft(&draft), Err(Error::NameRequired)));

        let draft = ToolItemDraft {
            name_zh: "克劳德".into(),
            ..Default::default()
        };
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn patch_merges_shallowly() {
        let mut item = named("AI001");
        item.icon = "old.png".into();
        apply_patch(
            &mut item,
            ToolItemPatch {
                name_en: Some("New".into()),
                ..Default::default()
            },
        );
        assert_eq!(item.name_en, "New");
        assert_eq!(item.icon, "old.png");
    }
}
