//! Tool item records and their edit forms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One AI tool. Field names on the wire match the historical JSON/CSV
/// resources (`name_zh`, `releaseDate`, ...); the `name`/`description`
/// aliases accept the oldest single-language exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolItem {
    pub id: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default, alias = "name")]
    pub name_zh: String,
    #[serde(default)]
    pub icon: String,
    /// `YYYY-MM`, bare `YYYY`, or empty.
    #[serde(rename = "releaseDate", default)]
    pub release_date: String,
    #[serde(rename = "toolWebsite", default)]
    pub tool_website: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default, alias = "description")]
    pub description_zh: String,
    /// Feature-id to score. Only rated features have an entry; a stored
    /// 0 is kept but hidden from read-only display.
    #[serde(default)]
    pub features: BTreeMap<String, u8>,
}

impl ToolItem {
    /// Display name for the requested language, falling back to the
    /// other language when the preferred one is empty.
    pub fn display_name(&self, prefer_en: bool) -> &str {
        let (first, second) = if prefer_en {
            (&self.name_en, &self.name_zh)
        } else {
            (&self.name_zh, &self.name_en)
        };
        if first.is_empty() {
            second
        } else {
            first
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name_en.is_empty() || !self.name_zh.is_empty()
    }

    pub fn description(&self, prefer_en: bool) -> &str {
        if prefer_en {
            &self.description_en
        } else {
            &self.description_zh
        }
    }
}

/// Feature definition loaded from `data/features.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDef {
    pub id: String,
    #[serde(default)]
    pub name_zh: String,
    #[serde(default)]
    pub name_en: String,
}

impl FeatureDef {
    pub fn display_name(&self, prefer_en: bool) -> &str {
        let (first, second) = if prefer_en {
            (&self.name_en, &self.name_zh)
        } else {
            (&self.name_zh, &self.name_en)
        };
        if first.is_empty() {
            second
        } else {
            first
        }
    }
}

/// Input of the "add tool" form; the id is assigned by the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolItemDraft {
    pub name_en: String,
    pub name_zh: String,
    pub icon: String,
    pub release_date: String,
    pub tool_website: String,
    pub description_en: String,
    pub description_zh: String,
    pub features: BTreeMap<String, u8>,
}

/// Partial update from the edit form. `Some` fields win over the
/// existing record; `features` is replaced wholesale when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolItemPatch {
    pub name_en: Option<String>,
    pub name_zh: Option<String>,
    pub icon: Option<String>,
    pub release_date: Option<String>,
    pub tool_website: Option<String>,
    pub description_en: Option<String>,
    pub description_zh: Option<String>,
    pub features: Option<BTreeMap<String, u8>>,
}

/// Combine month/year form inputs into the stored `release_date`.
/// Month without a year keeps the month under a `0000` placeholder year.
pub fn build_release_date(month: &str, year: &str) -> String {
    let month = month.trim();
    let year = year.trim();
    if !year.is_empty() && !month.is_empty() {
        format!("{year}-{month:0>2}")
    } else if !year.is_empty() {
        year.to_string()
    } else if !month.is_empty() {
        format!("0000-{month:0>2}")
    } else {
        String::new()
    }
}

/// Split a stored `release_date` back into `(year, month)` form inputs.
pub fn split_release_date(date: &str) -> (String, String) {
    let mut parts = date.splitn(2, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    (year.to_string(), month.to_string())
}

/// Clamp an arbitrary numeric input into the 0..=100 score range.
pub fn clamp_score(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name_en: &str, name_zh: &str) -> ToolItem {
        ToolItem {
            id: "AI001".into(),
            name_en: name_en.into(),
            name_zh: name_zh.into(),
            icon: String::new(),
            release_date: String::new(),
            tool_website: String::new(),
            description_en: String::new(),
            description_zh: String::new(),
            features: BTreeMap::new(),
        }
    }

    #[test]
    fn display_name_falls_back_to_other_language() {
        let it = item("Claude", "");
        assert_eq!(it.display_name(false), "Claude");
        let it = item("", "克劳德");
        assert_eq!(it.display_name(true), "克劳德");
        let it = item("Claude", "克劳德");
        assert_eq!(it.display_name(true), "Claude");
        assert_eq!(it.display_name(false), "克劳德");
    }

    #[test]
    fn release_date_builds_and_splits() {
        assert_eq!(build_release_date("3", "2023"), "2023-03");
        assert_eq!(build_release_date("", "2023"), "2023");
        assert_eq!(build_release_date("11", ""), "0000-11");
        assert_eq!(build_release_date("", ""), "");

        assert_eq!(
            split_release_date("2023-03"),
            ("2023".to_string(), "03".to_string())
        );
        assert_eq!(split_release_date("2023"), ("2023".to_string(), String::new()));
        assert_eq!(split_release_date(""), (String::new(), String::new()));
    }

    #[test]
    fn scores_clamp_into_range() {
        assert_eq!(clamp_score(-5), 0);
        assert_eq!(clamp_score(42), 42);
        assert_eq!(clamp_score(900), 100);
    }

    #[test]
    fn legacy_single_language_fields_decode() {
        let raw = r#"{"id":"AI001","name":"旧名","description":"旧描述"}"#;
        let it: ToolItem = serde_json::from_str(raw).unwrap();
        assert_eq!(it.name_zh, "旧名");
        assert_eq!(it.description_zh, "旧描述");
        assert!(it.name_en.is_empty());
    }
}
