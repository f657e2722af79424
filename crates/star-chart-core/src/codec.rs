//! CSV and JSON codecs for the item and tier resources.
//!
//! CSV goes through a real quoted-field parser: fields containing
//! commas, quotes or newlines survive a round trip. Decoding is
//! header-driven and keeps accepting the historical header variants
//! (`name`/`description` for the Chinese fields, camelCase date and
//! website columns). Encoded CSV starts with a UTF-8 BOM so
//! spreadsheets open it correctly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::item::{clamp_score, ToolItem};
use crate::tier::Tier;

/// An item plus its tier annotation as it travels through export
/// files. An empty `tier_id` means unranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    #[serde(flatten)]
    pub item: ToolItem,
    #[serde(default)]
    pub tier_id: String,
}

impl PlacedItem {
    pub fn tier(&self) -> Option<&str> {
        if self.tier_id.is_empty() {
            None
        } else {
            Some(&self.tier_id)
        }
    }
}

const ITEMS_HEADER: [&str; 10] = [
    "id",
    "name_zh",
    "name_en",
    "icon",
    "release_date",
    "tool_website",
    "description_zh",
    "description_en",
    "features",
    "tier_id",
];

const TIERS_HEADER: [&str; 4] = ["tier_id", "tier_name_zh", "tier_name_en", "tier_color"];

pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

// ---- items ----

pub fn decode_items_json(text: &str) -> Result<Vec<PlacedItem>> {
    let items: Vec<PlacedItem> = serde_json::from_str(strip_bom(text))?;
    Ok(items)
}

pub fn encode_items_json(rows: &[PlacedItem]) -> Result<String> {
    if rows.is_empty() {
        return Err(Error::NothingToSave);
    }
    Ok(serde_json::to_string_pretty(rows)?)
}

pub fn decode_items_csv(text: &str) -> Result<Vec<PlacedItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(strip_bom(text).as_bytes());
    let headers = reader.headers()?.clone();

    let index_of =
        |name: &str| -> Option<usize> { headers.iter().position(|header| header == name) };

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let first = |names: &[&str]| -> String {
            names
                .iter()
                .find_map(|name| index_of(name).and_then(|i| record.get(i)))
                .unwrap_or_default()
                .to_string()
        };

        let id = first(&["id"]);
        if id.is_empty() {
            log::warn!("items csv: row {} has no id, skipping", index + 2);
            continue;
        }
        let item = ToolItem {
            id,
            name_zh: first(&["name_zh", "name"]),
            name_en: first(&["name_en"]),
            icon: first(&["icon"]),
            release_date: first(&["release_date", "releaseDate"]),
            tool_website: first(&["tool_website", "toolWebsite"]),
            description_zh: first(&["description_zh", "description"]),
            description_en: first(&["description_en"]),
            features: decode_features_field(&first(&["features"])),
        };
        rows.push(PlacedItem {
            item,
            tier_id: first(&["tier_id"]),
        });
    }
    Ok(rows)
}

pub fn encode_items_csv(rows: &[PlacedItem]) -> Result<String> {
    if rows.is_empty() {
        return Err(Error::NothingToSave);
    }
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(ITEMS_HEADER)?;
    for row in rows {
        let item = &row.item;
        writer.write_record([
            item.id.as_str(),
            item.name_zh.as_str(),
            item.name_en.as_str(),
            item.icon.as_str(),
            item.release_date.as_str(),
            item.tool_website.as_str(),
            item.description_zh.as_str(),
            item.description_en.as_str(),
            &encode_features_field(&item.features)?,
            row.tier_id.as_str(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(with_bom(&String::from_utf8_lossy(&bytes)))
}

// ---- tiers ----

pub fn decode_tiers_csv(text: &str) -> Result<Vec<Tier>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(strip_bom(text).as_bytes());
    let headers = reader.headers()?.clone();

    let mut tiers = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |name: &str| -> String {
            headers
                .iter()
                .position(|header| header == name)
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        let id = field("tier_id");
        if id.is_empty() {
            continue;
        }
        tiers.push(Tier {
            id,
            name_zh: field("tier_name_zh"),
            name_en: field("tier_name_en"),
            color: field("tier_color"),
            items: Vec::new(),
        });
    }
    Ok(tiers)
}

pub fn encode_tiers_csv(tiers: &[Tier]) -> Result<String> {
    if tiers.is_empty() {
        return Err(Error::NothingToSave);
    }
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TIERS_HEADER)?;
    for tier in tiers {
        writer.write_record([
            tier.id.as_str(),
            tier.name_zh.as_str(),
            tier.name_en.as_str(),
            tier.color.as_str(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(with_bom(&String::from_utf8_lossy(&bytes)))
}

// ---- helpers ----

fn with_bom(text: &str) -> String {
    format!("\u{feff}{text}")
}

/// The CSV `features` column carries the score map as embedded JSON;
/// the JSON export carries it natively.
fn decode_features_field(raw: &str) -> BTreeMap<String, u8> {
    if raw.is_empty() {
        return BTreeMap::new();
    }
    match serde_json::from_str::<BTreeMap<String, i64>>(raw) {
        Ok(scores) => scores
            .into_iter()
            .map(|(id, score)| (id, clamp_score(score)))
            .collect(),
        Err(err) => {
            log::warn!("items csv: unreadable features field ({err}), dropping");
            BTreeMap::new()
        }
    }
}

fn encode_features_field(features: &BTreeMap<String, u8>) -> Result<String> {
    if features.is_empty() {
        return Ok(String::new());
    }
    Ok(serde_json::to_string(features)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlacedItem {
        PlacedItem {
            item: ToolItem {
                id: "AI001".into(),
                name_en: "Claude".into(),
                name_zh: "克劳德".into(),
                icon: "https://example.com/icon.png".into(),
                release_date: "2023-03".into(),
                tool_website: "https://claude.ai".into(),
                description_en: "hello, world".into(),
                description_zh: "你好，世界".into(),
                features: [("coding".to_string(), 90u8), ("vision".to_string(), 0u8)]
                    .into_iter()
                    .collect(),
            },
            tier_id: "S".into(),
        }
    }

    #[test]
    fn quoted_comma_fields_decode_intact() {
        let csv = "id,name_zh,name_en,icon,description_zh,description_en,tier_id\n\
                   AI001,工具,Tool,,描述,\"hello, world\",S\n";
        let rows = decode_items_csv(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item.description_en, "hello, world");
        assert_eq!(rows[0].tier(), Some("S"));
    }

    #[test]
    fn bom_and_legacy_headers_are_tolerated() {
        let csv = "\u{feff}id,name,description\nAI001,旧名,旧描述\n";
        let rows = decode_items_csv(csv).unwrap();
        assert_eq!(rows[0].item.name_zh, "旧名");
        assert_eq!(rows[0].item.description_zh, "旧描述");
        assert_eq!(rows[0].tier(), None);
    }

    #[test]
    fn items_csv_round_trips() {
        let rows = vec![sample()];
        let encoded = encode_items_csv(&rows).unwrap();
        assert!(encoded.starts_with('\u{feff}'));
        let decoded = decode_items_csv(&encoded).unwrap();
        assert_eq!(decoded, rows);
    }

    #[test]
    fn items_json_round_trips() {
        let rows = vec![sample()];
        let encoded = encode_items_json(&rows).unwrap();
        let decoded = decode_items_json(&encoded).unwrap();
        assert_eq!(decoded, rows);
    }

    #[test]
    fn json_decode_accepts_missing_optional_fields() {
        let rows = decode_items_json(r#"[{"id":"AI001","name_en":"Tool"}]"#).unwrap();
        assert_eq!(rows[0].item.name_en, "Tool");
        assert!(rows[0].item.features.is_empty());
        assert_eq!(rows[0].tier(), None);
    }

    #[test]
    fn empty_input_is_an_error_not_a_wipe() {
        assert!(matches!(encode_items_csv(&[]), Err(Error::NothingToSave)));
        assert!(matches!(encode_items_json(&[]), Err(Error::NothingToSave)));
        assert!(matches!(encode_tiers_csv(&[]), Err(Error::NothingToSave)));
    }

    #[test]
    fn rows_without_ids_are_skipped() {
        let csv = "id,name_en\n,NoId\nAI002,Kept\n";
        let rows = decode_items_csv(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item.id, "AI002");
    }

    #[test]
    fn tiers_csv_round_trips() {
        let tiers = vec![
            Tier {
                id: "S".into(),
                name_zh: "恆星級".into(),
                name_en: "Stellar, top".into(),
                color: "#ff7979".into(),
                items: Vec::new(),
            },
            Tier {
                id: "A".into(),
                name_zh: String::new(),
                name_en: "Planetary".into(),
                color: "#ffbe76".into(),
                items: Vec::new(),
            },
        ];
        let encoded = encode_tiers_csv(&tiers).unwrap();
        let decoded = decode_tiers_csv(&encoded).unwrap();
        assert_eq!(decoded, tiers);
    }

    #[test]
    fn tier_header_matches_the_published_format() {
        let tiers = vec![Tier {
            id: "S".into(),
            name_zh: "恆星級".into(),
            name_en: "Stellar".into(),
            color: "#ff7979".into(),
            items: Vec::new(),
        }];
        let encoded = encode_tiers_csv(&tiers).unwrap();
        let first_line = strip_bom(&encoded).lines().next().unwrap();
        assert_eq!(first_line, "tier_id,tier_name_zh,tier_name_en,tier_color");
    }
}
