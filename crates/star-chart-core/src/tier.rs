//! Ranking tiers.

use serde::{Deserialize, Serialize};

/// A named, colored ranking bucket. `items` holds the ordered ids of
/// the tools placed in it; an id may appear in at most one tier across
/// the whole board (see [`crate::placement`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub id: String,
    #[serde(default, alias = "name")]
    pub name_zh: String,
    #[serde(default)]
    pub name_en: String,
    pub color: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl Tier {
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

    /// Contrasting label color for this tier's background.
    pub fn text_color(&self) -> &'static str {
        match parse_hex(&self.color) {
            Some((r, g, b)) => {
                // Perceived luminance, 0..=255.
                let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
                if luma > 150.0 {
                    "#222f3e"
                } else {
                    "#ffffff"
                }
            }
            None => "#222f3e",
        }
    }
}

/// Input of the "add tier" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierDraft {
    pub id: String,
    pub name_zh: String,
    pub name_en: String,
    pub color: String,
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut parts = hex.chars().map(|c| {
                u8::from_str_radix(&c.to_string(), 16)
                    .ok()
                    .map(|v| v * 17)
            });
            Some((parts.next()??, parts.next()??, parts.next()??))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(color: &str) -> Tier {
        Tier {
            id: "S".into(),
            name_zh: "恆星級".into(),
            name_en: "Stellar".into(),
            color: color.into(),
            items: Vec::new(),
        }
    }

    #[test]
    fn light_backgrounds_get_dark_text() {
        assert_eq!(tier("#f6e58d").text_color(), "#222f3e");
        assert_eq!(tier("#ffffff").text_color(), "#222f3e");
    }

    #[test]
    fn dark_backgrounds_get_light_text() {
        assert_eq!(tier("#130f40").text_color(), "#ffffff");
        assert_eq!(tier("#000").text_color(), "#ffffff");
    }

    #[test]
    fn garbage_colors_fall_back_to_dark_text() {
        assert_eq!(tier("rebeccapurple").text_color(), "#222f3e");
        assert_eq!(tier("").text_color(), "#222f3e");
    }

    #[test]
    fn display_name_prefers_requested_language() {
        let t = tier("#fff");
        assert_eq!(t.display_name(true), "Stellar");
        assert_eq!(t.display_name(false), "恆星級");
    }
}
