//! Share-link payloads.
//!
//! A link carries the minimized state (tiers with their placements
//! plus the user's custom items; the stock catalog reloads from the
//! resource) as JSON wrapped in standard base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::item::ToolItem;
use crate::state::AppState;
use crate::tier::Tier;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharePayload {
    #[serde(default)]
    pub tiers: Vec<Tier>,
    #[serde(rename = "customAIItems", default)]
    pub custom_ai_items: Vec<ToolItem>,
}

pub fn minimize(state: &AppState) -> SharePayload {
    SharePayload {
        tiers: state.tiers.clone(),
        custom_ai_items: state.custom_ai_items.clone(),
    }
}

pub fn encode(state: &AppState) -> Result<String> {
    let json = serde_json::to_string(&minimize(state))?;
    Ok(STANDARD.encode(json.as_bytes()))
}

pub fn decode(encoded: &str) -> Result<SharePayload> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| Error::SharePayload(e.to_string()))?;
    let json = String::from_utf8(bytes).map_err(|e| Error::SharePayload(e.to_string()))?;
    Ok(serde_json::from_str(&json)?)
}

/// Overlay a decoded payload on the loaded state, then re-normalize so
/// a hand-edited link cannot corrupt placements.
pub fn apply(state: &mut AppState, payload: SharePayload) {
    state.custom_ai_items = payload.custom_ai_items;
    state.merge_tiers(payload.tiers);
    state.normalize_placements();
}
