//! Startup loading of the item/tier/feature resources.
//!
//! Cache-first: localStorage copies win, then the static files are
//! fetched. Any failure leaves the corresponding collection empty (or
//! seeded, for tiers) and the app keeps running degraded.

use star_chart_core::codec::{self, PlacedItem};
use star_chart_core::{config as core_config, FeatureDef, Tier};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config::{
    FEATURES_JSON_PATH, ITEMS_CACHE_KEY, ITEMS_CSV_PATH, ITEMS_JSON_PATH, TIERS_CACHE_KEY,
    TIERS_CSV_PATH,
};
use crate::storage;

fn log_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("[resources] {message}")));
}

fn js_err(value: JsValue) -> String {
    format!("{value:?}")
}

async fn fetch_text(path: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(js_err)?;
    let response: Response = response.dyn_into().map_err(|_| "not a Response".to_string())?;
    if !response.ok() {
        return Err(format!("GET {path} -> {}", response.status()));
    }
    let body = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    body.as_string().ok_or_else(|| "non-text body".to_string())
}

/// Load the tool catalog: cache, then JSON resource, then legacy CSV.
/// Returns items with their tier annotations from the resource.
pub async fn load_items() -> Vec<PlacedItem> {
    if let Some(cached) = storage::cached_text(ITEMS_CACHE_KEY) {
        match codec::decode_items_json(&cached) {
            Ok(items) => return items,
            Err(err) => log_warn(&format!("item cache unreadable ({err}), refetching")),
        }
    }

    match fetch_text(ITEMS_JSON_PATH).await {
        Ok(text) => match codec::decode_items_json(&text) {
            Ok(items) => {
                storage::cache_text(ITEMS_CACHE_KEY, &text);
                return items;
            }
            Err(err) => log_warn(&format!("{ITEMS_JSON_PATH} unreadable ({err})")),
        },
        Err(err) => log_warn(&err),
    }

    // Legacy CSV resource; recode the cache as JSON so the cache format
    // stays uniform.
    match fetch_text(ITEMS_CSV_PATH).await {
        Ok(text) => match codec::decode_items_csv(&text) {
            Ok(items) => {
                if let Ok(json) = codec::encode_items_json(&items) {
                    storage::cache_text(ITEMS_CACHE_KEY, &json);
                }
                items
            }
            Err(err) => {
                log_warn(&format!("{ITEMS_CSV_PATH} unreadable ({err})"));
                Vec::new()
            }
        },
        Err(err) => {
            log_warn(&err);
            Vec::new()
        }
    }
}

/// Load tier definitions: cache, then CSV resource, then the seeded
/// defaults.
pub async fn load_tiers() -> Vec<Tier> {
    if let Some(cached) = storage::cached_text(TIERS_CACHE_KEY) {
        match codec::decode_tiers_csv(&cached) {
            Ok(tiers) if !tiers.is_empty() => return tiers,
            Ok(_) => {}
            Err(err) => log_warn(&format!("tier cache unreadable ({err}), refetching")),
        }
    }

    match fetch_text(TIERS_CSV_PATH).await {
        Ok(text) => match codec::decode_tiers_csv(&text) {
            Ok(tiers) if !tiers.is_empty() => {
                storage::cache_text(TIERS_CACHE_KEY, &text);
                tiers
            }
            Ok(_) => core_config::default_tiers(),
            Err(err) => {
                log_warn(&format!("{TIERS_CSV_PATH} unreadable ({err})"));
                core_config::default_tiers()
            }
        },
        Err(err) => {
            log_warn(&err);
            core_config::default_tiers()
        }
    }
}

/// Load feature definitions for the score editor. Not cached: the list
/// is tiny and purely cosmetic.
pub async fn load_features() -> Vec<FeatureDef> {
    match fetch_text(FEATURES_JSON_PATH).await {
        Ok(text) => match serde_json::from_str(codec::strip_bom(&text)) {
            Ok(features) => features,
            Err(err) => {
                log_warn(&format!("{FEATURES_JSON_PATH} unreadable ({err})"));
                Vec::new()
            }
        },
        Err(err) => {
            log_warn(&err);
            Vec::new()
        }
    }
}
