//! localStorage persistence and the shareable-link plumbing.
//!
//! Every failure path degrades: a missing or unreadable value behaves
//! like an empty browser, with a console warning left behind.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use star_chart_core::codec::{self, PlacedItem};
use star_chart_core::share::{self, SharePayload};
use star_chart_core::{AppState, ToolItem};
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::config::{
    ITEMS_CACHE_KEY, LANG_STORAGE_KEY, MODAL_LANG_KEY_PREFIX, SHARE_PARAM, STATE_STORAGE_KEY,
};
use crate::i18n::Lang;

/// Characters escaped inside the share query parameter; base64 uses
/// `+`, `/` and `=`, which are all significant in a query string.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'+')
    .add(b'&')
    .add(b'=');

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn warn(context: &str, detail: impl std::fmt::Debug) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("[storage] {context}: {detail:?}")));
}

// ---- combined application state ----

pub fn load_state() -> Option<AppState> {
    let raw = local_storage()?.get_item(STATE_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(state) => Some(state),
        Err(err) => {
            warn("saved state unreadable, starting fresh", err);
            None
        }
    }
}

pub fn persist_state(state: &AppState) -> bool {
    let Some(storage) = local_storage() else {
        return false;
    };
    match serde_json::to_string(state) {
        Ok(raw) => match storage.set_item(STATE_STORAGE_KEY, &raw) {
            Ok(()) => true,
            Err(err) => {
                warn("state write failed", err);
                false
            }
        },
        Err(err) => {
            warn("state serialize failed", err);
            false
        }
    }
}

pub fn clear_state() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STATE_STORAGE_KEY);
    }
}

// ---- resource caches ----

pub fn cached_text(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn cache_text(key: &str, text: &str) {
    if let Some(storage) = local_storage() {
        if let Err(err) = storage.set_item(key, text) {
            warn("cache write failed", err);
        }
    }
}

/// Rewrite the cached catalog after a stock item was edited, so the
/// cache-first load returns the edited record instead of the shipped
/// resource copy.
pub fn refresh_items_cache(items: &[ToolItem]) {
    let rows: Vec<PlacedItem> = items
        .iter()
        .map(|item| PlacedItem {
            item: item.clone(),
            tier_id: String::new(),
        })
        .collect();
    match codec::encode_items_json(&rows) {
        Ok(json) => cache_text(ITEMS_CACHE_KEY, &json),
        Err(err) => warn("items cache refresh skipped", err),
    }
}

// ---- language preferences ----

pub fn load_lang() -> Option<Lang> {
    let code = local_storage()?.get_item(LANG_STORAGE_KEY).ok().flatten()?;
    Lang::from_code(&code)
}

pub fn save_lang(lang: Lang) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(LANG_STORAGE_KEY, lang.code());
    }
}

pub fn load_modal_lang(modal: &str) -> Option<Lang> {
    let key = format!("{MODAL_LANG_KEY_PREFIX}{modal}");
    let code = local_storage()?.get_item(&key).ok().flatten()?;
    Lang::from_code(&code)
}

pub fn save_modal_lang(modal: &str, lang: Lang) {
    if let Some(storage) = local_storage() {
        let key = format!("{MODAL_LANG_KEY_PREFIX}{modal}");
        let _ = storage.set_item(&key, lang.code());
    }
}

// ---- share links ----

/// Build a link to the current page carrying the minimized state.
pub fn share_link(state: &AppState) -> Option<String> {
    let encoded = match share::encode(state) {
        Ok(encoded) => encoded,
        Err(err) => {
            warn("share encode failed", err);
            return None;
        }
    };
    let escaped = utf8_percent_encode(&encoded, QUERY).to_string();
    let location = web_sys::window()?.location();
    let origin = location.origin().ok()?;
    let path = location.pathname().ok()?;
    Some(format!("{origin}{path}?{SHARE_PARAM}={escaped}"))
}

/// Read and decode the `share` parameter of the current URL, if any.
pub fn shared_payload_from_url() -> Option<SharePayload> {
    let search = web_sys::window()?.location().search().ok()?;
    if search.is_empty() {
        return None;
    }
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let encoded = params.get(SHARE_PARAM)?;
    match share::decode(&encoded) {
        Ok(payload) => Some(payload),
        Err(err) => {
            warn("share parameter unreadable, ignoring", err);
            None
        }
    }
}
