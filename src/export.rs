//! File exports.
//!
//! Reads the model (never the render tree), encodes through the core
//! codecs and hands the bytes to the browser as a download.

use star_chart_core::codec;
use star_chart_core::AppState;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn js_err(value: JsValue) -> String {
    format!("{value:?}")
}

fn trigger_download(filename: &str, content: &str, mime: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(&format!("{mime};charset=utf-8"));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document")?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.set_attribute("style", "display: none").ok();
    let body = document.body().ok_or("no body")?;
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url).ok();
    Ok(())
}

/// `ai_tools.json` + `tiers.csv`, like the original export action.
pub fn export_json(state: &AppState) -> Result<(), String> {
    let rows = state.placed_items();
    let json = codec::encode_items_json(&rows).map_err(|e| e.to_string())?;
    trigger_download("ai_tools.json", &json, "application/json")?;
    export_tiers(state)
}

/// `ai_tools.csv` + `tiers.csv`.
pub fn export_csv(state: &AppState) -> Result<(), String> {
    let rows = state.placed_items();
    let csv = codec::encode_items_csv(&rows).map_err(|e| e.to_string())?;
    trigger_download("ai_tools.csv", &csv, "text/csv")?;
    export_tiers(state)
}

fn export_tiers(state: &AppState) -> Result<(), String> {
    let csv = codec::encode_tiers_csv(&state.tiers).map_err(|e| e.to_string())?;
    trigger_download("tiers.csv", &csv, "text/csv")
}
