//! Frontend configuration: storage keys, resource paths and UI
//! defaults. Board limits live in `star_chart_core::config`.

/// localStorage key for the combined application state.
pub const STATE_STORAGE_KEY: &str = "ai-star-chart-data";
/// localStorage key for the cached tool catalog (JSON).
pub const ITEMS_CACHE_KEY: &str = "ai-star-chart-tools";
/// localStorage key for the cached tier definitions (CSV).
pub const TIERS_CACHE_KEY: &str = "ai-star-chart-tiers";
/// localStorage key for the UI language preference.
pub const LANG_STORAGE_KEY: &str = "ai-star-chart-language";
/// Prefix for per-modal language preferences.
pub const MODAL_LANG_KEY_PREFIX: &str = "ai-star-chart-modal-lang-";

pub const ITEMS_JSON_PATH: &str = "data/ai_tools.json";
pub const ITEMS_CSV_PATH: &str = "data/ai_tools.csv";
pub const TIERS_CSV_PATH: &str = "data/tiers.csv";
pub const FEATURES_JSON_PATH: &str = "data/features.json";

/// Query parameter carrying a shared board.
pub const SHARE_PARAM: &str = "share";

/// How long a status toast stays up.
pub const STATUS_TOAST_MS: u32 = 4000;

/// Inline robot icon used when a tool has no icon URL.
pub const DEFAULT_ICON: &str = "data:image/svg+xml,<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"16\" height=\"16\" fill=\"currentColor\" viewBox=\"0 0 16 16\"><path d=\"M6 12.5a.5.5 0 0 1 .5-.5h3a.5.5 0 0 1 0 1h-3a.5.5 0 0 1-.5-.5M3 8.062C3 6.76 4.235 5.765 5.53 5.886a26.6 26.6 0 0 0 4.94 0C11.765 5.765 13 6.76 13 8.062v1.157a.93.93 0 0 1-.765.935c-.845.147-2.34.346-4.235.346s-3.39-.2-4.235-.346A.93.93 0 0 1 3 9.219z\"/><path d=\"M8 1a1 1 0 0 1 1 1v1.07A4.5 4.5 0 0 1 12.93 6.93a1 1 0 1 1-1.86.74c-.456-1.028-1.284-1.857-2.227-2.228V2a1 1 0 0 1 1-1z\"/></svg>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_are_distinct() {
        let keys = [
            STATE_STORAGE_KEY,
            ITEMS_CACHE_KEY,
            TIERS_CACHE_KEY,
            LANG_STORAGE_KEY,
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
