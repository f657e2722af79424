//! UI languages and the bilingual string tables.
//!
//! Translations are static so switching is synchronous: a modal's
//! language toggle can never interleave with its submit/cancel
//! handlers.

/// Interface language. Tool/tier display names fall back to the other
/// language when the preferred field is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "zh" => Some(Lang::Zh),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn prefer_en(self) -> bool {
        matches!(self, Lang::En)
    }
}

pub struct Strings {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub unranked_title: &'static str,
    pub pool_empty: &'static str,
    pub add_custom_ai: &'static str,
    pub tier_list_title: &'static str,
    pub add_tier: &'static str,
    pub remove_tier: &'static str,
    pub edit_tier: &'static str,
    pub save_chart: &'static str,
    pub share_chart: &'static str,
    pub export_json: &'static str,
    pub export_csv: &'static str,
    pub reset_chart: &'static str,
    pub reset_confirm: &'static str,
    pub saved_ok: &'static str,
    pub save_failed: &'static str,
    pub link_copied: &'static str,
    pub link_failed: &'static str,
    pub add_tool_title: &'static str,
    pub edit_tool_title: &'static str,
    pub tool_details_title: &'static str,
    pub edit: &'static str,
    pub add: &'static str,
    pub save_changes: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    pub name_en_label: &'static str,
    pub name_zh_label: &'static str,
    pub icon_label: &'static str,
    pub website_label: &'static str,
    pub release_label: &'static str,
    pub month_placeholder: &'static str,
    pub year_placeholder: &'static str,
    pub desc_en_label: &'static str,
    pub desc_zh_label: &'static str,
    pub preview_label: &'static str,
    pub features_label: &'static str,
    pub add_feature: &'static str,
    pub no_features: &'static str,
    pub none_value: &'static str,
    pub tier_modal_add_title: &'static str,
    pub tier_modal_edit_title: &'static str,
    pub tier_id_label: &'static str,
    pub tier_name_zh_label: &'static str,
    pub tier_name_en_label: &'static str,
    pub tier_color_label: &'static str,
}

static ZH: Strings = Strings {
    app_title: "小赫的AI星辰榜",
    app_subtitle: "把你的AI工具拖進對應的星級",
    loading: "載入中…",
    load_failed: "工具清單載入失敗，可稍後重新整理",
    unranked_title: "未分級工具",
    pool_empty: "所有工具都已分級",
    add_custom_ai: "新增AI工具",
    tier_list_title: "星級排行",
    add_tier: "新增層級",
    remove_tier: "移除層級",
    edit_tier: "編輯",
    save_chart: "儲存",
    share_chart: "分享連結",
    export_json: "匯出 JSON",
    export_csv: "匯出 CSV",
    reset_chart: "重設",
    reset_confirm: "確定要重設星辰榜嗎？此操作無法復原。",
    saved_ok: "已儲存到瀏覽器",
    save_failed: "儲存失敗",
    link_copied: "分享連結已複製",
    link_failed: "無法產生分享連結",
    add_tool_title: "新增AI工具",
    edit_tool_title: "編輯AI工具",
    tool_details_title: "工具資訊",
    edit: "編輯",
    add: "新增",
    save_changes: "儲存變更",
    cancel: "取消",
    close: "關閉",
    name_en_label: "名稱（英）",
    name_zh_label: "AI工具名稱",
    icon_label: "圖示 URL",
    website_label: "官方網站",
    release_label: "發布時間",
    month_placeholder: "月",
    year_placeholder: "年",
    desc_en_label: "描述（英）",
    desc_zh_label: "工具描述",
    preview_label: "預覽",
    features_label: "功能評分",
    add_feature: "+ 新增功能",
    no_features: "尚未評分",
    none_value: "N/A",
    tier_modal_add_title: "新增層級",
    tier_modal_edit_title: "編輯層級",
    tier_id_label: "層級代號",
    tier_name_zh_label: "層級名稱",
    tier_name_en_label: "名稱（英）",
    tier_color_label: "顏色",
};

static EN: Strings = Strings {
    app_title: "AI Star Chart",
    app_subtitle: "Drag your AI tools into their tiers",
    loading: "Loading…",
    load_failed: "Could not load the tool catalog; reload to retry",
    unranked_title: "Unranked tools",
    pool_empty: "Every tool has been ranked",
    add_custom_ai: "Add AI tool",
    tier_list_title: "Tier list",
    add_tier: "Add tier",
    remove_tier: "Remove tier",
    edit_tier: "Edit",
    save_chart: "Save",
    share_chart: "Share link",
    export_json: "Export JSON",
    export_csv: "Export CSV",
    reset_chart: "Reset",
    reset_confirm: "Reset the star chart? This cannot be undone.",
    saved_ok: "Saved to this browser",
    save_failed: "Save failed",
    link_copied: "Share link copied",
    link_failed: "Could not build a share link",
    add_tool_title: "Add AI tool",
    edit_tool_title: "Edit AI tool",
    tool_details_title: "Tool details",
    edit: "Edit",
    add: "Add",
    save_changes: "Save changes",
    cancel: "Cancel",
    close: "Close",
    name_en_label: "Name (EN)",
    name_zh_label: "Name (ZH)",
    icon_label: "Icon URL",
    website_label: "Website",
    release_label: "Released",
    month_placeholder: "MM",
    year_placeholder: "YYYY",
    desc_en_label: "Description (EN)",
    desc_zh_label: "Description (ZH)",
    preview_label: "Preview",
    features_label: "Feature scores",
    add_feature: "+ Add feature",
    no_features: "Not rated yet",
    none_value: "N/A",
    tier_modal_add_title: "Add tier",
    tier_modal_edit_title: "Edit tier",
    tier_id_label: "Tier id",
    tier_name_zh_label: "Name (ZH)",
    tier_name_en_label: "Name (EN)",
    tier_color_label: "Color",
};

pub fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::Zh => &ZH,
        Lang::En => &EN,
    }
}

/// Status line shown after a tier with occupants is removed.
pub fn tier_removed_msg(lang: Lang, tier_name: &str, released: usize) -> String {
    match lang {
        Lang::Zh if released > 0 => {
            format!("已移除「{tier_name}」，{released} 個工具回到未分級區")
        }
        Lang::Zh => format!("已移除「{tier_name}」"),
        Lang::En if released > 0 => {
            format!("Removed \"{tier_name}\"; {released} tool(s) returned to the pool")
        }
        Lang::En => format!("Removed \"{tier_name}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        assert_eq!(Lang::from_code(Lang::Zh.code()), Some(Lang::Zh));
        assert_eq!(Lang::from_code(Lang::En.code()), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn removal_message_names_the_count() {
        let msg = tier_removed_msg(Lang::En, "Stellar", 3);
        assert!(msg.contains("3"));
        assert!(msg.contains("Stellar"));
        let msg = tier_removed_msg(Lang::Zh, "恆星級", 0);
        assert!(msg.contains("恆星級"));
    }
}
