use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 單一螢幕的輸入規格
///
/// 依實體擺放順序由左至右排列，順序即輸出中的水平位置。
/// 所有欄位描述輸入條件，衍生幾何一律另行計算（見 `layout` 模組）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSpec {
    /// 原生水平解析度（像素）
    pub width_px: u32,
    /// 原生垂直解析度（像素）
    pub height_px: u32,
    /// DPI 縮放倍率（預期 >= 1.0）
    pub scaling: f64,
    /// 面板對角線長度（英吋）
    pub diagonal_in: f64,
    /// 長寬比的寬分量（如 16:9 的 16）
    pub aspect_w: u32,
    /// 長寬比的高分量（如 16:9 的 9）
    pub aspect_h: u32,
    /// 螢幕底緣高於陣列基準線的距離（英吋）
    #[serde(default)]
    pub offset_bottom_in: f64,
}

/// 螢幕陣列設定
///
/// `gaps_in[i]` 是螢幕 i 與螢幕 i+1 之間的實體間隙（邊框加桌面空隙，英吋），
/// 因此合法的間隙數量恆為螢幕數量減一。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutProfile {
    pub monitors: Vec<MonitorSpec>,
    pub gaps_in: Vec<f64>,
}

/// 設定驗證錯誤
///
/// 任何一項都會在讀取影像之前讓整次執行失敗。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("間隙數量與螢幕數量不符: {monitors} 個螢幕、{gaps} 個間隙（需要螢幕數減一）")]
    GapCountMismatch { monitors: usize, gaps: usize },

    #[error("螢幕 {index} 的 {field} 無效: {value}（必須為正的有限數值）")]
    InvalidMonitorField {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("螢幕 {index} 的 offset_bottom_in 無效: {value}（必須為非負的有限數值）")]
    InvalidOffset { index: usize, value: f64 },

    #[error("間隙 {index} 無效: {value}（必須為非負的有限數值）")]
    InvalidGap { index: usize, value: f64 },

    #[error("螢幕 {index} 經縮放後的尺寸退化為零（{width_px}x{height_px}, 縮放 {scaling}）")]
    DegenerateScaledSize {
        index: usize,
        width_px: u32,
        height_px: u32,
        scaling: f64,
    },

    #[error("佈局尺寸退化: 總寬 {total_width_in} 吋、最大高 {max_height_in} 吋")]
    DegenerateLayout {
        total_width_in: f64,
        max_height_in: f64,
    },
}

/// 介面語言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

/// 使用者偏好設定（settings.json，可省略）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub profile: LayoutProfile,
    pub settings: UserSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_spec_offset_defaults_to_zero() {
        let json = r#"{
            "width_px": 1920,
            "height_px": 1080,
            "scaling": 1.0,
            "diagonal_in": 24.0,
            "aspect_w": 16,
            "aspect_h": 9
        }"#;

        let spec: MonitorSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.width_px, 1920);
        assert!((spec.offset_bottom_in - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_language_round_trip() {
        let lang: Language = serde_json::from_str("\"zh-TW\"").unwrap();
        assert_eq!(lang, Language::ZhTw);
        assert_eq!(lang.as_str(), "zh-TW");

        assert_eq!(Language::default(), Language::EnUs);
    }

    #[test]
    fn test_user_settings_tolerates_missing_fields() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.language, Language::EnUs);
    }

    #[test]
    fn test_config_error_messages_name_the_field() {
        let err = ConfigError::InvalidMonitorField {
            index: 1,
            field: "diagonal_in",
            value: -24.0,
        };
        assert!(err.to_string().contains("diagonal_in"));
        assert!(err.to_string().contains("螢幕 1"));
    }
}
