use crate::config::types::{Config, LayoutProfile, UserSettings};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// 編譯時嵌入的預設螢幕陣列設定（不需要外部檔案）
const DEFAULT_PROFILE_JSON: &str = include_str!("../data/monitors.json");

impl Config {
    pub fn new() -> Result<Self> {
        let profile = Self::load_profile()?;
        let settings = Self::load_settings().unwrap_or_default();

        Ok(Self { profile, settings })
    }

    /// 載入螢幕陣列設定
    ///
    /// 工作目錄中的 monitors.json 優先於嵌入的預設值；
    /// 該檔案存在但無法解析時為致命錯誤，不退回預設值。
    fn load_profile() -> Result<LayoutProfile> {
        let path = Path::new("monitors.json");
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("無法讀取螢幕設定: {}", path.display()))?;
            let profile = serde_json::from_str(&content)
                .with_context(|| format!("無法解析螢幕設定: {}", path.display()))?;
            info!("使用工作目錄中的 monitors.json");
            return Ok(profile);
        }

        debug!("monitors.json 不存在，使用嵌入的預設螢幕陣列");
        Self::load_embedded_profile()
    }

    fn load_settings() -> Result<UserSettings> {
        let path = Path::new("settings.json");
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }

    /// 從編譯時嵌入的 JSON 載入預設螢幕陣列
    fn load_embedded_profile() -> Result<LayoutProfile> {
        serde_json::from_str(DEFAULT_PROFILE_JSON).context("無法解析嵌入的預設螢幕設定")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_parses() {
        let profile = Config::load_embedded_profile().unwrap();

        // 預設陣列：筆電 + 4K 主螢幕 + 直立偏移的 27 吋
        assert_eq!(profile.monitors.len(), 3);
        assert_eq!(profile.gaps_in.len(), 2);
        assert_eq!(profile.monitors[1].width_px, 3840);
        assert!((profile.monitors[2].offset_bottom_in - 0.75).abs() < f64::EPSILON);
    }
}
