//! 單一螢幕的衍生幾何
//!
//! 由輸入規格推導實體尺寸與邏輯像素尺寸。
//! 實體尺寸來自對角線與長寬比的畢氏分解，
//! 邏輯像素尺寸是原生解析度除以 DPI 縮放後四捨五入。

use crate::config::{ConfigError, MonitorSpec};
use log::warn;

/// 衍生幾何（與輸入型別 `MonitorSpec` 分離，不回寫）
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorGeometry {
    /// 實體寬度（英吋）
    pub width_in: f64,
    /// 實體高度（英吋）
    pub height_in: f64,
    /// 底緣高於基準線的距離（英吋），自輸入複製
    pub offset_bottom_in: f64,
    /// 邏輯像素寬度 = round(width_px / scaling)
    pub width_scaled_px: u32,
    /// 邏輯像素高度 = round(height_px / scaling)
    pub height_scaled_px: u32,
}

impl MonitorGeometry {
    /// 含偏移的柱高（英吋），決定整列的最大高度
    #[must_use]
    pub fn column_height_in(&self) -> f64 {
        self.height_in + self.offset_bottom_in
    }
}

/// 驗證單一螢幕規格並推導幾何
///
/// 公式：
/// - `width_in  = diagonal_in * aspect_w / sqrt(aspect_w^2 + aspect_h^2)`
/// - `height_in = diagonal_in * aspect_h / sqrt(aspect_w^2 + aspect_h^2)`
///
/// `index` 僅用於錯誤訊息。
pub fn derive_geometry(spec: &MonitorSpec, index: usize) -> Result<MonitorGeometry, ConfigError> {
    let invalid = |field: &'static str, value: f64| ConfigError::InvalidMonitorField {
        index,
        field,
        value,
    };

    if spec.width_px == 0 {
        return Err(invalid("width_px", 0.0));
    }
    if spec.height_px == 0 {
        return Err(invalid("height_px", 0.0));
    }
    if spec.aspect_w == 0 {
        return Err(invalid("aspect_w", 0.0));
    }
    if spec.aspect_h == 0 {
        return Err(invalid("aspect_h", 0.0));
    }
    if !spec.scaling.is_finite() || spec.scaling <= 0.0 {
        return Err(invalid("scaling", spec.scaling));
    }
    if !spec.diagonal_in.is_finite() || spec.diagonal_in <= 0.0 {
        return Err(invalid("diagonal_in", spec.diagonal_in));
    }
    if !spec.offset_bottom_in.is_finite() || spec.offset_bottom_in < 0.0 {
        return Err(ConfigError::InvalidOffset {
            index,
            value: spec.offset_bottom_in,
        });
    }

    if spec.scaling < 1.0 {
        warn!(
            "螢幕 {index} 的縮放 {} 小於 1，邏輯尺寸將超過原生解析度",
            spec.scaling
        );
    }

    let aspect_w = f64::from(spec.aspect_w);
    let aspect_h = f64::from(spec.aspect_h);
    let aspect_len = (aspect_w * aspect_w + aspect_h * aspect_h).sqrt();
    let width_in = spec.diagonal_in * aspect_w / aspect_len;
    let height_in = spec.diagonal_in * aspect_h / aspect_len;

    let width_scaled_px = (f64::from(spec.width_px) / spec.scaling).round() as u32;
    let height_scaled_px = (f64::from(spec.height_px) / spec.scaling).round() as u32;

    if width_scaled_px == 0 || height_scaled_px == 0 {
        return Err(ConfigError::DegenerateScaledSize {
            index,
            width_px: spec.width_px,
            height_px: spec.height_px,
            scaling: spec.scaling,
        });
    }

    Ok(MonitorGeometry {
        width_in,
        height_in,
        offset_bottom_in: spec.offset_bottom_in,
        width_scaled_px,
        height_scaled_px,
    })
}
