//! 歸一化取樣區域
//!
//! 將每個螢幕的實體位置映射為來源影像上的比例框。
//! 水平比例是累積英吋除以總寬；垂直比例由基準線偏移換算，
//! 座標空間由上而下（top < bottom）。

use crate::layout::monitor_geometry::MonitorGeometry;

/// 以 [0,1] 比例表示的矩形（垂直軸由上而下）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl NormalizedRect {
    /// 換算為像素框 (x, y, 寬, 高)
    ///
    /// 四個邊界各自四捨五入後再取差，與逐邊裁切的語意一致。
    #[must_use]
    pub fn to_pixel_box(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let left = (self.left * f64::from(width)).round() as u32;
        let right = (self.right * f64::from(width)).round() as u32;
        let top = (self.top * f64::from(height)).round() as u32;
        let bottom = (self.bottom * f64::from(height)).round() as u32;

        (
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
    }
}

/// 計算單一螢幕的取樣區域
///
/// 水平：`[running_inch_x / total, (running_inch_x + width_in) / total]`
/// 垂直：`bottom = 1 - offset / max_height`、`top = bottom - height / max_height`
///
/// 呼叫端負責在螢幕之間將 `running_inch_x` 前進螢幕寬度加其後間隙，
/// 間隙因此只平移後續螢幕的取樣位置，本身不產生任何輸出像素。
#[must_use]
pub fn monitor_sample_region(
    geometry: &MonitorGeometry,
    running_inch_x: f64,
    total_width_in: f64,
    max_height_in: f64,
) -> NormalizedRect {
    let left = running_inch_x / total_width_in;
    let right = (running_inch_x + geometry.width_in) / total_width_in;
    let bottom = 1.0 - geometry.offset_bottom_in / max_height_in;
    let top = bottom - geometry.height_in / max_height_in;

    NormalizedRect {
        left,
        top,
        right,
        bottom,
    }
}
