//! 佈局引擎
//!
//! 純幾何：由螢幕規格與間隙推導整列的實體尺寸、輸出畫布尺寸，
//! 以及每個螢幕在來源影像上的取樣計畫。此模組不做任何影像 I/O，
//! 同樣的輸入永遠得到同樣的佈局。

use crate::config::{ConfigError, MonitorSpec};
use crate::layout::monitor_geometry::{MonitorGeometry, derive_geometry};
use crate::layout::sample_region::{NormalizedRect, monitor_sample_region};

/// 整列螢幕的佈局
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperLayout {
    /// 各螢幕的衍生幾何，順序同輸入
    pub geometries: Vec<MonitorGeometry>,
    /// 相鄰螢幕間隙（英吋），長度為螢幕數減一
    pub gaps_in: Vec<f64>,
    /// 實體總寬（含間隙，英吋）
    pub total_width_in: f64,
    /// 最大柱高（螢幕高加底部偏移的最大值，英吋）
    pub max_height_in: f64,
    /// 輸出畫布寬（各螢幕邏輯寬之和，間隙不佔像素）
    pub output_width_px: u32,
    /// 輸出畫布高（最大邏輯高）
    pub output_height_px: u32,
}

/// 單一螢幕的切片計畫
///
/// 合成器照計畫執行：取樣區域裁自對齊後的來源，
/// 縮放到邏輯尺寸後貼在 (paste_x, paste_y)。
#[derive(Debug, Clone, PartialEq)]
pub struct SlicePlan {
    pub source_region: NormalizedRect,
    pub width_scaled_px: u32,
    pub height_scaled_px: u32,
    pub paste_x: u32,
    pub paste_y: u32,
}

/// 由螢幕規格與間隙計算佈局
///
/// 所有設定驗證在此完成，之後的流程不再回頭檢查。
pub fn compute_layout(
    monitors: &[MonitorSpec],
    gaps_in: &[f64],
) -> Result<WallpaperLayout, ConfigError> {
    if gaps_in.len() + 1 != monitors.len() {
        return Err(ConfigError::GapCountMismatch {
            monitors: monitors.len(),
            gaps: gaps_in.len(),
        });
    }

    for (index, gap) in gaps_in.iter().enumerate() {
        if !gap.is_finite() || *gap < 0.0 {
            return Err(ConfigError::InvalidGap {
                index,
                value: *gap,
            });
        }
    }

    let geometries = monitors
        .iter()
        .enumerate()
        .map(|(index, spec)| derive_geometry(spec, index))
        .collect::<Result<Vec<_>, _>>()?;

    let total_width_in =
        geometries.iter().map(|g| g.width_in).sum::<f64>() + gaps_in.iter().sum::<f64>();
    let max_height_in = geometries
        .iter()
        .map(MonitorGeometry::column_height_in)
        .fold(0.0_f64, f64::max);

    if total_width_in <= 0.0 || max_height_in <= 0.0 {
        return Err(ConfigError::DegenerateLayout {
            total_width_in,
            max_height_in,
        });
    }

    let output_width_px = geometries.iter().map(|g| g.width_scaled_px).sum();
    let output_height_px = geometries
        .iter()
        .map(|g| g.height_scaled_px)
        .max()
        .unwrap_or(0);

    Ok(WallpaperLayout {
        geometries,
        gaps_in: gaps_in.to_vec(),
        total_width_in,
        max_height_in,
        output_width_px,
        output_height_px,
    })
}

impl WallpaperLayout {
    /// 整列的實體長寬比
    #[must_use]
    pub fn layout_aspect(&self) -> f64 {
        self.total_width_in / self.max_height_in
    }

    /// 單一螢幕的取樣區域
    ///
    /// `running_inch_x` 是該螢幕左緣距整列左緣的英吋數。
    #[must_use]
    pub fn sample_region(&self, geometry: &MonitorGeometry, running_inch_x: f64) -> NormalizedRect {
        monitor_sample_region(
            geometry,
            running_inch_x,
            self.total_width_in,
            self.max_height_in,
        )
    }

    /// 展開所有螢幕的切片計畫（由左至右）
    ///
    /// 英吋游標每次前進螢幕寬度加其後的間隙；
    /// 貼上位置 y = 畫布高 - 邏輯高，即各螢幕底緣對齊畫布底緣。
    #[must_use]
    pub fn slice_plans(&self) -> Vec<SlicePlan> {
        let mut plans = Vec::with_capacity(self.geometries.len());
        let mut running_inch_x = 0.0;
        let mut running_px_x = 0u32;

        for (index, geometry) in self.geometries.iter().enumerate() {
            plans.push(SlicePlan {
                source_region: self.sample_region(geometry, running_inch_x),
                width_scaled_px: geometry.width_scaled_px,
                height_scaled_px: geometry.height_scaled_px,
                paste_x: running_px_x,
                paste_y: self.output_height_px - geometry.height_scaled_px,
            });

            running_inch_x += geometry.width_in;
            if let Some(gap) = self.gaps_in.get(index) {
                running_inch_x += gap;
            }
            running_px_x += geometry.width_scaled_px;
        }

        plans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(
        width_px: u32,
        height_px: u32,
        scaling: f64,
        diagonal_in: f64,
        offset_bottom_in: f64,
    ) -> MonitorSpec {
        MonitorSpec {
            width_px,
            height_px,
            scaling,
            diagonal_in,
            aspect_w: 16,
            aspect_h: 9,
            offset_bottom_in,
        }
    }

    /// 預設陣列：筆電 + 4K 主螢幕 + 底部抬高的 27 吋
    fn default_profile() -> (Vec<MonitorSpec>, Vec<f64>) {
        (
            vec![
                monitor(1920, 1080, 1.25, 15.6, 0.1),
                monitor(3840, 2160, 1.5, 32.0, 0.0),
                monitor(2560, 1440, 1.25, 27.0, 0.75),
            ],
            vec![0.4, 0.5],
        )
    }

    #[test]
    fn test_default_profile_totals() {
        let (monitors, gaps) = default_profile();
        let layout = compute_layout(&monitors, &gaps).unwrap();

        assert!((layout.total_width_in - 65.91953506949139).abs() < 1e-9);
        assert!((layout.max_height_in - 15.688359668241887).abs() < 1e-9);
        assert_eq!(layout.output_width_px, 6144);
        assert_eq!(layout.output_height_px, 1440);
        assert!((layout.layout_aspect() - 4.201811818665338).abs() < 1e-9);
    }

    #[test]
    fn test_default_profile_scaled_footprints() {
        let (monitors, gaps) = default_profile();
        let layout = compute_layout(&monitors, &gaps).unwrap();

        let footprints: Vec<_> = layout
            .geometries
            .iter()
            .map(|g| (g.width_scaled_px, g.height_scaled_px))
            .collect();
        assert_eq!(footprints, vec![(1536, 864), (2560, 1440), (2048, 1152)]);

        // 輸出寬恰為邏輯寬之和
        let sum: u32 = footprints.iter().map(|(w, _)| w).sum();
        assert_eq!(layout.output_width_px, sum);
    }

    #[test]
    fn test_default_profile_sample_regions() {
        let (monitors, gaps) = default_profile();
        let layout = compute_layout(&monitors, &gaps).unwrap();
        let plans = layout.slice_plans();

        // 筆電：最左、柱高最矮，取樣框沉在下半部
        let r0 = plans[0].source_region;
        assert!((r0.left - 0.0).abs() < 1e-9);
        assert!((r0.right - 0.206_260_228_698_665_12).abs() < 1e-9);
        assert!((r0.top - 0.506_125_847_308_789_7).abs() < 1e-9);
        assert!((r0.bottom - 0.993_625_847_308_789_7).abs() < 1e-9);

        // 4K 主螢幕：柱高最大，垂直方向吃滿
        let r1 = plans[1].source_region;
        assert!((r1.left - 0.212_328_232_661_046_3).abs() < 1e-9);
        assert!((r1.right - 0.635_426_137_683_949_1).abs() < 1e-9);
        assert!((r1.top - 0.0).abs() < 1e-9);
        assert!((r1.bottom - 1.0).abs() < 1e-9);

        // 27 吋：底部抬高 0.75 吋，取樣框離開底緣
        let r2 = plans[2].source_region;
        assert!((r2.left - 0.643_011_142_636_925_6).abs() < 1e-9);
        assert!((r2.right - 1.0).abs() < 1e-9);
        assert!((r2.top - 0.108_443_854_815_922_34).abs() < 1e-9);
        assert!((r2.bottom - 0.952_193_854_815_922_3).abs() < 1e-9);
    }

    #[test]
    fn test_default_profile_paste_positions() {
        let (monitors, gaps) = default_profile();
        let layout = compute_layout(&monitors, &gaps).unwrap();
        let plans = layout.slice_plans();

        // 水平緊密相接，底緣對齊
        assert_eq!(plans[0].paste_x, 0);
        assert_eq!(plans[1].paste_x, 1536);
        assert_eq!(plans[2].paste_x, 1536 + 2560);
        assert_eq!(plans[2].paste_x + plans[2].width_scaled_px, 6144);

        assert_eq!(plans[0].paste_y, 1440 - 864);
        assert_eq!(plans[1].paste_y, 0);
        assert_eq!(plans[2].paste_y, 1440 - 1152);
    }

    #[test]
    fn test_single_monitor_covers_everything() {
        let monitors = vec![monitor(1920, 1080, 1.0, 24.0, 0.0)];
        let layout = compute_layout(&monitors, &[]).unwrap();

        assert!((layout.total_width_in - 20.917812890989183).abs() < 1e-9);
        assert_eq!(layout.output_width_px, 1920);
        assert_eq!(layout.output_height_px, 1080);

        let plans = layout.slice_plans();
        assert_eq!(plans.len(), 1);
        let region = plans[0].source_region;
        assert!((region.left - 0.0).abs() < 1e-12);
        assert!((region.right - 1.0).abs() < 1e-12);
        assert!((region.top - 0.0).abs() < 1e-12);
        assert!((region.bottom - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_regions_contiguous_without_gaps() {
        let monitors = vec![
            monitor(1920, 1080, 1.0, 24.0, 0.0),
            monitor(2560, 1440, 1.0, 27.0, 0.0),
            monitor(1920, 1080, 1.0, 24.0, 0.0),
        ];
        let layout = compute_layout(&monitors, &[0.0, 0.0]).unwrap();
        let plans = layout.slice_plans();

        for pair in plans.windows(2) {
            let diff = pair[1].source_region.left - pair[0].source_region.right;
            assert!(diff.abs() < 1e-12, "相鄰取樣區域應緊密相接: {diff}");
        }
    }

    #[test]
    fn test_gap_shifts_regions_but_not_pixels() {
        let monitors = vec![
            monitor(1920, 1080, 1.0, 24.0, 0.0),
            monitor(1920, 1080, 1.0, 24.0, 0.0),
        ];
        let without = compute_layout(&monitors, &[0.0]).unwrap();
        let with = compute_layout(&monitors, &[1.5]).unwrap();

        // 間隙加寬實體佈局
        assert!((with.total_width_in - without.total_width_in - 1.5).abs() < 1e-9);

        // 右側螢幕的取樣區域被間隙推開
        let plans = with.slice_plans();
        assert!(plans[1].source_region.left > plans[0].source_region.right);

        // 但輸出像素尺寸不變，間隙不佔像素
        assert_eq!(with.output_width_px, without.output_width_px);
        assert_eq!(with.output_height_px, without.output_height_px);
        assert_eq!(plans[1].paste_x, plans[0].paste_x + plans[0].width_scaled_px);
    }

    #[test]
    fn test_offset_can_make_shorter_monitor_the_tallest_column() {
        let monitors = vec![
            monitor(3840, 2160, 1.5, 32.0, 0.0),
            monitor(2560, 1440, 1.25, 27.0, 3.0),
        ];
        let layout = compute_layout(&monitors, &[0.5]).unwrap();

        // 27 吋高 13.237 吋加偏移 3 吋，超過 32 吋的 15.688 吋
        assert!((layout.max_height_in - 16.237053470079092).abs() < 1e-9);

        // 畫布高依舊由最大邏輯高決定
        assert_eq!(layout.output_height_px, 1440);
    }

    #[test]
    fn test_gap_count_mismatch() {
        let monitors = vec![
            monitor(1920, 1080, 1.0, 24.0, 0.0),
            monitor(1920, 1080, 1.0, 24.0, 0.0),
        ];

        let err = compute_layout(&monitors, &[]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::GapCountMismatch {
                monitors: 2,
                gaps: 0,
            }
        );

        let err = compute_layout(&monitors, &[0.4, 0.5]).unwrap_err();
        assert!(matches!(err, ConfigError::GapCountMismatch { .. }));
    }

    #[test]
    fn test_empty_monitor_list_is_rejected() {
        let err = compute_layout(&[], &[]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::GapCountMismatch {
                monitors: 0,
                gaps: 0,
            }
        );
    }

    #[test]
    fn test_invalid_gap_values() {
        let monitors = vec![
            monitor(1920, 1080, 1.0, 24.0, 0.0),
            monitor(1920, 1080, 1.0, 24.0, 0.0),
        ];

        let err = compute_layout(&monitors, &[-0.5]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidGap { index: 0, value: -0.5 });

        let err = compute_layout(&monitors, &[f64::NAN]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGap { index: 0, .. }));
    }

    #[test]
    fn test_monitor_field_errors_carry_the_index() {
        let mut bad = monitor(1920, 1080, 1.0, 24.0, 0.0);
        bad.diagonal_in = 0.0;
        let monitors = vec![monitor(1920, 1080, 1.0, 24.0, 0.0), bad];

        let err = compute_layout(&monitors, &[0.4]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidMonitorField { index: 1, .. }
        ));
    }

    #[test]
    fn test_degenerate_layout_is_rejected() {
        // 次正規對角線讓高度下溢為 0，總高退化
        let monitors = vec![monitor(1920, 1080, 1.0, 5e-324, 0.0)];
        let err = compute_layout(&monitors, &[]).unwrap_err();
        assert!(matches!(err, ConfigError::DegenerateLayout { .. }));
    }
}
