use super::aspect_crop::{CropBranch, decide_source_crop};
use crate::config::Config;
use crate::layout::{WallpaperLayout, compute_layout};
use crate::tools::{ensure_output_parent, open_image, save_png, validate_input_file};
use anyhow::{Context, Result};
use console::style;
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage, imageops};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 未被任何螢幕覆蓋的畫布區域保留此色，輸出中出現表示佈局有洞
const SENTINEL_RED: Rgb<u8> = Rgb([255, 0, 0]);

/// 合成結果摘要
#[derive(Debug)]
pub struct CompositionResult {
    pub monitors: usize,
    pub output_width_px: u32,
    pub output_height_px: u32,
    pub crop_branch: CropBranch,
}

/// 跨螢幕桌布合成器
///
/// 五階段流程：
/// A. 計算佈局（純幾何，設定驗證先於所有 I/O）
/// B. 解碼來源影像
/// C. 依整列長寬比置中裁切
/// D. 逐螢幕切片、重取樣、貼上紅底畫布
/// E. 以 PNG 寫出
pub struct WallpaperCompositor {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl WallpaperCompositor {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self, input_path: &Path, output_path: &Path) -> Result<CompositionResult> {
        println!("{}", style("=== 跨螢幕桌布合成 ===").cyan().bold());

        // Stage A: 計算佈局
        print!("  {} 計算螢幕佈局...", style("A").dim());
        let layout = compute_layout(&self.config.profile.monitors, &self.config.profile.gaps_in)?;
        println!(
            " {:.2} x {:.2} 吋，輸出 {}x{} px",
            layout.total_width_in,
            layout.max_height_in,
            layout.output_width_px,
            layout.output_height_px
        );
        debug!("整列長寬比: {:.6}", layout.layout_aspect());

        validate_input_file(input_path)?;
        ensure_output_parent(output_path)?;

        // Stage B: 解碼來源影像
        print!("  {} 讀取來源影像...", style("B").dim());
        let source = open_image(input_path)?;
        println!(" {}x{}", source.width(), source.height());

        if source.width() < layout.output_width_px || source.height() < layout.output_height_px {
            warn!(
                "來源影像 {}x{} 小於輸出畫布 {}x{}，放大後可能模糊",
                source.width(),
                source.height(),
                layout.output_width_px,
                layout.output_height_px
            );
            println!(
                "  {}",
                style(format!(
                    "建議來源至少 {}x{} px 以避免放大模糊",
                    layout.output_width_px, layout.output_height_px
                ))
                .yellow()
            );
        }

        // Stage C: 長寬比置中裁切
        print!("  {} 對齊長寬比...", style("C").dim());
        let crop = decide_source_crop(source.width(), source.height(), layout.layout_aspect());
        let aligned = match crop.branch {
            CropBranch::None => {
                println!(" 相符，不裁切");
                source
            }
            CropBranch::Pillarbox => {
                println!(" 過寬，置中裁為 {}x{}", crop.width, crop.height);
                source.crop_imm(crop.x, crop.y, crop.width, crop.height)
            }
            CropBranch::Letterbox => {
                println!(" 過高，置中裁為 {}x{}", crop.width, crop.height);
                source.crop_imm(crop.x, crop.y, crop.width, crop.height)
            }
        };

        // Stage D: 切片合成
        println!("  {} 切片與重取樣...", style("D").dim());
        let canvas = self.compose_slices(&layout, &aligned)?;

        // Stage E: 寫出
        print!("  {} 寫出 PNG...", style("E").dim());
        save_png(&canvas, output_path)
            .with_context(|| format!("無法寫出合成結果: {}", output_path.display()))?;
        println!(" 完成");

        info!("桌布已建立: {}", output_path.display());

        let result = CompositionResult {
            monitors: layout.geometries.len(),
            output_width_px: layout.output_width_px,
            output_height_px: layout.output_height_px,
            crop_branch: crop.branch,
        };
        self.print_summary(&result, output_path);

        Ok(result)
    }

    /// 建立紅底畫布並依切片計畫逐螢幕填入
    fn compose_slices(&self, layout: &WallpaperLayout, source: &DynamicImage) -> Result<RgbImage> {
        let mut canvas = RgbImage::from_pixel(
            layout.output_width_px,
            layout.output_height_px,
            SENTINEL_RED,
        );

        let plans = layout.slice_plans();
        let progress_bar = ProgressBar::new(plans.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar.set_message("切片合成中...");

        for (index, plan) in plans.iter().enumerate() {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                progress_bar.abandon_with_message("操作已中斷");
                anyhow::bail!("收到中斷訊號，合成已取消");
            }

            let (x, y, width, height) = plan
                .source_region
                .to_pixel_box(source.width(), source.height());

            if width == 0 || height == 0 {
                anyhow::bail!("來源影像過小，螢幕 {index} 的取樣區域為空");
            }

            debug!(
                "螢幕 {index}: 取樣 ({x}, {y}) {width}x{height} -> {}x{} @ ({}, {})",
                plan.width_scaled_px, plan.height_scaled_px, plan.paste_x, plan.paste_y
            );

            let slice = source
                .crop_imm(x, y, width, height)
                .resize_exact(plan.width_scaled_px, plan.height_scaled_px, FilterType::Lanczos3)
                .to_rgb8();

            imageops::replace(
                &mut canvas,
                &slice,
                i64::from(plan.paste_x),
                i64::from(plan.paste_y),
            );

            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("完成");

        Ok(canvas)
    }

    fn print_summary(&self, result: &CompositionResult, output_path: &Path) {
        println!();
        println!("{}", style("=== 合成摘要 ===").cyan().bold());
        println!("  螢幕數: {} 個", result.monitors);
        println!(
            "  輸出尺寸: {}x{} px",
            result.output_width_px, result.output_height_px
        );
        println!(
            "  {}",
            style(format!("輸出檔案: {}", output_path.display())).green()
        );
        println!();
        println!(
            "{}",
            style("將桌布顯示模式設為「跨螢幕延伸」(spanned) 即可逐螢幕對齊").dim()
        );

        info!(
            "合成完成 - 螢幕: {}, 輸出: {}x{}",
            result.monitors, result.output_width_px, result.output_height_px
        );
    }
}
