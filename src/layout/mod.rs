//! 佈局引擎模組
//!
//! 純幾何計算，與影像處理完全分離：
//! - 由對角線與長寬比推導每個螢幕的實體尺寸
//! - 由 DPI 縮放推導邏輯像素尺寸
//! - 產生每個螢幕在來源影像上的歸一化取樣計畫

mod engine;
mod monitor_geometry;
mod sample_region;

pub use engine::{SlicePlan, WallpaperLayout, compute_layout};
pub use monitor_geometry::{MonitorGeometry, derive_geometry};
pub use sample_region::{NormalizedRect, monitor_sample_region};
