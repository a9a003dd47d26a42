//! 跨螢幕桌布合成元件
//!
//! 五階段流程：
//! A. 計算螢幕佈局（純幾何）
//! B. 解碼來源影像
//! C. 依整列長寬比置中裁切
//! D. 逐螢幕切片、重取樣、貼上紅底畫布
//! E. 以 PNG 寫出

mod aspect_crop;
mod main;

pub use aspect_crop::{CropBranch, SourceCrop, decide_source_crop};
pub use main::{CompositionResult, WallpaperCompositor};
