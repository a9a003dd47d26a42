//! 長寬比對齊
//!
//! 將來源影像置中裁切到整列螢幕的實體長寬比，
//! 之後的切片計算便能以比例直接對應到像素。

/// 判定長寬比相符的相對容差
///
/// 佈局長寬比來自連串浮點運算，嚴格相等幾乎不可能成立；
/// 此容差遠高於 f64 誤差、也遠低於會移動任何像素的差異。
const ASPECT_TOLERANCE: f64 = 1e-6;

/// 裁切分支
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropBranch {
    /// 輸入比佈局寬，置中裁掉左右
    Pillarbox,
    /// 輸入比佈局高，置中裁掉上下
    Letterbox,
    /// 容差內視為相符，不裁切
    None,
}

/// 置中裁切框（座標以原始輸入為準）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceCrop {
    pub branch: CropBranch,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// 決定來源影像的置中裁切框
///
/// 過寬時依高度換算目標寬：`round(input_h * layout_aspect)`；
/// 過高時依寬度換算目標高：`round(input_w / layout_aspect)`；
/// 餘量以整數除法均分到兩側。
#[must_use]
pub fn decide_source_crop(input_w: u32, input_h: u32, layout_aspect: f64) -> SourceCrop {
    let input_aspect = f64::from(input_w) / f64::from(input_h);

    if (input_aspect - layout_aspect).abs() <= ASPECT_TOLERANCE * layout_aspect {
        return SourceCrop {
            branch: CropBranch::None,
            x: 0,
            y: 0,
            width: input_w,
            height: input_h,
        };
    }

    if input_aspect > layout_aspect {
        let width = (f64::from(input_h) * layout_aspect).round() as u32;
        SourceCrop {
            branch: CropBranch::Pillarbox,
            x: (input_w - width) / 2,
            y: 0,
            width,
            height: input_h,
        }
    } else {
        let height = (f64::from(input_w) / layout_aspect).round() as u32;
        SourceCrop {
            branch: CropBranch::Letterbox,
            x: 0,
            y: (input_h - height) / 2,
            width: input_w,
            height,
        }
    }
}
