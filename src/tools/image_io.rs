use anyhow::{Context, Result, bail};
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
use log::debug;
use std::path::Path;

/// 解碼來源影像
///
/// 格式由檔案內容自動判斷，解不開就是致命錯誤。
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let image = ImageReader::open(path)
        .with_context(|| format!("無法開啟影像: {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("無法判斷影像格式: {}", path.display()))?
        .decode()
        .with_context(|| format!("無法解碼影像: {}", path.display()))?;

    debug!(
        "已解碼 {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// 以 PNG 格式寫出合成結果，不論輸出路徑的副檔名
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("無法寫出 PNG: {}", path.display()))?;

    if !path.exists() {
        bail!("輸出檔案未建立: {}", path.display());
    }

    debug!("PNG 已寫出: {}", path.display());
    Ok(())
}
