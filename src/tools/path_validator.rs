use anyhow::{Result, bail};
use std::path::Path;

pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("輸入影像不存在: {}", path.display());
    }
    if !path.is_file() {
        bail!("輸入路徑不是檔案: {}", path.display());
    }
    Ok(())
}

/// 確保輸出檔案的上層資料夾存在，必要時建立
pub fn ensure_output_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
