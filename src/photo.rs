//! ローカル写真の読み込み
//!
//! ファイルを data URL（プレビュー参照）に変換する。形式は画像ヘッダ→拡張子の順で判定。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;
use snap_recipe_common::gemini::DEFAULT_MIME_TYPE;
use std::path::Path;

use crate::error::{Result, SnapRecipeError};

/// 選択されたローカル写真
#[derive(Debug, Clone)]
pub struct LocalPhoto {
    pub file_name: String,
    pub preview: String,
}

pub fn load_local_photo(path: &Path) -> Result<LocalPhoto> {
    if !path.is_file() {
        return Err(SnapRecipeError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| SnapRecipeError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    let mime_type = detect_mime_type(path, &bytes);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(LocalPhoto {
        file_name,
        preview: to_data_url(mime_type, &bytes),
    })
}

pub fn detect_mime_type(path: &Path, bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|f| f.to_mime_type())
        .unwrap_or(DEFAULT_MIME_TYPE)
}

pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}
