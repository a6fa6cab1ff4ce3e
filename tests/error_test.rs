//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use snap_recipe::config::Config;
use snap_recipe::error::SnapRecipeError;
use snap_recipe::photo;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない写真を読み込んだ場合
#[test]
fn test_load_nonexistent_photo() {
    let result = photo::load_local_photo(Path::new("/nonexistent/path/12345.jpg"));
    assert!(matches!(result, Err(SnapRecipeError::FileNotFound(_))));
}

/// フォルダを写真として読み込んだ場合
#[test]
fn test_load_directory_as_photo() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = photo::load_local_photo(dir.path());
    assert!(matches!(result, Err(SnapRecipeError::FileNotFound(_))));
}

/// 壊れた設定ファイル
#[test]
fn test_broken_config_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(SnapRecipeError::JsonParse(_))));
}

/// SnapRecipeErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SnapRecipeError::Config("テスト設定エラー".to_string()),
        SnapRecipeError::FileNotFound("pasta.jpg".to_string()),
        SnapRecipeError::ImageLoad("壊れた画像".to_string()),
        SnapRecipeError::Prompt("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiKeyエラーのメッセージ確認
#[test]
fn test_missing_api_key_message() {
    let display = format!("{}", SnapRecipeError::MissingApiKey);

    assert!(display.contains("APIキー"));
    assert!(display.contains("snap-recipe config"));
    assert!(display.contains("GEMINI_API_KEY"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SnapRecipeError = io_err.into();

    assert!(matches!(err, SnapRecipeError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorは透過的に表示される（フロー失敗のメッセージがそのまま出る）
#[test]
fn test_common_error_transparent() {
    let err: SnapRecipeError = snap_recipe_common::Error::Flow("quota exceeded".to_string()).into();

    assert!(matches!(err, SnapRecipeError::Common(_)));
    assert_eq!(format!("{}", err), "quota exceeded");
}

/// 検証エラーのメッセージ
#[test]
fn test_validation_error_messages() {
    let err: SnapRecipeError = snap_recipe_common::Error::MissingSource.into();
    assert_eq!(err.to_string(), "Please upload an image or enter an image URL.");

    let err: SnapRecipeError = snap_recipe_common::Error::UnresolvedSource.into();
    assert_eq!(err.to_string(), "Please provide a valid image source.");
}
