//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    /// ファイルもURLも指定されていない
    #[error("Please upload an image or enter an image URL.")]
    MissingSource,

    /// 画像参照を解決できない（プレビュー未生成など）
    #[error("Please provide a valid image source.")]
    UnresolvedSource,

    /// 外部フロー呼び出しの失敗（メッセージをそのまま表示）
    #[error("{0}")]
    Flow(String),

    #[error("Recipe generation is already running.")]
    Busy,

    #[error("No recipe has been generated yet.")]
    NoRecipe,

    #[error("Index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    /// 入力検証系のエラーか（通信前に検出されるもの）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingSource
                | Error::UnresolvedSource
                | Error::Busy
                | Error::NoRecipe
                | Error::IndexOutOfRange { .. }
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
