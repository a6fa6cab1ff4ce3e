use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapRecipeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`snap-recipe config --set-api-key YOUR_KEY` または環境変数 GEMINI_API_KEY で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] snap_recipe_common::Error),
}

impl From<dialoguer::Error> for SnapRecipeError {
    fn from(e: dialoguer::Error) -> Self {
        SnapRecipeError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnapRecipeError>;
