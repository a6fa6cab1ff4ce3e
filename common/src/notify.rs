//! トースト通知

use crate::error::Error;
use serde::Serialize;

pub const SUCCESS_TITLE: &str = "Recipe Generated!";
pub const SUCCESS_DESCRIPTION: &str = "Check out your new recipe!";
pub const ERROR_TITLE: &str = "Error";
pub const FAILURE_TITLE: &str = "Uh oh! Something went wrong.";

/// カード・プレースホルダの表示文言
pub const CARD_SUBTITLE: &str = "Here is your AI-generated recipe. Feel free to edit!";
pub const EMPTY_PLACEHOLDER: &str = "Upload a photo or enter an image URL to generate a recipe.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn success() -> Self {
        Self {
            variant: ToastVariant::Default,
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_DESCRIPTION.to_string(),
        }
    }

    /// エラーからトーストを作る。フロー失敗はメッセージをそのまま表示
    pub fn from_error(error: &Error) -> Self {
        let title = if error.is_validation() { ERROR_TITLE } else { FAILURE_TITLE };
        Self {
            variant: ToastVariant::Destructive,
            title: title.to_string(),
            description: error.to_string(),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}
