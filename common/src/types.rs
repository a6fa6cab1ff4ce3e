//! フロー入出力の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - IdentifyIngredientsInput / IngredientAnalysis: 食材識別フロー
//! - GenerateRecipeInput / GeneratedRecipe: レシピ生成フロー

use serde::{Deserialize, Serialize};

/// 食材識別フローの入力
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyIngredientsInput {
    /// 画像参照（data URL または http(s) URL）
    pub photo_url: String,
}

/// 食材識別フローの出力
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAnalysis {
    pub dish_type: String,
    pub ingredients: Vec<String>,
}

/// レシピ生成フローの入力
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeInput {
    pub dish_type: String,
    pub ingredients: Vec<String>,
    pub photo_url: String,
}

impl GenerateRecipeInput {
    /// 食材識別結果と同じ画像参照からレシピ生成入力を組み立てる
    pub fn from_analysis(analysis: &IngredientAnalysis, photo_url: &str) -> Self {
        Self {
            dish_type: analysis.dish_type.clone(),
            ingredients: analysis.ingredients.clone(),
            photo_url: photo_url.to_string(),
        }
    }
}

/// レシピ下書き（説明 + 手順）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub description: String,
    pub instructions: Vec<String>,
}

/// レシピ生成フローの出力
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    pub recipe_draft: RecipeDraft,
}
