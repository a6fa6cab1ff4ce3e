//! APIレスポンスパーサー
//!
//! AIレスポンスからJSONを抽出し、食材識別・レシピ生成の結果をパースする

use crate::error::{Error, Result};
use crate::types::{GeneratedRecipe, IngredientAnalysis, RecipeDraft};

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Examples
/// ```
/// use snap_recipe_common::extract_json;
///
/// let response = "Here you go: {\"dishType\": \"Pasta\"}";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"dishType\": \"Pasta\"}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSON not found in response".into()))
}

/// Step1レスポンスをパース
pub fn parse_ingredient_analysis(response: &str) -> Result<IngredientAnalysis> {
    let json_str = extract_json(response)?;
    serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("ingredient analysis: {}", e)))
}

/// Step2レスポンスをパース
///
/// `recipeDraft` で包まれていない下書きだけのJSONも受け付ける（description/instructions があるときのみ）
pub fn parse_generated_recipe(response: &str) -> Result<GeneratedRecipe> {
    let json_str = extract_json(response)?;
    let value: serde_json::Value = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("recipe: {}", e)))?;

    let is_bare_draft = value.get("description").is_some() || value.get("instructions").is_some();
    if !is_bare_draft {
        return serde_json::from_value(value).map_err(|e| Error::Parse(format!("recipe: {}", e)));
    }

    let recipe_draft: RecipeDraft =
        serde_json::from_value(value).map_err(|e| Error::Parse(format!("recipe: {}", e)))?;
    Ok(GeneratedRecipe { recipe_draft })
}
