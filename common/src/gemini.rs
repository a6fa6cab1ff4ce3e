//! Gemini API のリクエスト/レスポンス型（CLI/WASM共通）
//!
//! HTTP送信は各フロントエンドが行う（CLI: reqwest, WASM: fetch）。
//! ここでは画像参照の分類、リクエスト組み立て、レスポンス本文の取り出しだけを扱う。

use crate::error::{Error, Result};
use crate::prompts::{build_identify_prompt, build_recipe_prompt};
use crate::types::GenerateRecipeInput;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// generateContent のエンドポイントURL
pub fn endpoint_url(base_url: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        base_url.trim_end_matches('/'),
        model,
        api_key
    )
}

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            response_mime_type: "application/json".to_string(),
        }
    }
}

/// Gemini APIレスポンス
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: ResponseContent,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetails {
    message: String,
}

impl GeminiResponse {
    /// 最初の候補のテキストを取り出す
    pub fn into_text(self) -> Result<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Flow("Empty response".to_string()))
    }
}

/// HTTPエラー時のメッセージ。本文に Gemini のエラーメッセージがあればそれを使う
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<GeminiErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
        _ => format!("API error: {}", status),
    }
}

/// 画像参照の種類
#[derive(Debug, PartialEq, Eq)]
pub enum ImageRef<'a> {
    /// data URL（そのまま inline_data にできる）
    Inline(InlineData),
    /// http(s) URL（取得してから inline_data にする）
    Remote(&'a str),
}

impl<'a> ImageRef<'a> {
    pub fn classify(photo_url: &'a str) -> Result<Self> {
        if photo_url.starts_with("data:") {
            let data = extract_base64_from_data_url(photo_url)
                .filter(|d| !d.is_empty())
                .ok_or_else(|| Error::Flow("Invalid data URL".to_string()))?;
            return Ok(ImageRef::Inline(InlineData {
                mime_type: extract_mime_type_from_data_url(photo_url).to_string(),
                data: data.to_string(),
            }));
        }
        Ok(ImageRef::Remote(photo_url))
    }
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出（取れなければ image/jpeg）
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_MIME_TYPE)
}

/// Content-Type ヘッダからMIMEタイプを取り出す（パラメータは除く）
pub fn mime_from_content_type(content_type: Option<&str>) -> String {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .filter(|ct| ct.starts_with("image/"))
        .unwrap_or(DEFAULT_MIME_TYPE)
        .to_string()
}

fn image_request(prompt: String, image: InlineData) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text { text: prompt },
                Part::InlineData { inline_data: image },
            ],
        }],
        generation_config: GenerationConfig::default(),
    }
}

/// Step1リクエスト（食材識別）
pub fn identify_request(image: InlineData) -> GeminiRequest {
    image_request(build_identify_prompt(), image)
}

/// Step2リクエスト（レシピ生成）
pub fn recipe_request(input: &GenerateRecipeInput, image: InlineData) -> GeminiRequest {
    image_request(build_recipe_prompt(&input.dish_type, &input.ingredients), image)
}
