//! Gemini API連携（reqwest）
//!
//! 食材識別・レシピ生成の2つのフローを generateContent 呼び出しで実装する。
//! 画像参照が http(s) URL の場合は先に画像を取得して inline_data にする。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use snap_recipe_common::gemini::{
    endpoint_url, error_message, identify_request, mime_from_content_type, recipe_request,
    GeminiRequest, GeminiResponse, ImageRef, InlineData,
};
use snap_recipe_common::{
    parse_generated_recipe, parse_ingredient_analysis, Error, GenerateRecipeInput,
    GeneratedRecipe, IdentifyIngredientsInput, IngredientAnalysis, RecipeFlows,
};

use crate::config::Config;
use crate::error::Result;

pub struct GeminiFlows {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

fn flow_error(e: impl std::fmt::Display) -> Error {
    Error::Flow(e.to_string())
}

impl GeminiFlows {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
            // タイムアウトは設定しない（完了か失敗まで待つ）
            client: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.get_api_key()?,
            config.model.clone(),
            config.base_url.clone(),
        ))
    }

    /// 画像参照を inline_data に変換
    async fn load_image(&self, photo_url: &str) -> snap_recipe_common::Result<InlineData> {
        match ImageRef::classify(photo_url)? {
            ImageRef::Inline(data) => Ok(data),
            ImageRef::Remote(url) => {
                tracing::debug!(url, "画像を取得中");
                let resp = self.client.get(url).send().await.map_err(flow_error)?;
                if !resp.status().is_success() {
                    return Err(Error::Flow(format!(
                        "Failed to fetch image: {}",
                        resp.status().as_u16()
                    )));
                }
                let mime_type = mime_from_content_type(
                    resp.headers()
                        .get(CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok()),
                );
                let bytes = resp.bytes().await.map_err(flow_error)?;
                Ok(InlineData {
                    mime_type,
                    data: STANDARD.encode(&bytes),
                })
            }
        }
    }

    /// Gemini API呼び出し（共通処理）
    async fn call_gemini_api(&self, request: &GeminiRequest) -> snap_recipe_common::Result<String> {
        let url = endpoint_url(&self.base_url, &self.model, &self.api_key);
        let resp = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(flow_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "Gemini API エラー応答");
            return Err(Error::Flow(error_message(status.as_u16(), &body)));
        }

        let response: GeminiResponse = resp.json().await.map_err(flow_error)?;
        let text = response.into_text()?;
        tracing::debug!(len = text.len(), "Gemini API 応答");
        Ok(text)
    }
}

impl RecipeFlows for GeminiFlows {
    async fn identify_ingredients(
        &self,
        input: &IdentifyIngredientsInput,
    ) -> snap_recipe_common::Result<IngredientAnalysis> {
        let image = self.load_image(&input.photo_url).await?;
        let text = self.call_gemini_api(&identify_request(image)).await?;
        parse_ingredient_analysis(&text)
    }

    async fn generate_recipe(
        &self,
        input: &GenerateRecipeInput,
    ) -> snap_recipe_common::Result<GeneratedRecipe> {
        let image = self.load_image(&input.photo_url).await?;
        let text = self.call_gemini_api(&recipe_request(input, image)).await?;
        parse_generated_recipe(&text)
    }
}
