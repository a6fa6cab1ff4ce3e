//! Gemini API連携（fetch）
//!
//! 食材識別・レシピ生成の2つのフローをブラウザの fetch で実装する。
//! リクエスト/レスポンス型とプロンプトは common を使う。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use snap_recipe_common::gemini::{
    endpoint_url, error_message, identify_request, mime_from_content_type, recipe_request,
    GeminiRequest, GeminiResponse, ImageRef, InlineData, DEFAULT_BASE_URL,
};
use snap_recipe_common::{
    parse_generated_recipe, parse_ingredient_analysis, Error, GenerateRecipeInput,
    GeneratedRecipe, IdentifyIngredientsInput, IngredientAnalysis, RecipeFlows, Result,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub struct FetchFlows {
    api_key: String,
    model: String,
}

impl FetchFlows {
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }

    /// 画像参照を inline_data に変換
    async fn load_image(&self, photo_url: &str) -> Result<InlineData> {
        match ImageRef::classify(photo_url)? {
            ImageRef::Inline(data) => Ok(data),
            ImageRef::Remote(url) => {
                let request = Request::new_with_str(url).map_err(js_error)?;
                let resp = fetch(&request).await?;
                if !resp.ok() {
                    return Err(Error::Flow(format!(
                        "Failed to fetch image: {}",
                        resp.status()
                    )));
                }

                let content_type = resp.headers().get("Content-Type").ok().flatten();
                let buffer = JsFuture::from(resp.array_buffer().map_err(js_error)?)
                    .await
                    .map_err(js_error)?;
                let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                Ok(InlineData {
                    mime_type: mime_from_content_type(content_type.as_deref()),
                    data: STANDARD.encode(bytes),
                })
            }
        }
    }

    /// Gemini API呼び出し（共通処理）
    async fn call_gemini_api(&self, request: &GeminiRequest) -> Result<String> {
        let url = endpoint_url(DEFAULT_BASE_URL, &self.model, &self.api_key);
        let body = serde_json::to_string(request)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let resp = fetch(&request).await?;
        if !resp.ok() {
            let text = JsFuture::from(resp.text().map_err(js_error)?)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default();
            return Err(Error::Flow(error_message(resp.status(), &text)));
        }

        let json = JsFuture::from(resp.json().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let response: GeminiResponse =
            serde_wasm_bindgen::from_value(json).map_err(|e| Error::Flow(e.to_string()))?;
        response.into_text()
    }
}

impl RecipeFlows for FetchFlows {
    async fn identify_ingredients(
        &self,
        input: &IdentifyIngredientsInput,
    ) -> Result<IngredientAnalysis> {
        let image = self.load_image(&input.photo_url).await?;
        let text = self.call_gemini_api(&identify_request(image)).await?;
        parse_ingredient_analysis(&text)
    }

    async fn generate_recipe(&self, input: &GenerateRecipeInput) -> Result<GeneratedRecipe> {
        let image = self.load_image(&input.photo_url).await?;
        let text = self.call_gemini_api(&recipe_request(input, image)).await?;
        parse_generated_recipe(&text)
    }
}

async fn fetch(request: &Request) -> Result<Response> {
    let window = web_sys::window().ok_or_else(|| Error::Flow("window not available".into()))?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    value.dyn_into().map_err(js_error)
}

/// JS例外をフロー失敗に変換
fn js_error(value: JsValue) -> Error {
    Error::Flow(js_message(&value))
}

fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
