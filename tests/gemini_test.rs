//! Gemini フローのHTTPテスト（mockito）
//!
//! 食材識別とレシピ生成の2回の generateContent 呼び出しをモックサーバで再現する

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use snap_recipe::gemini::GeminiFlows;
use snap_recipe_common::{Error, RecipeSession, ToastVariant};

const API_KEY: &str = "test-key";
const MODEL: &str = "gemini-2.0-flash";
const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgo=";

fn flows_for(server: &ServerGuard) -> GeminiFlows {
    GeminiFlows::new(API_KEY.to_string(), MODEL.to_string(), server.url())
}

fn gemini_body(text: &str) -> String {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
    .to_string()
}

fn endpoint() -> Matcher {
    Matcher::Regex(format!("^/models/{}:generateContent", MODEL))
}

async fn mock_identify(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("POST", endpoint())
        .match_query(Matcher::UrlEncoded("key".into(), API_KEY.into()))
        .match_body(Matcher::Regex("identify the dish".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(
            r#"{"dishType":"Pasta","ingredients":["tomato","basil"]}"#,
        ))
        .create_async()
        .await
}

async fn mock_recipe(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("POST", endpoint())
        .match_query(Matcher::UrlEncoded("key".into(), API_KEY.into()))
        .match_body(Matcher::Regex("Write a recipe".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(
            r#"{"recipeDraft":{"description":"A simple pasta dish","instructions":["Boil water","Add pasta"]}}"#,
        ))
        .create_async()
        .await
}

// =============================================
// 正常系
// =============================================

#[tokio::test]
async fn test_generate_from_data_url() {
    let mut server = Server::new_async().await;
    let identify = mock_identify(&mut server).await;
    let recipe = mock_recipe(&mut server).await;

    let flows = flows_for(&server);
    let mut session = RecipeSession::new();
    session.select_file("pasta.png", Some(PNG_DATA_URL.to_string()));

    session.generate(&flows).await.expect("生成失敗");

    identify.assert_async().await;
    recipe.assert_async().await;

    let card = session.card().expect("カードがありません");
    assert_eq!(card.dish_type, "Pasta");
    assert_eq!(card.ingredients.as_slice(), ["tomato", "basil"]);
    assert_eq!(card.description, "A simple pasta dish");
    assert_eq!(card.instructions.as_slice(), ["Boil water", "Add pasta"]);

    let toasts = session.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Recipe Generated!");
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_generate_from_remote_url_fetches_image() {
    let mut server = Server::new_async().await;
    // 画像は各フローで1回ずつ取得される
    let image = server
        .mock("GET", "/photo.jpg")
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body([0xFFu8, 0xD8, 0xFF, 0xE0])
        .expect(2)
        .create_async()
        .await;
    let identify = mock_identify(&mut server).await;
    let recipe = mock_recipe(&mut server).await;

    let flows = flows_for(&server);
    let mut session = RecipeSession::new();
    session.set_url(format!("{}/photo.jpg", server.url()));

    session.generate(&flows).await.expect("生成失敗");

    image.assert_async().await;
    identify.assert_async().await;
    recipe.assert_async().await;
    assert_eq!(session.card().map(|c| c.dish_type.as_str()), Some("Pasta"));
}

#[tokio::test]
async fn test_recipe_request_carries_identified_ingredients() {
    let mut server = Server::new_async().await;
    mock_identify(&mut server).await;
    let recipe = server
        .mock("POST", endpoint())
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Write a recipe".into()),
            Matcher::Regex("Dish type: Pasta".into()),
            Matcher::Regex("- basil".into()),
        ]))
        .with_status(200)
        .with_body(gemini_body(
            r#"{"description":"Unwrapped","instructions":["Serve"]}"#,
        ))
        .create_async()
        .await;

    let flows = flows_for(&server);
    let mut session = RecipeSession::new();
    session.set_url(PNG_DATA_URL);
    session.generate(&flows).await.expect("生成失敗");

    recipe.assert_async().await;
    assert_eq!(session.card().map(|c| c.description.as_str()), Some("Unwrapped"));
}

// =============================================
// 異常系
// =============================================

#[tokio::test]
async fn test_api_error_message_is_shown_verbatim() {
    let mut server = Server::new_async().await;
    let identify = server
        .mock("POST", endpoint())
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"code":429,"message":"quota exceeded"}}"#)
        .expect(1)
        .create_async()
        .await;

    let flows = flows_for(&server);
    let mut session = RecipeSession::new();
    session.set_url(PNG_DATA_URL);

    let err = session.generate(&flows).await.unwrap_err();
    identify.assert_async().await;

    assert!(matches!(err, Error::Flow(ref m) if m == "quota exceeded"));
    assert!(session.card().is_none());
    assert!(!session.is_loading());

    let toasts = session.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].variant, ToastVariant::Destructive);
    assert_eq!(toasts[0].title, "Uh oh! Something went wrong.");
    assert_eq!(toasts[0].description, "quota exceeded");
}

#[tokio::test]
async fn test_recipe_failure_keeps_previous_card() {
    let mut server = Server::new_async().await;
    mock_identify(&mut server).await;
    let mut recipe = mock_recipe(&mut server).await;

    let flows = flows_for(&server);
    let mut session = RecipeSession::new();
    session.set_url(PNG_DATA_URL);
    session.generate(&flows).await.expect("1回目の生成失敗");
    session.edit_ingredient(0, "cherry tomato").unwrap();

    recipe.remove_async().await;
    recipe = server
        .mock("POST", endpoint())
        .match_body(Matcher::Regex("Write a recipe".into()))
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let err = session.generate(&flows).await.unwrap_err();
    recipe.assert_async().await;

    assert_eq!(err.to_string(), "API error: 500");
    let card = session.card().expect("前回のカードが消えています");
    assert_eq!(card.ingredients.get(0), Some("cherry tomato"));
}

#[tokio::test]
async fn test_image_fetch_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/missing.jpg")
        .with_status(404)
        .create_async()
        .await;

    let flows = flows_for(&server);
    let mut session = RecipeSession::new();
    session.set_url(format!("{}/missing.jpg", server.url()));

    let err = session.generate(&flows).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch image: 404");
    assert!(session.card().is_none());
}

#[tokio::test]
async fn test_unparseable_response() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", endpoint())
        .with_status(200)
        .with_body(gemini_body("I cannot see any food here."))
        .create_async()
        .await;

    let flows = flows_for(&server);
    let mut session = RecipeSession::new();
    session.set_url(PNG_DATA_URL);

    let err = session.generate(&flows).await.unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(session.card().is_none());

    let toasts = session.drain_toasts();
    assert_eq!(toasts[0].title, "Uh oh! Something went wrong.");
}
