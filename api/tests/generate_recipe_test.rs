mod common;

use axum::http::{HeaderValue, StatusCode, header::ACCEPT_LANGUAGE};
use common::{DiacareContext, GEMINI_KEY, GEMINI_PATH, gemini_text};
use serde_json::{Value, json};
use test_context::test_context;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_string_contains, method, path, query_param},
};

fn recipe_request() -> Value {
    json!({
        "calories": 400,
        "mealType": "lunch",
        "dietaryRestrictions": ["vegetarian"],
        "preferences": "quick",
        "cookingTime": 20,
        "servings": 2
    })
}

#[test_context(DiacareContext)]
#[tokio::test]
async fn returns_the_recipe_the_model_wrote(ctx: &mut DiacareContext) {
    let model_text = r#"Here you go: {"title":"Veggie Bowl","servings":"2","glycemicIndex":"Low","ingredients":["1 cup quinoa","1 cup spinach"],"instructions":["Cook quinoa","Mix"]} Enjoy!"#;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(query_param("key", GEMINI_KEY))
        .and(body_string_contains("- Target calories: 400 per serving"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text(model_text)))
        .expect(1)
        .mount(&ctx.gemini)
        .await;

    let response = ctx
        .server
        .post("/api/generate-recipe")
        .json(&recipe_request())
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recipe"]["title"], "Veggie Bowl");
    assert_eq!(body["recipe"]["glycemicIndex"], "Low");
    assert_eq!(body["recipe"]["ingredients"][1], "1 cup spinach");
    assert!(body["recipe"].get("rawResponse").is_none());
}

#[test_context(DiacareContext)]
#[tokio::test]
async fn prose_without_json_becomes_a_placeholder_recipe(ctx: &mut DiacareContext) {
    let model_text = "Sorry, I can only describe the dish in words today.";
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text(model_text)))
        .mount(&ctx.gemini)
        .await;

    let response = ctx
        .server
        .post("/api/generate-recipe")
        .json(&recipe_request())
        .await;

    response.assert_status_ok();
    let recipe = &response.json::<Value>()["recipe"];
    assert_eq!(recipe["title"], "Custom Diabetes-Friendly Recipe");
    assert_eq!(recipe["cookTime"], "20 minutes");
    assert_eq!(recipe["servings"], "2");
    assert_eq!(recipe["calories"], "400 per serving");
    assert_eq!(recipe["rawResponse"], model_text);
}

#[test_context(DiacareContext)]
#[tokio::test]
async fn rejected_key_maps_to_unauthorized(ctx: &mut DiacareContext) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&ctx.gemini)
        .await;

    let response = ctx
        .server
        .post("/api/generate-recipe")
        .json(&recipe_request())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Authentication failed. Your Google Gemini API key is invalid or expired."
    );
    assert_eq!(body["details"], "API key not valid");
    assert!(body["instructions"].as_str().is_some());
}

#[test_context(DiacareContext)]
#[tokio::test]
async fn provider_outage_is_a_server_error(ctx: &mut DiacareContext) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
        .mount(&ctx.gemini)
        .await;

    let response = ctx
        .server
        .post("/api/generate-recipe")
        .json(&recipe_request())
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Failed to generate recipe. Please check your API key and try again."
    );
    assert!(body["details"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn missing_key_fails_before_calling_gemini() {
    let ctx = DiacareContext::with_keys("", common::DEEPSEEK_KEY).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text("{}")))
        .expect(0)
        .mount(&ctx.gemini)
        .await;

    let response = ctx
        .server
        .post("/api/generate-recipe")
        .json(&recipe_request())
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("GOOGLE_GEMINI_API_KEY"));
    assert_eq!(
        body["instructions"],
        "Get your API key from https://aistudio.google.com/app/apikey"
    );
}

#[test_context(DiacareContext)]
#[tokio::test]
async fn invalid_body_is_rejected_without_a_provider_call(ctx: &mut DiacareContext) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text("{}")))
        .expect(0)
        .mount(&ctx.gemini)
        .await;

    let response = ctx
        .server
        .post("/api/generate-recipe")
        .json(&json!({ "calories": 400, "mealType": "brunch", "cookingTime": 20, "servings": 2 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx
        .server
        .post("/api/generate-recipe")
        .json(&json!({ "calories": 0, "mealType": "lunch", "cookingTime": 20, "servings": 2 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid request");
}

#[test_context(DiacareContext)]
#[tokio::test]
async fn accept_language_reaches_the_prompt(ctx: &mut DiacareContext) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(body_string_contains("in French"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_text(r#"{"title":"Bol de légumes"}"#)),
        )
        .expect(1)
        .mount(&ctx.gemini)
        .await;

    let response = ctx
        .server
        .post("/api/generate-recipe")
        .add_header(ACCEPT_LANGUAGE, HeaderValue::from_static("fr-FR,fr;q=0.9,en;q=0.5"))
        .json(&recipe_request())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["recipe"]["title"], "Bol de légumes");
}

#[test_context(DiacareContext)]
#[tokio::test]
async fn error_details_never_carry_the_api_key(ctx: &mut DiacareContext) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>bad gateway</html>"))
        .mount(&ctx.gemini)
        .await;

    let response = ctx
        .server
        .post("/api/generate-recipe")
        .json(&recipe_request())
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.text().contains(GEMINI_KEY));
}
