mod common;

use axum::http::StatusCode;
use common::TestApp;
use quiz_service::services::providers::mock::{
    sample_flashcards_json, sample_quiz_json, MockTextGenerator,
};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn missing_session_id_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.generate(json!({})).await;

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().unwrap().contains("session_id is required"));
}

#[tokio::test]
async fn empty_session_id_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.generate(json!({ "session_id": "" })).await;

    assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn unknown_session_id_returns_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .generate(json!({ "session_id": "0123456789abcdef0123456789abcdef" }))
        .await;

    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid session_id or session expired"));
}

#[tokio::test]
async fn session_lookup_precedes_field_validation() {
    let app = TestApp::spawn().await;

    // Both the session and the difficulty are bad; the session must win.
    let response = app
        .generate(json!({
            "session_id": "0123456789abcdef0123456789abcdef",
            "difficulty": "impossible"
        }))
        .await;

    assert_eq!(StatusCode::NOT_FOUND, response.status());
}

#[tokio::test]
async fn invalid_difficulty_is_rejected() {
    let app = TestApp::spawn().await;
    let session_id = app.upload_session().await;

    let response = app
        .generate(json!({ "session_id": session_id, "difficulty": "expert" }))
        .await;

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid difficulty. Must be one of: basic, medium, advanced"));
}

#[tokio::test]
async fn invalid_language_is_rejected() {
    let app = TestApp::spawn().await;
    let session_id = app.upload_session().await;

    let response = app
        .generate(json!({ "session_id": session_id, "language": "de" }))
        .await;

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid language. Must be one of: en, ur, es, fr, ar"));
}

#[tokio::test]
async fn count_out_of_range_is_rejected() {
    let app = TestApp::spawn().await;
    let session_id = app.upload_session().await;

    for bad_count in [2, 21] {
        let response = app
            .generate(json!({ "session_id": session_id, "num_questions": bad_count }))
            .await;

        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("num_questions must be between 3 and 20"));
    }
}

#[tokio::test]
async fn non_integer_count_is_rejected() {
    let app = TestApp::spawn().await;
    let session_id = app.upload_session().await;

    let response = app
        .generate(json!({ "session_id": session_id, "num_questions": 4.5 }))
        .await;

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("num_questions must be between 3 and 20"));
}

#[tokio::test]
async fn count_upper_bound_succeeds() {
    let app =
        TestApp::spawn_with_generator(Arc::new(MockTextGenerator::returning(sample_quiz_json(20))))
            .await;
    let session_id = app.upload_session().await;

    let response = app
        .generate(json!({ "session_id": session_id, "num_questions": 20 }))
        .await;

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["items"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn invalid_mode_is_rejected() {
    let app = TestApp::spawn().await;
    let session_id = app.upload_session().await;

    let response = app
        .generate(json!({ "session_id": session_id, "mode": "podcast" }))
        .await;

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid mode. Must be one of: quiz, flashcard"));
}

#[tokio::test]
async fn generates_quiz_with_defaults() {
    let app = TestApp::spawn().await;
    let session_id = app.upload_session().await;

    let response = app.generate(json!({ "session_id": session_id })).await;

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["mode"], "quiz");
    assert_eq!(body["difficulty"], "medium");
    assert_eq!(body["language"], "en");

    let items = body["items"].as_array().expect("items should be an array");
    assert_eq!(items.len(), 5);

    let first = &items[0];
    assert!(first["question"].is_string());
    assert_eq!(first["options"].as_array().unwrap().len(), 4);
    assert!(first["correctIndex"].as_u64().unwrap() < 4);
    assert!(first["tag"].is_string());
    assert!(first["explanation"].is_string());
}

#[tokio::test]
async fn echoes_requested_parameters() {
    let app = TestApp::spawn().await;
    let session_id = app.upload_session().await;

    let response = app
        .generate(json!({
            "session_id": session_id,
            "difficulty": "advanced",
            "language": "ur"
        }))
        .await;

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["difficulty"], "advanced");
    assert_eq!(body["language"], "ur");
}

#[tokio::test]
async fn generates_flashcards() {
    let app = TestApp::spawn_with_generator(Arc::new(MockTextGenerator::returning(
        sample_flashcards_json(5),
    )))
    .await;
    let session_id = app.upload_session().await;

    let response = app
        .generate(json!({ "session_id": session_id, "mode": "flashcard" }))
        .await;

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["mode"], "flashcard");

    let items = body["items"].as_array().expect("items should be an array");
    assert_eq!(items.len(), 5);
    assert!(items[0]["front"].is_string());
    assert!(items[0]["back"].is_string());
}

#[tokio::test]
async fn fenced_model_output_is_accepted() {
    let fenced = format!("```json\n{}\n```", sample_quiz_json(5));
    let app = TestApp::spawn_with_generator(Arc::new(MockTextGenerator::returning(fenced))).await;
    let session_id = app.upload_session().await;

    let response = app.generate(json!({ "session_id": session_id })).await;

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn unparseable_model_output_is_bad_gateway() {
    let app = TestApp::spawn_with_generator(Arc::new(MockTextGenerator::returning(
        "I cannot produce that content.",
    )))
    .await;
    let session_id = app.upload_session().await;

    let response = app.generate(json!({ "session_id": session_id })).await;

    assert_eq!(StatusCode::BAD_GATEWAY, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Failed to parse model response as JSON"));
}

#[tokio::test]
async fn item_count_drift_is_served_as_is() {
    let app =
        TestApp::spawn_with_generator(Arc::new(MockTextGenerator::returning(sample_quiz_json(3))))
            .await;
    let session_id = app.upload_session().await;

    let response = app
        .generate(json!({ "session_id": session_id, "num_questions": 5 }))
        .await;

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
}
