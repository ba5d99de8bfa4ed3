use axum::http::StatusCode;

mod common;

use common::{body_json, create_test_app, delete, expect_error, get, post_json};

#[tokio::test]
async fn test_health_root() {
    let app = create_test_app().await;

    let response = get(&app.router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["trackedWords"], 0);
}

#[tokio::test]
async fn test_health_info() {
    let app = create_test_app().await;

    let response = get(&app.router, "/health/info").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["service"], "storylex-backend");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = create_test_app().await;
    let response = get(&app.router, "/api/nonsense").await;
    expect_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[tokio::test]
async fn test_chapter_vocabulary_feed() {
    let app = create_test_app().await;

    let response = get(&app.router, "/api/content/chapters/ch-1/vocabulary").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"][0]["word"], "obstinate");
}

#[tokio::test]
async fn test_unknown_chapter_is_not_found() {
    let app = create_test_app().await;
    let response = get(&app.router, "/api/content/chapters/ch-404/vocabulary").await;
    expect_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[tokio::test]
async fn test_add_word_and_list() {
    let app = create_test_app().await;

    let response = post_json(
        &app.router,
        "/api/vocabulary/words",
        serde_json::json!({ "chapterId": "ch-1", "word": "obstinate" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["word"], "obstinate");
    assert_eq!(body["data"]["reviewCount"], 0);
    assert_eq!(body["data"]["intervalIndex"], 0);
    assert_eq!(body["data"]["masteryLevel"], "new");
    assert_eq!(body["data"]["easeFactor"], 2.5);

    let list = body_json(get(&app.router, "/api/vocabulary/words").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_word_absent_from_chapter_is_not_found() {
    let app = create_test_app().await;
    let response = post_json(
        &app.router,
        "/api/vocabulary/words",
        serde_json::json!({ "chapterId": "ch-1", "word": "perspicacious" }),
    )
    .await;
    expect_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[tokio::test]
async fn test_add_blank_word_is_validation_error() {
    let app = create_test_app().await;
    let response = post_json(
        &app.router,
        "/api/vocabulary/words",
        serde_json::json!({ "chapterId": "ch-1", "word": "   " }),
    )
    .await;
    expect_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn test_re_adding_word_keeps_scheduler_state() {
    let app = create_test_app().await;

    let first = body_json(
        post_json(
            &app.router,
            "/api/vocabulary/words",
            serde_json::json!({ "chapterId": "ch-1", "word": "obstinate" }),
        )
        .await,
    )
    .await;

    let second = body_json(
        post_json(
            &app.router,
            "/api/vocabulary/words",
            serde_json::json!({ "chapterId": "ch-1", "word": "obstinate" }),
        )
        .await,
    )
    .await;

    assert_eq!(first["data"]["addedAt"], second["data"]["addedAt"]);
    assert_eq!(first["data"]["nextReview"], second["data"]["nextReview"]);
    assert_eq!(second["data"]["reviewCount"], 0);
    assert_eq!(second["data"]["intervalIndex"], 0);

    let list = body_json(get(&app.router, "/api/vocabulary/words").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_remove_word_is_gone_for_good() {
    let app = create_test_app().await;

    post_json(
        &app.router,
        "/api/vocabulary/words",
        serde_json::json!({ "chapterId": "ch-1", "word": "laconic" }),
    )
    .await;

    let response = delete(&app.router, "/api/vocabulary/words/laconic").await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(get(&app.router, "/api/vocabulary/words").await).await;
    assert!(list["data"].as_array().unwrap().is_empty());

    let again = delete(&app.router, "/api/vocabulary/words/laconic").await;
    expect_error(again, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[tokio::test]
async fn test_profile_document_is_persisted() {
    let app = create_test_app().await;

    post_json(
        &app.router,
        "/api/vocabulary/words",
        serde_json::json!({ "chapterId": "ch-1", "word": "sagacious" }),
    )
    .await;

    let raw = std::fs::read(&app.profile_path).expect("profile document written");
    let doc: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    let words = doc["words"].as_array().unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0]["word"], "sagacious");
    assert!(words[0]["addedAt"].is_string());
    assert!(words[0]["nextReview"].is_string());
}

#[tokio::test]
async fn test_empty_pool_is_a_distinct_condition() {
    let app = create_test_app().await;
    let response = post_json(&app.router, "/api/review/session", serde_json::json!({})).await;
    expect_error(response, StatusCode::NOT_FOUND, "EMPTY_POOL").await;
}

#[tokio::test]
async fn test_session_and_outcome_flow() {
    let app = create_test_app().await;

    for word in ["obstinate", "sagacious"] {
        post_json(
            &app.router,
            "/api/vocabulary/words",
            serde_json::json!({ "chapterId": "ch-1", "word": word }),
        )
        .await;
    }

    // both words are brand-new, so the session is a full due session
    let session = body_json(
        post_json(&app.router, "/api/review/session", serde_json::json!({})).await,
    )
    .await;
    assert_eq!(session["data"]["kind"], "due");
    assert_eq!(session["data"]["words"].as_array().unwrap().len(), 2);
    assert!(session["data"]["sessionId"].is_string());

    let correct = body_json(
        post_json(
            &app.router,
            "/api/review/outcome",
            serde_json::json!({ "word": "obstinate", "correct": true }),
        )
        .await,
    )
    .await;
    assert_eq!(correct["data"]["reviewCount"], 1);
    assert_eq!(correct["data"]["intervalIndex"], 1);
    assert_eq!(correct["data"]["consecutiveCorrect"], 1);
    assert_eq!(correct["data"]["masteryLevel"], "learning");

    let incorrect = body_json(
        post_json(
            &app.router,
            "/api/review/outcome",
            serde_json::json!({ "word": "sagacious", "correct": false }),
        )
        .await,
    )
    .await;
    assert_eq!(incorrect["data"]["reviewCount"], 1);
    assert_eq!(incorrect["data"]["intervalIndex"], 0);
    assert_eq!(incorrect["data"]["consecutiveCorrect"], 0);
    assert_eq!(incorrect["data"]["totalIncorrect"], 1);
}

#[tokio::test]
async fn test_outcome_for_unknown_word_is_not_found() {
    let app = create_test_app().await;
    let response = post_json(
        &app.router,
        "/api/review/outcome",
        serde_json::json!({ "word": "ghost", "correct": true }),
    )
    .await;
    expect_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

async fn drive_word_to_learned(app: &common::TestApp, word: &str) {
    post_json(
        &app.router,
        "/api/vocabulary/words",
        serde_json::json!({ "chapterId": "ch-1", "word": word }),
    )
    .await;

    // climbing the ladder: after the fourth straight pass the word sits at
    // the longest interval with a streak past the threshold
    for _ in 0..3 {
        let response = post_json(
            &app.router,
            "/api/review/outcome",
            serde_json::json!({ "word": word, "correct": true }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let last = body_json(
        post_json(
            &app.router,
            "/api/review/outcome",
            serde_json::json!({ "word": word, "correct": true }),
        )
        .await,
    )
    .await;
    assert_eq!(last["data"]["masteryLevel"], "learned");
    assert!(last["data"]["learnedAt"].is_string());
}

#[tokio::test]
async fn test_learned_word_is_terminal_until_reopened() {
    let app = create_test_app().await;
    drive_word_to_learned(&app, "obstinate").await;

    // learned words never enter a session
    let session = post_json(&app.router, "/api/review/session", serde_json::json!({})).await;
    expect_error(session, StatusCode::NOT_FOUND, "EMPTY_POOL").await;

    let rejected = post_json(
        &app.router,
        "/api/review/outcome",
        serde_json::json!({ "word": "obstinate", "correct": true }),
    )
    .await;
    expect_error(rejected, StatusCode::CONFLICT, "INVALID_STATE").await;

    let reopened = body_json(
        post_json(
            &app.router,
            "/api/review/outcome",
            serde_json::json!({ "word": "obstinate", "correct": false, "reopen": true }),
        )
        .await,
    )
    .await;
    assert_eq!(reopened["data"]["masteryLevel"], "reviewing");
    assert_eq!(reopened["data"]["consecutiveCorrect"], 0);
    assert!(reopened["data"].get("learnedAt").is_none());
}

#[tokio::test]
async fn test_reset_progress_reactivates_learned_word() {
    let app = create_test_app().await;
    drive_word_to_learned(&app, "sagacious").await;

    let reset = body_json(
        post_json(
            &app.router,
            "/api/vocabulary/words/sagacious/reset",
            serde_json::json!({}),
        )
        .await,
    )
    .await;
    assert_eq!(reset["data"]["masteryLevel"], "new");
    assert_eq!(reset["data"]["reviewCount"], 0);
    assert_eq!(reset["data"]["intervalIndex"], 0);

    let session = body_json(
        post_json(&app.router, "/api/review/session", serde_json::json!({})).await,
    )
    .await;
    assert_eq!(session["data"]["kind"], "due");
    assert_eq!(session["data"]["words"][0]["word"], "sagacious");
}

#[tokio::test]
async fn test_stats_buckets() {
    let app = create_test_app().await;

    for word in ["obstinate", "sagacious", "laconic"] {
        post_json(
            &app.router,
            "/api/vocabulary/words",
            serde_json::json!({ "chapterId": "ch-1", "word": word }),
        )
        .await;
    }
    post_json(
        &app.router,
        "/api/review/outcome",
        serde_json::json!({ "word": "laconic", "correct": true }),
    )
    .await;

    let stats = body_json(get(&app.router, "/api/vocabulary/stats").await).await;
    assert_eq!(stats["data"]["totalWords"], 3);
    assert_eq!(stats["data"]["newWords"], 2);
    assert_eq!(stats["data"]["learningWords"], 1);
    assert_eq!(stats["data"]["learnedWords"], 0);
    // the reviewed word is scheduled three days out; the two new ones are due
    assert_eq!(stats["data"]["dueWords"], 2);
}

#[tokio::test]
async fn test_manual_save_endpoint_is_idempotent() {
    let app = create_test_app().await;

    post_json(
        &app.router,
        "/api/vocabulary/words",
        serde_json::json!({ "chapterId": "ch-1", "word": "obstinate" }),
    )
    .await;

    for _ in 0..2 {
        let response =
            post_json(&app.router, "/api/vocabulary/save", serde_json::json!({})).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let raw = std::fs::read(&app.profile_path).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(doc["words"].as_array().unwrap().len(), 1);
}
