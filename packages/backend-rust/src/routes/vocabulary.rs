use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;

use crate::response::AppError;
use crate::services::vocabulary;
use crate::state::AppState;

use super::SuccessResponse;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/words", get(list_words).post(add_word))
        .route("/words/due", get(due_words))
        .route("/words/:word", delete(remove_word))
        .route("/words/:word/reset", post(reset_word))
        .route("/stats", get(stats))
        .route("/save", post(save_profile))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddWordRequest {
    chapter_id: String,
    word: String,
}

async fn list_words(State(state): State<AppState>) -> impl IntoResponse {
    Json(SuccessResponse::new(vocabulary::list_words(&state)))
}

async fn due_words(State(state): State<AppState>) -> impl IntoResponse {
    Json(SuccessResponse::new(vocabulary::due_words(
        &state,
        Utc::now(),
    )))
}

async fn add_word(
    State(state): State<AppState>,
    Json(payload): Json<AddWordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let word =
        vocabulary::add_word(&state, payload.chapter_id.trim(), &payload.word, Utc::now()).await?;
    Ok(Json(SuccessResponse::new(word)))
}

async fn remove_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    vocabulary::remove_word(&state, &word).await?;
    Ok(Json(SuccessResponse::new(serde_json::json!({
        "removed": word,
    }))))
}

async fn reset_word(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reset = vocabulary::reset_word(&state, &word, Utc::now()).await?;
    Ok(Json(SuccessResponse::new(reset)))
}

async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(SuccessResponse::new(vocabulary::stats(&state, Utc::now())))
}

/// Retry writing the profile document. Used after a reported persistence
/// failure; safe to call any number of times.
async fn save_profile(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state
        .profile()
        .save()
        .await
        .map_err(|err| AppError::persistence(err.to_string()))?;
    Ok(Json(SuccessResponse::new(serde_json::json!({
        "saved": true,
    }))))
}
