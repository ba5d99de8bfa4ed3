use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;

use crate::response::AppError;
use crate::services::review;
use crate::state::AppState;

use super::SuccessResponse;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", post(start_session))
        .route("/outcome", post(apply_outcome))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeRequest {
    word: String,
    correct: bool,
    /// Explicitly pull a learned word back into review before applying the
    /// outcome.
    #[serde(default)]
    reopen: bool,
}

async fn start_session(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let session = review::start_session(&state, Utc::now())?;
    Ok(Json(SuccessResponse::new(session)))
}

async fn apply_outcome(
    State(state): State<AppState>,
    Json(payload): Json<OutcomeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = review::apply_outcome(
        &state,
        &payload.word,
        payload.correct,
        payload.reopen,
        Utc::now(),
    )
    .await?;
    Ok(Json(SuccessResponse::new(updated)))
}
