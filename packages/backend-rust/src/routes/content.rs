use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::response::AppError;
use crate::state::AppState;

use super::SuccessResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/chapters/:chapterId/vocabulary", get(chapter_vocabulary))
}

async fn chapter_vocabulary(
    State(state): State<AppState>,
    Path(chapter_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let items = state
        .content()
        .chapter_vocabulary(chapter_id.trim())
        .ok_or_else(|| AppError::not_found(format!("unknown chapter '{}'", chapter_id.trim())))?;

    Ok(Json(SuccessResponse::new(items.to_vec())))
}
