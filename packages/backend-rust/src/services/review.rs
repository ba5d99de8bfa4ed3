use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use storylex_algo::{self as algo, SessionKind, VocabularyWord};

use crate::state::AppState;

use super::ServiceError;

/// A review session handed to the UI shell: an id for correlation and the
/// shuffled word sequence to present.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedSession {
    pub session_id: Uuid,
    pub kind: SessionKind,
    pub words: Vec<VocabularyWord>,
}

/// Build the next review session from the saved list: the full due set when
/// anything is due, otherwise a random practice set. An empty pool is the
/// distinct `EmptyPool` condition, never a silently empty session.
pub fn start_session(state: &AppState, now: DateTime<Utc>) -> Result<StartedSession, ServiceError> {
    let words = state.profile().words();
    let mut rng = rand::thread_rng();

    let session = algo::start_review_session(&words, now, state.scheduler(), &mut rng)
        .ok_or(ServiceError::EmptyPool)?;

    let started = StartedSession {
        session_id: Uuid::new_v4(),
        kind: session.kind,
        words: session.words,
    };
    tracing::info!(
        session_id = %started.session_id,
        kind = ?started.kind,
        count = started.words.len(),
        "review session started"
    );
    Ok(started)
}

/// Apply one pass/fail outcome and write the updated list back before the
/// next outcome is accepted. Reviews already committed stay committed if
/// the learner abandons the session. A `learned` word is rejected unless
/// the caller explicitly reopens it. On a store failure the in-memory
/// update stands and the error is surfaced so the learner can retry saving.
pub async fn apply_outcome(
    state: &AppState,
    word: &str,
    correct: bool,
    reopen: bool,
    now: DateTime<Utc>,
) -> Result<VocabularyWord, ServiceError> {
    let key = word.trim();
    let current = state.profile().get(key).ok_or_else(|| {
        ServiceError::NotFound(format!("word '{key}' is not in the learner's list"))
    })?;

    let current = if current.is_learned() {
        if !reopen {
            return Err(ServiceError::InvalidState(format!(
                "word '{key}' is already learned; pass reopen to review it again"
            )));
        }
        algo::reopen(&current)
    } else {
        current
    };

    let updated = algo::apply_review_outcome(&current, correct, now, state.scheduler())
        .map_err(|err| ServiceError::InvalidState(err.to_string()))?;

    state.profile().upsert(updated.clone()).await?;
    tracing::debug!(word = %key, correct, "review outcome applied");
    Ok(updated)
}
