use chrono::{DateTime, Utc};
use serde::Serialize;

use storylex_algo::{self as algo, MasteryLevel, VocabularyWord};

use crate::state::AppState;

use super::ServiceError;

/// Add a word to the learner's saved list, copying its metadata from the
/// chapter's content feed. Re-adding a tracked word refreshes metadata only
/// and leaves the scheduler state untouched, so the call is idempotent from
/// the caller's perspective.
pub async fn add_word(
    state: &AppState,
    chapter_id: &str,
    word: &str,
    now: DateTime<Utc>,
) -> Result<VocabularyWord, ServiceError> {
    let key = word.trim();
    if key.is_empty() {
        return Err(ServiceError::Validation("word must not be empty".into()));
    }

    let meta = state.content().find_word(chapter_id, key).ok_or_else(|| {
        ServiceError::NotFound(format!("no vocabulary item '{key}' in chapter '{chapter_id}'"))
    })?;

    let entry = match state.profile().get(key) {
        Some(mut existing) => {
            existing.refresh_metadata(meta);
            existing
        }
        None => VocabularyWord::from_metadata(meta, now),
    };

    state.profile().upsert(entry.clone()).await?;
    tracing::debug!(word = %key, "word saved to learner list");
    Ok(entry)
}

/// Remove a word outright: no soft-delete, no history retained.
pub async fn remove_word(state: &AppState, word: &str) -> Result<(), ServiceError> {
    let key = word.trim();
    if !state.profile().remove(key).await? {
        return Err(ServiceError::NotFound(format!(
            "word '{key}' is not in the learner's list"
        )));
    }
    tracing::debug!(word = %key, "word removed from learner list");
    Ok(())
}

/// The learner's full saved list, oldest addition first.
pub fn list_words(state: &AppState) -> Vec<VocabularyWord> {
    state.profile().words()
}

/// Preview of currently due words, soonest scheduled first. No practice
/// fallback and no shuffle; this is the list view, not a session.
pub fn due_words(state: &AppState, now: DateTime<Utc>) -> Vec<VocabularyWord> {
    algo::select_due_set(&state.profile().words(), now)
}

/// Explicit learner action returning a word (typically a learned one) to
/// its freshly-added scheduler state.
pub async fn reset_word(
    state: &AppState,
    word: &str,
    now: DateTime<Utc>,
) -> Result<VocabularyWord, ServiceError> {
    let key = word.trim();
    let current = state.profile().get(key).ok_or_else(|| {
        ServiceError::NotFound(format!("word '{key}' is not in the learner's list"))
    })?;

    let reset = algo::reset_progress(&current, now);
    state.profile().upsert(reset.clone()).await?;
    tracing::info!(word = %key, "word progress reset");
    Ok(reset)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyStats {
    pub total_words: usize,
    pub new_words: usize,
    pub learning_words: usize,
    pub reviewing_words: usize,
    pub mastered_words: usize,
    pub learned_words: usize,
    pub due_words: usize,
}

/// Per-tier counts over the saved list, plus how many words are due now.
pub fn stats(state: &AppState, now: DateTime<Utc>) -> VocabularyStats {
    let words = state.profile().words();
    let mut out = VocabularyStats {
        total_words: words.len(),
        new_words: 0,
        learning_words: 0,
        reviewing_words: 0,
        mastered_words: 0,
        learned_words: 0,
        due_words: 0,
    };

    for word in &words {
        match word.mastery_level {
            MasteryLevel::New => out.new_words += 1,
            MasteryLevel::Learning => out.learning_words += 1,
            MasteryLevel::Reviewing => out.reviewing_words += 1,
            MasteryLevel::Mastered => out.mastered_words += 1,
            MasteryLevel::Learned => out.learned_words += 1,
        }
        if algo::is_due(word, now) {
            out.due_words += 1;
        }
    }
    out
}
