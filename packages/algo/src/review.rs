//! Review-outcome rule set.
//!
//! `apply_review_outcome` is a pure function of (word state, outcome, now,
//! config): it returns the updated word and touches nothing else. All I/O
//! stays with the caller.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::types::{MasteryLevel, SchedulerConfig, VocabularyWord, REVIEW_INTERVALS};

/// Why a review attempt was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewError {
    /// The word is in the terminal `learned` state; it must be reopened
    /// before it can be reviewed again.
    AlreadyLearned,
}

impl fmt::Display for ReviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewError::AlreadyLearned => {
                write!(f, "word is already learned; reopen it before reviewing")
            }
        }
    }
}

impl std::error::Error for ReviewError {}

/// Apply one pass/fail review attempt to a word.
///
/// Correct answers advance the interval ladder (capped at the longest
/// interval) and can promote the word to `learned` once the streak exceeds
/// the configured threshold there. Incorrect answers regress one rung
/// (never below the shortest) and clear the streak. Either way the next
/// review is rescheduled a full interval from `now`.
pub fn apply_review_outcome(
    word: &VocabularyWord,
    correct: bool,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> Result<VocabularyWord, ReviewError> {
    if word.is_learned() {
        return Err(ReviewError::AlreadyLearned);
    }

    let top = REVIEW_INTERVALS.len() - 1;
    let mut next = word.clone();
    next.last_reviewed = now;
    next.review_count += 1;

    if correct {
        next.total_correct += 1;
        next.consecutive_correct += 1;
        next.interval_index = (next.interval_index + 1).min(top);
    } else {
        next.total_incorrect += 1;
        next.consecutive_correct = 0;
        next.interval_index = next.interval_index.saturating_sub(1);
    }
    next.next_review = now + Duration::days(REVIEW_INTERVALS[next.interval_index]);

    if correct
        && next.interval_index == top
        && next.consecutive_correct > config.learned_streak_threshold
    {
        next.mastery_level = MasteryLevel::Learned;
        next.learned_at = Some(now);
    } else {
        next.mastery_level = display_tier(next.review_count, next.interval_index);
        if next.mastery_level == MasteryLevel::Mastered && next.mastered_at.is_none() {
            next.mastered_at = Some(now);
        }
    }

    Ok(next)
}

/// Drop a `learned` word back into the active pool, e.g. after the learner
/// stumbled over it in a new chapter. The streak is cleared so the word must
/// re-earn its terminal state; lifetime totals are kept. Words not in the
/// `learned` state pass through unchanged.
pub fn reopen(word: &VocabularyWord) -> VocabularyWord {
    if !word.is_learned() {
        return word.clone();
    }
    let mut next = word.clone();
    next.mastery_level = display_tier(next.review_count, next.interval_index);
    next.consecutive_correct = 0;
    next.learned_at = None;
    next
}

/// Return a word to its freshly-added scheduler state, keeping its metadata
/// and `added_at`. This is the learner's explicit "reset progress" action.
pub fn reset_progress(word: &VocabularyWord, now: DateTime<Utc>) -> VocabularyWord {
    let mut next = word.clone();
    next.last_reviewed = now;
    next.next_review = now + Duration::days(REVIEW_INTERVALS[0]);
    next.review_count = 0;
    next.interval_index = 0;
    next.ease_factor = crate::types::DEFAULT_EASE_FACTOR;
    next.consecutive_correct = 0;
    next.total_correct = 0;
    next.total_incorrect = 0;
    next.mastery_level = MasteryLevel::New;
    next.mastered_at = None;
    next.learned_at = None;
    next
}

/// Display tier used for statistics: review count drives the early tiers,
/// reaching the longest interval marks the word mastered.
fn display_tier(review_count: u32, interval_index: usize) -> MasteryLevel {
    if interval_index == REVIEW_INTERVALS.len() - 1 {
        return MasteryLevel::Mastered;
    }
    match review_count {
        0 => MasteryLevel::New,
        1 | 2 => MasteryLevel::Learning,
        _ => MasteryLevel::Reviewing,
    }
}
