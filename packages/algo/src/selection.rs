//! Due-set selection and review-session construction.
//!
//! Selection is pure: callers supply the word list, the current time, and an
//! rng, so every path is reproducible under a seeded generator.

use chrono::{DateTime, Utc};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{SchedulerConfig, VocabularyWord};

/// Which pool a review session was drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// Every word whose scheduled review has come due.
    Due,
    /// Random refresher drawn from the active pool when nothing is due.
    Practice,
}

/// An ordered sequence of words to present for review.
#[derive(Clone, Debug)]
pub struct ReviewSession {
    pub kind: SessionKind,
    pub words: Vec<VocabularyWord>,
}

/// A word is due when it is not learned and either its scheduled time has
/// passed or it has never been reviewed. Brand-new words are eligible
/// immediately, before their nominal first interval elapses.
pub fn is_due(word: &VocabularyWord, now: DateTime<Utc>) -> bool {
    !word.is_learned() && (word.review_count == 0 || word.next_review <= now)
}

/// All due words, soonest scheduled first. Returned in full: every due word
/// must be reviewed in the session, so there is no truncation here.
pub fn select_due_set(words: &[VocabularyWord], now: DateTime<Utc>) -> Vec<VocabularyWord> {
    let mut due: Vec<VocabularyWord> = words
        .iter()
        .filter(|word| is_due(word, now))
        .cloned()
        .collect();
    due.sort_by(|a, b| a.next_review.cmp(&b.next_review).then(a.word.cmp(&b.word)));
    due
}

/// Up to `size` distinct non-learned words sampled uniformly at random, or
/// the whole pool when it is smaller.
pub fn select_practice_set<R: Rng>(
    words: &[VocabularyWord],
    size: usize,
    rng: &mut R,
) -> Vec<VocabularyWord> {
    words
        .iter()
        .filter(|word| !word.is_learned())
        .cloned()
        .choose_multiple(rng, size)
}

/// Build the next review session: the full due set when non-empty, otherwise
/// a random practice set. The presentation order is shuffled independently
/// of how the words were selected. `None` means there is nothing to review
/// at all.
pub fn start_review_session<R: Rng>(
    words: &[VocabularyWord],
    now: DateTime<Utc>,
    config: &SchedulerConfig,
    rng: &mut R,
) -> Option<ReviewSession> {
    let mut selected = select_due_set(words, now);
    let kind = if selected.is_empty() {
        selected = select_practice_set(words, config.practice_set_size, rng);
        SessionKind::Practice
    } else {
        SessionKind::Due
    };

    if selected.is_empty() {
        return None;
    }

    selected.shuffle(rng);
    Some(ReviewSession {
        kind,
        words: selected,
    })
}
