//! Common Types and Constants
//!
//! Shared data structures used by the selection and review modules.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Review interval ladder, in days. A word's `interval_index` points into
/// this table and never leaves its bounds.
pub const REVIEW_INTERVALS: [i64; 5] = [1, 3, 7, 14, 30];

/// Ease factor assigned to freshly added words.
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Consecutive-correct streak that must be exceeded at the longest interval
/// before a word counts as learned.
pub const DEFAULT_LEARNED_STREAK_THRESHOLD: u32 = 3;

/// Size of the random practice set served when nothing is due.
pub const DEFAULT_PRACTICE_SET_SIZE: usize = 10;

// ==================== Mastery ====================

/// Coarse progress tier of a word, derived from review count and interval
/// progression. `Learned` is terminal: such words are excluded from due-set
/// selection until explicitly reopened or reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasteryLevel {
    #[default]
    New,
    Learning,
    Reviewing,
    Mastered,
    Learned,
}

impl MasteryLevel {
    pub fn is_learned(self) -> bool {
        self == MasteryLevel::Learned
    }
}

/// Tunable scheduler parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Streak required (strictly exceeded) at the longest interval for the
    /// `Learned` transition.
    pub learned_streak_threshold: u32,
    /// Upper bound on the random practice set.
    pub practice_set_size: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            learned_streak_threshold: DEFAULT_LEARNED_STREAK_THRESHOLD,
            practice_set_size: DEFAULT_PRACTICE_SET_SIZE,
        }
    }
}

// ==================== Words ====================

/// A vocabulary item as supplied by the content feed for one chapter. The
/// scheduler copies these fields verbatim and never interprets them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMetadata {
    pub word: String,
    #[serde(rename = "type", default)]
    pub word_type: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example2: Option<String>,
    #[serde(default)]
    pub equivalent: String,
}

/// One entry in a learner's saved-word list, including the full
/// spaced-repetition state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyWord {
    /// Key within the learner's list; case-sensitive exact match.
    pub word: String,
    #[serde(rename = "type", default)]
    pub word_type: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example2: Option<String>,
    #[serde(default)]
    pub equivalent: String,
    pub added_at: DateTime<Utc>,
    /// Timestamp of the most recent review attempt; equals `added_at` until
    /// the first review.
    pub last_reviewed: DateTime<Utc>,
    /// The word is not due before this instant (never-reviewed words are due
    /// regardless).
    pub next_review: DateTime<Utc>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub interval_index: usize,
    /// Reserved for outcome-sensitive interval scaling; the rule set carries
    /// it but does not mutate it.
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f64,
    #[serde(default)]
    pub consecutive_correct: u32,
    #[serde(default)]
    pub total_correct: u32,
    #[serde(default)]
    pub total_incorrect: u32,
    #[serde(default)]
    pub mastery_level: MasteryLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mastered_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learned_at: Option<DateTime<Utc>>,
}

fn default_ease_factor() -> f64 {
    DEFAULT_EASE_FACTOR
}

impl VocabularyWord {
    /// Create a fresh entry from content metadata. The nominal first review
    /// is one short interval out.
    pub fn from_metadata(meta: &WordMetadata, now: DateTime<Utc>) -> Self {
        Self {
            word: meta.word.clone(),
            word_type: meta.word_type.clone(),
            definition: meta.definition.clone(),
            example1: meta.example1.clone(),
            example2: meta.example2.clone(),
            equivalent: meta.equivalent.clone(),
            added_at: now,
            last_reviewed: now,
            next_review: now + Duration::days(REVIEW_INTERVALS[0]),
            review_count: 0,
            interval_index: 0,
            ease_factor: DEFAULT_EASE_FACTOR,
            consecutive_correct: 0,
            total_correct: 0,
            total_incorrect: 0,
            mastery_level: MasteryLevel::New,
            mastered_at: None,
            learned_at: None,
        }
    }

    /// Overwrite the descriptive fields from a newer content item, leaving
    /// all scheduler state untouched. Models re-saving a tracked word.
    pub fn refresh_metadata(&mut self, meta: &WordMetadata) {
        self.word_type = meta.word_type.clone();
        self.definition = meta.definition.clone();
        self.example1 = meta.example1.clone();
        self.example2 = meta.example2.clone();
        self.equivalent = meta.equivalent.clone();
    }

    /// Length in days of the word's current interval.
    pub fn current_interval_days(&self) -> i64 {
        REVIEW_INTERVALS[self.interval_index.min(REVIEW_INTERVALS.len() - 1)]
    }

    pub fn is_learned(&self) -> bool {
        self.mastery_level.is_learned()
    }
}
