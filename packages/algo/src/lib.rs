//! # storylex-algo - vocabulary scheduling core
//!
//! Pure Rust implementation of the spaced-repetition state machine behind
//! the storylex review flow:
//!
//! - **Word state** - per-word interval ladder, counters, and mastery tiers
//! - **Due-set selection** - which saved words a session must cover, with a
//!   random practice fallback once the learner is caught up
//! - **Review outcomes** - pass/fail updates, learned transitions, reopen
//!   and reset paths
//!
//! The crate performs no I/O and holds no global state: callers pass the
//! word list, the current time, and an rng, which keeps every code path
//! reproducible in tests.
//!
//! ## Module structure
//!
//! - [`types`] - word model, mastery tiers, constants, configuration
//! - [`selection`] - due predicate, practice sampling, session construction
//! - [`review`] - the outcome rule set and explicit state transitions

// ============================================================================
// Modules
// ============================================================================

pub mod review;
pub mod selection;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::{
    MasteryLevel, SchedulerConfig, VocabularyWord, WordMetadata, DEFAULT_EASE_FACTOR,
    DEFAULT_LEARNED_STREAK_THRESHOLD, DEFAULT_PRACTICE_SET_SIZE, REVIEW_INTERVALS,
};

pub use selection::{is_due, select_due_set, select_practice_set, start_review_session};
pub use selection::{ReviewSession, SessionKind};

pub use review::{apply_review_outcome, reopen, reset_progress, ReviewError};
