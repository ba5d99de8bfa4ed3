use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use storylex_algo::{VocabularyWord, REVIEW_INTERVALS};

/// Persistent learner profile: the saved-word list held as one JSON
/// document. The list is fetched once at startup and kept in memory keyed
/// by word, so key uniqueness is structural; every committed change writes
/// the whole document back (last-writer-wins, single active learner).
pub struct ProfileStore {
    path: PathBuf,
    words: RwLock<HashMap<String, VocabularyWord>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("profile read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("profile write failed: {0}")]
    Write(#[source] std::io::Error),
    #[error("profile document malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileDocument {
    #[serde(default)]
    words: Vec<serde_json::Value>,
}

impl ProfileStore {
    /// Load the profile document, tolerating a missing file (fresh learner)
    /// and missing optional fields on individual records.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ProfileStoreError> {
        let path = path.as_ref().to_path_buf();
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::empty(path));
            }
            Err(err) => return Err(ProfileStoreError::Read(err)),
        };

        let document: ProfileDocument = serde_json::from_slice(&bytes)?;
        let mut words = HashMap::with_capacity(document.words.len());
        for value in document.words {
            match map_stored_word(value) {
                Some(word) => {
                    words.insert(word.word.clone(), word);
                }
                None => {
                    tracing::warn!("skipping malformed word record in profile document");
                }
            }
        }

        tracing::info!(count = words.len(), "loaded learner profile");
        Ok(Self {
            path,
            words: RwLock::new(words),
        })
    }

    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            words: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.words.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.read().is_empty()
    }

    pub fn get(&self, word: &str) -> Option<VocabularyWord> {
        self.words.read().get(word).cloned()
    }

    /// Snapshot of the full list, oldest addition first.
    pub fn words(&self) -> Vec<VocabularyWord> {
        let mut list: Vec<VocabularyWord> = self.words.read().values().cloned().collect();
        list.sort_by(|a, b| a.added_at.cmp(&b.added_at).then(a.word.cmp(&b.word)));
        list
    }

    /// Insert or replace one entry, then write the document back. On write
    /// failure the in-memory entry stays so the session can continue and
    /// the save can be retried.
    pub async fn upsert(&self, word: VocabularyWord) -> Result<(), ProfileStoreError> {
        self.words.write().insert(word.word.clone(), word);
        self.save().await
    }

    /// Delete an entry outright. Returns false when the key was absent.
    pub async fn remove(&self, word: &str) -> Result<bool, ProfileStoreError> {
        let removed = self.words.write().remove(word).is_some();
        if removed {
            self.save().await?;
        }
        Ok(removed)
    }

    /// Write the whole document via a temp file and rename, so a crash
    /// mid-write never leaves a partially-written list. Safe to call again
    /// after a failure.
    pub async fn save(&self) -> Result<(), ProfileStoreError> {
        let document = ProfileDocument {
            words: self
                .words()
                .iter()
                .map(|word| serde_json::to_value(word))
                .collect::<Result<_, _>>()?,
        };
        let bytes = serde_json::to_vec_pretty(&document)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(ProfileStoreError::Write)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(ProfileStoreError::Write)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(ProfileStoreError::Write)?;
        Ok(())
    }
}

/// Map one stored record onto the word model, defaulting the fields older
/// documents may lack: `lastReviewed` falls back to `addedAt`, `nextReview`
/// to one interval past `addedAt`, and `intervalIndex` is clamped into the
/// ladder.
fn map_stored_word(mut value: serde_json::Value) -> Option<VocabularyWord> {
    let obj = value.as_object_mut()?;

    let key_ok = obj
        .get("word")
        .and_then(|w| w.as_str())
        .is_some_and(|w| !w.trim().is_empty());
    if !key_ok {
        return None;
    }

    let added_at = obj
        .get("addedAt")
        .and_then(|v| v.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);
    obj.insert("addedAt".to_string(), serde_json::json!(added_at));

    if !obj.contains_key("lastReviewed") {
        obj.insert("lastReviewed".to_string(), serde_json::json!(added_at));
    }
    if !obj.contains_key("nextReview") {
        let index = obj
            .get("intervalIndex")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as usize;
        let days = REVIEW_INTERVALS[index.min(REVIEW_INTERVALS.len() - 1)];
        obj.insert(
            "nextReview".to_string(),
            serde_json::json!(added_at + Duration::days(days)),
        );
    }

    let mut word: VocabularyWord = serde_json::from_value(value).ok()?;
    word.interval_index = word.interval_index.min(REVIEW_INTERVALS.len() - 1);
    if word.next_review < word.last_reviewed {
        word.next_review = word.last_reviewed;
    }
    Some(word)
}
