use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use storylex_algo::WordMetadata;

/// Read-only content hierarchy: stories hold chapters, chapters carry the
/// vocabulary items a learner can save. Loaded once at startup; the
/// scheduler only ever copies metadata out of it.
pub struct ContentStore {
    chapters: HashMap<String, Vec<WordMetadata>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ContentStoreError {
    #[error("content read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("content document malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDocument {
    #[serde(default)]
    stories: Vec<Story>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Story {
    #[serde(default)]
    chapters: Vec<Chapter>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Chapter {
    id: String,
    #[serde(default)]
    vocabulary: Vec<WordMetadata>,
}

impl ContentStore {
    /// Load the content document, tolerating a missing file (empty
    /// catalogue). Later chapters win on duplicate chapter ids.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ContentStoreError> {
        let bytes = match tokio::fs::read(path.as_ref()).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.as_ref().display(), "content document missing, catalogue is empty");
                return Ok(Self::empty());
            }
            Err(err) => return Err(ContentStoreError::Read(err)),
        };

        let document: ContentDocument = serde_json::from_slice(&bytes)?;
        let mut chapters = HashMap::new();
        for story in document.stories {
            for chapter in story.chapters {
                chapters.insert(chapter.id, chapter.vocabulary);
            }
        }

        tracing::info!(chapters = chapters.len(), "loaded content catalogue");
        Ok(Self { chapters })
    }

    pub fn empty() -> Self {
        Self {
            chapters: HashMap::new(),
        }
    }

    pub fn chapter_vocabulary(&self, chapter_id: &str) -> Option<&[WordMetadata]> {
        self.chapters.get(chapter_id).map(Vec::as_slice)
    }

    pub fn find_word(&self, chapter_id: &str, word: &str) -> Option<&WordMetadata> {
        self.chapters
            .get(chapter_id)?
            .iter()
            .find(|item| item.word == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_from_json(value: serde_json::Value) -> ContentStore {
        let document: ContentDocument = serde_json::from_value(value).unwrap();
        let mut chapters = HashMap::new();
        for story in document.stories {
            for chapter in story.chapters {
                chapters.insert(chapter.id, chapter.vocabulary);
            }
        }
        ContentStore { chapters }
    }

    #[test]
    fn test_chapter_lookup_and_word_match_are_exact() {
        let store = store_from_json(serde_json::json!({
            "stories": [{
                "id": "story-1",
                "chapters": [{
                    "id": "ch-1",
                    "vocabulary": [
                        { "word": "obstinate", "type": "adjective", "definition": "stubborn" },
                        { "word": "sagacious", "type": "adjective", "definition": "wise" },
                    ],
                }],
            }],
        }));

        assert_eq!(store.chapter_vocabulary("ch-1").unwrap().len(), 2);
        assert!(store.chapter_vocabulary("ch-2").is_none());
        assert!(store.find_word("ch-1", "obstinate").is_some());
        // case-sensitive exact match
        assert!(store.find_word("ch-1", "Obstinate").is_none());
    }
}
