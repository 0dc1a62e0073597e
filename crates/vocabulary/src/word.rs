use serde::{Deserialize, Serialize};

/// Everything the upstream sources know about a single word.
///
/// Every list is always present; an empty list means the source had no data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Word {
    pub word: String,
    pub meanings: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub part_of_speech: Vec<PartOfSpeech>,
    pub usage_example: Vec<String>,
}

impl Word {
    /// Total number of entries collected across every source.
    pub fn len(&self) -> usize {
        self.meanings.len()
            + self.synonyms.len()
            + self.antonyms.len()
            + self.part_of_speech.len()
            + self.usage_example.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartOfSpeech {
    /// Tag as returned upstream, e.g. "adverb". Not normalized.
    #[serde(rename = "partOfSpeech", default)]
    pub tag: String,
    #[serde(rename = "text", default)]
    pub example_usage: String,
}

impl PartOfSpeech {
    pub fn new(tag: impl Into<String>, example_usage: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            example_usage: example_usage.into(),
        }
    }
}
