//! Urban Dictionary lookups, used only for example sentences.

use reqwest::Url;
use serde::Deserialize;

use crate::{endpoint, Api, VocabularyError};

#[derive(Debug, Deserialize)]
struct UsageResponse {
    #[serde(default)]
    list: Vec<UsageEntry>,
}

#[derive(Debug, Deserialize)]
struct UsageEntry {
    #[serde(default)]
    example: String,
    #[serde(default)]
    thumbs_up: i64,
    #[serde(default)]
    thumbs_down: i64,
}

impl UsageEntry {
    /// Needs roughly two upvotes per downvote to be trusted.
    fn is_reliable(&self) -> bool {
        self.thumbs_up > self.thumbs_down.saturating_mul(2)
    }
}

pub(crate) fn usage_url(base: &str, word: &str) -> Result<Url, VocabularyError> {
    let mut url = endpoint(base, Api::UsageExamples)?;
    url.query_pairs_mut().append_pair("term", word);
    Ok(url)
}

pub fn parse_usage_examples(body: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    let response: UsageResponse = serde_json::from_slice(body)?;
    Ok(response
        .list
        .into_iter()
        .filter(UsageEntry::is_reliable)
        .map(|entry| single_line(&entry.example))
        .collect())
}

fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
