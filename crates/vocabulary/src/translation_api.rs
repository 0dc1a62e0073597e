//! Glosbe translation lookups (English to English).
//!
//! Response shape: `{ "result": "ok", "tuc": [unit, ...] }` where the unit at
//! position 0 carries the meanings and every later unit wraps one synonym
//! phrase. Units are not tagged, so position is the only contract.

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

use crate::{endpoint, Api, VocabularyError};

const SUCCESS: &str = "ok";

// Upstream sends `null` as readily as it omits a field; both mean empty.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    tuc: Value,
}

#[derive(Debug, Deserialize)]
struct MeaningsUnit {
    #[serde(default)]
    meanings: Option<Vec<Text>>,
}

#[derive(Debug, Deserialize)]
struct PhraseUnit {
    phrase: Text,
}

#[derive(Debug, Deserialize)]
struct Text {
    text: String,
}

pub(crate) fn translation_url(base: &str, word: &str) -> Result<Url, VocabularyError> {
    let mut url = endpoint(base, Api::Translation)?;
    url.query_pairs_mut()
        .append_pair("from", "en")
        .append_pair("dest", "en")
        .append_pair("format", "json")
        .append_pair("phrase", word);
    Ok(url)
}

/// Decodes the envelope, returning the translation units only when upstream
/// reported success. "Not found" comes back as no units.
fn units(body: &[u8]) -> Result<Vec<Value>, serde_json::Error> {
    let envelope: Envelope = serde_json::from_slice(body)?;
    if envelope.result.as_deref() != Some(SUCCESS) {
        return Ok(Vec::new());
    }
    let units: Option<Vec<Value>> = Deserialize::deserialize(envelope.tuc)?;
    Ok(units.unwrap_or_default())
}

fn meanings_from(units: &[Value]) -> Result<Vec<String>, serde_json::Error> {
    let Some(first) = units.first() else {
        return Ok(Vec::new());
    };
    let unit = MeaningsUnit::deserialize(first)?;
    Ok(unit
        .meanings
        .unwrap_or_default()
        .into_iter()
        .map(|meaning| meaning.text)
        .collect())
}

fn synonyms_from(units: &[Value]) -> Result<Vec<String>, serde_json::Error> {
    units
        .iter()
        .skip(1)
        .map(|unit| PhraseUnit::deserialize(unit).map(|unit| unit.phrase.text))
        .collect()
}

pub fn parse_meanings(body: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    meanings_from(&units(body)?)
}

/// A malformed phrase unit fails the whole parse.
pub fn parse_synonyms(body: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    synonyms_from(&units(body)?)
}

/// Meanings and synonyms out of a single response body.
pub fn parse_translation(body: &[u8]) -> Result<(Vec<String>, Vec<String>), serde_json::Error> {
    let units = units(body)?;
    Ok((meanings_from(&units)?, synonyms_from(&units)?))
}
