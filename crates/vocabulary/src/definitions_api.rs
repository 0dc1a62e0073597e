use reqwest::Url;

use crate::{endpoint, invalid_endpoint, Api, PartOfSpeech, VocabularyError};

pub(crate) fn definitions_url(
    base: &str,
    api_key: &str,
    word: &str,
) -> Result<Url, VocabularyError> {
    let mut url = endpoint(base, Api::Definitions)?;
    url.path_segments_mut()
        .map_err(|_| invalid_endpoint(Api::Definitions, base, "cannot hold path segments"))?
        .pop_if_empty()
        .extend([word, "definitions"]);
    url.query_pairs_mut().append_pair("api_key", api_key);
    Ok(url)
}

/// The Wordnik definitions response is a bare array, there is no status
/// envelope around it.
pub fn parse_part_of_speech(body: &[u8]) -> Result<Vec<PartOfSpeech>, serde_json::Error> {
    serde_json::from_slice(body)
}
