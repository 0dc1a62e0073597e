//! Big Huge Thesaurus lookups. The text format is one relation per line:
//! `word|relation|candidate`, with `ant` marking antonyms.

use reqwest::Url;

use crate::{endpoint, invalid_endpoint, Api, VocabularyError};

const ANTONYM_TAG: &str = "ant";

pub(crate) fn antonyms_url(
    base: &str,
    api_key: &str,
    word: &str,
) -> Result<Url, VocabularyError> {
    let mut url = endpoint(base, Api::Antonyms)?;
    url.path_segments_mut()
        .map_err(|_| invalid_endpoint(Api::Antonyms, base, "cannot hold path segments"))?
        .pop_if_empty()
        .extend([api_key, word, "text"]);
    Ok(url)
}

/// Collects antonym candidates in first-seen order without duplicates.
/// Lines that are not exactly three fields are skipped.
pub fn parse_antonyms(body: &[u8]) -> Result<Vec<String>, std::str::Utf8Error> {
    let text = std::str::from_utf8(body)?;
    let mut antonyms: Vec<String> = Vec::new();
    for line in text.lines() {
        let fields = line.split('|').collect::<Vec<&str>>();
        if let [_, relation, candidate] = fields[..] {
            if relation == ANTONYM_TAG && !antonyms.iter().any(|known| known == candidate) {
                antonyms.push(candidate.to_owned());
            }
        }
    }
    Ok(antonyms)
}
