use std::fmt;

use reqwest::Url;
use tracing::{debug, warn};

mod antonym_api;
mod config;
mod definitions_api;
mod transport;
mod translation_api;
mod usage_api;
mod word;

pub use antonym_api::parse_antonyms;
pub use config::{Config, Endpoints};
pub use definitions_api::parse_part_of_speech;
pub use transport::{HttpTransport, Transport, TransportError};
pub use translation_api::{parse_meanings, parse_synonyms, parse_translation};
pub use usage_api::parse_usage_examples;
pub use word::{PartOfSpeech, Word};

/// Upstream source a request was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Api {
    /// Glosbe, meanings and synonyms.
    Translation,
    /// Big Huge Thesaurus.
    Antonyms,
    /// Wordnik, part of speech.
    Definitions,
    /// Urban Dictionary.
    UsageExamples,
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Api::Translation => "glosbe",
            Api::Antonyms => "bighugelabs",
            Api::Definitions => "wordnik",
            Api::UsageExamples => "urbandictionary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Precondition,
    Transport,
    Decode,
}

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// Bad input or missing configuration. Nothing was sent.
    #[error("precondition failed: {0}")]
    Precondition(String),
    #[error("{api} request failed: {source}")]
    Fetch {
        api: Api,
        #[source]
        source: TransportError,
    },
    #[error("{api} response could not be decoded: {message}")]
    Deserialize { api: Api, message: String },
}

impl VocabularyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VocabularyError::Precondition(_) => ErrorKind::Precondition,
            VocabularyError::Fetch { .. } => ErrorKind::Transport,
            VocabularyError::Deserialize { .. } => ErrorKind::Decode,
        }
    }

    pub fn api(&self) -> Option<Api> {
        match self {
            VocabularyError::Precondition(_) => None,
            VocabularyError::Fetch { api, .. } | VocabularyError::Deserialize { api, .. } => {
                Some(*api)
            }
        }
    }

    fn deserialize(api: Api, error: impl fmt::Display) -> Self {
        VocabularyError::Deserialize {
            api,
            message: error.to_string(),
        }
    }
}

pub(crate) fn endpoint(base: &str, api: Api) -> Result<Url, VocabularyError> {
    Url::parse(base).map_err(|error| invalid_endpoint(api, base, error))
}

pub(crate) fn invalid_endpoint(api: Api, base: &str, reason: impl fmt::Display) -> VocabularyError {
    VocabularyError::Precondition(format!("invalid {api} endpoint {base}: {reason}"))
}

fn decode_failed(api: Api, error: impl fmt::Display) -> VocabularyError {
    let error = VocabularyError::deserialize(api, error);
    warn!(%api, %error, "decode failed");
    error
}

fn validate_word(word: &str) -> Result<&str, VocabularyError> {
    if word.trim().is_empty() {
        return Err(VocabularyError::Precondition(
            "word must be a non-empty string".into(),
        ));
    }
    Ok(word)
}

/// Looks words up across every configured source.
///
/// Each call makes a single attempt per source; nothing is retried or cached.
pub struct Vocabulary<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl Vocabulary<HttpTransport> {
    pub fn new(config: Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> Vocabulary<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Collects everything known about `word`. Needs both API keys.
    ///
    /// The four upstream requests run concurrently. The translation response
    /// is fetched once and feeds both meanings and synonyms. If any source
    /// fails the whole lookup fails; when several fail, the error reported is
    /// the one from the earliest source in the order translation, antonyms,
    /// definitions, usage examples.
    pub async fn word(&self, word: &str) -> Result<Word, VocabularyError> {
        let word = validate_word(word)?;
        let antonym_key = self.antonym_key()?;
        let dictionary_key = self.dictionary_key()?;

        let (translation, antonyms, part_of_speech, usage_example) = futures::join!(
            self.translation(word),
            self.antonyms_with(antonym_key, word),
            self.part_of_speech_with(dictionary_key, word),
            self.usage_example(word)
        );
        let (meanings, synonyms) = translation?;

        Ok(Word {
            word: word.to_owned(),
            meanings,
            synonyms,
            antonyms: antonyms?,
            part_of_speech: part_of_speech?,
            usage_example: usage_example?,
        })
    }

    pub async fn meanings(&self, word: &str) -> Result<Vec<String>, VocabularyError> {
        let word = validate_word(word)?;
        let body = self.fetch_translation(word).await?;
        let meanings =
            parse_meanings(&body).map_err(|e| decode_failed(Api::Translation, e))?;
        debug!(word, count = meanings.len(), "meanings");
        Ok(meanings)
    }

    pub async fn synonyms(&self, word: &str) -> Result<Vec<String>, VocabularyError> {
        let word = validate_word(word)?;
        let body = self.fetch_translation(word).await?;
        let synonyms =
            parse_synonyms(&body).map_err(|e| decode_failed(Api::Translation, e))?;
        debug!(word, count = synonyms.len(), "synonyms");
        Ok(synonyms)
    }

    /// Needs the antonym API key.
    pub async fn antonyms(&self, word: &str) -> Result<Vec<String>, VocabularyError> {
        let word = validate_word(word)?;
        let api_key = self.antonym_key()?;
        self.antonyms_with(api_key, word).await
    }

    /// Needs the dictionary API key.
    pub async fn part_of_speech(&self, word: &str) -> Result<Vec<PartOfSpeech>, VocabularyError> {
        let word = validate_word(word)?;
        let api_key = self.dictionary_key()?;
        self.part_of_speech_with(api_key, word).await
    }

    pub async fn usage_example(&self, word: &str) -> Result<Vec<String>, VocabularyError> {
        let word = validate_word(word)?;
        let url = usage_api::usage_url(&self.config.endpoints.usage_examples, word)?;
        let body = self.fetch(Api::UsageExamples, word, url).await?;
        let examples = parse_usage_examples(&body)
            .map_err(|e| decode_failed(Api::UsageExamples, e))?;
        debug!(word, count = examples.len(), "usage examples");
        Ok(examples)
    }

    async fn translation(&self, word: &str) -> Result<(Vec<String>, Vec<String>), VocabularyError> {
        let body = self.fetch_translation(word).await?;
        let (meanings, synonyms) =
            parse_translation(&body).map_err(|e| decode_failed(Api::Translation, e))?;
        debug!(word, meanings = meanings.len(), synonyms = synonyms.len(), "translation");
        Ok((meanings, synonyms))
    }

    async fn fetch_translation(&self, word: &str) -> Result<Vec<u8>, VocabularyError> {
        let url = translation_api::translation_url(&self.config.endpoints.translation, word)?;
        self.fetch(Api::Translation, word, url).await
    }

    async fn antonyms_with(
        &self,
        api_key: &str,
        word: &str,
    ) -> Result<Vec<String>, VocabularyError> {
        let url = antonym_api::antonyms_url(&self.config.endpoints.antonyms, api_key, word)?;
        let body = self.fetch(Api::Antonyms, word, url).await?;
        let antonyms = parse_antonyms(&body).map_err(|e| decode_failed(Api::Antonyms, e))?;
        debug!(word, count = antonyms.len(), "antonyms");
        Ok(antonyms)
    }

    async fn part_of_speech_with(
        &self,
        api_key: &str,
        word: &str,
    ) -> Result<Vec<PartOfSpeech>, VocabularyError> {
        let base = &self.config.endpoints.definitions;
        let url = definitions_api::definitions_url(base, api_key, word)?;
        let body = self.fetch(Api::Definitions, word, url).await?;
        let parts = parse_part_of_speech(&body)
            .map_err(|e| decode_failed(Api::Definitions, e))?;
        debug!(word, count = parts.len(), "part of speech");
        Ok(parts)
    }

    // The url is never logged, it can carry an API key.
    async fn fetch(&self, api: Api, word: &str, url: Url) -> Result<Vec<u8>, VocabularyError> {
        debug!(%api, word, "fetching");
        self.transport.fetch(url.as_str()).await.map_err(|source| {
            warn!(%api, word, error = %source, "request failed");
            VocabularyError::Fetch { api, source }
        })
    }

    fn antonym_key(&self) -> Result<&str, VocabularyError> {
        self.config
            .antonym_api_key()
            .ok_or_else(|| {
                VocabularyError::Precondition("antonym API key (BigHugeLabs) required".into())
            })
    }

    fn dictionary_key(&self) -> Result<&str, VocabularyError> {
        self.config
            .dictionary_api_key()
            .ok_or_else(|| {
                VocabularyError::Precondition("dictionary API key (Wordnik) required".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_report_kind_and_source() {
        let error = VocabularyError::Fetch {
            api: Api::Antonyms,
            source: TransportError::Other("connection refused".into()),
        };
        assert_eq!(error.kind(), ErrorKind::Transport);
        assert_eq!(error.api(), Some(Api::Antonyms));
        assert_eq!(error.to_string(), "bighugelabs request failed: connection refused");

        let error = VocabularyError::deserialize(Api::Definitions, "expected a sequence");
        assert_eq!(error.kind(), ErrorKind::Decode);
        assert_eq!(error.api(), Some(Api::Definitions));

        let error = VocabularyError::Precondition("word must be a non-empty string".into());
        assert_eq!(error.kind(), ErrorKind::Precondition);
        assert_eq!(error.api(), None);
    }

    #[test]
    fn blank_words_are_rejected() {
        assert!(validate_word("").is_err());
        assert!(validate_word(" \t").is_err());
        assert_eq!(validate_word("love").unwrap(), "love");
    }

    #[test]
    fn unparsable_endpoint_is_a_precondition_failure() {
        let error = endpoint("not a url", Api::Translation).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Precondition);
    }
}
