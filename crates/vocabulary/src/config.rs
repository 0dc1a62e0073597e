use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ANTONYM_API_KEY_ENV: &str = "BIGHUGELABS_API_KEY";
const DICTIONARY_API_KEY_ENV: &str = "WORDNIK_API_KEY";
const TIMEOUT_ENV: &str = "VOCABULARY_TIMEOUT_SECS";

/// Settings for a [`crate::Vocabulary`]. Fixed once the vocabulary is built.
#[derive(Debug, Clone)]
pub struct Config {
    /// BigHugeLabs key, needed for antonyms.
    pub antonym_api_key: Option<String>,
    /// Wordnik key, needed for part-of-speech lookups.
    pub dictionary_api_key: Option<String>,
    pub endpoints: Endpoints,
    /// Upper bound for a single upstream request.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            antonym_api_key: None,
            dictionary_api_key: None,
            endpoints: Endpoints::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the API keys (and optionally the timeout) from the environment.
    pub fn from_env() -> Self {
        let timeout = parse_timeout(std::env::var(TIMEOUT_ENV).ok().as_deref());
        Self {
            antonym_api_key: std::env::var(ANTONYM_API_KEY_ENV).ok().and_then(non_empty),
            dictionary_api_key: std::env::var(DICTIONARY_API_KEY_ENV).ok().and_then(non_empty),
            endpoints: Endpoints::default(),
            timeout,
        }
    }

    pub fn with_antonym_api_key(mut self, key: impl Into<String>) -> Self {
        self.antonym_api_key = non_empty(key.into());
        self
    }

    pub fn with_dictionary_api_key(mut self, key: impl Into<String>) -> Self {
        self.dictionary_api_key = non_empty(key.into());
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn antonym_api_key(&self) -> Option<&str> {
        self.antonym_api_key.as_deref().filter(|key| !key.is_empty())
    }

    pub(crate) fn dictionary_api_key(&self) -> Option<&str> {
        self.dictionary_api_key.as_deref().filter(|key| !key.is_empty())
    }
}

/// Base URLs of the upstream sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub translation: String,
    pub antonyms: String,
    pub definitions: String,
    pub usage_examples: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            translation: "https://glosbe.com/gapi/translate".into(),
            antonyms: "http://words.bighugelabs.com/api/2".into(),
            definitions: "http://api.wordnik.com/v4/word.json".into(),
            usage_examples: "http://api.urbandictionary.com/v0/define".into(),
        }
    }
}

impl Endpoints {
    /// Points every source at the same host, keeping the default paths.
    /// Used to run against a local mock server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            translation: format!("{base}/gapi/translate"),
            antonyms: format!("{base}/api/2"),
            definitions: format!("{base}/v4/word.json"),
            usage_examples: format!("{base}/v0/define"),
        }
    }
}

/// Seconds from the environment; zero or garbage falls back to the default.
fn parse_timeout(raw: Option<&str>) -> Duration {
    raw.and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keys_are_treated_as_missing() {
        let config = Config::new()
            .with_antonym_api_key("")
            .with_dictionary_api_key("  ");
        assert!(config.antonym_api_key().is_none());
        assert!(config.dictionary_api_key().is_none());
    }

    #[test]
    fn empty_key_set_directly_is_still_missing() {
        let config = Config {
            antonym_api_key: Some(String::new()),
            ..Config::default()
        };
        assert!(config.antonym_api_key().is_none());
    }

    #[test]
    fn with_base_keeps_default_paths() {
        let endpoints = Endpoints::with_base("http://127.0.0.1:4000/");
        assert_eq!(endpoints.translation, "http://127.0.0.1:4000/gapi/translate");
        assert_eq!(endpoints.antonyms, "http://127.0.0.1:4000/api/2");
        assert_eq!(endpoints.definitions, "http://127.0.0.1:4000/v4/word.json");
        assert_eq!(endpoints.usage_examples, "http://127.0.0.1:4000/v0/define");
    }

    #[test]
    fn zero_or_unparsable_timeout_uses_the_default() {
        let default = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some("0")), default);
        assert_eq!(parse_timeout(Some(" 0 ")), default);
        assert_eq!(parse_timeout(Some("soon")), default);
        assert_eq!(parse_timeout(None), default);
        assert_eq!(parse_timeout(Some(" 3 ")), Duration::from_secs(3));
    }

    #[test]
    fn default_timeout_is_bounded() {
        assert_eq!(Config::default().timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
