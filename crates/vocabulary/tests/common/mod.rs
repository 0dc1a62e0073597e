#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use vocabulary::{Config, Endpoints, Transport, TransportError, Vocabulary};

pub const BASE: &str = "http://stub.test";

pub const TRANSLATION_PATH: &str = "/gapi/translate";
pub const ANTONYMS_PATH: &str = "/api/2";
pub const DEFINITIONS_PATH: &str = "/v4/word.json";
pub const USAGE_PATH: &str = "/v0/define";

enum Reply {
    Body(Vec<u8>),
    Fail(String),
}

/// Answers by URL path prefix and records every URL it was asked for.
#[derive(Default)]
pub struct StubTransport {
    routes: Vec<(String, Reply)>,
    calls: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, body: &str) -> Self {
        self.routes
            .push((format!("{BASE}{path}"), Reply::Body(body.as_bytes().to_vec())));
        self
    }

    pub fn fail(mut self, path: &str, message: &str) -> Self {
        self.routes
            .push((format!("{BASE}{path}"), Reply::Fail(message.to_owned())));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        let prefix = format!("{BASE}{path}");
        self.calls()
            .iter()
            .filter(|url| url.starts_with(&prefix))
            .count()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push(url.to_owned());
        match self.routes.iter().find(|(prefix, _)| url.starts_with(prefix)) {
            Some((_, Reply::Body(body))) => Ok(body.clone()),
            Some((_, Reply::Fail(message))) => Err(TransportError::Other(message.clone())),
            None => Err(TransportError::Other(format!("no route for {url}"))),
        }
    }
}

pub fn config() -> Config {
    Config::new()
        .with_endpoints(Endpoints::with_base(BASE))
        .with_antonym_api_key("bhl-key")
        .with_dictionary_api_key("wordnik-key")
}

pub fn stub_vocabulary(transport: StubTransport) -> Vocabulary<StubTransport> {
    Vocabulary::with_transport(config(), transport)
}

pub const VUVUZELA_TRANSLATION: &str = r#"{"result":"ok","tuc":[{"meanings":[{"text":"A plastic blowing horn..."}]},{"phrase":{"text":"lepatata"}}]}"#;
pub const NOT_FOUND_TRANSLATION: &str = r#"{"result":"ok","tuc":[]}"#;
pub const LOVE_ANTONYMS: &str = "love|syn|like\nlove|ant|hate\n";
pub const RAPIDLY_DEFINITIONS: &str =
    r#"[{"partOfSpeech":"adverb","text":"With speed; in a rapid manner."}]"#;
pub const HILLOCK_USAGE: &str = r#"{"list":[{"example":"I went to the top\r\nof the hillock.","thumbs_up":30,"thumbs_down":2}]}"#;

/// Every source answers with data.
pub fn full_stub() -> StubTransport {
    StubTransport::new()
        .respond(TRANSLATION_PATH, VUVUZELA_TRANSLATION)
        .respond(ANTONYMS_PATH, LOVE_ANTONYMS)
        .respond(DEFINITIONS_PATH, RAPIDLY_DEFINITIONS)
        .respond(USAGE_PATH, HILLOCK_USAGE)
}
