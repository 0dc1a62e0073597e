use std::time::Duration;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

/// Issues a GET request and hands back the raw body.
///
/// Implementations make a single attempt; the body is returned whatever the
/// HTTP status is.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Reuse an existing client, keeping whatever timeout it was built with.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let res: reqwest::Response = self.client.get(url).send().await?;
        let status = res.status();
        let body = res.bytes().await?;
        tracing::trace!(%status, bytes = body.len(), "upstream response");
        Ok(body.to_vec())
    }
}
