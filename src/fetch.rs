use std::time::Duration;

use crate::error::TransportError;

/// What the extractor needs to know about one HTTP response.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Transport seam for the extractor, so tests can run without a network.
#[async_trait::async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, TransportError>;
}

/// Real transport backed by a shared `reqwest` client.
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    /// Uses the transport's own default timeout behavior.
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
        })
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait::async_trait]
impl Fetch for HttpFetch {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, TransportError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = resp.bytes().await?.to_vec();
        Ok(FetchResponse {
            status,
            content_type,
            body,
        })
    }
}
