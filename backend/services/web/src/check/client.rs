use async_trait::async_trait;
use credcheck_verdict::CheckRequest;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::Value;

pub const CHECK_PATH: &str = "/api/check";

/// Raw reply from the scoring service: status plus the decoded JSON body,
/// whatever the status was.
#[derive(Debug, Clone)]
pub struct ScoringReply {
    pub status: StatusCode,
    pub payload: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringClientError {
    #[error("{0}")]
    RequestError(#[from] reqwest::Error),

    #[error("invalid JSON in response: {0}")]
    DecodeError(#[from] serde_json::Error),
}

#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn check(&self, request: &CheckRequest) -> Result<ScoringReply, ScoringClientError>;
}

#[derive(Clone)]
pub struct ScoringClient {
    client: Client,
    base_url: String,
}

impl ScoringClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("credcheck-web/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn check_url(&self) -> String {
        format!("{}{}", self.base_url, CHECK_PATH)
    }
}

#[async_trait]
impl ScoringService for ScoringClient {
    /// One POST, no retries. The body is decoded as JSON even for non-2xx
    /// replies so structured error messages survive.
    async fn check(&self, request: &CheckRequest) -> Result<ScoringReply, ScoringClientError> {
        let response = self
            .client
            .post(self.check_url())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&bytes)?;

        tracing::debug!(%status, "scoring service replied");
        Ok(ScoringReply { status, payload })
    }
}
