//! Commit API client
//!
//! Typed access to the commit REST endpoints:
//!
//! | Method | Path | Call |
//! |--------|------|------|
//! | GET    | `/commits` | [`CommitClient::list`] |
//! | POST   | `/commits` | [`CommitClient::create`] |
//! | PUT    | `/commits/{id}` | [`CommitClient::update`] |
//! | DELETE | `/commits/{id}` | [`CommitClient::delete`] |
//!
//! Paths are relative to a configurable base URL (default
//! `http://localhost:3000/api`).

mod envelope;

pub use envelope::{Envelope, PREVIEW_LIMIT, decode_envelope, preview};

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::model::{CommitId, CommitPatch, CommitRecord, NewCommit};

/// Errors from commit API calls.
///
/// `Display` is the text shown in the error banner.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, ...
    #[error("{endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },
    /// Non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// 2xx but not JSON (typically an HTML page from a misrouted proxy)
    #[error("unexpected response (content-type {content_type}): {preview}")]
    NotJson {
        content_type: String,
        preview: String,
    },
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Well-formed envelope with `success: false`
    #[error("{0}")]
    Rejected(String),
    /// `success: true` without the record the call promises
    #[error("{endpoint} returned no data")]
    MissingData { endpoint: &'static str },
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

/// Client for the commit endpoints
#[derive(Debug, Clone)]
pub struct CommitClient {
    http: Client,
    base_url: Url,
}

impl CommitClient {
    /// Create a client. `timeout` of `None` means requests may wait forever.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Client)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /commits`
    pub async fn list(&self) -> Result<Vec<CommitRecord>, ApiError> {
        let endpoint = "GET /commits";
        let url = self.endpoint(&["commits"])?;
        let envelope: Envelope<Vec<CommitRecord>> =
            self.send(endpoint, self.http.get(url)).await?;
        Ok(envelope.into_data()?.unwrap_or_default())
    }

    /// `POST /commits`
    pub async fn create(&self, commit: &NewCommit) -> Result<CommitRecord, ApiError> {
        let endpoint = "POST /commits";
        let url = self.endpoint(&["commits"])?;
        let envelope: Envelope<CommitRecord> =
            self.send(endpoint, self.http.post(url).json(commit)).await?;
        envelope
            .into_data()?
            .ok_or(ApiError::MissingData { endpoint })
    }

    /// `PUT /commits/{id}`. Returns the fields the server echoed back, if any.
    pub async fn update(
        &self,
        id: &CommitId,
        patch: &CommitPatch,
    ) -> Result<Option<CommitPatch>, ApiError> {
        let endpoint = "PUT /commits/{id}";
        let url = self.endpoint(&["commits", id.as_str()])?;
        let envelope: Envelope<CommitPatch> =
            self.send(endpoint, self.http.put(url).json(patch)).await?;
        envelope.into_data()
    }

    /// `DELETE /commits/{id}`
    pub async fn delete(&self, id: &CommitId) -> Result<(), ApiError> {
        let endpoint = "DELETE /commits/{id}";
        let url = self.endpoint(&["commits", id.as_str()])?;
        let envelope: Envelope<IgnoredAny> = self.send(endpoint, self.http.delete(url)).await?;
        envelope.into_data().map(|_| ())
    }

    /// Base URL with path segments appended (segments are percent-encoded)
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        tracing::debug!(endpoint, "sending request");

        let resp = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let body = resp
            .text()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        let result = decode_envelope(status, &content_type, &body);
        if let Err(ref e) = result {
            tracing::warn!(endpoint, status, error = %e, "request failed");
        }
        result
    }
}
