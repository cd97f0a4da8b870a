//! HTTP boundary
//!
//! One operation: GET a URL and hand back the body as text. Status codes and
//! headers are ignored entirely. The `Fetch` trait exists so the event loop
//! can be driven by a stub in tests; production wraps `reqwest::Client`.

use std::time::{Duration, Instant};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("failed to read response body: {0}")]
    Read(String),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::Read(_) => FetchErrorKind::Read,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Read,
}

/// A successfully fetched response body
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedBody {
    pub url: String,
    pub body: String,
    pub elapsed: Duration,
}

/// Fetch outcome as a plain value, fed back into the event loop as a regular
/// action so a failed fetch is displayed instead of killing the program
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(FetchedBody),
    Failure {
        kind: FetchErrorKind,
        message: String,
    },
}

impl From<Result<FetchedBody, FetchError>> for FetchOutcome {
    fn from(result: Result<FetchedBody, FetchError>) -> Self {
        match result {
            Ok(fetched) => FetchOutcome::Success(fetched),
            Err(e) => FetchOutcome::Failure {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

/// The one I/O operation in the event loop
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get(&self, url: &str) -> Result<FetchedBody, FetchError>;
}

/// Production fetcher backed by reqwest
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchedBody, FetchError> {
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        // Status and headers are deliberately not inspected
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Read(e.to_string()))?;

        Ok(FetchedBody {
            url: url.to_string(),
            body,
            elapsed: start.elapsed(),
        })
    }
}
