//! Retrieval of raw resource bytes.
//!
//! The engine only depends on [`ContentFetcher`]; [`HttpContentFetcher`] is
//! the network implementation used by the CLI.

use std::fmt;
use std::time::Duration;

use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::error::{ThumbnailError, ThumbnailResult};

/// Absolute locator of a remote resource.
///
/// Parsing guarantees a scheme, a host and a path. `https://host/` has the
/// path `/`; `https://host` has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReference {
    url: Url,
}

impl ContentReference {
    pub fn parse(input: &str) -> ThumbnailResult<Self> {
        let trimmed = input.trim();
        let url = Url::parse(trimmed)
            .map_err(|err| ThumbnailError::InvalidReference(format!("`{input}`: {err}")))?;
        if url.host_str().is_none_or(str::is_empty) {
            return Err(ThumbnailError::InvalidReference(format!(
                "`{input}` has no host"
            )));
        }
        // `Url` normalizes a missing path to "/", so look at the raw input.
        if !has_explicit_path(trimmed) {
            return Err(ThumbnailError::InvalidReference(format!(
                "`{input}` has no path"
            )));
        }
        Ok(Self { url })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Whether a path follows the authority of `input`.
fn has_explicit_path(input: &str) -> bool {
    let Some((_, rest)) = input.split_once("://") else {
        return false;
    };
    rest.find(['/', '?', '#'])
        .is_some_and(|end| rest[end..].starts_with('/'))
}

impl fmt::Display for ContentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Source of raw resource bytes for one request.
pub trait ContentFetcher {
    fn fetch(&self, reference: &ContentReference, auth_token: &str) -> ThumbnailResult<Vec<u8>>;
}

/// Blocking HTTP fetcher with a bounded request timeout.
#[derive(Debug, Clone)]
pub struct HttpContentFetcher {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpContentFetcher {
    pub fn new(timeout: Duration) -> ThumbnailResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ThumbnailError::Transport(format!("failed to build client: {err}")))?;
        Ok(Self { client, timeout })
    }

    /// Wraps a preconfigured client. `timeout` is only reported back; the
    /// client is expected to enforce it.
    #[must_use]
    pub fn with_client(client: reqwest::blocking::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl ContentFetcher for HttpContentFetcher {
    fn fetch(&self, reference: &ContentReference, auth_token: &str) -> ThumbnailResult<Vec<u8>> {
        let mut request = self.client.get(reference.url().clone());
        let token = auth_token.trim();
        if !token.is_empty() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|err| ThumbnailError::Transport(format!("request to {reference} failed: {err}")))?;
        let status = response.status();
        debug!(reference = %reference, status = status.as_u16(), "fetched content");

        match status {
            StatusCode::OK => response
                .bytes()
                .map(|body| body.to_vec())
                .map_err(|err| {
                    ThumbnailError::Transport(format!("failed to read body of {reference}: {err}"))
                }),
            StatusCode::NOT_FOUND => Err(ThumbnailError::ResourceNotFound),
            other => Err(ThumbnailError::Transport(format!(
                "{reference} answered with status {other}"
            ))),
        }
    }
}
