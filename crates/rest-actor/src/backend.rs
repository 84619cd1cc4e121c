//! # HTTP Backend Adapter
//!
//! [`Backend`] is the only place that talks HTTP. It joins path segments onto the configured
//! base address, issues one request per call and turns the response into either a decoded
//! JSON body or a [`FrameworkError`]:
//!
//! - connection failures and timeouts become [`FrameworkError::Transport`];
//! - any non-2xx status becomes [`FrameworkError::Status`] carrying the body text;
//! - a 2xx body that is not the expected JSON shape becomes [`FrameworkError::Decode`].
//!
//! There are no retries and no fallbacks. The inner `reqwest::Client` pools connections,
//! so cloning a `Backend` is cheap and clones share the pool.

use crate::error::FrameworkError;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// A handle on the REST backend reachable at a fixed base address.
#[derive(Clone, Debug)]
pub struct Backend {
    http: reqwest::Client,
    base_url: Url,
}

impl Backend {
    /// Creates a backend handle for `base_url`, with an optional per-request timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FrameworkError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Self::with_client(http, base_url)
    }

    /// Creates a backend handle reusing an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, FrameworkError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FrameworkError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FrameworkError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins `segments` onto the base address, percent-encoding each one.
    ///
    /// A trailing `/` on the base address does not produce an empty segment.
    pub fn url(&self, segments: &[&str]) -> Result<Url, FrameworkError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FrameworkError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get<R: DeserializeOwned>(&self, segments: &[&str]) -> Result<R, FrameworkError> {
        let body = self.send(Method::GET, segments, None::<&()>).await?;
        decode(&body)
    }

    pub async fn post<B, R>(&self, segments: &[&str], body: &B) -> Result<R, FrameworkError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = self.send(Method::POST, segments, Some(body)).await?;
        decode(&body)
    }

    pub async fn patch<B, R>(&self, segments: &[&str], body: &B) -> Result<R, FrameworkError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = self.send(Method::PATCH, segments, Some(body)).await?;
        decode(&body)
    }

    /// Deletes the resource; an empty response body decodes to `None`.
    pub async fn delete<R: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Option<R>, FrameworkError> {
        let body = self.send(Method::DELETE, segments, None::<&()>).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        decode(&body).map(Some)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Vec<u8>, FrameworkError> {
        let url = self.url(segments)?;
        debug!(%method, path = url.path(), "Backend request");
        let mut request: RequestBuilder = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, path = url.path(), error = %e, "Backend unreachable");
            FrameworkError::from(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            warn!(%method, path = url.path(), status = status.as_u16(), "Backend error status");
            return Err(FrameworkError::Status {
                status: status.as_u16(),
                body,
            });
        }
        debug!(%method, path = url.path(), status = status.as_u16(), len = bytes.len(), "Backend response");
        Ok(bytes.to_vec())
    }
}

fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R, FrameworkError> {
    Ok(serde_json::from_slice(body)?)
}
