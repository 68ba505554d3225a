//! HTTP access to the catalog backend.
//!
//! [`ApiClient`] owns the transport and knows how to build URLs, attach the session's bearer
//! token and turn responses into typed results. The per-resource clients ([`CatalogClient`],
//! [`InsightsClient`]) are thin wrappers that only name paths. There is deliberately no
//! timeout, retry or caching layer here; each call is a single request whose failure is
//! terminal for that attempt.

pub mod catalog;
pub mod insights;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::USER_AGENT,
    error::{api::ApiError, Error},
    model::api::{Ack, DetailDto, ErrorDto},
    session::Session,
};

pub use catalog::CatalogClient;
pub use insights::InsightsClient;

/// Shared handle to the backend. Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    session: Session,
}

impl ApiClient {
    /// Creates a new instance of [`ApiClient`] for the given session.
    pub fn new(session: &Session) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            session: session.clone(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Checks backend liveness with `GET /health`.
    pub async fn health(&self) -> Result<Ack, Error> {
        self.get(&["health"]).await
    }

    /// Appends `segments` to the base URL. Each segment is percent-encoded.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.session.base_url().clone();

        url.path_segments_mut()
            .map_err(|_| {
                Error::InternalError(format!(
                    "API base URL {} cannot be a base",
                    self.session.base_url()
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);

        let request = self.http.request(method, url);
        match self.session.auth_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get<T>(&self, segments: &[&str]) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let response = self.request(Method::GET, url).send().await?;

        decode(response).await
    }

    pub(crate) async fn get_query<T>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let mut url = self.url(segments)?;
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));

        let response = self.request(Method::GET, url).send().await?;

        decode(response).await
    }

    /// Sends a write request, with `body` serialized as JSON when present.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let mut request = self.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        decode(response).await
    }
}

/// Maps a response to `T`, or to [`ApiError::Status`] for any non-2xx status.
///
/// An empty success body decodes as `{}`, which suits the acknowledgement of writes.
async fn decode<T>(response: Response) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

        tracing::debug!("Request failed with status {}: {}", status, message);

        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        }
        .into());
    }

    if body.trim().is_empty() {
        return Ok(serde_json::from_str("{}")?);
    }

    Ok(serde_json::from_str(&body)?)
}

/// Extracts the server-supplied message of an error body, falling back to the raw text.
fn error_message(body: &str) -> Option<String> {
    if let Ok(dto) = serde_json::from_str::<ErrorDto>(body) {
        return Some(dto.error);
    }

    if let Ok(dto) = serde_json::from_str::<DetailDto>(body) {
        return Some(match dto.detail {
            serde_json::Value::String(detail) => detail,
            other => other.to_string(),
        });
    }

    let text = body.trim();
    (!text.is_empty()).then(|| text.to_string())
}
