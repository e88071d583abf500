//! REST client for the notes service.
//!
//! Every failure is reported to the configured [`ErrorSink`] and also returned
//! to the caller, so workflows can add their own context on top of the generic
//! notification.

#[cfg(test)]
mod memory;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{Error, Result};
use crate::models::{Note, NoteId, NotePayload};

#[cfg(test)]
pub use memory::InMemoryBackend;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Callback receiving a human-readable message for every failed request
pub type ErrorSink = Arc<dyn Fn(&str) + Send + Sync>;

/// The five operations of the notes service
#[async_trait]
pub trait NotesBackend {
    /// All notes, in the order the service returns them
    async fn list(&self) -> Result<Vec<Note>>;

    /// A single note by id
    async fn get(&self, id: &NoteId) -> Result<Note>;

    /// Persist a new note and return it with its assigned id and timestamps
    async fn create(&self, payload: &NotePayload) -> Result<Note>;

    /// Replace a note's fields and return the stored result
    async fn update(&self, id: &NoteId, payload: &NotePayload) -> Result<Note>;

    /// Remove a note
    async fn delete(&self, id: &NoteId) -> Result<()>;
}

/// Normalized response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// 204 No Content
    Empty,
    /// Body declared as JSON
    Json(serde_json::Value),
    /// Any other body, returned as text
    Text(String),
}

/// HTTP client for the notes service.
#[derive(Clone)]
pub struct NotesApi {
    base_url: String,
    client: reqwest::Client,
    on_error: ErrorSink,
}

impl fmt::Debug for NotesApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotesApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl NotesApi {
    /// Builds a client for an explicit base URL.
    ///
    /// An empty base URL is accepted; requests will then fail as network errors.
    pub fn new(base_url: impl Into<String>, on_error: ErrorSink) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into());
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::Config(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self {
            base_url,
            client,
            on_error,
        })
    }

    /// Builds a client from runtime configuration.
    pub fn from_config(config: &ClientConfig, on_error: ErrorSink) -> Result<Self> {
        Self::new(config.base_url(), on_error)
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and normalizes the response.
    ///
    /// The body, when present, is serialized as JSON. The JSON content type is
    /// declared on every request.
    pub async fn request<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|error| self.fail(error.into()))?;
            request = request.body(bytes);
        }

        let response = request
            .send()
            .await
            .map_err(|error| self.fail(Error::Network(error.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.fail(api_error(status, &body)));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(ApiResponse::Empty);
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains(JSON_CONTENT_TYPE));

        let text = response
            .text()
            .await
            .map_err(|error| self.fail(Error::Network(error.to_string())))?;

        if is_json {
            let value = serde_json::from_str(&text).map_err(|error| self.fail(error.into()))?;
            Ok(ApiResponse::Json(value))
        } else {
            Ok(ApiResponse::Text(text))
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&NotePayload>,
    ) -> Result<T> {
        match self.request(method, path, body).await? {
            ApiResponse::Json(value) => {
                serde_json::from_value(value).map_err(|error| self.fail(error.into()))
            }
            ApiResponse::Empty => Err(self.fail(Error::Decode(
                "expected a JSON body, got no content".to_string(),
            ))),
            ApiResponse::Text(text) => Err(self.fail(Error::Decode(format!(
                "expected a JSON body, got: {}",
                compact_text(&text)
            )))),
        }
    }

    fn fail(&self, error: Error) -> Error {
        let message = error.to_string();
        tracing::warn!("Notes API request failed: {}", message);
        (self.on_error)(&message);
        error
    }
}

#[async_trait]
impl NotesBackend for NotesApi {
    async fn list(&self) -> Result<Vec<Note>> {
        self.fetch(Method::GET, "/notes", None).await
    }

    async fn get(&self, id: &NoteId) -> Result<Note> {
        self.fetch(Method::GET, &note_path(id), None).await
    }

    async fn create(&self, payload: &NotePayload) -> Result<Note> {
        self.fetch(Method::POST, "/notes", Some(payload)).await
    }

    async fn update(&self, id: &NoteId, payload: &NotePayload) -> Result<Note> {
        self.fetch(Method::PUT, &note_path(id), Some(payload)).await
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        self.request::<NotePayload>(Method::DELETE, &note_path(id), None)
            .await
            .map(|_| ())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn note_path(id: &NoteId) -> String {
    format!("/notes/{}", urlencoding::encode(id.as_str()))
}

/// Build an API error from a non-success response.
///
/// Prefers the JSON body's `message` field, falling back to the status line.
fn api_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| status_line(status));
    Error::Api {
        status: status.as_u16(),
        message,
    }
}

/// `reqwest` does not expose the reason phrase the server sent, so the
/// canonical phrase for the code stands in for it.
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

#[cfg(test)]
mod tests;
