//! # HTTP client for the notes API
//!
//! [`ApiClient`] has one method per endpoint. Every response body is decoded as
//! an [`Envelope`] regardless of the HTTP status, because the API reports
//! failures through `ok: false` plus a message rather than through status codes
//! alone.
//!
//! | Method | Endpoint | Token |
//! |--------|----------|-------|
//! | [`login`](ApiClient::login) | `POST /v1/auth/login` | no |
//! | [`create_user`](ApiClient::create_user) | `POST /users` | no |
//! | [`list_notes`](ApiClient::list_notes) | `GET /v1/notes` | yes |
//! | [`create_note`](ApiClient::create_note) | `POST /v1/notes` | yes |
//! | [`get_note`](ApiClient::get_note) | `GET /v1/notes/:id` | yes |
//! | [`update_note`](ApiClient::update_note) | `PUT /v1/notes/:id` | yes |
//! | [`delete_note`](ApiClient::delete_note) | `DELETE /v1/notes/:id` | yes |
//!
//! A failure envelope becomes [`ApiError::Rejected`] carrying the server's
//! message, or the operation's fallback text when the server sent none. A body
//! that is not an envelope at all becomes [`ApiError::UnexpectedResponse`].
//!
//! There is no timeout, retry or cancellation: a failed call is reported once
//! and the user decides whether to try again.

use reqwest::RequestBuilder;
use serde::de::{DeserializeOwned, IgnoredAny};
use url::Url;

use crate::config::ApiConfig;
use crate::errors::ApiError;
use crate::headers::{auth_headers, json_headers};
use crate::models::{Credentials, Envelope, NewUser, Note, NoteDraft, NoteId, NoteUpdate};

/// Thin wrapper over a shared `reqwest::Client`. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let request = self
            .http
            .post(self.endpoint(&["v1", "auth", "login"]))
            .headers(json_headers())
            .json(credentials);
        let envelope: Envelope<IgnoredAny> = self.send(request, "Login failed").await?;
        envelope
            .token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)
    }

    /// Register a user. Returns the server's confirmation message, if any.
    pub async fn create_user(&self, user: &NewUser) -> Result<Option<String>, ApiError> {
        let request = self
            .http
            .post(self.endpoint(&["users"]))
            .headers(json_headers())
            .json(user);
        let envelope: Envelope<IgnoredAny> = self.send(request, "Signup failed").await?;
        Ok(envelope.message().map(str::to_string))
    }

    pub async fn list_notes(&self, token: Option<&str>) -> Result<Vec<Note>, ApiError> {
        let request = self
            .http
            .get(self.endpoint(&["v1", "notes"]))
            .headers(auth_headers(token));
        let envelope: Envelope<Vec<Note>> = self.send(request, "Failed to fetch notes").await?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn create_note(&self, token: Option<&str>, draft: &NoteDraft) -> Result<(), ApiError> {
        let request = self
            .http
            .post(self.endpoint(&["v1", "notes"]))
            .headers(auth_headers(token))
            .json(draft);
        let _: Envelope<IgnoredAny> = self.send(request, "Failed to create note").await?;
        Ok(())
    }

    pub async fn get_note(&self, token: Option<&str>, id: &NoteId) -> Result<Note, ApiError> {
        let request = self
            .http
            .get(self.endpoint(&["v1", "notes", id.as_str()]))
            .headers(auth_headers(token));
        let (status, envelope) = self
            .exchange::<Note>(request, "Failed to fetch note")
            .await?;
        envelope.data.ok_or_else(|| {
            tracing::warn!("Note {} came back without data", id);
            ApiError::UnexpectedResponse { status }
        })
    }

    pub async fn update_note(
        &self,
        token: Option<&str>,
        id: &NoteId,
        update: &NoteUpdate,
    ) -> Result<(), ApiError> {
        let request = self
            .http
            .put(self.endpoint(&["v1", "notes", id.as_str()]))
            .headers(auth_headers(token))
            .json(update);
        let _: Envelope<IgnoredAny> = self.send(request, "Failed to update note").await?;
        Ok(())
    }

    pub async fn delete_note(&self, token: Option<&str>, id: &NoteId) -> Result<(), ApiError> {
        let request = self
            .http
            .delete(self.endpoint(&["v1", "notes", id.as_str()]))
            .headers(auth_headers(token));
        let _: Envelope<IgnoredAny> = self.send(request, "Failed to delete note").await?;
        Ok(())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<Envelope<T>, ApiError> {
        let (_, envelope) = self.exchange(request, fallback).await?;
        Ok(envelope)
    }

    /// Send a request and decode the envelope, turning `ok: false` into an error.
    async fn exchange<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<(u16, Envelope<T>), ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("{}: request failed: {}", fallback, e);
            ApiError::Transport(e)
        })?;
        let status = response.status().as_u16();
        tracing::debug!("{} -> HTTP {}", response.url().path(), status);

        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("{}: undecodable response (HTTP {}): {}", fallback, status, e);
            ApiError::UnexpectedResponse { status }
        })?;

        if envelope.ok {
            return Ok((status, envelope));
        }
        let message = envelope.message().unwrap_or(fallback).to_string();
        tracing::warn!("{}: server rejected request (HTTP {}): {}", fallback, status, message);
        Err(ApiError::Rejected { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::new(base).unwrap())
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let c = client("http://localhost:3000");
        assert_eq!(
            c.endpoint(&["v1", "notes"]).as_str(),
            "http://localhost:3000/v1/notes"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let c = client("https://example.com/api/");
        assert_eq!(
            c.endpoint(&["v1", "auth", "login"]).as_str(),
            "https://example.com/api/v1/auth/login"
        );
    }

    #[test]
    fn test_endpoint_encodes_note_id() {
        let c = client("http://localhost:3000");
        assert_eq!(
            c.endpoint(&["v1", "notes", "a/b c"]).as_str(),
            "http://localhost:3000/v1/notes/a%2Fb%20c"
        );
    }
}
