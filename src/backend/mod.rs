//! # Backend Client
//!
//! Thin REST client for the hosted backend that owns MoodDrop's data and
//! authentication. The backend exposes a generated REST layer over its
//! Postgres tables (`/rest/v1/...`) and an auth service (`/auth/v1/...`);
//! this module only calls those endpoints and never assumes more about the
//! schema than the columns it reads or writes.
//!
//! ## Requests
//!
//! Every request carries the public `apikey` header. The bearer token is the
//! signed-in user's session token when one is configured, otherwise the
//! anon key, which the backend treats as an anonymous caller.
//!
//! ## Retries
//!
//! `502 Bad Gateway` is retried up to [`MAX_ATTEMPTS`] times with a fixed
//! delay ([`DEFAULT_RETRY_DELAY`] unless set with
//! [`BackendClient::with_retry_delay`]). Every other failure is returned to
//! the caller immediately.
//!
//! ## Submodules
//!
//! - [`auth`] - resolves the current [`Principal`](crate::types::Principal)
//! - [`drops`] - inserts and lists drop rows
//! - [`settings`] - reads the remote paywall flag

pub mod auth;
pub mod drops;
pub mod settings;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use thiserror::Error;
use tokio::time::sleep;

use crate::config;

pub const MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend not configured: {0}")]
    Config(String),

    #[error("not signed in (set MOODDROP_ACCESS_TOKEN)")]
    Unauthenticated,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub struct BackendClient {
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
    retry_delay: Duration,
    http: Client,
}

impl BackendClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Project URL of the backend; a trailing `/` is ignored
    /// * `anon_key` - Public API key, sent as `apikey` on every request
    /// * `access_token` - Session token of the signed-in user, if any
    ///
    /// # Returns
    ///
    /// A client that retries `502` responses after [`DEFAULT_RETRY_DELAY`].
    ///
    /// # Example
    ///
    /// ```
    /// let client = BackendClient::new("https://xyz.supabase.co/", "anon-key", None);
    /// assert_eq!(client.endpoint("rest/v1/drops"), "https://xyz.supabase.co/rest/v1/drops");
    /// ```
    pub fn new(base_url: &str, anon_key: &str, access_token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token,
            retry_delay: DEFAULT_RETRY_DELAY,
            http: Client::new(),
        }
    }

    /// Replaces the wait between two attempts after a `502` response.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Creates a client from `MOODDROP_BACKEND_URL`, `MOODDROP_BACKEND_ANON_KEY`
    /// and the optional `MOODDROP_ACCESS_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Config`] when the URL or the anon key is unset
    /// or blank.
    pub fn from_config() -> Result<Self, BackendError> {
        let base_url = config::backend_url().map_err(BackendError::Config)?;
        let anon_key = config::backend_anon_key().map_err(BackendError::Config)?;
        Ok(Self::new(&base_url, &anon_key, config::access_token()))
    }

    /// Joins `path` onto the base URL with exactly one `/` between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn has_session(&self) -> bool {
        self.access_token.is_some()
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.endpoint(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.endpoint(path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        request.header("apikey", &self.anon_key).bearer_auth(bearer)
    }

    /// Sends a request built by `build`, rebuilding it for each retry.
    ///
    /// # Arguments
    ///
    /// * `build` - Produces the request; called once per attempt
    ///
    /// # Returns
    ///
    /// The first response with a success status.
    ///
    /// # Errors
    ///
    /// - [`BackendError::Unauthenticated`] for `401 Unauthorized`
    /// - [`BackendError::Http`] for transport failures, any other error
    ///   status, or a `502` on the last of [`MAX_ATTEMPTS`] attempts
    pub(crate) async fn send<F>(&self, build: F) -> Result<Response, BackendError>
    where
        F: Fn(&Self) -> RequestBuilder,
    {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let response = build(self).send().await?;

            match response.error_for_status() {
                Ok(valid_response) => return Ok(valid_response),
                Err(err) => match err.status() {
                    Some(StatusCode::BAD_GATEWAY) if attempt < MAX_ATTEMPTS => {
                        tracing::warn!(attempt, "backend returned 502, retrying");
                        sleep(self.retry_delay).await;
                    }
                    Some(StatusCode::UNAUTHORIZED) => return Err(BackendError::Unauthenticated),
                    _ => return Err(err.into()),
                },
            }
        }
    }
}
