//! Substack REST API client.
//!
//! Provides a sync HTTP client for the publication endpoints the web editor
//! uses, authenticated with browser session cookies.

mod drafts;
mod posts;

pub use drafts::CreateOutcome;

use std::time::Duration;

use scribe_config::PublicationConfig;
use serde::de::DeserializeOwned;
use ureq::http::Response;
use ureq::{Agent, Body, RequestBuilder};

use crate::error::SubstackError;

/// Substack REST API client for one publication.
pub struct SubstackClient {
    agent: Agent,
    base_url: String,
    user_agent: String,
    cookie: Option<String>,
}

impl SubstackClient {
    /// Create client from a validated publication config.
    #[must_use]
    pub fn new(config: &PublicationConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.http.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.url.trim_end_matches('/').to_owned(),
            user_agent: config.http.user_agent.clone(),
            cookie: config.session.cookie_header(),
        }
    }

    /// Publication base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Editor URL for a draft.
    #[must_use]
    pub fn draft_edit_url(&self, draft_id: u64) -> String {
        format!("{}/publish/post/{draft_id}", self.base_url)
    }

    /// Public URL for a post slug.
    #[must_use]
    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/p/{slug}", self.base_url)
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/api/v1", self.base_url)
    }

    /// Attach the browser-session headers every endpoint expects.
    fn with_session<B>(&self, request: RequestBuilder<B>) -> RequestBuilder<B> {
        let request = request
            .header("User-Agent", &self.user_agent)
            .header("Referer", &self.base_url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        match &self.cookie {
            Some(cookie) => request.header("Cookie", cookie),
            None => request,
        }
    }

    /// Turn an error status into [`SubstackError::HttpResponse`], otherwise
    /// decode the JSON body.
    fn read_json<T: DeserializeOwned>(response: Response<Body>) -> Result<T, SubstackError> {
        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(SubstackError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_json()?)
    }
}
