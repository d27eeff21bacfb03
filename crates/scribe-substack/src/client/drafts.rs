//! Draft operations for the Substack API.

use tracing::{info, warn};

use super::SubstackClient;
use crate::error::SubstackError;
use crate::types::{Draft, DraftUpdate, NewDraft, PublishOptions, PublishResponse, PublishedPost};

/// Outcome of `POST /drafts`.
///
/// The platform regularly answers 500 after storing the draft anyway, so a
/// server error is reported separately from other failures for the caller to
/// verify.
#[derive(Debug)]
pub enum CreateOutcome {
    /// Draft created (200 or 201).
    Created(Draft),
    /// Server answered 500; carries the response body.
    ServerError(String),
}

impl SubstackClient {
    /// List the publication's drafts.
    pub fn list_drafts(&self) -> Result<Vec<Draft>, SubstackError> {
        let url = format!("{}/drafts", self.api_url());

        let response = self.with_session(self.agent.get(&url)).call()?;
        let drafts: Vec<Draft> = Self::read_json(response)?;

        info!("Found {} drafts", drafts.len());
        Ok(drafts)
    }

    /// Get a draft by ID.
    pub fn get_draft(&self, draft_id: u64) -> Result<Draft, SubstackError> {
        let url = format!("{}/drafts/{draft_id}", self.api_url());

        info!("Getting draft {}", draft_id);

        let response = self.with_session(self.agent.get(&url)).call()?;
        Self::read_json(response)
    }

    /// Create a draft.
    pub fn create_draft(&self, draft: &NewDraft) -> Result<CreateOutcome, SubstackError> {
        let url = format!("{}/drafts", self.api_url());
        let payload_bytes = serde_json::to_vec(draft)?;

        info!(
            "Creating draft '{}' ({} bytes)",
            draft.draft_title,
            payload_bytes.len()
        );

        let response = self
            .with_session(self.agent.post(&url))
            .send(&payload_bytes[..])?;

        if response.status().as_u16() == 500 {
            let body = response
                .into_body()
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            warn!("Draft creation returned 500: {}", body);
            return Ok(CreateOutcome::ServerError(body));
        }

        let created: Draft = Self::read_json(response)?;
        info!("Created draft {}", created.id);
        Ok(CreateOutcome::Created(created))
    }

    /// Save fields of an existing draft, as the editor's auto-save does.
    ///
    /// # Errors
    ///
    /// Returns [`SubstackError::EmptyUpdate`] without sending a request when
    /// `update` has no fields set.
    pub fn update_draft(&self, draft_id: u64, update: &DraftUpdate) -> Result<Draft, SubstackError> {
        if update.is_empty() {
            return Err(SubstackError::EmptyUpdate);
        }

        let url = format!("{}/drafts/{draft_id}", self.api_url());
        let payload_bytes = serde_json::to_vec(update)?;

        info!("Saving draft {}", draft_id);

        let response = self
            .with_session(self.agent.put(&url))
            .send(&payload_bytes[..])?;
        Self::read_json(response)
    }

    /// Publish a draft.
    pub fn publish_draft(
        &self,
        draft_id: u64,
        options: &PublishOptions,
    ) -> Result<PublishedPost, SubstackError> {
        let url = format!("{}/drafts/{draft_id}/publish", self.api_url());
        let payload_bytes = serde_json::to_vec(options)?;

        info!(
            "Publishing draft {} to {} (email: {})",
            draft_id, options.audience, options.send_email
        );

        let response = self
            .with_session(self.agent.post(&url))
            .send(&payload_bytes[..])?;
        let published: PublishResponse = Self::read_json(response)?;

        let url = published.slug.as_deref().map(|slug| self.post_url(slug));
        Ok(PublishedPost {
            id: published.id,
            slug: published.slug,
            url,
        })
    }
}
