//! Draft publisher implementation.

use chrono::{DateTime, Utc};
use scribe_markup::{Document, compile_with_warnings};
use tracing::{info, warn};

use crate::client::{CreateOutcome, SubstackClient};
use crate::types::{Draft, DraftMetadata, DraftUpdate, NewDraft, PublishOptions, PublishedPost};

use super::PublisherConfig;
use super::error::PublishError;
use super::recovery::find_created_draft;
use super::result::{CreatedDraft, DryRunResult};

/// Handles creating, saving and publishing Substack drafts.
pub struct DraftPublisher<'a> {
    client: &'a SubstackClient,
    config: PublisherConfig,
}

impl<'a> DraftPublisher<'a> {
    /// Create a new draft publisher.
    #[must_use]
    pub fn new(client: &'a SubstackClient, config: PublisherConfig) -> Self {
        Self { client, config }
    }

    /// Compile markup and create a draft from it.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub fn create_from_markup(
        &self,
        title: &str,
        subtitle: Option<&str>,
        markup: &str,
        metadata: &DraftMetadata,
    ) -> Result<CreatedDraft, PublishError> {
        let compiled = compile_with_warnings(markup);
        let mut created = self.create(title, subtitle, compiled.document, metadata)?;
        created.warnings = compiled.warnings;
        Ok(created)
    }

    /// Create a draft with the given body.
    ///
    /// Publication, post type and bylines are copied from the first
    /// unpublished draft, so the publication needs at least one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no unpublished reference draft exists
    /// - Substack API calls fail
    /// - the server answered 500 and the draft could not be found afterwards
    pub fn create(
        &self,
        title: &str,
        subtitle: Option<&str>,
        body: Document,
        metadata: &DraftMetadata,
    ) -> Result<CreatedDraft, PublishError> {
        let reference = self.reference_draft()?;
        let block_count = body.len();
        let payload = NewDraft::from_reference(&reference, title, subtitle, body, metadata);

        let requested_at = Utc::now();
        let (draft, recovered) = match self.client.create_draft(&payload)? {
            CreateOutcome::Created(draft) => (draft, false),
            CreateOutcome::ServerError(body) => (self.recover(title, requested_at, body)?, true),
        };

        info!(
            "Draft {} ready at {}",
            draft.id,
            self.client.draft_edit_url(draft.id)
        );

        Ok(CreatedDraft {
            draft,
            recovered,
            block_count,
            warnings: Vec::new(),
        })
    }

    /// Build the creation payload without creating anything.
    ///
    /// Still reads the draft list to pick the reference draft.
    ///
    /// # Errors
    ///
    /// Returns an error if no reference draft exists or API calls fail.
    pub fn dry_run(
        &self,
        title: &str,
        subtitle: Option<&str>,
        markup: &str,
        metadata: &DraftMetadata,
    ) -> Result<DryRunResult, PublishError> {
        let compiled = compile_with_warnings(markup);
        let reference = self.reference_draft()?;
        let payload =
            NewDraft::from_reference(&reference, title, subtitle, compiled.document, metadata);

        Ok(DryRunResult {
            reference_id: reference.id,
            payload,
            warnings: compiled.warnings,
        })
    }

    /// Save fields of an existing draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is empty or the API call fails.
    pub fn save(&self, draft_id: u64, update: &DraftUpdate) -> Result<Draft, PublishError> {
        Ok(self.client.update_draft(draft_id, update)?)
    }

    /// Publish an existing draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails.
    pub fn publish(
        &self,
        draft_id: u64,
        options: &PublishOptions,
    ) -> Result<PublishedPost, PublishError> {
        Ok(self.client.publish_draft(draft_id, options)?)
    }

    /// Fetch the first unpublished draft in full.
    fn reference_draft(&self) -> Result<Draft, PublishError> {
        let drafts = self.client.list_drafts()?;
        if drafts.is_empty() {
            return Err(PublishError::NoReferenceDraft);
        }
        let reference_id = drafts
            .iter()
            .find(|draft| !draft.is_published)
            .map(|draft| draft.id)
            .ok_or(PublishError::NoUnpublishedReference)?;

        info!("Using unpublished draft {} as reference", reference_id);
        Ok(self.client.get_draft(reference_id)?)
    }

    /// Poll the draft list for a draft created despite a 500 response.
    fn recover(
        &self,
        title: &str,
        requested_at: DateTime<Utc>,
        body: String,
    ) -> Result<Draft, PublishError> {
        let retry = self.config.retry;
        for attempt in 0..retry.attempts {
            let delay = retry.delay_for(attempt);
            info!(
                "Checking for created draft in {:?} (attempt {}/{})",
                delay,
                attempt + 1,
                retry.attempts
            );
            std::thread::sleep(delay);

            match self.client.list_drafts() {
                Ok(drafts) => {
                    if let Some(draft) = find_created_draft(drafts, title, requested_at) {
                        info!("Recovered draft {} after server error", draft.id);
                        return Ok(draft);
                    }
                    info!("No matching draft in attempt {}", attempt + 1);
                }
                Err(err) => warn!("Draft list failed in attempt {}: {}", attempt + 1, err),
            }
        }

        Err(PublishError::Unverified { body })
    }
}
