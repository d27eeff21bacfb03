//! Error types for draft publishing.

use crate::error::SubstackError;

/// Error from [`DraftPublisher`](super::DraftPublisher) operations.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The publication has no drafts to copy settings from.
    #[error("no drafts found; create one draft in the web editor first")]
    NoReferenceDraft,

    /// Every draft is published, so none can serve as reference.
    #[error("no unpublished draft found for reference")]
    NoUnpublishedReference,

    /// Server answered 500 and the draft never showed up in the draft list.
    #[error("draft creation failed with a server error and no new draft was found: {body}")]
    Unverified {
        /// Body of the 500 response.
        body: String,
    },

    /// Substack API error.
    #[error("{0}")]
    Substack(#[from] SubstackError),
}
