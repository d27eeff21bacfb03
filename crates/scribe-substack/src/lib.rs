//! Substack publishing for scribe.
//!
//! This crate talks to the endpoints the Substack web editor uses:
//! - [`SubstackClient`]: REST API client authenticated with session cookies
//! - [`DraftPublisher`]: draft creation workflow, including recovery when
//!   the server answers 500 after storing the draft
//!
//! # API Client
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use scribe_config::Config;
//! use scribe_substack::SubstackClient;
//!
//! let config = Config::load(None, None)?;
//! let client = SubstackClient::new(&config.require_publication()?);
//!
//! for draft in client.list_drafts()? {
//!     println!("{} {}", draft.id, draft.title_or_untitled());
//! }
//! # Ok(())
//! # }
//! ```

// API client
mod client;
pub use client::{CreateOutcome, SubstackClient};

// Types
mod types;
pub use types::{
    Byline, Draft, DraftByline, DraftMetadata, DraftUpdate, NewDraft, Post, PublishOptions,
    PublishedPost,
};

// Draft publisher
pub mod publisher;
pub use publisher::{
    CreatedDraft, DraftPublisher, DryRunResult, PublishError, PublisherConfig, RetryPolicy,
};

// Errors
pub mod error;
pub use error::SubstackError;
