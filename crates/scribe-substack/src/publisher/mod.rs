//! Draft publisher for Substack.
//!
//! This module provides the [`DraftPublisher`] struct that encapsulates the
//! workflow for turning markup into a Substack draft:
//!
//! 1. Compile markup to an editor document
//! 2. Pick an unpublished draft as reference for publication and bylines
//! 3. Create the draft
//! 4. If the server answers 500, poll the draft list to find the draft it
//!    created anyway
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use scribe_config::Config;
//! use scribe_substack::{DraftMetadata, DraftPublisher, PublisherConfig, SubstackClient};
//!
//! let config = Config::load(None, None)?;
//! let client = SubstackClient::new(&config.require_publication()?);
//! let publisher = DraftPublisher::new(&client, PublisherConfig::default());
//!
//! let created = publisher.create_from_markup(
//!     "Weekly notes",
//!     Some("What happened this week"),
//!     "H2:: Highlights | Text:: Shipped **scribe** | Button:: Subscribe -> %%checkout_url%%",
//!     &DraftMetadata::default(),
//! )?;
//! println!("{}", client.draft_edit_url(created.draft.id));
//! # Ok(())
//! # }
//! ```

mod error;
mod executor;
mod recovery;
mod result;

pub use error::PublishError;
pub use executor::DraftPublisher;
pub use result::{CreatedDraft, DryRunResult};

use std::time::Duration;

/// How long to keep looking for a draft after the server answered 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of draft-list polls.
    pub attempts: u32,
    /// Delay before the first poll; later polls wait a multiple of it.
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Delay before poll `attempt` (0-based): `base_delay * (attempt + 1)`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt.saturating_add(1))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Configuration for creating drafts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublisherConfig {
    /// Recovery polling after a 500 response.
    pub retry: RetryPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_delays() {
        let policy = RetryPolicy::default();
        let delays: Vec<_> = (0..policy.attempts).map(|a| policy.delay_for(a)).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(3)
            ]
        );
    }

    #[test]
    fn test_zero_delay_policy() {
        let policy = RetryPolicy {
            attempts: 2,
            base_delay: Duration::ZERO,
        };
        assert_eq!(policy.delay_for(5), Duration::ZERO);
    }
}
