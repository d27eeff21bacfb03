//! Result types for draft publishing.

use crate::types::{Draft, NewDraft};

/// Result of a successful draft creation.
#[derive(Debug)]
pub struct CreatedDraft {
    /// The created draft.
    pub draft: Draft,
    /// True when the draft was found by polling after a 500 response.
    pub recovered: bool,
    /// Number of top-level blocks in the draft body.
    pub block_count: usize,
    /// Markup compile warnings.
    pub warnings: Vec<String>,
}

/// Result of a dry-run (no draft created).
#[derive(Debug)]
pub struct DryRunResult {
    /// ID of the draft settings were copied from.
    pub reference_id: u64,
    /// Payload that would be sent.
    pub payload: NewDraft,
    /// Markup compile warnings.
    pub warnings: Vec<String>,
}
