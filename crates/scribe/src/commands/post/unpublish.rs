//! `scribe post unpublish` command implementation.

use clap::Args;

use crate::commands::common::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the post unpublish command.
#[derive(Args)]
pub(crate) struct UnpublishArgs {
    /// Post ID.
    post_id: u64,

    #[command(flatten)]
    config: ConfigArgs,
}

impl UnpublishArgs {
    /// Execute the unpublish command.
    ///
    /// # Errors
    ///
    /// Returns an error if the post cannot be unpublished.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = self.config.client(&output)?;

        let draft = client.unpublish_post(self.post_id)?;

        output.success(&format!("\nPost {} unpublished (now a draft)", self.post_id));
        output.info(&format!("Edit: {}", client.draft_edit_url(draft.id)));

        Ok(())
    }
}
