//! `scribe draft list` command implementation.

use clap::Args;

use crate::commands::common::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Characters of body text shown per draft.
const PREVIEW_CHARS: usize = 100;

/// Arguments for the draft list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Only show drafts that have not been published.
    #[arg(short, long)]
    unpublished: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ListArgs {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the drafts cannot be listed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = self.config.client(&output)?;

        let drafts: Vec<_> = client
            .list_drafts()?
            .into_iter()
            .filter(|draft| !self.unpublished || !draft.is_published)
            .collect();

        if drafts.is_empty() {
            output.warning("No drafts found");
            return Ok(());
        }

        output.highlight(&format!("Drafts ({}):", drafts.len()));
        for draft in &drafts {
            output.separator();
            output.info(&format!("ID: {}", draft.id));
            output.info(&format!("Title: {}", draft.title_or_untitled()));
            if let Some(subtitle) = draft.draft_subtitle.as_deref().filter(|s| !s.is_empty()) {
                output.info(&format!("Subtitle: {subtitle}"));
            }
            if let Some(updated) = &draft.draft_updated_at {
                output.info(&format!("Updated: {updated}"));
            }
            if draft.is_published {
                output.info("Status: published");
            } else if let Some(date) = &draft.post_date {
                output.info(&format!("Scheduled for: {date}"));
            }
            if let Some(preview) = draft.preview(PREVIEW_CHARS) {
                output.info(&format!("Preview: {preview}..."));
            }
            output.info(&format!("Edit: {}", client.draft_edit_url(draft.id)));
        }

        Ok(())
    }
}
