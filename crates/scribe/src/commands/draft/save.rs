//! `scribe draft save` command implementation.

use std::path::PathBuf;

use clap::Args;
use scribe_markup::compile_with_warnings;
use scribe_substack::{DraftPublisher, DraftUpdate, PublisherConfig};

use crate::commands::common::{ConfigArgs, print_warnings, read_markup};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the draft save command.
#[derive(Args)]
pub(crate) struct SaveArgs {
    /// Draft ID.
    draft_id: u64,

    /// New title.
    #[arg(short, long)]
    title: Option<String>,

    /// New subtitle.
    #[arg(short, long)]
    subtitle: Option<String>,

    /// Markup file to replace the body with, or `-` to read stdin.
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(flatten)]
    config: ConfigArgs,
}

impl SaveArgs {
    /// Execute the save command.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is given to save or the save fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = self.config.client(&output)?;

        let mut update = DraftUpdate {
            title: self.title,
            subtitle: self.subtitle,
            body: None,
        };
        if let Some(path) = &self.file {
            let compiled = compile_with_warnings(&read_markup(path)?);
            output.info(&format!(
                "Compiled {} into {} blocks",
                path.display(),
                compiled.document.len()
            ));
            print_warnings(&output, &compiled.warnings);
            update.body = Some(compiled.document);
        }

        let publisher = DraftPublisher::new(&client, PublisherConfig::default());
        let draft = publisher.save(self.draft_id, &update)?;

        output.success("\nDraft saved!");
        output.info(&format!("ID: {}", draft.id));
        output.info(&format!("Title: {}", draft.title_or_untitled()));
        output.info(&format!("Edit: {}", client.draft_edit_url(draft.id)));

        Ok(())
    }
}
