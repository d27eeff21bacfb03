//! `scribe draft create` command implementation.

use std::path::PathBuf;

use clap::Args;
use scribe_substack::{
    CreatedDraft, DraftPublisher, DryRunResult, PublisherConfig, SubstackClient,
};

use crate::commands::common::{ConfigArgs, load_metadata, print_warnings, read_markup};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the draft create command.
#[derive(Args)]
pub(crate) struct CreateArgs {
    /// Markup file, or `-` to read stdin.
    markup_file: PathBuf,

    /// Draft title.
    #[arg(short, long)]
    title: String,

    /// Draft subtitle.
    #[arg(short, long)]
    subtitle: Option<String>,

    /// TOML file with post settings (audience, description, SEO fields, section).
    #[arg(short, long)]
    metadata: Option<PathBuf>,

    /// Print the creation payload without creating the draft.
    #[arg(long)]
    dry_run: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl CreateArgs {
    /// Execute the create command.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft cannot be created.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = self.config.client(&output)?;

        let markup = read_markup(&self.markup_file)?;
        let metadata = load_metadata(self.metadata.as_deref())?;
        output.info(&format!("Compiling {}...", self.markup_file.display()));

        let publisher = DraftPublisher::new(&client, PublisherConfig::default());
        let subtitle = self.subtitle.as_deref();

        if self.dry_run {
            let result = publisher.dry_run(&self.title, subtitle, &markup, &metadata)?;
            print_dry_run_result(&output, &result)?;
        } else {
            let result = publisher.create_from_markup(&self.title, subtitle, &markup, &metadata)?;
            print_created(&output, &client, &result);
        }

        Ok(())
    }
}

fn print_dry_run_result(output: &Output, result: &DryRunResult) -> Result<(), CliError> {
    output.data(&serde_json::to_string_pretty(&result.payload)?)?;
    output.highlight("\n[DRY RUN] No draft created.");
    output.info(&format!("Title: {}", result.payload.draft_title));
    output.info(&format!("Reference draft: {}", result.reference_id));
    output.info(&format!("Blocks: {}", result.payload.draft_body.len()));
    print_warnings(output, &result.warnings);
    Ok(())
}

pub(super) fn print_created(output: &Output, client: &SubstackClient, result: &CreatedDraft) {
    if result.recovered {
        output.success("\nDraft created (recovered after server error)!");
    } else {
        output.success("\nDraft created successfully!");
    }
    output.info(&format!("ID: {}", result.draft.id));
    output.info(&format!("Title: {}", result.draft.title_or_untitled()));
    if let Some(subtitle) = result.draft.draft_subtitle.as_deref().filter(|s| !s.is_empty()) {
        output.info(&format!("Subtitle: {subtitle}"));
    }
    output.info(&format!("Blocks: {}", result.block_count));
    output.info(&format!("Edit: {}", client.draft_edit_url(result.draft.id)));
    print_warnings(output, &result.warnings);
}
