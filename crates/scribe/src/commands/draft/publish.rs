//! `scribe draft publish` command implementation.

use clap::Args;
use scribe_config::{Audience, CliSettings};
use scribe_substack::{DraftPublisher, PublishOptions, PublisherConfig};

use crate::commands::common::{ConfigArgs, create_client};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the draft publish command.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Draft ID.
    draft_id: u64,

    /// Who can read the post: everyone or paid (overrides config).
    #[arg(short, long)]
    audience: Option<Audience>,

    /// Do not email subscribers.
    #[arg(long)]
    no_email: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// # Errors
    ///
    /// Returns an error if publishing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(CliSettings {
            audience: self.audience,
            send_email: self.no_email.then_some(false),
            ..Default::default()
        })?;
        let client = create_client(&config, &output)?;

        let options = PublishOptions {
            send_email: config.publish.send_email,
            audience: config.publish.audience,
        };
        output.info(&format!(
            "Publishing draft {} (audience: {}, email: {})...",
            self.draft_id,
            options.audience,
            if options.send_email { "yes" } else { "no" }
        ));

        let publisher = DraftPublisher::new(&client, PublisherConfig::default());
        let post = publisher.publish(self.draft_id, &options)?;

        output.success(&format!("\nDraft {} published!", self.draft_id));
        if let Some(id) = post.id {
            output.info(&format!("Post ID: {id}"));
        }
        if let Some(url) = &post.url {
            output.info(&format!("URL: {url}"));
        }

        Ok(())
    }
}
