//! `scribe draft showcase` command implementation.

use clap::Args;
use scribe_markup::{Node, showcase};
use scribe_substack::{DraftMetadata, DraftPublisher, PublisherConfig};

use super::create::print_created;
use crate::commands::common::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the draft showcase command.
#[derive(Args)]
pub(crate) struct ShowcaseArgs {
    /// Draft title.
    #[arg(short, long, default_value = "Formatting showcase")]
    title: String,

    /// User ID the direct-message button addresses.
    #[arg(long, requires = "user_name")]
    user_id: Option<u64>,

    /// User name shown on the direct-message button.
    #[arg(long, requires = "user_id")]
    user_name: Option<String>,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ShowcaseArgs {
    /// Execute the showcase command.
    ///
    /// Without `--user-id` the direct-message button is left out.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft cannot be created.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = self.config.client(&output)?;

        let document = match (self.user_id, self.user_name.as_deref()) {
            (Some(user_id), Some(user_name)) => showcase(user_id, user_name),
            _ => {
                let mut document = showcase(0, "");
                document
                    .content
                    .retain(|node| !matches!(node, Node::DirectMessage { .. }));
                document
            }
        };

        let publisher = DraftPublisher::new(&client, PublisherConfig::default());
        let result = publisher.create(
            &self.title,
            Some("Every block type scribe can produce"),
            document,
            &DraftMetadata::default(),
        )?;
        print_created(&output, &client, &result);

        Ok(())
    }
}
