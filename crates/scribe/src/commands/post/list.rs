//! `scribe post list` command implementation.

use clap::Args;

use crate::commands::common::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the post list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Maximum number of posts to show.
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ListArgs {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the posts cannot be listed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let client = self.config.client(&output)?;

        let posts = client.list_posts()?;
        if posts.is_empty() {
            output.warning("No published posts found");
            return Ok(());
        }

        output.highlight(&format!(
            "Published posts (showing {} of {}):",
            posts.len().min(self.limit),
            posts.len()
        ));
        for post in posts.iter().take(self.limit) {
            output.separator();
            output.info(&format!("ID: {}", post.id));
            output.info(&format!(
                "Title: {}",
                post.title.as_deref().unwrap_or("Untitled")
            ));
            if let Some(date) = &post.post_date {
                output.info(&format!("Published: {date}"));
            }
            if let Some(audience) = &post.audience {
                output.info(&format!("Audience: {audience}"));
            }
            if let Some(slug) = &post.slug {
                output.info(&format!("URL: {}", client.post_url(slug)));
            }
        }

        Ok(())
    }
}
