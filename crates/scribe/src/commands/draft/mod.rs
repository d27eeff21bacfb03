//! Draft subcommand group.

mod create;
mod list;
mod publish;
mod save;
mod showcase;

use clap::Subcommand;

use create::CreateArgs;
use list::ListArgs;
use publish::PublishArgs;
use save::SaveArgs;
use showcase::ShowcaseArgs;

use crate::error::CliError;

/// Draft commands.
#[derive(Subcommand)]
pub(crate) enum DraftCommand {
    /// Create a draft from a markup file.
    Create(CreateArgs),
    /// Save title, subtitle or body of an existing draft.
    Save(SaveArgs),
    /// Publish a draft.
    Publish(PublishArgs),
    /// List drafts.
    List(ListArgs),
    /// Create a draft containing every supported block type.
    Showcase(ShowcaseArgs),
}

impl DraftCommand {
    /// Execute the draft subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::Create(args) => args.execute(),
            Self::Save(args) => args.execute(),
            Self::Publish(args) => args.execute(),
            Self::List(args) => args.execute(),
            Self::Showcase(args) => args.execute(),
        }
    }
}
