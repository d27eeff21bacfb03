//! Published post subcommand group.

mod list;
mod unpublish;

use clap::Subcommand;

use list::ListArgs;
use unpublish::UnpublishArgs;

use crate::error::CliError;

/// Published post commands.
#[derive(Subcommand)]
pub(crate) enum PostCommand {
    /// List published posts.
    List(ListArgs),
    /// Turn a published post back into a draft.
    Unpublish(UnpublishArgs),
}

impl PostCommand {
    /// Execute the post subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::List(args) => args.execute(),
            Self::Unpublish(args) => args.execute(),
        }
    }
}
