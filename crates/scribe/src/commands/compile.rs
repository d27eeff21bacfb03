//! `scribe compile` command implementation.

use std::path::PathBuf;

use clap::Args;
use scribe_markup::compile_with_warnings;

use super::common::{print_warnings, read_markup};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the compile command.
#[derive(Args)]
pub(crate) struct CompileArgs {
    /// Markup file, or `-` to read stdin.
    input: PathBuf,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,

    /// Fail when any block is skipped.
    #[arg(long)]
    strict: bool,
}

impl CompileArgs {
    /// Execute the compile command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, or in strict mode when
    /// blocks were skipped.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let markup = read_markup(&self.input)?;

        let result = compile_with_warnings(&markup);
        print_warnings(&output, &result.warnings);
        if self.strict && !result.warnings.is_empty() {
            return Err(CliError::Validation(format!(
                "{} block(s) skipped in strict mode",
                result.warnings.len()
            )));
        }

        let json = if self.compact {
            result.document.to_json()?
        } else {
            result.document.to_json_pretty()?
        };
        output.data(&json)?;
        output.success(&format!("Compiled {} blocks", result.document.len()));

        Ok(())
    }
}
