//! Options and helpers shared by commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use scribe_config::{CliSettings, Config};
use scribe_substack::{DraftMetadata, SubstackClient};

use crate::error::CliError;
use crate::output::Output;

/// Configuration options accepted by every command that talks to Substack.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover scribe.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Publication URL (overrides config).
    #[arg(long, env = "SCRIBE_PUBLICATION_URL")]
    publication_url: Option<String>,
}

impl ConfigArgs {
    /// Load config with the publication URL override applied on top of
    /// `settings`.
    pub(crate) fn load(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            publication_url: self.publication_url.clone(),
            ..settings
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }

    /// Load config and build a client for its publication.
    pub(crate) fn client(&self, output: &Output) -> Result<SubstackClient, CliError> {
        let config = self.load(CliSettings::default())?;
        create_client(&config, output)
    }
}

/// Build a client, explaining the expected config when the publication is
/// missing.
pub(crate) fn create_client(config: &Config, output: &Output) -> Result<SubstackClient, CliError> {
    if config.publication.is_none() {
        output.error("Error: publication configuration required in scribe.toml");
        output.info("\nAdd the following to your scribe.toml:");
        output.info("\n[publication]");
        output.info(r#"url = "https://example.substack.com""#);
        output.info("\n[session]");
        output.info(r#"sid = "${SUBSTACK_SID_COOKIE}""#);
        return Err(CliError::Validation(
            "publication configuration required".to_owned(),
        ));
    }
    let publication = config.require_publication()?;
    Ok(SubstackClient::new(&publication))
}

/// Read markup from a file, or from stdin when `path` is `-`.
pub(crate) fn read_markup(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut markup = String::new();
        std::io::stdin().read_to_string(&mut markup)?;
        return Ok(markup);
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Load draft metadata from a TOML file, or defaults when no file is given.
pub(crate) fn load_metadata(path: Option<&Path>) -> Result<DraftMetadata, CliError> {
    match path {
        Some(path) => Ok(toml::from_str(&std::fs::read_to_string(path)?)?),
        None => Ok(DraftMetadata::default()),
    }
}

/// Print compile warnings, if any.
pub(crate) fn print_warnings(output: &Output, warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    output.warning(&format!("\nSkipped blocks ({}):", warnings.len()));
    for warning in warnings {
        output.info(&format!("  - {warning}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scribe_config::Audience;

    #[test]
    fn test_read_markup_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.txt");
        std::fs::write(&path, "Title:: Hello | Text:: World").unwrap();
        assert_eq!(read_markup(&path).unwrap(), "Title:: Hello | Text:: World");
    }

    #[test]
    fn test_read_markup_missing_file() {
        let err = read_markup(Path::new("/nonexistent/post.txt")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_load_metadata_default() {
        assert_eq!(load_metadata(None).unwrap(), DraftMetadata::default());
    }

    #[test]
    fn test_load_metadata_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.toml");
        std::fs::write(
            &path,
            "audience = \"paid\"\ndescription = \"Summary\"\nsection_id = 12\n",
        )
        .unwrap();

        let metadata = load_metadata(Some(&path)).unwrap();
        assert_eq!(metadata.audience, Some(Audience::Paid));
        assert_eq!(metadata.description.as_deref(), Some("Summary"));
        assert_eq!(metadata.section_id, Some(12));
    }

    #[test]
    fn test_load_metadata_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.toml");
        std::fs::write(&path, "audience = \"nobody\"\n").unwrap();
        assert!(matches!(
            load_metadata(Some(&path)).unwrap_err(),
            CliError::Metadata(_)
        ));
    }
}
