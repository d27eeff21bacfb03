//! Configuration management for scribe.
//!
//! Parses `scribe.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Publication and session values support environment variable expansion, so
//! cookies can stay out of the file:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! A session cookie that expands to the empty string is treated as unset.
//!
//! ```toml
//! [publication]
//! url = "https://example.substack.com"
//!
//! [session]
//! sid = "${SID}"
//! lli = "${SUBSTACK_LLI:-}"
//! substack_sid = "${SUBSTACK_SID:-}"
//! ```

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User agent sent when the config does not override it. The platform
/// rejects requests that do not look like they come from a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/140.0.0.0 Safari/537.36";

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "scribe.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override publication URL.
    pub publication_url: Option<String>,
    /// Override default publish audience.
    pub audience: Option<Audience>,
    /// Override subscriber email notification on publish.
    pub send_email: Option<bool>,
    /// Override HTTP timeout.
    pub timeout_secs: Option<u64>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Publication to write to (optional section, required for publishing).
    pub publication: Option<PublicationSection>,
    /// Session cookies.
    pub session: SessionConfig,
    /// Publish defaults.
    pub publish: PublishConfig,
    /// HTTP client settings.
    pub http: HttpConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[publication]` section as written in the file.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicationSection {
    /// Publication base URL, e.g. `https://example.substack.com`.
    pub url: String,
}

/// Session cookies copied from a logged-in browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// `sid` cookie.
    pub sid: Option<String>,
    /// `substack.lli` cookie.
    pub lli: Option<String>,
    /// `substack.sid` cookie.
    pub substack_sid: Option<String>,
}

impl SessionConfig {
    /// Cookies that are set, as `(cookie name, value)` pairs.
    #[must_use]
    pub fn cookies(&self) -> Vec<(&'static str, &str)> {
        [
            ("sid", self.sid.as_deref()),
            ("substack.lli", self.lli.as_deref()),
            ("substack.sid", self.substack_sid.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
        .collect()
    }

    /// Value of a `Cookie` request header, or `None` when no cookie is set.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        let cookies = self.cookies();
        if cookies.is_empty() {
            return None;
        }
        Some(
            cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// Who can read a published post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Free and paid subscribers.
    #[default]
    Everyone,
    /// Paid subscribers only.
    Paid,
}

impl Audience {
    /// Value the API expects.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Everyone => "everyone",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "everyone" => Ok(Self::Everyone),
            "paid" => Ok(Self::Paid),
            other => Err(format!("unknown audience `{other}` (expected everyone or paid)")),
        }
    }
}

/// Publish defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Audience of published posts.
    pub audience: Audience,
    /// Whether publishing emails subscribers.
    pub send_email: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            audience: Audience::Everyone,
            send_email: true,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Global request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Everything needed to talk to one publication.
///
/// Built by [`Config::require_publication`]; publishing clients take it by
/// reference so several publications can be used side by side.
#[derive(Debug, Clone)]
pub struct PublicationConfig {
    /// Publication base URL without trailing slash.
    pub url: String,
    /// Session cookies.
    pub session: SessionConfig,
    /// HTTP client settings.
    pub http: HttpConfig,
}

impl PublicationConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the URL is invalid, no session
    /// cookie is set or the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.url, "publication.url")?;
        require_http_url(&self.url, "publication.url")?;
        if self.session.cookies().is_empty() {
            return Err(ConfigError::Validation(
                "[session] needs at least one of sid, lli, substack_sid".to_owned(),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "http.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`session.sid`").
        field: String,
        /// Error message (e.g., "${`SID`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `scribe.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(url) = &settings.publication_url {
            self.publication = Some(PublicationSection { url: url.clone() });
        }
        if let Some(audience) = settings.audience {
            self.publish.audience = audience;
        }
        if let Some(send_email) = settings.send_email {
            self.publish.send_email = send_email;
        }
        if let Some(timeout_secs) = settings.timeout_secs {
            self.http.timeout_secs = timeout_secs;
        }
    }

    /// Get validated publication configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the `[publication]` section is
    /// missing or the publication settings are invalid.
    pub fn require_publication(&self) -> Result<PublicationConfig, ConfigError> {
        let section = self.publication.as_ref().ok_or_else(|| {
            ConfigError::Validation(
                "[publication] section with url required in config".to_owned(),
            )
        })?;
        let publication = PublicationConfig {
            url: section.url.trim_end_matches('/').to_owned(),
            session: self.session.clone(),
            http: self.http.clone(),
        };
        publication.validate()?;
        Ok(publication)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate values that are checked regardless of the command.
    ///
    /// Publication credentials are only checked by
    /// [`require_publication`](Self::require_publication), so commands that
    /// never touch the network work without them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(publication) = &self.publication {
            require_non_empty(&publication.url, "publication.url")?;
            require_http_url(&publication.url, "publication.url")?;
        }
        require_non_empty(&self.http.user_agent, "http.user_agent")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(publication) = &mut self.publication {
            publication.url = expand::expand_env(&publication.url, "publication.url")?;
        }
        expand::expand_optional(&mut self.session.sid, "session.sid")?;
        expand::expand_optional(&mut self.session.lli, "session.lli")?;
        expand::expand_optional(&mut self.session.substack_sid, "session.substack_sid")?;
        Ok(())
    }
}
