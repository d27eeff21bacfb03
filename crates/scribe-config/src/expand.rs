//! `${VAR}` expansion for credential and URL fields.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// A reference to an unset variable without a default is an error naming
/// `field`. Bare `$VAR` is left alone so URLs and cookie values containing `$`
/// pass through unchanged.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| match std::env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(UnsetVar(var.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Expand an optional field in place. An expansion to the empty string
/// clears the field, so `${VAR:-}` marks a value as optional.
pub(crate) fn expand_optional(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        let expanded = expand_env(raw, field)?;
        *value = (!expanded.is_empty()).then_some(expanded);
    }
    Ok(())
}

struct UnsetVar(String);
