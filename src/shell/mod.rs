//! Turning resolved configuration values into shell commands.
//!
//! - **[`validate`]**: variable names must be POSIX identifiers
//! - **[`quote`]**: values become shell-safe words
//! - **[`emit`]**: `export`/`unset` lines for the shell hook to `eval`

pub mod emit;
pub mod quote;
pub mod validate;

use crate::config::Scalar;
use crate::error::ShellError;

/// A variable ready to be exported; the value is already shell-quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentVariable {
    key: String,
    value: String,
}

impl EnvironmentVariable {
    /// Build a variable from a key and an already-serialized value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Variable name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Shell-quoted value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Validate every key, then serialize every value, preserving order.
///
/// Nothing is serialized unless all keys are valid.
///
/// # Errors
///
/// Returns [`ShellError::InvalidIdentifier`] for the first invalid key.
pub fn render(resolved: &[(&str, &Scalar)]) -> Result<Vec<EnvironmentVariable>, ShellError> {
    validate::validate_keys(resolved.iter().map(|(key, _)| *key))?;
    Ok(resolved
        .iter()
        .map(|(key, value)| EnvironmentVariable::new(*key, quote::serialize(value)))
        .collect())
}
