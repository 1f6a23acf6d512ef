//! Formatting variables as `export`/`unset` command lines.
use super::EnvironmentVariable;

/// Separator between commands on the emitted line.
pub const SEPARATOR: &str = ";";

/// `export KEY=VALUE` for every variable, joined by `;`.
#[must_use]
pub fn exports(vars: &[EnvironmentVariable]) -> String {
    vars.iter()
        .map(|v| format!("export {}={}", v.key(), v.value()))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// `unset KEY` for every variable, joined by `;`.
#[must_use]
pub fn unsets(vars: &[EnvironmentVariable]) -> String {
    vars.iter()
        .map(|v| format!("unset {}", v.key()))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
