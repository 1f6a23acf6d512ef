//! Command: print version information.
use std::io::Write;

use anyhow::Result;

/// Version string: `DOTEM_VERSION` from the build, or the crate version.
pub const VERSION: &str = match option_env!("DOTEM_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Print the dotem version.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "dotem {VERSION}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn run_prints_name_and_version() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("dotem {VERSION}\n"));
    }
}
