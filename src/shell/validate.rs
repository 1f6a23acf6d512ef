//! Shell identifier checks for variable names.
use crate::error::ShellError;

/// Whether `key` is a POSIX shell identifier: `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_valid_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check every key in order and fail on the first invalid one.
///
/// # Errors
///
/// Returns [`ShellError::InvalidIdentifier`] naming the first offending key.
pub fn validate_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Result<(), ShellError> {
    match keys.into_iter().find(|key| !is_valid_identifier(key)) {
        Some(key) => Err(ShellError::InvalidIdentifier {
            key: key.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_identifiers() {
        for key in ["hate_dandruff", "PATH", "_private", "a", "X1", "__"] {
            assert!(is_valid_identifier(key), "{key} should be valid");
        }
    }

    #[test]
    fn rejects_hyphens() {
        assert!(!is_valid_identifier("hate-dandruff"));
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(!is_valid_identifier("1abc"));
    }

    #[test]
    fn rejects_empty_key() {
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn rejects_spaces_dots_and_non_ascii() {
        for key in ["a b", "a.b", "é", "A=B", "$A"] {
            assert!(!is_valid_identifier(key), "{key:?} should be invalid");
        }
    }

    #[test]
    fn validate_keys_reports_first_invalid_key() {
        let err = validate_keys(["OK", "first-bad", "second-bad"]).unwrap_err();
        assert!(
            matches!(err, ShellError::InvalidIdentifier { ref key } if key == "first-bad"),
            "got {err:?}"
        );
    }

    #[test]
    fn validate_keys_accepts_empty_input() {
        assert!(validate_keys(std::iter::empty()).is_ok());
    }
}
