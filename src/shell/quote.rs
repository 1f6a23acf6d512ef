//! Converting configuration values into shell words.
use crate::config::Scalar;

/// Render a scalar as a shell-safe word.
///
/// Booleans are spelled `true`/`false`, other values use their canonical
/// text, and the result goes through [`quote`].
#[must_use]
pub fn serialize(value: &Scalar) -> String {
    quote(&canonical(value))
}

/// Canonical text of a scalar before quoting.
#[must_use]
pub fn canonical(value: &Scalar) -> String {
    match value {
        Scalar::Bool(b) => b.to_string(),
        Scalar::Integer(i) => i.to_string(),
        Scalar::Float(f) => format_float(*f),
        Scalar::String(s) | Scalar::Datetime(s) => s.clone(),
    }
}

/// Minimal POSIX quoting.
///
/// Strings made only of `[A-Za-z0-9_@%+=:,./-]` are returned unchanged.
/// Anything else (including the empty string) is wrapped in single quotes,
/// with each embedded `'` written as `'"'"'`.
#[must_use]
pub fn quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if s.chars().all(is_safe) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r#"'"'"'"#))
}

const fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.5e16` or `9.5e-1`.
    let scientific = format!("{f:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{f:?}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{f:?}");
    };
    let (sign, mantissa) = mantissa
        .strip_prefix('-')
        .map_or(("", mantissa), |m| ("-", m));

    if !(-4..16).contains(&exponent) {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exponent.unsigned_abs());
    }

    let digits = mantissa.replace('.', "");
    let fixed = match usize::try_from(exponent) {
        Ok(exponent) => {
            let int_len = exponent + 1;
            if digits.len() > int_len {
                let (int_part, frac_part) = digits.split_at(int_len);
                format!("{int_part}.{frac_part}")
            } else {
                format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
            }
        }
        Err(_) => {
            let zeros = usize::try_from(-exponent - 1).unwrap_or_default();
            format!("0.{}{digits}", "0".repeat(zeros))
        }
    };
    format!("{sign}{fixed}")
}
