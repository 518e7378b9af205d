//! Version string normalization shared by classification and reconciliation.

use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)*)").unwrap_or_else(|e| panic!("invalid version pattern: {e}"))
});

/// Strips distro build suffixes from a package version, keeping only the
/// leading dot-separated run of digits.
///
/// `"3.12.9-8.azl3"` becomes `"3.12.9"`. Values with no leading digit run,
/// including the empty string and placeholders like `"UNKNOWN"`, pass
/// through unchanged.
pub fn clean_version(version: &str) -> String {
    match LEADING_NUMERIC.find(version) {
        Some(m) => m.as_str().to_string(),
        None => version.to_string(),
    }
}

/// Derives the major.minor prefix of a version string.
///
/// Returns the first two dot-separated components; a version with fewer
/// than two components is returned as-is.
pub fn extract_major_minor(version: &str) -> String {
    let mut parts = version.splitn(3, '.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{major}.{minor}"),
        _ => version.to_string(),
    }
}
