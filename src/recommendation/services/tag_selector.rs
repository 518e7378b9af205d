use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Rules for rejecting registry tags before they are scheduled for a scan.
///
/// Deserialized from the repository configuration; an instance with every
/// field empty is replaced by [`TagFilter::default`] at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagFilter {
    /// Case-insensitive exact-match denylist.
    #[serde(default)]
    pub skip_exact: Vec<String>,
    /// Case-insensitive substring denylist.
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
    /// Regular expressions matched against the raw tag. Invalid patterns
    /// are logged and skipped, never fatal.
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    /// Reject tags containing no digit at all.
    #[serde(default)]
    pub require_digit: bool,
}

impl TagFilter {
    /// True when no rule is set, which signals "use the defaults".
    pub fn is_empty(&self) -> bool {
        self.skip_exact.is_empty()
            && self.exclude_keywords.is_empty()
            && self.exclude_patterns.is_empty()
            && !self.require_digit
    }
}

impl Default for TagFilter {
    fn default() -> Self {
        Self {
            skip_exact: ["latest", "dev", "nightly", "edge", "rc", "beta", "alpha"]
                .map(String::from)
                .to_vec(),
            exclude_keywords: ["debug", "test", "experimental", "arm", "amd", "azl"]
                .map(String::from)
                .to_vec(),
            exclude_patterns: vec![
                r"(?i)[-.]?(alpha|beta|rc|preview|dev|nightly|canary)[\d.]*$".to_string(),
            ],
            require_digit: true,
        }
    }
}

/// Filters raw registry tags and orders the survivors newest-first.
///
/// Rejection order per tag: exact denylist, then patterns, then keyword
/// substrings, then the digit requirement. The final sort is descending
/// lexicographic, a deliberate approximation of "newest first": it is not
/// version-aware, so "3.9" sorts after "3.10" when digit-group widths
/// differ.
pub fn select_tags(raw_tags: &[String], filter: &TagFilter) -> Vec<String> {
    let skip_exact: Vec<String> = filter
        .skip_exact
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let patterns: Vec<Regex> = filter
        .exclude_patterns
        .iter()
        .filter_map(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(pattern = %p, error = %e, "skipping invalid exclude pattern");
                None
            }
        })
        .collect();

    let mut selected: Vec<String> = raw_tags
        .iter()
        .filter(|tag| {
            let lower = tag.to_lowercase();

            if skip_exact.iter().any(|s| *s == lower) {
                return false;
            }

            if patterns.iter().any(|re| re.is_match(tag)) {
                return false;
            }

            if filter
                .exclude_keywords
                .iter()
                .any(|kw| lower.contains(&kw.to_lowercase()))
            {
                return false;
            }

            if filter.require_digit && !tag.chars().any(|c| c.is_ascii_digit()) {
                return false;
            }

            true
        })
        .cloned()
        .collect();

    selected.sort_by(|a, b| b.cmp(a));
    selected
}

/// Returns at most `max_tags` tags; a limit of zero or below returns all.
pub fn limit_tags(tags: Vec<String>, max_tags: i32) -> Vec<String> {
    if max_tags <= 0 || max_tags as usize >= tags.len() {
        return tags;
    }
    tags.into_iter().take(max_tags as usize).collect()
}
