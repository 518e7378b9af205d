use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::composition::Composition;

/// Per-severity vulnerability tallies for one image.
///
/// `total` counts every finding, including severities outside the five
/// named buckets (tallied under `unknown`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityCounts {
    pub total: u32,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub negligible: u32,
    pub unknown: u32,
}

impl VulnerabilityCounts {
    /// Tallies one finding by its severity label, ignoring case; anything
    /// outside the five named buckets counts as unknown.
    pub fn record(&mut self, severity: &str) {
        self.total += 1;
        match severity.to_ascii_uppercase().as_str() {
            "CRITICAL" => self.critical += 1,
            "HIGH" => self.high += 1,
            "MEDIUM" => self.medium += 1,
            "LOW" => self.low += 1,
            "NEGLIGIBLE" => self.negligible += 1,
            _ => self.unknown += 1,
        }
    }
}

/// One vulnerability finding as consumed from the scanner output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    pub severity: String,
    pub package_name: String,
    pub installed_version: String,
    pub fixed_version: String,
    pub description: String,
    pub score: f64,
}

/// The persisted record for one scanned image: identity, inspect metadata,
/// classified composition, and vulnerability results.
///
/// `name` is the full tag-qualified reference the image was scanned under
/// (e.g. `mcr.microsoft.com/azurelinux/base/python:3.12`) and is the natural
/// key at the persistence boundary, where upserts replace the whole record.
/// Two tags of the same repository are two records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub name: String,
    pub registry: String,
    pub repository: String,
    pub tag: String,
    pub digest: String,
    pub size_bytes: i64,
    pub layers: u32,
    /// Creation timestamp as reported by the container runtime, verbatim.
    pub created: String,
    pub scanned_at: DateTime<Utc>,
    #[serde(flatten)]
    pub composition: Composition,
    pub vulnerabilities: VulnerabilityCounts,
    #[serde(default)]
    pub findings: Vec<Vulnerability>,
    #[serde(default)]
    pub secrets_found: u32,
    #[serde(default)]
    pub config_issues: u32,
    #[serde(default)]
    pub license_issues: u32,
}

impl ImageRecord {
    /// True when this record holds a language record for `language`,
    /// compared case-insensitively.
    pub fn has_language(&self, language: &str) -> bool {
        self.composition
            .languages
            .iter()
            .any(|l| l.language.eq_ignore_ascii_case(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tallies_named_severities() {
        let mut counts = VulnerabilityCounts::default();
        for severity in ["CRITICAL", "HIGH", "HIGH", "MEDIUM", "LOW", "NEGLIGIBLE"] {
            counts.record(severity);
        }
        assert_eq!(counts.total, 6);
        assert_eq!(counts.critical, 1);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.medium, 1);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.negligible, 1);
        assert_eq!(counts.unknown, 0);
    }

    #[test]
    fn test_record_tallies_unrecognized_as_unknown() {
        let mut counts = VulnerabilityCounts::default();
        counts.record("INFORMATIONAL");
        counts.record("");
        assert_eq!(counts.total, 2);
        assert_eq!(counts.unknown, 2);
    }

    #[test]
    fn test_record_ignores_severity_case() {
        let mut counts = VulnerabilityCounts::default();
        counts.record("critical");
        counts.record("High");
        assert_eq!(counts.critical, 1);
        assert_eq!(counts.high, 1);
    }

    #[test]
    fn test_has_language_is_case_insensitive() {
        use crate::recommendation::domain::LanguageRecord;

        let mut record = sample_record();
        record
            .composition
            .languages
            .push(LanguageRecord::detected("Python", "3.12.1", "python3", "rpm"));

        assert!(record.has_language("python"));
        assert!(record.has_language("PYTHON"));
        assert!(!record.has_language("node"));
    }

    fn sample_record() -> ImageRecord {
        ImageRecord {
            name: "mcr.microsoft.com/azurelinux/base/python:3.12".to_string(),
            registry: "mcr.microsoft.com".to_string(),
            repository: "azurelinux/base/python".to_string(),
            tag: "3.12".to_string(),
            digest: "sha256:abc".to_string(),
            size_bytes: 1024,
            layers: 3,
            created: "2026-01-01T00:00:00Z".to_string(),
            scanned_at: Utc::now(),
            composition: Composition::default(),
            vulnerabilities: VulnerabilityCounts::default(),
            findings: vec![],
            secrets_found: 0,
            config_issues: 0,
            license_issues: 0,
        }
    }
}
