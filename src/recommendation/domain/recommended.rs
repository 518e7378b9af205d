use serde::{Deserialize, Serialize};

use super::image::ImageRecord;

/// A ranked image as it appears in a recommendations report.
///
/// Read-only projection of an [`ImageRecord`]; built by the ranking engine
/// and never persisted on its own. `version` is the resolved runtime version
/// of the language the ranking was requested for, not the image tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedImage {
    pub name: String,
    pub version: String,
    pub critical_count: u32,
    pub high_count: u32,
    pub total_count: u32,
    pub size_bytes: i64,
    pub digest: String,
}

impl RecommendedImage {
    /// Projects `record` for a report about `language`. The version column
    /// comes from the matching language record and is empty when the record
    /// carries no such language (callers filter on `has_language` first).
    pub fn for_language(record: &ImageRecord, language: &str) -> Self {
        let version = record
            .composition
            .languages
            .iter()
            .find(|l| l.language.eq_ignore_ascii_case(language))
            .map(|l| l.version.clone())
            .unwrap_or_default();

        Self {
            name: record.name.clone(),
            version,
            critical_count: record.vulnerabilities.critical,
            high_count: record.vulnerabilities.high,
            total_count: record.vulnerabilities.total,
            size_bytes: record.size_bytes,
            digest: record.digest.clone(),
        }
    }
}
