use chrono::SecondsFormat;
use serde::Serialize;

use crate::application::read_models::ReportModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

use super::display::human_size;

/// Top-level structure of the JSON report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport {
    generated_at: String,
    top_n: i32,
    languages: Vec<JsonLanguageSection>,
}

/// Recommended images for a single language.
#[derive(Serialize)]
struct JsonLanguageSection {
    language: String,
    images: Vec<JsonImageEntry>,
}

/// A single recommended image entry.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonImageEntry {
    rank: usize,
    name: String,
    version: String,
    critical_vulnerabilities: u32,
    high_vulnerabilities: u32,
    total_vulnerabilities: u32,
    size_bytes: i64,
    size_human: String,
    digest: String,
}

/// JsonFormatter adapter for the machine-readable recommendations report
///
/// This adapter implements the ReportFormatter port for JSON. Unlike the
/// markdown rendering, languages are lowercased and digests kept in full so
/// downstream automation can pin images without re-resolving them.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ReportModel) -> Result<String> {
        let languages = report
            .languages
            .iter()
            .filter(|section| !section.images.is_empty())
            .map(|section| JsonLanguageSection {
                language: section.language.to_lowercase(),
                images: section
                    .images
                    .iter()
                    .enumerate()
                    .map(|(idx, image)| JsonImageEntry {
                        rank: idx + 1,
                        name: image.name.clone(),
                        version: image.version.clone(),
                        critical_vulnerabilities: image.critical_count,
                        high_vulnerabilities: image.high_count,
                        total_vulnerabilities: image.total_count,
                        size_bytes: image.size_bytes,
                        size_human: human_size(image.size_bytes),
                        digest: image.digest.clone(),
                    })
                    .collect(),
            })
            .collect();

        let document = JsonReport {
            generated_at: report
                .generated_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            top_n: report.top_n,
            languages,
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}
