//! Deterministic top-N ranking of scanned images per language.

use std::collections::BTreeSet;

use crate::recommendation::domain::{ImageRecord, RecommendedImage};

/// Ranks the images carrying `language` (case-insensitive) ascending by
/// (critical, high, total, size) and returns the first `n` as report
/// projections. The limit is honored literally, so `n <= 0` yields nothing.
/// Ties across all four keys keep the input order (the sort is stable).
pub fn top_n(images: &[ImageRecord], language: &str, n: i32) -> Vec<RecommendedImage> {
    if n <= 0 {
        return Vec::new();
    }

    let mut matching: Vec<&ImageRecord> = images
        .iter()
        .filter(|record| record.has_language(language))
        .collect();

    matching.sort_by_key(|record| {
        (
            record.vulnerabilities.critical,
            record.vulnerabilities.high,
            record.vulnerabilities.total,
            record.size_bytes,
        )
    });

    matching
        .into_iter()
        .take(n as usize)
        .map(|record| RecommendedImage::for_language(record, language))
        .collect()
}

/// All languages present across `images`, lowercased, deduplicated, and
/// sorted. Drives the per-language sections of the report.
pub fn distinct_languages(images: &[ImageRecord]) -> Vec<String> {
    let mut languages = BTreeSet::new();
    for record in images {
        for language in &record.composition.languages {
            languages.insert(language.language.to_lowercase());
        }
    }
    languages.into_iter().collect()
}
