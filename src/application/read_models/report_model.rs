//! Report read model for query operations
//!
//! Aggregates everything the report formatters need in one place, so each
//! formatter renders the same snapshot of the store.

use chrono::{DateTime, Utc};

use crate::recommendation::domain::RecommendedImage;

/// One configured repository group as shown in the scanned-sources section.
#[derive(Debug, Clone)]
pub struct ScannedGroupView {
    pub description: String,
    pub images: Vec<String>,
}

/// Ranked images for a single language, best candidate first.
#[derive(Debug, Clone)]
pub struct LanguageRankingView {
    pub language: String,
    pub images: Vec<RecommendedImage>,
}

/// Unified read model for report rendering.
///
/// Built once per report run from the record store and the repository
/// configuration. Formatters may assume languages appear in sorted order;
/// sections without images are skipped at render time.
#[derive(Debug, Clone)]
pub struct ReportModel {
    pub generated_at: DateTime<Utc>,
    pub top_n: i32,
    pub groups: Vec<ScannedGroupView>,
    pub languages: Vec<LanguageRankingView>,
}
