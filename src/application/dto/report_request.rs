use std::path::PathBuf;

use crate::config::RepositoryConfig;

/// ReportRequest - Internal request DTO for report generation
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Markdown output path; the JSON sibling path derives from it
    pub output_path: PathBuf,
    /// Ranked images per language
    pub top_n: i32,
    /// Repository configuration for the scanned-sources section
    pub config: RepositoryConfig,
}

impl ReportRequest {
    pub fn new(output_path: PathBuf, top_n: i32, config: RepositoryConfig) -> Self {
        Self {
            output_path,
            top_n,
            config,
        }
    }
}
