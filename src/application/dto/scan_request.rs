use crate::config::RepositoryConfig;

/// ScanRequest - Internal request DTO for the image scan use case
///
/// Carries the loaded repository configuration together with the scan
/// options already resolved at the CLI boundary.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Repository groups, tag filter, and registry defaults to scan
    pub config: RepositoryConfig,
    /// Per-repository tag limit before config resolution (0 = use config
    /// default, or no limit if the config sets none)
    pub max_tags: i32,
    /// Remove pulled images after analysis
    pub cleanup: bool,
    /// Rescan images already present in the store
    pub update_existing: bool,
}

impl ScanRequest {
    pub fn new(
        config: RepositoryConfig,
        max_tags: i32,
        cleanup: bool,
        update_existing: bool,
    ) -> Self {
        Self {
            config,
            max_tags,
            cleanup,
            update_existing,
        }
    }
}
