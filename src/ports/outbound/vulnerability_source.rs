use crate::recommendation::domain::{Vulnerability, VulnerabilityCounts};
use crate::shared::Result;

/// Aggregated scanner output for one image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VulnerabilityReport {
    pub counts: VulnerabilityCounts,
    pub findings: Vec<Vulnerability>,
    pub secrets_found: u32,
    pub config_issues: u32,
    pub license_issues: u32,
}

/// VulnerabilitySource port for vulnerability scanning
///
/// This port abstracts the external vulnerability scanner. Whether the scan
/// also covers secrets and misconfigurations is an implementation option of
/// the adapter, not a per-call choice.
pub trait VulnerabilitySource {
    /// Scans `image` and returns tallied findings.
    ///
    /// # Errors
    /// Returns an error if the scanner cannot be run or emits output that
    /// cannot be decoded.
    fn scan_image(&self, image: &str) -> Result<VulnerabilityReport>;
}
