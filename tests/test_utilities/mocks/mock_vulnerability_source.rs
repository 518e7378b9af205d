use basepick::prelude::*;

/// Mock VulnerabilitySource serving a canned scan report
pub struct MockVulnerabilitySource {
    pub report: VulnerabilityReport,
    pub should_fail: bool,
}

impl MockVulnerabilitySource {
    pub fn new(report: VulnerabilityReport) -> Self {
        Self {
            report,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            report: VulnerabilityReport::default(),
            should_fail: true,
        }
    }
}

impl VulnerabilitySource for MockVulnerabilitySource {
    fn scan_image(&self, _image: &str) -> Result<VulnerabilityReport> {
        if self.should_fail {
            anyhow::bail!("Mock vulnerability scan failure");
        }
        Ok(self.report.clone())
    }
}
