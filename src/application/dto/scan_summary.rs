/// ScanSummary - Outcome tally of one scan run
///
/// Per-image failures never abort the run; they are tallied here so the
/// caller can decide on an exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Images analyzed and stored
    pub scanned: usize,
    /// Images skipped because the store already had them
    pub skipped: usize,
    /// Images that failed to analyze or store
    pub failed: usize,
}

impl ScanSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn total(&self) -> usize {
        self.scanned + self.skipped + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_tallies() {
        let summary = ScanSummary {
            scanned: 4,
            skipped: 2,
            failed: 1,
        };
        assert!(summary.has_failures());
        assert_eq!(summary.total(), 7);
    }

    #[test]
    fn test_default_summary_has_no_failures() {
        assert!(!ScanSummary::default().has_failures());
    }
}
