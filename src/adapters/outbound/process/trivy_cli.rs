use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::adapters::outbound::process::runner::CommandRunner;
use crate::ports::outbound::{VulnerabilityReport, VulnerabilitySource};
use crate::recommendation::domain::Vulnerability;
use crate::shared::error::ScanError;
use crate::shared::Result;

const TRIVY_TIMEOUT: Duration = Duration::from_secs(300);

/// Descriptions are stored verbatim otherwise; some CVE texts run to pages.
const MAX_DESCRIPTION_LEN: usize = 500;

/// TrivyCli adapter implementing [`VulnerabilitySource`] over the `trivy`
/// binary. `comprehensive` widens the scan to secrets and misconfigurations.
pub struct TrivyCli {
    runner: CommandRunner,
    comprehensive: bool,
}

impl TrivyCli {
    pub fn new(comprehensive: bool) -> Result<Self> {
        Ok(Self {
            runner: CommandRunner::new()?,
            comprehensive,
        })
    }
}

impl VulnerabilitySource for TrivyCli {
    fn scan_image(&self, image: &str) -> Result<VulnerabilityReport> {
        tracing::info!(
            "Running trivy on: {image} (comprehensive={})",
            self.comprehensive
        );

        let checks = security_checks(self.comprehensive);
        let args = ["image", "--format", "json", "--security-checks", checks, image];
        let output = self.runner.run("trivy", &args, TRIVY_TIMEOUT)?;

        // Trivy exits non-zero when findings exist; only an empty stdout
        // marks a genuine failure.
        if !output.succeeded() && output.stdout.is_empty() {
            return Err(ScanError::CommandFailed {
                tool: "trivy".to_string(),
                command: format!("trivy image {image}"),
                details: format!("exit code {}\n{}", output.exit_code, output.stderr),
            }
            .into());
        }

        parse_trivy_output(image, &output.stdout)
    }
}

fn security_checks(comprehensive: bool) -> &'static str {
    if comprehensive {
        "vuln,secret,config"
    } else {
        "vuln"
    }
}

#[derive(Debug, Deserialize)]
struct TrivyDocument {
    #[serde(rename = "Results", default)]
    results: Vec<TrivyTarget>,
}

#[derive(Debug, Deserialize)]
struct TrivyTarget {
    #[serde(rename = "Vulnerabilities", default)]
    vulnerabilities: Vec<TrivyVulnerability>,
    #[serde(rename = "Secrets", default)]
    secrets: Vec<serde_json::Value>,
    #[serde(rename = "Misconfigurations", default)]
    misconfigurations: Vec<serde_json::Value>,
    #[serde(rename = "Licenses", default)]
    licenses: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TrivyVulnerability {
    #[serde(rename = "VulnerabilityID", default)]
    id: String,
    #[serde(rename = "Severity", default)]
    severity: String,
    #[serde(rename = "PkgName", default)]
    package_name: String,
    #[serde(rename = "InstalledVersion", default)]
    installed_version: String,
    #[serde(rename = "FixedVersion", default)]
    fixed_version: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "CVSS", default)]
    cvss: HashMap<String, CvssEntry>,
}

#[derive(Debug, Deserialize)]
struct CvssEntry {
    #[serde(rename = "V3Score", default)]
    v3_score: f64,
}

fn parse_trivy_output(image: &str, stdout: &str) -> Result<VulnerabilityReport> {
    let document: TrivyDocument =
        serde_json::from_str(stdout).map_err(|e| ScanError::MalformedToolOutput {
            tool: "trivy".to_string(),
            image: image.to_string(),
            details: e.to_string(),
        })?;

    let mut report = VulnerabilityReport::default();

    for target in document.results {
        for vulnerability in target.vulnerabilities {
            report.counts.record(&vulnerability.severity);

            // Several vendors may score the same CVE; keep the highest.
            let score = vulnerability
                .cvss
                .values()
                .map(|entry| entry.v3_score)
                .fold(0.0_f64, f64::max);

            report.findings.push(Vulnerability {
                id: vulnerability.id,
                severity: vulnerability.severity,
                package_name: vulnerability.package_name,
                installed_version: vulnerability.installed_version,
                fixed_version: vulnerability.fixed_version,
                description: truncate_description(&vulnerability.description),
                score,
            });
        }

        report.secrets_found += target.secrets.len() as u32;
        report.config_issues += target.misconfigurations.len() as u32;
        report.license_issues += target.licenses.len() as u32;
    }

    Ok(report)
}

fn truncate_description(description: &str) -> String {
    if description.len() <= MAX_DESCRIPTION_LEN {
        return description.to_string();
    }

    let mut cut = MAX_DESCRIPTION_LEN - 3;
    while !description.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &description[..cut])
}
