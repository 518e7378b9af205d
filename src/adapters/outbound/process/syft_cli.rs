use std::time::Duration;

use serde::Deserialize;

use crate::adapters::outbound::process::runner::CommandRunner;
use crate::ports::outbound::ArtifactSource;
use crate::recommendation::domain::Artifact;
use crate::shared::error::ScanError;
use crate::shared::Result;

const SYFT_TIMEOUT: Duration = Duration::from_secs(300);

/// SyftCli adapter implementing [`ArtifactSource`] over the `syft` binary.
pub struct SyftCli {
    runner: CommandRunner,
}

impl SyftCli {
    pub fn new() -> Result<Self> {
        Ok(Self {
            runner: CommandRunner::new()?,
        })
    }
}

impl ArtifactSource for SyftCli {
    fn collect_artifacts(&self, image: &str) -> Result<Vec<Artifact>> {
        tracing::info!("Running syft on: {image}");

        let output = self
            .runner
            .run_checked("syft", &[image, "-o", "json"], SYFT_TIMEOUT)?;

        parse_syft_output(image, &output.stdout)
    }
}

#[derive(Debug, Deserialize)]
struct SyftDocument {
    #[serde(default)]
    artifacts: Vec<SyftArtifact>,
}

#[derive(Debug, Deserialize)]
struct SyftArtifact {
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    language: String,
}

fn parse_syft_output(image: &str, stdout: &str) -> Result<Vec<Artifact>> {
    let document: SyftDocument =
        serde_json::from_str(stdout).map_err(|e| ScanError::MalformedToolOutput {
            tool: "syft".to_string(),
            image: image.to_string(),
            details: e.to_string(),
        })?;

    Ok(document
        .artifacts
        .into_iter()
        .map(|artifact| {
            Artifact::new(
                artifact.name,
                artifact.version,
                artifact.kind,
                artifact.language,
            )
        })
        .collect())
}
