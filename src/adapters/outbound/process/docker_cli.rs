use std::time::Duration;

use serde::Deserialize;

use crate::adapters::outbound::process::runner::CommandRunner;
use crate::ports::outbound::{ImageRuntime, InspectMetadata};
use crate::shared::error::ScanError;
use crate::shared::Result;

/// Pulls can download multi-hundred-MB images over slow links.
const PULL_TIMEOUT: Duration = Duration::from_secs(600);
const INSPECT_TIMEOUT: Duration = Duration::from_secs(30);
const EXEC_TIMEOUT: Duration = Duration::from_secs(60);
const REMOVE_TIMEOUT: Duration = Duration::from_secs(60);

/// DockerCli adapter implementing [`ImageRuntime`] over the `docker` binary.
pub struct DockerCli {
    runner: CommandRunner,
}

impl DockerCli {
    pub fn new() -> Result<Self> {
        Ok(Self {
            runner: CommandRunner::new()?,
        })
    }
}

impl ImageRuntime for DockerCli {
    fn pull(&self, image: &str) -> Result<()> {
        tracing::info!("Pulling image: {image}");
        self.runner
            .run_checked("docker", &["pull", image], PULL_TIMEOUT)?;
        Ok(())
    }

    fn inspect(&self, image: &str) -> Result<InspectMetadata> {
        let output = self
            .runner
            .run_checked("docker", &["inspect", image], INSPECT_TIMEOUT)?;
        parse_inspect_output(image, &output.stdout)
    }

    fn image_size(&self, image: &str) -> Result<i64> {
        let output = self.runner.run_checked(
            "docker",
            &["images", image, "--format", "{{.Size}}"],
            INSPECT_TIMEOUT,
        )?;

        let size = output.stdout.trim();
        if size.is_empty() {
            return Ok(0);
        }
        Ok(parse_docker_size(size))
    }

    fn exec_in_image(&self, image: &str, command: &[&str]) -> Result<String> {
        // Empty entrypoint so the probe command is exec'd directly even in
        // images that default to an application process.
        let mut args = vec!["run", "--rm", "--entrypoint", "", image];
        args.extend_from_slice(command);

        let output = self.runner.run_checked("docker", &args, EXEC_TIMEOUT)?;
        Ok(output.combined().trim().to_string())
    }

    fn remove(&self, image: &str) -> Result<()> {
        tracing::debug!("Removing image: {image}");
        match self
            .runner
            .run("docker", &["rmi", "--force", image], REMOVE_TIMEOUT)
        {
            Ok(output) if output.succeeded() => Ok(()),
            Ok(output) => {
                tracing::warn!("Failed to remove image {image}: {}", output.combined().trim());
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to remove image {image}: {e}");
                Ok(())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct InspectEntry {
    #[serde(rename = "Size", default)]
    size: i64,
    #[serde(rename = "Created", default)]
    created: String,
    #[serde(rename = "RootFS", default)]
    root_fs: RootFs,
    #[serde(rename = "RepoDigests", default)]
    repo_digests: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RootFs {
    #[serde(rename = "Layers", default)]
    layers: Vec<String>,
}

fn parse_inspect_output(image: &str, stdout: &str) -> Result<InspectMetadata> {
    let entries: Vec<InspectEntry> =
        serde_json::from_str(stdout).map_err(|e| ScanError::MalformedToolOutput {
            tool: "docker inspect".to_string(),
            image: image.to_string(),
            details: e.to_string(),
        })?;

    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| ScanError::MalformedToolOutput {
            tool: "docker inspect".to_string(),
            image: image.to_string(),
            details: "empty inspect result".to_string(),
        })?;

    let digest = entry
        .repo_digests
        .first()
        .and_then(|reference| reference.split_once('@'))
        .map(|(_, digest)| digest.to_string())
        .unwrap_or_default();

    Ok(InspectMetadata {
        size_bytes: entry.size,
        created: entry.created,
        layers: entry.root_fs.layers.len() as u32,
        digest,
    })
}

/// Converts docker's human-readable sizes ("85.3MB") to bytes.
fn parse_docker_size(size: &str) -> i64 {
    let size = size.trim();
    let (number, multiplier) = if let Some(stripped) = size.strip_suffix("GB") {
        (stripped, 1024 * 1024 * 1024)
    } else if let Some(stripped) = size.strip_suffix("MB") {
        (stripped, 1024 * 1024)
    } else if let Some(stripped) = size.strip_suffix("KB").or_else(|| size.strip_suffix("kB")) {
        (stripped, 1024)
    } else if let Some(stripped) = size.strip_suffix('B') {
        (stripped, 1)
    } else {
        (size, 1)
    };

    match number.trim().parse::<f64>() {
        Ok(value) => (value * multiplier as f64) as i64,
        Err(_) => 0,
    }
}
