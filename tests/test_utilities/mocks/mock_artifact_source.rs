use basepick::prelude::*;

/// Mock ArtifactSource serving a canned artifact inventory
pub struct MockArtifactSource {
    pub artifacts: Vec<Artifact>,
    pub should_fail: bool,
}

impl MockArtifactSource {
    pub fn new(artifacts: Vec<Artifact>) -> Self {
        Self {
            artifacts,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            artifacts: Vec::new(),
            should_fail: true,
        }
    }
}

impl ArtifactSource for MockArtifactSource {
    fn collect_artifacts(&self, _image: &str) -> Result<Vec<Artifact>> {
        if self.should_fail {
            anyhow::bail!("Mock artifact collection failure");
        }
        Ok(self.artifacts.clone())
    }
}
