use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use basepick::prelude::*;

/// Mock ImageRuntime with canned inspect metadata and probe output
#[derive(Default, Clone)]
pub struct MockImageRuntime {
    pub metadata: InspectMetadata,
    pub disk_size: i64,
    /// Probe output keyed by the probed binary (first word of the command)
    pub exec_output: HashMap<String, String>,
    pub should_fail_pull: bool,
    pub removed: Arc<Mutex<Vec<String>>>,
}

impl MockImageRuntime {
    pub fn new(metadata: InspectMetadata) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }

    pub fn with_probe(mut self, binary: &str, output: &str) -> Self {
        self.exec_output
            .insert(binary.to_string(), output.to_string());
        self
    }

    pub fn with_disk_size(mut self, size: i64) -> Self {
        self.disk_size = size;
        self
    }

    pub fn with_pull_failure() -> Self {
        Self {
            should_fail_pull: true,
            ..Self::default()
        }
    }

    pub fn removed_images(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

impl ImageRuntime for MockImageRuntime {
    fn pull(&self, image: &str) -> Result<()> {
        if self.should_fail_pull {
            anyhow::bail!("Mock pull failure for {}", image);
        }
        Ok(())
    }

    fn inspect(&self, _image: &str) -> Result<InspectMetadata> {
        Ok(self.metadata.clone())
    }

    fn image_size(&self, _image: &str) -> Result<i64> {
        Ok(self.disk_size)
    }

    fn exec_in_image(&self, _image: &str, command: &[&str]) -> Result<String> {
        match command.first().and_then(|binary| self.exec_output.get(*binary)) {
            Some(output) => Ok(output.clone()),
            None => anyhow::bail!("Mock probe has no output for {:?}", command),
        }
    }

    fn remove(&self, image: &str) -> Result<()> {
        self.removed.lock().unwrap().push(image.to_string());
        Ok(())
    }
}
