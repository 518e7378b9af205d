use basepick::prelude::*;

/// Mock TagProvider serving a canned tag list
pub struct MockTagProvider {
    pub tags: Vec<String>,
    pub should_fail: bool,
}

impl MockTagProvider {
    pub fn new(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            tags: Vec::new(),
            should_fail: true,
        }
    }
}

impl TagProvider for MockTagProvider {
    fn list_tags(&self, _registry: &str, _repository: &str) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock tag listing failure");
        }
        Ok(self.tags.clone())
    }
}
