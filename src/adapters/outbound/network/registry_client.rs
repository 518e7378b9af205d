use std::time::Duration;

use serde::Deserialize;

use crate::ports::outbound::TagProvider;
use crate::shared::error::ScanError;
use crate::shared::Result;

#[derive(Debug, Deserialize)]
struct TagListResponse {
    #[serde(default)]
    #[allow(dead_code)]
    name: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// RegistryHttpClient adapter implementing [`TagProvider`] against the
/// Registry v2 tag-listing endpoint.
///
/// Works unauthenticated, which is all the public MCR-style registries
/// require for tag listing.
pub struct RegistryHttpClient {
    client: reqwest::blocking::Client,
}

impl RegistryHttpClient {
    pub fn new() -> Result<Self> {
        let user_agent = format!("basepick/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl TagProvider for RegistryHttpClient {
    fn list_tags(&self, registry: &str, repository: &str) -> Result<Vec<String>> {
        let url = format!("https://{registry}/v2/{repository}/tags/list");
        tracing::debug!("Fetching tags from: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ScanError::RegistryRequest {
                url: url.clone(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::RegistryRequest {
                url,
                details: format!("unexpected status {status}"),
            }
            .into());
        }

        let tag_list: TagListResponse =
            response.json().map_err(|e| ScanError::RegistryRequest {
                url,
                details: format!("decoding tags response: {e}"),
            })?;

        Ok(tag_list.tags)
    }
}
