use crate::shared::Result;

/// TagProvider port for enumerating repository tags
///
/// This port abstracts the registry API used to list the candidate tags
/// of a repository before any filtering or scanning happens.
pub trait TagProvider {
    /// Lists every tag the registry reports for `repository`.
    ///
    /// # Arguments
    /// * `registry` - Registry host, e.g. `mcr.microsoft.com`
    /// * `repository` - Repository path within the registry
    ///
    /// # Errors
    /// Returns an error if the request fails, the registry answers with a
    /// non-success status, or the response cannot be decoded.
    fn list_tags(&self, registry: &str, repository: &str) -> Result<Vec<String>>;
}
