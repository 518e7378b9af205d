use crate::shared::Result;

/// Metadata reported by the container runtime for a local image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectMetadata {
    pub size_bytes: i64,
    /// Creation timestamp exactly as the runtime prints it.
    pub created: String,
    pub layers: u32,
    pub digest: String,
}

/// ImageRuntime port for the container runtime
///
/// This port abstracts pulling images, reading their metadata, and running
/// one-shot commands inside them. The analysis pipeline only ever consumes
/// the returned plain values.
pub trait ImageRuntime {
    /// Pulls `image` so subsequent operations can rely on a local copy.
    ///
    /// # Errors
    /// Returns an error if the pull fails or times out.
    fn pull(&self, image: &str) -> Result<()>;

    /// Returns inspect metadata for a local image.
    fn inspect(&self, image: &str) -> Result<InspectMetadata>;

    /// Returns the on-disk size of a local image in bytes, which is more
    /// accurate than the inspect size for multi-platform images.
    fn image_size(&self, image: &str) -> Result<i64>;

    /// Runs `command` one-shot inside `image` and returns combined stdout
    /// and stderr (several runtimes print their version banner to stderr).
    fn exec_in_image(&self, image: &str, command: &[&str]) -> Result<String>;

    /// Removes the local copy of `image` after analysis.
    fn remove(&self, image: &str) -> Result<()>;
}
