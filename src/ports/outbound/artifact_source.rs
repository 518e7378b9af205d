use crate::recommendation::domain::Artifact;
use crate::shared::Result;

/// ArtifactSource port for software composition inventory
///
/// This port abstracts the external SBOM tool that inventories an image's
/// software components. The classifier consumes the artifact list as-is;
/// ordering is whatever the tool emits.
pub trait ArtifactSource {
    /// Collects all artifacts discovered in `image`.
    ///
    /// # Errors
    /// Returns an error if the tool cannot be run or emits output that
    /// cannot be decoded.
    fn collect_artifacts(&self, image: &str) -> Result<Vec<Artifact>>;
}
