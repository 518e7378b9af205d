/// Mock implementations for testing
mod mock_artifact_source;
mod mock_image_runtime;
mod mock_progress_reporter;
mod mock_tag_provider;
mod mock_vulnerability_source;

pub use mock_artifact_source::MockArtifactSource;
pub use mock_image_runtime::MockImageRuntime;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_tag_provider::MockTagProvider;
pub use mock_vulnerability_source::MockVulnerabilitySource;
