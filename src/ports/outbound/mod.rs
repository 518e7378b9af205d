/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (registry, container runtime,
/// scanner tools, file system, console).
pub mod artifact_source;
pub mod image_runtime;
pub mod progress_reporter;
pub mod record_store;
pub mod report_formatter;
pub mod report_writer;
pub mod tag_provider;
pub mod vulnerability_source;

pub use artifact_source::ArtifactSource;
pub use image_runtime::{ImageRuntime, InspectMetadata};
pub use progress_reporter::ProgressReporter;
pub use record_store::RecordStore;
pub use report_formatter::ReportFormatter;
pub use report_writer::ReportWriter;
pub use tag_provider::TagProvider;
pub use vulnerability_source::{VulnerabilityReport, VulnerabilitySource};
