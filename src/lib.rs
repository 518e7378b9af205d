//! basepick - base image scanner and recommendation engine
//!
//! This library scans container base images with Syft and Trivy, classifies
//! what each image is made of, and ranks the safest image per programming
//! language, following hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`recommendation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use basepick::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let store = JsonRecordStore::new("images.json");
//! let markdown_formatter = MarkdownFormatter::new();
//! let json_formatter = JsonFormatter::new();
//! let report_writer = FileReportWriter::new();
//! let progress_reporter = ConsoleProgressReporter::new();
//!
//! // Create use case
//! let use_case = RenderReportUseCase::new(
//!     store,
//!     markdown_formatter,
//!     json_formatter,
//!     report_writer,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = ReportRequest::new(
//!     PathBuf::from("docs/daily_recommendations.md"),
//!     10,
//!     RepositoryConfig::built_in(),
//! );
//! use_case.execute(request)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod recommendation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileReportWriter, JsonRecordStore};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::RegistryHttpClient;
    pub use crate::adapters::outbound::process::{DockerCli, SyftCli, TrivyCli};
    pub use crate::application::dto::{ReportRequest, ScanRequest, ScanSummary};
    pub use crate::application::read_models::{LanguageRankingView, ReportModel, ScannedGroupView};
    pub use crate::application::use_cases::{RenderReportUseCase, ScanImagesUseCase};
    pub use crate::config::{load_repository_config, RepositoryConfig};
    pub use crate::ports::outbound::{
        ArtifactSource, ImageRuntime, InspectMetadata, ProgressReporter, RecordStore,
        ReportFormatter, ReportWriter, TagProvider, VulnerabilityReport, VulnerabilitySource,
    };
    pub use crate::recommendation::domain::{
        Artifact, Composition, ImageRecord, LanguageRecord, RecommendedImage, VulnerabilityCounts,
    };
    pub use crate::recommendation::policies::PriorityPolicy;
    pub use crate::recommendation::services::{CompositionClassifier, ImageReference, TagFilter};
    pub use crate::shared::Result;
}
