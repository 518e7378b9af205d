/// Domain models for image composition and ranking
mod artifact;
mod composition;
mod image;
mod recommended;
pub mod version;

pub use artifact::Artifact;
pub use composition::{
    CapabilityRecord, Composition, LanguageRecord, PackageManagerRecord, SystemPackageRecord,
};
pub use image::{ImageRecord, Vulnerability, VulnerabilityCounts};
pub use recommended::RecommendedImage;
