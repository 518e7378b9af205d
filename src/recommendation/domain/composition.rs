use serde::{Deserialize, Serialize};

use super::version::{clean_version, extract_major_minor};

/// The resolved runtime identity attributed to an image for one language.
///
/// At most one record per language survives a classification pass.
/// `verified` stays false until a runtime probe confirms the version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub language: String,
    pub version: String,
    pub major_minor: String,
    pub package_name: String,
    pub package_type: String,
    pub verified: bool,
}

impl LanguageRecord {
    /// Builds an unverified record, cleaning the raw package version and
    /// deriving major.minor from the cleaned value.
    pub fn detected(
        language: impl Into<String>,
        raw_version: &str,
        package_name: impl Into<String>,
        package_type: impl Into<String>,
    ) -> Self {
        let version = clean_version(raw_version);
        let major_minor = extract_major_minor(&version);
        Self {
            language: language.into(),
            version,
            major_minor,
            package_name: package_name.into(),
            package_type: package_type.into(),
            verified: false,
        }
    }

    /// Overwrites the version with a runtime-probed value and marks the
    /// record verified. The probed value wins over any detected version.
    pub fn apply_verified_version(&mut self, probed: &str) {
        self.version = probed.to_string();
        self.major_minor = extract_major_minor(probed);
        self.verified = true;
    }
}

/// A package manager binary found in an image, tagged with the language
/// ecosystem it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManagerRecord {
    pub name: String,
    pub version: String,
    pub language: String,
}

/// A system-level package installed through one of the OS packaging formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemPackageRecord {
    pub name: String,
    pub version: String,
    pub kind: String,
}

/// A capability inferred from package names (ssl, http_client, ...).
///
/// Capability records are a multiset: one record per matching
/// (capability, artifact) pair, with no deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    pub capability: String,
}

/// Everything a classification pass derives from one image's artifact list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    pub languages: Vec<LanguageRecord>,
    pub package_managers: Vec<PackageManagerRecord>,
    pub system_packages: Vec<SystemPackageRecord>,
    pub capabilities: Vec<CapabilityRecord>,
}
