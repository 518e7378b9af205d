/// One entry in a software bill of materials: a package or binary the
/// SBOM producer discovered inside an image.
///
/// Artifacts are immutable inputs; a classification pass consumes a list of
/// them and never mutates or re-reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub version: String,
    /// Package kind as reported by the producer (rpm, deb, apk, dotnet,
    /// binary, ...). Open-ended, so kept as a string.
    pub kind: String,
    /// Language hint declared by the producer. Not trusted for language
    /// resolution; name patterns are authoritative.
    pub language_hint: String,
}

impl Artifact {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
        language_hint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            kind: kind.into(),
            language_hint: language_hint.into(),
        }
    }

    /// True when the artifact came from one of the system packaging formats.
    /// Kind casing is producer-dependent, so the comparison ignores it.
    pub fn is_system_package(&self) -> bool {
        ["rpm", "deb", "apk"]
            .iter()
            .any(|kind| self.kind.eq_ignore_ascii_case(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_package_kinds() {
        assert!(Artifact::new("openssl", "3.0", "rpm", "").is_system_package());
        assert!(Artifact::new("openssl", "3.0", "deb", "").is_system_package());
        assert!(Artifact::new("openssl", "3.0", "apk", "").is_system_package());
        assert!(Artifact::new("openssl", "3.0", "RPM", "").is_system_package());
        assert!(!Artifact::new("requests", "2.31", "python", "").is_system_package());
        assert!(!Artifact::new("go", "1.26.0", "binary", "").is_system_package());
    }
}
