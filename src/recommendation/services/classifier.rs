use regex::Regex;
use std::sync::LazyLock;

use crate::recommendation::domain::{
    Artifact, CapabilityRecord, Composition, LanguageRecord, PackageManagerRecord,
    SystemPackageRecord,
};
use crate::recommendation::policies::PriorityPolicy;

/// Names excluded from language detection entirely: package-manager
/// sub-components that would otherwise shadow the runtime they belong to.
static EXCLUDED_ARTIFACTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(python-pip|python3-pip|nodejs-npm|java-common|python-setuptools)")
        .unwrap_or_else(|e| panic!("invalid exclusion pattern: {e}"))
});

/// Language detection patterns in fixed evaluation order; the first match
/// claims the artifact. Anchored prefixes keep module paths like
/// `golang.org/x/term` and tools like `go-md2man` from counting as runtimes.
static LANGUAGE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("python", r"(?i)^(python|cpython)([.-]?\d.*)?$"),
        ("node", r"(?i)^(node|nodejs)([.-]?\d.*)?$"),
        ("java", r"(?i)(java|openjdk|jdk|jre)[\d.-]*$"),
        ("go", r"(?i)^(go|golang)([.-]?\d.*)?$"),
        ("ruby", r"(?i)^ruby([.-]?\d.*)?$"),
        ("php", r"(?i)^php([.-]?\d.*)?$"),
        ("rust", r"(?i)^rust(c)?([.-]?\d.*)?$"),
        ("dotnet", r"(?i)(dotnet|aspnet|\.net)[\d.-]*$"),
        ("lua", r"(?i)^lua([.-]?\d.*)?$"),
    ]
    .into_iter()
    .map(|(lang, pattern)| {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid language pattern for {lang}: {e}"));
        (lang, regex)
    })
    .collect()
});

/// Package kind the SBOM producer assigns to .NET framework and NuGet
/// entries; detected by kind because their names carry no runtime-like
/// prefix.
const DOTNET_PACKAGE_KIND: &str = "dotnet";

/// Package manager binaries and the language ecosystem each serves.
const PACKAGE_MANAGERS: &[(&str, &str)] = &[
    ("pip", "python"),
    ("pip3", "python"),
    ("npm", "node"),
    ("yarn", "node"),
    ("cargo", "rust"),
    ("gem", "ruby"),
    ("go", "go"),
];

/// Capability keywords in fixed evaluation order. An artifact yields one
/// capability record per capability whose keyword list it matches, so a
/// single artifact can produce several records.
const CAPABILITY_KEYWORDS: &[(&str, &[&str])] = &[
    ("ssl", &["openssl", "libssl", "ca-certificates"]),
    ("http_client", &["curl", "wget", "libcurl"]),
    ("database", &["libpq", "sqlite", "mysql", "mariadb"]),
    ("compression", &["zlib", "bzip2", "xz", "gzip"]),
    ("xml", &["libxml", "expat"]),
    ("json", &["json"]),
];

/// CompositionClassifier resolves an image's composition from its SBOM
/// artifact list: at most one language record per language, plus package
/// manager, system package and capability records.
///
/// Classification is a pure pass over the input list. All tables are fixed
/// at startup and evaluated in declaration order, so the same input always
/// produces the same output; priority ties go to the first-seen artifact.
pub struct CompositionClassifier {
    priority: PriorityPolicy,
}

struct Candidate {
    record: LanguageRecord,
    priority: u32,
}

impl CompositionClassifier {
    pub fn new() -> Self {
        Self {
            priority: PriorityPolicy::new(),
        }
    }

    pub fn classify(&self, artifacts: &[Artifact]) -> Composition {
        let mut best: Vec<(&'static str, Candidate)> = Vec::new();
        let mut composition = Composition::default();

        for artifact in artifacts {
            if EXCLUDED_ARTIFACTS.is_match(&artifact.name) {
                continue;
            }

            if let Some((language, priority)) = self.detect_language(artifact) {
                Self::consider(&mut best, language, priority, artifact);
            }

            if let Some((name, language)) = PACKAGE_MANAGERS
                .iter()
                .find(|(name, _)| *name == artifact.name)
            {
                composition.package_managers.push(PackageManagerRecord {
                    name: (*name).to_string(),
                    version: artifact.version.clone(),
                    language: (*language).to_string(),
                });
            }

            if artifact.is_system_package() {
                composition.system_packages.push(SystemPackageRecord {
                    name: artifact.name.clone(),
                    version: artifact.version.clone(),
                    kind: artifact.kind.clone(),
                });
            }

            let name_lower = artifact.name.to_lowercase();
            for (capability, keywords) in CAPABILITY_KEYWORDS {
                if keywords.iter().any(|kw| name_lower.contains(kw)) {
                    composition.capabilities.push(CapabilityRecord {
                        capability: (*capability).to_string(),
                    });
                }
            }
        }

        composition.languages = best.into_iter().map(|(_, c)| c.record).collect();
        composition
    }

    /// Returns the language tag and priority for an artifact, or None when
    /// no detection rule applies. The kind-based .NET rule runs before the
    /// name patterns so framework packages are claimed even though their
    /// names match nothing.
    fn detect_language(&self, artifact: &Artifact) -> Option<(&'static str, u32)> {
        if artifact.kind == DOTNET_PACKAGE_KIND {
            return Some(("dotnet", self.priority.score_dotnet_kind(artifact)));
        }

        LANGUAGE_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(&artifact.name))
            .map(|(language, _)| (*language, self.priority.score(language, artifact)))
    }

    /// Keeps the highest-priority candidate per language. Replacement is
    /// strictly-greater, so an exact tie keeps the first-seen artifact.
    fn consider(
        best: &mut Vec<(&'static str, Candidate)>,
        language: &'static str,
        priority: u32,
        artifact: &Artifact,
    ) {
        let record = LanguageRecord::detected(
            language,
            &artifact.version,
            &artifact.name,
            &artifact.kind,
        );
        let candidate = Candidate { record, priority };

        match best.iter_mut().find(|(tag, _)| *tag == language) {
            Some((_, existing)) if priority > existing.priority => *existing = candidate,
            Some(_) => {}
            None => best.push((language, candidate)),
        }
    }
}

impl Default for CompositionClassifier {
    fn default() -> Self {
        Self::new()
    }
}
