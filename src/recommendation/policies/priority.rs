use crate::recommendation::domain::Artifact;

/// Priority for any artifact matched by a language pattern.
const BASE_PRIORITY: u32 = 50;

/// Bonus for artifacts installed through a system packaging format, which
/// makes an OS-managed runtime beat a stray binary of equal rank.
const SYSTEM_PACKAGE_BONUS: u32 = 5;

/// Priority for a .NET package whose name identifies a real runtime.
const DOTNET_RUNTIME_PRIORITY: u32 = 100;

/// Floor priority for .NET library packages, low enough that they only
/// surface when no better candidate exists in the whole image.
const DOTNET_LIBRARY_PRIORITY: u32 = 10;

/// Per-language canonical-package rule.
///
/// Receives the lowercased artifact name and returns `Some(priority)` when
/// the name is the canonical runtime package for the language (or a
/// recognized near-match), `None` to keep the base priority.
type CanonicalRule = fn(&str) -> Option<u32>;

/// PriorityPolicy scores candidate artifacts per language so the primary
/// runtime package wins over companion packages like `-libs` or `-dev`.
///
/// The per-language rules live in one table keyed by language tag; adding
/// an ecosystem is one new entry, with the shared base-plus-bonus scoring
/// untouched.
pub struct PriorityPolicy {
    rules: &'static [(&'static str, CanonicalRule)],
}

impl PriorityPolicy {
    pub fn new() -> Self {
        Self {
            rules: &[
                ("python", python_rule),
                ("node", node_rule),
                ("java", java_rule),
                ("dotnet", dotnet_rule),
            ],
        }
    }

    /// Scores an artifact already matched to `language` by name pattern.
    pub fn score(&self, language: &str, artifact: &Artifact) -> u32 {
        let lower = artifact.name.to_lowercase();
        let mut priority = self
            .rules
            .iter()
            .find(|(tag, _)| *tag == language)
            .and_then(|(_, rule)| rule(&lower))
            .unwrap_or(BASE_PRIORITY);

        if artifact.is_system_package() {
            priority += SYSTEM_PACKAGE_BONUS;
        }

        priority
    }

    /// Scores a .NET artifact recognized by its package kind rather than by
    /// name. Runtime packages take the top rank; libraries get a floor value
    /// so they never outrank a real runtime but still yield a low-confidence
    /// record when they are the only .NET evidence in the image.
    pub fn score_dotnet_kind(&self, artifact: &Artifact) -> u32 {
        if is_dotnet_runtime_package(&artifact.name) {
            DOTNET_RUNTIME_PRIORITY
        } else {
            DOTNET_LIBRARY_PRIORITY
        }
    }
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// True for the framework packages that ship the .NET runtime itself,
/// false for NuGet libraries and SDK tooling.
pub fn is_dotnet_runtime_package(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.starts_with("microsoft.netcore.app.runtime")
        || lower.starts_with("microsoft.aspnetcore.app.runtime")
}

fn python_rule(name: &str) -> Option<u32> {
    matches!(name, "python3" | "cpython" | "python").then_some(100)
}

fn node_rule(name: &str) -> Option<u32> {
    matches!(name, "nodejs" | "node").then_some(100)
}

fn java_rule(name: &str) -> Option<u32> {
    (name.contains("openjdk") || name.contains("jdk")).then_some(100)
}

fn dotnet_rule(name: &str) -> Option<u32> {
    if name.contains("dotnet-runtime") || name.contains("aspnetcore-runtime") {
        Some(100)
    } else if name == "dotnet-sdk" {
        Some(90)
    } else {
        None
    }
}
