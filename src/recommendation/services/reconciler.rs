//! Merges classifier output with runtime-probed versions and with a
//! name-based fallback for images whose runtime never appears in the SBOM.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::recommendation::domain::LanguageRecord;

/// Official .NET runtime images carry no recognizable runtime package, so the
/// major.minor embedded in the tag is the only version signal available.
static DOTNET_IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)mcr\.microsoft\.com/dotnet/(?:aspnet|runtime):(\d+\.\d+)")
        .unwrap_or_else(|e| panic!("invalid dotnet image pattern: {e}"))
});

/// Produces the final language set for one image.
///
/// First applies `verified_versions` (keyed by lowercased language name, as
/// computed by the runtime probe); every non-empty entry overwrites the
/// record's version and marks it verified. Then, if no dotnet record exists,
/// synthesizes an unverified one from the image name when it matches the
/// official runtime path. The fallback never overrides a present record.
pub fn reconcile(
    mut languages: Vec<LanguageRecord>,
    verified_versions: &HashMap<String, String>,
    image_name: &str,
) -> Vec<LanguageRecord> {
    apply_verified_versions(&mut languages, verified_versions);

    let has_dotnet = languages
        .iter()
        .any(|record| record.language.eq_ignore_ascii_case("dotnet"));

    if !has_dotnet {
        if let Some(captures) = DOTNET_IMAGE_PATTERN.captures(image_name) {
            let version = captures[1].to_string();
            languages.push(LanguageRecord {
                language: "dotnet".to_string(),
                version: version.clone(),
                major_minor: version,
                package_name: "Microsoft .NET Runtime".to_string(),
                package_type: "container_runtime".to_string(),
                verified: false,
            });
        }
    }

    languages
}

fn apply_verified_versions(
    languages: &mut [LanguageRecord],
    verified_versions: &HashMap<String, String>,
) {
    if verified_versions.is_empty() {
        return;
    }

    for record in languages {
        if let Some(version) = verified_versions.get(&record.language.to_lowercase()) {
            if !version.is_empty() {
                record.apply_verified_version(version);
            }
        }
    }
}
