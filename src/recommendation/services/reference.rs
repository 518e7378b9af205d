//! Image reference parsing and construction.
//!
//! A reference is `[registry/]repository[:tag]`. The registry segment is
//! recognized by containing a dot (`mcr.microsoft.com`, `docker.io`);
//! anything else is treated as a repository under the default registry.

/// Registry assumed when a reference carries no domain-like first segment.
pub const DEFAULT_REGISTRY: &str = "mcr.microsoft.com";

/// Registries that configuration entries may spell out in full. Repositories
/// starting with one of these are never re-prefixed by [`build_reference`].
const KNOWN_REGISTRY_PREFIXES: &[&str] = &["mcr.microsoft.com/", "docker.io/", "ghcr.io/"];

/// The parsed parts of an image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub registry: String,
    pub repository: String,
    pub tag: String,
}

/// Splits a full image name into registry, repository, and tag.
///
/// The tag is everything after the last `:` that follows the final `/`, so a
/// port-qualified registry (`localhost:5000/app`) is not mistaken for a
/// tagged reference. A missing tag yields an empty string.
pub fn split_reference(name: &str) -> ImageReference {
    let (name_without_tag, tag) = match name.rsplit_once(':') {
        Some((head, candidate)) if !candidate.contains('/') => (head, candidate),
        _ => (name, ""),
    };

    let (registry, repository) = match name_without_tag.split_once('/') {
        Some((first, rest)) if first.contains('.') => (first, rest),
        _ => (DEFAULT_REGISTRY, name_without_tag),
    };

    ImageReference {
        registry: registry.to_string(),
        repository: repository.to_string(),
        tag: tag.to_string(),
    }
}

/// Constructs the full pullable image name for a repository and tag.
///
/// Repositories that already spell out a known registry are kept as-is and
/// only get the tag appended; everything else is prefixed with
/// `default_registry` (or [`DEFAULT_REGISTRY`] when that is empty).
pub fn build_reference(default_registry: &str, repository: &str, tag: &str) -> String {
    if KNOWN_REGISTRY_PREFIXES
        .iter()
        .any(|prefix| repository.starts_with(prefix))
    {
        return format!("{repository}:{tag}");
    }

    let registry = if default_registry.is_empty() {
        DEFAULT_REGISTRY
    } else {
        default_registry
    };

    format!("{registry}/{repository}:{tag}")
}

/// Partitions configured image entries into repositories (to be tag-listed)
/// and fully tagged single images (to be scanned as given).
///
/// Entries are trimmed; blank lines and `#` comments are dropped. An entry
/// counts as a single image when the part before any `@digest` suffix
/// contains a tag separator.
pub fn partition_image_entries(entries: &[String]) -> (Vec<String>, Vec<String>) {
    let mut repositories = Vec::new();
    let mut single_images = Vec::new();

    for entry in entries {
        let entry = entry.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }

        let before_digest = entry.split('@').next().unwrap_or(entry);
        if before_digest.contains(':') {
            single_images.push(entry.to_string());
        } else {
            repositories.push(entry.to_string());
        }
    }

    (repositories, single_images)
}
