//! Shared display helpers for report rendering.

/// Converts a byte count to a human-readable size. Zero and negative values
/// render as "-", meaning the size was never observed.
pub fn human_size(num_bytes: i64) -> String {
    if num_bytes <= 0 {
        return "-".to_string();
    }

    let mb = num_bytes as f64 / (1024.0 * 1024.0);
    if mb < 1024.0 {
        return format!("{mb:.1} MB");
    }

    format!("{:.2} GB", mb / 1024.0)
}

/// Shortens a digest for table display. sha256 digests keep the scheme plus
/// twelve hex characters; other schemes are cut to nineteen characters.
pub fn format_digest(digest: &str) -> String {
    if digest.is_empty() {
        return String::new();
    }

    if let Some(hash) = digest.strip_prefix("sha256:") {
        if hash.len() > 12 {
            return format!("sha256:{}", &hash[..12]);
        }
        return digest.to_string();
    }

    if digest.len() > 19 {
        return digest[..19].to_string();
    }

    digest.to_string()
}

/// Copy-friendly digest-pinned reference. The stored name already carries
/// the tag, so pinning appends only the digest. Returns an empty string when
/// either part is missing.
pub fn format_pinned_reference(name: &str, digest: &str) -> String {
    if name.is_empty() || digest.is_empty() {
        return String::new();
    }

    format!("{name}@{digest}")
}

/// Uppercases the first character for section headings ("python" to
/// "Python"). Language identifiers are plain ASCII words.
pub fn title_case(language: &str) -> String {
    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
