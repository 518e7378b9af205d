//! Runtime probe vocabulary.
//!
//! Maps a detected language to the one-shot command that reports its runtime
//! version inside a container, and to the pattern that pulls the version out
//! of the command's combined stdout and stderr (java prints to stderr).
//! Executing the command is the runtime adapter's job; nothing here touches
//! a container.

use std::sync::LazyLock;

use regex::Regex;

/// Version-reporting command per language.
const RUNTIME_COMMANDS: &[(&str, &[&str])] = &[
    ("python", &["python3", "--version"]),
    ("node", &["node", "--version"]),
    ("java", &["java", "-version"]),
    ("go", &["go", "version"]),
    ("ruby", &["ruby", "--version"]),
    ("php", &["php", "--version"]),
    ("dotnet", &["dotnet", "--info"]),
    ("rust", &["rustc", "--version"]),
];

static VERSION_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("python", r"Python\s+(\d+\.\d+\.\d+)"),
        ("node", r"v(\d+\.\d+\.\d+)"),
        ("java", r#"version\s+"?(\d+[\d.]*)"#),
        ("go", r"go(\d+\.\d+[\d.]*)"),
        ("ruby", r"ruby\s+(\d+\.\d+\.\d+)"),
        ("php", r"PHP\s+(\d+\.\d+\.\d+)"),
        ("dotnet", r"Version:\s+(\d+\.\d+[\d.]*)"),
        ("rust", r"rustc\s+(\d+\.\d+\.\d+)"),
    ]
    .into_iter()
    .map(|(language, pattern)| {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid version pattern for {language}: {e}"));
        (language, regex)
    })
    .collect()
});

/// Returns the version command for `language`, or `None` when the language
/// has no probe mapping (such languages are simply left unverified).
pub fn command_for(language: &str) -> Option<&'static [&'static str]> {
    let key = language.to_lowercase();
    RUNTIME_COMMANDS
        .iter()
        .find(|(lang, _)| *lang == key)
        .map(|(_, command)| *command)
}

/// Extracts the version substring from probe command output, or `None` when
/// the language has no pattern or the output does not match.
pub fn extract_version(language: &str, output: &str) -> Option<String> {
    let key = language.to_lowercase();
    let pattern = VERSION_PATTERNS
        .iter()
        .find(|(lang, _)| *lang == key)
        .map(|(_, pattern)| pattern)?;

    pattern
        .captures(output)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_lookup_ignores_case() {
        assert_eq!(command_for("Python"), Some(&["python3", "--version"][..]));
        assert_eq!(command_for("dotnet"), Some(&["dotnet", "--info"][..]));
        assert_eq!(command_for("cobol"), None);
    }

    #[test]
    fn test_extract_python_version() {
        assert_eq!(
            extract_version("python", "Python 3.12.9\n"),
            Some("3.12.9".to_string())
        );
    }

    #[test]
    fn test_extract_node_version() {
        assert_eq!(
            extract_version("node", "v20.11.1\n"),
            Some("20.11.1".to_string())
        );
    }

    #[test]
    fn test_extract_java_version_from_stderr_banner() {
        let output = "openjdk version \"21.0.10\" 2026-01-20 LTS\n\
                      OpenJDK Runtime Environment Microsoft-Build (build 21.0.10+7-LTS)\n";
        assert_eq!(
            extract_version("java", output),
            Some("21.0.10".to_string())
        );
    }

    #[test]
    fn test_extract_go_version_skips_command_echo() {
        assert_eq!(
            extract_version("go", "go version go1.26.0 linux/amd64\n"),
            Some("1.26.0".to_string())
        );
    }

    #[test]
    fn test_extract_dotnet_version_from_info_block() {
        let output = "Host:\n  Version:      8.0.24\n  Architecture: x64\n";
        assert_eq!(
            extract_version("dotnet", output),
            Some("8.0.24".to_string())
        );
    }

    #[test]
    fn test_extract_ruby_php_rust_versions() {
        assert_eq!(
            extract_version("ruby", "ruby 3.2.2p53 (2023-03-30 revision e51014f9c0) [x86_64-linux]"),
            Some("3.2.2".to_string())
        );
        assert_eq!(
            extract_version("php", "PHP 8.3.1 (cli) (built: Dec 21 2023)"),
            Some("8.3.1".to_string())
        );
        assert_eq!(
            extract_version("rust", "rustc 1.75.0 (82e1608df 2023-12-21)"),
            Some("1.75.0".to_string())
        );
    }

    #[test]
    fn test_extract_returns_none_on_mismatch_or_unknown_language() {
        assert_eq!(extract_version("python", "command not found"), None);
        assert_eq!(extract_version("cobol", "COBOL 85"), None);
    }
}
