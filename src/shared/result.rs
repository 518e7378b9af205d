/// Result alias used throughout the scanner, backed by anyhow::Error so
/// tool, registry, and store failures compose into one error chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
