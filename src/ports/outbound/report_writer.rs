use std::path::Path;

use crate::shared::Result;

/// ReportWriter port for publishing rendered reports
///
/// This port abstracts where a rendered report lands (a file today) so the
/// report use case stays writable against in-memory fakes.
pub trait ReportWriter {
    /// Writes `content` to `path`, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if a directory cannot be created or the file cannot
    /// be written.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}
