use std::fs;
use std::path::Path;

use crate::ports::outbound::ReportWriter;
use crate::shared::error::ScanError;
use crate::shared::Result;

/// FileReportWriter adapter implementing [`ReportWriter`] on the local
/// filesystem. Parent directories are created on demand so a fresh checkout
/// can render into `docs/` without setup.
pub struct FileReportWriter;

impl FileReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for FileReportWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ScanError::ReportWriteError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                })?;
            }
        }

        fs::write(path, content).map_err(|e| {
            ScanError::ReportWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_write_creates_file_with_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.md");

        FileReportWriter::new().write(&path, "# Report\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# Report\n");
    }

    #[test]
    fn test_write_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs/nested/report.md");

        FileReportWriter::new().write(&path, "content").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_write_overwrites_previous_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.md");
        let writer = FileReportWriter::new();

        writer.write(&path, "old").unwrap();
        writer.write(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_into_unwritable_path_is_an_error() {
        let dir = tempdir().unwrap();
        let blocking_file = dir.path().join("docs");
        fs::write(&blocking_file, "not a directory").unwrap();

        let err = FileReportWriter::new()
            .write(&blocking_file.join("report.md"), "content")
            .unwrap_err();
        assert!(format!("{err}").contains("Failed to write report"));
    }
}
