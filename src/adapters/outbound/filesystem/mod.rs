/// Filesystem adapters for record persistence and report output
mod file_report_writer;
mod json_record_store;

pub use file_report_writer::FileReportWriter;
pub use json_record_store::JsonRecordStore;
