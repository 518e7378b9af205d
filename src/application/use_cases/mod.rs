/// Use cases module containing application business logic orchestration
mod render_report;
mod scan_images;

pub use render_report::RenderReportUseCase;
pub use scan_images::ScanImagesUseCase;
