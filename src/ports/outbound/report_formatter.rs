use crate::application::read_models::ReportModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the recommendations report
///
/// This port abstracts the output format (Markdown, JSON) so the report
/// use case renders every format from the same read model.
pub trait ReportFormatter {
    /// Renders the complete report for one model snapshot
    ///
    /// # Arguments
    /// * `report` - The unified report read model
    ///
    /// # Returns
    /// The rendered document as a string
    ///
    /// # Errors
    /// Returns an error if rendering or serialization fails
    fn format(&self, report: &ReportModel) -> Result<String>;
}
