use crate::application::read_models::UpdateReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the update report
///
/// One implementation per output format (text, Markdown, JSON).
pub trait ReportFormatter {
    /// Renders `report` into its final textual form
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &UpdateReport) -> Result<String>;
}
