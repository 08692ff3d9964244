use crate::application::read_models::UpdateReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable reports
///
/// Serializes the whole read model, unknown entries included.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &UpdateReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
