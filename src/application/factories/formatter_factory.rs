use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Rendering options shared by the formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatterOptions {
    /// Colour status labels (text format only)
    pub color: bool,
    /// List software without catalog information
    pub show_unknown: bool,
}

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use update_checker::application::dto::OutputFormat;
    /// use update_checker::application::factories::{FormatterFactory, FormatterOptions};
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, FormatterOptions::default());
    /// ```
    pub fn create(format: OutputFormat, options: FormatterOptions) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(options.color, options.show_unknown)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(options.show_unknown)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use update_checker::application::dto::OutputFormat;
    /// use update_checker::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating text report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
            OutputFormat::Json => "📝 Generating JSON report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{ReportMetadataView, ReportSummaryView, UpdateReport};

    fn empty_report() -> UpdateReport {
        UpdateReport {
            metadata: ReportMetadataView {
                tool_name: "update-checker".to_string(),
                tool_version: "0.0.0".to_string(),
                timestamp: "2021-08-24T00:00:00+00:00".to_string(),
                report_id: "urn:uuid:0".to_string(),
                catalog_updated: None,
            },
            summary: ReportSummaryView {
                outdated: 0,
                up_to_date: 0,
                unknown: 0,
                total: 0,
            },
            entries: Vec::new(),
        }
    }

    #[test]
    fn test_create_formatter_for_each_format() {
        let report = empty_report();

        let json = FormatterFactory::create(OutputFormat::Json, FormatterOptions::default())
            .format(&report)
            .unwrap();
        assert!(json.trim_start().starts_with('{'));

        let markdown = FormatterFactory::create(OutputFormat::Markdown, FormatterOptions::default())
            .format(&report)
            .unwrap();
        assert!(markdown.starts_with("# Software Update Report"));

        let text = FormatterFactory::create(OutputFormat::Text, FormatterOptions::default())
            .format(&report)
            .unwrap();
        assert!(text.starts_with("Status"));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Text),
            "📝 Generating text report..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Markdown),
            "📝 Generating Markdown report..."
        );
    }
}
