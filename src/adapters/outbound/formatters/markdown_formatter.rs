use crate::application::read_models::{ReportEntryView, UpdateReport};
use crate::ports::outbound::ReportFormatter;
use crate::release_matching::domain::Classification;
use crate::shared::Result;

/// Markdown table header for matched software
const TABLE_HEADER: &str =
    "| Software | Status | Installed | Current | Released | Support ends | Remark |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|----------|--------|-----------|---------|----------|--------------|--------|\n";

/// Markdown table header for software without catalog information
const OTHER_TABLE_HEADER: &str = "| Software | Installed | Publisher |\n";

/// Markdown table separator line for the other-software table
const OTHER_TABLE_SEPARATOR: &str = "|----------|-----------|-----------|\n";

/// MarkdownFormatter adapter for generating a Markdown update report
///
/// Outdated and up-to-date software share one table, outdated first.
/// Software the catalog knows nothing about is listed in its own section
/// when `show_unknown` is set.
pub struct MarkdownFormatter {
    show_unknown: bool,
}

impl MarkdownFormatter {
    pub fn new(show_unknown: bool) -> Self {
        Self { show_unknown }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn status_cell(status: &str) -> String {
        if status == Classification::Outdated.label() {
            format!("**{}**", status)
        } else {
            status.to_string()
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &UpdateReport) {
        output.push_str("# Software Update Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} on {}.\n",
            report.metadata.tool_name, report.metadata.tool_version, report.metadata.timestamp
        ));
        if let Some(date) = &report.metadata.catalog_updated {
            output.push_str(&format!("Release catalog updated {}.\n", date));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, report: &UpdateReport) {
        let summary = &report.summary;
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Outdated: {}\n", summary.outdated));
        output.push_str(&format!("- Up to date: {}\n", summary.up_to_date));
        output.push_str(&format!("- Unknown: {}\n", summary.unknown));
        output.push_str(&format!("- Total: {}\n\n", summary.total));
    }

    fn render_known(&self, output: &mut String, report: &UpdateReport) {
        output.push_str("## Installed Software\n\n");

        let known: Vec<&ReportEntryView> = report
            .entries_with_status(Classification::Outdated)
            .chain(report.entries_with_status(Classification::UpToDate))
            .collect();

        if known.is_empty() {
            output.push_str("*No installed software matched the release catalog*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for entry in known {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.name),
                Self::status_cell(&entry.status),
                Self::escape_markdown_table_cell(&entry.installed_version),
                Self::escape_markdown_table_cell(&entry.current_version),
                Self::escape_markdown_table_cell(&entry.release_date),
                Self::escape_markdown_table_cell(&entry.support_end),
                Self::escape_markdown_table_cell(entry.remark.as_deref().unwrap_or("")),
            ));
        }
        output.push('\n');
    }

    fn render_unknown(&self, output: &mut String, report: &UpdateReport) {
        output.push_str("## Other installed software\n\n");
        output.push_str("No release information is available for these programs.\n\n");

        let mut unknown = report.entries_with_status(Classification::Unknown).peekable();
        if unknown.peek().is_none() {
            output.push_str("*None*\n\n");
            return;
        }

        output.push_str(OTHER_TABLE_HEADER);
        output.push_str(OTHER_TABLE_SEPARATOR);
        for entry in unknown {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.name),
                Self::escape_markdown_table_cell(&entry.installed_version),
                Self::escape_markdown_table_cell(&entry.publisher),
            ));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &UpdateReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_summary(&mut output, report);
        self.render_known(&mut output, report);
        if self.show_unknown {
            self.render_unknown(&mut output, report);
        }

        Ok(output)
    }
}
