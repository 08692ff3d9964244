use crate::application::read_models::{ReportEntryView, UpdateReport};
use crate::ports::outbound::ReportFormatter;
use crate::release_matching::domain::Classification;
use crate::shared::Result;
use owo_colors::OwoColorize;

const HEADERS: [&str; 5] = ["Status", "Name", "Installed", "Current", "Support ends"];

/// TextFormatter adapter for terminal output
///
/// Renders one aligned row per entry. Status labels are padded before they
/// are coloured, so ANSI escapes never disturb the column widths.
pub struct TextFormatter {
    color: bool,
    show_unknown: bool,
}

impl TextFormatter {
    pub fn new(color: bool, show_unknown: bool) -> Self {
        Self {
            color,
            show_unknown,
        }
    }

    fn paint(&self, status: &str, padded: String) -> String {
        if !self.color {
            return padded;
        }
        if status == Classification::Outdated.label() {
            padded.red().bold().to_string()
        } else if status == Classification::UpToDate.label() {
            padded.green().to_string()
        } else {
            padded.dimmed().to_string()
        }
    }

    fn row(entry: &ReportEntryView) -> [String; 5] {
        let current = match &entry.remark {
            Some(remark) if entry.current_version.is_empty() => remark.clone(),
            Some(remark) => format!("{} ({})", entry.current_version, remark),
            None => entry.current_version.clone(),
        };
        [
            entry.status.clone(),
            entry.name.clone(),
            entry.installed_version.clone(),
            current,
            entry.support_end.clone(),
        ]
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &UpdateReport) -> Result<String> {
        let rows: Vec<[String; 5]> = report
            .entries
            .iter()
            .filter(|entry| self.show_unknown || entry.status != Classification::Unknown.label())
            .map(Self::row)
            .collect();

        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        if let Some(date) = &report.metadata.catalog_updated {
            output.push_str(&format!("Release catalog updated {}\n\n", date));
        }

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths.iter())
            .map(|(header, width)| format!("{:<width$}", header, width = width))
            .collect();
        output.push_str(header.join("  ").trim_end());
        output.push('\n');
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        output.push_str(&rule.join("  "));
        output.push('\n');

        for row in &rows {
            let cells: Vec<String> = row
                .iter()
                .zip(widths.iter())
                .enumerate()
                .map(|(column, (cell, width))| {
                    let padded = format!("{:<width$}", cell, width = width);
                    if column == 0 {
                        self.paint(cell, padded)
                    } else {
                        padded
                    }
                })
                .collect();
            output.push_str(cells.join("  ").trim_end());
            output.push('\n');
        }

        let summary = &report.summary;
        output.push_str(&format!(
            "\n{} outdated, {} up to date, {} unknown ({} checked)\n",
            summary.outdated, summary.up_to_date, summary.unknown, summary.total
        ));
        if !self.show_unknown && summary.unknown > 0 {
            output.push_str("Use --show-unknown to list software without catalog information\n");
        }

        Ok(output)
    }
}
