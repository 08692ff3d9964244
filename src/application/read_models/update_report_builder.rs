use super::update_report::{ReportEntryView, ReportMetadataView, ReportSummaryView, UpdateReport};
use crate::application::dto::UpdateCheckResponse;
use crate::release_matching::domain::MatchResult;

const TOOL_NAME: &str = "update-checker";

/// Builds the [`UpdateReport`] read model from a use case response
pub struct UpdateReportBuilder;

impl UpdateReportBuilder {
    pub fn build(response: &UpdateCheckResponse) -> UpdateReport {
        UpdateReport {
            metadata: Self::build_metadata(response),
            summary: ReportSummaryView {
                outdated: response.summary.outdated,
                up_to_date: response.summary.up_to_date,
                unknown: response.summary.unknown,
                total: response.summary.total(),
            },
            entries: response.results.iter().map(Self::build_entry).collect(),
        }
    }

    fn build_metadata(response: &UpdateCheckResponse) -> ReportMetadataView {
        ReportMetadataView {
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            report_id: format!("urn:uuid:{}", uuid::Uuid::new_v4()),
            catalog_updated: response
                .catalog_updated
                .map(|date| date.format("%Y-%m-%d").to_string()),
        }
    }

    fn build_entry(result: &MatchResult) -> ReportEntryView {
        ReportEntryView {
            name: result.name.clone(),
            status: result.status.label().to_string(),
            installed_version: result.installed.display_version().to_string(),
            publisher: result.installed.publisher().to_string(),
            current_version: result.matched.version.clone(),
            release_date: result.matched.released.clone(),
            support_end: result.matched.ends.clone(),
            remark: result.remark.clone(),
        }
    }
}
