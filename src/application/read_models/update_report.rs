use crate::release_matching::domain::Classification;
use serde::Serialize;

/// Read model for one update check run
#[derive(Debug, Clone, Serialize)]
pub struct UpdateReport {
    pub metadata: ReportMetadataView,
    pub summary: ReportSummaryView,
    /// Entries in report order: outdated, up to date, unknown
    pub entries: Vec<ReportEntryView>,
}

impl UpdateReport {
    pub fn entries_with_status(
        &self,
        status: Classification,
    ) -> impl Iterator<Item = &ReportEntryView> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.status == status.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339
    pub timestamp: String,
    /// `urn:uuid:` identifier of this run
    pub report_id: String,
    /// `YYYY-MM-DD`, when the catalog says
    pub catalog_updated: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportSummaryView {
    pub outdated: usize,
    pub up_to_date: usize,
    pub unknown: usize,
    pub total: usize,
}

/// One row of the report
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntryView {
    pub name: String,
    /// `"Outdated"`, `"Up-to-date"` or `"Unknown"`
    pub status: String,
    pub installed_version: String,
    pub publisher: String,
    /// Catalog version; empty for unknown entries
    pub current_version: String,
    pub release_date: String,
    pub support_end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}
