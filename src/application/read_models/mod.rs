//! Read models for the update report
//!
//! View-optimized structs built once from the use case response and
//! consumed by every formatter.

mod update_report;
mod update_report_builder;

pub use update_report::{ReportEntryView, ReportMetadataView, ReportSummaryView, UpdateReport};
pub use update_report_builder::UpdateReportBuilder;
