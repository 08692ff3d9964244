use crate::release_matching::domain::{Classification, MatchResult};
use chrono::NaiveDate;

/// Number of results per classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    pub outdated: usize,
    pub up_to_date: usize,
    pub unknown: usize,
}

impl ClassificationSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                match result.status {
                    Classification::Outdated => summary.outdated += 1,
                    Classification::UpToDate => summary.up_to_date += 1,
                    Classification::Unknown => summary.unknown += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.outdated + self.up_to_date + self.unknown
    }
}

/// UpdateCheckResponse - output of the update check use case
///
/// `results` are already in report order (see `ClassificationAggregator`).
#[derive(Debug, Clone)]
pub struct UpdateCheckResponse {
    pub results: Vec<MatchResult>,
    pub summary: ClassificationSummary,
    /// Date the catalog was generated, when it says so
    pub catalog_updated: Option<NaiveDate>,
}

impl UpdateCheckResponse {
    pub fn new(results: Vec<MatchResult>, catalog_updated: Option<NaiveDate>) -> Self {
        let summary = ClassificationSummary::from_results(&results);
        Self {
            results,
            summary,
            catalog_updated,
        }
    }

    /// Drives the exit code under `--fail-on-outdated`
    pub fn has_outdated(&self) -> bool {
        self.summary.outdated > 0
    }
}
