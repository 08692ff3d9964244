use super::{CatalogIndex, MatchingEngine, OsPatchLevelVerifier};
use crate::ports::outbound::DiagnosticsReporter;
use crate::release_matching::domain::{Classification, Inventory, MatchResult};

/// ClassificationAggregator - classifies a whole inventory
///
/// Runs the OS verifier once and the matching engine over every installed
/// component, then orders the results by status (`Outdated`, `UpToDate`,
/// `Unknown`) and case-insensitive name. The sort is stable, so equal keys
/// keep scan order with the OS entry first.
///
/// Decisions are reported through the injected [`DiagnosticsReporter`];
/// the results themselves depend only on the inventory and the index.
pub struct ClassificationAggregator<'a, D: DiagnosticsReporter + ?Sized> {
    engine: &'a MatchingEngine,
    diagnostics: &'a D,
}

impl<'a, D: DiagnosticsReporter + ?Sized> ClassificationAggregator<'a, D> {
    pub fn new(engine: &'a MatchingEngine, diagnostics: &'a D) -> Self {
        Self {
            engine,
            diagnostics,
        }
    }

    pub fn classify_all(&self, inventory: &Inventory, index: &CatalogIndex) -> Vec<MatchResult> {
        self.classify_all_with_progress(inventory, index, |_, _, _| {})
    }

    /// Same as [`classify_all`](Self::classify_all), calling `on_item`
    /// with `(position, total, display_name)` before each installed item.
    pub fn classify_all_with_progress<F>(
        &self,
        inventory: &Inventory,
        index: &CatalogIndex,
        mut on_item: F,
    ) -> Vec<MatchResult>
    where
        F: FnMut(usize, usize, &str),
    {
        let total = inventory.len();
        let mut results = Vec::with_capacity(total + 1);

        let os_result = OsPatchLevelVerifier::classify(&inventory.os, index);
        self.report(&os_result);
        results.push(os_result);

        for (position, installed) in inventory.software.iter().enumerate() {
            on_item(position + 1, total, installed.display_name());

            match self.engine.classify(installed, index) {
                Some(result) => {
                    self.report(&result);
                    results.push(result);
                }
                None => self
                    .diagnostics
                    .trace(&format!("Ignoring {}", installed.display_name())),
            }
        }

        sort_results(&mut results);
        results
    }

    fn report(&self, result: &MatchResult) {
        match result.status {
            Classification::UpToDate => self.diagnostics.info(&format!(
                "{} seems up to date ({})",
                result.name,
                result.installed.display_version()
            )),
            Classification::Outdated => self.diagnostics.info(&format!(
                "{} seems outdated ({} installed, {} current)",
                result.name,
                result.installed.display_version(),
                result.matched.version
            )),
            Classification::Unknown => self
                .diagnostics
                .trace(&format!("No information for {}", result.name)),
        }
    }
}

/// Stable sort by status ordinal, then lowercase name
pub fn sort_results(results: &mut [MatchResult]) {
    results.sort_by_cached_key(|result| (result.status, result.name.to_lowercase()));
}
