use crate::application::dto::{UpdateCheckRequest, UpdateCheckResponse};
use crate::ports::outbound::{
    CatalogDocument, CatalogSource, DiagnosticsReporter, InventorySource, ProgressReporter,
};
use crate::release_matching::domain::{Inventory, MatchResult};
use crate::release_matching::services::{CatalogIndex, ClassificationAggregator, MatchingEngine};
use crate::shared::Result;

/// CheckUpdatesUseCase - Core use case of the update checker
///
/// Reads the inventory, fetches the release catalog, and classifies every
/// installed item against it. All infrastructure is injected.
///
/// # Type Parameters
/// * `IS` - InventorySource implementation
/// * `CS` - CatalogSource implementation
/// * `PR` - ProgressReporter implementation
/// * `DR` - DiagnosticsReporter implementation
pub struct CheckUpdatesUseCase<IS, CS, PR, DR> {
    inventory_source: IS,
    catalog_source: CS,
    progress_reporter: PR,
    diagnostics: DR,
}

impl<IS, CS, PR, DR> CheckUpdatesUseCase<IS, CS, PR, DR>
where
    IS: InventorySource,
    CS: CatalogSource,
    PR: ProgressReporter,
    DR: DiagnosticsReporter,
{
    /// Creates a new CheckUpdatesUseCase with injected dependencies
    pub fn new(inventory_source: IS, catalog_source: CS, progress_reporter: PR, diagnostics: DR) -> Self {
        Self {
            inventory_source,
            catalog_source,
            progress_reporter,
            diagnostics,
        }
    }

    /// Executes the update check
    ///
    /// # Errors
    /// Fails when the inventory or the catalog cannot be obtained. Nothing
    /// is classified in that case. Classification itself never fails.
    pub async fn execute(&self, request: UpdateCheckRequest) -> Result<UpdateCheckResponse> {
        // Step 1: Inventory
        let inventory = self.read_inventory()?;

        // Step 2: Catalog
        let CatalogDocument { updated, tree } = self.fetch_catalog().await?;
        let index = CatalogIndex::build(tree);
        self.progress_reporter.report(&format!(
            "✅ Catalog loaded: {} release line(s){}",
            index.len(),
            updated
                .map(|date| format!(", updated {}", date))
                .unwrap_or_default()
        ));

        // Step 3: Classification
        let results = self.classify(&inventory, &index, &request);

        let response = UpdateCheckResponse::new(results, updated);
        self.progress_reporter.report_completion(&format!(
            "✅ Checked {} item(s): {} outdated, {} up to date, {} unknown",
            response.summary.total(),
            response.summary.outdated,
            response.summary.up_to_date,
            response.summary.unknown
        ));

        Ok(response)
    }

    fn read_inventory(&self) -> Result<Inventory> {
        self.progress_reporter.report("📖 Reading software inventory...");

        let inventory = self.inventory_source.read_inventory()?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} installed program(s) on {}",
            inventory.len(),
            if inventory.os.product_name.is_empty() {
                "an unnamed OS"
            } else {
                inventory.os.product_name.as_str()
            }
        ));
        Ok(inventory)
    }

    async fn fetch_catalog(&self) -> Result<CatalogDocument> {
        self.progress_reporter.report(&format!(
            "🌐 Loading release catalog from {}...",
            self.catalog_source.source_name()
        ));
        self.catalog_source.fetch_catalog().await
    }

    fn classify(
        &self,
        inventory: &Inventory,
        index: &CatalogIndex,
        request: &UpdateCheckRequest,
    ) -> Vec<MatchResult> {
        let engine = MatchingEngine::with_ignore_prefixes(&request.ignore_prefixes);
        let aggregator = ClassificationAggregator::new(&engine, &self.diagnostics);

        aggregator.classify_all_with_progress(inventory, index, |current, total, name| {
            self.progress_reporter
                .report_progress(current, total, Some(name));
        })
    }
}
