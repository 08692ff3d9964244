/// Mock implementations for testing
mod mock_catalog_source;
mod mock_diagnostics_reporter;
mod mock_inventory_source;
mod mock_progress_reporter;

pub use mock_catalog_source::MockCatalogSource;
pub use mock_diagnostics_reporter::MockDiagnosticsReporter;
pub use mock_inventory_source::MockInventorySource;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
