/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the application core calls out to
/// inventory and catalog sources, diagnostics, progress and presentation.
pub mod outbound;
