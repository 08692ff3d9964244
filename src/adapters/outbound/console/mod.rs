/// Console adapters for user feedback and diagnostics
mod progress_reporter;
mod tracing_diagnostics;

pub use progress_reporter::StderrProgressReporter;
pub use tracing_diagnostics::TracingDiagnosticsReporter;
