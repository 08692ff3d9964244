use crate::ports::outbound::DiagnosticsReporter;

/// TracingDiagnosticsReporter adapter forwarding classification
/// diagnostics to `tracing` (`trace` → DEBUG, `info` → INFO)
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnosticsReporter;

impl TracingDiagnosticsReporter {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticsReporter for TracingDiagnosticsReporter {
    fn trace(&self, message: &str) {
        tracing::debug!(target: "update_checker::classification", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "update_checker::classification", "{}", message);
    }
}
