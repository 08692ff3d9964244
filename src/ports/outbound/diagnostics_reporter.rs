/// DiagnosticsReporter port for the classification side channel
///
/// The matching core reports what it decided through this port instead of
/// a global logger. `trace` carries per-item detail, `info` carries
/// outcomes worth showing with `-v`.
pub trait DiagnosticsReporter {
    fn trace(&self, message: &str);

    fn info(&self, message: &str);
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl DiagnosticsReporter for NoopDiagnostics {
    fn trace(&self, _message: &str) {}

    fn info(&self, _message: &str) {}
}
