use std::sync::{Arc, Mutex};
use update_checker::prelude::*;

/// Mock DiagnosticsReporter for testing that captures messages by level
#[derive(Default, Clone)]
pub struct MockDiagnosticsReporter {
    pub trace_messages: Arc<Mutex<Vec<String>>>,
    pub info_messages: Arc<Mutex<Vec<String>>>,
}

impl MockDiagnosticsReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_trace_messages(&self) -> Vec<String> {
        self.trace_messages.lock().unwrap().clone()
    }

    pub fn get_info_messages(&self) -> Vec<String> {
        self.info_messages.lock().unwrap().clone()
    }
}

impl DiagnosticsReporter for MockDiagnosticsReporter {
    fn trace(&self, message: &str) {
        self.trace_messages.lock().unwrap().push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.info_messages.lock().unwrap().push(message.to_string());
    }
}
