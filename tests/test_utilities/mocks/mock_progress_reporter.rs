use std::sync::{Arc, Mutex};
use update_checker::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Status(String),
    Item {
        current: usize,
        total: usize,
        name: Option<String>,
    },
    Error(String),
    Completed(String),
}

/// Records every progress call so tests can assert on the sequence
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// `(current, total)` of each per-item step, in order
    pub fn item_steps(&self) -> Vec<(usize, usize)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Item { current, total, .. } => Some((current, total)),
                _ => None,
            })
            .collect()
    }

    pub fn completion(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|event| match event {
            ProgressEvent::Completed(message) => Some(message),
            _ => None,
        })
    }

    fn push(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(ProgressEvent::Status(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(ProgressEvent::Item {
            current,
            total,
            name: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(ProgressEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(ProgressEvent::Completed(message.to_string()));
    }
}
