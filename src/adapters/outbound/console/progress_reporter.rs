use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {wide_msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Status lines go straight to stderr; classification progress is drawn as
/// an indicatif bar that is created on first use and cleared when a phase
/// completes or fails. indicatif hides the bar when stderr is not a terminal.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: false,
        }
    }

    /// Reporter that prints nothing except errors
    pub fn quiet() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: true,
        }
    }

    fn bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        slot.get_or_insert_with(|| {
            let style = ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-");
            let bar = ProgressBar::new(total as u64);
            bar.set_style(style);
            bar
        })
        .clone()
    }

    fn clear_bar(&self) {
        if let Some(bar) = self.progress_bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let bar = self.bar(total);
        bar.set_position(current as u64);
        if let Some(message) = message {
            bar.set_message(message.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}
