/// ProgressReporter port for user-facing progress
///
/// Keeps the user informed while the inventory is read, the catalog is
/// fetched and items are classified. Output goes to stderr so stdout stays
/// clean for the report.
pub trait ProgressReporter {
    /// Reports a one-line status message
    fn report(&self, message: &str);

    /// Reports progress through the inventory
    ///
    /// # Arguments
    /// * `current` - Number of items classified so far
    /// * `total` - Number of items to classify
    /// * `message` - Optional detail, usually the current item name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem
    fn report_error(&self, message: &str);

    /// Reports that a phase has finished
    fn report_completion(&self, message: &str);
}
