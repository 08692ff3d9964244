use crate::shared::Result;

/// OutputPresenter port for delivering the rendered report
///
/// Abstracts the destination (stdout, a file, ...).
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination cannot be written
    /// - The target path is rejected (symlink, missing parent directory)
    fn present(&self, content: &str) -> Result<()>;
}
