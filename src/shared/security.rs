use crate::shared::Result;
use anyhow::{bail, Context};
use std::fs::{self, Metadata};
use std::path::Path;

/// Upper bound for an inventory snapshot or catalog document (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Metadata of the path itself, without following a symbolic link
fn link_metadata(path: &Path, what: &str) -> Result<Metadata> {
    fs::symlink_metadata(path)
        .with_context(|| format!("Cannot inspect {} at {}", what, path.display()))
}

fn reject_symlink(metadata: &Metadata, path: &Path, what: &str) -> Result<()> {
    if metadata.is_symlink() {
        bail!(
            "Security: refusing to use {} {} because it is a symbolic link",
            what,
            path.display()
        );
    }
    Ok(())
}

/// Fails when `path` is a symbolic link or cannot be inspected.
///
/// Writers call this only for paths that already exist.
pub fn validate_not_symlink(path: &Path, what: &str) -> Result<()> {
    let metadata = link_metadata(path, what)?;
    reject_symlink(&metadata, path, what)
}

/// Reads an input document after checking it is a regular file within
/// [`MAX_FILE_SIZE`]. Symbolic links are refused rather than followed.
pub fn read_checked_file(path: &Path, what: &str) -> Result<String> {
    let metadata = link_metadata(path, what)?;
    reject_symlink(&metadata, path, what)?;

    if !metadata.is_file() {
        bail!("The {} {} is not a regular file", what, path.display());
    }
    if metadata.len() > MAX_FILE_SIZE {
        bail!(
            "Security: the {} {} is too large ({} bytes, limit {} bytes)",
            what,
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE
        );
    }

    fs::read_to_string(path).with_context(|| format!("Cannot read {} {}", what, path.display()))
}
