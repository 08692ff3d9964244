use crate::adapters::outbound::vergrabber_document::parse_document;
use crate::ports::outbound::{CatalogDocument, CatalogSource};
use crate::shared::error::UpdateCheckError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// FileCatalogSource adapter for a local vergrabber.json
///
/// The file is used as-is: no freshness check, no network access.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file synchronously
    pub fn read_document(&self) -> Result<CatalogDocument> {
        let content = read_checked_file(&self.path, "release catalog").map_err(|e| {
            UpdateCheckError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;
        parse_document(&content, &self.source_name())
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch_catalog(&self) -> Result<CatalogDocument> {
        self.read_document()
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
