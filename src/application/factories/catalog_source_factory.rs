use crate::adapters::outbound::filesystem::FileCatalogSource;
use crate::adapters::outbound::network::{CachingCatalogSource, VergrabberClient};
use crate::ports::outbound::CatalogSource;
use crate::shared::Result;
use std::path::PathBuf;

/// Where the release catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSourceType {
    /// A local vergrabber.json, used as-is
    File(PathBuf),
    /// The vergrabber feed, behind an on-disk cache
    Remote {
        url: String,
        cache_file: PathBuf,
        max_age_days: i64,
    },
}

/// Factory for creating catalog sources
pub struct CatalogSourceFactory;

impl CatalogSourceFactory {
    /// Creates a catalog source for the specified type
    ///
    /// # Errors
    /// Returns an error if the remote URL is invalid or the HTTP client cannot be built
    pub fn create(source_type: CatalogSourceType) -> Result<Box<dyn CatalogSource>> {
        match source_type {
            CatalogSourceType::File(path) => Ok(Box::new(FileCatalogSource::new(path))),
            CatalogSourceType::Remote {
                url,
                cache_file,
                max_age_days,
            } => {
                let client = VergrabberClient::with_url(url)?;
                Ok(Box::new(CachingCatalogSource::new(
                    client,
                    cache_file,
                    max_age_days,
                )))
            }
        }
    }
}
