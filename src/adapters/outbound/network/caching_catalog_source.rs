use crate::adapters::outbound::filesystem::FileCatalogSource;
use crate::adapters::outbound::vergrabber_document::render_document;
use crate::ports::outbound::{CatalogDocument, CatalogSource};
use crate::shared::error::UpdateCheckError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// Default cache file, next to the working directory
pub const DEFAULT_CACHE_FILE: &str = "vergrabber.json";

/// Catalogs older than this many days are refreshed
pub const DEFAULT_MAX_AGE_DAYS: i64 = 2;

/// CachingCatalogSource wraps a CatalogSource with an on-disk copy.
///
/// The cached document is used while its `updated` date is at most
/// `max_age_days` old. Otherwise the inner source is asked, and its answer
/// replaces the cache. A download without an update date is refused, since
/// nothing can be said about its freshness. A download that is itself too
/// old is still used, with a warning: it is the best data available.
pub struct CachingCatalogSource<S: CatalogSource> {
    inner: S,
    cache: FileCatalogSource,
    max_age_days: i64,
    today: Option<NaiveDate>,
}

impl<S: CatalogSource> CachingCatalogSource<S> {
    pub fn new(inner: S, cache_path: PathBuf, max_age_days: i64) -> Self {
        Self {
            inner,
            cache: FileCatalogSource::new(cache_path),
            max_age_days,
            today: None,
        }
    }

    /// Pins the reference date used for freshness checks
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Cached document if it exists, parses and is fresh enough
    fn fresh_cached_copy(&self, today: NaiveDate) -> Option<CatalogDocument> {
        if !self.cache.path().exists() {
            tracing::debug!(path = %self.cache.path().display(), "no cached catalog");
            return None;
        }

        let cached = match self.cache.read_document() {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("Ignoring unreadable cached catalog: {}", e);
                return None;
            }
        };

        match cached.age_in_days(today) {
            Some(age) if age <= self.max_age_days => {
                tracing::debug!(age, "using cached catalog");
                Some(cached)
            }
            Some(age) => {
                tracing::info!(age, "cached catalog is stale, refreshing");
                None
            }
            None => {
                tracing::info!("cached catalog has no update date, refreshing");
                None
            }
        }
    }

    fn write_cache(&self, document: &CatalogDocument) -> Result<()> {
        let path = self.cache.path();
        if fs::symlink_metadata(path).is_ok() {
            validate_not_symlink(path, "catalog cache")?;
        }
        fs::write(path, render_document(document)?)?;
        Ok(())
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for CachingCatalogSource<S> {
    async fn fetch_catalog(&self) -> Result<CatalogDocument> {
        let today = self.today();
        if let Some(cached) = self.fresh_cached_copy(today) {
            return Ok(cached);
        }

        let fresh = self.inner.fetch_catalog().await?;
        let Some(age) = fresh.age_in_days(today) else {
            return Err(UpdateCheckError::CatalogOutdated {
                source_name: self.inner.source_name(),
                reason: "the downloaded catalog carries no update date".to_string(),
            }
            .into());
        };

        if age > self.max_age_days {
            tracing::warn!(
                "Downloaded catalog is {} days old (limit {}); results may be inaccurate",
                age,
                self.max_age_days
            );
        }

        if let Err(e) = self.write_cache(&fresh) {
            tracing::warn!(
                "Could not update catalog cache {}: {}",
                self.cache.path().display(),
                e
            );
        }

        Ok(fresh)
    }

    fn source_name(&self) -> String {
        self.inner.source_name()
    }
}
