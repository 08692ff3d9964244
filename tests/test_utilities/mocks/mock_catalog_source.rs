use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use update_checker::prelude::*;

/// Mock CatalogSource for testing that counts fetches
pub struct MockCatalogSource {
    document: CatalogDocument,
    should_fail: bool,
    fetch_count: Arc<AtomicUsize>,
}

impl MockCatalogSource {
    pub fn new() -> Self {
        Self {
            document: CatalogDocument::new(NaiveDate::from_ymd_opt(2021, 8, 23), CatalogTree::new()),
            should_fail: false,
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Adds a record under `category / product / axis`
    pub fn with_release(mut self, category: &str, product: &str, axis: &str, version: &str) -> Self {
        self.document
            .tree
            .entry(category.to_string())
            .or_default()
            .entry(product.to_string())
            .or_default()
            .insert(axis.to_string(), ReleaseRecord::new("", "", version));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    /// Shared counter that stays readable after the mock is moved into a use case
    pub fn fetch_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetch_count)
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_catalog(&self) -> Result<CatalogDocument> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock catalog failure");
        }
        Ok(self.document.clone())
    }

    fn source_name(&self) -> String {
        "mock catalog".to_string()
    }
}
