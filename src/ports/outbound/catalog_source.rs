use crate::release_matching::domain::CatalogTree;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// A release catalog as delivered by a catalog source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDocument {
    /// Date the catalog was last regenerated, if it says so
    pub updated: Option<NaiveDate>,
    pub tree: CatalogTree,
}

impl CatalogDocument {
    pub fn new(updated: Option<NaiveDate>, tree: CatalogTree) -> Self {
        Self { updated, tree }
    }

    /// Whole days between `updated` and `today`; `None` without a date
    pub fn age_in_days(&self, today: NaiveDate) -> Option<i64> {
        self.updated.map(|updated| (today - updated).num_days())
    }
}

/// CatalogSource port for fetching the release catalog
///
/// Implementations may hit the network, read a local file, or wrap another
/// source with a cache. Freshness is the source's concern; the matching
/// core uses whatever it is given.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the current catalog
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be retrieved or parsed, or if
    /// it fails the source's own freshness requirements.
    async fn fetch_catalog(&self) -> Result<CatalogDocument>;

    /// Where the catalog comes from (URL or path), for messages
    fn source_name(&self) -> String {
        "release catalog".to_string()
    }
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Box<T> {
    async fn fetch_catalog(&self) -> Result<CatalogDocument> {
        (**self).fetch_catalog().await
    }

    fn source_name(&self) -> String {
        (**self).source_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_in_days() {
        let doc = CatalogDocument::new(NaiveDate::from_ymd_opt(2021, 8, 20), CatalogTree::new());
        let today = NaiveDate::from_ymd_opt(2021, 8, 23).unwrap();
        assert_eq!(doc.age_in_days(today), Some(3));
        assert_eq!(CatalogDocument::default().age_in_days(today), None);
    }
}
