use crate::release_matching::domain::{CatalogTree, ReleaseRecord};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Catalog categories that describe installable software.
/// Everything else in the feed (`"latest"`, signatures, ...) is ignored.
pub const DEFAULT_CATEGORIES: &[&str] = &["client", "server"];

/// CatalogIndex - flat, read-only view over the nested release catalog
///
/// Keys are `"<product> <axis>"`. Records are stored in a `BTreeMap`, so
/// prefix queries are a range scan and iteration order is stable, which
/// keeps candidate selection deterministic.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    records: BTreeMap<String, ReleaseRecord>,
}

impl CatalogIndex {
    /// Builds the index from the default category allow-list
    pub fn build(tree: CatalogTree) -> Self {
        Self::build_with_categories(tree, DEFAULT_CATEGORIES)
    }

    /// Builds the index keeping only the given categories.
    ///
    /// Each record's `product` and `major_release` are overwritten with its
    /// position in the tree. If two categories carry the same product and
    /// axis, the category that sorts last wins.
    pub fn build_with_categories(tree: CatalogTree, categories: &[&str]) -> Self {
        let mut records = BTreeMap::new();

        for (category, products) in tree {
            if !categories.contains(&category.as_str()) {
                continue;
            }
            for (product, axes) in products {
                for (axis, mut record) in axes {
                    record.product = product.clone();
                    record.major_release = axis;
                    records.insert(record.catalog_key(), record);
                }
            }
        }

        Self { records }
    }

    /// Builds an index directly from records, keyed by their own product and axis
    pub fn from_records(records: impl IntoIterator<Item = ReleaseRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.catalog_key(), record))
                .collect(),
        }
    }

    /// Exact-key lookup
    pub fn get(&self, key: &str) -> Option<&ReleaseRecord> {
        self.records.get(key)
    }

    /// All records whose key starts with `prefix`, in key order
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a ReleaseRecord> + 'a {
        self.records
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(prefix))
            .map(|(_, record)| record)
    }

    /// All `(key, record)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReleaseRecord)> {
        self.records.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(version: &str) -> ReleaseRecord {
        ReleaseRecord {
            version: version.to_string(),
            stable: true,
            ..ReleaseRecord::default()
        }
    }

    fn sample_tree() -> CatalogTree {
        let mut tree = CatalogTree::new();

        let client = tree.entry("client".to_string()).or_default();
        let firefox = client.entry("Mozilla Firefox".to_string()).or_default();
        firefox.insert("91.0".to_string(), record("91.0.2"));
        firefox.insert("78.13".to_string(), record("78.13.0"));
        client
            .entry("Mozilla Thunderbird".to_string())
            .or_default()
            .insert("91.0".to_string(), record("91.0.3"));

        tree.entry("server".to_string())
            .or_default()
            .entry("OpenSSH".to_string())
            .or_default()
            .insert("8.7".to_string(), record("8.7p1"));

        tree.entry("latest".to_string())
            .or_default()
            .entry("Mozilla Firefox".to_string())
            .or_default()
            .insert("current".to_string(), record("91.0.2"));

        tree
    }

    #[test]
    fn test_build_fills_product_and_axis() {
        let index = CatalogIndex::build(sample_tree());
        let firefox = index.get("Mozilla Firefox 91.0").unwrap();

        assert_eq!(firefox.product, "Mozilla Firefox");
        assert_eq!(firefox.major_release, "91.0");
        assert_eq!(firefox.version, "91.0.2");
        assert!(firefox.stable);
    }

    #[test]
    fn test_build_filters_categories() {
        let index = CatalogIndex::build(sample_tree());

        assert_eq!(index.len(), 4);
        assert!(index.get("OpenSSH 8.7").is_some());
        assert!(index.get("Mozilla Firefox current").is_none());
    }

    #[test]
    fn test_build_with_custom_categories() {
        let index = CatalogIndex::build_with_categories(sample_tree(), &["server"]);
        assert_eq!(index.len(), 1);
        assert!(index.get("OpenSSH 8.7").is_some());
    }

    #[test]
    fn test_with_prefix_returns_all_axes() {
        let index = CatalogIndex::build(sample_tree());
        let versions: Vec<&str> = index
            .with_prefix("Mozilla Firefox ")
            .map(|r| r.version.as_str())
            .collect();

        assert_eq!(versions, vec!["78.13.0", "91.0.2"]);
    }

    #[test]
    fn test_with_prefix_stops_at_first_non_match() {
        let index = CatalogIndex::build(sample_tree());
        assert_eq!(index.with_prefix("Mozilla ").count(), 3);
        assert_eq!(index.with_prefix("Nothing").count(), 0);
    }

    #[test]
    fn test_get_missing_key() {
        let index = CatalogIndex::build(sample_tree());
        assert!(index.get("Mozilla Firefox 60.0").is_none());
    }

    #[test]
    fn test_from_records() {
        let index = CatalogIndex::from_records(vec![
            ReleaseRecord::new("OpenVPN", "2.5", "2.5.3"),
            ReleaseRecord::new("OpenVPN", "2.4", "2.4.11"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("OpenVPN 2.4").unwrap().version, "2.4.11");
        assert_eq!(index.iter().next().unwrap().0, "OpenVPN 2.4");
    }

    #[test]
    fn test_empty_index() {
        let index = CatalogIndex::build(CatalogTree::new());
        assert!(index.is_empty());
    }
}
