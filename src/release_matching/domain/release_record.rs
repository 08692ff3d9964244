use std::collections::BTreeMap;

/// Nested catalog as delivered by the catalog source:
/// category (`"client"`, `"server"`, ...) → product → version axis → record.
///
/// Records inside the tree do not know their own product or axis; the
/// catalog index fills those in from their position.
pub type CatalogTree = BTreeMap<String, BTreeMap<String, BTreeMap<String, ReleaseRecord>>>;

/// ReleaseRecord: the current release of one product along one version axis
///
/// `major_release` is the catalog's axis and is not necessarily a major
/// version: it may be a minor line (`"91.0"`), a year, or a platform tag
/// such as `"20H2"`. One product can have several axes at once (an ESR line
/// next to the rapid-release line), so the same product name appears under
/// several catalog keys.
///
/// `Default` is the empty record carried by `Unknown` results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub product: String,
    pub major_release: String,
    /// Authoritative current version for this axis
    pub version: String,
    pub stable: bool,
    pub latest: bool,
    pub released: String,
    pub ends: String,
    pub edition: String,
}

impl ReleaseRecord {
    /// Creates a record with the identifying fields set and everything else empty
    pub fn new(
        product: impl Into<String>,
        major_release: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            major_release: major_release.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Catalog lookup key: `"<product> <major_release>"`
    pub fn catalog_key(&self) -> String {
        format!("{} {}", self.product, self.major_release)
    }

    pub fn is_empty(&self) -> bool {
        self.product.is_empty() && self.version.is_empty()
    }
}
