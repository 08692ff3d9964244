use crate::release_matching::services::VersionComparator;

/// EqualityPolicy - what counts as "installed version is the current one"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EqualityPolicy {
    /// `VersionComparator::compare(installed, current) == Equal`
    Comparator,
    /// One version string is a prefix of the other, in either direction.
    /// Catalogs often publish `"91.0"` for an installed `"91.0.1"`, or the reverse.
    PrefixContainment,
    /// Byte-for-byte string equality
    Exact,
}

impl EqualityPolicy {
    /// Empty versions never match under any policy
    pub fn matches(self, installed: &str, current: &str) -> bool {
        if installed.is_empty() || current.is_empty() {
            return false;
        }

        match self {
            EqualityPolicy::Comparator => VersionComparator::is_same(installed, current),
            EqualityPolicy::PrefixContainment => {
                installed.starts_with(current) || current.starts_with(installed)
            }
            EqualityPolicy::Exact => installed == current,
        }
    }
}
