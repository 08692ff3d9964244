/// Display-name prefixes of helper components that are never reported
const DEFAULT_IGNORED_PREFIXES: &[&str] = &["Java Auto Updater"];

/// IgnoreList policy - drops known noise before any matching happens
///
/// Ignored items produce no result at all (they are not `Unknown`).
/// Matching is a case-sensitive prefix test on the display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreList {
    prefixes: Vec<String>,
}

impl IgnoreList {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Default prefixes plus `additional` ones (blank entries are dropped)
    pub fn with_additional(additional: &[String]) -> Self {
        let mut list = Self::default();
        list.prefixes.extend(
            additional
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(String::from),
        );
        list
    }

    pub fn is_ignored(&self, display_name: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| display_name.starts_with(prefix.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::new(
            DEFAULT_IGNORED_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        )
    }
}
