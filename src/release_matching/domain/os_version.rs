/// OsVersion: the host operating system's version descriptor
///
/// Mirrors the registry values under `HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion`.
/// `display_version` (`"20H2"`, `"21H1"`) replaced `release_id` (`"2004"`,
/// `"2009"`) in newer builds; either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsVersion {
    pub product_name: String,
    pub major: u64,
    pub minor: u64,
    pub build: String,
    /// Update build revision
    pub ubr: u64,
    pub display_version: Option<String>,
    pub release_id: Option<String>,
}

impl OsVersion {
    /// Human-readable release label: `display_version` if set, else `release_id`
    pub fn release_label(&self) -> Option<&str> {
        non_empty(self.display_version.as_deref()).or_else(|| non_empty(self.release_id.as_deref()))
    }

    /// `"<build>.<ubr>"`, the string the catalog carries as the current version
    pub fn patch_version(&self) -> String {
        format!("{}.{}", self.build, self.ubr)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
