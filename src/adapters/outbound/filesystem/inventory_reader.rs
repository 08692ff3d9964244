use crate::ports::outbound::InventorySource;
use crate::release_matching::domain::{InstalledComponent, Inventory, OsVersion};
use crate::shared::error::UpdateCheckError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Registry values, as exported from `HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OperatingSystemSnapshot {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    current_major_version_number: u64,
    #[serde(default)]
    current_minor_version_number: u64,
    #[serde(default)]
    current_build: Option<StringOrNumber>,
    #[serde(default, rename = "UBR")]
    ubr: u64,
    #[serde(default)]
    display_version: Option<String>,
    #[serde(default)]
    release_id: Option<String>,
}

/// One entry of the uninstall registry keys
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SoftwareSnapshot {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    display_version: Option<String>,
    #[serde(default)]
    publisher: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InventorySnapshot {
    operating_system: OperatingSystemSnapshot,
    #[serde(default)]
    software: Vec<SoftwareSnapshot>,
}

/// `CurrentBuild` is a string in the registry but some exporters emit a number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(u64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::Text(text) => text,
            StringOrNumber::Number(number) => number.to_string(),
        }
    }
}

impl From<OperatingSystemSnapshot> for OsVersion {
    fn from(os: OperatingSystemSnapshot) -> Self {
        Self {
            product_name: os.product_name.unwrap_or_default(),
            major: os.current_major_version_number,
            minor: os.current_minor_version_number,
            build: os.current_build.map(StringOrNumber::into_string).unwrap_or_default(),
            ubr: os.ubr,
            display_version: os.display_version,
            release_id: os.release_id,
        }
    }
}

/// JsonInventoryReader adapter for inventory snapshots on disk
///
/// Reads a JSON export of the Windows registry:
///
/// ```json
/// {
///   "OperatingSystem": { "ProductName": "Windows 10 Pro", "CurrentMajorVersionNumber": 10,
///                        "CurrentMinorVersionNumber": 0, "CurrentBuild": "19042",
///                        "UBR": 1466, "DisplayVersion": "20H2", "ReleaseId": "2009" },
///   "Software": [ { "DisplayName": "Mozilla Firefox 91.0 (x64 en-US)",
///                   "DisplayVersion": "91.0", "Publisher": "Mozilla" } ]
/// }
/// ```
///
/// Uninstall entries without a `DisplayName` are skipped, as Windows does
/// in "Programs and Features".
pub struct JsonInventoryReader {
    path: PathBuf,
}

impl JsonInventoryReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn parse(&self, content: &str) -> Result<Inventory> {
        let snapshot: InventorySnapshot =
            serde_json::from_str(content).map_err(|e| UpdateCheckError::InventoryParseError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        let software = snapshot
            .software
            .into_iter()
            .filter_map(|entry| {
                let name = entry.display_name.filter(|n| !n.trim().is_empty())?;
                Some(InstalledComponent::new(
                    name,
                    entry.display_version.unwrap_or_default(),
                    entry.publisher.unwrap_or_default(),
                ))
            })
            .collect();

        Ok(Inventory::new(snapshot.operating_system.into(), software))
    }
}

impl InventorySource for JsonInventoryReader {
    fn read_inventory(&self) -> Result<Inventory> {
        if !self.path.exists() {
            return Err(UpdateCheckError::InventoryNotFound {
                path: self.path.clone(),
                suggestion: "Export the inventory first, or point to the snapshot with --inventory"
                    .to_string(),
            }
            .into());
        }

        let content = read_checked_file(&self.path, "inventory").map_err(|e| {
            UpdateCheckError::InventoryParseError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        self.parse(&content)
    }
}
