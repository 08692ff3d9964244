use update_checker::prelude::*;

/// Mock InventorySource for testing
pub struct MockInventorySource {
    os: OsVersion,
    software: Vec<InstalledComponent>,
    should_fail: bool,
}

impl MockInventorySource {
    /// Windows 10 20H2 with build 19042.1466 and no software
    pub fn new() -> Self {
        Self {
            os: OsVersion {
                product_name: "Windows 10 Pro".to_string(),
                major: 10,
                minor: 0,
                build: "19042".to_string(),
                ubr: 1466,
                display_version: Some("20H2".to_string()),
                release_id: Some("2009".to_string()),
            },
            software: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_os(mut self, os: OsVersion) -> Self {
        self.os = os;
        self
    }

    pub fn with_software(mut self, name: &str, version: &str, publisher: &str) -> Self {
        self.software
            .push(InstalledComponent::new(name, version, publisher));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

impl InventorySource for MockInventorySource {
    fn read_inventory(&self) -> Result<Inventory> {
        if self.should_fail {
            anyhow::bail!("Mock inventory failure");
        }
        Ok(Inventory::new(self.os.clone(), self.software.clone()))
    }
}
