use super::{InstalledComponent, OsVersion};

/// Inventory: everything observed on one host in one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub os: OsVersion,
    /// Installed software in scan order; the order breaks ties when sorting results
    pub software: Vec<InstalledComponent>,
}

impl Inventory {
    pub fn new(os: OsVersion, software: Vec<InstalledComponent>) -> Self {
        Self { os, software }
    }

    pub fn len(&self) -> usize {
        self.software.len()
    }

    pub fn is_empty(&self) -> bool {
        self.software.is_empty()
    }
}
