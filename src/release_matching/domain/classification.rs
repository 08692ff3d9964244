use super::{InstalledComponent, ReleaseRecord};
use std::fmt;

/// Status assigned to one inventory item.
///
/// The discriminants are the sort ordinals used for reports:
/// outdated software first, then up-to-date, then everything unmatched.
/// `Unknown` is a regular outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Outdated = 0,
    UpToDate = 1,
    Unknown = 2,
}

impl Classification {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human-readable label used by the formatters
    pub fn label(self) -> &'static str {
        match self {
            Classification::Outdated => "Outdated",
            Classification::UpToDate => "Up-to-date",
            Classification::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// MatchResult: classification of one inventory item plus its evidence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Display name of the item (copied from the installed component)
    pub name: String,
    pub status: Classification,
    pub installed: InstalledComponent,
    /// Best catalog candidate; the empty record for `Unknown`
    pub matched: ReleaseRecord,
    /// Extra advice attached by a rule, e.g. for discontinued products
    pub remark: Option<String>,
}

impl MatchResult {
    pub fn new(
        installed: InstalledComponent,
        status: Classification,
        matched: ReleaseRecord,
    ) -> Self {
        Self {
            name: installed.display_name().to_string(),
            status,
            installed,
            matched,
            remark: None,
        }
    }

    /// Result for an item no rule could match
    pub fn unknown(installed: InstalledComponent) -> Self {
        Self::new(installed, Classification::Unknown, ReleaseRecord::default())
    }

    /// Overrides the reported name (the OS entry reports its family, not its lookup key)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }
}
