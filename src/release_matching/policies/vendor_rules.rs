use super::{EqualityPolicy, VersionAxis};

/// Remark attached to products that are no longer maintained
pub const DISCONTINUED_REMARK: &str = "End of life - please uninstall";

/// Vendors with their own axis derivation or lifecycle handling.
/// Evaluated before the generic list.
const SPECIAL_VENDORS: &[(&str, SpecialKind)] = &[
    ("Adobe Flash Player", SpecialKind::Discontinued),
    ("Mozilla Firefox", SpecialKind::Axis(VersionAxis::MajorMinor)),
    ("Mozilla Thunderbird", SpecialKind::Axis(VersionAxis::MajorMinor)),
    ("OpenVPN", SpecialKind::Axis(VersionAxis::MajorMinorPatch)),
];

/// Vendors matched with the generic cascade: `major.minor` key, `major` key,
/// then a scan over every axis of the product.
const GENERIC_VENDORS: &[&str] = &[
    "Google Chrome",
    "TeamViewer",
    "7-Zip",
    "Notepad++",
    "VLC media player",
    "KeePass",
    "PuTTY",
    "WinSCP",
    "LibreOffice",
    "Adobe Acrobat Reader DC",
    "Oracle VM VirtualBox",
    "Wireshark",
    "GIMP",
    "Git",
    "FileZilla Client",
];

#[derive(Debug, Clone, Copy)]
enum SpecialKind {
    Discontinued,
    Axis(VersionAxis),
}

/// What a vendor rule does once it claims an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Always `Outdated`, whatever the catalog says
    Discontinued { remark: String },
    /// Direct key lookups for each axis in order, then a scan over all
    /// records of the vendor
    Lookup {
        axes: Vec<VersionAxis>,
        policy: EqualityPolicy,
    },
}

/// VendorRule - one row of the vendor table
///
/// A rule claims an item when the display name starts with the vendor name
/// (ASCII case-insensitive) and the next character is not alphanumeric, so
/// `"Git"` claims `"Git version 2.33.0"` but not `"GitHub Desktop"`.
/// Catalog lookups always use the rule's own spelling of the vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRule {
    vendor: String,
    kind: RuleKind,
}

impl VendorRule {
    pub fn discontinued(vendor: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            kind: RuleKind::Discontinued {
                remark: DISCONTINUED_REMARK.to_string(),
            },
        }
    }

    pub fn lookup(vendor: impl Into<String>, axes: Vec<VersionAxis>, policy: EqualityPolicy) -> Self {
        Self {
            vendor: vendor.into(),
            kind: RuleKind::Lookup { axes, policy },
        }
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    pub fn applies_to(&self, display_name: &str) -> bool {
        let name = display_name.trim_start();
        let len = self.vendor.len();

        match name.get(..len) {
            Some(head) if head.eq_ignore_ascii_case(&self.vendor) => name[len..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric()),
            _ => false,
        }
    }

    /// Direct lookup keys for `installed_version`, most specific first.
    /// Axes the version is too short for are skipped; duplicates are dropped.
    pub fn candidate_keys(&self, installed_version: &str) -> Vec<String> {
        let RuleKind::Lookup { axes, .. } = &self.kind else {
            return Vec::new();
        };

        let mut keys: Vec<String> = Vec::with_capacity(axes.len());
        for axis in axes {
            if let Some(value) = axis.derive(installed_version) {
                let key = format!("{} {}", self.vendor, value);
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        keys
    }

    /// Key prefix shared by every axis of this vendor
    pub fn scan_prefix(&self) -> String {
        format!("{} ", self.vendor)
    }
}

/// VendorRuleTable - ordered vendor rules; the first rule that applies wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRuleTable {
    rules: Vec<VendorRule>,
}

impl VendorRuleTable {
    pub fn new(rules: Vec<VendorRule>) -> Self {
        Self { rules }
    }

    /// Vendors with bespoke handling, compared with the version comparator
    pub fn special_rules() -> Vec<VendorRule> {
        SPECIAL_VENDORS
            .iter()
            .map(|(vendor, kind)| match kind {
                SpecialKind::Discontinued => VendorRule::discontinued(*vendor),
                SpecialKind::Axis(axis) => {
                    VendorRule::lookup(*vendor, vec![*axis], EqualityPolicy::Comparator)
                }
            })
            .collect()
    }

    /// Vendors compared by version prefix containment
    pub fn generic_rules() -> Vec<VendorRule> {
        GENERIC_VENDORS
            .iter()
            .map(|vendor| {
                VendorRule::lookup(
                    *vendor,
                    vec![VersionAxis::MajorMinor, VersionAxis::Major],
                    EqualityPolicy::PrefixContainment,
                )
            })
            .collect()
    }

    pub fn find(&self, display_name: &str) -> Option<&VendorRule> {
        self.rules.iter().find(|rule| rule.applies_to(display_name))
    }

    pub fn rules(&self) -> &[VendorRule] {
        &self.rules
    }
}

impl Default for VendorRuleTable {
    fn default() -> Self {
        let mut rules = Self::special_rules();
        rules.extend(Self::generic_rules());
        Self::new(rules)
    }
}
