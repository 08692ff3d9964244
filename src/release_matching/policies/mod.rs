mod equality_policy;
mod ignore_list;
mod vendor_rules;
mod version_axis;

pub use equality_policy::EqualityPolicy;
pub use ignore_list::IgnoreList;
pub use vendor_rules::{RuleKind, VendorRule, VendorRuleTable, DISCONTINUED_REMARK};
pub use version_axis::VersionAxis;
