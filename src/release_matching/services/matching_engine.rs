use super::{CatalogIndex, VersionComparator};
use crate::release_matching::domain::{
    Classification, InstalledComponent, MatchResult, ReleaseRecord,
};
use crate::release_matching::policies::{
    EqualityPolicy, IgnoreList, RuleKind, VendorRule, VendorRuleTable,
};
use std::ops::ControlFlow;

/// Picks the best candidate for an installed version.
///
/// Walks `candidates` in order. A candidate that already satisfies `policy`
/// wins immediately and ends the walk. Otherwise a candidate replaces the
/// current best only when its version is strictly higher, so the result is
/// the highest version seen (the first one on ties).
pub fn select_candidate<'a, I>(
    candidates: I,
    installed_version: &str,
    policy: EqualityPolicy,
) -> Option<&'a ReleaseRecord>
where
    I: IntoIterator<Item = &'a ReleaseRecord>,
{
    let outcome = candidates.into_iter().try_fold(
        None,
        |best: Option<&'a ReleaseRecord>, candidate| {
            if policy.matches(installed_version, &candidate.version) {
                return ControlFlow::Break(candidate);
            }
            match best {
                Some(current) if !VersionComparator::is_higher(&candidate.version, &current.version) => {
                    ControlFlow::Continue(Some(current))
                }
                _ => ControlFlow::Continue(Some(candidate)),
            }
        },
    );

    match outcome {
        ControlFlow::Break(exact) => Some(exact),
        ControlFlow::Continue(best) => best,
    }
}

/// MatchingEngine - classifies one installed component against the catalog
///
/// Rules are layered and the first layer that claims an item decides it:
/// 1. ignore list: no result at all
/// 2. vendor rule table (special vendors, then the generic vendor list)
/// 3. catalog-wide name scan
///
/// The engine is stateless between calls and never fails; an item nothing
/// claims comes back as `Unknown`.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    ignore_list: IgnoreList,
    rules: VendorRuleTable,
}

impl MatchingEngine {
    pub fn new(ignore_list: IgnoreList, rules: VendorRuleTable) -> Self {
        Self { ignore_list, rules }
    }

    /// Default vendor rules with extra ignore prefixes on top of the defaults
    pub fn with_ignore_prefixes(prefixes: &[String]) -> Self {
        Self::new(IgnoreList::with_additional(prefixes), VendorRuleTable::default())
    }

    pub fn is_ignored(&self, installed: &InstalledComponent) -> bool {
        self.ignore_list.is_ignored(installed.display_name())
    }

    /// Classifies `installed`, or returns `None` when the ignore list drops it
    pub fn classify(
        &self,
        installed: &InstalledComponent,
        index: &CatalogIndex,
    ) -> Option<MatchResult> {
        if self.is_ignored(installed) {
            return None;
        }

        let result = match self.rules.find(installed.display_name()) {
            Some(rule) => Self::classify_with_rule(installed.clone(), rule, index),
            None => Self::classify_by_name(installed.clone(), index),
        };
        Some(result)
    }

    fn classify_with_rule(
        installed: InstalledComponent,
        rule: &VendorRule,
        index: &CatalogIndex,
    ) -> MatchResult {
        match rule.kind() {
            RuleKind::Discontinued { remark } => {
                let matched = ReleaseRecord {
                    product: rule.vendor().to_string(),
                    ..ReleaseRecord::default()
                };
                MatchResult::new(installed, Classification::Outdated, matched)
                    .with_remark(remark.clone())
            }
            RuleKind::Lookup { policy, .. } => {
                let version = installed.display_version();
                let prefix = rule.scan_prefix();

                let direct = rule
                    .candidate_keys(version)
                    .iter()
                    .find_map(|key| index.get(key));

                let best = match direct {
                    Some(record) => Some(record),
                    None => select_candidate(
                        index
                            .with_prefix(&prefix)
                            .filter(|record| record.product == rule.vendor()),
                        version,
                        *policy,
                    ),
                };

                Self::resolve(installed, best, *policy)
            }
        }
    }

    /// Last resort for items no vendor rule claims: every catalog product
    /// whose name contains, or is contained in, the display name up to its
    /// first `.` is a candidate. Versions must match exactly.
    fn classify_by_name(installed: InstalledComponent, index: &CatalogIndex) -> MatchResult {
        let search_name = Self::search_name(installed.display_name());
        if search_name.is_empty() {
            return MatchResult::unknown(installed);
        }

        let candidates = index.iter().map(|(_, record)| record).filter(|record| {
            !record.product.is_empty()
                && (record.product.contains(search_name) || search_name.contains(&record.product))
        });

        let best = select_candidate(candidates, installed.display_version(), EqualityPolicy::Exact);
        Self::resolve(installed, best, EqualityPolicy::Exact)
    }

    fn search_name(display_name: &str) -> &str {
        display_name
            .split('.')
            .next()
            .unwrap_or_default()
            .trim()
    }

    fn resolve(
        installed: InstalledComponent,
        best: Option<&ReleaseRecord>,
        policy: EqualityPolicy,
    ) -> MatchResult {
        let Some(record) = best else {
            return MatchResult::unknown(installed);
        };

        let status = if policy.matches(installed.display_version(), &record.version) {
            Classification::UpToDate
        } else {
            Classification::Outdated
        };
        MatchResult::new(installed, status, record.clone())
    }
}
