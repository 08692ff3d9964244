use super::CatalogIndex;
use crate::release_matching::domain::{Classification, InstalledComponent, MatchResult, OsVersion};

/// The only OS major version the catalog tracks
pub const SUPPORTED_MAJOR_VERSION: u64 = 10;

/// First build number of Windows 11, which still reports major version 10
const FIRST_WINDOWS_11_BUILD: u64 = 22000;

const OS_PUBLISHER: &str = "Microsoft";

/// OsPatchLevelVerifier - classifies the host OS pseudo-entry
///
/// The OS is not matched by name. A lookup key is built from the product
/// family and the release label (`"Microsoft Windows 10 20H2"`) and the
/// catalog version must equal `"<build>.<ubr>"` exactly.
pub struct OsPatchLevelVerifier;

impl OsPatchLevelVerifier {
    pub fn product_family(os: &OsVersion) -> &'static str {
        match os.build.trim().parse::<u64>() {
            Ok(build) if build >= FIRST_WINDOWS_11_BUILD => "Microsoft Windows 11",
            _ => "Microsoft Windows 10",
        }
    }

    /// `"<family> <label>"`, or `None` when the OS carries no release label
    pub fn lookup_key(os: &OsVersion) -> Option<String> {
        os.release_label()
            .map(|label| format!("{} {}", Self::product_family(os), label))
    }

    pub fn classify(os: &OsVersion, index: &CatalogIndex) -> MatchResult {
        if os.major != SUPPORTED_MAJOR_VERSION {
            return Self::raw_evidence(os);
        }
        let Some(key) = Self::lookup_key(os) else {
            return Self::raw_evidence(os);
        };

        let family = Self::product_family(os);
        let installed = InstalledComponent::new(key.as_str(), os.patch_version(), OS_PUBLISHER);

        match index.get(&key) {
            Some(record) => {
                let status = if record.version == installed.display_version() {
                    Classification::UpToDate
                } else {
                    Classification::Outdated
                };
                MatchResult::new(installed, status, record.clone()).with_name(family)
            }
            None => MatchResult::unknown(installed).with_name(family),
        }
    }

    fn raw_evidence(os: &OsVersion) -> MatchResult {
        MatchResult::unknown(InstalledComponent::new(
            os.product_name.as_str(),
            os.build.as_str(),
            OS_PUBLISHER,
        ))
    }
}
