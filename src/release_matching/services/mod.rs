mod catalog_index;
mod classification_aggregator;
mod matching_engine;
mod os_verifier;
mod version_comparator;

pub use catalog_index::{CatalogIndex, DEFAULT_CATEGORIES};
pub use classification_aggregator::{sort_results, ClassificationAggregator};
pub use matching_engine::{select_candidate, MatchingEngine};
pub use os_verifier::{OsPatchLevelVerifier, SUPPORTED_MAJOR_VERSION};
pub use version_comparator::{VersionComparator, VersionParseError};
