pub mod classification;
pub mod installed_component;
pub mod inventory;
pub mod os_version;
pub mod release_record;

pub use classification::{Classification, MatchResult};
pub use installed_component::InstalledComponent;
pub use inventory::Inventory;
pub use os_version::OsVersion;
pub use release_record::{CatalogTree, ReleaseRecord};
