/// Network adapters for fetching the release catalog
mod caching_catalog_source;
mod vergrabber_client;

pub use caching_catalog_source::{CachingCatalogSource, DEFAULT_CACHE_FILE, DEFAULT_MAX_AGE_DAYS};
pub use vergrabber_client::{VergrabberClient, DEFAULT_VERGRABBER_URL};
