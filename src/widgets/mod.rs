// Metadata bindings.
// Each binding pairs a cache key and a payload extractor with the shared fetcher.

pub mod stars;
pub mod version;

pub use stars::{extract_stars, star_count, stars_key};
pub use version::{VersionFormat, extract_version, latest_version, version_key};
