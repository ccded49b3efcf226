pub mod cache;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod formatters;
pub mod identifier;
pub mod parse;
pub mod profile;
#[cfg(feature = "fetch")]
pub mod scan;
pub mod xpath;

pub use cache::{DEFAULT_CACHE_DIR, PageCache};
pub use error::{Result, ShelfwiseError};
pub use extract::{ExtractConfig, PROFILE_NAME_XPATH, SHELVES_XPATH};
pub use extract::{extract_profile_name, extract_shelves, parse_shelf_label};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, FetchedPage, PageOrigin, fetch_profile, fetch_url, profile_url};
pub use formatters::{JsonConfig, JsonFormatter, NAME_NOT_FOUND, TextConfig, TextFormatter};
pub use formatters::{convert_to_json, convert_to_text};
pub use identifier::ProfileId;
pub use parse::Document;
pub use profile::{Profile, ShelfEntry};
#[cfg(feature = "fetch")]
pub use scan::{Scan, ScanConfig, scan_html, scan_profile};
pub use xpath::XPathEvaluator;
