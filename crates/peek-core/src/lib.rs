pub mod config;
pub mod logging;

pub mod badge;
pub mod classify;
pub mod error;
pub mod preview;
pub mod registry;
pub mod scan;
pub mod session;
pub mod url_model;

pub use classify::{classify_href, matching_categories, LinkCategory};
pub use error::ScanError;
pub use scan::{scan_document, scan_html, ScanReport};
pub use session::{LinkOutcome, PageSession};
