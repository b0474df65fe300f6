//! HTML-tree queries and the structural extractor for the status page.

pub mod dom;
pub mod status;

pub use status::{extract_status, ExtractError};
