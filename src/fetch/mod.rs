//! Source document fetching (local files, HTTP URLs)

use std::path::Path;

use toml::Table;

use crate::error::Result;

pub mod local;
pub mod remote;

/// Fetch and parse a source document.
///
/// Dispatches on the shape of `reference`:
/// - `http:` / `https:` prefix → [`remote::fetch_url`]
/// - anything else → [`local::read_document`]
pub fn fetch_document(reference: &str) -> Result<Table> {
    if remote::is_url(reference) {
        remote::fetch_url(reference)
    } else {
        local::read_document(Path::new(reference))
    }
}
