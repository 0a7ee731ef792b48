//! Remote source documents

use toml::Table;
use tracing::debug;

use crate::error::{Error, Result};
use crate::merge::parse_document;

/// Whether a source reference should be fetched over the network.
pub fn is_url(reference: &str) -> bool {
    reference.starts_with("http:") || reference.starts_with("https:")
}

/// Retrieve the full response body from `url` and parse it as TOML.
///
/// One blocking GET with no retries and no timeout beyond the transport's
/// own. Transport failures and non-success HTTP statuses are both
/// [`Error::SourceUnavailable`]; a body that is not valid TOML is
/// [`Error::Parse`].
pub fn fetch_url(url: &str) -> Result<Table> {
    debug!(url, "fetching remote source");
    let body = get_text(url).map_err(|cause| Error::SourceUnavailable {
        reference: url.to_string(),
        cause: Box::new(cause),
    })?;
    parse_document(&body, url)
}

fn get_text(url: &str) -> std::result::Result<String, reqwest::Error> {
    reqwest::blocking::get(url)?.error_for_status()?.text()
}
