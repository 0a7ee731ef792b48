//! Local source documents

use std::fs;
use std::path::Path;

use toml::Table;
use tracing::debug;

use crate::error::{Error, Result};
use crate::merge::parse_document;

/// Read and parse a TOML document from the filesystem.
///
/// A file that cannot be opened or read is [`Error::SourceUnavailable`];
/// content that is not valid TOML is [`Error::Parse`].
pub fn read_document(path: &Path) -> Result<Table> {
    debug!(path = %path.display(), "reading local source");
    let text = fs::read_to_string(path).map_err(|cause| Error::SourceUnavailable {
        reference: path.display().to_string(),
        cause: Box::new(cause),
    })?;
    parse_document(&text, &path.display().to_string())
}
