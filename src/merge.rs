//! Document merging under an optional tool-name filter
//!
//! A document is a `toml::Table`; its top-level `[tool]` table holds one
//! subtree per configurable tool (`[tool.ruff]`, `[tool.mypy]`, ...).
//! Merging is a single shallow union at the document's top level: the payload
//! wins wholesale on key collision, nested tables are never deep-merged.

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Top-level key under which per-tool configuration subtrees live.
pub const TOOL_SECTION: &str = "tool";

/// Outcome of a [`merge_into`] call.
#[derive(Debug)]
pub enum MergeOutcome {
    /// Dry run: the rendered payload; the target was not touched.
    Preview(String),
    /// The merged document was written to the target.
    Written { path: PathBuf },
}

/// Shallow union of two documents.
///
/// Every top-level key of `payload` is copied into `target`, replacing any
/// existing value wholesale: a colliding `[tool]` table is swapped out
/// entirely, not merged entry by entry.
pub fn merge_tables(mut target: Table, payload: Table) -> Table {
    for (key, value) in payload {
        target.insert(key, value);
    }
    target
}

/// Restrict `source` to `{ tool: { name: subtree, ... } }` for the names in
/// `tools`.
///
/// Entries of the source's `[tool]` table not named by the filter are
/// dropped, keys outside `[tool]` are dropped entirely, and filter names the
/// source does not define are ignored. Surviving entries keep their source
/// order.
pub fn filter_tools(source: &Table, tools: &[String]) -> Table {
    let mut section = Table::new();
    if let Some(Value::Table(tool_table)) = source.get(TOOL_SECTION) {
        for (name, subtree) in tool_table {
            if tools.iter().any(|t| t == name) {
                section.insert(name.clone(), subtree.clone());
            }
        }
    }
    let mut payload = Table::new();
    payload.insert(TOOL_SECTION.to_string(), Value::Table(section));
    payload
}

/// Tool names of a document's `[tool]` section, in document order.
pub fn tool_names(doc: &Table) -> Vec<String> {
    match doc.get(TOOL_SECTION) {
        Some(Value::Table(tool_table)) => tool_table.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Read and parse the target document.
///
/// Empty or whitespace-only content parses to the empty table. A file that
/// cannot be opened is [`Error::TargetUnreadable`].
pub fn read_target(path: &Path) -> Result<Table> {
    let text = fs::read_to_string(path)
        .map_err(|cause| Error::TargetUnreadable { path: path.to_path_buf(), cause })?;
    parse_document(&text, &path.display().to_string())
}

/// Parse TOML text into a document, tagging parse errors with their origin
/// (a file path or URL).
pub fn parse_document(text: &str, origin: &str) -> Result<Table> {
    toml::from_str(text).map_err(|cause| Error::Parse { origin: origin.to_string(), cause })
}

/// Render a document as pretty TOML.
pub fn render_document(doc: &Table) -> Result<String> {
    Ok(toml::to_string_pretty(doc)?)
}

/// Merge `source` into the document at `target_path`.
///
/// With a filter the effective payload is the source's `[tool]` entries named
/// by the filter and nothing else; without one it is the whole source
/// document. The merged result overwrites the target file (original
/// formatting and comments are not preserved) unless `dry_run` is set, in
/// which case the payload is rendered for inspection and the target is left
/// untouched.
pub fn merge_into(
    source: &Table,
    target_path: &Path,
    tool_filter: Option<&[String]>,
    dry_run: bool,
) -> Result<MergeOutcome> {
    let target = read_target(target_path)?;

    let payload = match tool_filter {
        Some(tools) => {
            let payload = filter_tools(source, tools);
            if tool_names(&payload).is_empty() {
                warn!(?tools, "filter matches none of the source's tools; [tool] payload is empty");
            }
            payload
        }
        None => source.clone(),
    };
    debug!(top_level_keys = payload.len(), dry_run, "effective payload computed");

    if dry_run {
        return Ok(MergeOutcome::Preview(render_document(&payload)?));
    }

    let merged = merge_tables(target, payload);
    let serialized = render_document(&merged)?;
    fs::write(target_path, serialized)
        .map_err(|cause| Error::TargetUnwritable { path: target_path.to_path_buf(), cause })?;
    Ok(MergeOutcome::Written { path: target_path.to_path_buf() })
}
