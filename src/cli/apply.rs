//! Apply command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::utils::parse_tool_list;
use crate::error::Error;
use crate::fetch::fetch_document;
use crate::locate::find_pyproject;
use crate::merge::{merge_into, read_target, tool_names, MergeOutcome};
use crate::template::DEFAULT_TEMPLATE;

#[derive(Args)]
pub struct ApplyArgs {
    /// Directory searched for pyproject.toml
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Explicit target file (skips the directory search)
    #[arg(long, value_name = "FILE")]
    pub dst: Option<PathBuf>,

    /// Source document: local path or http(s) URL (defaults to the bundled template)
    #[arg(long, value_name = "PATH_OR_URL")]
    pub src: Option<String>,

    /// Restrict the merge to these tool names (comma-separated)
    #[arg(long, value_name = "LIST")]
    pub tools: Option<String>,

    /// Restrict the merge to tool names already present in the target
    #[arg(long)]
    pub only_existing: bool,

    /// Render the effective payload instead of writing the target
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: ApplyArgs) -> Result<()> {
    let target = match &args.dst {
        Some(dst) => dst.clone(),
        None => find_pyproject(&args.path)
            .ok_or_else(|| Error::TargetNotFound { dir: args.path.clone() })?,
    };
    debug!(target = %target.display(), "resolved target");

    let source = match args.src.as_deref() {
        Some(reference) => fetch_document(reference)?,
        None => DEFAULT_TEMPLATE.clone(),
    };

    let filter = resolve_filter(&args, &target)?;

    match merge_into(&source, &target, filter.as_deref(), args.dry_run)? {
        MergeOutcome::Preview(rendered) => print!("{rendered}"),
        MergeOutcome::Written { path } => println!("Updated {}", path.display()),
    }
    Ok(())
}

/// Work out the effective tool filter.
///
/// An explicit `--tools` list always wins over `--only-existing`. With
/// `--only-existing`, the filter is the set of tool names the target already
/// configures; a target without a `[tool]` section enumerates to nothing,
/// which behaves like no filter at all (full merge).
fn resolve_filter(args: &ApplyArgs, target: &Path) -> Result<Option<Vec<String>>> {
    if let Some(tools) = parse_tool_list(args.tools.as_deref()) {
        return Ok(Some(tools));
    }
    if args.only_existing {
        let existing = tool_names(&read_target(target)?);
        debug!(?existing, "tool names already present in the target");
        if !existing.is_empty() {
            return Ok(Some(existing));
        }
    }
    Ok(None)
}
