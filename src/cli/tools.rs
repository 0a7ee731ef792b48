//! Tools command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::fetch::fetch_document;
use crate::merge::tool_names;
use crate::template::DEFAULT_TEMPLATE;

#[derive(Args)]
pub struct ToolsArgs {
    /// Document to enumerate: local path or http(s) URL (defaults to the bundled template)
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    /// One tool name per line
    Plain,
    /// A JSON object with the source and its tool names
    Json,
}

#[derive(Serialize)]
struct ToolListing<'a> {
    source: &'a str,
    tools: &'a [String],
}

pub fn run(args: ToolsArgs) -> Result<()> {
    let (origin, doc) = match args.source.as_deref() {
        Some(reference) => (reference.to_string(), fetch_document(reference)?),
        None => ("<bundled template>".to_string(), DEFAULT_TEMPLATE.clone()),
    };

    let names = tool_names(&doc);
    match args.format {
        Format::Plain => {
            for name in &names {
                println!("{name}");
            }
        }
        Format::Json => {
            let listing = ToolListing { source: &origin, tools: &names };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }
    Ok(())
}
