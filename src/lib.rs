//! tomlgraft: graft curated tool configuration into a project's pyproject.toml
//!
//! Merges a TOML fragment (the bundled template, a local file, or a document
//! fetched from a URL) into an existing `pyproject.toml`, optionally
//! restricted to named `[tool.*]` sections. The merge is a shallow union at
//! the document's top level: on key collision the incoming value replaces the
//! existing one wholesale.

pub mod cli;
pub mod error;
pub mod fetch;
pub mod locate;
pub mod merge;
pub mod template;
