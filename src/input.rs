// Document loading for the CLI.
//
// A corpus file is either a JSON array of document records or JSON Lines with
// one record per line. Records look like `{"id": "...", "text": "..."}`; both
// fields are optional and any other fields are ignored.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::keywords::corpus::Document;

/// Load every document of a corpus file.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    parse_documents(&raw).with_context(|| format!("Invalid corpus file {}", path.display()))
}

/// Parse a JSON array or JSON Lines payload into documents.
pub fn parse_documents(raw: &str) -> Result<Vec<Document>> {
    if raw.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(raw)?);
    }

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("line {}", i + 1))
        })
        .collect()
}

/// Read a plain-text document.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))
}
