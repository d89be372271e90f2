//! Input loading. Everything here only moves lines from a source into the
//! script parser; failures to read are reported and never retried.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::model::ParsedDocument;
use crate::processor::ScriptParser;

/// Open and parse a screenplay file.
pub fn load(path: &Path) -> Result<ParsedDocument> {
    let file = File::open(path).with_context(|| format!("Opening {}", path.display()))?;
    info!("File opened: {}", path.display());

    let doc = from_reader(BufReader::new(file))
        .with_context(|| format!("Reading {}", path.display()))?;
    info!(
        "Parsed {} scenes, {} dialogues",
        doc.stats.total_scenes, doc.stats.total_dialogues
    );
    Ok(doc)
}

/// Parse from any buffered reader. Tabs are kept verbatim; line endings are
/// stripped by `BufRead::lines`.
pub fn from_reader<R: BufRead>(reader: R) -> Result<ParsedDocument> {
    let mut parser = ScriptParser::new();
    for line in reader.lines() {
        parser.feed(&line?);
    }
    Ok(parser.finish())
}

/// Parse an in-memory screenplay.
pub fn from_text(text: &str) -> ParsedDocument {
    crate::processor::run(text.lines())
}
