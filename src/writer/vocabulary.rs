//! Label table and statistics, written as plain JSON.

use crate::model::ParsedDocument;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const VOCABULARY_FILE: &str = "vocabulary.json";
pub const STATS_FILE: &str = "stats.json";

pub fn emit(doc: &ParsedDocument, out_dir: &Path) -> io::Result<()> {
    labels(doc, out_dir)?;
    stats(doc, out_dir)?;
    Ok(())
}

/// `vocabulary.json` is an array of speaker names; the index is the label.
fn labels(doc: &ParsedDocument, out_dir: &Path) -> io::Result<()> {
    let names: Vec<&str> = doc.character_vocabulary.iter().map(String::as_str).collect();
    write_pretty(&names, &out_dir.join(VOCABULARY_FILE))
}

fn stats(doc: &ParsedDocument, out_dir: &Path) -> io::Result<()> {
    write_pretty(&doc.stats, &out_dir.join(STATS_FILE))
}

fn write_pretty<T: serde::Serialize + ?Sized>(value: &T, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n")?;
    out.flush()
}
