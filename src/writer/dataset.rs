//! JSON-lines export of the character-dialogue dataset.
//!
//! One `{"text": ..., "label": ...}` object per dialogue entry, in document
//! order, where `label` is the speaker's position in the sorted vocabulary.

use crate::model::ParsedDocument;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const FILE_NAME: &str = "dataset.jsonl";

#[derive(Debug, Serialize)]
struct Record<'a> {
    text: &'a str,
    label: usize,
}

pub fn emit(doc: &ParsedDocument, out_dir: &Path) -> io::Result<usize> {
    let mut out = BufWriter::new(File::create(out_dir.join(FILE_NAME))?);
    let written = write_jsonl(doc, &mut out)?;
    out.flush()?;
    Ok(written)
}

/// Write every dialogue as one JSON object per line; returns the line count.
pub fn write_jsonl<W: Write>(doc: &ParsedDocument, mut out: W) -> io::Result<usize> {
    let labels = doc.vocabulary_to_label();
    let mut written = 0;

    for dialogue in doc.dialogues() {
        let label = *labels.get(&dialogue.character).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("speaker `{}` missing from vocabulary", dialogue.character),
            )
        })?;

        serde_json::to_writer(
            &mut out,
            &Record {
                text: &dialogue.text,
                label,
            },
        )?;
        out.write_all(b"\n")?;
        written += 1;
    }

    Ok(written)
}
