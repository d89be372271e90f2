//! The functional core: line classification, text accumulation and the
//! screenplay state machine.
pub mod classify;
pub mod script_parser;
pub mod text;

pub use script_parser::{ScriptParser, parse_lines};

use crate::model::ParsedDocument;

/// Runs the parsing pass over already-loaded lines.
pub fn run<I, S>(lines: I) -> ParsedDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_lines(lines)
}
