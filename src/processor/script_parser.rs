//! State machine that turns classified lines into scenes and entries.
//!
//! The parser keeps one piece of control state, the active speaker. Every
//! other field is an accumulator that is drained when an entry or a scene
//! is closed.
//!
//! * an entry is closed when a cue arrives while someone is speaking, when a
//!   description line interrupts a speaker, and when a scene is closed with
//!   pending content;
//! * a scene is closed on every heading and at the end of input.

use std::collections::BTreeSet;

use log::{debug, trace};

use super::classify::{LineKind, classify};
use super::text::{TextBuffer, word_count};
use crate::model::{Dialogue, Entry, ParsedDocument, Scene, Stats, TITLE_SCENE_NAME};

/// Parse a whole sequence of lines in one pass.
pub fn parse_lines<I, S>(lines: I) -> ParsedDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = ScriptParser::new();
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}

pub struct ScriptParser {
    description: TextBuffer,
    dialogue: TextBuffer,
    scene_name: String,
    character: Option<String>,
    entries: Vec<Entry>,
    scenes: Vec<Scene>,
    vocabulary: BTreeSet<String>,
    stats: Stats,
    line_no: usize,
}

impl Default for ScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptParser {
    pub fn new() -> Self {
        Self {
            description: TextBuffer::new(),
            dialogue: TextBuffer::new(),
            scene_name: TITLE_SCENE_NAME.to_string(),
            character: None,
            entries: Vec::new(),
            scenes: Vec::new(),
            vocabulary: BTreeSet::new(),
            stats: Stats::default(),
            line_no: 0,
        }
    }

    /// Consume one raw line. A trailing `\n` or `\r\n` is ignored; empty
    /// lines have no effect at all.
    pub fn feed(&mut self, line: &str) {
        self.line_no += 1;

        let line = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line);
        if line.is_empty() {
            return;
        }

        let kind = classify(line);
        trace!("line {}: {:?}", self.line_no, kind);

        match kind {
            LineKind::SceneHeading(name) => {
                self.close_scene();
                self.scene_name = name.to_string();
            }
            LineKind::CharacterCue(name) => {
                if self.character.is_some() {
                    self.close_entry();
                }
                self.character = Some(name.to_string());
            }
            ref kind if kind.is_continuation() && self.character.is_some() => {
                self.dialogue.append(line);
            }
            LineKind::Indented { .. } => {
                if self.character.is_some() {
                    self.close_entry();
                }
                self.description.append(line);
            }
        }
    }

    /// Flush whatever is pending and return the finished document.
    pub fn finish(mut self) -> ParsedDocument {
        // the title scene is emitted even for an empty script
        if self.has_pending() || self.scenes.is_empty() {
            self.close_scene();
        }

        self.stats.total_characters = self.vocabulary.len();
        self.stats.total_scenes = self.scenes.len();

        debug!(
            "parsed {} lines into {} scenes, {} dialogues",
            self.line_no, self.stats.total_scenes, self.stats.total_dialogues
        );

        ParsedDocument {
            scenes: self.scenes,
            stats: self.stats,
            character_vocabulary: self.vocabulary,
        }
    }

    fn has_pending(&self) -> bool {
        !self.description.is_empty() || !self.dialogue.is_empty() || self.character.is_some()
    }

    fn close_entry(&mut self) {
        let description = self.description.take();
        let text = self.dialogue.take();

        let description_words = word_count(&description);
        let dialogue_words = word_count(&text);

        let dialogue = self.character.take().map(|character| {
            self.stats.total_dialogues += 1;
            self.stats.total_words_in_dialogues += dialogue_words;
            self.vocabulary.insert(character.clone());
            Dialogue { character, text }
        });
        self.stats.total_words += description_words + dialogue_words;

        self.entries.push(Entry {
            description,
            dialogue,
        });
    }

    /// Close the current scene and start an empty context for the next one.
    fn close_scene(&mut self) {
        if self.has_pending() {
            self.close_entry();
        }

        let name = std::mem::take(&mut self.scene_name);
        let entries = std::mem::take(&mut self.entries);
        debug!("scene {:?} closed with {} entries", name, entries.len());
        self.scenes.push(Scene { name, entries });

        self.description.clear();
        self.dialogue.clear();
        self.character = None;
    }
}
