//! Line classification for tab-indented screenplays.
//
//  Grammar (informal):
//
//      heading  ::= DIGIT+ TAB name          (checked first, state independent)
//      cue      ::= TAB{6} name              (a speaker starts talking)
//      indented ::= TAB{n} text              (n != 6)
//
//  Whether an `indented` line with 4 or 5 tabs continues a dialogue or adds
//  to the scene description depends on the parser state, so that decision
//  is left to the state machine.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading tabs that mark a character cue.
pub const CUE_TABS: usize = 6;

/// Leading tab counts that continue an active dialogue.
pub const CONTINUATION_TABS: [usize; 2] = [4, 5];

static SCENE_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\t.+$").expect("scene heading pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `<number><TAB><name>`, carries the name.
    SceneHeading(&'a str),
    /// Exactly six leading tabs, carries the trimmed speaker name.
    CharacterCue(&'a str),
    /// Anything else: the tab count and the raw line.
    Indented { tabs: usize, text: &'a str },
}

impl LineKind<'_> {
    /// True for 4/5-tab lines, which continue a dialogue if one is active.
    pub fn is_continuation(&self) -> bool {
        matches!(self, LineKind::Indented { tabs, .. } if CONTINUATION_TABS.contains(tabs))
    }
}

pub fn is_scene_heading(line: &str) -> bool {
    SCENE_HEADING.is_match(line)
}

/// Returns the scene name (everything after the first tab) for a heading line.
pub fn scene_name(line: &str) -> Option<&str> {
    if !is_scene_heading(line) {
        return None;
    }
    line.split_once('\t').map(|(_, name)| name)
}

pub fn count_leading_tabs(line: &str) -> usize {
    line.chars().take_while(|&c| c == '\t').count()
}

/// Classify one non-empty line. Priority: heading, cue, everything else.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(name) = scene_name(line) {
        return LineKind::SceneHeading(name);
    }

    let tabs = count_leading_tabs(line);
    if tabs == CUE_TABS {
        let name = line.trim();
        // a bare run of tabs names nobody
        if !name.is_empty() {
            return LineKind::CharacterCue(name);
        }
    }

    LineKind::Indented { tabs, text: line }
}
