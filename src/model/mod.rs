use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Name given to the scene that holds everything before the first heading.
pub const TITLE_SCENE_NAME: &str = "SCRIPT TITLE";

/// One speaker's turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dialogue {
    pub character: String,
    pub text: String,
}

/// Description accumulated since the previous boundary, optionally closed
/// by a line of dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub description: String,
    pub dialogue: Option<Dialogue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// Aggregate counters collected during a single parse.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_scenes: usize,
    pub total_characters: usize,
    pub total_dialogues: usize,
    pub total_words: usize,
    pub total_words_in_dialogues: usize,
}

impl Stats {
    pub const NAMES: &'static [&'static str] = &[
        "total_scenes",
        "total_characters",
        "total_dialogues",
        "total_words",
        "total_words_in_dialogues",
    ];

    /// Look a counter up by its name.
    pub fn get(&self, name: &str) -> Option<usize> {
        let value = match name {
            "total_scenes" => self.total_scenes,
            "total_characters" => self.total_characters,
            "total_dialogues" => self.total_dialogues,
            "total_words" => self.total_words,
            "total_words_in_dialogues" => self.total_words_in_dialogues,
            _ => return None,
        };
        Some(value)
    }

    /// `(name, count)` pairs in `NAMES` order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        Self::NAMES
            .iter()
            .filter_map(move |&name| self.get(name).map(|v| (name, v)))
    }
}

/// Fully parsed screenplay handed to the writers.
///
/// Built once by the script parser and read-only afterwards. Labels are
/// positions in the sorted `character_vocabulary`, so they are stable for a
/// given set of speakers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub scenes: Vec<Scene>,
    pub stats: Stats,
    pub character_vocabulary: BTreeSet<String>,
}

impl ParsedDocument {
    pub fn vocabulary_to_label(&self) -> BTreeMap<String, usize> {
        self.character_vocabulary
            .iter()
            .enumerate()
            .map(|(label, name)| (name.clone(), label))
            .collect()
    }

    pub fn label_to_vocabulary(&self) -> BTreeMap<usize, String> {
        self.character_vocabulary
            .iter()
            .enumerate()
            .map(|(label, name)| (label, name.clone()))
            .collect()
    }

    pub fn label_of(&self, character: &str) -> Option<usize> {
        self.character_vocabulary
            .iter()
            .position(|name| name == character)
    }

    /// Every dialogue in document order (scene, then entry).
    pub fn dialogues(&self) -> impl Iterator<Item = &Dialogue> + '_ {
        self.scenes
            .iter()
            .flat_map(|scene| scene.entries.iter())
            .filter_map(|entry| entry.dialogue.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(names: &[&str]) -> ParsedDocument {
        ParsedDocument {
            scenes: vec![],
            stats: Stats::default(),
            character_vocabulary: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_label_mappings_follow_sorted_order() {
        let doc = doc_with(&["PROFESSOR", "BILLY", "AZIZ"]);

        let to_label = doc.vocabulary_to_label();
        assert_eq!(to_label["AZIZ"], 0);
        assert_eq!(to_label["BILLY"], 1);
        assert_eq!(to_label["PROFESSOR"], 2);

        let to_name = doc.label_to_vocabulary();
        for (name, label) in &to_label {
            assert_eq!(&to_name[label], name);
        }

        assert_eq!(doc.label_of("BILLY"), Some(1));
        assert_eq!(doc.label_of("OMAR"), None);
    }

    #[test]
    fn test_stats_lookup_by_name() {
        let stats = Stats {
            total_scenes: 4,
            total_characters: 2,
            total_dialogues: 3,
            total_words: 40,
            total_words_in_dialogues: 12,
        };

        assert_eq!(stats.get("total_dialogues"), Some(3));
        assert_eq!(stats.get("total_lines"), None);

        let pairs: Vec<_> = stats.iter().collect();
        assert_eq!(pairs.len(), Stats::NAMES.len());
        assert_eq!(pairs[0], ("total_scenes", 4));
        assert_eq!(pairs[4], ("total_words_in_dialogues", 12));
    }
}
