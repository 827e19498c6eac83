// src/dictionary.rs
//! Local word -> definition dictionary (a flat JSON object on disk).

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use serde_json::Value;

use crate::config::consts::{MAX_SUGGESTIONS, MIN_WORD_LEN};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

/// A dictionary hit as shown to a player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub definition: String,
    pub score: usize,
}

impl Dictionary {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load a JSON object of `"word": "definition"` pairs.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Reading dictionary {}: {e}", path.display()))?;
        Self::from_json(&text).map_err(|e| format!("Parsing dictionary {}: {e}", path.display()).into())
    }

    pub fn from_json(text: &str) -> Result<Self, Box<dyn Error>> {
        let Value::Object(obj) = serde_json::from_str::<Value>(text)? else {
            return Err("Dictionary must be a JSON object".into());
        };
        let mut entries = HashMap::with_capacity(obj.len());
        for (word, def) in obj {
            match def {
                Value::String(d) => {
                    entries.insert(word, d);
                }
                other => return Err(format!("Definition for '{word}' is not a string: {other}").into()),
            }
        }
        Ok(Self { entries })
    }

    /// Exact-match lookup; no case folding.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Player-facing search: trimmed, lowercased, at least 3 letters, single word.
    pub fn search(&self, word: &str) -> Option<WordResult> {
        let norm = word.trim().to_lowercase();
        if norm.chars().count() < MIN_WORD_LEN || norm.contains(' ') {
            return None;
        }
        let definition = self.entries.get(&norm)?.clone();
        let score = word_score(&norm);
        Some(WordResult { word: norm, definition, score })
    }

    /// Up to five playable words starting with `prefix`, shortest first.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let mut hits: Vec<&String> = self
            .entries
            .keys()
            .filter(|w| w.chars().count() >= MIN_WORD_LEN && !w.contains(' ') && w.starts_with(&prefix))
            .collect();
        hits.sort_by(|a, b| a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b)));
        hits.into_iter().take(MAX_SUGGESTIONS).cloned().collect()
    }
}

/// Points for a found word: one per letter beyond the second.
pub fn word_score(word: &str) -> usize {
    word.trim().chars().count().saturating_sub(2)
}
