// src/reconcile.rs
//! Split a word list into words the local dictionary can define and words it can't.

use serde_json::{Map, Value};

use crate::config::consts::SENTINEL;
use crate::dictionary::Dictionary;

/// Output of one reconcile pass.
///
/// `resolved` keeps first-seen word order. A repeated word keeps one entry in
/// `resolved` but shows up once per occurrence in `unresolved`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reconciliation {
    pub resolved: Map<String, Value>,
    pub unresolved: Vec<String>,
    /// Number of input words, duplicates included.
    pub total: usize,
}

impl Reconciliation {
    pub fn found(&self) -> usize {
        self.total - self.unresolved.len()
    }

    pub fn not_found(&self) -> usize {
        self.unresolved.len()
    }
}

pub fn reconcile<S: AsRef<str>>(words: &[S], dictionary: &Dictionary) -> Reconciliation {
    let mut out = Reconciliation { total: words.len(), ..Default::default() };

    for word in words {
        let word = word.as_ref();
        match dictionary.get(word) {
            Some(def) => {
                out.resolved.insert(s!(word), Value::String(s!(def)));
            }
            None => {
                out.resolved.insert(s!(word), Value::String(s!(SENTINEL)));
                out.unresolved.push(s!(word));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_overwrite_in_place_and_repeat_in_unresolved() {
        let d = Dictionary::from_json(r#"{"b": "bee"}"#).unwrap();
        let r = reconcile(&["x", "b", "x", "a"], &d);
        let keys: Vec<&String> = r.resolved.keys().collect();
        assert_eq!(keys, vec!["x", "b", "a"]);
        assert_eq!(r.unresolved, vec!["x", "x", "a"]);
        assert_eq!(r.total, 4);
        assert_eq!(r.found(), 1);
        assert_eq!(r.not_found(), 3);
    }
}
