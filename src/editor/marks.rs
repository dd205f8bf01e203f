use std::collections::HashMap;

/// Selection snapshots saved under single-letter labels.
///
/// Labels are case-insensitive. Snapshots are owned clones and are only ever
/// replaced, never mutated or removed.
#[derive(Debug, Clone)]
pub struct MarkRegistry<S> {
    marks: HashMap<char, S>,
}

impl<S> Default for MarkRegistry<S> {
    fn default() -> Self {
        MarkRegistry {
            marks: HashMap::new(),
        }
    }
}

impl<S: Clone> MarkRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(label: char) -> Option<char> {
        label
            .is_ascii_alphabetic()
            .then(|| label.to_ascii_lowercase())
    }

    /// Returns false, storing nothing, when `label` is not a letter
    pub fn set(&mut self, label: char, snapshot: S) -> bool {
        let Some(label) = Self::normalize(label) else {
            return false;
        };
        self.marks.insert(label, snapshot);
        true
    }

    pub fn get(&self, label: char) -> Option<&S> {
        Self::normalize(label).and_then(|label| self.marks.get(&label))
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
#[path = "marks_tests.rs"]
mod marks_tests;
