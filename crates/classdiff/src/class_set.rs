//! Class-list normalization and one-directional token diffing.
//!
//! A class list arrives either as a single space-delimited string or as an
//! array of such strings. [`ClassSet`] normalizes both forms into one
//! duplicate-free token set, so formatting differences (whitespace runs,
//! token order, string-vs-array representation) never register as changes.

use std::collections::HashSet;

use serde_json::Value;

/// A normalized set of class tokens.
///
/// Tokens are non-empty, duplicate-free, and kept in first-seen order so a
/// diff can be re-joined in the order the original listed them.
#[derive(Clone, Debug, Default)]
pub struct ClassSet {
    tokens: Vec<String>,
    index: HashSet<String>,
}

impl ClassSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a class-list value into a token set.
    ///
    /// `null` and the empty string normalize to the empty set. A string is
    /// split on runs of whitespace with empty fragments discarded; an array
    /// has the same split applied to each string element and the results
    /// flattened. Non-string array elements contribute nothing.
    pub fn from_value(value: &Value) -> Self {
        let mut set = Self::new();
        match value {
            Value::String(raw) => set.insert_split(raw),
            Value::Array(items) => {
                for item in items {
                    if let Value::String(raw) = item {
                        set.insert_split(raw);
                    }
                }
            }
            _ => {}
        }
        set
    }

    fn insert_split(&mut self, raw: &str) {
        for token in raw.split_whitespace() {
            if !self.index.contains(token) {
                self.index.insert(token.to_string());
                self.tokens.push(token.to_string());
            }
        }
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the set holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` if `token` is in the set.
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains(token)
    }

    /// Iterate tokens in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Tokens of `self` absent from `updated`, space-joined in set order.
    ///
    /// One-directional: tokens introduced only in `updated` are never
    /// reported. Returns `None` when nothing was removed, including when
    /// `self` is empty (growth from an empty class list is invisible).
    pub fn removed_from(&self, updated: &ClassSet) -> Option<String> {
        let removed: Vec<&str> = self
            .iter()
            .filter(|token| !updated.contains(token))
            .collect();

        if removed.is_empty() {
            None
        } else {
            Some(removed.join(" "))
        }
    }
}

/// Token-set equality, independent of insertion order.
impl PartialEq for ClassSet {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for ClassSet {}
