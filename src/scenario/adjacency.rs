//! Directed adjacency between zone labels.
//!
//! `"10"` is a pseudo-node for hits outside the target. Lookups are
//! directed (`neighbors(a).contains(b)`); the built-in table happens to be
//! symmetric, which [`AdjacencyTable::asymmetric_pairs`] can confirm for any
//! replacement table.

use std::collections::{BTreeMap, BTreeSet};

/// Pseudo-label for a hit outside the target face.
pub const OUTSIDE_LABEL: &str = "10";

const BUILTIN: [(&str, &[&str]); 10] = [
    ("1", &["2", "3", "4", "5", "6", "7", "8", "9"]),
    ("2", &["1", "3", "9", "10"]),
    ("3", &["1", "2", "4"]),
    ("4", &["1", "3", "5"]),
    ("5", &["1", "4", "6"]),
    ("6", &["1", "5", "7"]),
    ("7", &["1", "6", "8"]),
    ("8", &["1", "7", "9", "10"]),
    ("9", &["1", "8", "2", "10"]),
    ("10", &["2", "8", "9"]),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyTable {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl Default for AdjacencyTable {
    fn default() -> Self {
        Self::from_pairs(BUILTIN.iter().map(|(k, vs)| (*k, vs.iter().copied())))
    }
}

impl AdjacencyTable {
    pub fn from_pairs<'a, I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: IntoIterator<Item = &'a str>,
    {
        let edges = pairs
            .into_iter()
            .map(|(k, vs)| (k.to_string(), vs.into_iter().map(str::to_string).collect()))
            .collect();
        Self { edges }
    }

    /// Neighbours of `label`; unknown labels have none.
    pub fn neighbors(&self, label: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(label)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        self.edges.get(from).is_some_and(|set| set.contains(to))
    }

    /// Every `(a, b)` with `a -> b` but no `b -> a`.
    pub fn asymmetric_pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for (a, set) in &self.edges {
            for b in set {
                if !self.is_adjacent(b, a) {
                    out.push((a.clone(), b.clone()));
                }
            }
        }
        out
    }

    pub fn is_symmetric(&self) -> bool {
        self.asymmetric_pairs().is_empty()
    }
}
