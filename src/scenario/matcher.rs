//! Rule engine reducing up to four zone labels to one scenario.
//!
//! Rules are evaluated in priority order and the first match wins:
//!
//! 1. three or more distinct off-center labels, or two with no adjacency
//!    edge in either direction -> `13` (scattered)
//! 2. no labels -> `12` (all missed)
//! 3. exactly one label -> `10`
//! 4. four labels drawn from `{1, 3}` with at least two `3` and one `1` -> `11`
//! 5. three or more `1` -> `1`
//! 6. only center labels left -> `9`
//! 7. most frequent off-center label (diagonals preferred, then the
//!    lexicographically smallest) becomes the base; `2` tied with `10`
//!    gives the compound `2/10`
//! 8. every label within `{base} ∪ adjacency(base) ∪ {1}` -> base,
//!    otherwise `13`

use super::adjacency::{AdjacencyTable, OUTSIDE_LABEL};
use super::catalogue::ScenarioCatalogue;
use super::ScenarioOutcome;
use crate::zones::{Zone, CENTER_LABEL};
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};

/// Number of shots in one series.
pub const SHOTS_PER_SERIES: usize = 4;

const DIAGONALS: [&str; 4] = ["2", "4", "6", "8"];
const LOWER_LEFT: &str = "2";
const SCATTERED: &str = "13";
const ALL_MISSED: &str = "12";
const SINGLE_HIT: &str = "10";
const CENTER_AND_LEFT: &str = "11";
const TIGHT_GROUP: &str = "1";
const CENTER_ONLY_FALLBACK: &str = "9";

/// Matcher owning its reference data.
#[derive(Clone, Debug, Default)]
pub struct ScenarioMatcher {
    catalogue: ScenarioCatalogue,
    adjacency: AdjacencyTable,
}

/// Normalized view of one series of shots.
#[derive(Debug)]
struct ShotTally {
    /// Occurrences of each recognised label.
    counts: BTreeMap<String, usize>,
    /// Recognised labels across the four slots.
    inside: usize,
}

impl ShotTally {
    fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut counts = BTreeMap::new();
        // Normalize first, truncate second: blank or unknown labels still
        // take a slot but are never counted.
        for label in labels
            .iter()
            .map(|l| l.as_ref().trim().to_uppercase())
            .take(SHOTS_PER_SERIES)
            .filter(|l| is_known_label(l))
        {
            *counts.entry(label).or_insert(0usize) += 1;
        }
        let inside = counts.values().sum();
        Self { counts, inside }
    }

    fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    fn off_center(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .filter(|(label, _)| label.as_str() != CENTER_LABEL)
            .map(|(label, n)| (label.as_str(), *n))
    }
}

fn is_known_label(label: &str) -> bool {
    label == OUTSIDE_LABEL || Zone::from_label(label).is_some()
}

impl ScenarioMatcher {
    pub fn new(catalogue: ScenarioCatalogue) -> Self {
        Self {
            catalogue,
            adjacency: AdjacencyTable::default(),
        }
    }

    pub fn with_adjacency(mut self, adjacency: AdjacencyTable) -> Self {
        self.adjacency = adjacency;
        self
    }

    pub fn catalogue(&self) -> &ScenarioCatalogue {
        &self.catalogue
    }

    pub fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    /// Diagnoses one series. `None` means the catalogue lacks the selected entry.
    pub fn match_zones<S: AsRef<str>>(&self, labels: &[S]) -> Option<ScenarioOutcome> {
        let tally = ShotTally::from_labels(labels);
        let selection = self.select(&tally)?;
        debug!(
            "selected {selection:?} for labels {:?} (inside={})",
            tally.counts, tally.inside
        );
        match selection {
            Selection::Single(id) => self.outcome(id),
            Selection::LowerLeftAndOutside => self.compound_lower_left_outside(),
        }
    }

    fn select<'t>(&self, tally: &'t ShotTally) -> Option<Selection<'t>> {
        let distinct_off_center: BTreeSet<&str> = tally.off_center().map(|(l, _)| l).collect();
        if distinct_off_center.len() >= 3 {
            return Some(Selection::Single(SCATTERED));
        }
        if distinct_off_center.len() == 2 {
            let mut pair = distinct_off_center.iter().copied();
            let (a, b) = (pair.next()?, pair.next()?);
            // An edge listed in either direction links the pair.
            if !self.adjacency.is_adjacent(a, b) && !self.adjacency.is_adjacent(b, a) {
                return Some(Selection::Single(SCATTERED));
            }
        }

        if tally.inside == 0 {
            return Some(Selection::Single(ALL_MISSED));
        }
        if tally.inside == 1 {
            return Some(Selection::Single(SINGLE_HIT));
        }

        let center = tally.count(CENTER_LABEL);
        let left = tally.count("3");
        if tally.inside == SHOTS_PER_SERIES
            && tally.counts.keys().all(|l| l == CENTER_LABEL || l == "3")
            && left >= 2
            && center >= 1
        {
            return Some(Selection::Single(CENTER_AND_LEFT));
        }
        if center >= 3 {
            return Some(Selection::Single(TIGHT_GROUP));
        }

        let max_count = tally.off_center().map(|(_, n)| n).max();
        let Some(max_count) = max_count else {
            return Some(Selection::Single(CENTER_ONLY_FALLBACK));
        };

        // BTreeMap iteration is sorted, so `min` is the lexicographic pick.
        let candidates: Vec<&str> = tally
            .off_center()
            .filter(|(_, n)| *n == max_count)
            .map(|(l, _)| l)
            .collect();
        let base = candidates
            .iter()
            .copied()
            .filter(|l| DIAGONALS.contains(l))
            .min()
            .or_else(|| candidates.iter().copied().min())?;

        if base == LOWER_LEFT && tally.count(OUTSIDE_LABEL) == max_count {
            return Some(Selection::LowerLeftAndOutside);
        }

        let cluster_ok = tally.counts.keys().all(|l| {
            l == base || l == CENTER_LABEL || self.adjacency.is_adjacent(base, l)
        });
        if cluster_ok {
            Some(Selection::Single(base))
        } else {
            Some(Selection::Single(SCATTERED))
        }
    }

    fn outcome(&self, id: &str) -> Option<ScenarioOutcome> {
        match self.catalogue.get(id) {
            Some(entry) => Some(ScenarioOutcome {
                id: id.to_string(),
                description: entry.description.clone(),
                link: entry.link.clone(),
            }),
            None => {
                warn!("no catalogue entry for scenario {id}");
                None
            }
        }
    }

    fn compound_lower_left_outside(&self) -> Option<ScenarioOutcome> {
        let lower_left = self.catalogue.get(LOWER_LEFT)?;
        let outside = self.catalogue.get(OUTSIDE_LABEL)?;
        Some(ScenarioOutcome {
            id: format!("{LOWER_LEFT}/{OUTSIDE_LABEL}"),
            description: format!("{} + {}", lower_left.description, outside.description),
            link: None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection<'t> {
    Single(&'t str),
    /// Base sector `2` tied with outside hits.
    LowerLeftAndOutside,
}

/// Diagnoses a series with the built-in catalogue and adjacency.
pub fn match_zones<S: AsRef<str>>(labels: &[S]) -> Option<ScenarioOutcome> {
    ScenarioMatcher::default().match_zones(labels)
}
