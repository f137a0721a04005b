//! Shooting-pattern scenarios and the rule engine that selects them.

pub mod adjacency;
pub mod catalogue;
pub mod matcher;


use serde::Serialize;

pub use adjacency::{AdjacencyTable, OUTSIDE_LABEL};
pub use catalogue::{load_catalogue, ScenarioCatalogue, ScenarioEntry};
pub use matcher::{match_zones, ScenarioMatcher, SHOTS_PER_SERIES};

/// Message shown when no scenario could be selected.
pub const UNCLASSIFIED_MESSAGE: &str = "Не удалось классифицировать попадания.";

/// Result of matching one series of shots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    /// `"1"`..`"13"` or the compound `"2/10"`.
    pub id: String,
    pub description: String,
    pub link: Option<String>,
}

/// Presentation helpers over an optional outcome.
pub trait Diagnosis {
    /// Text for the end user, falling back to [`UNCLASSIFIED_MESSAGE`].
    fn message(&self) -> &str;
    fn link(&self) -> Option<&str>;
}

impl Diagnosis for Option<ScenarioOutcome> {
    fn message(&self) -> &str {
        self.as_ref()
            .map_or(UNCLASSIFIED_MESSAGE, |o| o.description.as_str())
    }

    fn link(&self) -> Option<&str> {
        self.as_ref().and_then(|o| o.link.as_deref())
    }
}
