//! Scenario reference texts keyed by scenario id.
//!
//! The catalogue is data, not logic: the matcher only looks up entries by
//! id. A JSON file with the layout below can replace the built-in texts.
//!
//! ```json
//! { "scenarios": { "1": { "description": "...", "link": null }, ... } }
//! ```

use crate::error::CatalogueError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Ids every catalogue has to define.
pub const REQUIRED_IDS: [&str; 13] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioEntry {
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioCatalogue {
    scenarios: BTreeMap<String, ScenarioEntry>,
}

const BUILTIN: [(&str, &str, Option<&str>); 13] = [
    (
        "1",
        "Три и более попаданий в центр— идеально, рекомендаций нет.",
        None,
    ),
    (
        "2",
        "Попадания смещены в левый нижний угол мишени.",
        Some("https://vk.com/s/v1/doc/O7ULpk7A8HkI7BL_Agm4luUEah-_Z29jnZf-ALoH-e5VS75psAw"),
    ),
    (
        "3",
        "Попадания смещены влево от центра.",
        Some("https://vk.com/s/v1/doc/LE9k2Frolx33wtTZ_eutyujbELwaVngdjcmkptSl4iWec-aArrY"),
    ),
    (
        "4",
        "Попадания смещены в левый верхний угол.",
        Some("https://vk.com/s/v1/doc/xyTnw-iS8ZDIv1mHC-poCynjJxWberImnODQ2ptvbuYX85ofKgw"),
    ),
    (
        "5",
        "Попадания смещены вверх по центру.",
        Some("https://vk.com/s/v1/doc/9B1txaFaev1JCkj8RkdswR_gXuZW7M9lSwGQMBqbrtSB5dKP51I"),
    ),
    (
        "6",
        "Попадания смещены в правый верхний угол.",
        Some("https://vk.com/s/v1/doc/Uaz9pJULITeoEYCbLR8MAHWyf-LJk-WTXT--fl9Mw1M2uHcAaDY"),
    ),
    (
        "7",
        "Попадания смещены вправо от центра.",
        Some("https://vk.com/s/v1/doc/jRDfZRar0Edt4SF2lVLAEiXFWKD3gBvGwYtCImvLfJ-SZYDAUG8"),
    ),
    (
        "8",
        "Попадания смещены в правый нижний угол.",
        Some("https://vk.com/s/v1/doc/5WCVM31M0LMc4oqoyf_WkNVKJvzT4o1AU3iuaoo0JZnkTJW2djM"),
    ),
    (
        "9",
        "Попадания смещены вниз по центру.",
        Some("https://vk.com/s/v1/doc/KuTyswcY0r2CIw1S0azgLY6a-Uk2OAIw87d4IiPeCLu83la8rgk"),
    ),
    (
        "10",
        "Только одно попадание внутри мишени, остальные вне.",
        Some("https://vk.com/s/v1/doc/ySS2LqMQUzAlVJbt6bhJkY8FUtRZLTFrmGdtPFvlW6jAw-cJVwU"),
    ),
    (
        "11",
        "Часть пуль в центре, часть в секторе 3.",
        Some("https://vk.com/s/v1/doc/H8rEo7l-lqY3kPWz5zh6aybxItovpcXd5N1YzXVdatsg1plxcDc"),
    ),
    (
        "12",
        "Все четыре пули вне мишени.",
        Some("https://vk.com/s/v1/doc/mXUIa2JZ-_Exe-Xd2x5bBQ16vqS9RUdVbjr58JfFZ5zG3YP-A7s"),
    ),
    (
        "13",
        "Попадания разбросаны по всей мишени.",
        Some("https://vk.com/s/v1/doc/jOaKDm_TxI1VeLZJ3ud_dl3yE4uIJa4HOpeYML07lB-xSZiFWPs"),
    ),
];

impl Default for ScenarioCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ScenarioCatalogue {
    /// The catalogue shipped with the training app.
    pub fn builtin() -> Self {
        let scenarios = BUILTIN
            .iter()
            .map(|(id, description, link)| {
                (
                    (*id).to_string(),
                    ScenarioEntry {
                        description: (*description).to_string(),
                        link: link.map(str::to_string),
                    },
                )
            })
            .collect();
        Self { scenarios }
    }

    /// Builds a catalogue from explicit entries and validates it.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, ScenarioEntry)>,
    ) -> Result<Self, CatalogueError> {
        let catalogue = Self {
            scenarios: entries.into_iter().collect(),
        };
        catalogue.validate()?;
        Ok(catalogue)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        let catalogue: Self = serde_json::from_str(json)?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    pub fn validate(&self) -> Result<(), CatalogueError> {
        for id in REQUIRED_IDS {
            match self.scenarios.get(id) {
                None => return Err(CatalogueError::MissingEntry { id: id.to_string() }),
                Some(entry) if entry.description.trim().is_empty() => {
                    return Err(CatalogueError::EmptyDescription { id: id.to_string() })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ScenarioEntry> {
        self.scenarios.get(id)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Reads and validates a JSON catalogue from disk.
pub fn load_catalogue(path: &Path) -> Result<ScenarioCatalogue, CatalogueError> {
    let data = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ScenarioCatalogue::from_json_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogue_is_complete() {
        let catalogue = ScenarioCatalogue::builtin();
        assert!(catalogue.validate().is_ok());
        assert_eq!(catalogue.len(), 13);
        assert!(catalogue.get("1").unwrap().link.is_none());
        assert!(catalogue.get("13").unwrap().link.is_some());
    }

    #[test]
    fn json_catalogue_round_trips_through_serde() {
        let json = serde_json::to_string(&ScenarioCatalogue::builtin()).unwrap();
        let parsed = ScenarioCatalogue::from_json_str(&json).unwrap();
        assert_eq!(parsed, ScenarioCatalogue::builtin());
    }

    #[test]
    fn missing_link_field_defaults_to_none() {
        let mut json = String::from(r#"{"scenarios":{"#);
        let body: Vec<String> = REQUIRED_IDS
            .iter()
            .map(|id| format!(r#""{id}":{{"description":"scenario {id}"}}"#))
            .collect();
        json.push_str(&body.join(","));
        json.push_str("}}");
        let catalogue = ScenarioCatalogue::from_json_str(&json).unwrap();
        assert_eq!(catalogue.get("7").unwrap().link, None);
        assert_eq!(catalogue.get("7").unwrap().description, "scenario 7");
    }

    #[test]
    fn incomplete_catalogue_is_rejected() {
        let json = r#"{"scenarios":{"1":{"description":"only one"}}}"#;
        match ScenarioCatalogue::from_json_str(json) {
            Err(CatalogueError::MissingEntry { id }) => assert_eq!(id, "2"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn blank_description_is_rejected() {
        let entries = REQUIRED_IDS.iter().map(|id| {
            let description = if *id == "5" { "  ".to_string() } else { format!("s{id}") };
            (
                id.to_string(),
                ScenarioEntry {
                    description,
                    link: None,
                },
            )
        });
        assert!(matches!(
            ScenarioCatalogue::from_entries(entries),
            Err(CatalogueError::EmptyDescription { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ScenarioCatalogue::from_json_str("{not json"),
            Err(CatalogueError::Parse(_))
        ));
    }
}
