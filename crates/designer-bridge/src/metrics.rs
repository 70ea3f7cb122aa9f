use serde::{Deserialize, Serialize};
use tee_types::Configuration;

/// One material dynamics reading, e.g. `Stretch 35%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub label: String,
    pub value: u8,
    pub suffix: String,
}

impl Reading {
    pub fn display(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }
}

/// A field whose option key this build does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnrecognizedOption {
    pub field: String,
    pub key: String,
}

/// Summary shown next to the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetrics {
    pub title: String,
    pub active_addons: usize,
    pub readings: Vec<Reading>,
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unrecognized: Vec<UnrecognizedOption>,
}

impl BuildMetrics {
    pub fn from_configuration(config: &Configuration) -> Self {
        Self {
            title: config.title.clone(),
            active_addons: config.active_addon_count(),
            readings: config
                .dynamics()
                .iter()
                .map(|(label, value)| Reading {
                    label: label.to_string(),
                    value: value.value(),
                    suffix: "%".to_string(),
                })
                .collect(),
            notes: config.notes.clone(),
            unrecognized: config
                .unrecognized_options()
                .into_iter()
                .map(|(field, key)| UnrecognizedOption {
                    field: field.to_string(),
                    key,
                })
                .collect(),
        }
    }
}
