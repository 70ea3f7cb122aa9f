use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tee_types::{Configuration, ConfigurationPatch};
use uuid::Uuid;

use crate::vibe::Vibe;

/// Characters of narrative kept by [`GeneratedPreset::teaser`].
pub const TEASER_CHARS: usize = 64;

/// A candidate configuration produced for a vibe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPreset {
    pub id: Uuid,
    pub vibe: Vibe,
    /// Only the fields the vibe dictates.
    pub configuration: ConfigurationPatch,
    pub narrative: String,
    pub prompt_suggestion: String,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedPreset {
    pub fn title(&self) -> &str {
        self.configuration.title.as_deref().unwrap_or_default()
    }

    /// Structural merge onto `base`.
    pub fn apply_to(&self, base: &Configuration) -> Configuration {
        base.merged(&self.configuration)
    }

    /// Shortened narrative for history entries.
    pub fn teaser(&self) -> String {
        let mut teaser: String = self.narrative.chars().take(TEASER_CHARS).collect();
        teaser.push('…');
        teaser
    }

    /// Labels of the add-ons this preset enables, in key order.
    pub fn enabled_addon_labels(&self) -> Vec<String> {
        self.configuration
            .enabled_addons()
            .map(|addon| match addon.id.definition() {
                Some(def) => def.label.to_string(),
                None => addon.id.to_string(),
            })
            .collect()
    }
}
