//! Per-vibe bias tables.
//!
//! A table is data: the built-in one is authored in [`crate::builtin`], and
//! alternatives can be loaded from JSON. Every table is validated when it is
//! constructed, so sampling from a [`BiasTable`] never fails.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tee_types::*;

use crate::vibe::Vibe;

/// Relative weights keyed by option value. Serialized as a JSON object.
pub type Weights<T> = BTreeMap<T, u32>;

/// An inclusive percentage range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub min: Percent,
    pub max: Percent,
}

impl Span {
    pub fn new(min: u8, max: u8) -> Self {
        Self {
            min: Percent::from(min),
            max: Percent::from(max),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Percent {
        Percent::from(rng.random_range(self.min.value()..=self.max.value()))
    }
}

/// How a vibe enables and shapes add-ons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonProfile {
    /// Chance each add-on is enabled. Missing add-ons are never enabled.
    pub probability: BTreeMap<AddonId, f64>,
    pub intensity: Span,
    pub placements: Weights<Placement>,
}

/// Words for generated titles: `"{adjective} {noun}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
}

/// Everything a single vibe biases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeProfile {
    pub fabric: Weights<Fabric>,
    pub fit: Weights<Fit>,
    pub neckline: Weights<Neckline>,
    pub sleeve: Weights<Sleeve>,
    pub length: Weights<Length>,
    pub hem: Weights<Hem>,
    pub pattern: Weights<Pattern>,
    pub material_finish: Weights<MaterialFinish>,
    pub stitch: Weights<Stitch>,
    pub layering: Weights<Layering>,
    pub opacity: Span,
    pub stretch: Span,
    pub structure: Span,
    pub base_colors: Vec<Color>,
    pub accent_colors: Vec<Color>,
    pub addons: AddonProfile,
    pub title: Lexicon,
    /// One sentence on the mood, used in the narrative.
    pub mood: String,
    /// Follow-up directives offered as the prompt suggestion.
    pub directives: Vec<String>,
}

/// Errors from loading or constructing a bias table.
#[derive(Debug, thiserror::Error)]
pub enum BiasTableError {
    #[error("bias table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown vibe {key:?}")]
    UnknownVibe { key: String },

    #[error("missing profile for vibe {vibe}")]
    MissingVibe { vibe: String },

    #[error("{vibe}.{field}: unknown option {key:?}")]
    UnknownOption {
        vibe: String,
        field: &'static str,
        key: String,
    },

    #[error("{vibe}.{field}: list is empty")]
    EmptyList { vibe: String, field: &'static str },

    #[error("{vibe}.{field}: weights sum to zero")]
    ZeroWeight { vibe: String, field: &'static str },

    #[error("{vibe}.{field}: weights sum past u32::MAX")]
    WeightOverflow { vibe: String, field: &'static str },

    #[error("{vibe}.addons.probability.{addon}: {value} is outside [0, 1]")]
    Probability {
        vibe: String,
        addon: String,
        value: f64,
    },

    #[error("{vibe}.{field}: min {min} is above max {max}")]
    InvertedRange {
        vibe: String,
        field: &'static str,
        min: u8,
        max: u8,
    },
}

/// A validated set of vibe profiles, one per known vibe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiasTable {
    profiles: BTreeMap<Vibe, VibeProfile>,
}

impl BiasTable {
    /// Validate and wrap a set of profiles.
    pub fn new(profiles: BTreeMap<Vibe, VibeProfile>) -> Result<Self, BiasTableError> {
        for vibe in Vibe::known() {
            if !profiles.contains_key(vibe) {
                return Err(BiasTableError::MissingVibe {
                    vibe: vibe.to_string(),
                });
            }
        }
        for (vibe, profile) in &profiles {
            if !vibe.is_known() {
                return Err(BiasTableError::UnknownVibe {
                    key: vibe.to_string(),
                });
            }
            validate_profile(vibe.key(), profile)?;
        }
        Ok(Self { profiles })
    }

    /// Wrap authored profiles without validation. `builtin_table_validates`
    /// checks the built-in data.
    pub(crate) fn authored(profiles: BTreeMap<Vibe, VibeProfile>) -> Self {
        Self { profiles }
    }

    /// Load a table from JSON: an object keyed by vibe.
    pub fn from_json(json: &str) -> Result<Self, BiasTableError> {
        let profiles: BTreeMap<Vibe, VibeProfile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.profiles)
    }

    /// The shared built-in table.
    pub fn builtin() -> Arc<BiasTable> {
        static BUILTIN: OnceLock<Arc<BiasTable>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Arc::new(crate::builtin::table()))
            .clone()
    }

    /// Profile for `vibe`. Unrecognized vibes use the minimal studio profile.
    pub fn profile(&self, vibe: &Vibe) -> &VibeProfile {
        match self.profiles.get(vibe) {
            Some(profile) => profile,
            None => {
                tracing::debug!(vibe = %vibe, "unrecognized vibe, using minimal studio");
                &self.profiles[&Vibe::MinimalStudio]
            }
        }
    }

    pub fn vibes(&self) -> impl Iterator<Item = &Vibe> {
        self.profiles.keys()
    }
}

/// Weighted pick. `None` only for an empty or zero-weight map, which a
/// validated table never holds.
pub fn pick<T: Clone, R: Rng + ?Sized>(weights: &Weights<T>, rng: &mut R) -> Option<T> {
    let entries: Vec<(&T, &u32)> = weights.iter().collect();
    entries
        .choose_weighted(rng, |(_, weight)| **weight)
        .ok()
        .map(|(value, _)| (*value).clone())
}

fn validate_weights<T: OptionSet>(
    vibe: &str,
    field: &'static str,
    weights: &Weights<T>,
) -> Result<(), BiasTableError> {
    if weights.is_empty() {
        return Err(BiasTableError::EmptyList {
            vibe: vibe.to_string(),
            field,
        });
    }
    if let Some(unknown) = weights.keys().find(|k| !k.is_known()) {
        return Err(BiasTableError::UnknownOption {
            vibe: vibe.to_string(),
            field,
            key: unknown.key().to_string(),
        });
    }
    // Sampling accumulates weights as u32.
    let total: u64 = weights.values().map(|w| u64::from(*w)).sum();
    if total == 0 {
        return Err(BiasTableError::ZeroWeight {
            vibe: vibe.to_string(),
            field,
        });
    }
    if total > u64::from(u32::MAX) {
        return Err(BiasTableError::WeightOverflow {
            vibe: vibe.to_string(),
            field,
        });
    }
    Ok(())
}

fn validate_span(vibe: &str, field: &'static str, span: &Span) -> Result<(), BiasTableError> {
    if span.min > span.max {
        return Err(BiasTableError::InvertedRange {
            vibe: vibe.to_string(),
            field,
            min: span.min.value(),
            max: span.max.value(),
        });
    }
    Ok(())
}

fn validate_list<T>(vibe: &str, field: &'static str, list: &[T]) -> Result<(), BiasTableError> {
    if list.is_empty() {
        return Err(BiasTableError::EmptyList {
            vibe: vibe.to_string(),
            field,
        });
    }
    Ok(())
}

fn validate_profile(vibe: &str, p: &VibeProfile) -> Result<(), BiasTableError> {
    validate_weights(vibe, "fabric", &p.fabric)?;
    validate_weights(vibe, "fit", &p.fit)?;
    validate_weights(vibe, "neckline", &p.neckline)?;
    validate_weights(vibe, "sleeve", &p.sleeve)?;
    validate_weights(vibe, "length", &p.length)?;
    validate_weights(vibe, "hem", &p.hem)?;
    validate_weights(vibe, "pattern", &p.pattern)?;
    validate_weights(vibe, "materialFinish", &p.material_finish)?;
    validate_weights(vibe, "stitch", &p.stitch)?;
    validate_weights(vibe, "layering", &p.layering)?;
    validate_weights(vibe, "addons.placements", &p.addons.placements)?;

    validate_span(vibe, "opacity", &p.opacity)?;
    validate_span(vibe, "stretch", &p.stretch)?;
    validate_span(vibe, "structure", &p.structure)?;
    validate_span(vibe, "addons.intensity", &p.addons.intensity)?;

    validate_list(vibe, "baseColors", &p.base_colors)?;
    validate_list(vibe, "accentColors", &p.accent_colors)?;
    validate_list(vibe, "title.adjectives", &p.title.adjectives)?;
    validate_list(vibe, "title.nouns", &p.title.nouns)?;
    validate_list(vibe, "directives", &p.directives)?;

    for (addon, value) in &p.addons.probability {
        if !addon.is_known() {
            return Err(BiasTableError::UnknownOption {
                vibe: vibe.to_string(),
                field: "addons.probability",
                key: addon.key().to_string(),
            });
        }
        if !(0.0..=1.0).contains(value) {
            return Err(BiasTableError::Probability {
                vibe: vibe.to_string(),
                addon: addon.key().to_string(),
                value: *value,
            });
        }
    }
    Ok(())
}
