use serde::{Deserialize, Serialize};

use crate::options::OptionSet;
use crate::percent::Percent;

crate::option_set! {
    /// Identifier of a modular embellishment.
    AddonId {
        Rhinestones => ("rhinestones", "Rhinestone Constellation"),
        Zipper => ("zipper", "Utility Zipper"),
        Pocket => ("pocket", "Patch Pocket"),
        Embroidery => ("embroidery", "Embroidered Motif"),
        Paneling => ("paneling", "Sculpted Paneling"),
        Modular => ("modular", "Modular Grid"),
    }
}

crate::option_set! {
    /// Anchor zone for an add-on on the garment.
    Placement {
        Chest => ("chest", "Chest"),
        Shoulder => ("shoulder", "Shoulder"),
        Hem => ("hem", "Hem"),
        Back => ("back", "Back"),
        Sleeve => ("sleeve", "Sleeve"),
        Floating => ("floating", "Floating"),
    }
}

/// Catalog entry describing a known add-on.
#[derive(Debug, Clone, Copy)]
pub struct AddonDefinition {
    pub label: &'static str,
    pub description: &'static str,
    pub default_intensity: u8,
}

impl AddonId {
    /// Catalog entry, or `None` for an unrecognized id.
    pub fn definition(&self) -> Option<AddonDefinition> {
        let (label, description) = match self {
            AddonId::Rhinestones => (
                "Rhinestone Constellation",
                "Crystal glints set along the placement line.",
            ),
            AddonId::Zipper => ("Utility Zipper", "Exposed zip track with a matte pull."),
            AddonId::Pocket => ("Patch Pocket", "Structured patch pocket with bonded edges."),
            AddonId::Embroidery => (
                "Embroidered Motif",
                "Satin-stitched marks repeated across the panel.",
            ),
            AddonId::Paneling => ("Sculpted Paneling", "Contoured inset panel with bonded seams."),
            AddonId::Modular => ("Modular Grid", "Snap-on tile grid for swappable modules."),
            AddonId::Other(_) => return None,
        };
        Some(AddonDefinition {
            label,
            description,
            default_intensity: 50,
        })
    }
}

/// State of one add-on module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    pub id: AddonId,
    pub enabled: bool,
    pub intensity: Percent,
    pub placement: Placement,
}

impl Addon {
    /// The catalog default for `id`: disabled, default intensity, chest.
    pub fn new(id: AddonId) -> Self {
        let intensity = id
            .definition()
            .map(|d| Percent::from(d.default_intensity))
            .unwrap_or(Percent::new(50));
        Self {
            id,
            enabled: false,
            intensity,
            placement: Placement::Chest,
        }
    }

    /// Intensity as a fraction in [0, 1].
    pub fn scale(&self) -> f64 {
        self.intensity.fraction()
    }

    /// A copy with the fields present in `update` replaced.
    ///
    /// An unrecognized placement in the update is ignored.
    pub fn updated(&self, update: &AddonUpdate) -> Self {
        let mut next = self.clone();
        if let Some(enabled) = update.enabled {
            next.enabled = enabled;
        }
        if let Some(intensity) = update.intensity {
            next.intensity = intensity;
        }
        match &update.placement {
            Some(placement) if placement.is_known() => next.placement = placement.clone(),
            Some(placement) => {
                tracing::debug!(placement = %placement, "ignoring unrecognized add-on placement");
            }
            None => {}
        }
        next
    }
}

/// A partial add-on edit. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
}

impl AddonUpdate {
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Self::default()
        }
    }

    pub fn intensity(intensity: Percent) -> Self {
        Self {
            intensity: Some(intensity),
            ..Self::default()
        }
    }

    pub fn placement(placement: Placement) -> Self {
        Self {
            placement: Some(placement),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_addon_has_a_definition() {
        for id in AddonId::known() {
            assert!(id.definition().is_some(), "{id} missing from catalog");
        }
        assert!(AddonId::from_key("jetpack").definition().is_none());
    }

    #[test]
    fn update_replaces_only_present_fields() {
        let addon = Addon::new(AddonId::Zipper);
        let next = addon.updated(&AddonUpdate::intensity(Percent::new(90)));
        assert_eq!(next.intensity.value(), 90);
        assert!(!next.enabled);
        assert_eq!(next.placement, Placement::Chest);
        // The original value is untouched.
        assert_eq!(addon.intensity.value(), 50);
    }

    #[test]
    fn unknown_placement_update_is_ignored() {
        let addon = Addon::new(AddonId::Pocket);
        let next = addon.updated(&AddonUpdate::placement(Placement::from_key("collar")));
        assert_eq!(next.placement, Placement::Chest);
    }
}
