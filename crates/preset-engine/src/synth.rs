use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use rand::seq::IndexedRandom;
use rand::Rng;
use tee_types::*;
use tracing::{debug, instrument};

use crate::bias::{pick, BiasTable, VibeProfile};
use crate::preset::GeneratedPreset;
use crate::vibe::Vibe;

/// Produces vibe-biased presets from a bias table.
#[derive(Debug, Clone)]
pub struct PresetSynthesizer {
    table: Arc<BiasTable>,
}

impl PresetSynthesizer {
    pub fn new(table: Arc<BiasTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &BiasTable {
        &self.table
    }

    /// Generate with the thread-local RNG. Not reproducible across calls.
    pub fn generate(&self, base: &Configuration, vibe: &Vibe) -> GeneratedPreset {
        self.generate_with(base, vibe, &mut rand::rng())
    }

    /// Generate with a caller-supplied RNG.
    ///
    /// Only the fields the vibe dictates are set on the patch. Size, notes
    /// and personalization are left to `base`.
    #[instrument(level = "debug", skip_all, fields(vibe = %vibe))]
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        base: &Configuration,
        vibe: &Vibe,
        rng: &mut R,
    ) -> GeneratedPreset {
        let profile = self.table.profile(vibe);

        let mut patch = ConfigurationPatch {
            fabric: pick(&profile.fabric, rng),
            fit: pick(&profile.fit, rng),
            neckline: pick(&profile.neckline, rng),
            sleeve: pick(&profile.sleeve, rng),
            length: pick(&profile.length, rng),
            hem: pick(&profile.hem, rng),
            pattern: pick(&profile.pattern, rng),
            material_finish: pick(&profile.material_finish, rng),
            stitch: pick(&profile.stitch, rng),
            layering: pick(&profile.layering, rng),
            opacity: Some(profile.opacity.sample(rng)),
            stretch: Some(profile.stretch.sample(rng)),
            structure: Some(profile.structure.sample(rng)),
            base_color: profile.base_colors.choose(rng).cloned(),
            accent_color: profile.accent_colors.choose(rng).cloned(),
            addons: sample_addons(profile, rng),
            ..ConfigurationPatch::default()
        };
        patch.title = Some(title(profile, rng));

        let narrative = narrative(base, &patch, profile);
        let prompt_suggestion = prompt_suggestion(&patch, profile, rng);
        let id = uuid::Builder::from_random_bytes(rng.random()).into_uuid();

        debug!(
            %id,
            title = patch.title.as_deref().unwrap_or_default(),
            addons = patch.enabled_addons().count(),
            "preset generated"
        );

        GeneratedPreset {
            id,
            vibe: vibe.clone(),
            configuration: patch,
            narrative,
            prompt_suggestion,
            generated_at: Utc::now(),
        }
    }
}

impl Default for PresetSynthesizer {
    fn default() -> Self {
        Self::new(BiasTable::builtin())
    }
}

/// Generate a preset from the built-in table with the thread-local RNG.
pub fn generate_preset(base: &Configuration, vibe: &Vibe) -> GeneratedPreset {
    PresetSynthesizer::default().generate(base, vibe)
}

fn sample_addons<R: Rng + ?Sized>(profile: &VibeProfile, rng: &mut R) -> BTreeMap<AddonId, Addon> {
    AddonId::known()
        .iter()
        .map(|id| {
            let chance = profile.addons.probability.get(id).copied().unwrap_or(0.0);
            let addon = Addon {
                id: id.clone(),
                enabled: rng.random_bool(chance),
                intensity: profile.addons.intensity.sample(rng),
                placement: pick(&profile.addons.placements, rng).unwrap_or(Placement::Chest),
            };
            (id.clone(), addon)
        })
        .collect()
}

fn title<R: Rng + ?Sized>(profile: &VibeProfile, rng: &mut R) -> String {
    let adjective = profile.title.adjectives.choose(rng);
    let noun = profile.title.nouns.choose(rng);
    match (adjective, noun) {
        (Some(a), Some(n)) => format!("{a} {n}"),
        (Some(w), None) | (None, Some(w)) => w.clone(),
        (None, None) => "Untitled Preset".to_string(),
    }
}

fn lower<T: OptionSet>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.label().to_lowercase())
        .unwrap_or_default()
}

fn narrative(base: &Configuration, patch: &ConfigurationPatch, profile: &VibeProfile) -> String {
    let fabric = lower(&patch.fabric);
    let fabric_clause = match &patch.fabric {
        Some(f) if *f != base.fabric => {
            format!("swaps {} for {fabric}", base.fabric.label().to_lowercase())
        }
        _ => format!("keeps its {fabric} base"),
    };

    let addons: Vec<String> = patch
        .enabled_addons()
        .map(|a| match a.id.definition() {
            Some(def) => def.label.to_lowercase(),
            None => a.id.to_string(),
        })
        .collect();
    let addon_clause = match addons.as_slice() {
        [] => "no add-ons".to_string(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    };

    format!(
        "{title} {fabric_clause}, cut {fit} with a {neckline} neckline and {sleeve} sleeves, \
         finished {finish} over a {pattern} surface with {addon_clause}. {mood}",
        title = patch.title.as_deref().unwrap_or_default(),
        fit = lower(&patch.fit),
        neckline = lower(&patch.neckline),
        sleeve = lower(&patch.sleeve),
        finish = lower(&patch.material_finish),
        pattern = lower(&patch.pattern),
        mood = profile.mood,
    )
}

fn prompt_suggestion<R: Rng + ?Sized>(
    patch: &ConfigurationPatch,
    profile: &VibeProfile,
    rng: &mut R,
) -> String {
    let directive = profile
        .directives
        .choose(rng)
        .map(String::as_str)
        .unwrap_or("Iterate on the silhouette");
    let stretch = patch.stretch.map(|s| s.value()).unwrap_or_default();
    format!(
        "{directive}, keeping the {} hand-feel at {stretch}% stretch.",
        lower(&patch.fabric)
    )
}
