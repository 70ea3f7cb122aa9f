use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::addon::{Addon, AddonId, AddonUpdate};
use crate::color::{self, Color};
use crate::options::*;
use crate::percent::Percent;

/// Every user-chosen garment attribute at a point in time.
///
/// A `Configuration` is never edited in place by the designer: each edit
/// method returns a new value and the caller swaps it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub fabric: Fabric,
    pub fit: Fit,
    pub size: Size,
    pub neckline: Neckline,
    pub sleeve: Sleeve,
    pub length: Length,
    pub hem: Hem,
    pub pattern: Pattern,
    pub material_finish: MaterialFinish,
    pub stitch: Stitch,
    pub opacity: Percent,
    pub stretch: Percent,
    pub structure: Percent,
    pub layering: Layering,
    pub base_color: Color,
    pub accent_color: Color,
    #[serde(default)]
    pub personalization_text: String,
    pub personalization_placement: PersonalizationPlacement,
    #[serde(default)]
    pub addons: BTreeMap<AddonId, Addon>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            title: "Atelier Prototype 01".to_string(),
            notes: None,
            fabric: Fabric::OrganicCotton,
            fit: Fit::Regular,
            size: Size::M,
            neckline: Neckline::Crew,
            sleeve: Sleeve::ClassicShort,
            length: Length::Classic,
            hem: Hem::Straight,
            pattern: Pattern::Solid,
            material_finish: MaterialFinish::Matte,
            stitch: Stitch::Tonal,
            opacity: Percent::new(80),
            stretch: Percent::new(35),
            structure: Percent::new(55),
            layering: Layering::Single,
            base_color: Color::from(color::ONYX),
            accent_color: Color::from(color::VOLT),
            personalization_text: String::new(),
            personalization_placement: PersonalizationPlacement::Chest,
            addons: AddonId::known()
                .iter()
                .map(|id| (id.clone(), Addon::new(id.clone())))
                .collect(),
        }
    }
}

/// A single-field edit, as sent by a form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldEdit {
    Title(String),
    Notes(Option<String>),
    Fabric(Fabric),
    Fit(Fit),
    Size(Size),
    Neckline(Neckline),
    Sleeve(Sleeve),
    Length(Length),
    Hem(Hem),
    Pattern(Pattern),
    MaterialFinish(MaterialFinish),
    Stitch(Stitch),
    Opacity(Percent),
    Stretch(Percent),
    Structure(Percent),
    Layering(Layering),
    /// Raw color input; parsed when applied.
    BaseColor(String),
    AccentColor(String),
    PersonalizationText(String),
    PersonalizationPlacement(PersonalizationPlacement),
}

impl FieldEdit {
    /// The camelCase name of the field this edit targets.
    pub fn field(&self) -> &'static str {
        match self {
            FieldEdit::Title(_) => "title",
            FieldEdit::Notes(_) => "notes",
            FieldEdit::Fabric(_) => "fabric",
            FieldEdit::Fit(_) => "fit",
            FieldEdit::Size(_) => "size",
            FieldEdit::Neckline(_) => "neckline",
            FieldEdit::Sleeve(_) => "sleeve",
            FieldEdit::Length(_) => "length",
            FieldEdit::Hem(_) => "hem",
            FieldEdit::Pattern(_) => "pattern",
            FieldEdit::MaterialFinish(_) => "materialFinish",
            FieldEdit::Stitch(_) => "stitch",
            FieldEdit::Opacity(_) => "opacity",
            FieldEdit::Stretch(_) => "stretch",
            FieldEdit::Structure(_) => "structure",
            FieldEdit::Layering(_) => "layering",
            FieldEdit::BaseColor(_) => "baseColor",
            FieldEdit::AccentColor(_) => "accentColor",
            FieldEdit::PersonalizationText(_) => "personalizationText",
            FieldEdit::PersonalizationPlacement(_) => "personalizationPlacement",
        }
    }

    /// The option key carried by the edit when it is not in its declared set.
    fn unrecognized_key(&self) -> Option<&str> {
        fn check<T: OptionSet>(value: &T) -> Option<&str> {
            (!value.is_known()).then(|| value.key())
        }
        match self {
            FieldEdit::Fabric(v) => check(v),
            FieldEdit::Fit(v) => check(v),
            FieldEdit::Size(v) => check(v),
            FieldEdit::Neckline(v) => check(v),
            FieldEdit::Sleeve(v) => check(v),
            FieldEdit::Length(v) => check(v),
            FieldEdit::Hem(v) => check(v),
            FieldEdit::Pattern(v) => check(v),
            FieldEdit::MaterialFinish(v) => check(v),
            FieldEdit::Stitch(v) => check(v),
            FieldEdit::Layering(v) => check(v),
            FieldEdit::PersonalizationPlacement(v) => check(v),
            _ => None,
        }
    }
}

/// Which of the two garment colors a free-text input targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorSlot {
    Base,
    Accent,
}

fn parse_or_keep(slot: ColorSlot, input: &str, prior: &Color) -> Color {
    match Color::parse(input) {
        Ok(color) => color,
        Err(e) => {
            debug!(?slot, error = %e, "keeping prior color");
            prior.clone()
        }
    }
}

impl Configuration {
    /// A copy with one field replaced.
    ///
    /// Edits carrying an option key outside the declared set are dropped and
    /// the copy is returned unchanged.
    pub fn apply(&self, edit: FieldEdit) -> Self {
        if let Some(key) = edit.unrecognized_key() {
            debug!(field = edit.field(), key, "rejecting edit with unrecognized option");
            return self.clone();
        }

        let mut next = self.clone();
        match edit {
            FieldEdit::Title(title) => next.title = title,
            FieldEdit::Notes(notes) => {
                next.notes = notes.filter(|n| !n.trim().is_empty());
            }
            FieldEdit::Fabric(v) => next.fabric = v,
            FieldEdit::Fit(v) => next.fit = v,
            FieldEdit::Size(v) => next.size = v,
            FieldEdit::Neckline(v) => next.neckline = v,
            FieldEdit::Sleeve(v) => next.sleeve = v,
            FieldEdit::Length(v) => next.length = v,
            FieldEdit::Hem(v) => next.hem = v,
            FieldEdit::Pattern(v) => next.pattern = v,
            FieldEdit::MaterialFinish(v) => next.material_finish = v,
            FieldEdit::Stitch(v) => next.stitch = v,
            FieldEdit::Opacity(v) => next.opacity = v,
            FieldEdit::Stretch(v) => next.stretch = v,
            FieldEdit::Structure(v) => next.structure = v,
            FieldEdit::Layering(v) => next.layering = v,
            FieldEdit::BaseColor(input) => {
                next.base_color = parse_or_keep(ColorSlot::Base, &input, &self.base_color);
            }
            FieldEdit::AccentColor(input) => {
                next.accent_color = parse_or_keep(ColorSlot::Accent, &input, &self.accent_color);
            }
            FieldEdit::PersonalizationText(v) => next.personalization_text = v,
            FieldEdit::PersonalizationPlacement(v) => next.personalization_placement = v,
        }
        next
    }

    /// A copy with the color in `slot` replaced by parsed free-text input.
    ///
    /// Invalid input is silently rejected: the prior color is retained.
    pub fn with_color_input(&self, slot: ColorSlot, input: &str) -> Self {
        let input = input.to_string();
        match slot {
            ColorSlot::Base => self.apply(FieldEdit::BaseColor(input)),
            ColorSlot::Accent => self.apply(FieldEdit::AccentColor(input)),
        }
    }

    /// A copy with one add-on partially updated.
    ///
    /// A known add-on missing from the map starts from its catalog default.
    /// Unrecognized ids leave the configuration unchanged.
    pub fn with_addon(&self, id: &AddonId, update: &AddonUpdate) -> Self {
        if !id.is_known() {
            debug!(addon = %id, "ignoring update for unrecognized add-on");
            return self.clone();
        }
        let current = self
            .addons
            .get(id)
            .cloned()
            .unwrap_or_else(|| Addon::new(id.clone()));

        let mut next = self.clone();
        next.addons.insert(id.clone(), current.updated(update));
        next
    }

    /// A copy with the add-on's enabled flag flipped.
    pub fn toggle_addon(&self, id: &AddonId) -> Self {
        let enabled = self.addons.get(id).is_some_and(|a| a.enabled);
        self.with_addon(id, &AddonUpdate::enabled(!enabled))
    }

    /// Structural merge: every field set in `patch` replaces the live value,
    /// add-ons merge per key, everything else is retained.
    pub fn merged(&self, patch: &ConfigurationPatch) -> Self {
        let mut next = self.clone();

        macro_rules! take {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = &patch.$field {
                        next.$field = value.clone();
                    }
                )+
            };
        }
        take!(
            title,
            fabric,
            fit,
            size,
            neckline,
            sleeve,
            length,
            hem,
            pattern,
            material_finish,
            stitch,
            opacity,
            stretch,
            structure,
            layering,
            base_color,
            accent_color,
            personalization_text,
            personalization_placement,
        );
        if let Some(notes) = &patch.notes {
            next.notes = (!notes.trim().is_empty()).then(|| notes.clone());
        }

        for (id, addon) in &patch.addons {
            if !id.is_known() {
                continue;
            }
            let mut addon = addon.clone();
            addon.id = id.clone();
            next.addons.insert(id.clone(), addon);
        }
        next
    }

    /// Normalize a value that arrived from outside the edit API.
    ///
    /// Drops add-on entries whose key is not a known add-on and re-keys
    /// entries whose `id` disagrees with their map key. Unrecognized option
    /// values on the attribute fields are kept; they render with fallbacks.
    pub fn sanitized(mut self) -> Self {
        let addons = std::mem::take(&mut self.addons);
        for (key, mut addon) in addons {
            if !key.is_known() {
                warn!(addon = %key, "dropping unrecognized add-on");
                continue;
            }
            if addon.id != key {
                debug!(key = %key, id = %addon.id, "re-keying add-on");
                addon.id = key.clone();
            }
            self.addons.insert(key, addon);
        }

        for (field, key) in self.unrecognized_options() {
            debug!(field, key = %key, "configuration carries an unrecognized option");
        }
        self
    }

    /// Fields holding an option key outside their declared set.
    pub fn unrecognized_options(&self) -> Vec<(&'static str, String)> {
        let mut found = Vec::new();
        let mut check = |field: &'static str, known: bool, key: &str| {
            if !known {
                found.push((field, key.to_string()));
            }
        };
        check("fabric", self.fabric.is_known(), self.fabric.key());
        check("fit", self.fit.is_known(), self.fit.key());
        check("size", self.size.is_known(), self.size.key());
        check("neckline", self.neckline.is_known(), self.neckline.key());
        check("sleeve", self.sleeve.is_known(), self.sleeve.key());
        check("length", self.length.is_known(), self.length.key());
        check("hem", self.hem.is_known(), self.hem.key());
        check("pattern", self.pattern.is_known(), self.pattern.key());
        check(
            "materialFinish",
            self.material_finish.is_known(),
            self.material_finish.key(),
        );
        check("stitch", self.stitch.is_known(), self.stitch.key());
        check("layering", self.layering.is_known(), self.layering.key());
        check(
            "personalizationPlacement",
            self.personalization_placement.is_known(),
            self.personalization_placement.key(),
        );
        found
    }

    /// Enabled add-ons, in key order.
    pub fn enabled_addons(&self) -> impl Iterator<Item = &Addon> {
        self.addons.values().filter(|a| a.enabled)
    }

    pub fn active_addon_count(&self) -> usize {
        self.enabled_addons().count()
    }

    /// The three material dynamics as `(label, value)` pairs.
    pub fn dynamics(&self) -> [(&'static str, Percent); 3] {
        [
            ("Opacity", self.opacity),
            ("Stretch", self.stretch),
            ("Structure", self.structure),
        ]
    }
}

/// A partial configuration. Absent fields leave the target untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric: Option<Fabric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<Fit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neckline: Option<Neckline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleeve: Option<Sleeve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hem: Option<Hem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_finish: Option<MaterialFinish>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stitch: Option<Stitch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stretch: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layering: Option<Layering>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalization_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalization_placement: Option<PersonalizationPlacement>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub addons: BTreeMap<AddonId, Addon>,
}

impl ConfigurationPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Enabled add-ons carried by the patch, in key order.
    pub fn enabled_addons(&self) -> impl Iterator<Item = &Addon> {
        self.addons.values().filter(|a| a.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addon::Placement;

    #[test]
    fn default_carries_every_known_addon_disabled() {
        let config = Configuration::default();
        assert_eq!(config.addons.len(), AddonId::known().len());
        assert_eq!(config.active_addon_count(), 0);
    }

    #[test]
    fn apply_returns_new_value_and_leaves_original() {
        let config = Configuration::default();
        let next = config.apply(FieldEdit::Neckline(Neckline::Mock));
        assert_eq!(next.neckline, Neckline::Mock);
        assert_eq!(config.neckline, Neckline::Crew);
    }

    #[test]
    fn apply_rejects_unrecognized_option_keys() {
        let config = Configuration::default();
        let next = config.apply(FieldEdit::Sleeve(Sleeve::from_key("raglan")));
        assert_eq!(next, config);
    }

    #[test]
    fn blank_notes_clear_the_field() {
        let config = Configuration::default().apply(FieldEdit::Notes(Some("bartack".into())));
        assert_eq!(config.notes.as_deref(), Some("bartack"));
        let cleared = config.apply(FieldEdit::Notes(Some("   ".into())));
        assert_eq!(cleared.notes, None);
    }

    #[test]
    fn invalid_color_input_keeps_prior_color() {
        let config = Configuration::default();
        let next = config.with_color_input(ColorSlot::Accent, "#12");
        assert_eq!(next.accent_color, config.accent_color);
        let next = config.with_color_input(ColorSlot::Accent, "#ff0044");
        assert_eq!(next.accent_color.as_str(), "#ff0044");
    }

    #[test]
    fn malformed_color_edit_keeps_prior_color() {
        let config = Configuration::default();
        let next = config.apply(FieldEdit::BaseColor("#12".into()));
        assert_eq!(next.base_color, config.base_color);
        let next = config.apply(FieldEdit::BaseColor("volt".into()));
        assert_eq!(next.base_color.as_str(), color::VOLT.hex);
    }

    #[test]
    fn addon_update_for_missing_known_addon_starts_from_default() {
        let mut config = Configuration::default();
        config.addons.clear();
        let next = config.with_addon(&AddonId::Pocket, &AddonUpdate::enabled(true));
        let pocket = &next.addons[&AddonId::Pocket];
        assert!(pocket.enabled);
        assert_eq!(pocket.intensity.value(), 50);
        assert_eq!(pocket.placement, Placement::Chest);
    }

    #[test]
    fn addon_update_for_unknown_id_is_a_no_op() {
        let config = Configuration::default();
        let next = config.with_addon(&AddonId::from_key("cape"), &AddonUpdate::enabled(true));
        assert_eq!(next, config);
    }

    #[test]
    fn toggle_flips_enabled() {
        let config = Configuration::default().toggle_addon(&AddonId::Zipper);
        assert!(config.addons[&AddonId::Zipper].enabled);
        let config = config.toggle_addon(&AddonId::Zipper);
        assert!(!config.addons[&AddonId::Zipper].enabled);
    }

    #[test]
    fn sanitized_drops_unknown_addon_keys_and_rekeys() {
        let mut config = Configuration::default();
        let stray = AddonId::from_key("cape");
        config.addons.insert(stray.clone(), Addon::new(stray.clone()));
        let mut zipper = Addon::new(AddonId::Pocket);
        zipper.enabled = true;
        config.addons.insert(AddonId::Zipper, zipper);

        let clean = config.sanitized();
        assert!(!clean.addons.contains_key(&stray));
        assert_eq!(clean.addons[&AddonId::Zipper].id, AddonId::Zipper);
    }

    #[test]
    fn merge_only_touches_patched_fields() {
        let live = Configuration::default()
            .apply(FieldEdit::Size(Size::Xl))
            .apply(FieldEdit::PersonalizationText("NOVA".into()));
        let patch = ConfigurationPatch {
            fabric: Some(Fabric::TechnicalMesh),
            stretch: Some(Percent::new(90)),
            ..ConfigurationPatch::default()
        };
        let merged = live.merged(&patch);
        assert_eq!(merged.fabric, Fabric::TechnicalMesh);
        assert_eq!(merged.stretch.value(), 90);
        assert_eq!(merged.size, Size::Xl);
        assert_eq!(merged.personalization_text, "NOVA");
        assert_eq!(merged.addons, live.addons);
    }

    #[test]
    fn merge_clears_blank_notes() {
        let live = Configuration::default().apply(FieldEdit::Notes(Some("bartack".into())));
        let patch = ConfigurationPatch {
            notes: Some("   ".into()),
            ..ConfigurationPatch::default()
        };
        assert_eq!(live.merged(&patch).notes, None);
    }

    #[test]
    fn unrecognized_options_are_reported_by_field() {
        let mut config = Configuration::default();
        config.hem = Hem::from_key("scalloped");
        assert_eq!(
            config.unrecognized_options(),
            vec![("hem", "scalloped".to_string())]
        );
    }
}
