//! Mapping tests: table lookups, thresholds, overlays and glyphs.

use approx::assert_relative_eq;
use proptest::prelude::*;

use tee_preview::*;
use tee_types::*;

fn with_addon(config: &Configuration, id: AddonId, intensity: i64) -> Configuration {
    config.with_addon(
        &id,
        &AddonUpdate {
            enabled: Some(true),
            intensity: Some(Percent::new(intensity)),
            placement: None,
        },
    )
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

#[test]
fn default_configuration_maps_to_classic_body() {
    let visual = map_to_visual(&Configuration::default());
    assert_eq!(visual.canvas.width, 260.0);
    assert_eq!(visual.canvas.height, 420.0);
    assert_eq!(visual.body.height, 72.0);
    assert_eq!(visual.body.corner_radius.bottom, 12.0);
    // crew depth 18 -> 18 - 4.5
    assert_relative_eq!(visual.body.corner_radius.top, 13.5);
    assert_eq!(visual.sleeves.height, 14.0);
    assert!(visual.glyphs.is_empty());
    assert!(visual.pattern.is_none());
    assert!(visual.finish.is_none());
    assert!(visual.layering.is_none());
}

#[test]
fn shadow_tier_switches_above_sixty_five() {
    let config = Configuration::default();
    let at = |s| {
        map_to_visual(&config.apply(FieldEdit::Structure(Percent::new(s))))
            .body
            .shadow_tier
    };
    assert_eq!(at(65), ShadowTier::Soft);
    assert_eq!(at(66), ShadowTier::Pronounced);
    assert_eq!(at(70), ShadowTier::Pronounced);

    let shadow = ShadowTier::Pronounced.shadow();
    assert_eq!(shadow.offset_y, 22.0);
    assert_eq!(shadow.blur, 40.0);
    assert_relative_eq!(shadow.color.a, 0.25);
}

#[test]
fn accent_band_opacity_switches_above_fifty() {
    let config = Configuration::default();
    let at = |s| {
        map_to_visual(&config.apply(FieldEdit::Structure(Percent::new(s))))
            .accent_band
            .opacity
    };
    assert_relative_eq!(at(50), 0.38);
    assert_relative_eq!(at(51), 0.65);
}

#[test]
fn border_alpha_is_structure_over_one_fifty() {
    let config = Configuration::default().apply(FieldEdit::Structure(Percent::new(90)));
    let visual = map_to_visual(&config);
    assert_relative_eq!(visual.body.border_alpha, 0.6);
    assert_eq!(visual.body.border.width, 2.0);
    assert_eq!(visual.sleeves.border, visual.body.border);
}

#[test]
fn unknown_option_keys_take_table_fallbacks() {
    let mut config = Configuration::default();
    config.sleeve = Sleeve::from_key("unknown");
    config.length = Length::from_key("floorLength");
    config.hem = Hem::from_key("scalloped");
    config.neckline = Neckline::from_key("cowl");
    config.pattern = Pattern::from_key("paisley");
    config.material_finish = MaterialFinish::from_key("metallic");

    let visual = map_to_visual(&config);
    assert_eq!(visual.sleeves.height, 14.0);
    assert_eq!(visual.body.height, 72.0);
    assert_eq!(visual.body.corner_radius.bottom, 12.0);
    assert_eq!(visual.neckline.height, 18.0);
    assert!(visual.pattern.is_none());
    assert!(visual.finish.is_none());
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

#[test]
fn micro_pattern_tiles_with_overlay_blend() {
    let config = Configuration::default()
        .apply(FieldEdit::Pattern(Pattern::MicroPattern))
        .apply(FieldEdit::Opacity(Percent::new(40)));
    let overlay = map_to_visual(&config).pattern.unwrap();
    assert_eq!(overlay.kind, PatternKind::MicroPattern);
    assert_eq!(overlay.blend, BlendMode::Overlay);
    assert_eq!(overlay.tile, Some(16.0));
    assert_relative_eq!(overlay.opacity, 0.4);
}

#[test]
fn art_print_uses_hard_light() {
    let config = Configuration::default().apply(FieldEdit::Pattern(Pattern::ArtPrint));
    let overlay = map_to_visual(&config).pattern.unwrap();
    assert_eq!(overlay.blend, BlendMode::HardLight);
    assert_eq!(overlay.tile, None);
}

#[test]
fn finish_overlay_opacities() {
    let cases = [
        (MaterialFinish::Gloss, Some(0.55)),
        (MaterialFinish::Sheen, Some(0.4)),
        (MaterialFinish::Brushed, Some(0.25)),
        (MaterialFinish::Tech, Some(0.25)),
        (MaterialFinish::Matte, None),
    ];
    for (finish, expected) in cases {
        let config = Configuration::default().apply(FieldEdit::MaterialFinish(finish.clone()));
        let got = map_to_visual(&config).finish.map(|f| f.opacity);
        assert_eq!(got, expected, "finish {finish}");
    }
}

#[test]
fn layering_overlay_variants() {
    let layer = |key: &str| {
        let mut config = Configuration::default();
        config.layering = Layering::from_key(key);
        map_to_visual(&config).layering
    };

    assert!(layer("single").is_none());

    let double = layer("double").unwrap();
    assert_eq!(double.border.style, LineStyle::Dashed);
    assert_eq!(double.border.width, 1.5);
    assert_eq!(double.border.paint, Paint::Rgba(Rgba::ink(0.28)));
    assert_relative_eq!(double.opacity, 0.4);
    assert!(double.dots.is_none());

    let perforated = layer("perforated").unwrap();
    assert_eq!(perforated.border.paint, Paint::Rgba(Rgba::ink(0.18)));
    assert_relative_eq!(perforated.opacity, 0.65);
    assert_eq!(perforated.dots.unwrap().spacing, 12.0);

    let unknown = layer("quilted").unwrap();
    assert_eq!(unknown.border.paint, Paint::Rgba(Rgba::ink(0.18)));
    assert_relative_eq!(unknown.opacity, 0.4);
    assert!(unknown.dots.is_none());
}

// ---------------------------------------------------------------------------
// Neckline and sleeves
// ---------------------------------------------------------------------------

#[test]
fn mock_neckline_is_filled_without_border() {
    let config = Configuration::default().apply(FieldEdit::Neckline(Neckline::Mock));
    let band = map_to_visual(&config).neckline;
    assert_eq!(band.fill, Some(config.base_color.clone()));
    assert!(band.bottom_border.is_none());
    assert_eq!(band.height, 12.0);
}

#[test]
fn crew_neckline_has_accent_bottom_border() {
    let config = Configuration::default();
    let band = map_to_visual(&config).neckline;
    assert!(band.fill.is_none());
    let border = band.bottom_border.unwrap();
    assert_eq!(border.width, 6.0);
    assert_eq!(border.paint, Paint::Color(config.accent_color.clone()));
    assert_relative_eq!(band.width_fraction, 0.55);
    assert_eq!(band.bottom_radius, 48.0);
    assert_eq!(band.rotation_deg, 0.0);
}

#[test]
fn neckline_shape_variants() {
    let band = |n: Neckline| map_to_visual(&Configuration::default().apply(FieldEdit::Neckline(n))).neckline;
    let off = band(Neckline::OffShoulder);
    assert_relative_eq!(off.width_fraction, 0.82);
    assert_relative_eq!(off.width, 260.0 * 0.82);
    assert_eq!(band(Neckline::SculptedV).bottom_radius, 10.0);
    assert_eq!(band(Neckline::Asymmetric).rotation_deg, -4.0);
}

#[test]
fn sleeve_rotation_reacts_one_side_at_a_time() {
    let sleeves = |s: Sleeve| map_to_visual(&Configuration::default().apply(FieldEdit::Sleeve(s))).sleeves;

    let classic = sleeves(Sleeve::ClassicShort);
    assert_eq!((classic.left_rotation_deg, classic.right_rotation_deg), (-2.0, 2.0));

    let asym = sleeves(Sleeve::Asymmetric);
    assert_eq!((asym.left_rotation_deg, asym.right_rotation_deg), (-4.0, 2.0));

    let detachable = sleeves(Sleeve::Detachable);
    assert_eq!(
        (detachable.left_rotation_deg, detachable.right_rotation_deg),
        (-2.0, 4.0)
    );
    assert_eq!(detachable.height, 18.0);
    assert_eq!(detachable.width, 62.0);
    assert_eq!(detachable.top, 46.0);
}

// ---------------------------------------------------------------------------
// Glyphs and caption
// ---------------------------------------------------------------------------

#[test]
fn only_enabled_addons_draw_glyphs_in_key_order() {
    let config = Configuration::default();
    let config = with_addon(&config, AddonId::Modular, 20);
    let config = with_addon(&config, AddonId::Rhinestones, 0);
    let config = config.with_addon(&AddonId::Zipper, &AddonUpdate::intensity(Percent::FULL));

    let visual = map_to_visual(&config);
    let ids: Vec<_> = visual.glyphs.iter().map(|g| g.id.clone()).collect();
    assert_eq!(ids, vec![AddonId::Rhinestones, AddonId::Modular]);

    let glints = &visual.glyphs[0];
    assert_eq!(glints.color, config.accent_color);
    assert_relative_eq!(glints.opacity, 0.35);
}

#[test]
fn caption_spaces_fabric_humps() {
    let config = Configuration::default()
        .apply(FieldEdit::Fabric(Fabric::TechnicalMesh))
        .apply(FieldEdit::Fit(Fit::Oversized));
    let caption = map_to_visual(&config).caption;
    assert_eq!(caption.fabric, "technical Mesh");
    assert_eq!(caption.fit, "oversized");
}

#[test]
fn custom_frame_is_honoured() {
    let frame = PreviewConfig {
        garment_width: 300.0,
        sleeve_width: 70.0,
        ..PreviewConfig::default()
    };
    let visual = map_to_visual_with(&Configuration::default(), &frame);
    assert_eq!(visual.body.width, 300.0);
    assert_eq!(visual.sleeves.width, 70.0);
    assert_relative_eq!(visual.neckline.width, 165.0);
}

#[test]
fn visual_params_serialize_with_camel_case_keys() {
    let json = serde_json::to_value(map_to_visual(&Configuration::default())).unwrap();
    assert!(json.get("accentBand").is_some());
    assert!(json["body"].get("shadowTier").is_some());
    assert_eq!(json["body"]["shadowTier"], "soft");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_addon_id() -> impl Strategy<Value = AddonId> {
    prop::sample::select(AddonId::known().to_vec())
}

fn arb_placement() -> impl Strategy<Value = Placement> {
    prop_oneof![
        prop::sample::select(Placement::known().to_vec()),
        "[a-z]{1,8}".prop_map(|k| Placement::from_key(&k)),
    ]
}

proptest! {
    #[test]
    fn mapping_is_deterministic(
        structure in 0i64..=100,
        opacity in 0i64..=100,
        sleeve in "[a-zA-Z]{0,12}",
        length in "[a-zA-Z]{0,12}",
    ) {
        let mut config = Configuration::default()
            .apply(FieldEdit::Structure(Percent::new(structure)))
            .apply(FieldEdit::Opacity(Percent::new(opacity)));
        config.sleeve = Sleeve::from_key(&sleeve);
        config.length = Length::from_key(&length);
        prop_assert_eq!(map_to_visual(&config), map_to_visual(&config));
    }

    #[test]
    fn glyph_opacity_stays_in_band(
        id in arb_addon_id(),
        intensity in 0i64..=100,
        placement in arb_placement(),
    ) {
        let addon = Addon {
            enabled: true,
            intensity: Percent::new(intensity),
            placement,
            ..Addon::new(id)
        };
        let glyph = addon_glyph(&addon, &Color::from(VOLT_SWATCH)).unwrap();
        prop_assert!(glyph.opacity >= 0.35 - 1e-12);
        prop_assert!(glyph.opacity <= 0.85 + 1e-12);
    }

    #[test]
    fn glyph_counts_respect_floors(intensity in 0i64..=100) {
        let accent = Color::from(VOLT_SWATCH);
        let make = |id: AddonId| Addon {
            enabled: true,
            intensity: Percent::new(intensity),
            ..Addon::new(id)
        };
        match addon_glyph(&make(AddonId::Rhinestones), &accent).unwrap().shape {
            GlyphShape::Glints { count, .. } => prop_assert!((3..=6).contains(&count)),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
        match addon_glyph(&make(AddonId::Embroidery), &accent).unwrap().shape {
            GlyphShape::Stitches { count, .. } => prop_assert!((4..=8).contains(&count)),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
        match addon_glyph(&make(AddonId::Modular), &accent).unwrap().shape {
            GlyphShape::Grid { cells, columns, .. } => {
                prop_assert!((6..=9).contains(&cells));
                prop_assert_eq!(columns, 3);
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}

const VOLT_SWATCH: Swatch = Swatch {
    name: "volt",
    hex: "#c6f432",
};
