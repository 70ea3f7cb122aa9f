//! Wire-format behaviour of the configuration model.

use proptest::prelude::*;
use serde_json::json;

use tee_types::*;

#[test]
fn configuration_serializes_camel_case_keys() {
    let json = serde_json::to_value(Configuration::default()).unwrap();
    assert_eq!(json["materialFinish"], "matte");
    assert_eq!(json["personalizationPlacement"], "chest");
    assert_eq!(json["opacity"], 80);
    assert_eq!(json["addons"]["zipper"]["placement"], "chest");
    assert_eq!(json["addons"]["zipper"]["enabled"], false);
}

#[test]
fn configuration_round_trips_through_json() {
    let config = Configuration::default()
        .apply(FieldEdit::Fabric(Fabric::MerinoBlend))
        .toggle_addon(&AddonId::Pocket);
    let text = serde_json::to_string(&config).unwrap();
    let back: Configuration = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn unknown_option_keys_survive_deserialization() {
    let mut json = serde_json::to_value(Configuration::default()).unwrap();
    json["sleeve"] = json!("raglan");
    json["fabric"] = json!("spiderSilk");

    let config: Configuration = serde_json::from_value(json).unwrap();
    assert_eq!(config.sleeve, Sleeve::Other("raglan".into()));
    assert!(!config.fabric.is_known());

    let reported = config.unrecognized_options();
    assert!(reported.contains(&("sleeve", "raglan".to_string())));
    assert!(reported.contains(&("fabric", "spiderSilk".to_string())));

    // Kept verbatim on the way back out.
    let out = serde_json::to_value(&config).unwrap();
    assert_eq!(out["sleeve"], "raglan");
}

#[test]
fn malformed_color_fails_deserialization() {
    let mut json = serde_json::to_value(Configuration::default()).unwrap();
    json["baseColor"] = json!("#abcd");
    assert!(serde_json::from_value::<Configuration>(json).is_err());
}

#[test]
fn malformed_color_edit_still_deserializes() {
    let edit: FieldEdit =
        serde_json::from_value(json!({ "field": "baseColor", "value": "#12" })).unwrap();
    assert_eq!(edit, FieldEdit::BaseColor("#12".into()));
    let next = Configuration::default().apply(edit);
    assert_eq!(next.base_color, Configuration::default().base_color);
}

#[test]
fn percent_from_wire_is_rounded_and_clamped() {
    let p: Percent = serde_json::from_value(json!(42.5)).unwrap();
    assert_eq!(p.value(), 43);
    let p: Percent = serde_json::from_value(json!(250)).unwrap();
    assert_eq!(p.value(), 100);
    let p: Percent = serde_json::from_value(json!(-3)).unwrap();
    assert_eq!(p.value(), 0);
}

#[test]
fn field_edit_is_tagged_by_field_name() {
    let edit: FieldEdit =
        serde_json::from_value(json!({ "field": "materialFinish", "value": "gloss" })).unwrap();
    assert_eq!(edit, FieldEdit::MaterialFinish(MaterialFinish::Gloss));

    let edit: FieldEdit =
        serde_json::from_value(json!({ "field": "structure", "value": 70 })).unwrap();
    assert_eq!(edit, FieldEdit::Structure(Percent::new(70)));
}

#[test]
fn patch_omits_absent_fields() {
    let patch = ConfigurationPatch {
        fit: Some(Fit::Boxy),
        ..ConfigurationPatch::default()
    };
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json, json!({ "fit": "boxy" }));

    let parsed: ConfigurationPatch = serde_json::from_value(json!({ "hem": "raw" })).unwrap();
    assert_eq!(parsed.hem, Some(Hem::Raw));
    assert!(parsed.fit.is_none());
}

#[test]
fn sanitized_drops_unknown_addons_from_the_wire() {
    let mut json = serde_json::to_value(Configuration::default()).unwrap();
    json["addons"]["jetpack"] = json!({
        "id": "jetpack", "enabled": true, "intensity": 90, "placement": "back"
    });
    let config: Configuration = serde_json::from_value(json).unwrap();
    assert_eq!(config.addons.len(), AddonId::known().len() + 1);

    let clean = config.sanitized();
    assert_eq!(clean.addons.len(), AddonId::known().len());
    assert!(clean.addons.keys().all(|id| id.is_known()));
}

fn arb_edit() -> impl Strategy<Value = FieldEdit> {
    prop_oneof![
        (0i64..=100).prop_map(|v| FieldEdit::Opacity(Percent::new(v))),
        (0i64..=100).prop_map(|v| FieldEdit::Structure(Percent::new(v))),
        prop::sample::select(Fabric::known().to_vec()).prop_map(FieldEdit::Fabric),
        prop::sample::select(Hem::known().to_vec()).prop_map(FieldEdit::Hem),
        "[a-z ]{0,16}".prop_map(FieldEdit::Title),
    ]
}

proptest! {
    #[test]
    fn percent_is_always_in_range(value in -1.0e6f64..1.0e6) {
        let p = Percent::from_f64(value);
        prop_assert!(p.value() <= 100);
    }

    #[test]
    fn edits_never_touch_the_source_value(edits in prop::collection::vec(arb_edit(), 1..12)) {
        let original = Configuration::default();
        let mut current = original.clone();
        for edit in edits {
            current = current.apply(edit);
        }
        prop_assert_eq!(original, Configuration::default());
        prop_assert_eq!(current.addons.len(), AddonId::known().len());
    }

    #[test]
    fn unknown_edit_keys_are_rejected(key in "[a-z]{3,10}") {
        prop_assume!(!Neckline::known().iter().any(|n| n.key() == key));
        let config = Configuration::default();
        let next = config.apply(FieldEdit::Neckline(Neckline::from_key(&key)));
        prop_assert_eq!(next, config);
    }
}
