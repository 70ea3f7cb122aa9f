//! The built-in bias table.
//!
//! Tuning data, not algorithm. Weights are relative within a field.

use std::collections::BTreeMap;

use tee_types::color::*;
use tee_types::*;

use crate::bias::{AddonProfile, BiasTable, Lexicon, Span, VibeProfile, Weights};
use crate::vibe::Vibe;

fn weights<T: Ord + Clone>(entries: &[(T, u32)]) -> Weights<T> {
    entries.iter().cloned().collect()
}

fn colors(swatches: &[Swatch]) -> Vec<Color> {
    swatches.iter().map(Color::from).collect()
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn probabilities(entries: &[(AddonId, f64)]) -> BTreeMap<AddonId, f64> {
    entries.iter().cloned().collect()
}

pub(crate) fn table() -> BiasTable {
    let profiles: BTreeMap<Vibe, VibeProfile> = [
        (Vibe::StreetLuxe, street_luxe()),
        (Vibe::Performance, performance()),
        (Vibe::AvantGarde, avant_garde()),
        (Vibe::MinimalStudio, minimal_studio()),
        (Vibe::EcoEase, eco_ease()),
    ]
    .into_iter()
    .collect();

    BiasTable::authored(profiles)
}

fn street_luxe() -> VibeProfile {
    VibeProfile {
        fabric: weights(&[
            (Fabric::HeavyweightJersey, 5),
            (Fabric::PimaCotton, 3),
            (Fabric::OrganicCotton, 2),
        ]),
        fit: weights(&[(Fit::Oversized, 5), (Fit::Boxy, 4), (Fit::Relaxed, 2)]),
        neckline: weights(&[
            (Neckline::Crew, 4),
            (Neckline::Mock, 3),
            (Neckline::Asymmetric, 2),
        ]),
        sleeve: weights(&[
            (Sleeve::ExtendedDrop, 5),
            (Sleeve::ClassicShort, 2),
            (Sleeve::Elbow, 2),
        ]),
        length: weights(&[(Length::Longline, 4), (Length::Classic, 3), (Length::Tunic, 2)]),
        hem: weights(&[
            (Hem::HighLow, 3),
            (Hem::Split, 3),
            (Hem::Straight, 2),
            (Hem::Rounded, 1),
        ]),
        pattern: weights(&[
            (Pattern::Colorblock, 4),
            (Pattern::ArtPrint, 3),
            (Pattern::Solid, 2),
        ]),
        material_finish: weights(&[
            (MaterialFinish::Sheen, 4),
            (MaterialFinish::Gloss, 3),
            (MaterialFinish::Matte, 2),
        ]),
        stitch: weights(&[
            (Stitch::Contrast, 4),
            (Stitch::Exposed, 3),
            (Stitch::Coverstitch, 2),
        ]),
        layering: weights(&[(Layering::Double, 4), (Layering::Single, 3)]),
        opacity: Span::new(70, 95),
        stretch: Span::new(20, 45),
        structure: Span::new(55, 85),
        base_colors: colors(&[ONYX, GRAPHITE, BONE]),
        accent_colors: colors(&[GOLD, VOLT, EMBER]),
        addons: AddonProfile {
            probability: probabilities(&[
                (AddonId::Rhinestones, 0.6),
                (AddonId::Zipper, 0.5),
                (AddonId::Embroidery, 0.4),
                (AddonId::Paneling, 0.3),
                (AddonId::Pocket, 0.2),
                (AddonId::Modular, 0.15),
            ]),
            intensity: Span::new(45, 90),
            placements: weights(&[
                (Placement::Chest, 4),
                (Placement::Back, 3),
                (Placement::Shoulder, 2),
                (Placement::Sleeve, 2),
            ]),
        },
        title: Lexicon {
            adjectives: words(&["Gilded", "Nocturne", "Velvet", "Chrome", "After-Hours"]),
            nouns: words(&["Drop", "Uniform", "Block Tee", "Runner", "Statement"]),
        },
        mood: "Built for late city nights with a polished edge.".into(),
        directives: words(&[
            "Push the accent into the stitching for a sharper read",
            "Try a heavier drop shoulder and a cropped back panel",
            "Layer a metallic trim along the hem seam",
        ]),
    }
}

fn performance() -> VibeProfile {
    VibeProfile {
        fabric: weights(&[
            (Fabric::TechnicalMesh, 5),
            (Fabric::RecycledPoly, 4),
            (Fabric::MerinoBlend, 3),
        ]),
        fit: weights(&[(Fit::Slim, 4), (Fit::Tailored, 3), (Fit::Regular, 2)]),
        neckline: weights(&[
            (Neckline::Crew, 4),
            (Neckline::Mock, 3),
            (Neckline::SculptedV, 2),
        ]),
        sleeve: weights(&[
            (Sleeve::Cap, 3),
            (Sleeve::ClassicShort, 3),
            (Sleeve::Elbow, 2),
            (Sleeve::Detachable, 2),
        ]),
        length: weights(&[(Length::Classic, 4), (Length::MidCrop, 3), (Length::Longline, 2)]),
        hem: weights(&[(Hem::Rounded, 4), (Hem::Split, 3), (Hem::Straight, 2)]),
        pattern: weights(&[
            (Pattern::Gradient, 4),
            (Pattern::MicroPattern, 3),
            (Pattern::Solid, 2),
        ]),
        material_finish: weights(&[
            (MaterialFinish::Tech, 5),
            (MaterialFinish::Sheen, 2),
            (MaterialFinish::Matte, 2),
        ]),
        stitch: weights(&[(Stitch::Flatlock, 5), (Stitch::Coverstitch, 3)]),
        layering: weights(&[
            (Layering::Perforated, 5),
            (Layering::Single, 2),
            (Layering::Double, 1),
        ]),
        opacity: Span::new(55, 85),
        stretch: Span::new(60, 95),
        structure: Span::new(30, 60),
        base_colors: colors(&[GRAPHITE, OCEAN, COBALT, ONYX]),
        accent_colors: colors(&[VOLT, EMBER, CHALK]),
        addons: AddonProfile {
            probability: probabilities(&[
                (AddonId::Zipper, 0.55),
                (AddonId::Modular, 0.45),
                (AddonId::Pocket, 0.35),
                (AddonId::Paneling, 0.35),
                (AddonId::Embroidery, 0.1),
                (AddonId::Rhinestones, 0.05),
            ]),
            intensity: Span::new(35, 80),
            placements: weights(&[
                (Placement::Chest, 3),
                (Placement::Sleeve, 3),
                (Placement::Back, 2),
                (Placement::Hem, 2),
            ]),
        },
        title: Lexicon {
            adjectives: words(&["Kinetic", "Aero", "Tempo", "Vector", "Split-Second"]),
            nouns: words(&["Pace Tee", "Shell", "Interval", "Circuit", "Sprint Layer"]),
        },
        mood: "Engineered to move, vent and recover between sets.".into(),
        directives: words(&[
            "Map ventilation zones to the perforated layer",
            "Dial stretch higher and tighten the sleeve opening",
            "Add reflective accents along the back yoke",
        ]),
    }
}

fn avant_garde() -> VibeProfile {
    VibeProfile {
        fabric: weights(&[
            (Fabric::BambooModal, 3),
            (Fabric::TechnicalMesh, 3),
            (Fabric::MerinoBlend, 2),
            (Fabric::HeavyweightJersey, 2),
        ]),
        fit: weights(&[(Fit::Oversized, 4), (Fit::Boxy, 3), (Fit::Tailored, 2)]),
        neckline: weights(&[
            (Neckline::Asymmetric, 5),
            (Neckline::OffShoulder, 4),
            (Neckline::SculptedV, 3),
        ]),
        sleeve: weights(&[
            (Sleeve::Asymmetric, 5),
            (Sleeve::Detachable, 4),
            (Sleeve::ExtendedDrop, 2),
        ]),
        length: weights(&[
            (Length::Tunic, 3),
            (Length::MicroCrop, 3),
            (Length::Longline, 3),
        ]),
        hem: weights(&[(Hem::HighLow, 4), (Hem::Raw, 4), (Hem::Split, 2)]),
        pattern: weights(&[
            (Pattern::ArtPrint, 5),
            (Pattern::Colorblock, 3),
            (Pattern::Gradient, 2),
        ]),
        material_finish: weights(&[
            (MaterialFinish::Gloss, 4),
            (MaterialFinish::Tech, 3),
            (MaterialFinish::Brushed, 2),
        ]),
        stitch: weights(&[(Stitch::Exposed, 5), (Stitch::Contrast, 3)]),
        layering: weights(&[
            (Layering::Double, 3),
            (Layering::Perforated, 3),
            (Layering::Single, 1),
        ]),
        opacity: Span::new(40, 90),
        stretch: Span::new(25, 70),
        structure: Span::new(60, 100),
        base_colors: colors(&[LILAC, CHALK, ONYX, EMBER]),
        accent_colors: colors(&[COBALT, VOLT, BLUSH, GOLD]),
        addons: AddonProfile {
            probability: probabilities(&[
                (AddonId::Paneling, 0.7),
                (AddonId::Modular, 0.5),
                (AddonId::Rhinestones, 0.4),
                (AddonId::Zipper, 0.4),
                (AddonId::Embroidery, 0.35),
                (AddonId::Pocket, 0.2),
            ]),
            intensity: Span::new(55, 100),
            placements: weights(&[
                (Placement::Floating, 4),
                (Placement::Shoulder, 3),
                (Placement::Back, 2),
                (Placement::Sleeve, 2),
                (Placement::Chest, 1),
            ]),
        },
        title: Lexicon {
            adjectives: words(&["Fractured", "Liminal", "Sculpted", "Prism", "Unbound"]),
            nouns: words(&["Study", "Construct", "Silhouette", "Manifesto", "Form"]),
        },
        mood: "A sculptural silhouette that argues with symmetry.".into(),
        directives: words(&[
            "Exaggerate the asymmetry through the shoulder line",
            "Float a translucent panel over the torso",
            "Break the hem into two offset lengths",
        ]),
    }
}

fn minimal_studio() -> VibeProfile {
    VibeProfile {
        fabric: weights(&[
            (Fabric::OrganicCotton, 4),
            (Fabric::PimaCotton, 4),
            (Fabric::BambooModal, 2),
        ]),
        fit: weights(&[(Fit::Regular, 4), (Fit::Tailored, 3), (Fit::Relaxed, 2)]),
        neckline: weights(&[(Neckline::Crew, 5), (Neckline::Mock, 2)]),
        sleeve: weights(&[(Sleeve::ClassicShort, 5), (Sleeve::Cap, 2)]),
        length: weights(&[(Length::Classic, 5), (Length::MidCrop, 2)]),
        hem: weights(&[(Hem::Straight, 5), (Hem::Rounded, 2)]),
        pattern: weights(&[(Pattern::Solid, 8), (Pattern::Gradient, 1)]),
        material_finish: weights(&[(MaterialFinish::Matte, 5), (MaterialFinish::Brushed, 2)]),
        stitch: weights(&[(Stitch::Tonal, 6), (Stitch::Flatlock, 2)]),
        layering: weights(&[(Layering::Single, 6), (Layering::Double, 1)]),
        opacity: Span::new(80, 100),
        stretch: Span::new(25, 45),
        structure: Span::new(40, 65),
        base_colors: colors(&[CHALK, BONE, GRAPHITE, ONYX, SAND]),
        accent_colors: colors(&[GRAPHITE, SAND, CHALK]),
        addons: AddonProfile {
            probability: probabilities(&[
                (AddonId::Pocket, 0.3),
                (AddonId::Embroidery, 0.2),
                (AddonId::Zipper, 0.15),
                (AddonId::Paneling, 0.1),
                (AddonId::Modular, 0.05),
                (AddonId::Rhinestones, 0.05),
            ]),
            intensity: Span::new(15, 45),
            placements: weights(&[
                (Placement::Chest, 4),
                (Placement::Hem, 2),
                (Placement::Back, 1),
            ]),
        },
        title: Lexicon {
            adjectives: words(&["Quiet", "Essential", "Studio", "Pale", "Measured"]),
            nouns: words(&["Standard", "Basic", "Form Tee", "Edit", "Line"]),
        },
        mood: "Reduced to clean proportions and a calm palette.".into(),
        directives: words(&[
            "Refine the neckline depth and keep everything tonal",
            "Swap to a brushed finish for a softer hand",
            "Drop every add-on except a single tonal pocket",
        ]),
    }
}

fn eco_ease() -> VibeProfile {
    VibeProfile {
        fabric: weights(&[
            (Fabric::HempBlend, 5),
            (Fabric::OrganicCotton, 4),
            (Fabric::BambooModal, 3),
            (Fabric::RecycledPoly, 2),
        ]),
        fit: weights(&[(Fit::Relaxed, 5), (Fit::Regular, 3), (Fit::Oversized, 2)]),
        neckline: weights(&[
            (Neckline::Crew, 4),
            (Neckline::Mock, 2),
            (Neckline::SculptedV, 1),
        ]),
        sleeve: weights(&[
            (Sleeve::ClassicShort, 4),
            (Sleeve::ExtendedDrop, 3),
            (Sleeve::Elbow, 2),
        ]),
        length: weights(&[(Length::Classic, 4), (Length::Longline, 3)]),
        hem: weights(&[(Hem::Raw, 3), (Hem::Rounded, 3), (Hem::Straight, 2)]),
        pattern: weights(&[
            (Pattern::Solid, 4),
            (Pattern::MicroPattern, 3),
            (Pattern::Gradient, 2),
        ]),
        material_finish: weights(&[(MaterialFinish::Matte, 4), (MaterialFinish::Brushed, 4)]),
        stitch: weights(&[
            (Stitch::Tonal, 3),
            (Stitch::Exposed, 3),
            (Stitch::Coverstitch, 2),
        ]),
        layering: weights(&[(Layering::Single, 5), (Layering::Perforated, 2)]),
        opacity: Span::new(65, 90),
        stretch: Span::new(35, 60),
        structure: Span::new(25, 50),
        base_colors: colors(&[MOSS, SAND, BONE, OCEAN]),
        accent_colors: colors(&[MOSS, SAND, CHALK, OCEAN]),
        addons: AddonProfile {
            probability: probabilities(&[
                (AddonId::Pocket, 0.5),
                (AddonId::Embroidery, 0.45),
                (AddonId::Modular, 0.2),
                (AddonId::Zipper, 0.15),
                (AddonId::Paneling, 0.15),
                (AddonId::Rhinestones, 0.0),
            ]),
            intensity: Span::new(25, 60),
            placements: weights(&[
                (Placement::Chest, 3),
                (Placement::Hem, 3),
                (Placement::Sleeve, 2),
            ]),
        },
        title: Lexicon {
            adjectives: words(&["Field", "Sunworn", "Canopy", "Tidal", "Grounded"]),
            nouns: words(&["Tee", "Layer", "Commons", "Trail Top", "Weekender"]),
        },
        mood: "Easygoing fibres with a light footprint.".into(),
        directives: words(&[
            "Keep dyes low-impact and let the raw hem show",
            "Add a patch pocket cut from offcuts",
            "Loosen the fit and lighten the structure",
        ]),
    }
}
