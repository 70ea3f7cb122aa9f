use tee_types::{
    Configuration, Layering, MaterialFinish, Neckline, OptionSet, Pattern, Percent, Sleeve,
};
use tracing::instrument;

use crate::config::PreviewConfig;
use crate::glyph::{addon_glyph, AddonGlyph};
use crate::tables::{
    top_corner_radius, FINISH_OPACITY, GARMENT_HEIGHT, HEM_RADIUS, NECKLINE_DEPTH, SLEEVE_LENGTH,
};
use crate::visual::*;

const BORDER_WIDTH: f64 = 2.0;

/// Map a configuration to preview parameters using the default frame.
pub fn map_to_visual(config: &Configuration) -> VisualParams {
    map_to_visual_with(config, &PreviewConfig::default())
}

/// Map a configuration to preview parameters.
///
/// Total: option keys this build does not recognize take each table's
/// fallback and never fail.
#[instrument(level = "trace", skip_all, fields(title = %config.title))]
pub fn map_to_visual_with(config: &Configuration, frame: &PreviewConfig) -> VisualParams {
    let depth = NECKLINE_DEPTH.get(config.neckline.key());
    let height = GARMENT_HEIGHT.get(config.length.key());
    let body_border = structure_border(config.structure);

    let shadow_tier = if config.structure.value() > 65 {
        ShadowTier::Pronounced
    } else {
        ShadowTier::Soft
    };

    let body = GarmentBody {
        width: frame.garment_width,
        height,
        fill: config.base_color.clone(),
        corner_radius: CornerRadii {
            top: top_corner_radius(depth),
            bottom: HEM_RADIUS.get(config.hem.key()),
        },
        border: body_border.clone(),
        border_alpha: structure_alpha(config.structure),
        shadow_tier,
        shadow: shadow_tier.shadow(),
    };

    let glyphs: Vec<AddonGlyph> = config
        .enabled_addons()
        .filter_map(|addon| addon_glyph(addon, &config.accent_color))
        .collect();

    VisualParams {
        canvas: Canvas {
            width: frame.garment_width,
            height: frame.canvas_height,
        },
        body,
        pattern: pattern_overlay(&config.pattern, config.opacity),
        finish: finish_overlay(&config.material_finish),
        neckline: neckline_band(config, depth, frame.garment_width),
        layering: layering_overlay(&config.layering),
        sleeves: sleeve_panels(config, body_border, frame),
        accent_band: AccentBand {
            bottom: 40.0,
            height: 12.0,
            fill: config.accent_color.clone(),
            opacity: if config.structure.value() > 50 { 0.65 } else { 0.38 },
            blend: BlendMode::Multiply,
        },
        glyphs,
        caption: Caption {
            fabric: split_camel_humps(config.fabric.key()),
            fit: config.fit.key().to_string(),
        },
    }
}

fn structure_alpha(structure: Percent) -> f64 {
    f64::from(structure.value()) / 150.0
}

fn structure_border(structure: Percent) -> Border {
    Border {
        width: BORDER_WIDTH,
        style: LineStyle::Solid,
        paint: Paint::Rgba(Rgba::black(structure_alpha(structure))),
    }
}

fn pattern_overlay(pattern: &Pattern, opacity: Percent) -> Option<PatternOverlay> {
    let (kind, blend, tile) = match pattern {
        Pattern::Gradient => (PatternKind::Gradient, BlendMode::Normal, None),
        Pattern::Colorblock => (PatternKind::Colorblock, BlendMode::Normal, None),
        Pattern::MicroPattern => (PatternKind::MicroPattern, BlendMode::Overlay, Some(16.0)),
        Pattern::ArtPrint => (PatternKind::ArtPrint, BlendMode::HardLight, None),
        Pattern::Solid | Pattern::Other(_) => return None,
    };
    Some(PatternOverlay {
        kind,
        opacity: opacity.fraction(),
        blend,
        tile,
    })
}

fn finish_overlay(finish: &MaterialFinish) -> Option<FinishOverlay> {
    let kind = match finish {
        MaterialFinish::Gloss => FinishKind::Gloss,
        MaterialFinish::Sheen => FinishKind::Sheen,
        MaterialFinish::Brushed => FinishKind::Brushed,
        MaterialFinish::Tech => FinishKind::Tech,
        MaterialFinish::Matte | MaterialFinish::Other(_) => return None,
    };
    let opacity = FINISH_OPACITY
        .iter()
        .find(|(key, _)| *key == finish.key())
        .map(|(_, opacity)| *opacity)?;
    Some(FinishOverlay { kind, opacity })
}

fn neckline_band(config: &Configuration, depth: f64, garment_width: f64) -> NecklineBand {
    let width_fraction = if config.neckline == Neckline::OffShoulder {
        0.82
    } else {
        0.55
    };
    let (fill, bottom_border) = if config.neckline == Neckline::Mock {
        (Some(config.base_color.clone()), None)
    } else {
        let border = Border {
            width: 6.0,
            style: LineStyle::Solid,
            paint: Paint::Color(config.accent_color.clone()),
        };
        (None, Some(border))
    };
    NecklineBand {
        width_fraction,
        width: garment_width * width_fraction,
        height: depth,
        fill,
        bottom_border,
        bottom_radius: if config.neckline == Neckline::SculptedV {
            10.0
        } else {
            48.0
        },
        rotation_deg: if config.neckline == Neckline::Asymmetric {
            -4.0
        } else {
            0.0
        },
    }
}

fn layering_overlay(layering: &Layering) -> Option<LayeringOverlay> {
    if *layering == Layering::Single {
        return None;
    }
    let border_alpha = if *layering == Layering::Double { 0.28 } else { 0.18 };
    let perforated = *layering == Layering::Perforated;
    Some(LayeringOverlay {
        inset: 2.0,
        corner_radius: 18.0,
        border: Border {
            width: 1.5,
            style: LineStyle::Dashed,
            paint: Paint::Rgba(Rgba::ink(border_alpha)),
        },
        opacity: if perforated { 0.65 } else { 0.4 },
        dots: perforated.then_some(DotPattern {
            spacing: 12.0,
            radius: 1.0,
            color: Rgba::black(0.18),
        }),
    })
}

// Only the left panel reacts to `asymmetric` and only the right to
// `detachable`.
fn sleeve_panels(config: &Configuration, border: Border, frame: &PreviewConfig) -> SleevePanels {
    SleevePanels {
        top: frame.sleeve_top,
        width: frame.sleeve_width,
        height: SLEEVE_LENGTH.get(config.sleeve.key()),
        fill: config.base_color.clone(),
        border,
        corner_radius: 18.0,
        left_rotation_deg: if config.sleeve == Sleeve::Asymmetric {
            -4.0
        } else {
            -2.0
        },
        right_rotation_deg: if config.sleeve == Sleeve::Detachable {
            4.0
        } else {
            2.0
        },
    }
}

/// Insert a space before every ASCII capital: `technicalMesh` -> `technical Mesh`.
fn split_camel_humps(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_humps_are_split() {
        assert_eq!(split_camel_humps("technicalMesh"), "technical Mesh");
        assert_eq!(split_camel_humps("organicCotton"), "organic Cotton");
        assert_eq!(split_camel_humps("hemp"), "hemp");
        assert_eq!(split_camel_humps("XY"), " X Y");
    }

    #[test]
    fn border_alpha_tracks_structure() {
        assert_eq!(structure_alpha(Percent::new(75)), 0.5);
        assert_eq!(structure_alpha(Percent::ZERO), 0.0);
    }
}
