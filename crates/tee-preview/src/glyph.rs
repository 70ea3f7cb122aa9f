//! Per-add-on glyph geometry.
//!
//! Every enabled add-on draws one glyph at a fixed anchor for its placement.
//! Sizes and counts grow with intensity.

use serde::{Deserialize, Serialize};
use tee_types::{round_half_up, Addon, AddonId, Color, Placement};

/// Glyph opacity at zero intensity.
pub const MIN_GLYPH_OPACITY: f64 = 0.35;
/// Glyph opacity ceiling.
pub const MAX_GLYPH_OPACITY: f64 = 0.85;

/// Anchor position as percentages of the garment body.
///
/// Exactly one of `top`/`bottom` and one of `left`/`right` is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchor {
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub center_x: bool,
    pub center_y: bool,
}

impl Anchor {
    const fn top_left(top: f64, left: f64, center_x: bool, center_y: bool) -> Self {
        Self {
            top: Some(top),
            bottom: None,
            left: Some(left),
            right: None,
            center_x,
            center_y,
        }
    }

    const fn top_right(top: f64, right: f64) -> Self {
        Self {
            top: Some(top),
            bottom: None,
            left: None,
            right: Some(right),
            center_x: false,
            center_y: false,
        }
    }

    /// Fixed anchor for a placement. Unknown placements use the chest.
    pub fn for_placement(placement: &Placement) -> Self {
        match placement {
            Placement::Shoulder => Self::top_left(22.0, 20.0, false, false),
            Placement::Hem => Self {
                top: None,
                bottom: Some(12.0),
                left: Some(50.0),
                right: None,
                center_x: true,
                center_y: false,
            },
            Placement::Back => Self::top_right(30.0, 14.0),
            Placement::Sleeve => Self::top_right(45.0, 6.0),
            Placement::Floating => Self::top_left(60.0, 50.0, true, true),
            Placement::Chest | Placement::Other(_) => Self::top_left(38.0, 50.0, true, true),
        }
    }

    /// Top-left corner of a glyph of `extent` inside a `width` x `height` body.
    pub fn resolve(&self, width: f64, height: f64, extent: (f64, f64)) -> (f64, f64) {
        let (w, h) = extent;
        let mut x = match (self.left, self.right) {
            (Some(left), _) => width * left / 100.0,
            (None, Some(right)) => width - width * right / 100.0 - w,
            (None, None) => 0.0,
        };
        let mut y = match (self.top, self.bottom) {
            (Some(top), _) => height * top / 100.0,
            (None, Some(bottom)) => height - height * bottom / 100.0 - h,
            (None, None) => 0.0,
        };
        if self.center_x {
            x -= w / 2.0;
        }
        if self.center_y {
            y -= h / 2.0;
        }
        (x, y)
    }
}

/// Shape drawn for one add-on. All lengths in px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GlyphShape {
    /// A row of round glints.
    Glints { count: u32, diameter: f64, gap: f64 },
    /// A vertical bar.
    Bar { length: f64, width: f64 },
    Pocket {
        width: f64,
        height: f64,
        radius: f64,
        filled: bool,
    },
    /// A run of cross-stitch marks.
    Stitches { count: u32, font_size: f64 },
    Panel {
        width: f64,
        height: f64,
        radius: f64,
        filled: bool,
        glow: bool,
    },
    Grid {
        cells: u32,
        columns: u32,
        cell_size: f64,
        gap: f64,
        filled: bool,
    },
}

impl GlyphShape {
    /// Bounding box (width, height).
    pub fn extent(&self) -> (f64, f64) {
        match *self {
            GlyphShape::Glints {
                count,
                diameter,
                gap,
            } => {
                let n = f64::from(count);
                (n * diameter + (n - 1.0).max(0.0) * gap, diameter)
            }
            GlyphShape::Bar { length, width } => (width, length),
            GlyphShape::Pocket { width, height, .. } | GlyphShape::Panel { width, height, .. } => {
                (width, height)
            }
            GlyphShape::Stitches { count, font_size } => {
                // "×" plus a space per mark, roughly 0.6em each.
                let n = f64::from(count);
                ((2.0 * n - 1.0) * font_size * 0.6, font_size)
            }
            GlyphShape::Grid {
                cells,
                columns,
                cell_size,
                gap,
                ..
            } => {
                let cols = f64::from(columns.min(cells));
                let rows = f64::from(cells.div_ceil(columns.max(1)));
                (
                    cols * cell_size + (cols - 1.0).max(0.0) * gap,
                    rows * cell_size + (rows - 1.0).max(0.0) * gap,
                )
            }
        }
    }

    /// The text run for embroidery marks, `None` for other shapes.
    pub fn text(&self) -> Option<String> {
        match self {
            GlyphShape::Stitches { count, .. } => {
                Some(vec!["×"; *count as usize].join(" "))
            }
            _ => None,
        }
    }
}

/// One add-on's glyph, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonGlyph {
    pub id: AddonId,
    pub anchor: Anchor,
    pub color: Color,
    pub opacity: f64,
    pub shape: GlyphShape,
}

/// Glyph opacity for an intensity fraction in [0, 1].
pub fn glyph_opacity(scale: f64) -> f64 {
    (MIN_GLYPH_OPACITY + scale * 0.55).min(MAX_GLYPH_OPACITY)
}

fn rounded_count(value: f64) -> u32 {
    round_half_up(value).max(0.0) as u32
}

/// Geometry for `addon` tinted with `accent`.
///
/// Returns `None` for ids this build does not recognize. The enabled flag is
/// not consulted here; callers filter.
pub fn addon_glyph(addon: &Addon, accent: &Color) -> Option<AddonGlyph> {
    let scale = addon.scale();
    let shape = match &addon.id {
        AddonId::Rhinestones => GlyphShape::Glints {
            count: rounded_count(6.0 * scale).max(3),
            diameter: 8.0 + 4.0 * scale,
            gap: 6.0,
        },
        AddonId::Zipper => GlyphShape::Bar {
            length: 48.0 + 36.0 * scale,
            width: 2.0,
        },
        AddonId::Pocket => GlyphShape::Pocket {
            width: 50.0 + 24.0 * scale,
            height: 44.0 + 18.0 * scale,
            radius: 12.0,
            filled: scale > 0.5,
        },
        AddonId::Embroidery => GlyphShape::Stitches {
            count: rounded_count(scale * 8.0).max(4),
            font_size: 16.0 + 6.0 * scale,
        },
        AddonId::Paneling => GlyphShape::Panel {
            width: 90.0 + 40.0 * scale,
            height: 140.0 + 30.0 * scale,
            radius: 28.0,
            filled: scale > 0.4,
            glow: scale > 0.6,
        },
        AddonId::Modular => GlyphShape::Grid {
            cells: 6 + rounded_count(scale * 3.0),
            columns: 3,
            cell_size: 18.0 + 6.0 * scale,
            gap: 6.0,
            filled: scale > 0.5,
        },
        AddonId::Other(key) => {
            tracing::trace!(addon = %key, "no glyph for unrecognized add-on");
            return None;
        }
    };
    Some(AddonGlyph {
        id: addon.id.clone(),
        anchor: Anchor::for_placement(&addon.placement),
        color: accent.clone(),
        opacity: glyph_opacity(scale),
        shape,
    })
}
