use serde::{Deserialize, Serialize};
use tee_types::Color;

use crate::glyph::AddonGlyph;

/// Renderer-ready description of how a configuration should look.
///
/// All lengths are CSS pixels relative to the garment body's top-left corner
/// unless a field says otherwise. Nothing here is rasterized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualParams {
    pub canvas: Canvas,
    pub body: GarmentBody,
    pub pattern: Option<PatternOverlay>,
    pub finish: Option<FinishOverlay>,
    pub neckline: NecklineBand,
    pub layering: Option<LayeringOverlay>,
    pub sleeves: SleevePanels,
    pub accent_band: AccentBand,
    /// One glyph per enabled, recognized add-on, in add-on key order.
    pub glyphs: Vec<AddonGlyph>,
    pub caption: Caption,
}

/// The fixed frame the garment is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

/// A fixed neutral ink, not taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn black(a: f64) -> Self {
        Self { r: 0, g: 0, b: 0, a }
    }

    /// The near-black used for shadows and dashed seams.
    pub const fn ink(a: f64) -> Self {
        Self {
            r: 17,
            g: 17,
            b: 19,
            a,
        }
    }

    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Either a configuration color or a fixed ink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Paint {
    Color(Color),
    Rgba(Rgba),
}

impl Paint {
    pub fn css(&self) -> String {
        match self {
            Paint::Color(color) => color.to_string(),
            Paint::Rgba(rgba) => rgba.css(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f64,
    pub style: LineStyle,
    pub paint: Paint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlendMode {
    Normal,
    Overlay,
    HardLight,
    Multiply,
}

/// Drop shadow preset. Two tiers, no interpolation between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShadowTier {
    Soft,
    Pronounced,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_y: f64,
    pub blur: f64,
    pub color: Rgba,
}

impl ShadowTier {
    pub fn shadow(self) -> Shadow {
        match self {
            ShadowTier::Pronounced => Shadow {
                offset_y: 22.0,
                blur: 40.0,
                color: Rgba::ink(0.25),
            },
            ShadowTier::Soft => Shadow {
                offset_y: 12.0,
                blur: 24.0,
                color: Rgba::ink(0.18),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarmentBody {
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub corner_radius: CornerRadii,
    pub border: Border,
    /// Border alpha, `structure / 150`.
    pub border_alpha: f64,
    pub shadow_tier: ShadowTier,
    pub shadow: Shadow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternKind {
    Gradient,
    Colorblock,
    MicroPattern,
    ArtPrint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternOverlay {
    pub kind: PatternKind,
    pub opacity: f64,
    pub blend: BlendMode,
    /// Tile edge length for repeating patterns.
    pub tile: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FinishKind {
    Gloss,
    Sheen,
    Brushed,
    Tech,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinishOverlay {
    pub kind: FinishKind,
    pub opacity: f64,
}

/// The collar band, centred on the top edge of the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NecklineBand {
    /// Fraction of the body width.
    pub width_fraction: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub bottom_border: Option<Border>,
    pub bottom_radius: f64,
    pub rotation_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotPattern {
    pub spacing: f64,
    pub radius: f64,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayeringOverlay {
    pub inset: f64,
    pub corner_radius: f64,
    pub border: Border,
    pub opacity: f64,
    pub dots: Option<DotPattern>,
}

/// Left and right sleeve panels, drawn in one row across the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleevePanels {
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub border: Border,
    pub corner_radius: f64,
    pub left_rotation_deg: f64,
    pub right_rotation_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccentBand {
    /// Distance from the bottom edge of the body.
    pub bottom: f64,
    pub height: f64,
    pub fill: Color,
    pub opacity: f64,
    pub blend: BlendMode,
}

/// Labels printed under the garment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    pub fabric: String,
    pub fit: String,
}
