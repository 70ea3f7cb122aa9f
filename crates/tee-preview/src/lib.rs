//! Preview mapping: turns a [`tee_types::Configuration`] into renderer-ready
//! visual parameters.
//!
//! Everything here is pure and deterministic. The output describes shapes,
//! colors and opacities; no pixels are produced.

pub mod config;
pub mod glyph;
pub mod mapper;
pub mod tables;
pub mod visual;

pub use config::PreviewConfig;
pub use glyph::{addon_glyph, glyph_opacity, AddonGlyph, Anchor, GlyphShape};
pub use mapper::{map_to_visual, map_to_visual_with};
pub use visual::*;
