//! Vibe-biased preset generation and the bounded preset history.

pub mod bias;
mod builtin;
pub mod history;
pub mod preset;
pub mod synth;
pub mod vibe;

pub use bias::{BiasTable, BiasTableError, VibeProfile};
pub use history::{PresetHistory, DEFAULT_HISTORY_LIMIT};
pub use preset::GeneratedPreset;
pub use synth::{generate_preset, PresetSynthesizer};
pub use vibe::{pick_random_vibe, Vibe};
