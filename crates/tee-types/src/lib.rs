//! Configuration model for the tee designer.
//!
//! Option sets, colors, add-ons and the [`Configuration`] value object that
//! every other crate in the workspace reads.

pub mod addon;
pub mod color;
pub mod configuration;
pub mod options;
pub mod percent;

pub use addon::*;
pub use color::{Color, ColorError, Swatch, PALETTE};
pub use configuration::*;
pub use options::*;
pub use percent::{round_half_up, Percent};
