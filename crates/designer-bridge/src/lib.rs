//! Session and message layer between a UI host and the designer core.
//!
//! The host sends [`messages::UiToDesigner`] values (JSON over the WASM
//! boundary, or directly from native code) and renders the
//! [`messages::DesignerToUi`] responses.

pub mod config;
pub mod dispatch;
pub mod messages;
pub mod metrics;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use config::SessionConfig;
pub use dispatch::{dispatch, dispatch_json};
pub use metrics::BuildMetrics;
pub use session::{BridgeError, DesignerSession, SynthesisTicket};
