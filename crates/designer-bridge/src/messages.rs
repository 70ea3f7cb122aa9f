use serde::{Deserialize, Serialize};
use uuid::Uuid;

use preset_engine::{GeneratedPreset, Vibe};
use tee_preview::VisualParams;
use tee_types::{AddonId, AddonUpdate, ColorSlot, Configuration, FieldEdit};

use crate::metrics::BuildMetrics;
use crate::session::SynthesisTicket;

/// Messages from the UI to the designer session.
/// Serialized as JSON with a `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToDesigner {
    // -- Configuration edits --
    /// Replace one field.
    EditField { edit: FieldEdit },
    /// Free-text color input for the base or accent slot.
    SetColorInput { slot: ColorSlot, input: String },
    #[serde(rename_all = "camelCase")]
    UpdateAddon {
        addon_id: AddonId,
        update: AddonUpdate,
    },
    #[serde(rename_all = "camelCase")]
    ToggleAddon { addon_id: AddonId },
    /// Replace the whole configuration.
    ApplyConfiguration { configuration: Configuration },
    ResetConfiguration,

    // -- Presets --
    SelectVibe { vibe: Vibe },
    GeneratePreset,
    #[serde(rename_all = "camelCase")]
    ApplyPreset { preset_id: Uuid },
    /// The host's settle callback fired for `ticket`.
    SynthesisElapsed { ticket: SynthesisTicket },

    // -- Session --
    RequestState,
    CloseSession,
}

/// Messages from the designer session back to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignerToUi {
    /// The live configuration changed (or was requested).
    ConfigurationUpdated {
        configuration: Configuration,
        visual: Box<VisualParams>,
        metrics: BuildMetrics,
    },
    /// A preset was generated. The host should report `ticket` back via
    /// `SynthesisElapsed` after `settle_after_ms`.
    #[serde(rename_all = "camelCase")]
    PresetGenerated {
        preset: Box<GeneratedPreset>,
        history: Vec<GeneratedPreset>,
        ticket: SynthesisTicket,
        settle_after_ms: u64,
        busy: bool,
    },
    BusyChanged { busy: bool },
    VibeSelected { vibe: Vibe },
    #[serde(rename_all = "camelCase")]
    SessionClosed { cancelled_tickets: usize },
    Error { message: String },
}
