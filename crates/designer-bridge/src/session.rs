use std::collections::BTreeSet;

use preset_engine::{GeneratedPreset, PresetHistory, PresetSynthesizer, Vibe};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tee_preview::{map_to_visual_with, VisualParams};
use tee_types::{AddonId, AddonUpdate, ColorSlot, Configuration, FieldEdit};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::metrics::BuildMetrics;

/// Handle for one pending "synthesizing" window.
///
/// The host schedules a one-shot callback `synth_delay_ms` after a generation
/// and reports the ticket back when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynthesisTicket(pub u64);

/// Errors surfaced to the UI as `Error` responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("failed to parse message: {reason}")]
    Parse { reason: String },

    #[error("preset {id} is no longer in the history")]
    PresetNotFound { id: Uuid },

    #[error("session is closed")]
    SessionClosed,

    #[error("invalid session config: {reason}")]
    InvalidConfig { reason: String },

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

/// The designer state behind one UI: the live configuration, the selected
/// vibe, the preset history and the outstanding synthesis tickets.
pub struct DesignerSession {
    configuration: Configuration,
    vibe: Vibe,
    synthesizer: PresetSynthesizer,
    history: PresetHistory,
    outstanding: BTreeSet<SynthesisTicket>,
    next_ticket: u64,
    config: SessionConfig,
    closed: bool,
}

impl DesignerSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            configuration: Configuration::default(),
            vibe: Vibe::default(),
            synthesizer: PresetSynthesizer::default(),
            history: PresetHistory::new(config.history_limit),
            outstanding: BTreeSet::new(),
            next_ticket: 1,
            config,
            closed: false,
        }
    }

    /// Use a different synthesizer, e.g. one built from a loaded bias table.
    pub fn with_synthesizer(mut self, synthesizer: PresetSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn vibe(&self) -> &Vibe {
        &self.vibe
    }

    pub fn history(&self) -> &PresetHistory {
        &self.history
    }

    pub fn visual(&self) -> VisualParams {
        map_to_visual_with(&self.configuration, &self.config.preview)
    }

    pub fn metrics(&self) -> BuildMetrics {
        BuildMetrics::from_configuration(&self.configuration)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub(crate) fn ensure_open(&self) -> Result<(), BridgeError> {
        if self.closed {
            return Err(BridgeError::SessionClosed);
        }
        Ok(())
    }

    // -- Configuration edits --
    //
    // Every mutator refuses to run once the session is closed.

    pub fn edit(&mut self, edit: FieldEdit) -> Result<(), BridgeError> {
        self.ensure_open()?;
        self.configuration = self.configuration.apply(edit);
        Ok(())
    }

    pub fn set_color_input(&mut self, slot: ColorSlot, input: &str) -> Result<(), BridgeError> {
        self.ensure_open()?;
        self.configuration = self.configuration.with_color_input(slot, input);
        Ok(())
    }

    pub fn update_addon(&mut self, id: &AddonId, update: &AddonUpdate) -> Result<(), BridgeError> {
        self.ensure_open()?;
        self.configuration = self.configuration.with_addon(id, update);
        Ok(())
    }

    pub fn toggle_addon(&mut self, id: &AddonId) -> Result<(), BridgeError> {
        self.ensure_open()?;
        self.configuration = self.configuration.toggle_addon(id);
        Ok(())
    }

    /// Replace the live configuration wholesale. Values from outside the
    /// edit API are sanitized first.
    pub fn replace_configuration(&mut self, configuration: Configuration) -> Result<(), BridgeError> {
        self.ensure_open()?;
        self.configuration = configuration.sanitized();
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), BridgeError> {
        self.ensure_open()?;
        self.configuration = Configuration::default();
        Ok(())
    }

    // -- Presets --

    pub fn select_vibe(&mut self, vibe: Vibe) -> Result<(), BridgeError> {
        self.ensure_open()?;
        self.vibe = vibe;
        Ok(())
    }

    /// Generate a preset for the selected vibe and open a busy ticket.
    pub fn generate_preset(&mut self) -> Result<(GeneratedPreset, SynthesisTicket), BridgeError> {
        self.generate_preset_with(&mut rand::rng())
    }

    pub fn generate_preset_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(GeneratedPreset, SynthesisTicket), BridgeError> {
        self.ensure_open()?;
        let preset = self
            .synthesizer
            .generate_with(&self.configuration, &self.vibe, rng);
        self.history.push(preset.clone());

        let ticket = SynthesisTicket(self.next_ticket);
        self.next_ticket += 1;
        self.outstanding.insert(ticket);
        debug!(ticket = ticket.0, outstanding = self.outstanding.len(), "synthesis started");
        Ok((preset, ticket))
    }

    /// Merge a preset from the history onto the live configuration.
    pub fn apply_preset(&mut self, id: Uuid) -> Result<(), BridgeError> {
        self.ensure_open()?;
        let preset = self
            .history
            .get(id)
            .ok_or(BridgeError::PresetNotFound { id })?;
        self.configuration = preset.apply_to(&self.configuration);
        info!(%id, title = %self.configuration.title, "preset applied");
        Ok(())
    }

    // -- Busy tickets --

    /// Retire a ticket. Unknown or already-settled tickets are ignored.
    /// Returns whether the ticket was outstanding.
    pub fn settle(&mut self, ticket: SynthesisTicket) -> bool {
        let retired = self.outstanding.remove(&ticket);
        if !retired {
            debug!(ticket = ticket.0, "ignoring stale synthesis ticket");
        }
        retired
    }

    /// Busy while any synthesis ticket is outstanding.
    pub fn is_busy(&self) -> bool {
        !self.outstanding.is_empty()
    }

    pub fn outstanding_tickets(&self) -> impl Iterator<Item = &SynthesisTicket> {
        self.outstanding.iter()
    }

    /// End the session: cancel every outstanding ticket and refuse further
    /// messages. Returns the number of tickets cancelled.
    pub fn close(&mut self) -> usize {
        let cancelled = self.outstanding.len();
        self.outstanding.clear();
        self.closed = true;
        info!(cancelled, "designer session closed");
        cancelled
    }
}

impl Default for DesignerSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
