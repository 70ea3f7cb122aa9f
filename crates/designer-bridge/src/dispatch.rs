use crate::messages::{DesignerToUi, UiToDesigner};
use crate::session::{BridgeError, DesignerSession};

/// Dispatch a UI message to the session and return a response.
///
/// Every message completes synchronously. Failures become an `Error`
/// response; the session is left as it was.
pub fn dispatch(session: &mut DesignerSession, msg: UiToDesigner) -> DesignerToUi {
    match handle_message(session, msg) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "message rejected");
            DesignerToUi::Error {
                message: e.to_string(),
            }
        }
    }
}

/// Parse a JSON message, dispatch it, and serialize the response.
pub fn dispatch_json(session: &mut DesignerSession, json_input: &str) -> String {
    let response = match parse_message(json_input) {
        Ok(msg) => dispatch(session, msg),
        Err(e) => DesignerToUi::Error {
            message: e.to_string(),
        },
    };
    to_json(&response)
}

pub fn parse_message(json_input: &str) -> Result<UiToDesigner, BridgeError> {
    serde_json::from_str(json_input).map_err(|e| BridgeError::Parse {
        reason: e.to_string(),
    })
}

/// Serialize a response. Serialization failures are reported as an `Error`
/// response built by hand.
pub fn to_json(response: &DesignerToUi) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        let error = BridgeError::Serialization {
            reason: e.to_string(),
        };
        serde_json::json!({ "type": "Error", "message": error.to_string() }).to_string()
    })
}

fn handle_message(
    session: &mut DesignerSession,
    msg: UiToDesigner,
) -> Result<DesignerToUi, BridgeError> {
    session.ensure_open()?;

    match msg {
        // -- Configuration edits --
        UiToDesigner::EditField { edit } => {
            session.edit(edit)?;
            Ok(configuration_updated(session))
        }

        UiToDesigner::SetColorInput { slot, input } => {
            session.set_color_input(slot, &input)?;
            Ok(configuration_updated(session))
        }

        UiToDesigner::UpdateAddon { addon_id, update } => {
            session.update_addon(&addon_id, &update)?;
            Ok(configuration_updated(session))
        }

        UiToDesigner::ToggleAddon { addon_id } => {
            session.toggle_addon(&addon_id)?;
            Ok(configuration_updated(session))
        }

        UiToDesigner::ApplyConfiguration { configuration } => {
            session.replace_configuration(configuration)?;
            Ok(configuration_updated(session))
        }

        UiToDesigner::ResetConfiguration => {
            session.reset()?;
            Ok(configuration_updated(session))
        }

        // -- Presets --
        UiToDesigner::SelectVibe { vibe } => {
            session.select_vibe(vibe)?;
            Ok(DesignerToUi::VibeSelected {
                vibe: session.vibe().clone(),
            })
        }

        UiToDesigner::GeneratePreset => {
            let (preset, ticket) = session.generate_preset()?;
            Ok(DesignerToUi::PresetGenerated {
                preset: Box::new(preset),
                history: session.history().to_vec(),
                ticket,
                settle_after_ms: session.config().synth_delay_ms,
                busy: session.is_busy(),
            })
        }

        UiToDesigner::ApplyPreset { preset_id } => {
            session.apply_preset(preset_id)?;
            Ok(configuration_updated(session))
        }

        UiToDesigner::SynthesisElapsed { ticket } => {
            session.settle(ticket);
            Ok(DesignerToUi::BusyChanged {
                busy: session.is_busy(),
            })
        }

        // -- Session --
        UiToDesigner::RequestState => Ok(configuration_updated(session)),

        UiToDesigner::CloseSession => Ok(DesignerToUi::SessionClosed {
            cancelled_tickets: session.close(),
        }),
    }
}

/// Build the snapshot sent after any configuration change.
pub fn configuration_updated(session: &DesignerSession) -> DesignerToUi {
    DesignerToUi::ConfigurationUpdated {
        configuration: session.configuration().clone(),
        visual: Box::new(session.visual()),
        metrics: session.metrics(),
    }
}
