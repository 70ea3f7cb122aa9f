//! WASM entry points for the browser host.
//!
//! Only compiled for `wasm32`. The host owns the settle timer: after a
//! `PresetGenerated` response it calls `setTimeout(settleAfterMs)` and posts
//! `SynthesisElapsed` back through `process_message`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::SessionConfig;
use crate::dispatch;
use crate::messages::DesignerToUi;
use crate::session::{BridgeError, DesignerSession};

// Single-threaded in the browser.
thread_local! {
    static SESSION: RefCell<Option<DesignerSession>> = const { RefCell::new(None) };
}

fn not_initialized() -> String {
    dispatch::to_json(&DesignerToUi::Error {
        message: "designer not initialized; call init() first".to_string(),
    })
}

/// Start a session with default settings. Replaces any existing session,
/// cancelling its outstanding tickets.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    install(DesignerSession::default());
}

/// Start a session from a JSON `SessionConfig`.
#[wasm_bindgen]
pub fn init_with_config(json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = SessionConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    install(DesignerSession::new(config));
    Ok(())
}

fn install(session: DesignerSession) {
    SESSION.with(|cell| {
        if let Some(mut previous) = cell.borrow_mut().replace(session) {
            previous.close();
        }
    });
}

/// Process a JSON `UiToDesigner` message and return a JSON `DesignerToUi`.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    SESSION.with(|cell| match cell.borrow_mut().as_mut() {
        Some(session) => dispatch::dispatch_json(session, json_input),
        None => not_initialized(),
    })
}

/// The live configuration as JSON.
#[wasm_bindgen]
pub fn get_configuration() -> String {
    SESSION.with(|cell| match cell.borrow().as_ref() {
        Some(session) => serde_json::to_string(session.configuration()).unwrap_or_else(|e| {
            dispatch::to_json(&DesignerToUi::Error {
                message: BridgeError::Serialization {
                    reason: e.to_string(),
                }
                .to_string(),
            })
        }),
        None => not_initialized(),
    })
}

/// Visual parameters for the live configuration as JSON.
#[wasm_bindgen]
pub fn get_visual() -> String {
    SESSION.with(|cell| match cell.borrow().as_ref() {
        Some(session) => serde_json::to_string(&session.visual()).unwrap_or_else(|e| {
            dispatch::to_json(&DesignerToUi::Error {
                message: BridgeError::Serialization {
                    reason: e.to_string(),
                }
                .to_string(),
            })
        }),
        None => not_initialized(),
    })
}

/// Close the session, cancelling outstanding tickets.
#[wasm_bindgen]
pub fn close_session() -> usize {
    SESSION.with(|cell| {
        cell.borrow_mut()
            .as_mut()
            .map(DesignerSession::close)
            .unwrap_or(0)
    })
}
