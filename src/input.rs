//! Keyboard shortcuts for the stopwatch.
//!
//! Routing is a pure function over the key code and modifier flags; the
//! browser side is a [`KeyListener`] guard that removes its `keydown`
//! listener when dropped.

use log::{debug, warn};
use std::fmt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, KeyboardEvent};

const KEYDOWN: &str = "keydown";

/// Stopwatch action triggered by a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Toggle,
    Reset,
    RecordLap,
}

impl KeyAction {
    /// Whether the browser's default handling of the key must be cancelled
    /// (page scroll for Space, page reload for Ctrl+R).
    pub fn suppresses_default(self) -> bool {
        matches!(self, KeyAction::Toggle | KeyAction::Reset)
    }
}

/// Map a `KeyboardEvent.code` plus modifier state to an action.
///
/// `meta` stands in for Ctrl on platforms where Cmd is the reload modifier.
pub fn route_key(code: &str, ctrl: bool, meta: bool) -> Option<KeyAction> {
    match code {
        "Space" => Some(KeyAction::Toggle),
        "KeyR" if ctrl || meta => Some(KeyAction::Reset),
        "KeyL" => Some(KeyAction::RecordLap),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ShortcutError {
    Register(String),
}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutError::Register(cause) => {
                write!(f, "Failed to register keyboard shortcuts: {}", cause)
            }
        }
    }
}

impl std::error::Error for ShortcutError {}

/// A registered `keydown` listener. Dropping it deregisters the listener, so
/// a widget that unmounts never leaves a handler behind.
pub struct KeyListener {
    target: EventTarget,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    pub fn attach(
        target: &EventTarget,
        on_action: impl Fn(KeyAction) + 'static,
    ) -> Result<Self, ShortcutError> {
        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let Some(action) = route_key(&event.code(), event.ctrl_key(), event.meta_key()) else {
                return;
            };
            if action.suppresses_default() {
                event.prevent_default();
            }
            on_action(action);
        });

        target
            .add_event_listener_with_callback(KEYDOWN, callback.as_ref().unchecked_ref())
            .map_err(|e| ShortcutError::Register(format!("{:?}", e)))?;
        debug!("Keyboard shortcuts registered");

        Ok(Self {
            target: target.clone(),
            callback,
        })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        match self
            .target
            .remove_event_listener_with_callback(KEYDOWN, self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => debug!("Keyboard shortcuts removed"),
            Err(e) => warn!("Failed to remove keyboard shortcuts: {:?}", e),
        }
    }
}
