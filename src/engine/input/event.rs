// Input events fed to the per-frame resolver

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// A single event drained from the window's queue.
///
/// The set is deliberately closed: the resolver matches it exhaustively,
/// and variants are added one at a time as more of the window collaborator
/// gets used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was asked to close
    Quit,
    /// An identified physical key went down (repeats included)
    KeyPress(KeyCode),
    /// Anything else; ignored by the resolver
    Other,
}

impl InputEvent {
    /// Translate a winit keyboard event.
    ///
    /// Releases and unidentified keys fold into `Other`. Repeats stay
    /// presses, so a held key keeps producing movement.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        match (event.physical_key, event.state) {
            (PhysicalKey::Code(code), ElementState::Pressed) => InputEvent::KeyPress(code),
            _ => InputEvent::Other,
        }
    }
}
