// Action to physical key binding table

use super::action::Action;
use super::keys;
use log::warn;
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Unresolved controls as written in config.json: action name -> key name
pub type RawConfig = HashMap<String, String>;

/// Mapping from every action to its bound physical key.
///
/// The table is total over `Action`: entries without a valid binding hold
/// `None` and can never match a real key event. Built once at startup and
/// read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    bindings: [Option<KeyCode>; Action::COUNT],
}

impl Keymap {
    /// Create a keymap with every action unbound
    pub fn unbound() -> Self {
        Self {
            bindings: [None; Action::COUNT],
        }
    }

    /// Build a keymap from unresolved controls.
    ///
    /// Each action is looked up under its fixed config key; a missing
    /// entry or an unknown key name leaves only that action unbound.
    pub fn from_raw(raw: &RawConfig) -> Self {
        let mut keymap = Self::unbound();

        for action in Action::ALL {
            let name = match raw.get(action.config_key()) {
                Some(name) => name,
                None => {
                    warn!("No binding configured for {}", action.config_key());
                    continue;
                }
            };

            match keys::resolve(name) {
                Some(code) => keymap.bind(action, code),
                None => warn!(
                    "Unknown key name {:?} for {}",
                    name,
                    action.config_key()
                ),
            }
        }

        keymap
    }

    /// Bind an action to a physical key
    pub fn bind(&mut self, action: Action, key: KeyCode) {
        self.bindings[action.index()] = Some(key);
    }

    /// Get the key bound to an action, if any
    pub fn get(&self, action: Action) -> Option<KeyCode> {
        self.bindings[action.index()]
    }

    /// Find the action a pressed key is bound to.
    ///
    /// Actions are checked in `Action::ALL` order, so with duplicate
    /// bindings the first match wins. Unbound entries never match.
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| self.bindings[action.index()] == Some(key))
    }

    /// Number of actions with a key bound
    pub fn bound_count(&self) -> usize {
        self.bindings.iter().filter(|b| b.is_some()).count()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::unbound()
    }
}
