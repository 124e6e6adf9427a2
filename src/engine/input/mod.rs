// Keyboard input handling
//
// This module turns raw window events into game actions through a
// user-editable keymap loaded from config.json.
//
// ## Architecture
//
// - `action`: the closed set of in-game actions and their config keys
// - `keys`: registry translating config key names to physical key codes
// - `keymap`: the resolved action -> physical key binding table
// - `config`: loads config.json, degrading bad entries to unbound
// - `event`: the closed input event type fed to the resolver
// - `resolver`: per-frame event drain driving the player and the loop flag
//
// ## Usage Example
//
// ```rust
// use engine::input::{config, resolver};
//
// // At startup, resolve config.json into a keymap
// let keymap = config::load("config.json");
//
// // Each frame, drain the queued events into the player
// let keep_running = resolver::resolve_frame(&keymap, &mut player, events);
// ```

pub mod action;
pub mod config;
pub mod event;
pub mod keymap;
pub mod keys;
pub mod resolver;

// Re-export commonly used types
pub use action::Action;
pub use event::InputEvent;
pub use keymap::{Keymap, RawConfig};
