// Per-frame input resolution

use super::action::Action;
use super::event::InputEvent;
use super::keymap::Keymap;
use crate::game::player::{Player, MOVE_STEP};
use glam::Vec2;

/// Drain this frame's events, applying bound actions to the player.
///
/// Returns whether the main loop should keep running. A quit request or a
/// press of the menu key stops the drain immediately: movement already
/// applied earlier in the batch is kept, events queued behind the trigger
/// are dropped. An empty batch returns right away.
pub fn resolve_frame<I>(keymap: &Keymap, player: &mut Player, events: I) -> bool
where
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        match event {
            InputEvent::Quit => return false,
            InputEvent::KeyPress(key) => match keymap.action_for(key) {
                Some(Action::MoveUp) => player.translate(Vec2::new(0.0, -MOVE_STEP)),
                Some(Action::MoveDown) => player.translate(Vec2::new(0.0, MOVE_STEP)),
                Some(Action::MoveLeft) => player.translate(Vec2::new(-MOVE_STEP, 0.0)),
                Some(Action::MoveRight) => player.translate(Vec2::new(MOVE_STEP, 0.0)),
                Some(Action::OpenMenu) => return false,
                None => {}
            },
            InputEvent::Other => {}
        }
    }

    // Keep main loop running
    true
}
