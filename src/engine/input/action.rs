// Game action definitions

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Meta actions
    OpenMenu,
}

impl Action {
    /// Number of actions; sizes the keymap table
    pub const COUNT: usize = 5;

    /// All actions, in the order the resolver checks bindings
    pub const ALL: [Action; Action::COUNT] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::OpenMenu,
    ];

    /// Ordinal used to index the keymap table
    pub fn index(self) -> usize {
        match self {
            Action::MoveUp => 0,
            Action::MoveDown => 1,
            Action::MoveLeft => 2,
            Action::MoveRight => 3,
            Action::OpenMenu => 4,
        }
    }

    /// Key this action is looked up under in config.json
    pub fn config_key(self) -> &'static str {
        match self {
            Action::MoveUp => "PlayerMoveUp",
            Action::MoveDown => "PlayerMoveDown",
            Action::MoveLeft => "PlayerMoveLeft",
            Action::MoveRight => "PlayerMoveRight",
            Action::OpenMenu => "UIMenu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_lists_each_action_once() {
        let mut seen = HashSet::new();
        for action in Action::ALL {
            assert!(seen.insert(action), "Duplicate action in Action::ALL");
        }
        assert_eq!(seen.len(), Action::COUNT);
    }

    #[test]
    fn test_index_matches_position_in_all() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn test_config_keys_are_unique() {
        let keys: HashSet<&str> = Action::ALL.iter().map(|a| a.config_key()).collect();
        assert_eq!(keys.len(), Action::COUNT);
    }

    #[test]
    fn test_config_key_names() {
        assert_eq!(Action::MoveUp.config_key(), "PlayerMoveUp");
        assert_eq!(Action::MoveDown.config_key(), "PlayerMoveDown");
        assert_eq!(Action::MoveLeft.config_key(), "PlayerMoveLeft");
        assert_eq!(Action::MoveRight.config_key(), "PlayerMoveRight");
        assert_eq!(Action::OpenMenu.config_key(), "UIMenu");
    }
}
