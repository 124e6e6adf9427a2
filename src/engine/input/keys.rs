// Key name registry
//
// Translates the human-readable key names accepted in config.json into
// physical key codes. The table is fixed at compile time and covers the
// letters, digits, standard US punctuation, and the named control and
// navigation keys.

use winit::keyboard::KeyCode;

/// Resolve a config key name to a physical key code.
///
/// Names are case-sensitive. An unknown name resolves to `None` rather
/// than an error, leaving the affected action unbound.
pub fn resolve(name: &str) -> Option<KeyCode> {
    let code = match name {
        "esc" => KeyCode::Escape,
        "tab" => KeyCode::Tab,
        "caps" => KeyCode::CapsLock,
        "shift" => KeyCode::ShiftLeft,
        "r_shift" => KeyCode::ShiftRight,
        "ctrl" => KeyCode::ControlLeft,
        "r_ctrl" => KeyCode::ControlRight,
        "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "page_up" => KeyCode::PageUp,
        "page_down" => KeyCode::PageDown,
        "space" => KeyCode::Space,
        "up" => KeyCode::ArrowUp,
        "down" => KeyCode::ArrowDown,
        "left" => KeyCode::ArrowLeft,
        "right" => KeyCode::ArrowRight,
        "a" => KeyCode::KeyA,
        "b" => KeyCode::KeyB,
        "c" => KeyCode::KeyC,
        "d" => KeyCode::KeyD,
        "e" => KeyCode::KeyE,
        "f" => KeyCode::KeyF,
        "g" => KeyCode::KeyG,
        "h" => KeyCode::KeyH,
        "i" => KeyCode::KeyI,
        "j" => KeyCode::KeyJ,
        "k" => KeyCode::KeyK,
        "l" => KeyCode::KeyL,
        "m" => KeyCode::KeyM,
        "n" => KeyCode::KeyN,
        "o" => KeyCode::KeyO,
        "p" => KeyCode::KeyP,
        "q" => KeyCode::KeyQ,
        "r" => KeyCode::KeyR,
        "s" => KeyCode::KeyS,
        "t" => KeyCode::KeyT,
        "u" => KeyCode::KeyU,
        "v" => KeyCode::KeyV,
        "w" => KeyCode::KeyW,
        "x" => KeyCode::KeyX,
        "y" => KeyCode::KeyY,
        "z" => KeyCode::KeyZ,
        "0" => KeyCode::Digit0,
        "1" => KeyCode::Digit1,
        "2" => KeyCode::Digit2,
        "3" => KeyCode::Digit3,
        "4" => KeyCode::Digit4,
        "5" => KeyCode::Digit5,
        "6" => KeyCode::Digit6,
        "7" => KeyCode::Digit7,
        "8" => KeyCode::Digit8,
        "9" => KeyCode::Digit9,
        "-" => KeyCode::Minus,
        "=" => KeyCode::Equal,
        "[" => KeyCode::BracketLeft,
        "]" => KeyCode::BracketRight,
        "\\" => KeyCode::Backslash,
        ";" => KeyCode::Semicolon,
        "'" => KeyCode::Quote,
        "," => KeyCode::Comma,
        "." => KeyCode::Period,
        "/" => KeyCode::Slash,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_names_resolve_to_none() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("enter"), None);
        assert_eq!(resolve("escape"), None);
        assert_eq!(resolve("w "), None);
        assert_eq!(resolve("f1"), None);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(resolve("w"), Some(KeyCode::KeyW));
        assert_eq!(resolve("W"), None);
        assert_eq!(resolve("ESC"), None);
        assert_eq!(resolve("Space"), None);
    }

    #[test]
    fn test_named_control_keys() {
        assert_eq!(resolve("esc"), Some(KeyCode::Escape));
        assert_eq!(resolve("tab"), Some(KeyCode::Tab));
        assert_eq!(resolve("caps"), Some(KeyCode::CapsLock));
        assert_eq!(resolve("space"), Some(KeyCode::Space));
        assert_eq!(resolve("del"), Some(KeyCode::Delete));
        assert_eq!(resolve("home"), Some(KeyCode::Home));
        assert_eq!(resolve("page_up"), Some(KeyCode::PageUp));
        assert_eq!(resolve("page_down"), Some(KeyCode::PageDown));
    }

    #[test]
    fn test_left_right_variants_differ() {
        assert_eq!(resolve("shift"), Some(KeyCode::ShiftLeft));
        assert_eq!(resolve("r_shift"), Some(KeyCode::ShiftRight));
        assert_eq!(resolve("ctrl"), Some(KeyCode::ControlLeft));
        assert_eq!(resolve("r_ctrl"), Some(KeyCode::ControlRight));
        assert_ne!(resolve("shift"), resolve("r_shift"));
        assert_ne!(resolve("ctrl"), resolve("r_ctrl"));
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(resolve("up"), Some(KeyCode::ArrowUp));
        assert_eq!(resolve("down"), Some(KeyCode::ArrowDown));
        assert_eq!(resolve("left"), Some(KeyCode::ArrowLeft));
        assert_eq!(resolve("right"), Some(KeyCode::ArrowRight));
    }

    #[test]
    fn test_letters_digits_and_punctuation() {
        assert_eq!(resolve("a"), Some(KeyCode::KeyA));
        assert_eq!(resolve("z"), Some(KeyCode::KeyZ));
        assert_eq!(resolve("0"), Some(KeyCode::Digit0));
        assert_eq!(resolve("9"), Some(KeyCode::Digit9));
        assert_eq!(resolve("-"), Some(KeyCode::Minus));
        assert_eq!(resolve("="), Some(KeyCode::Equal));
        assert_eq!(resolve("["), Some(KeyCode::BracketLeft));
        assert_eq!(resolve("\\"), Some(KeyCode::Backslash));
        assert_eq!(resolve("'"), Some(KeyCode::Quote));
        assert_eq!(resolve("/"), Some(KeyCode::Slash));
    }
}
