// Controls loading from config.json

use super::action::Action;
use super::keymap::{Keymap, RawConfig};
use log::{info, warn};
use std::path::Path;

/// Errors hit while reading the controls file.
///
/// These never abort startup: the loader falls back to an empty config
/// and every action starts unbound.
#[derive(Debug, thiserror::Error)]
pub enum ControlsError {
    #[error("failed to read controls file: {0}")]
    Io(#[from] std::io::Error),

    #[error("controls file is not a flat JSON string map: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and parse the controls file into unresolved bindings
fn read_raw(path: &Path) -> Result<RawConfig, ControlsError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Load the controls file and resolve it into a keymap.
///
/// An unreadable or malformed file yields an all-unbound keymap; a bad
/// individual entry only loses its own action. The result is a pure
/// function of the file contents.
pub fn load<P: AsRef<Path>>(path: P) -> Keymap {
    let path = path.as_ref();

    let raw = match read_raw(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Could not load {}: {}", path.display(), e);
            RawConfig::new()
        }
    };

    let keymap = Keymap::from_raw(&raw);
    info!(
        "Loaded {} of {} control bindings from {}",
        keymap.bound_count(),
        Action::COUNT,
        path.display()
    );
    keymap
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use winit::keyboard::KeyCode;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("keybound_test_{}_{}", std::process::id(), name))
    }

    const FULL_CONFIG: &str = r#"{
        "PlayerMoveUp": "w",
        "PlayerMoveDown": "s",
        "PlayerMoveLeft": "a",
        "PlayerMoveRight": "d",
        "UIMenu": "esc"
    }"#;

    #[test]
    fn test_missing_file_yields_all_unbound() {
        let keymap = load(temp_path("does_not_exist.json"));

        for action in Action::ALL {
            assert_eq!(keymap.get(action), None);
        }
    }

    #[test]
    fn test_malformed_file_yields_all_unbound() {
        let path = temp_path("malformed.json");
        fs::write(&path, "this is not json").unwrap();

        let keymap = load(&path);
        assert_eq!(keymap.bound_count(), 0);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_valid_file_binds_every_action() {
        let path = temp_path("valid.json");
        fs::write(&path, FULL_CONFIG).unwrap();

        let keymap = load(&path);
        assert_eq!(keymap.bound_count(), Action::COUNT);
        assert_eq!(keymap.get(Action::MoveUp), Some(KeyCode::KeyW));
        assert_eq!(keymap.get(Action::OpenMenu), Some(KeyCode::Escape));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_is_idempotent() {
        let path = temp_path("idempotent.json");
        fs::write(&path, FULL_CONFIG).unwrap();

        assert_eq!(load(&path), load(&path));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_controls_error_display() {
        let err = ControlsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert_eq!(err.to_string(), "failed to read controls file: gone");
    }
}
