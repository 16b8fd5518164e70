//! Configuration loading for moodlift.
//!
//! Settings come from an explicit file, or from `moodlift.yaml` in the
//! working directory when present. With neither, defaults apply.

mod settings;

use std::path::Path;

use crate::error::Result;

pub use settings::Settings;

/// The name of the settings file.
pub const CONFIG_FILENAME: &str = "moodlift.yaml";

/// Load settings for a run.
///
/// An explicit path must exist. Otherwise `<dir>/moodlift.yaml` is used if
/// present. A file that exists but does not parse is always an error.
pub fn load_settings(explicit: Option<&Path>, dir: &Path) -> Result<Settings> {
    if let Some(path) = explicit {
        return Settings::load(path);
    }

    let candidate = dir.join(CONFIG_FILENAME);
    if candidate.is_file() {
        Settings::load(&candidate)
    } else {
        Ok(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoodError;
    use crate::render::FillStrategy;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempdir().unwrap();
        let settings = load_settings(None, dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_loads_file_from_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "fill: noise\n").unwrap();

        let settings = load_settings(None, dir.path()).unwrap();
        assert_eq!(settings.fill, FillStrategy::Noise);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");

        let err = load_settings(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, MoodError::Io { .. }));
    }

    #[test]
    fn test_invalid_file_fails_closed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "base_resolution: [1, 2]\n").unwrap();

        assert!(load_settings(None, dir.path()).is_err());
    }
}
