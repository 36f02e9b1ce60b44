// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes StudyConfig as pretty-printed JSON.
//
// A missing --config flag means "use the defaults"; a --config
// path that can't be read or parsed is an error, so a typo in
// the file name doesn't silently fall back.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::application::config::StudyConfig;

/// Load the config at `path`, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<StudyConfig> {
    let Some(path) = path else {
        return Ok(StudyConfig::default());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

    tracing::debug!("Loaded config from '{}'", path.display());
    Ok(cfg)
}

/// Write `cfg` to `path`, creating parent directories as needed
pub fn save_config(path: &Path, cfg: &StudyConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved config to '{}'", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), StudyConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("nested").join("study-pal.json");

        let cfg = StudyConfig { mcq_count: 4, default_subject: "Physics".into(), ..Default::default() };
        save_config(&path, &cfg).unwrap();

        assert_eq!(load_config(Some(&path)).unwrap(), cfg);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config JSON"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.json"))).is_err());
    }
}
