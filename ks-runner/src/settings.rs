use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};

pub const DEFAULT_SOLVER: &str = "./solver.out";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverSettings {
    /// Executable invoked as `<solver> <input-path>`.
    pub solver: PathBuf,
    /// Directory holding the per-call input files.
    pub work_dir: PathBuf,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            solver: PathBuf::from(DEFAULT_SOLVER),
            work_dir: PathBuf::from("."),
        }
    }
}

/// Accepts either an inline json string or a path ending in `.json`.
pub fn load_settings(settings: &str) -> Result<SolverSettings> {
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings)
            .with_context(|| format!("Failed to read settings file: {}", settings))?
    } else {
        settings.to_string()
    };

    serde_json::from_str::<SolverSettings>(&settings).context("Failed to parse settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_settings() {
        let settings = load_settings(r#"{"solver": "/opt/ks/solver"}"#).unwrap();
        assert_eq!(settings.solver, PathBuf::from("/opt/ks/solver"));
        assert_eq!(settings.work_dir, PathBuf::from("."));

        let settings = load_settings("{}").unwrap();
        assert_eq!(settings, SolverSettings::default());
    }

    #[test]
    fn test_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"solver": "bin/ks", "work_dir": "/var/tmp"}"#).unwrap();

        let settings = load_settings(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.solver, PathBuf::from("bin/ks"));
        assert_eq!(settings.work_dir, PathBuf::from("/var/tmp"));
    }

    #[test]
    fn test_invalid_settings() {
        assert!(load_settings(r#"{"solvr": "typo"}"#).is_err());
        assert!(load_settings("not json").is_err());
        assert!(load_settings("/does/not/exist/settings.json").is_err());
    }
}
