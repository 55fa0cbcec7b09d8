//! Driver configuration.
//!
//! Loaded from `~/.workout/config.toml` unless `--config` points elsewhere.
//! Every key is optional; a missing default file means defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One human-readable line per workout.
    #[default]
    Text,

    /// One JSON object per line.
    Json,
}

/// Workout driver configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Output format used when `--output` is not given.
    pub output: OutputFormat,

    /// Packages file used by `batch` when `--file` is not given.
    pub packages: Option<PathBuf>,
}

impl Config {
    /// Load config from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. The default file may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        if let Some(path) = explicit {
            let contents = fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            return Self::parse(&contents, path);
        }

        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents, &path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!("failed to read {}: {e}", path.display())),
        }
    }

    /// The default config file path: `~/.workout/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".workout").join("config.toml"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn empty_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn reads_all_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output = \"json\"\npackages = \"/tmp/packages.toml\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.packages, Some(PathBuf::from("/tmp/packages.toml")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.starts_with("failed to read"), "{err}");
    }

    #[test]
    fn rejects_unknown_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output = \"xml\"\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.starts_with("invalid config at"), "{err}");
    }
}
