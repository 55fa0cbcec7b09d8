//! Sensor packages: the `(code, values)` pairs the driver feeds the factory.
//!
//! Packages come from a TOML file:
//!
//! ```toml
//! [[package]]
//! code = "SWM"
//! data = [720, 1, 80, 25, 40]
//! ```
//!
//! or, when no file is configured, from the built-in sample dataset.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// One raw reading: a workout code and its positional values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct PackagesFile {
    #[serde(default, rename = "package")]
    packages: Vec<Package>,
}

/// The sample dataset: one session of each workout kind.
pub fn sample() -> Vec<Package> {
    [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
    .into_iter()
    .map(|(code, data)| Package {
        code: code.to_string(),
        data,
    })
    .collect()
}

/// Read packages from a TOML file.
pub fn load(path: &Path) -> Result<Vec<Package>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

    let file: PackagesFile = toml::from_str(&contents)
        .map_err(|e| format!("invalid packages file {}: {e}", path.display()))?;

    Ok(file.packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn sample_has_one_of_each_code() {
        let codes: Vec<String> = sample().into_iter().map(|p| p.code).collect();
        assert_eq!(codes, ["SWM", "RUN", "WLK"]);
    }

    #[test]
    fn loads_integer_and_float_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("packages.toml");
        fs::write(
            &path,
            r#"
[[package]]
code = "RUN"
data = [15000, 1.5, 75]

[[package]]
code = "WLK"
data = [9000, 1, 75, 180]
"#,
        )
        .unwrap();

        let packages = load(&path).unwrap();
        assert_eq!(
            packages,
            [
                Package {
                    code: "RUN".to_string(),
                    data: vec![15000.0, 1.5, 75.0],
                },
                Package {
                    code: "WLK".to_string(),
                    data: vec![9000.0, 1.0, 75.0, 180.0],
                },
            ]
        );
    }

    #[test]
    fn empty_file_has_no_packages() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("packages.toml");
        fs::write(&path, "").unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("packages.toml");
        fs::write(&path, "[[package]]\ncode = 5\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.starts_with("invalid packages file"), "{err}");
    }
}
