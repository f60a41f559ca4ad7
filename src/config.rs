//! User configuration (`config.toml`).
//!
//! ```toml
//! [engine]
//! memoize = false
//!
//! [engine.bounds]
//! max_cols = 10
//! max_rows = 10
//!
//! [grid]
//! rows = 10
//! cols = 10
//! ```

use anyhow::{Context, bail};
use directories::ProjectDirs;
use serde::Deserialize;
use sheetcalc_core::{EngineConfig, GridSize};
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub engine: EngineConfig,
    pub grid: GridSize,
}

/// Load configuration from `explicit`, or from the user config dir.
///
/// An explicit path must exist; a missing default file means defaults.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match user_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };
    read_config(&path)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        bail!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        );
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "sheetcalc")?;
    Some(proj.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetcalc_engine::engine::Bounds;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_temp(
            "[engine]\nmemoize = true\n\n[engine.bounds]\nmax_cols = 26\nmax_rows = 50\n\n[grid]\nrows = 20\ncols = 5\n",
        );
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(
            config,
            Config {
                engine: EngineConfig {
                    bounds: Bounds::new(26, 50),
                    memoize: true,
                },
                grid: GridSize { rows: 20, cols: 5 },
            }
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_temp("[engine.bounds]\nmax_rows = 99\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.engine.bounds, Bounds::new(10, 99));
        assert!(!config.engine.memoize);
        assert_eq!(config.grid, GridSize::default());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let file = write_temp("[engine]\nmemoise = true\n");
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
