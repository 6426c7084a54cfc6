//! Advisor configuration resolution.
//!
//! Order: `--config <path>`, then the file named by `FPL_ADVISOR_CONFIG`,
//! then built-in defaults. Command-line overrides are applied last and the
//! result is validated before anything runs.

use anyhow::{Context, Result};
use fpl_core::AdvisorConfig;
use log::debug;
use std::path::Path;
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "FPL_ADVISOR_CONFIG";

/// Individual knobs that may be set on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub window: Option<u32>,
    pub top_n: Option<usize>,
    pub max_transfers: Option<usize>,
}

impl Overrides {
    fn apply(&self, config: &mut AdvisorConfig) {
        if let Some(window) = self.window {
            config.window = window;
        }
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if let Some(max_transfers) = self.max_transfers {
            config.max_transfers = max_transfers;
        }
    }
}

fn read_config(path: &Path, origin: &str) -> Result<AdvisorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file from {origin} '{}'", path.display()))?;
    AdvisorConfig::from_json(&content)
        .with_context(|| format!("Failed to parse config JSON from {origin} '{}'", path.display()))
}

/// Resolves the config from an explicit path, the environment, or defaults.
pub fn resolve_config(explicit: Option<&Path>, overrides: Overrides) -> Result<AdvisorConfig> {
    resolve_with_env(explicit, env::var(CONFIG_PATH_ENV).ok().as_deref(), overrides)
}

fn resolve_with_env(explicit: Option<&Path>, env_path: Option<&str>, overrides: Overrides) -> Result<AdvisorConfig> {
    let env_path = env_path.map(str::trim).filter(|p| !p.is_empty());

    let mut config = match (explicit, env_path) {
        (Some(path), _) => read_config(path, "--config")?,
        (None, Some(path)) => read_config(Path::new(path), CONFIG_PATH_ENV)?,
        (None, None) => AdvisorConfig::default(),
    };
    overrides.apply(&mut config);

    config.validate().context("Invalid advisor configuration")?;
    debug!("Resolved config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_any_source() {
        let config = resolve_with_env(None, None, Overrides::default()).unwrap();
        assert_eq!(config, AdvisorConfig::default());
    }

    #[test]
    fn test_explicit_path_beats_environment() {
        let explicit = config_file(r#"{"top_n": 12}"#);
        let from_env = config_file(r#"{"top_n": 3}"#);
        let env_path = from_env.path().to_string_lossy().into_owned();

        let config = resolve_with_env(Some(explicit.path()), Some(&env_path), Overrides::default()).unwrap();
        assert_eq!(config.top_n, 12);
        assert_eq!(config.window, 6);

        let config = resolve_with_env(None, Some(&env_path), Overrides::default()).unwrap();
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn test_blank_environment_value_is_ignored() {
        let config = resolve_with_env(None, Some("   "), Overrides::default()).unwrap();
        assert_eq!(config, AdvisorConfig::default());
    }

    #[test]
    fn test_overrides_apply_after_file() {
        let file = config_file(r#"{"window": 8, "max_transfers": 1}"#);
        let overrides = Overrides { window: Some(4), top_n: None, max_transfers: Some(3) };

        let config = resolve_with_env(Some(file.path()), None, overrides).unwrap();
        assert_eq!(config.window, 4);
        assert_eq!(config.max_transfers, 3);
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn test_invalid_sources_fail() {
        let missing = Path::new("/definitely/not/here.json");
        assert!(resolve_with_env(Some(missing), None, Overrides::default()).is_err());

        let broken = config_file("{ not json");
        assert!(resolve_with_env(Some(broken.path()), None, Overrides::default()).is_err());

        let zero_window = Overrides { window: Some(0), ..Overrides::default() };
        assert!(resolve_with_env(None, None, zero_window).is_err());
    }
}
