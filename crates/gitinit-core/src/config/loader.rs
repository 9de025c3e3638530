//! Configuration loader with precedence

use super::runtime::RuntimeConfig;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::env;
use std::fs;
use tracing::debug;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "GITINIT_CONFIG_DIR";

const CONFIG_FILE: &str = "config.yaml";

/// Loads [`RuntimeConfig`] from the configuration directory and environment
pub struct ConfigLoader {
    /// Directory holding `config.yaml` and `.env`
    config_dir: Utf8PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the standard config directory
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self { config_dir })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// `$GITINIT_CONFIG_DIR`, else `~/.gitinit`
    fn get_config_dir() -> Result<Utf8PathBuf> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            return Ok(Utf8PathBuf::from(dir));
        }

        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| Error::configuration("Could not determine home directory"))?;

        Ok(Utf8PathBuf::from(home).join(".gitinit"))
    }

    /// Load runtime configuration with the process environment as override source
    pub fn load(&self) -> Result<RuntimeConfig> {
        self.load_with(|key| env::var(key).ok())
    }

    /// Load runtime configuration, reading overrides through `lookup`
    pub fn load_with<F>(&self, lookup: F) -> Result<RuntimeConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RuntimeConfig::default();

        let config_path = self.config_dir.join(CONFIG_FILE);
        if config_path.exists() {
            debug!("Loading configuration from: {}", config_path);
            config = Self::load_yaml_file(&config_path)?;
        }

        apply_env_overrides(&mut config, lookup)?;
        Ok(config)
    }

    fn load_yaml_file(path: &Utf8Path) -> Result<RuntimeConfig> {
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse {}: {}", path, e)))
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

fn apply_env_overrides<F>(config: &mut RuntimeConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("GITINIT_GITHUB_API_URL") {
        config.github.api_url = val;
    }

    if let Some(val) = lookup("GITINIT_GITHUB_PER_PAGE") {
        config.github.per_page = val.parse().map_err(|_| {
            Error::configuration("GITINIT_GITHUB_PER_PAGE must be a valid number")
        })?;
    }

    if let Some(val) = lookup("GITINIT_GITHUB_MAX_PAGES") {
        config.github.max_pages = val.parse().map_err(|_| {
            Error::configuration("GITINIT_GITHUB_MAX_PAGES must be a valid number")
        })?;
    }

    if let Some(val) = lookup("GITINIT_HTTP_TIMEOUT_SECS") {
        config.github.http_timeout_secs = val.parse().map_err(|_| {
            Error::configuration("GITINIT_HTTP_TIMEOUT_SECS must be a valid number")
        })?;
    }

    if let Some(val) = lookup("GITINIT_TOKEN_PATH_ENV") {
        config.credentials.token_path_env = val;
    }

    if let Some(val) = lookup("GITINIT_DEFAULT_BRANCH") {
        config.git.default_branch = val;
    }

    if let Some(val) = lookup("GITINIT_MANIFEST_ENABLED") {
        config.manifest.enabled = val.parse().map_err(|_| {
            Error::configuration("GITINIT_MANIFEST_ENABLED must be true or false")
        })?;
    }

    if config.github.per_page == 0 {
        return Err(Error::configuration("github.per-page must be greater than 0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn create_temp_loader() -> (ConfigLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_dir =
            Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("Invalid UTF-8 path");
        (ConfigLoader::with_dir(config_dir), temp_dir)
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_defaults_without_file() {
        let (loader, _temp) = create_temp_loader();
        let config = loader.load_with(no_env).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.credentials.token_path_env, "PRIVATE_KEY");
        assert_eq!(config.git.initial_commit_message, "Initial commit");
        assert_eq!(config.manifest.command, vec!["npm", "init", "-y"]);
    }

    #[test]
    fn test_load_from_file_keeps_defaults_for_missing_fields() {
        let (loader, _temp) = create_temp_loader();
        let content = r#"
github:
  api-url: "https://github.example.com/api/v3"
  per-page: 50
manifest:
  enabled: false
"#;
        fs::write(loader.config_dir().join(CONFIG_FILE), content).unwrap();

        let config = loader.load_with(no_env).unwrap();
        assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
        assert_eq!(config.github.per_page, 50);
        assert_eq!(config.github.max_pages, 100);
        assert!(!config.manifest.enabled);
        assert_eq!(config.manifest.file, "package.json");
        assert_eq!(config.git.default_branch, "main");
    }

    #[test]
    fn test_invalid_yaml_is_configuration_error() {
        let (loader, _temp) = create_temp_loader();
        fs::write(loader.config_dir().join(CONFIG_FILE), "github: [unclosed").unwrap();

        let err = loader.load_with(no_env).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_env_overrides_take_precedence_over_file() {
        let (loader, _temp) = create_temp_loader();
        fs::write(
            loader.config_dir().join(CONFIG_FILE),
            "github:\n  per-page: 50\n",
        )
        .unwrap();

        let env: HashMap<&str, &str> = [
            ("GITINIT_GITHUB_PER_PAGE", "25"),
            ("GITINIT_TOKEN_PATH_ENV", "GITHUB_TOKEN_FILE"),
            ("GITINIT_DEFAULT_BRANCH", "trunk"),
        ]
        .into_iter()
        .collect();

        let config = loader
            .load_with(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.github.per_page, 25);
        assert_eq!(config.credentials.token_path_env, "GITHUB_TOKEN_FILE");
        assert_eq!(config.git.default_branch, "trunk");
    }

    #[test]
    fn test_invalid_numeric_override_is_rejected() {
        let (loader, _temp) = create_temp_loader();
        let err = loader
            .load_with(|key| (key == "GITINIT_GITHUB_MAX_PAGES").then(|| "many".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("GITINIT_GITHUB_MAX_PAGES"));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let (loader, _temp) = create_temp_loader();
        let err = loader
            .load_with(|key| (key == "GITINIT_GITHUB_PER_PAGE").then(|| "0".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    #[serial]
    fn test_config_dir_env_override() {
        env::set_var(CONFIG_DIR_ENV, "/tmp/gitinit-test-config");
        let loader = ConfigLoader::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(loader.config_dir().as_str(), "/tmp/gitinit-test-config");
    }
}
