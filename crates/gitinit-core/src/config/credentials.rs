//! Access token loading
//!
//! The token lives in a file whose path is held by an environment variable
//! (`PRIVATE_KEY` by default). The variable may come from the process
//! environment or from `<config-dir>/.env`; relative paths are resolved
//! against the config directory.

use super::runtime::CredentialsConfig;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashMap;
use std::fmt;
use std::{env, fs, io};
use tracing::debug;

/// API access token read from the credential file
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a token; blank tokens are rejected
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(Error::configuration("access token is empty"));
        }
        Ok(Self(token))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Load the access token using the process environment and `<config_dir>/.env`
pub fn load_access_token(config: &CredentialsConfig, config_dir: &Utf8Path) -> Result<AccessToken> {
    let dotenv = read_dotenv(&config_dir.join(".env"))?;
    load_access_token_with(config, config_dir, |key| {
        env::var(key).ok().or_else(|| dotenv.get(key).cloned())
    })
}

/// Load the access token, reading variables through `lookup`
pub fn load_access_token_with<F>(
    config: &CredentialsConfig,
    config_dir: &Utf8Path,
    lookup: F,
) -> Result<AccessToken>
where
    F: Fn(&str) -> Option<String>,
{
    let var = &config.token_path_env;
    let raw_path = lookup(var)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| Error::configuration(format!("{} not found in environment or .env file", var)))?;

    let token_path = resolve_path(config_dir, raw_path.trim());
    debug!("Reading access token from: {}", token_path);

    let contents = match fs::read_to_string(&token_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::configuration(format!("{} not found", token_path)));
        }
        Err(e) => return Err(e.into()),
    };

    AccessToken::new(contents).map_err(|_| {
        Error::configuration(format!(
            "{} is empty. Please add a GitHub API token to the file",
            token_path
        ))
    })
}

fn resolve_path(config_dir: &Utf8Path, raw: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from(raw);
    if path.is_absolute() {
        path
    } else {
        config_dir.join(path)
    }
}

fn read_dotenv(path: &Utf8Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    debug!("Loading .env from: {}", path);
    let iter = dotenvy::from_path_iter(path.as_std_path())
        .map_err(|e| Error::configuration(format!("Failed to read {}: {}", path, e)))?;

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) =
            item.map_err(|e| Error::configuration(format!("Failed to parse {}: {}", path, e)))?;
        vars.insert(key, value);
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn temp_config_dir() -> (Utf8PathBuf, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        (dir, temp_dir)
    }

    fn lookup_from<'a>(pairs: &'a [(&'a str, String)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_missing_variable_is_configuration_error() {
        let (dir, _temp) = temp_config_dir();
        let err =
            load_access_token_with(&CredentialsConfig::default(), &dir, |_| None).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("PRIVATE_KEY"));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let (dir, _temp) = temp_config_dir();
        let vars = [("PRIVATE_KEY", "does-not-exist.key".to_string())];
        let err = load_access_token_with(&CredentialsConfig::default(), &dir, lookup_from(&vars))
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_empty_file_is_configuration_error() {
        let (dir, _temp) = temp_config_dir();
        fs::write(dir.join("github.key"), "  \n").unwrap();
        let vars = [("PRIVATE_KEY", "github.key".to_string())];
        let err = load_access_token_with(&CredentialsConfig::default(), &dir, lookup_from(&vars))
            .unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn test_relative_path_resolves_against_config_dir() {
        let (dir, _temp) = temp_config_dir();
        fs::write(dir.join("github.key"), "ghp_secret\n").unwrap();
        let vars = [("PRIVATE_KEY", "github.key".to_string())];
        let token =
            load_access_token_with(&CredentialsConfig::default(), &dir, lookup_from(&vars))
                .unwrap();
        assert_eq!(token.expose(), "ghp_secret");
    }

    #[test]
    fn test_absolute_path_and_custom_variable() {
        let (dir, _temp) = temp_config_dir();
        let (other, _other_temp) = temp_config_dir();
        let key_path = other.join("token");
        fs::write(&key_path, "ghp_other").unwrap();

        let config = CredentialsConfig {
            token_path_env: "GITHUB_TOKEN_FILE".to_string(),
        };
        let vars = [("GITHUB_TOKEN_FILE", key_path.to_string())];
        let token = load_access_token_with(&config, &dir, lookup_from(&vars)).unwrap();
        assert_eq!(token.expose(), "ghp_other");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = AccessToken::new("ghp_secret").unwrap();
        assert_eq!(format!("{:?}", token), "AccessToken(***)");
    }

    #[test]
    #[serial]
    fn test_dotenv_file_supplies_variable() {
        let (dir, _temp) = temp_config_dir();
        fs::write(dir.join("github.key"), "ghp_from_dotenv").unwrap();
        fs::write(dir.join(".env"), "# token\nGITINIT_TEST_KEY_PATH=github.key\n").unwrap();
        env::remove_var("GITINIT_TEST_KEY_PATH");

        let config = CredentialsConfig {
            token_path_env: "GITINIT_TEST_KEY_PATH".to_string(),
        };
        let token = load_access_token(&config, &dir).unwrap();
        assert_eq!(token.expose(), "ghp_from_dotenv");
    }
}
