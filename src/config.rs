//! Configuration file holding the OMDb credentials between consecutive launches
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use confy::ConfyError;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_NAME: &str = "omdb_search";
const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com";

pub const API_KEY_VAR: &str = "OMDB_API_KEY";
pub const BASE_URL_VAR: &str = "OMDB_BASE_URL";

#[derive(Debug, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// Key sent as the `apikey` parameter
    pub api_key: Option<String>,
    pub base_url: String,

    /// file the config was loaded from, `None` for the default location
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            path: None,
        }
    }
}

impl OmdbConfig {
    /// load the config from the default disk location
    pub fn load() -> Result<OmdbConfig, ConfyError> {
        confy::load::<OmdbConfig>(DEFAULT_CONFIG_NAME)
    }

    /// load the config from the given file, creating it when it does not exist yet
    pub fn load_path(path: impl AsRef<Path>) -> Result<OmdbConfig, ConfyError> {
        let mut config = confy::load_path::<OmdbConfig>(path.as_ref())?;
        config.path = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// update and persist the api key
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> Result<(), ConfyError> {
        self.api_key = Some(api_key.into());
        self.update()
    }

    /// returns the api key to use, the explicit `flag` value first, then the `OMDB_API_KEY`
    /// environment variable, then the stored one
    pub fn resolve_api_key(&self, flag: Option<String>) -> anyhow::Result<String> {
        pick(flag, std::env::var(API_KEY_VAR).ok(), self.api_key.clone()).ok_or_else(|| {
            anyhow!("missing OMDb api key, pass --api-key, set {API_KEY_VAR} or run `set-key`")
        })
    }

    /// returns the base url, `OMDB_BASE_URL` taking precedence over the stored one
    pub fn resolve_base_url(&self) -> String {
        pick(None, std::env::var(BASE_URL_VAR).ok(), Some(self.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// persist the configuration to disk
    fn update(&self) -> Result<(), ConfyError> {
        match &self.path {
            Some(path) => confy::store_path(path, self),
            None => confy::store(DEFAULT_CONFIG_NAME, self),
        }
    }
}

/// first non blank value
fn pick(flag: Option<String>, env: Option<String>, stored: Option<String>) -> Option<String> {
    [flag, env, stored]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{pick, OmdbConfig, DEFAULT_BASE_URL};

    #[test]
    fn default_config_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let config = OmdbConfig::load_path(dir.path().join("omdb.toml")).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn api_key_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("omdb.toml");

        let mut config = OmdbConfig::load_path(&path).unwrap();
        config.set_api_key("abc123").unwrap();

        let config = OmdbConfig::load_path(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn explicit_flag_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = OmdbConfig::load_path(dir.path().join("omdb.toml")).unwrap();
        config.set_api_key("stored").unwrap();
        assert_eq!(
            config.resolve_api_key(Some("flag".to_string())).unwrap(),
            "flag"
        );
    }

    #[test]
    fn pick_order() {
        let some = |v: &str| Some(v.to_string());
        assert_eq!(pick(some("a"), some("b"), some("c")), some("a"));
        assert_eq!(pick(None, some("b"), some("c")), some("b"));
        assert_eq!(pick(some(" "), None, some("c")), some("c"));
        assert_eq!(pick(None, some(""), None), None);
    }
}
