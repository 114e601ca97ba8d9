use anyhow::{format_err, Error};
use serde::Deserialize;
use stack_string::StackString;
use std::{ops::Deref, path::Path, sync::Arc};

#[derive(Debug, Default, Deserialize)]
pub struct ConfigInner {
    #[serde(default)]
    pub movie_api_key: StackString,
    #[serde(default = "default_omdb_endpoint")]
    pub omdb_endpoint: StackString,
}

fn default_omdb_endpoint() -> StackString {
    "http://www.omdbapi.com/".into()
}

#[derive(Debug, Default, Clone)]
pub struct Config(Arc<ConfigInner>);

impl ConfigInner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            omdb_endpoint: default_omdb_endpoint(),
            ..Self::default()
        }
    }
}

impl Config {
    /// # Errors
    /// Returns error if deserializing the environment fails
    pub fn new() -> Result<Self, Error> {
        let config: ConfigInner = envy::from_env()?;
        Ok(Self(Arc::new(config)))
    }

    /// # Errors
    /// Returns error if `Config::new` fails
    pub fn with_config() -> Result<Self, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| format_err!("No CONFIG directory"))?;
        let env_file = config_dir.join("omdb_fetch").join("config.env");

        dotenvy::dotenv().ok();

        if Path::new("config.env").exists() {
            dotenvy::from_filename("config.env").ok();
        } else if env_file.exists() {
            dotenvy::from_path(&env_file).ok();
        }

        Self::new()
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self(Arc::new(inner))
    }
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
