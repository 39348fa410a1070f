use serde::Deserialize;

mod config_dir;
pub use config_dir::{find_config_file, read_config, read_config_from};

mod error;
pub use error::{ConfigError, ConfigResult};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    logging: Logging,
    tokens: Tokens,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Logging {
    debug_sensitive: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Tokens {
    nonce_length: usize,
    base64_length: usize,
    url_safe: bool,
}

impl Default for Tokens {
    fn default() -> Self {
        Self {
            nonce_length: 32,
            base64_length: 44,
            url_safe: true,
        }
    }
}

impl Config {
    #[tracing::instrument]
    pub fn load(use_local: bool) -> ConfigResult<Self> {
        let bytes = read_config(use_local)?;
        Self::from_slice(&bytes)
    }

    /// Like [`Config::load`], but a missing config file yields the defaults.
    pub fn load_or_default(use_local: bool) -> ConfigResult<Self> {
        match Self::load(use_local) {
            Err(ConfigError::ConfigNotFound) => {
                tracing::debug!("config not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> ConfigResult<Self> {
        let config: Self = toml::from_slice(bytes)?;
        Ok(config)
    }

    #[inline]
    pub fn logging(&self) -> &Logging {
        &self.logging
    }

    #[inline]
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }
}

impl Logging {
    #[inline]
    pub fn debug_sensitive(&self) -> bool {
        self.debug_sensitive
    }
}

impl Tokens {
    #[inline]
    pub fn nonce_length(&self) -> usize {
        self.nonce_length
    }

    #[inline]
    pub fn base64_length(&self) -> usize {
        self.base64_length
    }

    #[inline]
    pub fn url_safe(&self) -> bool {
        self.url_safe
    }
}
