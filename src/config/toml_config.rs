use super::{ServiceSettings, DEFAULT_HOST, DEFAULT_PORT};
use crate::domain::model::{DiscountCodes, DEFAULT_PRIMARY_CODE, DEFAULT_SECONDARY_CODE};
use crate::utils::error::{ExtensionError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub discounts: DiscountConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountConfig {
    pub primary_code: String,
    pub secondary_code: String,
    pub random_seed: Option<u64>,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            primary_code: DEFAULT_PRIMARY_CODE.to_string(),
            secondary_code: DEFAULT_SECONDARY_CODE.to_string(),
            random_seed: None,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExtensionError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExtensionError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn into_settings(self) -> ServiceSettings {
        ServiceSettings {
            host: self.server.host,
            port: self.server.port,
            codes: DiscountCodes {
                primary: self.discounts.primary_code,
                secondary: self.discounts.secondary_code,
            },
            random_seed: self.discounts.random_seed,
        }
    }
}
