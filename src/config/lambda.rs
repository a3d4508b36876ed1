use super::validate_discount_codes;
use crate::domain::model::{DiscountCodes, DEFAULT_PRIMARY_CODE, DEFAULT_SECONDARY_CODE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ExtensionError, Result};
use crate::utils::validation::Validate;
use std::env;

pub const PRIMARY_CODE_VAR: &str = "DISCOUNT_PRIMARY_CODE";
pub const SECONDARY_CODE_VAR: &str = "DISCOUNT_SECONDARY_CODE";
pub const RANDOM_SEED_VAR: &str = "DISCOUNT_RANDOM_SEED";

/// Settings for the function deployment, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaConfig {
    pub primary_code: String,
    pub secondary_code: String,
    pub random_seed: Option<u64>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`LambdaConfig::from_env`] with an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let random_seed = match lookup(RANDOM_SEED_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                Some(raw.trim().parse::<u64>().map_err(|e| {
                    ExtensionError::InvalidConfigValueError {
                        field: RANDOM_SEED_VAR.to_string(),
                        value: raw.clone(),
                        reason: format!("Not an unsigned integer: {}", e),
                    }
                })?)
            }
            _ => None,
        };

        Ok(Self {
            primary_code: lookup(PRIMARY_CODE_VAR)
                .unwrap_or_else(|| DEFAULT_PRIMARY_CODE.to_string()),
            secondary_code: lookup(SECONDARY_CODE_VAR)
                .unwrap_or_else(|| DEFAULT_SECONDARY_CODE.to_string()),
            random_seed,
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn discount_codes(&self) -> DiscountCodes {
        DiscountCodes {
            primary: self.primary_code.clone(),
            secondary: self.secondary_code.clone(),
        }
    }

    fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_discount_codes(&self.discount_codes())?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LambdaConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.discount_codes(), DiscountCodes::default());
        assert_eq!(config.random_seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_overrides() {
        let config = LambdaConfig::from_lookup(lookup(&[
            (PRIMARY_CODE_VAR, "A-CODE"),
            (SECONDARY_CODE_VAR, "B-CODE"),
            (RANDOM_SEED_VAR, " 12 "),
        ]))
        .unwrap();
        assert_eq!(config.primary_code, "A-CODE");
        assert_eq!(config.secondary_code, "B-CODE");
        assert_eq!(config.random_seed, Some(12));
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        let err = LambdaConfig::from_lookup(lookup(&[(RANDOM_SEED_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ExtensionError::InvalidConfigValueError { .. }));
    }
}
