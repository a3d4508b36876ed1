pub mod lambda;
pub mod toml_config;

use crate::domain::model::DiscountCodes;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_discount_code, validate_distinct, validate_non_empty_string, validate_range,
    Validate,
};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Fully resolved settings for the HTTP service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    pub host: String,
    pub port: u16,
    pub codes: DiscountCodes,
    pub random_seed: Option<u64>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            codes: DiscountCodes::default(),
            random_seed: None,
        }
    }
}

impl ServiceSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigProvider for ServiceSettings {
    fn discount_codes(&self) -> DiscountCodes {
        self.codes.clone()
    }

    fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }
}

impl Validate for ServiceSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_range("server.port", self.port, 1, u16::MAX)?;
        validate_discount_codes(&self.codes)?;

        tracing::debug!("✅ Service configuration validation passed");
        Ok(())
    }
}

pub fn validate_discount_codes(codes: &DiscountCodes) -> Result<()> {
    validate_discount_code("discounts.primary_code", &codes.primary)?;
    validate_discount_code("discounts.secondary_code", &codes.secondary)?;
    validate_distinct("discounts.secondary_code", &codes.primary, &codes.secondary)
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use super::ServiceSettings;
    use crate::utils::error::Result;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "cart-discount-extension")]
    #[command(about = "HTTP extension that randomly applies discount codes to carts")]
    pub struct CliConfig {
        /// Address to bind (overrides the config file)
        #[arg(long)]
        pub host: Option<String>,

        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        pub port: Option<u16>,

        /// Path to TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Seed the random source for reproducible decisions
        #[arg(long)]
        pub seed: Option<u64>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Merges the optional config file with command-line overrides.
        pub fn resolve(&self) -> Result<ServiceSettings> {
            let mut settings = match &self.config {
                Some(path) => {
                    tracing::info!("📁 Loading configuration from: {}", path);
                    TomlConfig::from_file(path)?.into_settings()
                }
                None => ServiceSettings::default(),
            };

            if let Some(host) = &self.host {
                settings.host = host.clone();
            }
            if let Some(port) = self.port {
                settings.port = port;
            }
            if let Some(seed) = self.seed {
                settings.random_seed = Some(seed);
            }

            Ok(settings)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_cli_defaults() {
            let cli = CliConfig::parse_from(["cart-discount-extension"]);
            let settings = cli.resolve().unwrap();
            assert_eq!(settings, ServiceSettings::default());
            assert_eq!(settings.bind_address(), "0.0.0.0:8080");
        }

        #[test]
        fn test_cli_overrides() {
            let cli = CliConfig::parse_from([
                "cart-discount-extension",
                "--host",
                "127.0.0.1",
                "--port",
                "9000",
                "--seed",
                "11",
            ]);
            let settings = cli.resolve().unwrap();
            assert_eq!(settings.bind_address(), "127.0.0.1:9000");
            assert_eq!(settings.random_seed, Some(11));
        }
    }
}
