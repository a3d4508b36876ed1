pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::lambda::LambdaConfig;
pub use config::ServiceSettings;
pub use core::{decider::DiscountDecider, handler::ExtensionResponse, handler::RequestHandler};
pub use utils::error::{ExtensionError, Result};
