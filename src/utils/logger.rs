use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const CLI_DIRECTIVES: &str = "cart_discount_extension=info";
pub const CLI_VERBOSE_DIRECTIVES: &str = "cart_discount_extension=debug,info";
// The runtime logs every invocation at info; only its problems are interesting.
pub const LAMBDA_DIRECTIVES: &str = "cart_discount_extension=info,lambda_runtime=warn";

/// `RUST_LOG` wins when set and parseable, otherwise `default_directives`.
pub fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Human-readable output for the long-running HTTP service. The decision line
/// keeps its `cart_id` / `action` fields next to the message.
pub fn init_cli_logger(verbose: bool) {
    let directives = if verbose {
        CLI_VERBOSE_DIRECTIVES
    } else {
        CLI_DIRECTIVES
    };

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .compact(),
        )
        .init();
}

/// One JSON object per line for CloudWatch. Event fields are flattened so a
/// decision arrives as `{"message": "...", "cart_id": "...", "action": "..."}`.
/// The function runtime timestamps lines itself.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(LAMBDA_DIRECTIVES))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_target(false)
                .without_time(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for directives in [CLI_DIRECTIVES, CLI_VERBOSE_DIRECTIVES, LAMBDA_DIRECTIVES] {
            assert!(
                EnvFilter::try_new(directives).is_ok(),
                "directives: {}",
                directives
            );
        }
    }
}
