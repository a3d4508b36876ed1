use cart_discount_extension::adapters::http;
use cart_discount_extension::utils::{logger, validation::Validate};
use cart_discount_extension::{CliConfig, RequestHandler};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting cart-discount-extension");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "🏷️ Discount codes: primary={}, secondary={}",
        settings.codes.primary,
        settings.codes.secondary
    );

    let handler = Arc::new(RequestHandler::from_config(&settings));
    let listener = TcpListener::bind(settings.bind_address()).await?;

    http::serve(listener, handler, http::shutdown_signal()).await?;
    Ok(())
}
