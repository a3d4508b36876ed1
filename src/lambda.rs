#[cfg(feature = "lambda")]
use cart_discount_extension::adapters::lambda::{handle_proxy_request, ProxyRequest, ProxyResponse};
#[cfg(feature = "lambda")]
use cart_discount_extension::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use cart_discount_extension::{LambdaConfig, RequestHandler};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &RequestHandler,
    event: LambdaEvent<ProxyRequest>,
) -> Result<ProxyResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Handling extension call");

    let response = handle_proxy_request(handler, &event.payload)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let handler = Arc::new(RequestHandler::from_config(&config));
    tracing::info!("Cart discount extension function ready");

    run(service_fn(move |event: LambdaEvent<ProxyRequest>| {
        let handler = Arc::clone(&handler);
        async move { function_handler(&handler, event).await }
    }))
    .await
}
