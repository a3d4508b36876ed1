use crate::core::handler::{ExtensionResponse, RequestHandler};
use crate::domain::model::ActionsBody;
use crate::utils::error::Result;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn router(handler: Arc<RequestHandler>) -> Router {
    Router::new()
        .route("/", post(apply_cart_discount))
        .route("/apply-cart-discount", post(apply_cart_discount))
        .route("/health", get(health))
        .with_state(handler)
        // Cart payloads are sized by the platform; an axum 413 would bypass InvalidInput.
        .layer(DefaultBodyLimit::disable())
}

// Raw bytes so that a wrong content type or broken JSON still ends in the
// InvalidInput response instead of an axum rejection.
async fn apply_cart_discount(
    State(handler): State<Arc<RequestHandler>>,
    body: Bytes,
) -> ExtensionResponse {
    handler.handle_bytes(&body)
}

async fn health() -> &'static str {
    "ok"
}

impl IntoResponse for ExtensionResponse {
    fn into_response(self) -> Response {
        match self {
            ExtensionResponse::NoAction => StatusCode::OK.into_response(),
            ExtensionResponse::Actions(actions) => {
                (StatusCode::OK, Json(ActionsBody { actions: &actions })).into_response()
            }
            ExtensionResponse::InvalidInput(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
        }
    }
}

/// Serves the extension on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, handler: Arc<RequestHandler>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("🛒 Cart discount extension listening on http://{}", addr);
    }

    axum::serve(listener, router(handler))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
