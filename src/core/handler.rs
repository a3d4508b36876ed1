use crate::adapters::random::{SeededRandom, ThreadRandom};
use crate::core::decider::DiscountDecider;
use crate::domain::model::{
    ActionsBody, DiscountAction, DiscountResult, ErrorsBody, RequestEnvelope,
};
use crate::domain::ports::{ConfigProvider, RandomSource};
use crate::utils::error::{ExtensionError, Result};
use serde_json::Value;
use std::sync::Arc;

/// What the extension answers, independent of the host it runs in.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionResponse {
    /// 200 with an empty body.
    NoAction,
    /// 200 with `{"actions": [...]}`; never empty.
    Actions(Vec<DiscountAction>),
    /// 400 with `{"errors": [...]}`.
    InvalidInput(ErrorsBody),
}

impl ExtensionResponse {
    pub fn status_code(&self) -> u16 {
        match self {
            ExtensionResponse::NoAction | ExtensionResponse::Actions(_) => 200,
            ExtensionResponse::InvalidInput(_) => 400,
        }
    }

    pub fn body(&self) -> Result<Option<Value>> {
        let body = match self {
            ExtensionResponse::NoAction => None,
            ExtensionResponse::Actions(actions) => {
                Some(serde_json::to_value(ActionsBody { actions })?)
            }
            ExtensionResponse::InvalidInput(errors) => Some(serde_json::to_value(errors)?),
        };
        Ok(body)
    }

    /// Serialized body; empty for [`ExtensionResponse::NoAction`].
    pub fn body_string(&self) -> Result<String> {
        let body = match self {
            ExtensionResponse::NoAction => String::new(),
            ExtensionResponse::Actions(actions) => {
                serde_json::to_string(&ActionsBody { actions })?
            }
            ExtensionResponse::InvalidInput(errors) => serde_json::to_string(errors)?,
        };
        Ok(body)
    }

    pub fn actions(&self) -> &[DiscountAction] {
        match self {
            ExtensionResponse::Actions(actions) => actions,
            _ => &[],
        }
    }
}

impl From<DiscountResult> for ExtensionResponse {
    fn from(result: DiscountResult) -> Self {
        match result {
            DiscountResult::Actions(actions) if !actions.is_empty() => {
                ExtensionResponse::Actions(actions)
            }
            _ => ExtensionResponse::NoAction,
        }
    }
}

impl From<&ExtensionError> for ExtensionResponse {
    fn from(err: &ExtensionError) -> Self {
        ExtensionResponse::InvalidInput(ErrorsBody::from(err))
    }
}

pub struct RequestHandler {
    decider: DiscountDecider,
}

impl RequestHandler {
    pub fn new(decider: DiscountDecider) -> Self {
        Self { decider }
    }

    /// Builds a handler from any configuration source: seeded generator when
    /// a seed is configured, thread-local generator otherwise.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let random: Arc<dyn RandomSource> = match config.random_seed() {
            Some(seed) => {
                tracing::info!("🎲 Using seeded random source (seed {})", seed);
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(ThreadRandom),
        };
        Self::new(DiscountDecider::with_codes(random, config.discount_codes()))
    }

    /// Entry point for raw request bodies.
    pub fn handle_bytes(&self, body: &[u8]) -> ExtensionResponse {
        self.respond(RequestEnvelope::from_slice(body))
    }

    /// Entry point for already-parsed request bodies.
    pub fn handle(&self, body: &Value) -> ExtensionResponse {
        self.respond(RequestEnvelope::from_body(body))
    }

    fn respond(&self, envelope: Result<RequestEnvelope>) -> ExtensionResponse {
        let envelope = match envelope {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(code = err.code(), "Rejected extension request: {}", err);
                return ExtensionResponse::from(&err);
            }
        };

        let result = self.decider.decide(&envelope.resource_object);

        match serde_json::to_string(&result) {
            Ok(decision) => tracing::info!(
                cart_id = envelope.resource_id.as_deref().unwrap_or("-"),
                action = envelope.action.as_deref().unwrap_or("-"),
                "{}",
                decision
            ),
            Err(e) => tracing::error!("Failed to serialize discount decision: {}", e),
        }

        ExtensionResponse::from(result)
    }
}
