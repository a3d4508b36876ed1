use crate::core::handler::{ExtensionResponse, RequestHandler};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// API Gateway / function URL proxy event, reduced to what the extension reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ProxyResponse {
    pub fn from_extension(response: &ExtensionResponse) -> Result<Self> {
        let mut headers = HashMap::new();
        if !matches!(response, ExtensionResponse::NoAction) {
            headers.insert("content-type".to_string(), "application/json".to_string());
        }

        Ok(Self {
            status_code: response.status_code(),
            headers,
            body: response.body_string()?,
        })
    }
}

pub fn handle_proxy_request(handler: &RequestHandler, request: &ProxyRequest) -> Result<ProxyResponse> {
    // Base64 payloads are not decoded; an encoded body never parses as an
    // envelope and falls through to InvalidInput.
    if request.is_base64_encoded {
        tracing::warn!("Received base64-encoded body, treating as invalid input");
    }

    let body = request.body.as_deref().unwrap_or_default();
    let response = handler.handle_bytes(body.as_bytes());
    ProxyResponse::from_extension(&response)
}
