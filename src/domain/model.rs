use crate::utils::error::{ExtensionError, Result};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

pub const DEFAULT_PRIMARY_CODE: &str = "5%-OFF-ALL-LINE-ITEMS";
pub const DEFAULT_SECONDARY_CODE: &str = "$5-OFF-YOUR-CART";

/// The part of an extension "Input" object this service cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEnvelope {
    /// `Create` or `Update`, when the platform sends it.
    pub action: Option<String>,
    pub resource_type_id: String,
    pub resource_id: Option<String>,
    pub resource_object: Value,
}

impl RequestEnvelope {
    pub const CART_TYPE_ID: &'static str = "cart";

    /// Extracts `resource.typeId` and `resource.obj` from an arbitrary JSON
    /// value. Any missing level, wrong type, or `null` cart yields
    /// `InvalidInput`; this never panics on unexpected shapes.
    pub fn from_body(body: &Value) -> Result<Self> {
        let resource = body.get("resource");
        let type_id = resource
            .and_then(|r| r.get("typeId"))
            .and_then(Value::as_str);
        let cart = resource
            .and_then(|r| r.get("obj"))
            .filter(|obj| !obj.is_null());

        match (type_id, cart) {
            (Some(type_id), Some(cart)) if type_id == Self::CART_TYPE_ID => Ok(Self {
                action: body.get("action").and_then(Value::as_str).map(str::to_string),
                resource_type_id: type_id.to_string(),
                resource_id: resource
                    .and_then(|r| r.get("id"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                resource_object: cart.clone(),
            }),
            _ => Err(ExtensionError::cart_not_found()),
        }
    }

    /// Same as [`RequestEnvelope::from_body`] but starting from raw bytes.
    /// Bodies that are empty or not JSON are reported as a missing cart.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let body: Value =
            serde_json::from_slice(bytes).map_err(|_| ExtensionError::cart_not_found())?;
        Self::from_body(&body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    AddDiscountCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountAction {
    pub action: ActionKind,
    pub code: String,
}

impl DiscountAction {
    pub fn add_discount_code(code: impl Into<String>) -> Self {
        Self {
            action: ActionKind::AddDiscountCode,
            code: code.into(),
        }
    }
}

/// Outcome of one decision. `Actions` always holds one or two entries and
/// the platform applies them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountResult {
    None,
    Actions(Vec<DiscountAction>),
}

impl DiscountResult {
    pub fn is_none(&self) -> bool {
        matches!(self, DiscountResult::None)
    }

    pub fn actions(&self) -> &[DiscountAction] {
        match self {
            DiscountResult::None => &[],
            DiscountResult::Actions(actions) => actions,
        }
    }
}

/// Wire shape of a successful response: `{"actions":[...]}`.
#[derive(Debug, Serialize)]
pub struct ActionsBody<'a> {
    pub actions: &'a [DiscountAction],
}

// `None` serializes as `null`, `Actions` as `{"actions":[...]}`.
impl Serialize for DiscountResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DiscountResult::None => serializer.serialize_none(),
            DiscountResult::Actions(actions) => ActionsBody { actions }.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountCodes {
    pub primary: String,
    pub secondary: String,
}

impl Default for DiscountCodes {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_CODE.to_string(),
            secondary: DEFAULT_SECONDARY_CODE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorsBody {
    pub errors: Vec<ErrorEntry>,
}

impl From<&ExtensionError> for ErrorsBody {
    fn from(err: &ExtensionError) -> Self {
        Self {
            errors: vec![ErrorEntry {
                code: err.code().to_string(),
                message: err.public_message(),
            }],
        }
    }
}
