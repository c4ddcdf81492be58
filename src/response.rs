//! The BudPay response envelope and request parameter helpers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BudpayError, Result};

/// Request body parameters, keyed by API field name.
///
/// Operations take a plain JSON mapping rather than one struct per
/// endpoint; fields the caller leaves out are simply not sent.
pub type Params = Map<String, Value>;

/// Standard BudPay JSON envelope: `{ status, message, data }`.
///
/// `data` is kept as dynamic JSON; its shape differs per endpoint and
/// callers index it by the keys the API documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the gateway accepted the request.
    #[serde(default)]
    pub status: bool,
    /// Human-readable outcome, also used for verification matching.
    #[serde(default)]
    pub message: String,
    /// Endpoint-specific payload, when the gateway returned one.
    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiResponse {
    /// Payload section of the envelope, if present.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Look up a field inside `data` by key.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(key))
    }

    /// Checkout page URL from an initialize response.
    pub fn authorization_url(&self) -> Result<&str> {
        self.str_field("authorization_url")
    }

    /// Access code from an initialize response.
    pub fn access_code(&self) -> Result<&str> {
        self.str_field("access_code")
    }

    fn str_field(&self, key: &'static str) -> Result<&str> {
        self.field(key)
            .and_then(Value::as_str)
            .ok_or(BudpayError::MissingField(key))
    }
}

/// Drop fields the caller left empty so only provided values reach the
/// wire. Zero and `false` are real values and pass through.
pub(crate) fn strip_empty(params: Params) -> Params {
    params
        .into_iter()
        .filter(|(_, value)| !is_empty(value))
        .collect()
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
