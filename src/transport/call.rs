use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{Call, CallId, CallResponse, CallbackUrl, RawPhoneNumber};
use crate::transport::TransportError;

/// API method (path segment) for plain call initiation.
pub const CALL_METHOD: &str = "call";

#[derive(Debug, Clone, Deserialize)]
struct CallJsonResponse {
    #[serde(default)]
    call_id: Option<String>,
}

pub fn encode_call_json(request: &Call) -> Value {
    let mut body = Map::new();
    body.insert(
        RawPhoneNumber::FIELD.to_owned(),
        Value::String(request.phone_number().raw().to_owned()),
    );
    // The API expects the field even when no callback is wanted.
    let callback = request
        .callback_url()
        .map(CallbackUrl::as_str)
        .unwrap_or_default();
    body.insert(
        CallbackUrl::FIELD.to_owned(),
        Value::String(callback.to_owned()),
    );
    Value::Object(body)
}

/// Decode the shared call-initiation response shape: a JSON object carrying a
/// non-empty `call_id` string. All three call modes answer with it.
pub fn decode_call_json_response(json: &str) -> Result<CallResponse, TransportError> {
    let parsed: CallJsonResponse = serde_json::from_str(json)?;
    let call_id = parsed
        .call_id
        .and_then(|id| CallId::new(id).ok())
        .ok_or(TransportError::MissingField {
            field: CallId::FIELD,
        })?;
    Ok(CallResponse { call_id })
}
