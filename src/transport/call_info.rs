use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{CallId, CallInfo, CallInfoResponse};
use crate::transport::TransportError;

#[derive(Debug, Clone, Deserialize)]
struct CallInfoJsonResponse {
    #[serde(default)]
    call_id: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

/// Build the API method (path segments) for fetching call information.
pub fn call_info_method_path(request: &CallInfo) -> String {
    format!("call/{}", request.call_id().as_str())
}

pub fn decode_call_info_json_response(json: &str) -> Result<CallInfoResponse, TransportError> {
    let parsed: CallInfoJsonResponse = serde_json::from_str(json)?;
    let call_id = parsed
        .call_id
        .and_then(|id| CallId::new(id).ok())
        .ok_or(TransportError::MissingField {
            field: CallId::FIELD,
        })?;
    Ok(CallInfoResponse {
        call_id,
        state: parsed.state,
        extra: parsed.extra,
    })
}
