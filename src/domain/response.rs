use std::collections::BTreeMap;

use crate::domain::value::CallId;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Successful result of a call-initiation request.
pub struct CallResponse {
    /// Identifier the service assigned to the initiated call.
    pub call_id: CallId,
}

#[derive(Debug, Clone, PartialEq)]
/// Information about a previously initiated call.
///
/// The remote schema for this endpoint is owned by the service and carries
/// more fields than this crate models; everything beyond `call_id` and
/// `state` is preserved verbatim in `extra`.
pub struct CallInfoResponse {
    pub call_id: CallId,
    /// Current state of the call as reported by the service, when present.
    pub state: Option<String>,
    /// Remaining response fields, untouched.
    pub extra: BTreeMap<String, serde_json::Value>,
}
