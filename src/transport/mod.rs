//! Transport layer: HTTP paths and wire-format details (serialization/deserialization).

mod call;
mod call_info;
mod call_via_last_digits;
mod call_with_code;

pub use call::{CALL_METHOD, decode_call_json_response, encode_call_json};
pub use call_info::{call_info_method_path, decode_call_info_json_response};
pub use call_via_last_digits::{call_via_last_digits_method_path, encode_call_via_last_digits_json};
pub use call_with_code::{CODE_CALL_METHOD, encode_call_with_code_json};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing a non-empty `{field}` field")]
    MissingField { field: &'static str },
}
