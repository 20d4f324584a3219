use serde_json::{Map, Value};

use crate::domain::{CallViaLastDigits, DigitsMode, RawPhoneNumber};

/// Build the API method (path segments) for a last-digits call. The pool id is
/// part of the path, not the body.
pub fn call_via_last_digits_method_path(request: &CallViaLastDigits) -> String {
    let pool_id = request.pool_id().as_str();
    match request.mode() {
        DigitsMode::Four => format!("pool/{pool_id}/call"),
        DigitsMode::Six => format!("pool/{pool_id}/call/six-digits"),
    }
}

pub fn encode_call_via_last_digits_json(request: &CallViaLastDigits) -> Value {
    let mut body = Map::new();
    body.insert(
        RawPhoneNumber::FIELD.to_owned(),
        Value::String(request.phone_number().raw().to_owned()),
    );
    Value::Object(body)
}
