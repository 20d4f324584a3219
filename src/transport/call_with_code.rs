use serde_json::{Map, Value};

use crate::domain::{CallWithCode, Language, RawPhoneNumber, VerificationCode};

/// API method (path segment) for code-announcing calls.
pub const CODE_CALL_METHOD: &str = "code/call";

pub fn encode_call_with_code_json(request: &CallWithCode) -> Value {
    let mut body = Map::new();
    body.insert(
        RawPhoneNumber::FIELD.to_owned(),
        Value::String(request.phone_number().raw().to_owned()),
    );
    body.insert(
        VerificationCode::FIELD.to_owned(),
        Value::String(request.code().as_str().to_owned()),
    );
    body.insert(
        Language::FIELD.to_owned(),
        Value::String(request.lang().as_str().to_owned()),
    );
    Value::Object(body)
}
