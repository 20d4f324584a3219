//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Call, CallInfo, CallViaLastDigits, CallWithCode, DigitsMode};
pub use response::{CallInfoResponse, CallResponse};
pub use validation::ValidationError;
pub use value::{
    CallId, CallbackUrl, Language, Login, Password, PhoneNumber, PoolId, RawPhoneNumber,
    VerificationCode,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_rejects_empty() {
        assert!(matches!(
            Login::new("   "),
            Err(ValidationError::Empty {
                field: Login::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn call_request_exposes_its_parts() {
        let phone = RawPhoneNumber::new("+380631010121").unwrap();
        let callback = CallbackUrl::new("https://example.com/cb").unwrap();
        let request = Call::new(phone.clone(), Some(callback.clone()));
        assert_eq!(request.phone_number(), &phone);
        assert_eq!(request.callback_url(), Some(&callback));

        let request = Call::new(phone.clone(), None);
        assert_eq!(request.callback_url(), None);
    }

    #[test]
    fn digits_mode_defaults_to_four() {
        assert_eq!(DigitsMode::default(), DigitsMode::Four);
    }
}
