use crate::domain::value::{CallId, CallbackUrl, Language, PoolId, RawPhoneNumber, VerificationCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How many trailing digits of the calling number form the verification code
/// in last-digits mode.
pub enum DigitsMode {
    #[default]
    Four,
    Six,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to initiate a plain verification call.
///
/// The callee confirms possession of the phone by answering; the service
/// reports the outcome asynchronously to the callback URL, when one is given.
pub struct Call {
    phone_number: RawPhoneNumber,
    callback_url: Option<CallbackUrl>,
}

impl Call {
    /// Build a call request. The callback URL is optional; without one the
    /// service still places the call but reports nothing back.
    pub fn new(phone_number: RawPhoneNumber, callback_url: Option<CallbackUrl>) -> Self {
        Self {
            phone_number,
            callback_url,
        }
    }

    pub fn phone_number(&self) -> &RawPhoneNumber {
        &self.phone_number
    }

    pub fn callback_url(&self) -> Option<&CallbackUrl> {
        self.callback_url.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to initiate a call that announces a verification code to the callee.
pub struct CallWithCode {
    phone_number: RawPhoneNumber,
    code: VerificationCode,
    lang: Language,
}

impl CallWithCode {
    pub fn new(phone_number: RawPhoneNumber, code: VerificationCode, lang: Language) -> Self {
        Self {
            phone_number,
            code,
            lang,
        }
    }

    pub fn phone_number(&self) -> &RawPhoneNumber {
        &self.phone_number
    }

    pub fn code(&self) -> &VerificationCode {
        &self.code
    }

    pub fn lang(&self) -> &Language {
        &self.lang
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to initiate a last-digits call: the service dials from a number in
/// the given pool and the trailing digits of that number are the code.
pub struct CallViaLastDigits {
    phone_number: RawPhoneNumber,
    pool_id: PoolId,
    mode: DigitsMode,
}

impl CallViaLastDigits {
    pub fn new(phone_number: RawPhoneNumber, pool_id: PoolId, mode: DigitsMode) -> Self {
        Self {
            phone_number,
            pool_id,
            mode,
        }
    }

    pub fn phone_number(&self) -> &RawPhoneNumber {
        &self.phone_number
    }

    pub fn pool_id(&self) -> &PoolId {
        &self.pool_id
    }

    pub fn mode(&self) -> DigitsMode {
        self.mode
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request for information about a previously initiated call.
pub struct CallInfo {
    call_id: CallId,
}

impl CallInfo {
    pub fn new(call_id: CallId) -> Self {
        Self { call_id }
    }

    pub fn call_id(&self) -> &CallId {
        &self.call_id
    }
}
