//! Typed Rust client for the Rikkicom Call2FA HTTP API.
//!
//! Call2FA places an automated phone call as a second authentication factor.
//! The design is layered: a domain layer of strong types, a transport layer
//! for wire-format quirks, and a small client layer orchestrating requests
//! over HTTPS with HTTP Basic Auth.
//!
//! ```rust,no_run
//! use call2fa::{Call, Call2faClient, CallbackUrl, Credentials, RawPhoneNumber};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), call2fa::Call2faError> {
//!     let client = Call2faClient::new(Credentials::new("login", "password")?);
//!     let phone = RawPhoneNumber::new("+380631010121")?;
//!     let callback = CallbackUrl::new("https://example.com/cb")?;
//!     let response = client.call(Call::new(phone, Some(callback))).await?;
//!     println!("call_id: {}", response.call_id.as_str());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Call2faClient, Call2faClientBuilder, Call2faError, Credentials};
pub use domain::{
    Call, CallId, CallInfo, CallInfoResponse, CallResponse, CallViaLastDigits, CallWithCode,
    CallbackUrl, DigitsMode, Language, Login, Password, PhoneNumber, PoolId, RawPhoneNumber,
    ValidationError, VerificationCode,
};
