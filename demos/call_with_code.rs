use std::io;

use call2fa::{Call2faClient, CallWithCode, Credentials, Language, RawPhoneNumber, VerificationCode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let login = std::env::var("CALL2FA_LOGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CALL2FA_LOGIN environment variable is required",
        )
    })?;
    let password = std::env::var("CALL2FA_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CALL2FA_PASSWORD environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("CALL2FA_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CALL2FA_PHONE environment variable is required",
        )
    })?;
    let code = std::env::var("CALL2FA_CODE").unwrap_or_else(|_| "1234".to_owned());
    let lang = std::env::var("CALL2FA_LANG").unwrap_or_else(|_| "en".to_owned());

    let client = Call2faClient::new(Credentials::new(login, password)?);
    let request = CallWithCode::new(
        RawPhoneNumber::new(phone_raw)?,
        VerificationCode::new(code)?,
        Language::new(lang)?,
    );

    let response = client.call_with_code(request).await?;
    println!("call_id: {}", response.call_id.as_str());

    Ok(())
}
