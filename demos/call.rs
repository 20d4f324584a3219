use std::io;

use call2fa::{Call, Call2faClient, CallbackUrl, Credentials, RawPhoneNumber};

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
    let callback = std::env::var("CALL2FA_CALLBACK_URL")
        .ok()
        .map(CallbackUrl::new)
        .transpose()?;

    let client = Call2faClient::new(Credentials::new(login, password)?);
    let phone = RawPhoneNumber::new(phone_raw)?;

    let response = client.call(Call::new(phone, callback)).await?;
    println!("call_id: {}", response.call_id.as_str());

    Ok(())
}
