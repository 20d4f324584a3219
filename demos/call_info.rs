use std::io;

use call2fa::{Call2faClient, CallId, CallInfo, Credentials};

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
    let call_id = std::env::var("CALL2FA_CALL_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CALL2FA_CALL_ID environment variable is required",
        )
    })?;

    let client = Call2faClient::new(Credentials::new(login, password)?);
    let request = CallInfo::new(CallId::new(call_id)?);

    let response = client.call_info(request).await?;
    println!(
        "call_id: {}, state: {:?}, extra: {:?}",
        response.call_id.as_str(),
        response.state,
        response.extra
    );

    Ok(())
}
