use anyhow::{Result, anyhow};
use log::debug;

use crate::auth::{Authenticate, LoginResponse};

/// Logs in through the given authenticator and prints the returned payload.
///
/// The classified failure message becomes the process error; the payload is
/// printed as token + username when it has the backend's login shape, raw
/// JSON otherwise.
pub async fn login(auth: &impl Authenticate, username: &str, password: &str) -> Result<()> {
    let payload = auth
        .login_value(username, password)
        .await
        .map_err(|e| anyhow!("{}", e))?;

    debug!("login succeeded for {}", username);

    match serde_json::from_value::<LoginResponse>(payload.clone()) {
        Ok(login) => {
            println!("Logged in as {}", login.username);
            println!("{}", login.token);
        }
        Err(_) => println!("{}", payload),
    }

    Ok(())
}
