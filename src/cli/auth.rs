//! Console OAuth bootstrap: walk through the consent flow by hand and
//! print the resulting tokens. Useful when the redirect callback isn't
//! reachable from the provider (local development).

use std::io::{self, Write};

use anyhow::{Result, anyhow};

use crate::core::AppConfig;
use crate::google::oauth;

pub async fn run(sender: &str) -> Result<()> {
    let config = AppConfig::default();

    let auth_url = oauth::consent_url(&config, sender);
    println!(
        "\nPlease open the following URL in your browser and authorize access:\n\n{}\n",
        auth_url
    );
    print!("Paste the authorization code shown by the provider here: ");
    io::stdout().flush()?;
    let mut code = String::new();
    io::stdin().read_line(&mut code)?;
    let code = code.trim();

    let http = reqwest::Client::new();
    let token = oauth::exchange_code_for_token(&http, &config, code).await?;
    let refresh_token = token
        .refresh_token
        .clone()
        .ok_or(anyhow!("No refresh token in response"))?;

    println!("Access token: {}", token.access_token);
    println!("Refresh token: {}", refresh_token);

    Ok(())
}
