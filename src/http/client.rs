use anyhow::Result;
use reqwest::{Client, redirect::Policy};
use std::time::Duration;

use crate::constants::{DEFAULT_REDIRECT_LIMIT, USER_AGENT};
use crate::types::Cli;

/// Build HTTP client from CLI configuration
pub fn build_http_client(cli: &Cli) -> Result<Client> {
    let mut client_builder = Client::builder()
        .user_agent(USER_AGENT)
        .redirect(Policy::limited(DEFAULT_REDIRECT_LIMIT));

    // 0 disables the client timeout
    if cli.timeout > 0 {
        client_builder = client_builder.timeout(Duration::from_secs(cli.timeout));
    }

    Ok(client_builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_http_client() {
        let cli = Cli::parse_from(["check_mj2lists", "-f", "x.ini", "--timeout", "5"]);
        assert!(build_http_client(&cli).is_ok());
    }
}
