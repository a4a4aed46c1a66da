use serde::Deserialize;

pub static BIN_NAME: &str = std::env!("CARGO_PKG_NAME");

/// Environment-provided configuration, read once at startup and passed into
/// the client at construction time.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Bearer credential for the API (`MONZO_ACCESS_TOKEN`)
    pub access_token: String,

    /// Pre-selected account id (`MONZO_ACCOUNT_ID`); skips the account
    /// listing call when set
    #[serde(default)]
    pub account_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("configuration error: {0}")]
pub struct Error(#[from] envy::Error);

/// Load the configuration from the environment, reading a `.env` file first.
///
/// A missing `MONZO_ACCESS_TOKEN` fails here, before any network call is
/// attempted.
pub fn load() -> Result<Config, Error> {
    dotenvy::dotenv().ok();
    Ok(envy::prefixed("MONZO_").from_env()?)
}
