//! Configuration management for the Drive media listing service.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. Every value has a default, so a bare checkout only needs a
//! `credentials.json` next to the binary.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults

use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use crate::{Error, Res, types::Endpoints};

/// Read-only Drive scope requested during interactive authorization.
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive.metadata.readonly";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DRIVE_FOLDER_ID: &str = "root";
pub const DEFAULT_CALLBACK_ADDRESS: &str = "127.0.0.1:3456";
pub const DEFAULT_CONSENT_TIMEOUT_SECS: u64 = 300;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_DRIVE_API_URL: &str = "https://www.googleapis.com/drive/v3";

/// Loads environment variables from `.env` files.
///
/// The platform local data directory is tried first (for example
/// `~/.local/share/driveshelf/.env` on Linux), then `./.env`. Missing files
/// are not an error: already exported variables and defaults still apply.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("driveshelf/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    dotenv::from_path(&path).ok();
    dotenv::dotenv().ok();
    Ok(())
}

/// Parses a port value, falling back to [`DEFAULT_PORT`] when absent or invalid.
pub fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Port of the JSON API, from `PORT`.
pub fn port() -> u16 {
    parse_port(env::var("PORT").ok())
}

/// Address the JSON API binds to.
pub fn server_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], port()))
}

/// Path of the cached credential record, from `TOKEN_PATH`.
pub fn token_path() -> PathBuf {
    env::var("TOKEN_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("token.json"))
}

/// Path of the OAuth client secret document, from `CREDENTIALS_PATH`.
pub fn credentials_path() -> PathBuf {
    env::var("CREDENTIALS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("credentials.json"))
}

/// Drive folder whose media gets listed, from `DRIVE_FOLDER_ID`.
pub fn drive_folder_id() -> String {
    env::var("DRIVE_FOLDER_ID").unwrap_or_else(|_| DEFAULT_DRIVE_FOLDER_ID.to_string())
}

/// Loopback address of the temporary OAuth callback server.
///
/// # Errors
///
/// Returns [`Error::Url`] if `OAUTH_CALLBACK_ADDRESS` is not a socket address.
pub fn callback_addr() -> Res<SocketAddr> {
    let raw = env::var("OAUTH_CALLBACK_ADDRESS")
        .unwrap_or_else(|_| DEFAULT_CALLBACK_ADDRESS.to_string());
    raw.parse::<SocketAddr>()
        .map_err(|e| Error::Url(format!("{raw}: {e}")))
}

/// How long the consent flow waits for the browser round trip.
pub fn consent_timeout() -> Duration {
    let secs = env::var("OAUTH_CONSENT_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_CONSENT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Whether the consent flow launches a browser, from `OAUTH_OPEN_BROWSER`.
///
/// Anything but `false`/`0` keeps the default of opening one.
pub fn open_browser() -> bool {
    !matches!(
        env::var("OAUTH_OPEN_BROWSER").as_deref(),
        Ok("false") | Ok("0")
    )
}

/// Google OAuth and Drive endpoints.
pub fn endpoints() -> Endpoints {
    Endpoints {
        auth_url: env::var("GOOGLE_AUTH_URL").unwrap_or_else(|_| GOOGLE_AUTH_URL.to_string()),
        token_url: env::var("GOOGLE_TOKEN_URL").unwrap_or_else(|_| GOOGLE_TOKEN_URL.to_string()),
        api_url: env::var("GOOGLE_DRIVE_API_URL")
            .unwrap_or_else(|_| GOOGLE_DRIVE_API_URL.to_string()),
    }
}
