//! Google Drive media listing service.
//!
//! This library backs a small HTTP server that relists image and video files
//! from a single Google Drive folder. The only stateful piece is the OAuth
//! credential cache: a token file is loaded at startup, and when it is
//! missing the interactive consent flow runs once and the result is saved.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the JSON API and the OAuth callback
//! - `cli` - Command-line entry points
//! - `config` - Configuration from environment variables and `.env` files
//! - `error` - The crate error type
//! - `google` - Google OAuth and Drive API calls
//! - `management` - Credential cache, authorizer and authorized client handle
//! - `server` - Router construction and listeners
//! - `types` - Data structures shared across modules
//! - `utils` - PKCE helpers, query builders and table rows

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod google;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

pub use error::Error;

/// Result alias used throughout the crate.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the CLI layer uses this. Library code returns [`Error`] instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
