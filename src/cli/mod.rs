//! # CLI Module
//!
//! Command-line entry points for the Drive media listing service.
//!
//! ## Commands
//!
//! - [`serve`] - Starts the JSON API. Authorization happens lazily, on the
//!   first `GET /api`.
//! - [`auth`] - Runs the authorizer once so the token file exists before the
//!   server is started.
//! - [`list`] - Authorizes and lists the folder once, printing a table.
//!   Any failure is fatal.
//!
//! ## Usage
//!
//! ```bash
//! driveshelf auth        # consent in the browser, writes token.json
//! driveshelf list        # print the folder's media
//! driveshelf             # serve on $PORT (default 8000)
//! ```
//!
//! ## Error handling
//!
//! Commands report failures through the crate's `error!` macro, which prints
//! and exits with status 1. The library layer below never exits.

mod auth;
mod list;
mod serve;

use std::sync::Arc;

use crate::{
    Res, config,
    google::auth::BrowserConsentFlow,
    management::{Authorizer, CredentialCache},
};

pub use auth::auth;
pub use list::list;
pub use serve::serve;

/// Builds an authorizer wired to the configured files and the browser flow.
fn build_authorizer() -> Res<Authorizer> {
    let endpoints = config::endpoints();
    let flow = BrowserConsentFlow::new(
        config::credentials_path(),
        endpoints.clone(),
        config::callback_addr()?,
        config::consent_timeout(),
    )
    .with_browser(config::open_browser());
    let cache = CredentialCache::new(config::token_path(), config::credentials_path());
    Ok(Authorizer::new(cache, Arc::new(flow), endpoints))
}
