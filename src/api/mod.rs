//! # API Module
//!
//! HTTP handlers for the service's two listeners.
//!
//! ## Endpoints
//!
//! ### JSON API
//!
//! - [`health`] - `GET /`, plain-text liveness string
//! - [`files`] - `GET /api`, authorizes lazily and lists the configured
//!   folder's image and video files
//!
//! ### OAuth
//!
//! - [`callback`] - `GET /oauth2callback` on the temporary loopback server.
//!   Completes the PKCE flow by exchanging the authorization code.
//!
//! ## Response shape
//!
//! `GET /api` answers `{ "success": true, "data": [...] }`. Any failure,
//! whether authorization or the Drive call, becomes a 500 with
//! `{ "success": false, "message": ..., "error": ... }`. The `error` field
//! carries the underlying error text verbatim, which is fine for a local
//! single-operator tool and nothing more.

mod callback;
mod files;
mod health;

pub use callback::callback;
pub use files::files;
pub use health::{LIVENESS, health};
