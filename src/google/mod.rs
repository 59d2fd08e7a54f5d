//! # Google Integration Module
//!
//! Thin wrappers over the two Google services the server talks to.
//!
//! ```text
//! HTTP surface / CLI
//!          ↓
//! management (credential cache, authorizer)
//!          ↓
//! google
//!     ├── auth  (consent flow, code exchange, refresh grant)
//!     └── files (Drive folder listing)
//!          ↓
//! reqwest
//! ```
//!
//! ## Authentication
//!
//! [`auth`] implements the OAuth 2.0 authorization-code flow with PKCE for
//! installed applications. A loopback callback server receives the code,
//! which is exchanged together with the client secret and code verifier.
//! The flow is reached through the [`auth::ConsentFlow`] trait so callers can
//! substitute it.
//!
//! ## Listing
//!
//! [`files`] issues a single `files.list` call against one folder, limited to
//! image and video MIME types. Only the first page is read.

pub mod auth;
pub mod files;
