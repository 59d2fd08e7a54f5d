mod authorizer;
mod client;
mod credentials;

pub use authorizer::Authorizer;
pub use client::AuthorizedClient;
pub use credentials::CredentialCache;
pub use credentials::load_client_secret;
