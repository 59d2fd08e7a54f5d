use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    Error, Res,
    google::auth::refresh_access_token,
    types::{Consent, CredentialRecord, Endpoints, Token},
};

/// An authorized handle for calling the Drive API.
///
/// Holds the client identity and the refresh token. The access token is
/// fetched lazily and reused until it expires.
pub struct AuthorizedClient {
    client_id: String,
    client_secret: String,
    refresh_token: Option<String>,
    access: Mutex<Option<Token>>,
    endpoints: Endpoints,
    http: Client,
}

impl AuthorizedClient {
    /// Builds a handle from a cached record without any remote call.
    pub fn from_record(record: CredentialRecord, endpoints: Endpoints, http: Client) -> Self {
        AuthorizedClient {
            client_id: record.client_id,
            client_secret: record.client_secret,
            refresh_token: Some(record.refresh_token),
            access: Mutex::new(None),
            endpoints,
            http,
        }
    }

    /// Builds a handle from a completed consent, seeded with its access token.
    pub fn from_consent(consent: Consent, endpoints: Endpoints, http: Client) -> Self {
        AuthorizedClient {
            client_id: consent.client.client_id,
            client_secret: consent.client.client_secret,
            refresh_token: consent.token.refresh_token.clone(),
            access: Mutex::new(Some(consent.token)),
            endpoints,
            http,
        }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Returns a usable access token, refreshing it when missing or expired.
    pub async fn access_token(&self) -> Res<String> {
        let mut access = self.access.lock().await;
        if let Some(token) = access.as_ref() {
            if !token.is_expired() {
                return Ok(token.access_token.clone());
            }
        }

        let Some(refresh_token) = self.refresh_token.as_deref() else {
            return Err(Error::MissingRefreshToken);
        };

        let token = refresh_access_token(
            &self.http,
            &self.endpoints.token_url,
            &self.client_id,
            &self.client_secret,
            refresh_token,
        )
        .await?;

        let access_token = token.access_token.clone();
        *access = Some(token);
        Ok(access_token)
    }
}
