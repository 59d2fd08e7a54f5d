use std::sync::Arc;

use reqwest::Client;

use crate::{
    Res, config, info,
    google::auth::ConsentFlow,
    management::{AuthorizedClient, CredentialCache},
    success,
    types::Endpoints,
};

/// Produces authorized client handles from the credential cache, falling
/// back to the interactive consent flow on a miss.
pub struct Authorizer {
    cache: CredentialCache,
    flow: Arc<dyn ConsentFlow>,
    endpoints: Endpoints,
    http: Client,
}

impl Authorizer {
    pub fn new(cache: CredentialCache, flow: Arc<dyn ConsentFlow>, endpoints: Endpoints) -> Self {
        Authorizer {
            cache,
            flow,
            endpoints,
            http: Client::new(),
        }
    }

    /// Returns an authorized client.
    ///
    /// A parseable token file is trusted as is; nothing checks that the
    /// refresh token still works until the token endpoint is hit. On a miss
    /// the consent flow runs exactly once and, when it yields a refresh
    /// token, the token file is overwritten with a new record.
    ///
    /// # Errors
    ///
    /// Errors from the consent flow and from persisting the record are
    /// returned unchanged. Nothing is retried.
    pub async fn authorize(&self) -> Res<AuthorizedClient> {
        if let Some(record) = self.cache.load().await {
            return Ok(AuthorizedClient::from_record(
                record,
                self.endpoints.clone(),
                self.http.clone(),
            ));
        }

        info!(
            "No usable token at {}, starting interactive authorization.",
            self.cache.token_path().display()
        );
        let consent = self.flow.run(config::DRIVE_SCOPE).await?;
        let client =
            AuthorizedClient::from_consent(consent, self.endpoints.clone(), self.http.clone());

        if let Some(refresh_token) = client.refresh_token() {
            self.cache.persist(refresh_token).await?;
            success!("Saved credentials to {}", self.cache.token_path().display());
        }

        Ok(client)
    }

    pub fn cache(&self) -> &CredentialCache {
        &self.cache
    }
}
