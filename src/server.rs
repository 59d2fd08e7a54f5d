use std::{net::SocketAddr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    Res, api,
    google::auth::CALLBACK_PATH,
    management::{AuthorizedClient, Authorizer},
    success,
    types::PkceSession,
};

/// State shared by the JSON API handlers.
///
/// The first successful authorization is kept for the life of the process,
/// so the token file is read once and the access token is reused across
/// requests until it expires.
#[derive(Clone)]
pub struct AppState {
    pub authorizer: Arc<Authorizer>,
    pub folder_id: String,
    client: Arc<Mutex<Option<Arc<AuthorizedClient>>>>,
}

impl AppState {
    pub fn new(authorizer: Arc<Authorizer>, folder_id: String) -> Self {
        AppState {
            authorizer,
            folder_id,
            client: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the cached handle, authorizing on first use.
    ///
    /// The lock is held while authorizing so concurrent first requests
    /// share one consent flow. Failures are not cached.
    pub async fn authorized_client(&self) -> Res<Arc<AuthorizedClient>> {
        let mut slot = self.client.lock().await;
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(self.authorizer.authorize().await?);
        *slot = Some(Arc::clone(&client));
        Ok(client)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::health))
        .route("/api", get(api::files))
        .with_state(state)
}

pub async fn start_api_server(state: AppState, addr: SocketAddr) -> Res<()> {
    let listener = TcpListener::bind(&addr).await?;
    success!("Server ready on {}.", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Serves the OAuth redirect on an already bound loopback listener.
pub async fn start_callback_server(
    listener: TcpListener,
    state: Arc<Mutex<Option<PkceSession>>>,
) -> Res<()> {
    let app = Router::new().route(CALLBACK_PATH, get(api::callback).layer(Extension(state)));
    axum::serve(listener, app).await?;
    Ok(())
}
