use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{google::auth::exchange_code_pkce, types::PkceSession, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceSession>>>>,
) -> Html<&'static str> {
    let mut state = shared_state.lock().await;
    let Some(session) = state.as_mut() else {
        return Html("<h4>No authorization in progress.</h4>");
    };

    // a redirect that does not echo our state belongs to some other flow
    if params.get("state") != Some(&session.state) {
        warning!("Ignoring OAuth callback with unexpected state.");
        return Html("<h4>Invalid authorization state.</h4>");
    }

    if let Some(reason) = params.get("error") {
        session.outcome = Some(Err(reason.clone()));
        return Html("<h4>Authorization denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let client = Client::new();
    match exchange_code_pkce(
        &client,
        &session.token_url,
        &session.client,
        code,
        &session.code_verifier,
        &session.redirect_uri,
    )
    .await
    {
        Ok(token) => {
            session.outcome = Some(Ok(token));
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            session.outcome = Some(Err(e.to_string()));
            Html("<h4>Login failed.</h4>")
        }
    }
}
