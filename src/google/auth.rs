use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Response};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    Error, Res, info,
    management::load_client_secret,
    server::start_callback_server,
    types::{ClientSecret, Consent, Endpoints, PkceSession, Token, TokenResponse},
    utils, warning,
};

/// Route the loopback callback server answers on.
pub const CALLBACK_PATH: &str = "/oauth2callback";

/// An interactive authorization that yields a fresh grant.
///
/// The authorizer calls this at most once per cache miss.
#[async_trait]
pub trait ConsentFlow: Send + Sync {
    async fn run(&self, scope: &str) -> Res<Consent>;
}

/// Browser based consent with a temporary loopback callback server.
pub struct BrowserConsentFlow {
    credentials_path: PathBuf,
    endpoints: Endpoints,
    callback_addr: SocketAddr,
    timeout: Duration,
    open_browser: bool,
}

impl BrowserConsentFlow {
    pub fn new(
        credentials_path: impl Into<PathBuf>,
        endpoints: Endpoints,
        callback_addr: SocketAddr,
        timeout: Duration,
    ) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            endpoints,
            callback_addr,
            timeout,
            open_browser: true,
        }
    }

    /// When disabled the consent URL is only printed, for headless hosts.
    pub fn with_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }
}

#[async_trait]
impl ConsentFlow for BrowserConsentFlow {
    /// Runs the complete PKCE flow.
    ///
    /// 1. Reads the client secret document
    /// 2. Binds the loopback callback server
    /// 3. Generates the code verifier, its S256 challenge and the `state` value
    /// 4. Opens the consent URL in the default browser
    /// 5. Waits for the callback to exchange the code
    ///
    /// The callback server is stopped once the flow resolves, whatever the
    /// outcome.
    async fn run(&self, scope: &str) -> Res<Consent> {
        let client = load_client_secret(&self.credentials_path).await?;

        // bind before the browser opens so the redirect cannot race the listener
        let listener = TcpListener::bind(self.callback_addr).await?;
        let redirect_uri = format!("http://{}{}", listener.local_addr()?, CALLBACK_PATH);

        let code_verifier = utils::generate_code_verifier();
        let code_challenge = utils::generate_code_challenge(&code_verifier);
        let state = utils::generate_state();

        let auth_url = utils::build_auth_url(
            &self.endpoints.auth_url,
            &client.client_id,
            &redirect_uri,
            &code_challenge,
            &state,
            scope,
        )?;

        let shared_state = Arc::new(Mutex::new(Some(PkceSession {
            code_verifier,
            state,
            client: client.clone(),
            redirect_uri,
            token_url: self.endpoints.token_url.clone(),
            outcome: None,
        })));

        let server_state = Arc::clone(&shared_state);
        let server = tokio::spawn(async move {
            if let Err(e) = start_callback_server(listener, server_state).await {
                warning!("OAuth callback server stopped: {}", e);
            }
        });

        if !self.open_browser {
            info!("Open the following URL to authorize:\n{}", auth_url);
        } else if webbrowser::open(&auth_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                auth_url
            )
        } else {
            info!("Waiting for consent in the browser...");
        }

        let outcome = wait_for_token(shared_state, self.timeout).await;
        server.abort();

        match outcome {
            Some(Ok(token)) => Ok(Consent { client, token }),
            Some(Err(reason)) => Err(Error::AuthorizationDenied(reason)),
            None => Err(Error::AuthorizationTimedOut(self.timeout.as_secs())),
        }
    }
}

/// Polls the shared session until the callback records an outcome or
/// `max_wait` elapses. Polls at most once per second.
async fn wait_for_token(
    shared_state: Arc<Mutex<Option<PkceSession>>>,
    max_wait: Duration,
) -> Option<Result<Token, String>> {
    use std::time::Instant;

    let start = Instant::now();
    let interval = max_wait.min(Duration::from_secs(1));

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(session) = lock.as_ref() {
            if let Some(outcome) = &session.outcome {
                return Some(outcome.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(interval).await;
    }

    None
}

/// Exchanges an authorization code for a token using PKCE.
///
/// Google requires the client secret even for installed apps, so it is sent
/// along with the code verifier.
pub async fn exchange_code_pkce(
    http: &Client,
    token_url: &str,
    client: &ClientSecret,
    code: &str,
    verifier: &str,
    redirect_uri: &str,
) -> Res<Token> {
    let res = http
        .post(token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client.client_id.as_str()),
            ("client_secret", client.client_secret.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await?;

    parse_token_response(res).await
}

/// Exchanges a refresh token for a new access token.
///
/// Google does not rotate refresh tokens on this grant, so the returned
/// token usually carries none.
pub async fn refresh_access_token(
    http: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Res<Token> {
    let res = http
        .post(token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await?;

    parse_token_response(res).await
}

async fn parse_token_response(res: Response) -> Res<Token> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(Error::TokenRejected(format!("{status}: {body}")));
    }

    let token: TokenResponse = res.json().await?;
    Ok(token.into())
}
