#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use driveshelf::{
    Error, Res,
    google::auth::ConsentFlow,
    types::{ClientSecret, Consent, CredentialRecord, Endpoints, Token},
};
use serde_json::json;
use wiremock::MockServer;

pub const CLIENT_ID: &str = "client-123.apps.googleusercontent.com";
pub const CLIENT_SECRET: &str = "secret-456";

/// Consent flow stand-in that counts invocations.
pub struct StubFlow {
    calls: AtomicUsize,
    refresh_token: Option<String>,
    fail: bool,
}

impl StubFlow {
    pub fn granting(refresh_token: Option<&str>) -> Self {
        StubFlow {
            calls: AtomicUsize::new(0),
            refresh_token: refresh_token.map(str::to_string),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        StubFlow {
            calls: AtomicUsize::new(0),
            refresh_token: None,
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConsentFlow for StubFlow {
    async fn run(&self, _scope: &str) -> Res<Consent> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::AuthorizationDenied("access_denied".to_string()));
        }

        Ok(Consent {
            client: ClientSecret {
                client_id: CLIENT_ID.to_string(),
                client_secret: CLIENT_SECRET.to_string(),
            },
            token: Token {
                access_token: "fresh-access".to_string(),
                refresh_token: self.refresh_token.clone(),
                expires_in: 3600,
                obtained_at: Utc::now().timestamp() as u64,
            },
        })
    }
}

/// Writes a client secret document with its entry under `key` (`installed` or `web`).
pub fn write_client_secret(dir: &Path, key: &str) -> PathBuf {
    let path = dir.join("credentials.json");
    let mut doc = serde_json::Map::new();
    doc.insert(
        key.to_string(),
        json!({
            "client_id": CLIENT_ID,
            "client_secret": CLIENT_SECRET,
            "redirect_uris": ["http://localhost"],
        }),
    );
    fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    path
}

pub fn write_token(dir: &Path, refresh_token: &str) -> PathBuf {
    let path = dir.join("token.json");
    let record = cached_record(refresh_token);
    fs::write(&path, serde_json::to_string_pretty(&record).unwrap()).unwrap();
    path
}

pub fn cached_record(refresh_token: &str) -> CredentialRecord {
    CredentialRecord {
        kind: "authorized_user".to_string(),
        client_id: CLIENT_ID.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
        refresh_token: refresh_token.to_string(),
    }
}

pub fn endpoints(server: &MockServer) -> Endpoints {
    Endpoints {
        auth_url: format!("{}/auth", server.uri()),
        token_url: format!("{}/token", server.uri()),
        api_url: server.uri(),
    }
}

/// Endpoints nothing listens on, for tests that must not touch the network.
pub fn offline_endpoints() -> Endpoints {
    Endpoints {
        auth_url: "http://127.0.0.1:9/auth".to_string(),
        token_url: "http://127.0.0.1:9/token".to_string(),
        api_url: "http://127.0.0.1:9".to_string(),
    }
}
