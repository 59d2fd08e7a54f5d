use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Value of the `type` field in every persisted credential record.
pub const CREDENTIAL_TYPE: &str = "authorized_user";

/// The cached credential written to the token file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl CredentialRecord {
    pub fn authorized_user(client: &ClientSecret, refresh_token: &str) -> Self {
        Self {
            kind: CREDENTIAL_TYPE.to_string(),
            client_id: client.client_id.clone(),
            client_secret: client.client_secret.clone(),
            refresh_token: refresh_token.to_string(),
        }
    }
}

/// The externally provisioned OAuth client document.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecretDocument {
    pub installed: Option<ClientSecret>,
    pub web: Option<ClientSecret>,
}

impl ClientSecretDocument {
    /// Picks the `installed` entry, falling back to `web`.
    pub fn into_client(self) -> Option<ClientSecret> {
        self.installed.or(self.web)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSecret {
    pub client_id: String,
    pub client_secret: String,
}

/// An access token as issued by the token endpoint. Never persisted.
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + 240 >= self.obtained_at + self.expires_in
    }
}

/// Raw token endpoint payload.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
}

impl From<TokenResponse> for Token {
    fn from(res: TokenResponse) -> Self {
        Token {
            access_token: res.access_token,
            refresh_token: res.refresh_token,
            expires_in: res.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// What a successful interactive authorization hands back.
#[derive(Debug, Clone)]
pub struct Consent {
    pub client: ClientSecret,
    pub token: Token,
}

/// State shared between the consent flow and the callback handler.
#[derive(Debug, Clone)]
pub struct PkceSession {
    pub code_verifier: String,
    pub state: String,
    pub client: ClientSecret,
    pub redirect_uri: String,
    pub token_url: String,
    pub outcome: Option<Result<Token, String>>,
}

/// Google endpoints, overridable so tests can point at a mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_view_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_media_metadata: Option<VideoMediaMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMediaMetadata {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration_millis: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    pub next_page_token: Option<String>,
}

#[derive(Tabled)]
pub struct FileTableRow {
    pub name: String,
    pub id: String,
    pub link: String,
    pub video: String,
}
