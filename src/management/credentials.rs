use std::path::{Path, PathBuf};

use crate::{
    Error, Res,
    types::{ClientSecret, ClientSecretDocument, CredentialRecord},
};

/// File backed cache for the refresh token.
///
/// There is no locking: two processes authorizing at once can overwrite each
/// other's token file.
pub struct CredentialCache {
    token_path: PathBuf,
    credentials_path: PathBuf,
}

impl CredentialCache {
    pub fn new(token_path: impl Into<PathBuf>, credentials_path: impl Into<PathBuf>) -> Self {
        CredentialCache {
            token_path: token_path.into(),
            credentials_path: credentials_path.into(),
        }
    }

    /// Reads the cached record.
    ///
    /// A missing or unparseable file is a miss, not an error.
    pub async fn load(&self) -> Option<CredentialRecord> {
        let content = async_fs::read_to_string(&self.token_path).await.ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Writes a fresh record for `refresh_token`, replacing whatever was there.
    ///
    /// The client identity comes from the client secret document, which is
    /// read again on every call.
    pub async fn persist(&self, refresh_token: &str) -> Res<CredentialRecord> {
        let client = load_client_secret(&self.credentials_path).await?;
        let record = CredentialRecord::authorized_user(&client, refresh_token);

        if let Some(parent) = self.token_path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(&record)?;
        async_fs::write(&self.token_path, json).await?;
        Ok(record)
    }

    pub fn token_path(&self) -> &Path {
        &self.token_path
    }
}

/// Reads the client secret document and picks its `installed` or `web` entry.
pub async fn load_client_secret(path: &Path) -> Res<ClientSecret> {
    let content = async_fs::read_to_string(path).await?;
    let document: ClientSecretDocument = serde_json::from_str(&content)?;
    document.into_client().ok_or(Error::MissingClientSecret)
}
