use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;
use sha2::{Digest, Sha256};

use crate::{
    Error, Res,
    types::{DriveFile, FileTableRow},
};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

/// Random value echoed back by the consent screen, tying the callback to
/// the flow that opened it.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Builds the consent screen URL for the installed-app PKCE flow.
///
/// `access_type=offline` and `prompt=consent` make Google issue a refresh
/// token even when the user granted access before.
pub fn build_auth_url(
    auth_url: &str,
    client_id: &str,
    redirect_uri: &str,
    code_challenge: &str,
    state: &str,
    scope: &str,
) -> Res<String> {
    let url = Url::parse_with_params(
        auth_url,
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("state", state),
            ("scope", scope),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )
    .map_err(|e| Error::Url(format!("{auth_url}: {e}")))?;

    Ok(url.into())
}

/// Drive search expression for image and video files directly under `folder_id`.
pub fn media_query(folder_id: &str) -> String {
    format!(
        "'{folder_id}' in parents and (mimeType contains 'image/' or mimeType contains 'video/')"
    )
}

pub fn is_media_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/") || mime_type.starts_with("video/")
}

/// Drops files whose reported MIME type is not an image or video.
///
/// Files without a MIME type are kept; the server side query already
/// filtered them.
pub fn retain_media(files: &mut Vec<DriveFile>) {
    files.retain(|f| f.mime_type.as_deref().is_none_or(is_media_mime));
}

pub fn file_table_rows(files: &[DriveFile]) -> Vec<FileTableRow> {
    files
        .iter()
        .map(|f| FileTableRow {
            name: f.name.clone(),
            id: f.id.clone(),
            link: f.web_view_link.clone().unwrap_or_default(),
            video: match &f.video_media_metadata {
                Some(meta) => match (meta.width, meta.height) {
                    (Some(w), Some(h)) => format!("{w}x{h}"),
                    _ => "yes".to_string(),
                },
                None => String::new(),
            },
        })
        .collect()
}
