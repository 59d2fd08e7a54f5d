use crate::{
    Error, Res,
    management::AuthorizedClient,
    types::{DriveFile, FileList},
    utils, warning,
};

/// Fields requested from `files.list`.
pub const MEDIA_FIELDS: &str =
    "nextPageToken, files(id, name, mimeType, webViewLink, videoMediaMetadata)";

const PAGE_SIZE: &str = "1000";

/// Lists image and video files directly under `folder_id`.
///
/// Issues exactly one request and returns a vector owned by the caller;
/// nothing is kept between calls. Only the first page is read: when Drive
/// hands back a continuation token the rest of the folder is skipped and a
/// warning is printed.
///
/// # Errors
///
/// - [`Error::TokenRejected`] / [`Error::MissingRefreshToken`] when no access
///   token can be obtained
/// - [`Error::Remote`] for any non-2xx Drive response (quota, permission, ...)
/// - [`Error::Http`] for transport and decoding failures
pub async fn list_files(client: &AuthorizedClient, folder_id: &str) -> Res<Vec<DriveFile>> {
    let token = client.access_token().await?;
    let url = format!("{}/files", client.endpoints().api_url);
    let query = utils::media_query(folder_id);

    let response = client
        .http()
        .get(&url)
        .bearer_auth(token)
        .query(&[
            ("q", query.as_str()),
            ("fields", MEDIA_FIELDS),
            ("pageSize", PAGE_SIZE),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(Error::Remote {
            status: status.as_u16(),
            message,
        });
    }

    let listing = response.json::<FileList>().await?;
    if listing.next_page_token.is_some() {
        warning!(
            "Folder {} has more media than one page; only the first {} items are listed.",
            folder_id,
            listing.files.len()
        );
    }

    let mut files = listing.files;
    utils::retain_media(&mut files);
    Ok(files)
}
