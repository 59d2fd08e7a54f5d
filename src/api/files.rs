use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::{Res, google, server::AppState, types::DriveFile, warning};

pub async fn files(State(state): State<AppState>) -> impl IntoResponse {
    match fetch(&state).await {
        Ok(files) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": files,
            })),
        ),
        Err(e) => {
            warning!("Listing folder {} failed: {}", state.folder_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Failed to list media files from Google Drive",
                    "error": e.to_string(),
                })),
            )
        }
    }
}

async fn fetch(state: &AppState) -> Res<Vec<DriveFile>> {
    let client = state.authorized_client().await?;
    google::files::list_files(&client, &state.folder_id).await
}
