use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{config, error, google, info, utils};

/// Authorizes and prints the folder listing once.
pub async fn list() {
    let authorizer = match super::build_authorizer() {
        Ok(a) => a,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    let client = match authorizer.authorize().await {
        Ok(c) => c,
        Err(e) => error!("Authorization failed: {}", e),
    };

    let folder_id = config::drive_folder_id();

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Listing media in folder {}...", folder_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = google::files::list_files(&client, &folder_id).await;
    pb.finish_and_clear();

    let files = match result {
        Ok(f) => f,
        Err(e) => error!("Failed to list files: {}", e),
    };

    if files.is_empty() {
        info!("No image or video files found.");
        return;
    }

    let table = Table::new(utils::file_table_rows(&files));
    println!("{}", table);
}
