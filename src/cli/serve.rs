use std::sync::Arc;

use crate::{
    config, error,
    server::{AppState, start_api_server},
};

pub async fn serve() {
    let authorizer = match super::build_authorizer() {
        Ok(a) => a,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    let state = AppState::new(Arc::new(authorizer), config::drive_folder_id());

    if let Err(e) = start_api_server(state, config::server_addr()).await {
        error!("Server stopped: {}", e);
    }
}
