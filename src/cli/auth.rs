use crate::{error, success};

pub async fn auth() {
    let authorizer = match super::build_authorizer() {
        Ok(a) => a,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    match authorizer.authorize().await {
        Ok(client) => success!(
            "Authorized as client {} (token file: {}).",
            client.client_id(),
            authorizer.cache().token_path().display()
        ),
        Err(e) => error!("Authorization failed: {}", e),
    }
}
