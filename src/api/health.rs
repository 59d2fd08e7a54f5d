pub const LIVENESS: &str = "Drive media server is running.";

pub async fn health() -> &'static str {
    LIVENESS
}
