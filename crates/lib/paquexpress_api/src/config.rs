//! API server configuration.

/// Configuration for the API server.
///
/// Assembled by the server binary from CLI arguments and environment
/// variables; tests construct it directly.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Directory uploaded photos are written to.
    pub uploads_dir: String,
    /// Base URL used to build public photo URLs (no trailing slash).
    pub public_base_url: String,
}

impl ApiConfig {
    /// Public URL for a stored photo filename.
    pub fn photo_url(&self, filename: &str) -> String {
        format!(
            "{}/uploads/{filename}",
            self.public_base_url.trim_end_matches('/')
        )
    }
}
