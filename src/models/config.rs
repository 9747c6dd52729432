use serde::Deserialize;

/// Configuration options for the ad board service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Directory uploaded images are written to.
    #[serde(default = "default_media_root")]
    pub media_root: String,
    /// URL prefix under which the media directory is served.
    #[serde(default = "default_media_url_prefix")]
    pub media_url_prefix: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_media_root() -> String {
    "media".to_string()
}

fn default_media_url_prefix() -> String {
    "/media".to_string()
}
