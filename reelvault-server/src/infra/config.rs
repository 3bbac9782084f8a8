use std::{env, path::PathBuf};

/// Process-wide configuration, read from environment variables once at
/// startup and passed by reference into every handler.
///
/// The store connection values are optional at startup: a handler whose
/// backing store was never configured answers each request with a
/// configuration-error body instead of preventing the process from serving
/// the endpoints that are configured.
#[derive(Debug, Clone)]
pub struct Config {
    // Server settings
    pub server_host: String,
    pub server_port: u16,

    // Document store settings
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    // Object store settings
    pub blob_root: Option<PathBuf>,
    pub blob_public_url: String,

    // CORS settings
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            database_url: env::var("DATABASE_URL").ok(),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            blob_root: env::var("BLOB_ROOT").ok().map(PathBuf::from),
            blob_public_url: env::var("BLOB_PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:3000/files".to_string()),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        })
    }

    /// A minimal configuration for tests: no stores, default bind address.
    pub fn for_tests() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            database_url: None,
            database_max_connections: 1,
            blob_root: None,
            blob_public_url: "http://localhost:3000/files".to_string(),
            cors_allowed_origins: Vec::new(),
        }
    }
}
