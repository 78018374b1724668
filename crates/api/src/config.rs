use std::path::PathBuf;

use blip_catalog::CatalogCredentials;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `120`).
    ///
    /// A full sync walks every catalog page before answering, so this is
    /// longer than a typical API timeout.
    pub request_timeout_secs: u64,
    /// Remote catalog settings.
    pub catalog: CatalogConfig,
    /// Optional JSON file with classifier matcher lists.
    pub classifier_lists: Option<PathBuf>,
}

/// Where the remote catalog lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub credentials: CatalogCredentials,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `3000`                       |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                        |
    /// | `MARVEL_API_URL`       | `https://gateway.marvel.com` |
    /// | `MARVEL_PUBLIC_KEY`    | required                     |
    /// | `MARVEL_PRIVATE_KEY`   | required                     |
    /// | `CLASSIFIER_LISTS`     | unset (built-in roster)      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let catalog = CatalogConfig {
            base_url: std::env::var("MARVEL_API_URL")
                .unwrap_or_else(|_| blip_catalog::DEFAULT_BASE_URL.into()),
            credentials: CatalogCredentials {
                public_key: std::env::var("MARVEL_PUBLIC_KEY")
                    .expect("MARVEL_PUBLIC_KEY must be set"),
                private_key: std::env::var("MARVEL_PRIVATE_KEY")
                    .expect("MARVEL_PRIVATE_KEY must be set"),
            },
        };

        let classifier_lists = std::env::var("CLASSIFIER_LISTS")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            request_timeout_secs,
            catalog,
            classifier_lists,
        }
    }
}
