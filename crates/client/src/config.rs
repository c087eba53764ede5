//! Runtime configuration, resolved from the environment.

use std::path::PathBuf;

use url::Url;

use crate::error::ClientError;

pub const SERVER_URL_VAR: &str = "MASHDASH_SERVER_URL";
pub const STORAGE_FILE_VAR: &str = "MASHDASH_STORAGE_FILE";
pub const DEFAULT_SERVER_URL: &str = "ws://localhost:8081";

/// Everything the composition root needs to assemble a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    /// Explicit cache file; `None` selects the platform data directory.
    pub storage_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Resolve from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ClientError> {
        let server_url =
            std::env::var(SERVER_URL_VAR).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let storage_file = std::env::var(STORAGE_FILE_VAR).ok().map(PathBuf::from);
        Self::new(server_url, storage_file)
    }

    pub fn new(server_url: String, storage_file: Option<PathBuf>) -> Result<Self, ClientError> {
        validate_server_url(&server_url)?;
        Ok(Self {
            server_url,
            storage_file,
        })
    }
}

fn validate_server_url(raw: &str) -> Result<(), ClientError> {
    let url = Url::parse(raw).map_err(|e| ClientError::InvalidServerUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "ws" | "wss" => Ok(()),
        other => Err(ClientError::InvalidServerUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}', expected ws or wss"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ws_and_wss_urls() {
        assert!(ClientConfig::new("ws://localhost:8081".into(), None).is_ok());
        assert!(ClientConfig::new("wss://game.example.com/ws".into(), None).is_ok());
    }

    #[test]
    fn rejects_non_websocket_schemes() {
        let err = ClientConfig::new("http://localhost:8081".into(), None);
        assert!(matches!(err, Err(ClientError::InvalidServerUrl { .. })));
    }

    #[test]
    fn rejects_unparseable_urls() {
        assert!(ClientConfig::new("not a url".into(), None).is_err());
    }
}
