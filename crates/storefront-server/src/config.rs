//! Environment-driven configuration, loaded once at startup

use crate::middleware::AccessGate;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use storefront_types::Seed;
use tracing::{info, warn};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub gate: AccessGate,
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present;
    /// variables already set in the environment take precedence.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(_) => info!("No .env file found"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_address: SocketAddr = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse()
            .context("Failed to parse BIND_ADDRESS")?;

        let auth_disabled = lookup("AUTH_DISABLED")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let gate = match lookup("API_KEY").filter(|key| !key.is_empty()) {
            Some(key) => {
                if auth_disabled {
                    warn!("AUTH_DISABLED is set but API_KEY is configured; enforcing API_KEY");
                }
                AccessGate::Secret(key)
            }
            None if auth_disabled => {
                warn!("AUTH_DISABLED is set, API routes accept any request");
                AccessGate::Open
            }
            None => {
                warn!("API_KEY not set, all API requests will be rejected (set AUTH_DISABLED=true to allow them)");
                AccessGate::Closed
            }
        };

        let seed_path = lookup("SEED_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Config {
            bind_address,
            gate,
            seed_path,
        })
    }
}

/// Read the initial products and users from a JSON file
pub async fn load_seed(path: &Path) -> Result<Seed> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    let seed: Seed = serde_json::from_slice(&raw)
        .with_context(|| format!("Invalid seed file: {}", path.display()))?;
    info!(
        "Seed loaded: {} products, {} users",
        seed.products.len(),
        seed.users.len()
    );
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS.parse::<SocketAddr>().unwrap());
        assert_eq!(config.gate, AccessGate::Closed);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_api_key() {
        let config = config_from(&[("API_KEY", "s3cret")]).unwrap();
        assert_eq!(config.gate, AccessGate::Secret("s3cret".to_string()));
    }

    #[test]
    fn test_empty_api_key_is_not_a_secret() {
        let config = config_from(&[("API_KEY", "")]).unwrap();
        assert_eq!(config.gate, AccessGate::Closed);

        let config = config_from(&[("API_KEY", ""), ("AUTH_DISABLED", "true")]).unwrap();
        assert_eq!(config.gate, AccessGate::Open);
    }

    #[test]
    fn test_api_key_wins_over_auth_disabled() {
        let config = config_from(&[("API_KEY", "k"), ("AUTH_DISABLED", "1")]).unwrap();
        assert_eq!(config.gate, AccessGate::Secret("k".to_string()));
    }

    #[test]
    fn test_bad_bind_address() {
        assert!(config_from(&[("BIND_ADDRESS", "not an address")]).is_err());
    }

    #[tokio::test]
    async fn test_load_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"{"products":[{"id":"p1","name":"Widget","price":2.5}],"users":[{"username":"alice","password":"secret"}]}"#,
        )
        .unwrap();

        let seed = load_seed(&path).await.unwrap();
        assert_eq!(seed.products.len(), 1);
        assert_eq!(seed.users[0].username, "alice");
    }

    #[tokio::test]
    async fn test_load_seed_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_seed(&dir.path().join("missing.json")).await.is_err());

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not-json").unwrap();
        assert!(load_seed(&path).await.is_err());
    }
}
