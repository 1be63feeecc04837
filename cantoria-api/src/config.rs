//! Configuration management for the API server
//!
//! This module loads configuration from environment variables and provides
//! a type-safe configuration struct.
//!
//! # Environment Variables
//!
//! - `CANTORIA_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CANTORIA_PORT`: Port to bind to (default: 8080)
//! - `CANTORIA_SESSION_SECRET`: Secret for session token signing (required)
//! - `CANTORIA_STORE_LATENCY_MS`: Simulated store round-trip latency (default: 0)
//! - `CANTORIA_SEED_DEMO`: Seed demo roster/repertoire/schedules (default: false)
//! - `RUST_LOG`: Log level (default: info)

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Session token configuration
    pub session: SessionConfig,

    /// In-memory store configuration
    pub store: StoreConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Session token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Secret for session token signing
    ///
    /// Must be at least 32 bytes. Generate with: `openssl rand -hex 32`
    pub secret: String,
}

/// In-memory store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Simulated round-trip latency applied to every store operation
    pub latency_ms: u64,

    /// Whether to seed demo data at startup
    pub seed_demo: bool,
}

impl StoreConfig {
    /// Latency as a `Duration`
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `CANTORIA_SESSION_SECRET` is missing or shorter
    /// than 32 bytes, or if a numeric variable fails to parse.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let host = env::var("CANTORIA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("CANTORIA_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let secret = env::var("CANTORIA_SESSION_SECRET").map_err(|_| {
            anyhow::anyhow!("CANTORIA_SESSION_SECRET environment variable is required")
        })?;
        if secret.len() < 32 {
            anyhow::bail!("CANTORIA_SESSION_SECRET must be at least 32 characters long");
        }

        let latency_ms = env::var("CANTORIA_STORE_LATENCY_MS")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<u64>()?;

        let seed_demo = env::var("CANTORIA_SEED_DEMO")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            api: ApiConfig { host, port },
            session: SessionConfig { secret },
            store: StoreConfig {
                latency_ms,
                seed_demo,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            session: SessionConfig {
                secret: "test-secret-key-at-least-32-bytes-long".to_string(),
            },
            store: StoreConfig {
                latency_ms: 150,
                seed_demo: false,
            },
        }
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(config().bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_store_latency() {
        assert_eq!(config().store.latency(), Duration::from_millis(150));
    }
}
