use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::thread;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration for HTTP server
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: default_workers(),
        }
    }

    /// Read `HOST`, `PORT` and `WORKERS`, falling back to `0.0.0.0:5000`
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| AppError::configuration(format!("Invalid PORT '{}'", value)))?,
            Err(_) => DEFAULT_PORT,
        };

        let mut config = Self::new(host, port);

        if let Ok(value) = env::var("WORKERS") {
            config.workers = value
                .trim()
                .parse()
                .map_err(|_| AppError::configuration(format!("Invalid WORKERS '{}'", value)))?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST.to_string(), DEFAULT_PORT)
    }
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
