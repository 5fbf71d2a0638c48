//! Configuration management for the itinerary PDF server

use std::env;

use crate::pipeline::PipelineConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub render: PipelineConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// The single origin echoed on every response.
    pub allowed_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            cors: CorsConfig {
                allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            },
            render: PipelineConfig::default(),
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `ALLOWED_ORIGIN`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Config {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            cors: CorsConfig {
                allowed_origin: lookup("ALLOWED_ORIGIN")
                    .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            },
            render: PipelineConfig::default(),
        }
    }
}
