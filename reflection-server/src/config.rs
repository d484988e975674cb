//! Server configuration
//!
//! Every flag can also be set through its `REFLECTION_*` environment variable.

use axum::http::HeaderValue;
use clap::Parser;

/// Origins allowed when `REFLECTION_CORS_ORIGINS` is unset (frontend dev servers)
pub const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

#[derive(Debug, Clone, Parser)]
#[command(name = "reflection-server")]
#[command(author, version, about = "HTTP API for submitting and listing reflections", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "REFLECTION_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "REFLECTION_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins, or "*" for any
    #[arg(long, env = "REFLECTION_CORS_ORIGINS")]
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors_origins: None,
        }
    }
}

/// Which origins the CORS layer admits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl ServerConfig {
    pub fn cors_origins(&self) -> CorsOrigins {
        match self.cors_origins.as_deref() {
            Some(origins) => parse_origins(origins),
            None => CorsOrigins::List(
                DEFAULT_CORS_ORIGINS
                    .into_iter()
                    .map(HeaderValue::from_static)
                    .collect(),
            ),
        }
    }
}

/// Parse a comma-separated origin list. Entries that are not valid header
/// values are skipped.
pub fn parse_origins(origins: &str) -> CorsOrigins {
    if origins.trim() == "*" {
        return CorsOrigins::Any;
    }

    let allowed = origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {:?}", s);
                None
            }
        })
        .collect();
    CorsOrigins::List(allowed)
}
