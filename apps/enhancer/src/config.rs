use anyhow::{bail, Context, Result};

/// Which surface exposes the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// MCP over newline-delimited JSON-RPC on stdin/stdout.
    Stdio,
    /// JSON over HTTP.
    Http,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub transport: Transport,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let transport = match lookup("TRANSPORT").as_deref() {
            None | Some("stdio") => Transport::Stdio,
            Some("http") => Transport::Http,
            Some(other) => bail!("TRANSPORT must be 'stdio' or 'http', got '{other}'"),
        };

        Ok(Config {
            transport,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
