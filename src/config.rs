use anyhow::{Context, Result};
use clap::Parser;
use std::{env, fmt, time::Duration};

use crate::db::PoolSettings;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost,http://localhost:8080";
const DEFAULT_ADMIN_TOKEN: &str = "fake-super-secret-token";

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub cors_origins: Vec<String>,
    pub admin_token: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Vehicle dealership REST API")]
pub struct Args {
    /// Host to bind to (overrides DEALERSHIP_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides DEALERSHIP_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database URL (overrides DEALERSHIP_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Pool size (overrides DEALERSHIP_MAX_CONNECTIONS)
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Comma-separated CORS origins (overrides DEALERSHIP_CORS_ORIGINS)
    #[arg(long)]
    pub cors_origins: Option<String>,

    /// Create the schema and exit
    #[arg(long)]
    pub migrate: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and migrate flag.
    pub fn from_env_and_args() -> Result<(Self, bool)> {
        let args = Args::parse();
        let migrate = args.migrate;
        let cfg = Self::from_sources(args, |key| env::var(key).ok())?;
        Ok((cfg, migrate))
    }

    /// Merge CLI args over values from `lookup` (the environment in production).
    pub fn from_sources(args: Args, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // --- Environment fallback ---
        let env_host = lookup("DEALERSHIP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let env_port = parse_var(&lookup, "DEALERSHIP_PORT", 8000u16)?;
        let env_db = lookup("DEALERSHIP_DATABASE_URL")
            .unwrap_or_else(|| "sqlite://./data/dealership.db".into());
        let env_max_connections = parse_var(&lookup, "DEALERSHIP_MAX_CONNECTIONS", 5u32)?;
        let acquire_timeout_secs = parse_var(&lookup, "DEALERSHIP_ACQUIRE_TIMEOUT_SECS", 30u64)?;
        let env_origins =
            lookup("DEALERSHIP_CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.into());
        let admin_token =
            lookup("DEALERSHIP_ADMIN_TOKEN").unwrap_or_else(|| DEFAULT_ADMIN_TOKEN.into());

        // --- Merge ---
        let max_connections = args.max_connections.unwrap_or(env_max_connections);
        if max_connections == 0 {
            anyhow::bail!("max connections must be at least 1");
        }

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            database_url: args.database_url.unwrap_or(env_db),
            max_connections,
            acquire_timeout_secs,
            cors_origins: split_origins(&args.cors_origins.unwrap_or(env_origins)),
            admin_token,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}

// Keeps the admin token out of startup logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &self.database_url)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("cors_origins", &self.cors_origins)
            .field("admin_token", &"<redacted>")
            .finish()
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .parse::<T>()
            .with_context(|| format!("parsing {} value `{}`", key, value)),
        None => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
