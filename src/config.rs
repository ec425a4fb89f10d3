//! Runtime configuration from environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.

use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_DATABASE_FILE: &str = "runs.db";
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3123);
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// SQLite database file. Created on first connect if missing.
    pub database_file: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Config with defaults and the given database file. Used by tests and embedders.
    pub fn with_database_file(path: impl Into<PathBuf>) -> Self {
        AppConfig {
            database_file: path.into(),
            bind_addr: DEFAULT_BIND_ADDR,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Read `DATABASE_FILE`, `BIND_ADDR`, `DATABASE_MAX_CONNECTIONS`, `MAX_BODY_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_file = lookup("DATABASE_FILE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_FILE.into());
        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), Some(DEFAULT_BIND_ADDR))?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            Some(DEFAULT_MAX_CONNECTIONS),
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                message: "must be at least 1".into(),
            });
        }
        let max_body_bytes = parse_or("MAX_BODY_BYTES", lookup("MAX_BODY_BYTES"), Some(DEFAULT_MAX_BODY_BYTES))?;

        Ok(AppConfig {
            database_file: PathBuf::from(database_file),
            bind_addr,
            max_connections,
            max_body_bytes,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        None => default.ok_or_else(|| ConfigError::Invalid {
            key,
            message: "no default available".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.database_file, PathBuf::from("runs.db"));
        assert_eq!(cfg.bind_addr.port(), 3123);
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn explicit_database_file_shares_env_defaults() {
        let from_env = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        let explicit = AppConfig::with_database_file("runs.db");
        assert_eq!(explicit.bind_addr, from_env.bind_addr);
        assert_eq!(explicit.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(explicit.max_connections, from_env.max_connections);
        assert_eq!(explicit.max_body_bytes, from_env.max_body_bytes);
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_FILE", "/tmp/tracker.db"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_file, PathBuf::from("/tmp/tracker.db"));
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.max_connections, 2);
    }

    #[test]
    fn rejects_bad_values() {
        let err = AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));

        let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. }));
    }
}
