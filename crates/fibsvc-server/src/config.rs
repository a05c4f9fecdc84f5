//! Server configuration from CLI flags and environment.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use fibsvc_core::{
    cache_from_capacity, ExclusionStore, FibError, FibService, FileExclusionStore,
    MemoryExclusionStore, DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_INDEX, DEFAULT_MAX_PAGE_SIZE,
};

use crate::state::Limits;

/// fibsvc-server — Fibonacci API with a persistent blacklist.
#[derive(Parser, Debug, Clone)]
#[command(name = "fibsvc-server", version, about)]
pub struct ServerConfig {
    /// Host to bind to.
    #[arg(long, env = "FIBSVC_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to.
    #[arg(short, long, env = "FIBSVC_PORT", default_value = "8000")]
    pub port: u16,

    /// Blacklist file. The blacklist is kept in memory only when unset.
    #[arg(long, env = "FIBSVC_BLACKLIST_FILE")]
    pub blacklist_file: Option<PathBuf>,

    /// Number of Fibonacci values to keep cached (0 disables caching).
    #[arg(long, env = "FIBSVC_CACHE_CAPACITY", default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: usize,

    /// Largest index, or listing total, a request may ask for.
    #[arg(long, env = "FIBSVC_MAX_INDEX", default_value_t = DEFAULT_MAX_INDEX)]
    pub max_index: u64,

    /// Largest page size a listing request may ask for.
    #[arg(long, env = "FIBSVC_MAX_PAGE_SIZE", default_value_t = DEFAULT_MAX_PAGE_SIZE)]
    pub max_page_size: u64,

    /// Default log filter; `RUST_LOG` takes precedence.
    #[arg(long, env = "FIBSVC_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            blacklist_file: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            max_index: DEFAULT_MAX_INDEX,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            log_level: "info".into(),
        }
    }
}

impl ServerConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// `host:port` string for the listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn limits(&self) -> Limits {
        Limits {
            max_index: self.max_index,
            max_page_size: self.max_page_size,
        }
    }

    /// Build the service: file-backed blacklist when a path is configured.
    pub fn build_service(&self) -> Result<FibService, FibError> {
        let exclusions: Arc<dyn ExclusionStore> = match &self.blacklist_file {
            Some(path) => Arc::new(FileExclusionStore::open(path)?),
            None => Arc::new(MemoryExclusionStore::new()),
        };
        Ok(FibService::new(
            exclusions,
            cache_from_capacity(self.cache_capacity),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr(), "127.0.0.1:8000");
        assert_eq!(config.limits().max_index, DEFAULT_MAX_INDEX);
        assert!(config.blacklist_file.is_none());
    }

    #[test]
    fn parse_flags() {
        let config = ServerConfig::try_parse_from([
            "fibsvc-server",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--cache-capacity",
            "0",
            "--max-page-size",
            "50",
        ])
        .unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
        assert_eq!(config.cache_capacity, 0);
        assert_eq!(config.limits().max_page_size, 50);
    }

    #[test]
    fn in_memory_service_by_default() {
        let service = ServerConfig::default().build_service().unwrap();
        assert_eq!(service.store_name(), "memory");
    }

    #[test]
    fn file_service_when_path_set() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = ServerConfig {
            blacklist_file: Some(dir.path().join("blacklist.json")),
            ..ServerConfig::default()
        };
        let service = config.build_service().unwrap();
        assert_eq!(service.store_name(), "file");
    }
}
