//! Account service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        // argon2 crate defaults (OWASP minimum for Argon2id)
        Self {
            memory_kib: 19456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Account service configuration.
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    pub hashing: HashingConfig,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                host: env::var("ACCOUNT_SERVICE_HOST").unwrap_or(defaults.service.host),
                port: parse_var("ACCOUNT_SERVICE_PORT").unwrap_or(defaults.service.port),
            },
            database: DatabaseConfig {
                url: env::var("ACCOUNT_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
            },
            hashing: HashingConfig {
                memory_kib: parse_var("ARGON2_MEMORY_KIB").unwrap_or(defaults.hashing.memory_kib),
                iterations: parse_var("ARGON2_ITERATIONS").unwrap_or(defaults.hashing.iterations),
                parallelism: parse_var("ARGON2_PARALLELISM")
                    .unwrap_or(defaults.hashing.parallelism),
            },
        }
    }
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "account-service".to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
            hashing: HashingConfig::default(),
        }
    }
}

/// Read and parse an environment variable, ignoring unparsable values.
fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AccountServiceConfig::default();

        assert_eq!(config.service.service_name, "account-service");
        assert_eq!(config.service.port, 8080);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.hashing, HashingConfig::default());
    }

    #[test]
    fn test_debug_does_not_leak_database_url() {
        let config = AccountServiceConfig::default();
        assert!(!format!("{:?}", config).contains("postgres://"));
    }
}
