//! Application configuration.
//!
//! Layered with figment:
//! 1) defaults -> 2) YAML file (if provided) -> 3) env (`APP__*`) -> 4) CLI overrides
//!
//! Module sections live under `modules.<name>.config` and are decoded lazily
//! by the module that owns them.

use std::collections::BTreeMap;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::logging::{LoggingConfig, level_for_verbosity};

/// Prefix for environment overrides; `__` separates nesting levels,
/// e.g. `APP__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "APP__";

/// Configuration error for loading and typed module config access
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[source] Box<figment::Error>),
    #[error("invalid server host '{host}'")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to bind.
    pub host: String,
    pub port: u16,
    /// Requests running longer than this are answered with 504.
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8087,
            request_timeout_secs: 30,
            body_limit_bytes: 16 * 1024,
        }
    }
}

impl ServerConfig {
    /// # Errors
    /// Returns `ConfigError::InvalidHost` if `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost {
                host: self.host.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Raw per-module sections: `modules.<name> = { config: ... }`.
    pub modules: BTreeMap<String, serde_json::Value>,
}

/// Command-line values that override file and environment settings.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub verbose: u8,
}

impl AppConfig {
    /// Load layered configuration. Without a path only defaults and
    /// environment overrides apply.
    ///
    /// # Errors
    /// Returns `ConfigError::Load` if a layer cannot be parsed or the merged
    /// result does not match the schema.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(path)
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(level) = level_for_verbosity(args.verbose) {
            level.clone_into(&mut self.logging.level);
        }
    }

    /// Lenient typed access to `modules.<name>.config`.
    ///
    /// - module not present -> `T::default()`
    /// - module value not an object -> `T::default()`
    /// - no `config` field -> `T::default()`
    /// - `config` present but invalid -> `ConfigError::InvalidConfig`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` if the section cannot be deserialized.
    pub fn module_config_or_default<T: DeserializeOwned + Default>(
        &self,
        module_name: &str,
    ) -> Result<T, ConfigError> {
        let Some(config_section) = self
            .modules
            .get(module_name)
            .and_then(serde_json::Value::as_object)
            .and_then(|obj| obj.get("config"))
        else {
            return Ok(T::default());
        };

        serde_json::from_value(config_section.clone()).map_err(|source| {
            ConfigError::InvalidConfig {
                module: module_name.to_owned(),
                source,
            }
        })
    }

    /// # Errors
    /// Returns an error if the configuration cannot be serialized.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize, Default)]
    struct TestConfig {
        #[serde(default)]
        title: String,
        #[serde(default)]
        enabled: bool,
    }

    fn config_with_modules() -> AppConfig {
        let mut config = AppConfig::default();
        config.modules.insert(
            "test_module".to_owned(),
            json!({ "config": { "title": "hello", "enabled": true } }),
        );
        config
            .modules
            .insert("no_config_module".to_owned(), json!({ "other": 1 }));
        config
            .modules
            .insert("invalid_module".to_owned(), json!("not an object"));
        config.modules.insert(
            "bad_config_module".to_owned(),
            json!({ "config": { "enabled": "yes please" } }),
        );
        config
    }

    #[test]
    fn test_lenient_success() {
        let cfg: TestConfig = config_with_modules()
            .module_config_or_default("test_module")
            .unwrap();
        assert_eq!(
            cfg,
            TestConfig {
                title: "hello".to_owned(),
                enabled: true
            }
        );
    }

    #[test]
    fn test_lenient_falls_back_to_default() {
        let config = config_with_modules();
        for name in ["missing_module", "no_config_module", "invalid_module"] {
            let cfg: TestConfig = config.module_config_or_default(name).unwrap();
            assert_eq!(cfg, TestConfig::default(), "module {name}");
        }
    }

    #[test]
    fn test_lenient_invalid_config_is_error() {
        let err = config_with_modules()
            .module_config_or_default::<TestConfig>("bad_config_module")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig { ref module, .. } if module == "bad_config_module"));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(&CliArgs {
            port: Some(9999),
            verbose: 2,
        });
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_cli_without_flags_keeps_config() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.logging.level, LoggingConfig::default().level);
    }

    #[test]
    fn test_bind_addr() {
        let server = ServerConfig {
            host: "0.0.0.0".to_owned(),
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(server.bind_addr().unwrap().to_string(), "0.0.0.0:8080");

        let server = ServerConfig {
            host: "::1".to_owned(),
            ..ServerConfig::default()
        };
        assert_eq!(server.bind_addr().unwrap().to_string(), "[::1]:8087");

        let server = ServerConfig {
            host: "localhost".to_owned(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            server.bind_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }
}
