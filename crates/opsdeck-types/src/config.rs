//! Console configuration.
//!
//! The two backend base URLs are process-wide configuration, fixed for the
//! session lifetime. Defaults point at the local development ports of the
//! catalog and agent services.

use serde::{Deserialize, Serialize};

/// Base endpoints for the two backend services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Agent reasoning service (`POST {agent_base_url}/chat`).
    #[serde(default = "default_agent_base_url")]
    pub agent_base_url: String,
    /// Product catalog service (`GET {catalog_base_url}/products`).
    #[serde(default = "default_catalog_base_url")]
    pub catalog_base_url: String,
}

fn default_agent_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_catalog_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            agent_base_url: default_agent_base_url(),
            catalog_base_url: default_catalog_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ConsoleConfig::default();
        assert_eq!(config.agent_base_url, "http://localhost:8000");
        assert_eq!(config.catalog_base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ConsoleConfig =
            toml::from_str("agent_base_url = \"http://agent.internal:9000\"").unwrap();
        assert_eq!(config.agent_base_url, "http://agent.internal:9000");
        assert_eq!(config.catalog_base_url, "http://localhost:8080/api");
    }
}
