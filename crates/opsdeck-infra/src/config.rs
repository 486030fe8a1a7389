//! Configuration loader for Opsdeck.
//!
//! Reads `config.toml` from the data directory (`~/.opsdeck/` in
//! production) and deserializes it into [`ConsoleConfig`]. Falls back to
//! the default local endpoints when the file is missing or malformed --
//! a broken config never prevents the console from starting.

use std::path::{Path, PathBuf};

use opsdeck_types::config::ConsoleConfig;

/// Resolve the data directory holding `config.toml`.
///
/// `OPSDECK_DATA_DIR` wins when set; otherwise `~/.opsdeck`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("OPSDECK_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".opsdeck");
    }

    // Last resort: current directory
    PathBuf::from(".opsdeck")
}

/// Load console configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ConsoleConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the
///   default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_console_config(data_dir: &Path) -> ConsoleConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return ConsoleConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return ConsoleConfig::default();
        }
    };

    match toml::from_str::<ConsoleConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ConsoleConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_console_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_console_config(tmp.path()).await;
        assert_eq!(config.agent_base_url, "http://localhost:8000");
        assert_eq!(config.catalog_base_url, "http://localhost:8080/api");
    }

    #[tokio::test]
    async fn load_console_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
agent_base_url = "http://agent.internal:9000"
catalog_base_url = "http://catalog.internal:9090/api"
"#,
        )
        .await
        .unwrap();

        let config = load_console_config(tmp.path()).await;
        assert_eq!(config.agent_base_url, "http://agent.internal:9000");
        assert_eq!(config.catalog_base_url, "http://catalog.internal:9090/api");
    }

    #[tokio::test]
    async fn load_console_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_console_config(tmp.path()).await;
        assert_eq!(config.agent_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("OPSDECK_DATA_DIR", "/tmp/test-opsdeck");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-opsdeck"));
        unsafe {
            std::env::remove_var("OPSDECK_DATA_DIR");
        }
    }
}
