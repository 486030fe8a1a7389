//! Application state wiring configuration and transport together.
//!
//! AppState pins the core's transport ports to the concrete HTTP
//! implementation from opsdeck-infra. Both CLI views borrow from it.

use std::path::PathBuf;

use opsdeck_infra::config::{load_console_config, resolve_data_dir};
use opsdeck_infra::http::HttpTransport;
use opsdeck_types::config::ConsoleConfig;

/// Shared application state for the console.
#[derive(Clone)]
pub struct AppState {
    pub config: ConsoleConfig,
    pub transport: HttpTransport,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve config, build the transport.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_console_config(&data_dir).await;
        let transport = HttpTransport::new(&config);

        Ok(Self {
            config,
            transport,
            data_dir,
        })
    }
}
