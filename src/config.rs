use std::time::Duration;

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    5
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn new_from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
