use rocket::figment::Figment;
use serde::Deserialize;

pub const DEFAULT_DATABASE_PATH: &str = "website/db/hrm.db";
pub const DEFAULT_GATEWAY_URL: &str = "https://gateway.sms77.io";

/// Extension settings read from `Rocket.toml` / `ROCKET_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

fn default_gateway_url() -> String {
    DEFAULT_GATEWAY_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            gateway_url: default_gateway_url(),
        }
    }
}

impl AppConfig {
    /// Pull our keys out of Rocket's figment. Falls back to defaults on a bad value
    /// so a typo in Rocket.toml doesn't stop the server from booting.
    pub fn from_figment(figment: &Figment) -> Self {
        match figment.extract::<AppConfig>() {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Invalid extension config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
