use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub storefront: StorefrontConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorefrontConfig {
    /// Listings fetched per page of the discovery feed.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Simulated payment round-trip before the reservation commit.
    #[serde(default = "default_payment_delay_ms")]
    pub payment_delay_ms: u64,
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_page_size() -> u32 {
    12
}

fn default_payment_delay_ms() -> u64 {
    2000
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides, e.g. WAYFARE__API__BASE_URL
            .add_source(config::Environment::with_prefix("WAYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.storefront.payment_delay_ms)
    }
}
