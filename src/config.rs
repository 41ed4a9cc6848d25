use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    pub base_url: String,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub request_timeout: Duration,
    /// Overrides the platform state directory for the persisted session/theme.
    #[serde(default)]
    pub state_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn new_from_file_and_env(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("base_url", "http://localhost:8000")?
            .set_default("request_timeout", 10)?;
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        builder
            .add_source(Environment::with_prefix("marquee"))
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Self>())
    }
}
