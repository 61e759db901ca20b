use serde::Deserialize;
use shipdesk_carrier::ShipperProfile;
use shipdesk_order::{CommissionBasis, RoundingPolicy};
use std::env;
use std::path::PathBuf;

use crate::writer::DelimiterPolicy;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub shipper: ShipperProfile,
    pub export: ExportConfig,
    pub commission: CommissionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    pub delimiter_policy: DelimiterPolicy,
    pub out_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter_policy: DelimiterPolicy::default(),
            out_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CommissionConfig {
    pub basis: CommissionBasis,
    pub rounding: RoundingPolicy,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "shipdesk=info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, e.g. config/production.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. SHIPDESK_EXPORT__DELIMITER_POLICY=quoted
            .add_source(
                config::Environment::with_prefix("SHIPDESK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }
}
