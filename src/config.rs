use chrono::NaiveDate;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use foodservice_inventory::DEFAULT_REORDER_QUANTITY;
use foodservice_shared::parse_date;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub clinic: ClinicConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Units proposed when a low-stock item is reordered.
    #[serde(default = "default_reorder_quantity")]
    pub reorder_quantity: f64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            reorder_quantity: default_reorder_quantity(),
        }
    }
}

fn default_reorder_quantity() -> f64 {
    DEFAULT_REORDER_QUANTITY
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClinicConfig {
    /// Fixed reference date (`YYYY-MM-DD`) used instead of the system clock.
    #[serde(default)]
    pub today: Option<String>,
}

impl ClinicConfig {
    pub fn today(&self) -> foodservice_shared::Result<Option<NaiveDate>> {
        self.today.as_deref().map(parse_date).transpose()
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOODSERVICE__INVENTORY__REORDER_QUANTITY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("observability.log_level", default_log_level())?
            .set_default("inventory.reorder_quantity", default_reorder_quantity())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional - ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOODSERVICE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let reorder_quantity = self.inventory.reorder_quantity;
        if reorder_quantity.is_nan() || reorder_quantity <= 0.0 {
            return Err("Inventory reorder_quantity must be greater than 0".to_string());
        }

        if let Err(e) = self.clinic.today() {
            return Err(format!("Clinic today is not a valid date: {e}"));
        }

        Ok(())
    }
}
