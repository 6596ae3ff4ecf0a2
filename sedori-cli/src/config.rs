//! TOML configuration for the interactive calculator.
//!
//! Every section and key is optional; missing values fall back to the
//! defaults below. Command-line flags override the file.
//!
//! ```toml
//! [defaults]
//! shipping_cost = 215
//! platform_fee_percent = 10.0
//! shop_point_percent = 10.0
//! card_point_percent = 7.0
//!
//! [export]
//! format = "xlsx"
//! output_dir = "."
//! base_name = "sedori_profit_data"
//!
//! [logging]
//! level = "info"
//! file = "sedori.log"
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use sedori_core::export::DEFAULT_BASE_NAME;
use sedori_core::{
    DEFAULT_CARD_POINT_PERCENT, DEFAULT_PLATFORM_FEE_PERCENT, DEFAULT_SHIPPING_COST,
    DEFAULT_SHOP_POINT_PERCENT, ExportFormat,
};
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "sedori.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Values pre-filled in the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormDefaults {
    pub shipping_cost: i64,
    pub platform_fee_percent: Decimal,
    pub shop_point_percent: Decimal,
    pub card_point_percent: Decimal,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            shipping_cost: DEFAULT_SHIPPING_COST,
            platform_fee_percent: DEFAULT_PLATFORM_FEE_PERCENT,
            shop_point_percent: DEFAULT_SHOP_POINT_PERCENT,
            card_point_percent: DEFAULT_CARD_POINT_PERCENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    pub format: ExportFormat,
    pub output_dir: PathBuf,
    pub base_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::Xlsx,
            output_dir: PathBuf::from("."),
            base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// A bare level or any `EnvFilter` directive.
    pub level: String,
    /// Log file, appended to. No file logging when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub defaults: FormDefaults,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads and validates the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads `path` when given. Otherwise loads [`DEFAULT_CONFIG_FILE`] if it
    /// exists, or returns the built-in defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.shipping_cost < 0 {
            return Err(ConfigError::Invalid {
                key: "defaults.shipping_cost",
                reason: format!("must not be negative, got {}", self.defaults.shipping_cost),
            });
        }
        let percents = [
            ("defaults.platform_fee_percent", self.defaults.platform_fee_percent),
            ("defaults.shop_point_percent", self.defaults.shop_point_percent),
            ("defaults.card_point_percent", self.defaults.card_point_percent),
        ];
        for (key, value) in percents {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(ConfigError::Invalid {
                    key,
                    reason: format!("must be between 0 and 100, got {value}"),
                });
            }
        }
        if self.export.base_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "export.base_name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
