use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    amounts::{CurrencyCode, FormatOptions, LocaleConfig},
    core::{
        status::StatusThresholds,
        utils::{app_data_dir, config_file_in, ensure_dir},
    },
    domain::ForecastSettings,
    errors::{InsightError, Result},
};

const TMP_SUFFIX: &str = "tmp";
pub const DEFAULT_LOG_FILTER: &str = "budget_insights=info";

/// User preferences for rendering amounts, forecasting, and logging.
///
/// Every section falls back to its default, so a partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub locale: LocaleConfig,
    pub currency: CurrencyCode,
    pub format: FormatOptions,
    pub forecast: ForecastSettings,
    pub thresholds: StatusThresholds,
    pub logging: LoggingConfig,
}

impl Config {
    /// Rejects settings the forecast and status layers cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.thresholds.warning_above > self.thresholds.error_above {
            return Err(InsightError::Config(format!(
                "warning threshold {} exceeds error threshold {}",
                self.thresholds.warning_above, self.thresholds.error_above
            )));
        }
        let forecast = &self.forecast;
        for (name, value) in [
            ("alpha", forecast.alpha),
            ("historyWeight", forecast.history_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(InsightError::Config(format!(
                    "forecast {name} must be within 0 and 1, got {value}"
                )));
            }
        }
        if !forecast.closed_ratio.is_finite() || forecast.closed_ratio <= 0.0 {
            return Err(InsightError::Config(format!(
                "forecast closedRatio must be positive, got {}",
                forecast.closed_ratio
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    /// Base `tracing` filter; `RUST_LOG` directives override it per target.
    pub filter: String,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.into(),
            with_target: false,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Loads the stored configuration, or the defaults when none was saved.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|err| InsightError::Config(format!("{}: {err}", self.path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
