//! Maps spent percentages onto the info/warning/error status classes.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Info,
    Warning,
    Error,
}

impl StatusClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Info => "info",
            StatusClass::Warning => "warning",
            StatusClass::Error => "error",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bounds (inclusive) of the info and warning classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusThresholds {
    pub warning_above: f64,
    pub error_above: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            warning_above: 50.0,
            error_above: 85.0,
        }
    }
}

impl StatusThresholds {
    pub fn classify(&self, percentage: f64) -> StatusClass {
        if percentage > self.error_above {
            StatusClass::Error
        } else if percentage > self.warning_above {
            StatusClass::Warning
        } else {
            StatusClass::Info
        }
    }
}

/// Classifies with the default 50/85 thresholds.
pub fn classify(percentage: f64) -> StatusClass {
    StatusThresholds::default().classify(percentage)
}
