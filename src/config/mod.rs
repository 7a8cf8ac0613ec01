//! Configuration loading and management

use crate::core::validation::validators::{
    CONTACT_DIGIT_BOUNDS, ISO_DATE_FORMAT, POSTAL_CODE_BOUNDS,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Inclusive numeric bounds for a validated field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check whether `value` lies within `[min, max]`
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Tunable parameters for the validation primitives
///
/// Every key is optional in YAML; absent keys keep their default.
///
/// ```yaml
/// postal_code:
///   min: 1000
///   max: 9999
/// date_format: "%Y-%m-%d"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Accepted postal codes (four digits by default)
    pub postal_code: Bounds,

    /// Accepted value for the single-digit contact check
    pub contact_digit: Bounds,

    /// `chrono` format string invoice dates must parse with
    pub date_format: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            postal_code: POSTAL_CODE_BOUNDS,
            contact_digit: CONTACT_DIGIT_BOUNDS,
            date_format: ISO_DATE_FORMAT.to_string(),
        }
    }
}

impl ValidationConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no input could ever satisfy
    pub fn validate(&self) -> Result<()> {
        if self.postal_code.min > self.postal_code.max {
            bail!(
                "postal_code bounds are inverted ({} > {})",
                self.postal_code.min,
                self.postal_code.max
            );
        }
        if self.contact_digit.min > self.contact_digit.max {
            bail!(
                "contact_digit bounds are inverted ({} > {})",
                self.contact_digit.min,
                self.contact_digit.max
            );
        }
        if self.date_format.trim().is_empty() {
            bail!("date_format must not be empty");
        }
        Ok(())
    }
}
