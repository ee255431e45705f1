//! Bus configuration.
//!
//! [`BusConfig`] can be built in code or loaded from a TOML file:
//!
//! ```toml
//! # -1 disables the limit
//! subscription_limit = 25
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

/// Default number used for [`SubscriptionLimit::Bounded`]
pub const DEFAULT_SUBSCRIPTION_LIMIT: usize = 10;

/// Ceiling on the number of handlers a single event may hold.
///
/// A bound of `n` admits `n - 1` handlers per event: a subscription is
/// rejected once the count after appending would reach the bound. The limit
/// is shared by every event on a bus. In configuration files and in
/// `Display` output, [`SubscriptionLimit::Unlimited`] is written as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum SubscriptionLimit {
    Bounded(usize),
    Unlimited,
}

impl SubscriptionLimit {
    /// Raw value standing for [`SubscriptionLimit::Unlimited`]
    pub const UNLIMITED: i64 = -1;

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

impl Default for SubscriptionLimit {
    fn default() -> Self {
        Self::Bounded(DEFAULT_SUBSCRIPTION_LIMIT)
    }
}

impl From<usize> for SubscriptionLimit {
    fn from(limit: usize) -> Self {
        Self::Bounded(limit)
    }
}

impl TryFrom<i64> for SubscriptionLimit {
    type Error = ConfigError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            Self::UNLIMITED => Ok(Self::Unlimited),
            raw => usize::try_from(raw)
                .map(Self::Bounded)
                .map_err(|_| ConfigError::InvalidLimit(raw)),
        }
    }
}

impl From<SubscriptionLimit> for i64 {
    fn from(limit: SubscriptionLimit) -> Self {
        match limit {
            SubscriptionLimit::Bounded(limit) => i64::try_from(limit).unwrap_or(i64::MAX),
            SubscriptionLimit::Unlimited => SubscriptionLimit::UNLIMITED,
        }
    }
}

impl fmt::Display for SubscriptionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i64::from(*self))
    }
}

/// Settings applied to a new [`crate::EventBus`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusConfig {
    /// Per-event handler ceiling shared by all events on the bus
    #[serde(default)]
    pub subscription_limit: SubscriptionLimit,
}

impl BusConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BusConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads configuration from a TOML file.
    ///
    /// If the file doesn't exist, writes the default configuration to `path`
    /// and returns it.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            let default_config = BusConfig::default();
            std::fs::write(path, default_config.to_toml_string()?)?;
            info!("Created default bus configuration file: {}", path.display());
            Ok(default_config)
        }
    }

    /// Rejects bounds that could never admit a handler.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.subscription_limit {
            SubscriptionLimit::Bounded(limit) if limit < 2 => Err(ConfigError::Invalid(format!(
                "subscription_limit {limit} admits no handlers; use 2 or more, or -1 for unlimited"
            ))),
            _ => Ok(()),
        }
    }
}
