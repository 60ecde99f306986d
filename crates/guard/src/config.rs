//! Process-wide guard configuration.
//!
//! Two values are shared by every guard call: the default floating-point
//! tolerance used when a caller opts in with [`Tolerance::Configured`], and
//! the parameter name reported for arguments created with
//! [`Arg::anonymous`].
//!
//! The configuration lives in an `ArcSwap`: reads are lock-free snapshots
//! and [`GuardConfig::install`] replaces the whole value atomically. Install
//! once at startup; a guard that is already running keeps the snapshot it
//! loaded.
//!
//! ```rust,ignore
//! use bulwark_guard::config::GuardConfig;
//!
//! GuardConfig::from_env()?.install()?;
//! ```
//!
//! [`Tolerance::Configured`]: crate::guards::Tolerance::Configured
//! [`Arg::anonymous`]: crate::foundation::Arg::anonymous

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default absolute tolerance for floating-point equality.
pub const DEFAULT_FLOAT_TOLERANCE: f64 = 0.000_01;

/// Default parameter name for arguments without a captured name.
pub const DEFAULT_ARGUMENT_NAME: &str = "argument";

/// Environment variable overriding [`GuardConfig::float_tolerance`].
pub const ENV_FLOAT_TOLERANCE: &str = "BULWARK_FLOAT_TOLERANCE";

/// Environment variable overriding [`GuardConfig::default_argument_name`].
pub const ENV_DEFAULT_ARGUMENT_NAME: &str = "BULWARK_DEFAULT_ARGUMENT_NAME";

static CONFIG: LazyLock<ArcSwap<GuardConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(GuardConfig::default()));

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while building or installing a [`GuardConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The tolerance is negative, NaN or infinite.
    #[error("float tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// The default argument name is blank.
    #[error("default argument name must not be blank")]
    BlankArgumentName,

    /// An environment variable could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },

    /// A JSON document could not be deserialized.
    #[error("invalid guard configuration: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// CONFIG
// ============================================================================

/// Shared settings read by guards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Absolute tolerance for [`Tolerance::Configured`](crate::guards::Tolerance::Configured).
    pub float_tolerance: f64,
    /// Parameter name reported for anonymous arguments.
    pub default_argument_name: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            float_tolerance: DEFAULT_FLOAT_TOLERANCE,
            default_argument_name: DEFAULT_ARGUMENT_NAME.to_owned(),
        }
    }
}

impl GuardConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default floating-point tolerance.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_float_tolerance(mut self, tolerance: f64) -> Self {
        self.float_tolerance = tolerance;
        self
    }

    /// Sets the default argument name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_argument_name(mut self, name: impl Into<String>) -> Self {
        self.default_argument_name = name.into();
        self
    }

    /// Checks the invariants every installed configuration satisfies.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.float_tolerance.is_finite() || self.float_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.float_tolerance));
        }
        if self.default_argument_name.trim().is_empty() {
            return Err(ConfigError::BlankArgumentName);
        }
        Ok(())
    }

    /// Builds a configuration from the defaults overridden by environment
    /// variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_FLOAT_TOLERANCE) {
            config.float_tolerance =
                raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    var: ENV_FLOAT_TOLERANCE,
                    value: raw.clone(),
                })?;
        }

        if let Ok(name) = std::env::var(ENV_DEFAULT_ARGUMENT_NAME) {
            config.default_argument_name = name;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates and installs this configuration for the whole process.
    pub fn install(self) -> Result<(), ConfigError> {
        self.validate()?;
        tracing::debug!(
            float_tolerance = self.float_tolerance,
            default_argument_name = %self.default_argument_name,
            "installing guard configuration"
        );
        CONFIG.store(Arc::new(self));
        Ok(())
    }

    /// Returns a snapshot of the installed configuration.
    #[inline]
    pub fn current() -> Arc<Self> {
        CONFIG.load_full()
    }

    /// Restores the default configuration.
    pub fn reset() {
        CONFIG.store(Arc::new(Self::default()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GuardConfig::default();
        assert_eq!(config.float_tolerance, 0.00001);
        assert_eq!(config.default_argument_name, "argument");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tolerance in [-1.0, f64::NAN, f64::INFINITY] {
            let err = GuardConfig::new().with_float_tolerance(tolerance).validate();
            assert!(matches!(err, Err(ConfigError::InvalidTolerance(_))));
        }
    }

    #[test]
    fn rejects_blank_name() {
        let err = GuardConfig::new().with_default_argument_name("  ").validate();
        assert!(matches!(err, Err(ConfigError::BlankArgumentName)));
    }

    #[test]
    fn json_fills_missing_fields() {
        let config = GuardConfig::from_json(r#"{ "float_tolerance": 0.5 }"#).unwrap();
        assert_eq!(config.float_tolerance, 0.5);
        assert_eq!(config.default_argument_name, "argument");
    }

    #[test]
    fn json_is_validated() {
        let err = GuardConfig::from_json(r#"{ "float_tolerance": -0.5 }"#);
        assert!(matches!(err, Err(ConfigError::InvalidTolerance(_))));

        let err = GuardConfig::from_json("not json");
        assert!(matches!(err, Err(ConfigError::Json(_))));
    }

    #[test]
    fn invalid_config_is_never_installed() {
        let before = GuardConfig::current();
        assert!(GuardConfig::new().with_float_tolerance(-1.0).install().is_err());
        assert_eq!(*GuardConfig::current(), *before);
    }
}
