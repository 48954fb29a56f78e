//! Library-wide configuration
//!
//! The default tolerance used by [`Vector::epsilon_equals`](crate::Vector::epsilon_equals)
//! is configuration rather than a hard-coded constant. It is resolved once,
//! in order of precedence:
//!
//! 1. an explicit [`init`] call made before first use
//! 2. the `VECTORKIT_EPSILON` environment variable
//! 3. [`Config::default`]

use crate::error::{Error, Result};
use std::sync::OnceLock;

/// Environment variable consulted for the default tolerance
pub const EPSILON_ENV_VAR: &str = "VECTORKIT_EPSILON";

/// Default tolerance for approximate comparisons
pub const DEFAULT_EPSILON: f64 = 1e-7;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Library configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Tolerance used when no explicit tolerance is given
    pub epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Config {
    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    /// Build a configuration from the environment, falling back to defaults
    ///
    /// Unparseable or invalid values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(EPSILON_ENV_VAR) {
            match raw.trim().parse::<f64>() {
                Ok(epsilon) if (Config { epsilon }).validate().is_ok() => config.epsilon = epsilon,
                _ => log::warn!("Ignoring invalid {EPSILON_ENV_VAR}={raw:?}"),
            }
        }
        config
    }
}

/// Install the library configuration
///
/// Fails if the configuration is invalid or if it has already been resolved,
/// either by an earlier `init` or by first use.
pub fn init(config: Config) -> Result<()> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::InvalidParameter("configuration already initialised".to_string()))?;
    log::debug!("vectorkit configured with epsilon={}", config.epsilon);
    Ok(())
}

/// The active configuration, resolving it on first call
pub fn get() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config = Config::from_env();
        log::debug!("vectorkit using epsilon={}", config.epsilon);
        config
    })
}

/// The active default tolerance
pub fn epsilon() -> f64 {
    get().epsilon
}
