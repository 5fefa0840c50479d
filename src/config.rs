//! Configuration of argument checking.
//!
//! A [`CurryConfig`] is captured by every signature when it is defined and
//! decides how the curry engine validates arguments:
//!
//! - `check_types`: whether arguments are validated at all
//! - `validation`: whether each argument is validated as it is supplied
//!   ([`ValidationMode::Eager`]) or all arguments are validated together
//!   once the signature saturates ([`ValidationMode::Deferred`])
//!
//! # Environment Variables
//!
//! - `TYPED_CURRY_CHECK_TYPES`: `true`/`false`/`1`/`0` (default: `true`)
//! - `TYPED_CURRY_VALIDATION`: `eager`/`deferred` (default: `eager`)
//!
//! # Example
//!
//! ```rust,ignore
//! use typed_curry::config::CurryConfig;
//!
//! let config = CurryConfig::from_env()?;
//! println!("Type checking enabled: {}", config.check_types);
//! ```

use std::env;

/// Name of the variable that toggles type checking.
pub const CHECK_TYPES_VAR: &str = "TYPED_CURRY_CHECK_TYPES";

/// Name of the variable that selects the validation mode.
pub const VALIDATION_VAR: &str = "TYPED_CURRY_VALIDATION";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// When supplied arguments are validated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValidationMode {
    /// Validate each argument when it is accepted into a slot.
    #[default]
    Eager,
    /// Validate every slot, in slot order, when the last slot is filled.
    Deferred,
}

impl std::str::FromStr for ValidationMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "eager" => Ok(Self::Eager),
            "deferred" => Ok(Self::Deferred),
            other => Err(format!("expected `eager` or `deferred`, found `{other}`")),
        }
    }
}

/// Argument checking configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CurryConfig {
    /// Whether arguments are checked against their descriptors.
    pub check_types: bool,
    /// When arguments are checked.
    pub validation: ValidationMode,
}

impl Default for CurryConfig {
    fn default() -> Self {
        Self {
            check_types: true,
            validation: ValidationMode::Eager,
        }
    }
}

impl CurryConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub const fn new(check_types: bool, validation: ValidationMode) -> Self {
        Self {
            check_types,
            validation,
        }
    }

    /// A configuration that performs no argument checks.
    #[must_use]
    pub const fn unchecked() -> Self {
        Self::new(false, ValidationMode::Eager)
    }

    /// Returns a copy with the given validation mode.
    #[must_use]
    pub const fn with_validation(self, validation: ValidationMode) -> Self {
        Self { validation, ..self }
    }

    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to a value
    /// that is not valid Unicode or cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let check_types = read_var(CHECK_TYPES_VAR, env::var(CHECK_TYPES_VAR))?;
        let validation = read_var(VALIDATION_VAR, env::var(VALIDATION_VAR))?;

        Self::from_lookup(|key| match key {
            CHECK_TYPES_VAR => check_types.clone(),
            VALIDATION_VAR => validation.clone(),
            _ => None,
        })
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let check_types = lookup(CHECK_TYPES_VAR)
            .map_or(Ok(defaults.check_types), |value| {
                parse_flag(CHECK_TYPES_VAR, &value)
            })?;
        let validation = lookup(VALIDATION_VAR).map_or(Ok(defaults.validation), |value| {
            value.parse().map_err(|message| ConfigError::InvalidValue {
                key: VALIDATION_VAR.to_string(),
                message,
            })
        })?;

        Ok(Self {
            check_types,
            validation,
        })
    }
}

/// Only an absent variable counts as unset; a non-Unicode value is invalid.
fn read_var(
    key: &str,
    value: Result<String, env::VarError>,
) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "value is not valid Unicode".to_string(),
        }),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, found `{other}`"),
        }),
    }
}
