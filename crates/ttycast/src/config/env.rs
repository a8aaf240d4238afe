//! Environment-based configuration.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{CastError, Result};

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "TTYCAST";

/// Environment variable reader.
///
/// Reads the process environment unless a fixed set of variables was
/// supplied with [`EnvConfig::from_vars`].
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
    /// Fixed variables used instead of the process environment.
    vars: Option<HashMap<String, String>>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Create a new environment config reader.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            vars: None,
        }
    }

    /// Create a reader over a fixed set of variables.
    #[must_use]
    pub fn from_vars<I, K, V>(prefix: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Build the full environment variable name.
    fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Get a string value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let var_name = self.var_name(name);
        match &self.vars {
            Some(vars) => vars.get(&var_name).cloned(),
            None => std::env::var(&var_name).ok(),
        }
    }

    /// Get a parsed value, failing if the variable is set but invalid.
    pub fn parse_checked<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(name)
            .map(|raw| {
                raw.trim().parse().map_err(|e| {
                    CastError::config(format!("{}='{raw}': {e}", self.var_name(name)))
                })
            })
            .transpose()
    }

    /// Get a boolean value, failing if the variable is set to anything
    /// other than a recognised on or off word.
    pub fn bool_checked(&self, name: &str) -> Result<Option<bool>> {
        self.get(name)
            .map(|raw| match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" | "enabled" => Ok(true),
                "0" | "false" | "no" | "off" | "disabled" => Ok(false),
                _ => Err(CastError::config(format!(
                    "{}='{raw}': expected a boolean",
                    self.var_name(name)
                ))),
            })
            .transpose()
    }
}

/// Recognised variable names, without the prefix.
pub mod vars {
    /// Terminal width.
    pub const WIDTH: &str = "WIDTH";
    /// Terminal height.
    pub const HEIGHT: &str = "HEIGHT";
    /// Header command.
    pub const COMMAND: &str = "COMMAND";
    /// Header title.
    pub const TITLE: &str = "TITLE";
    /// Strict header handling.
    pub const STRICT: &str = "STRICT";
    /// Pretty-printed JSON.
    pub const PRETTY: &str = "PRETTY";
    /// Output format.
    pub const FORMAT: &str = "FORMAT";
}
