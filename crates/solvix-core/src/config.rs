use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`KernelConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse kernel config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("kernel config must be a JSON object")]
    NotAnObject,

    #[error("invalid kernel config: {0}")]
    Invalid(&'static str),
}

/// Tunables applied by [`Kernel`](crate::ops::Kernel).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct KernelConfig {
    /// A matrix whose determinant has magnitude `<=` this is treated as
    /// singular. `0.0` means only an exact zero counts.
    pub singular_epsilon: f64,

    /// Largest matrix order accepted for determinant and inverse. Cofactor
    /// expansion is `O(n!)`, so this keeps a single call bounded.
    pub max_dimension: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig {
            singular_epsilon: 0.0,
            max_dimension: 8,
        }
    }
}

impl KernelConfig {
    /// Parse a possibly partial JSON object.
    ///
    /// Missing fields keep their default. A field whose value has the wrong
    /// type is logged and also keeps its default; unknown fields are ignored.
    /// The merged result is validated.
    ///
    /// ```
    /// # use solvix_core::KernelConfig;
    /// let cfg = KernelConfig::from_json_str(r#"{ "max_dimension": 4 }"#).unwrap();
    /// assert_eq!(cfg.max_dimension, 4);
    /// assert_eq!(cfg.singular_epsilon, 0.0);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let partial: serde_json::Value = serde_json::from_str(json)?;
        if !partial.is_object() {
            return Err(ConfigError::NotAnObject);
        }
        let mut config = KernelConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    match serde_json::from_value(val.clone()) {
                        Ok(parsed) => config.$field = parsed,
                        Err(_) => warn!(
                            "kernel config: invalid value for '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        ),
                    }
                }
            };
        }

        load_or_default!(singular_epsilon);
        load_or_default!(max_dimension);

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.singular_epsilon.is_nan() || self.singular_epsilon < 0.0 {
            return Err(ConfigError::Invalid(
                "singular_epsilon must be a non-negative number",
            ));
        }
        if self.max_dimension == 0 {
            return Err(ConfigError::Invalid("max_dimension must be at least 1"));
        }
        Ok(())
    }
}
