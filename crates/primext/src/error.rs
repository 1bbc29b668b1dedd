//! Conversion errors.

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised by fallible conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The input could not be resolved to a declared enum member and no
    /// default was supplied.
    #[error("can't convert {param} '{input}' to enum {target}")]
    InvalidEnumValue {
        /// Name of the offending parameter.
        param: SmolStr,
        /// Type name of the target enum.
        target: SmolStr,
        /// The rejected input, stringified. Empty when the input was absent.
        input: SmolStr,
    },
}

impl ConversionError {
    pub(crate) fn invalid_enum_value(
        param: &str,
        target: &str,
        input: impl Into<SmolStr>,
    ) -> Self {
        Self::InvalidEnumValue {
            param: SmolStr::new(param),
            target: SmolStr::new(target),
            input: input.into(),
        }
    }

    /// Returns the name of the parameter that failed to convert.
    #[must_use]
    pub fn param(&self) -> &str {
        match self {
            Self::InvalidEnumValue { param, .. } => param,
        }
    }

    /// Returns the type name of the conversion target.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::InvalidEnumValue { target, .. } => target,
        }
    }
}

/// Result alias for conversions in this crate.
pub type Result<T, E = ConversionError> = std::result::Result<T, E>;
