use std::fmt;

use thiserror::Error;

/// Request parameter a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Limit,
    Offset,
    OrderField,
    OrderBy,
}

impl Parameter {
    pub fn as_str(self) -> &'static str {
        match self {
            Parameter::Limit => "limit",
            Parameter::Offset => "offset",
            Parameter::OrderField => "order_field",
            Parameter::OrderBy => "order_by",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a parameter was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("negative value {value}")]
    NegativeValue { value: i64 },

    #[error("not an integer: '{raw}'")]
    NotAnInteger { raw: String },

    #[error("unknown order field '{raw}' (expected Id, Age or Name)")]
    UnknownOrderField { raw: String },

    #[error("unknown order direction '{raw}' (expected 1 or -1)")]
    UnknownOrderDirection { raw: String },
}

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserSearchError {
    #[error("Invalid parameter {parameter}: {reason}")]
    InvalidParameter {
        parameter: Parameter,
        reason: InvalidReason,
    },
}

impl UserSearchError {
    pub fn invalid_parameter(parameter: Parameter, reason: InvalidReason) -> Self {
        Self::InvalidParameter { parameter, reason }
    }

    pub fn parameter(&self) -> Parameter {
        match self {
            Self::InvalidParameter { parameter, .. } => *parameter,
        }
    }
}

impl From<crate::domain::error::DomainError> for UserSearchError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            NegativeValue { field, value } => {
                Self::invalid_parameter(field, InvalidReason::NegativeValue { value })
            }
            NotAnInteger { field, raw } => {
                Self::invalid_parameter(field, InvalidReason::NotAnInteger { raw })
            }
            UnknownOrderField { raw } => Self::invalid_parameter(
                Parameter::OrderField,
                InvalidReason::UnknownOrderField { raw },
            ),
            UnknownOrderDirection { raw } => Self::invalid_parameter(
                Parameter::OrderBy,
                InvalidReason::UnknownOrderDirection { raw },
            ),
        }
    }
}
