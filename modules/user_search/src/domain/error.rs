use thiserror::Error;

use crate::contract::error::Parameter;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: Parameter, value: i64 },

    #[error("{field} is not an integer: '{raw}'")]
    NotAnInteger { field: Parameter, raw: String },

    #[error("Unknown order field: '{raw}'")]
    UnknownOrderField { raw: String },

    #[error("Unknown order direction: '{raw}'")]
    UnknownOrderDirection { raw: String },
}

impl DomainError {
    pub fn negative_value(field: Parameter, value: i64) -> Self {
        Self::NegativeValue { field, value }
    }

    pub fn not_an_integer(field: Parameter, raw: impl Into<String>) -> Self {
        Self::NotAnInteger {
            field,
            raw: raw.into(),
        }
    }

    pub fn unknown_order_field(raw: impl Into<String>) -> Self {
        Self::UnknownOrderField { raw: raw.into() }
    }

    pub fn unknown_order_direction(raw: impl Into<String>) -> Self {
        Self::UnknownOrderDirection { raw: raw.into() }
    }

    /// Map a numeric parse failure for `field`.
    pub fn from_number(field: Parameter, err: query_core::Error) -> Self {
        match err {
            query_core::Error::NegativeValue(value) => Self::negative_value(field, value),
            query_core::Error::InvalidInteger(raw) | query_core::Error::InvalidDirection(raw) => {
                Self::not_an_integer(field, raw)
            }
        }
    }
}
