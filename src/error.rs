//! Error types.
//!
//! - `OfferError` is what the library (model + codec) returns.
//! - `AppError` is what the `compmax` binary reports: a message plus a process exit code.

use thiserror::Error;

use crate::domain::MetadataField;

/// Errors raised while constructing, evaluating, or encoding an offer.
///
/// Decoding a parameter map never produces one of these; bad numeric input
/// degrades to the field default instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OfferError {
    #[error("{field} must be a number between {min} and {max} (got {value})")]
    InvalidBounds {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("Trade-off position must be between 0 and 100 (got {0})")]
    InvalidPosition(i64),

    #[error("{message}")]
    MissingRequiredField {
        field: MetadataField,
        message: &'static str,
    },

    #[error("{message}")]
    InvalidEmailFormat {
        field: MetadataField,
        message: &'static str,
    },

    #[error("Invalid offer link: {0}")]
    InvalidLink(String),
}

impl OfferError {
    /// The metadata field a validation error points at, if any.
    pub fn field(&self) -> Option<MetadataField> {
        match self {
            OfferError::MissingRequiredField { field, .. }
            | OfferError::InvalidEmailFormat { field, .. } => Some(*field),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<OfferError> for AppError {
    fn from(err: OfferError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_errors_map_to_input_exit_code() {
        let err: AppError = OfferError::InvalidPosition(101).into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Trade-off position must be between 0 and 100 (got 101)");
    }

    #[test]
    fn validation_errors_point_at_their_field() {
        let err = OfferError::MissingRequiredField {
            field: MetadataField::Company,
            message: "Please enter the company name.",
        };
        assert_eq!(err.field(), Some(MetadataField::Company));
        assert_eq!(err.to_string(), "Please enter the company name.");
        assert_eq!(OfferError::InvalidPosition(-1).field(), None);
    }
}
