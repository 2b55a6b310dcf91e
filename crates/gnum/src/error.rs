//! Error taxonomy for numeric operations.
//!
//! Every fallible operation returns `NumericResult`. Variants carry the
//! operation name or kind so callers can match on the failure instead of
//! parsing messages.

use gnum_text::ParseError;
use thiserror::Error;

use crate::kind::NumericKind;

/// Result of a numeric operation.
pub type NumericResult<T> = Result<T, NumericError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumericError {
    /// No operation set is registered for the type.
    #[error("type `{type_name}` is not a supported numeric type")]
    UnsupportedType { type_name: &'static str },

    /// The kind does not define the operation (bitwise on floats, negation
    /// on unsigned kinds, ...).
    #[error("operation `{operation}` is not supported for {kind}")]
    OperationNotSupported {
        operation: &'static str,
        kind: NumericKind,
    },

    #[error("arithmetic overflow in `{operation}`")]
    Overflow { operation: &'static str },

    #[error("attempt to divide by zero")]
    DivideByZero,

    #[error(transparent)]
    Format(ParseError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The type already has an operation set.
    #[error("type `{type_name}` already has numeric operations registered")]
    AlreadyRegistered { type_name: &'static str },
}

impl NumericError {
    #[cold]
    pub fn unsupported_type<T: ?Sized>() -> Self {
        NumericError::UnsupportedType {
            type_name: std::any::type_name::<T>(),
        }
    }

    #[cold]
    pub fn not_supported(operation: &'static str, kind: NumericKind) -> Self {
        NumericError::OperationNotSupported { operation, kind }
    }

    #[cold]
    pub fn overflow(operation: &'static str) -> Self {
        NumericError::Overflow { operation }
    }

    #[cold]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        NumericError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Failures `try_parse` reports as `None`.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, NumericError::Format(_) | NumericError::Overflow { .. })
    }
}

impl From<ParseError> for NumericError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Overflow => NumericError::overflow("parse"),
            ParseError::InvalidStyles { bits } => NumericError::invalid_argument(format!(
                "hex number style cannot be combined with flags {bits:#x}"
            )),
            other => NumericError::Format(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_errors_map_to_kinds() {
        assert_eq!(
            NumericError::from(ParseError::Overflow),
            NumericError::Overflow { operation: "parse" }
        );
        assert!(matches!(
            NumericError::from(ParseError::InvalidStyles { bits: 519 }),
            NumericError::InvalidArgument { .. }
        ));
        assert_eq!(
            NumericError::from(ParseError::Empty),
            NumericError::Format(ParseError::Empty)
        );
    }

    #[test]
    fn parse_failures_are_recoverable() {
        assert!(NumericError::from(ParseError::Empty).is_parse_failure());
        assert!(NumericError::overflow("parse").is_parse_failure());
        assert!(!NumericError::DivideByZero.is_parse_failure());
    }

    #[test]
    fn messages() {
        assert_eq!(
            NumericError::not_supported("negate", NumericKind::U32).to_string(),
            "operation `negate` is not supported for u32"
        );
        assert_eq!(
            NumericError::unsupported_type::<String>().to_string(),
            "type `alloc::string::String` is not a supported numeric type"
        );
    }
}
