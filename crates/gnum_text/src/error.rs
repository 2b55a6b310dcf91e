//! Text conversion errors.

use thiserror::Error;

/// Failure to parse or format a number.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty, or only whitespace the style allowed.
    #[error("input string was empty")]
    Empty,
    /// Input does not match the grammar of the requested style.
    #[error("input string was not in a correct format at byte {position}")]
    Invalid { position: usize },
    /// Input is well formed but outside the target kind's range.
    #[error("value was either too large or too small for the target kind")]
    Overflow,
    /// The hex specifier was combined with non-whitespace flags.
    #[error("hex number style cannot be combined with flags {bits:#x}")]
    InvalidStyles { bits: u32 },
    /// Format specifier is not understood or does not apply to the kind.
    #[error("format specifier `{spec}` is not supported")]
    UnsupportedFormat { spec: String },
}
