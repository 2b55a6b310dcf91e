//! Gnum Text - number styles, culture info, and text conversion for gnum.
//!
//! This crate provides:
//! - `NumberStyles` flags controlling which lexical elements a parse accepts
//! - `NumberFormat` culture info (separators, sign and special-value symbols)
//! - A style-driven scanner shared by every numeric kind
//! - Per-kind parsing (`parse_int`, `parse_float`, `parse_decimal`, `parse_big_int`)
//! - Per-kind formatting with the standard specifiers `G D X F N E`
//!
//! # Round Trip
//!
//! The default format of every kind parses back to the same value under the
//! kind's default style and the invariant culture:
//!
//! ```
//! use gnum_text::{format_float, parse_float};
//!
//! let text = format_float(0.1_f64, None, None).unwrap();
//! assert_eq!(parse_float::<f64>(&text, None, None).unwrap(), 0.1);
//! ```
//!
//! Nothing here knows about the operations registry; the `gnum` crate calls
//! into these functions from its per-kind operation sets.

mod digits;
mod error;
mod format;
mod info;
mod parse;
mod primitive;
mod scan;
mod styles;

pub use error::ParseError;
pub use format::{
    format_big_int, format_decimal, format_float, format_int, FormatKind, FormatSpec,
};
pub use info::NumberFormat;
pub use parse::{parse_big_int, parse_decimal, parse_float, parse_int};
pub use primitive::{PrimitiveFloat, PrimitiveInt};
pub use styles::NumberStyles;
