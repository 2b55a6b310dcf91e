//! Gnum - generic numeric operations dispatched through a per-type registry.
//!
//! This crate provides:
//! - The operation contract every numeric type implements (`NumericOps<T>`)
//! - Operation sets for the built-in kinds: `i8`..`i128`, `isize`, `u8`..`u128`,
//!   `usize`, `f32`, `f64`, `rust_decimal::Decimal` and `num_bigint::BigInt`
//! - Adapters lifting any registered type to `Option<T>`, `Number<T>`, or a
//!   relabeled user type
//! - A registry resolving `&'static dyn NumericOps<T>` by type
//! - `Number<T>`, a wrapper with operator overloads for generic code
//!
//! # Architecture
//!
//! Generic code never branches on the concrete type. It asks the registry
//! for `T`'s operation set and calls through it:
//!
//! ```
//! use gnum::{generic, MidpointRounding, Number};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(generic::sum(&[1_u8, 2, 3]), Ok(6));
//!
//! let price = Number::new(Decimal::new(325, 2));
//! let rounded = price.try_round(1, MidpointRounding::ToEven).unwrap();
//! assert_eq!(rounded.to_string(), "3.2");
//! ```
//!
//! Each kind keeps its native semantics. Fixed-width integers wrap, floats
//! follow IEEE-754, `Decimal` and `BigInt` report division by zero. What a
//! kind does not define fails with `NumericError::OperationNotSupported`
//! instead of being approximated.
//!
//! # Extension
//!
//! New types join by registering a complete `NumericOps<T>` (or a
//! `Relabeling` onto an existing type). Their `Option` and `Number` shapes
//! become resolvable at the same time.

mod adapters;
mod builtin;
mod contract;
mod error;
mod kind;
mod number;
mod registry;
mod rounding;
mod value;

pub mod generic;

pub use adapters::{NullableOps, NumberOps, RelabeledOps, Relabeling};
pub use builtin::{BigIntOps, DecimalOps, FixedFloat, FixedInt, FloatOps, IntegerOps};
pub use contract::NumericOps;
pub use error::{NumericError, NumericResult};
pub use kind::NumericKind;
pub use number::Number;
pub use registry::OpsRegistry;
pub use rounding::MidpointRounding;
pub use value::NumericValue;

pub use gnum_text::{NumberFormat, NumberStyles, ParseError};
