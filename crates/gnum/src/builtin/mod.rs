//! Operation sets for the built-in kinds.
//!
//! All of them are zero-sized, so the registry hands out references to the
//! statics below instead of allocating.

mod big_int;
mod decimal;
mod float;
mod integer;

pub use big_int::BigIntOps;
pub use decimal::DecimalOps;
pub use float::{FixedFloat, FloatOps};
pub use integer::{FixedInt, IntegerOps};

// Static instances for 'static registry entries
pub(crate) static I8: IntegerOps<i8> = IntegerOps::new();
pub(crate) static I16: IntegerOps<i16> = IntegerOps::new();
pub(crate) static I32: IntegerOps<i32> = IntegerOps::new();
pub(crate) static I64: IntegerOps<i64> = IntegerOps::new();
pub(crate) static I128: IntegerOps<i128> = IntegerOps::new();
pub(crate) static ISIZE: IntegerOps<isize> = IntegerOps::new();
pub(crate) static U8: IntegerOps<u8> = IntegerOps::new();
pub(crate) static U16: IntegerOps<u16> = IntegerOps::new();
pub(crate) static U32: IntegerOps<u32> = IntegerOps::new();
pub(crate) static U64: IntegerOps<u64> = IntegerOps::new();
pub(crate) static U128: IntegerOps<u128> = IntegerOps::new();
pub(crate) static USIZE: IntegerOps<usize> = IntegerOps::new();
pub(crate) static F32: FloatOps<f32> = FloatOps::new();
pub(crate) static F64: FloatOps<f64> = FloatOps::new();
pub(crate) static DECIMAL: DecimalOps = DecimalOps;
pub(crate) static BIG_INT: BigIntOps = BigIntOps;
