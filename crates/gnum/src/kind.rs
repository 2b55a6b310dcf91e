//! Kind tags for the built-in numeric representations.

use std::fmt;

/// Which representation an operation set works on.
///
/// User-registered types report `Custom` unless they relabel a built-in,
/// in which case they report the built-in's kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Decimal,
    BigInt,
    Custom,
}

impl NumericKind {
    /// Every built-in kind, in declaration order.
    pub const BUILTIN: [NumericKind; 16] = [
        NumericKind::I8,
        NumericKind::I16,
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::I128,
        NumericKind::Isize,
        NumericKind::U8,
        NumericKind::U16,
        NumericKind::U32,
        NumericKind::U64,
        NumericKind::U128,
        NumericKind::Usize,
        NumericKind::F32,
        NumericKind::F64,
        NumericKind::Decimal,
        NumericKind::BigInt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::I128 => "i128",
            NumericKind::Isize => "isize",
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::U128 => "u128",
            NumericKind::Usize => "usize",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
            NumericKind::Decimal => "decimal",
            NumericKind::BigInt => "big integer",
            NumericKind::Custom => "custom numeric type",
        }
    }

    /// Whether values of the kind are always whole numbers.
    pub fn is_integral(self) -> bool {
        !matches!(
            self,
            NumericKind::F32 | NumericKind::F64 | NumericKind::Decimal | NumericKind::Custom
        )
    }

    pub fn is_signed(self) -> bool {
        !matches!(
            self,
            NumericKind::U8
                | NumericKind::U16
                | NumericKind::U32
                | NumericKind::U64
                | NumericKind::U128
                | NumericKind::Usize
        )
    }

    pub fn is_floating(self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64)
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
