//! Width and sign facts about the primitive kinds, used by parse and format.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

/// A fixed-width primitive integer.
pub trait PrimitiveInt: Copy + fmt::UpperHex + fmt::LowerHex + 'static {
    /// Width in bits.
    const BITS: u32;
    /// Whether the type has negative values.
    const SIGNED: bool;

    /// Build a value from a sign and magnitude, `None` when out of range.
    fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self>;

    /// Reinterpret the low `BITS` bits as a value of this type.
    fn from_bits(bits: u128) -> Self;

    fn is_negative(self) -> bool;

    /// Absolute value, widened.
    fn magnitude(self) -> u128;
}

macro_rules! signed_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl PrimitiveInt for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = true;

                #[expect(
                    clippy::cast_possible_wrap,
                    reason = "magnitude <= 2^127, wrapping_neg maps 2^127 to i128::MIN"
                )]
                fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self> {
                    let wide = if negative {
                        if magnitude > i128::MIN.unsigned_abs() {
                            return None;
                        }
                        (magnitude as i128).wrapping_neg()
                    } else {
                        i128::try_from(magnitude).ok()?
                    };
                    <$t>::try_from(wide).ok()
                }

                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    reason = "bit reinterpretation is the point"
                )]
                fn from_bits(bits: u128) -> Self {
                    bits as $t
                }

                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn magnitude(self) -> u128 {
                    // i128 widening is lossless for every signed width
                    i128::from(self).unsigned_abs()
                }
            }
        )*
    };
}

macro_rules! unsigned_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl PrimitiveInt for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = false;

                fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self> {
                    if negative && magnitude != 0 {
                        return None;
                    }
                    <$t>::try_from(magnitude).ok()
                }

                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "bit reinterpretation is the point"
                )]
                fn from_bits(bits: u128) -> Self {
                    bits as $t
                }

                #[inline]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline]
                fn magnitude(self) -> u128 {
                    u128::from(self)
                }
            }
        )*
    };
}

signed_primitive!(i8, i16, i32, i64, i128);
unsigned_primitive!(u8, u16, u32, u64, u128);

// isize/usize have no lossless `From` into the 128-bit types on every
// target, so they go through their fixed-width twins.

impl PrimitiveInt for isize {
    const BITS: u32 = isize::BITS;
    const SIGNED: bool = true;

    fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self> {
        let wide = i64::from_magnitude(negative, magnitude)?;
        isize::try_from(wide).ok()
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        reason = "bit reinterpretation is the point"
    )]
    fn from_bits(bits: u128) -> Self {
        bits as isize
    }

    #[inline]
    fn is_negative(self) -> bool {
        self < 0
    }

    #[inline]
    fn magnitude(self) -> u128 {
        self.unsigned_abs() as u128
    }
}

impl PrimitiveInt for usize {
    const BITS: u32 = usize::BITS;
    const SIGNED: bool = false;

    fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self> {
        let wide = u64::from_magnitude(negative, magnitude)?;
        usize::try_from(wide).ok()
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "bit reinterpretation is the point"
    )]
    fn from_bits(bits: u128) -> Self {
        bits as usize
    }

    #[inline]
    fn is_negative(self) -> bool {
        false
    }

    #[inline]
    fn magnitude(self) -> u128 {
        self as u128
    }
}

/// A binary floating-point primitive.
pub trait PrimitiveFloat: Float + FromStr + fmt::LowerExp + 'static {
    /// Decimal exponent at which the general format switches to scientific
    /// notation.
    const SCIENTIFIC_THRESHOLD: i32;
}

impl PrimitiveFloat for f32 {
    const SCIENTIFIC_THRESHOLD: i32 = 7;
}

impl PrimitiveFloat for f64 {
    const SCIENTIFIC_THRESHOLD: i32 = 15;
}
