//! Parse style flags.

use bitflags::bitflags;

bitflags! {
    /// Lexical elements a parse may accept.
    ///
    /// Individual `ALLOW_*` flags combine freely; the composite constants
    /// (`INTEGER`, `NUMBER`, `FLOAT`, ...) are the per-kind defaults.
    /// `ALLOW_HEX_SPECIFIER` may only be combined with the two whitespace
    /// flags.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NumberStyles: u32 {
        /// Leading whitespace (`\t`..`\r` and space).
        const ALLOW_LEADING_WHITE = 1 << 0;
        /// Trailing whitespace.
        const ALLOW_TRAILING_WHITE = 1 << 1;
        /// A leading positive or negative sign.
        const ALLOW_LEADING_SIGN = 1 << 2;
        /// A trailing positive or negative sign.
        const ALLOW_TRAILING_SIGN = 1 << 3;
        /// Parentheses enclosing a negative value.
        const ALLOW_PARENTHESES = 1 << 4;
        /// A decimal separator.
        const ALLOW_DECIMAL_POINT = 1 << 5;
        /// Group separators in the integral part.
        const ALLOW_THOUSANDS = 1 << 6;
        /// An `e`/`E` exponent with optional sign.
        const ALLOW_EXPONENT = 1 << 7;
        /// The culture's currency symbol.
        const ALLOW_CURRENCY_SYMBOL = 1 << 8;
        /// Hexadecimal digits without prefix.
        const ALLOW_HEX_SPECIFIER = 1 << 9;

        const INTEGER = Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_LEADING_SIGN.bits();
        const HEX_NUMBER = Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_HEX_SPECIFIER.bits();
        const NUMBER = Self::INTEGER.bits()
            | Self::ALLOW_TRAILING_SIGN.bits()
            | Self::ALLOW_DECIMAL_POINT.bits()
            | Self::ALLOW_THOUSANDS.bits();
        const FLOAT = Self::INTEGER.bits()
            | Self::ALLOW_DECIMAL_POINT.bits()
            | Self::ALLOW_EXPONENT.bits();
        const CURRENCY = Self::NUMBER.bits()
            | Self::ALLOW_PARENTHESES.bits()
            | Self::ALLOW_CURRENCY_SYMBOL.bits();
        const ANY = Self::CURRENCY.bits() | Self::ALLOW_EXPONENT.bits();
    }
}

impl NumberStyles {
    /// Default style for integral kinds.
    pub const INTEGRAL_DEFAULT: Self = Self::INTEGER;

    /// Default style for binary floating-point kinds.
    pub const FLOAT_DEFAULT: Self = Self::FLOAT.union(Self::ALLOW_THOUSANDS);

    /// Default style for the decimal kind.
    pub const DECIMAL_DEFAULT: Self = Self::NUMBER;

    /// Check the hex specifier is only combined with whitespace flags.
    pub fn is_valid(self) -> bool {
        !self.contains(Self::ALLOW_HEX_SPECIFIER) || Self::HEX_NUMBER.contains(self)
    }

    #[inline]
    pub fn is_hex(self) -> bool {
        self.contains(Self::ALLOW_HEX_SPECIFIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_values() {
        assert_eq!(NumberStyles::INTEGER.bits(), 7);
        assert_eq!(NumberStyles::HEX_NUMBER.bits(), 515);
        assert_eq!(NumberStyles::NUMBER.bits(), 111);
        assert_eq!(NumberStyles::FLOAT.bits(), 167);
        assert_eq!(NumberStyles::CURRENCY.bits(), 383);
        assert_eq!(NumberStyles::ANY.bits(), 511);
    }

    #[test]
    fn hex_only_with_whitespace() {
        assert!(NumberStyles::HEX_NUMBER.is_valid());
        assert!(NumberStyles::ALLOW_HEX_SPECIFIER.is_valid());
        assert!(!(NumberStyles::HEX_NUMBER | NumberStyles::ALLOW_LEADING_SIGN).is_valid());
        assert!(NumberStyles::ANY.is_valid());
    }
}
