//! Culture-specific number symbols.

use std::sync::OnceLock;

/// Symbols used when parsing and formatting numbers.
///
/// `NumberFormat::invariant()` is the neutral culture used whenever a caller
/// passes no format info.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberFormat {
    pub decimal_separator: String,
    pub group_separator: String,
    pub negative_sign: String,
    pub positive_sign: String,
    pub currency_symbol: String,
    pub nan_symbol: String,
    pub positive_infinity_symbol: String,
    pub negative_infinity_symbol: String,
}

static INVARIANT: OnceLock<NumberFormat> = OnceLock::new();

impl NumberFormat {
    /// The invariant culture.
    pub fn invariant() -> Self {
        NumberFormat {
            decimal_separator: ".".to_owned(),
            group_separator: ",".to_owned(),
            negative_sign: "-".to_owned(),
            positive_sign: "+".to_owned(),
            currency_symbol: "\u{a4}".to_owned(),
            nan_symbol: "NaN".to_owned(),
            positive_infinity_symbol: "Infinity".to_owned(),
            negative_infinity_symbol: "-Infinity".to_owned(),
        }
    }

    /// Shared invariant instance (lazily initialized).
    pub fn invariant_ref() -> &'static NumberFormat {
        INVARIANT.get_or_init(NumberFormat::invariant)
    }

    /// Resolve an optional caller-supplied culture.
    #[inline]
    pub fn or_invariant(format: Option<&NumberFormat>) -> &NumberFormat {
        match format {
            Some(format) => format,
            None => Self::invariant_ref(),
        }
    }

    /// Invariant symbols with different decimal and group separators.
    pub fn with_separators(decimal: &str, group: &str) -> Self {
        NumberFormat {
            decimal_separator: decimal.to_owned(),
            group_separator: group.to_owned(),
            ..Self::invariant()
        }
    }

    /// Replace the currency symbol.
    #[must_use]
    pub fn currency(mut self, symbol: &str) -> Self {
        symbol.clone_into(&mut self.currency_symbol);
        self
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}
