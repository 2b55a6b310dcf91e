//! `Number<K>` delegating to the operations for `K`.

use std::cmp::Ordering;
use std::hash::Hasher;

use gnum_text::{NumberFormat, NumberStyles};

use crate::adapters::outer_of;
use crate::contract::NumericOps;
use crate::error::NumericResult;
use crate::kind::NumericKind;
use crate::number::Number;
use crate::rounding::MidpointRounding;
use crate::value::NumericValue;

pub struct NumberOps<K: 'static> {
    base: &'static dyn NumericOps<K>,
}

impl<K: 'static> NumberOps<K> {
    pub fn new(base: &'static dyn NumericOps<K>) -> Self {
        NumberOps { base }
    }
}

/// Forward an operation that takes and returns plain values.
macro_rules! forward {
    ($($method:ident($($arg:ident),*);)*) => {
        $(
            fn $method(&self, $($arg: &Number<K>),*) -> NumericResult<Number<K>> {
                self.base.$method($($arg.value()),*).map(Number::new)
            }
        )*
    };
}

impl<K: 'static> NumericOps<Number<K>> for NumberOps<K> {
    fn kind(&self) -> NumericKind {
        self.base.kind()
    }

    fn zero(&self) -> Number<K> {
        Number::new(self.base.zero())
    }

    fn one(&self) -> Number<K> {
        Number::new(self.base.one())
    }

    fn minus_one(&self) -> NumericResult<Number<K>> {
        self.base.minus_one().map(Number::new)
    }

    fn min_value(&self) -> NumericResult<Number<K>> {
        self.base.min_value().map(Number::new)
    }

    fn max_value(&self) -> NumericResult<Number<K>> {
        self.base.max_value().map(Number::new)
    }

    forward! {
        add(left, right);
        subtract(left, right);
        multiply(left, right);
        divide(left, right);
        remainder(left, right);
        negate(value);
        bitwise_and(left, right);
        bitwise_or(left, right);
        xor(left, right);
        ones_complement(value);
        abs(value);
    }

    fn div_rem(
        &self,
        left: &Number<K>,
        right: &Number<K>,
    ) -> NumericResult<(Number<K>, Number<K>)> {
        let (quotient, remainder) = self.base.div_rem(left.value(), right.value())?;
        Ok((Number::new(quotient), Number::new(remainder)))
    }

    fn equals(&self, left: &Number<K>, right: &Number<K>) -> bool {
        self.base.equals(left.value(), right.value())
    }

    fn compare(&self, left: &Number<K>, right: &Number<K>) -> Ordering {
        self.base.compare(left.value(), right.value())
    }

    fn less_than(&self, left: &Number<K>, right: &Number<K>) -> bool {
        self.base.less_than(left.value(), right.value())
    }

    fn less_than_or_equal(&self, left: &Number<K>, right: &Number<K>) -> bool {
        self.base.less_than_or_equal(left.value(), right.value())
    }

    fn greater_than(&self, left: &Number<K>, right: &Number<K>) -> bool {
        self.base.greater_than(left.value(), right.value())
    }

    fn greater_than_or_equal(&self, left: &Number<K>, right: &Number<K>) -> bool {
        self.base.greater_than_or_equal(left.value(), right.value())
    }

    fn left_shift(&self, value: &Number<K>, shift: i32) -> NumericResult<Number<K>> {
        self.base.left_shift(value.value(), shift).map(Number::new)
    }

    fn right_shift(&self, value: &Number<K>, shift: i32) -> NumericResult<Number<K>> {
        self.base.right_shift(value.value(), shift).map(Number::new)
    }

    fn floor(&self, value: &Number<K>) -> Number<K> {
        Number::new(self.base.floor(value.value()))
    }

    fn ceiling(&self, value: &Number<K>) -> Number<K> {
        Number::new(self.base.ceiling(value.value()))
    }

    fn truncate(&self, value: &Number<K>) -> Number<K> {
        Number::new(self.base.truncate(value.value()))
    }

    fn round(
        &self,
        value: &Number<K>,
        digits: i32,
        mode: MidpointRounding,
    ) -> NumericResult<Number<K>> {
        self.base.round(value.value(), digits, mode).map(Number::new)
    }

    fn is_even(&self, value: &Number<K>) -> bool {
        self.base.is_even(value.value())
    }

    fn is_odd(&self, value: &Number<K>) -> bool {
        self.base.is_odd(value.value())
    }

    fn is_power_of_two(&self, value: &Number<K>) -> bool {
        self.base.is_power_of_two(value.value())
    }

    fn sign(&self, value: &Number<K>) -> NumericResult<i32> {
        self.base.sign(value.value())
    }

    fn clamp<'a>(
        &self,
        value: &'a Number<K>,
        min: &'a Number<K>,
        max: &'a Number<K>,
    ) -> NumericResult<&'a Number<K>> {
        let (v, lo, hi) = (value.value(), min.value(), max.value());
        let chosen = self.base.clamp(v, lo, hi)?;
        Ok(outer_of(chosen, value, &[(lo, min), (hi, max), (v, value)]))
    }

    fn min<'a>(&self, left: &'a Number<K>, right: &'a Number<K>) -> &'a Number<K> {
        let (l, r) = (left.value(), right.value());
        outer_of(self.base.min(l, r), left, &[(l, left), (r, right)])
    }

    fn max<'a>(&self, left: &'a Number<K>, right: &'a Number<K>) -> &'a Number<K> {
        let (l, r) = (left.value(), right.value());
        outer_of(self.base.max(l, r), left, &[(l, left), (r, right)])
    }

    fn to_value(&self, value: &Number<K>) -> NumericValue {
        self.base.to_value(value.value())
    }

    fn from_value(&self, value: &NumericValue) -> NumericResult<Number<K>> {
        self.base.from_value(value).map(Number::new)
    }

    fn parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<Number<K>> {
        self.base.parse(text, styles, format).map(Number::new)
    }

    fn try_parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<Option<Number<K>>> {
        Ok(self.base.try_parse(text, styles, format)?.map(Number::new))
    }

    fn format(
        &self,
        value: &Number<K>,
        spec: Option<&str>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<String> {
        self.base.format(value.value(), spec, format)
    }

    fn hash_value(&self, value: &Number<K>, state: &mut dyn Hasher) {
        self.base.hash_value(value.value(), state);
    }
}

#[cfg(test)]
mod tests;
