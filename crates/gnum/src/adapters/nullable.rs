//! `Option<K>` on top of the operations for `K`.
//!
//! Absence propagates: any arithmetic, bitwise or unary operation with a
//! `None` operand yields `None`. Comparisons treat `None` as a value that
//! sorts before every present value and equals only itself, while the
//! ordering predicates are false whenever either side is absent.

use std::cmp::Ordering;
use std::hash::Hasher;

use gnum_text::{NumberFormat, NumberStyles};

use crate::adapters::outer_of;
use crate::contract::NumericOps;
use crate::error::{NumericError, NumericResult};
use crate::kind::NumericKind;
use crate::rounding::MidpointRounding;
use crate::value::NumericValue;

pub struct NullableOps<K: 'static> {
    base: &'static dyn NumericOps<K>,
}

impl<K: 'static> NullableOps<K> {
    pub fn new(base: &'static dyn NumericOps<K>) -> Self {
        NullableOps { base }
    }

    fn binary(
        left: &Option<K>,
        right: &Option<K>,
        op: impl FnOnce(&K, &K) -> NumericResult<K>,
    ) -> NumericResult<Option<K>> {
        match (left, right) {
            (Some(l), Some(r)) => op(l, r).map(Some),
            _ => Ok(None),
        }
    }

    fn unary(
        value: &Option<K>,
        op: impl FnOnce(&K) -> NumericResult<K>,
    ) -> NumericResult<Option<K>> {
        value.as_ref().map(op).transpose()
    }

    fn both(left: &Option<K>, right: &Option<K>, predicate: impl FnOnce(&K, &K) -> bool) -> bool {
        match (left, right) {
            (Some(l), Some(r)) => predicate(l, r),
            _ => false,
        }
    }
}

impl<K: 'static> NumericOps<Option<K>> for NullableOps<K> {
    fn kind(&self) -> NumericKind {
        self.base.kind()
    }

    fn zero(&self) -> Option<K> {
        Some(self.base.zero())
    }

    fn one(&self) -> Option<K> {
        Some(self.base.one())
    }

    fn minus_one(&self) -> NumericResult<Option<K>> {
        self.base.minus_one().map(Some)
    }

    fn min_value(&self) -> NumericResult<Option<K>> {
        self.base.min_value().map(Some)
    }

    fn max_value(&self) -> NumericResult<Option<K>> {
        self.base.max_value().map(Some)
    }

    fn add(&self, left: &Option<K>, right: &Option<K>) -> NumericResult<Option<K>> {
        Self::binary(left, right, |l, r| self.base.add(l, r))
    }

    fn subtract(&self, left: &Option<K>, right: &Option<K>) -> NumericResult<Option<K>> {
        Self::binary(left, right, |l, r| self.base.subtract(l, r))
    }

    fn multiply(&self, left: &Option<K>, right: &Option<K>) -> NumericResult<Option<K>> {
        Self::binary(left, right, |l, r| self.base.multiply(l, r))
    }

    fn divide(&self, left: &Option<K>, right: &Option<K>) -> NumericResult<Option<K>> {
        Self::binary(left, right, |l, r| self.base.divide(l, r))
    }

    fn remainder(&self, left: &Option<K>, right: &Option<K>) -> NumericResult<Option<K>> {
        Self::binary(left, right, |l, r| self.base.remainder(l, r))
    }

    fn div_rem(
        &self,
        left: &Option<K>,
        right: &Option<K>,
    ) -> NumericResult<(Option<K>, Option<K>)> {
        match (left, right) {
            (Some(l), Some(r)) => {
                let (quotient, remainder) = self.base.div_rem(l, r)?;
                Ok((Some(quotient), Some(remainder)))
            }
            _ => Ok((None, None)),
        }
    }

    fn negate(&self, value: &Option<K>) -> NumericResult<Option<K>> {
        Self::unary(value, |v| self.base.negate(v))
    }

    fn equals(&self, left: &Option<K>, right: &Option<K>) -> bool {
        match (left, right) {
            (Some(l), Some(r)) => self.base.equals(l, r),
            (None, None) => true,
            _ => false,
        }
    }

    fn compare(&self, left: &Option<K>, right: &Option<K>) -> Ordering {
        match (left, right) {
            (Some(l), Some(r)) => self.base.compare(l, r),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }

    fn less_than(&self, left: &Option<K>, right: &Option<K>) -> bool {
        Self::both(left, right, |l, r| self.base.less_than(l, r))
    }

    fn less_than_or_equal(&self, left: &Option<K>, right: &Option<K>) -> bool {
        Self::both(left, right, |l, r| self.base.less_than_or_equal(l, r))
    }

    fn greater_than(&self, left: &Option<K>, right: &Option<K>) -> bool {
        Self::both(left, right, |l, r| self.base.greater_than(l, r))
    }

    fn greater_than_or_equal(&self, left: &Option<K>, right: &Option<K>) -> bool {
        Self::both(left, right, |l, r| self.base.greater_than_or_equal(l, r))
    }

    fn bitwise_and(&self, left: &Option<K>, right: &Option<K>) -> NumericResult<Option<K>> {
        Self::binary(left, right, |l, r| self.base.bitwise_and(l, r))
    }

    fn bitwise_or(&self, left: &Option<K>, right: &Option<K>) -> NumericResult<Option<K>> {
        Self::binary(left, right, |l, r| self.base.bitwise_or(l, r))
    }

    fn xor(&self, left: &Option<K>, right: &Option<K>) -> NumericResult<Option<K>> {
        Self::binary(left, right, |l, r| self.base.xor(l, r))
    }

    fn ones_complement(&self, value: &Option<K>) -> NumericResult<Option<K>> {
        Self::unary(value, |v| self.base.ones_complement(v))
    }

    fn left_shift(&self, value: &Option<K>, shift: i32) -> NumericResult<Option<K>> {
        Self::unary(value, |v| self.base.left_shift(v, shift))
    }

    fn right_shift(&self, value: &Option<K>, shift: i32) -> NumericResult<Option<K>> {
        Self::unary(value, |v| self.base.right_shift(v, shift))
    }

    fn floor(&self, value: &Option<K>) -> Option<K> {
        value.as_ref().map(|v| self.base.floor(v))
    }

    fn ceiling(&self, value: &Option<K>) -> Option<K> {
        value.as_ref().map(|v| self.base.ceiling(v))
    }

    fn truncate(&self, value: &Option<K>) -> Option<K> {
        value.as_ref().map(|v| self.base.truncate(v))
    }

    fn round(
        &self,
        value: &Option<K>,
        digits: i32,
        mode: MidpointRounding,
    ) -> NumericResult<Option<K>> {
        Self::unary(value, |v| self.base.round(v, digits, mode))
    }

    fn is_even(&self, value: &Option<K>) -> bool {
        value.as_ref().is_some_and(|v| self.base.is_even(v))
    }

    fn is_odd(&self, value: &Option<K>) -> bool {
        value.as_ref().is_some_and(|v| self.base.is_odd(v))
    }

    fn is_power_of_two(&self, value: &Option<K>) -> bool {
        value.as_ref().is_some_and(|v| self.base.is_power_of_two(v))
    }

    fn sign(&self, value: &Option<K>) -> NumericResult<i32> {
        value.as_ref().map_or(Ok(0), |v| self.base.sign(v))
    }

    fn abs(&self, value: &Option<K>) -> NumericResult<Option<K>> {
        Self::unary(value, |v| self.base.abs(v))
    }

    /// Absent value stays absent; absent bounds are ignored.
    fn clamp<'a>(
        &self,
        value: &'a Option<K>,
        min: &'a Option<K>,
        max: &'a Option<K>,
    ) -> NumericResult<&'a Option<K>> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if self.base.greater_than(lo, hi) {
                return Err(NumericError::invalid_argument(
                    "clamp minimum is greater than maximum",
                ));
            }
        }
        let Some(v) = value else {
            return Ok(value);
        };
        Ok(match (min, max) {
            (Some(lo), Some(hi)) => {
                let chosen = self.base.clamp(v, lo, hi)?;
                outer_of(chosen, value, &[(lo, min), (hi, max), (v, value)])
            }
            (Some(lo), None) if self.base.less_than(v, lo) => min,
            (None, Some(hi)) if self.base.greater_than(v, hi) => max,
            _ => value,
        })
    }

    /// Absent operands win.
    fn min<'a>(&self, left: &'a Option<K>, right: &'a Option<K>) -> &'a Option<K> {
        match (left, right) {
            (Some(l), Some(r)) => outer_of(self.base.min(l, r), left, &[(l, left), (r, right)]),
            (None, _) => left,
            (_, None) => right,
        }
    }

    /// Absent operands win.
    fn max<'a>(&self, left: &'a Option<K>, right: &'a Option<K>) -> &'a Option<K> {
        match (left, right) {
            (Some(l), Some(r)) => outer_of(self.base.max(l, r), left, &[(l, left), (r, right)]),
            (None, _) => left,
            (_, None) => right,
        }
    }

    fn to_value(&self, value: &Option<K>) -> NumericValue {
        value
            .as_ref()
            .map_or(NumericValue::Absent, |v| self.base.to_value(v))
    }

    fn from_value(&self, value: &NumericValue) -> NumericResult<Option<K>> {
        if value.is_absent() {
            Ok(None)
        } else {
            self.base.from_value(value).map(Some)
        }
    }

    /// Empty or blank text is `None`.
    fn parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<Option<K>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        self.base.parse(text, styles, format).map(Some)
    }

    /// `None` formats as the empty string.
    fn format(
        &self,
        value: &Option<K>,
        spec: Option<&str>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<String> {
        match value {
            Some(v) => self.base.format(v, spec, format),
            None => Ok(String::new()),
        }
    }

    fn hash_value(&self, value: &Option<K>, state: &mut dyn Hasher) {
        match value {
            Some(v) => {
                state.write_u8(1);
                self.base.hash_value(v, state);
            }
            None => state.write_u8(0),
        }
    }
}

#[cfg(test)]
mod tests;
