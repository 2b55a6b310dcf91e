//! Operations for a type that is a relabeling of another numeric type.
//!
//! Enumeration-like types (`#[repr(u8)] enum Level { Low = 1, High = 2 }`)
//! or unit newtypes are numbers with a different name. `RelabeledOps` maps
//! them to their base type, runs the base operations, and maps the result
//! back. Symbolic names, when given, are used by general formatting and
//! accepted by parsing before the numeric form.

use std::cmp::Ordering;
use std::hash::Hasher;

use gnum_text::{FormatKind, FormatSpec, NumberFormat, NumberStyles};

use crate::adapters::outer_of;
use crate::contract::NumericOps;
use crate::error::NumericResult;
use crate::kind::NumericKind;
use crate::rounding::MidpointRounding;
use crate::value::NumericValue;

/// How a type `T` maps to and from its base type `U`.
pub struct Relabeling<T, U> {
    to_base: fn(&T) -> U,
    from_base: fn(U) -> T,
    name_of: Option<fn(&T) -> Option<&'static str>>,
    from_name: Option<fn(&str) -> Option<T>>,
}

impl<T, U> Relabeling<T, U> {
    pub fn new(to_base: fn(&T) -> U, from_base: fn(U) -> T) -> Self {
        Relabeling {
            to_base,
            from_base,
            name_of: None,
            from_name: None,
        }
    }

    /// Attach symbolic names used by `format` and `parse`.
    #[must_use]
    pub fn with_names(
        mut self,
        name_of: fn(&T) -> Option<&'static str>,
        from_name: fn(&str) -> Option<T>,
    ) -> Self {
        self.name_of = Some(name_of);
        self.from_name = Some(from_name);
        self
    }
}

pub struct RelabeledOps<T: 'static, U: 'static> {
    base: &'static dyn NumericOps<U>,
    relabeling: Relabeling<T, U>,
}

impl<T: 'static, U: 'static> RelabeledOps<T, U> {
    pub fn new(base: &'static dyn NumericOps<U>, relabeling: Relabeling<T, U>) -> Self {
        RelabeledOps { base, relabeling }
    }

    #[inline]
    fn down(&self, value: &T) -> U {
        (self.relabeling.to_base)(value)
    }

    #[inline]
    fn up(&self, value: U) -> T {
        (self.relabeling.from_base)(value)
    }

    fn binary(
        &self,
        left: &T,
        right: &T,
        op: impl FnOnce(&U, &U) -> NumericResult<U>,
    ) -> NumericResult<T> {
        op(&self.down(left), &self.down(right)).map(|v| self.up(v))
    }

    fn unary(&self, value: &T, op: impl FnOnce(&U) -> NumericResult<U>) -> NumericResult<T> {
        op(&self.down(value)).map(|v| self.up(v))
    }

    fn test(&self, left: &T, right: &T, predicate: impl FnOnce(&U, &U) -> bool) -> bool {
        predicate(&self.down(left), &self.down(right))
    }
}

impl<T: 'static, U: 'static> NumericOps<T> for RelabeledOps<T, U> {
    fn kind(&self) -> NumericKind {
        self.base.kind()
    }

    fn zero(&self) -> T {
        self.up(self.base.zero())
    }

    fn one(&self) -> T {
        self.up(self.base.one())
    }

    fn minus_one(&self) -> NumericResult<T> {
        self.base.minus_one().map(|v| self.up(v))
    }

    fn min_value(&self) -> NumericResult<T> {
        self.base.min_value().map(|v| self.up(v))
    }

    fn max_value(&self) -> NumericResult<T> {
        self.base.max_value().map(|v| self.up(v))
    }

    fn add(&self, left: &T, right: &T) -> NumericResult<T> {
        self.binary(left, right, |l, r| self.base.add(l, r))
    }

    fn subtract(&self, left: &T, right: &T) -> NumericResult<T> {
        self.binary(left, right, |l, r| self.base.subtract(l, r))
    }

    fn multiply(&self, left: &T, right: &T) -> NumericResult<T> {
        self.binary(left, right, |l, r| self.base.multiply(l, r))
    }

    fn divide(&self, left: &T, right: &T) -> NumericResult<T> {
        self.binary(left, right, |l, r| self.base.divide(l, r))
    }

    fn remainder(&self, left: &T, right: &T) -> NumericResult<T> {
        self.binary(left, right, |l, r| self.base.remainder(l, r))
    }

    fn negate(&self, value: &T) -> NumericResult<T> {
        self.unary(value, |v| self.base.negate(v))
    }

    fn equals(&self, left: &T, right: &T) -> bool {
        self.test(left, right, |l, r| self.base.equals(l, r))
    }

    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.base.compare(&self.down(left), &self.down(right))
    }

    fn less_than(&self, left: &T, right: &T) -> bool {
        self.test(left, right, |l, r| self.base.less_than(l, r))
    }

    fn less_than_or_equal(&self, left: &T, right: &T) -> bool {
        self.test(left, right, |l, r| self.base.less_than_or_equal(l, r))
    }

    fn greater_than(&self, left: &T, right: &T) -> bool {
        self.test(left, right, |l, r| self.base.greater_than(l, r))
    }

    fn greater_than_or_equal(&self, left: &T, right: &T) -> bool {
        self.test(left, right, |l, r| self.base.greater_than_or_equal(l, r))
    }

    fn bitwise_and(&self, left: &T, right: &T) -> NumericResult<T> {
        self.binary(left, right, |l, r| self.base.bitwise_and(l, r))
    }

    fn bitwise_or(&self, left: &T, right: &T) -> NumericResult<T> {
        self.binary(left, right, |l, r| self.base.bitwise_or(l, r))
    }

    fn xor(&self, left: &T, right: &T) -> NumericResult<T> {
        self.binary(left, right, |l, r| self.base.xor(l, r))
    }

    fn ones_complement(&self, value: &T) -> NumericResult<T> {
        self.unary(value, |v| self.base.ones_complement(v))
    }

    fn left_shift(&self, value: &T, shift: i32) -> NumericResult<T> {
        self.unary(value, |v| self.base.left_shift(v, shift))
    }

    fn right_shift(&self, value: &T, shift: i32) -> NumericResult<T> {
        self.unary(value, |v| self.base.right_shift(v, shift))
    }

    fn floor(&self, value: &T) -> T {
        self.up(self.base.floor(&self.down(value)))
    }

    fn ceiling(&self, value: &T) -> T {
        self.up(self.base.ceiling(&self.down(value)))
    }

    fn truncate(&self, value: &T) -> T {
        self.up(self.base.truncate(&self.down(value)))
    }

    fn round(&self, value: &T, digits: i32, mode: MidpointRounding) -> NumericResult<T> {
        self.unary(value, |v| self.base.round(v, digits, mode))
    }

    fn is_even(&self, value: &T) -> bool {
        self.base.is_even(&self.down(value))
    }

    fn is_odd(&self, value: &T) -> bool {
        self.base.is_odd(&self.down(value))
    }

    fn is_power_of_two(&self, value: &T) -> bool {
        self.base.is_power_of_two(&self.down(value))
    }

    fn sign(&self, value: &T) -> NumericResult<i32> {
        self.base.sign(&self.down(value))
    }

    fn abs(&self, value: &T) -> NumericResult<T> {
        self.unary(value, |v| self.base.abs(v))
    }

    fn clamp<'a>(&self, value: &'a T, min: &'a T, max: &'a T) -> NumericResult<&'a T> {
        let (v, lo, hi) = (self.down(value), self.down(min), self.down(max));
        let chosen = self.base.clamp(&v, &lo, &hi)?;
        Ok(outer_of(chosen, value, &[(&lo, min), (&hi, max), (&v, value)]))
    }

    fn min<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        let (l, r) = (self.down(left), self.down(right));
        outer_of(self.base.min(&l, &r), left, &[(&l, left), (&r, right)])
    }

    fn max<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        let (l, r) = (self.down(left), self.down(right));
        outer_of(self.base.max(&l, &r), left, &[(&l, left), (&r, right)])
    }

    fn to_value(&self, value: &T) -> NumericValue {
        self.base.to_value(&self.down(value))
    }

    fn from_value(&self, value: &NumericValue) -> NumericResult<T> {
        self.base.from_value(value).map(|v| self.up(v))
    }

    /// Symbolic names are tried first, on the trimmed text.
    fn parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<T> {
        if let Some(named) = self.relabeling.from_name.and_then(|f| f(text.trim())) {
            return Ok(named);
        }
        self.base.parse(text, styles, format).map(|v| self.up(v))
    }

    /// General formatting prefers the symbolic name.
    fn format(
        &self,
        value: &T,
        spec: Option<&str>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<String> {
        if FormatSpec::parse(spec)?.kind == FormatKind::General {
            if let Some(name) = self.relabeling.name_of.and_then(|f| f(value)) {
                return Ok(name.to_owned());
            }
        }
        self.base.format(&self.down(value), spec, format)
    }

    fn hash_value(&self, value: &T, state: &mut dyn Hasher) {
        self.base.hash_value(&self.down(value), state);
    }
}
