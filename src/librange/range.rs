// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generic range with open or closed bounds.
//!
//! A range is built from two [bounds](../bound/index.html) and is checked at construction: the lower bound must admit the raw value of the upper bound. No range can exist in an invalid state and a range is never modified after its construction; the [algebra](../algebra/index.html) operations return new ranges.
//!
//! The empty set is represented by a distinguished range per element type, obtained with [`Range::empty`]. It contains nothing and absorbs every operation.
//!
//! # Examples
//!
//! ```rust
//! use range::Range;
//!
//! let r = Range::half_open(1, 5).unwrap();
//! assert_eq!(r.to_string(), "[1..5)");
//! assert!(r.contains(&1));
//! assert!(!r.contains(&5));
//!
//! // Clamping ignores the openness of the bounds.
//! assert_eq!(r.limit(9), 5);
//! assert_eq!(r.limit(-3), 1);
//!
//! assert!(Range::new(5, 1).is_err());
//! ```

use crate::bound::Bound;
use crate::empty;
use crate::error::{Expectation, RangeError};
use crate::factory;
use crate::ops::Width;
use gcollections::kind::*;
use gcollections::ops::*;
use num_traits::{CheckedAdd, CheckedSub, One, Zero};
use std::convert::TryFrom;
use std::fmt::{Display, Formatter, Error};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
  // `None` is the empty range.
  bounds: Option<(Bound<T>, Bound<T>)>
}

impl<T> Range<T>
{
  // The bounds must have been validated by the caller.
  pub(crate) fn with_bounds(lower: Bound<T>, upper: Bound<T>) -> Range<T> {
    Range {
      bounds: Some((lower, upper))
    }
  }

  pub(crate) fn empty_value() -> Range<T> {
    Range {
      bounds: None
    }
  }

  pub(crate) fn bounds(&self) -> Option<(&Bound<T>, &Bound<T>)> {
    self.bounds.as_ref().map(|(lower, upper)| (lower, upper))
  }

  pub fn is_empty(&self) -> bool {
    self.bounds.is_none()
  }

  /// `None` for the empty range.
  pub fn lower(&self) -> Option<&Bound<T>> {
    self.bounds.as_ref().map(|(lower, _)| lower)
  }

  /// `None` for the empty range.
  pub fn upper(&self) -> Option<&Bound<T>> {
    self.bounds.as_ref().map(|(_, upper)| upper)
  }
}

impl<T> Range<T> where
  T: Send + Sync + 'static
{
  /// The empty range of `T`.
  ///
  /// Every call returns the same instance, created on first access and alive until process exit.
  pub fn empty() -> &'static Range<T> {
    empty::sentinel()
  }
}

impl<T> Range<T> where
  T: PartialOrd + Clone
{
  /// Closed range `[lower..upper]`.
  pub fn new(lower: T, upper: T) -> Result<Range<T>, RangeError<T>> {
    Range::from_bounds(Bound::Closed(lower), Bound::Closed(upper))
  }

  pub fn from_bounds(lower: Bound<T>, upper: Bound<T>) -> Result<Range<T>, RangeError<T>> {
    factory::assert_bounds(&lower, &upper)?;
    Ok(Range::with_bounds(lower, upper))
  }

  /// `[lower..upper]`
  pub fn closed(lower: T, upper: T) -> Result<Range<T>, RangeError<T>> {
    factory::closed(lower, upper)
  }

  /// `(lower..upper)`
  pub fn open(lower: T, upper: T) -> Result<Range<T>, RangeError<T>> {
    factory::open(lower, upper)
  }

  /// `[lower..upper)`
  pub fn half_open(lower: T, upper: T) -> Result<Range<T>, RangeError<T>> {
    factory::half_open(lower, upper)
  }

  /// `(lower..upper]`
  pub fn half_closed(lower: T, upper: T) -> Result<Range<T>, RangeError<T>> {
    factory::half_closed(lower, upper)
  }

  pub fn singleton(value: T) -> Range<T> {
    Range::with_bounds(Bound::Closed(value.clone()), Bound::Closed(value))
  }

  pub fn contains(&self, value: &T) -> bool {
    match self.bounds() {
      Some((lower, upper)) => lower.less_than(value) && upper.more_than(value),
      None => false
    }
  }

  /// Raises `value` to the raw lower value when it is below it. The openness of the bound is ignored.
  pub fn limit_lower(&self, value: T) -> T {
    match self.lower() {
      Some(lower) if value < *lower.value() => lower.value().clone(),
      _ => value
    }
  }

  /// Lowers `value` to the raw upper value when it is above it. The openness of the bound is ignored.
  pub fn limit_upper(&self, value: T) -> T {
    match self.upper() {
      Some(upper) if value > *upper.value() => upper.value().clone(),
      _ => value
    }
  }

  /// Clamps `value` into the raw values of the bounds.
  ///
  /// This is a saturating projection and not a containment guarantee: clamping onto an open bound yields the bound value itself, which `contains` then rejects.
  pub fn limit(&self, value: T) -> T {
    self.limit_upper(self.limit_lower(value))
  }

  /// Fails with an out-of-range error naming `param` when `value` is not contained in this range.
  pub fn assert_argument(&self, param: &str, value: &T) -> Result<(), RangeError<T>> {
    if self.contains(value) {
      Ok(())
    }
    else {
      log::debug!("argument `{}` rejected by a range assertion", param);
      Err(RangeError::OutOfRange {
        param: param.to_string(),
        value: value.clone(),
        range: self.clone(),
        expected: Expectation::of(self)
      })
    }
  }

  /// Asserts every value in turn and fails on the first one not contained in this range. A missing sequence is an error of its own.
  pub fn assert_arguments<'a, I>(&self, param: &str, values: Option<I>) -> Result<(), RangeError<T>> where
    I: IntoIterator<Item=&'a T>,
    T: 'a
  {
    let values = values.ok_or_else(|| RangeError::MissingSequence {
      param: param.to_string()
    })?;
    for value in values {
      self.assert_argument(param, value)?;
    }
    Ok(())
  }
}

/// `[1..5]`, `(1..5)`, `[1..5)` or `(1..5]`.
///
/// The empty range has no bounds to print and renders as `(..)`; this is not meant to be parsed back.
impl<T: Display> Display for Range<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    match self.bounds() {
      Some((lower, upper)) =>
        write!(formatter, "{}..{}", lower.to_lower_string(), upper.to_upper_string()),
      None => formatter.write_str("(..)")
    }
  }
}

impl<T> Collection for Range<T>
{
  type Item = T;
}

impl<T> Contains for Range<T> where
  T: PartialOrd + Clone
{
  fn contains(&self, value: &T) -> bool {
    Range::contains(self, value)
  }
}

/// Number of integers contained in the range.
impl<T> Cardinality for Range<T> where
  T: Width
{
  type Size = <T as Width>::Output;

  fn size(&self) -> <T as Width>::Output {
    let zero = <<T as Width>::Output as Zero>::zero();
    let (lower, upper) = match self.bounds() {
      Some(bounds) => bounds,
      None => return zero
    };
    let first = match lower {
      Bound::Closed(v) => Some(*v),
      Bound::Open(v) => CheckedAdd::checked_add(v, &<T as One>::one())
    };
    let last = match upper {
      Bound::Closed(v) => Some(*v),
      Bound::Open(v) => CheckedSub::checked_sub(v, &<T as One>::one())
    };
    match (first, last) {
      (Some(first), Some(last)) if first <= last => <T as Width>::width(&first, &last),
      _ => zero
    }
  }
}

/// Closed range from a pair of values.
impl<T> TryFrom<(T, T)> for Range<T> where
  T: PartialOrd + Clone
{
  type Error = RangeError<T>;

  fn try_from((lower, upper): (T, T)) -> Result<Range<T>, RangeError<T>> {
    Range::closed(lower, upper)
  }
}

impl<T> TryFrom<std::ops::Range<T>> for Range<T> where
  T: PartialOrd + Clone
{
  type Error = RangeError<T>;

  fn try_from(range: std::ops::Range<T>) -> Result<Range<T>, RangeError<T>> {
    Range::half_open(range.start, range.end)
  }
}

impl<T> TryFrom<RangeInclusive<T>> for Range<T> where
  T: PartialOrd + Clone
{
  type Error = RangeError<T>;

  fn try_from(range: RangeInclusive<T>) -> Result<Range<T>, RangeError<T>> {
    let (lower, upper) = range.into_inner();
    Range::closed(lower, upper)
  }
}
