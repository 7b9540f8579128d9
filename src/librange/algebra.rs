// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Overlap, intersection and join of ranges.
//!
//! Two ranges meeting on a value are in contact unless both are open there: `[1..5]` and `[5..9]` overlap on `5`, so do `[1..5)` and `[5..9]`, and their intersection is the single point `[5..5]`. `[1..5)` and `(5..9]` are disjoint. The empty range overlaps nothing, intersects to itself and is the identity of the join. A missing operand (`None`) behaves like the empty range except for the join, where it leaves the other operand unchanged.
//!
//! The join spans from the lowest lower bound to the highest upper bound and always succeeds, even when the operands are disjoint: `[1..3]` joined with `[9..10]` is `[1..10]`.
//!
//! # Examples
//!
//! ```rust
//! use range::Range;
//!
//! let a = Range::closed(1, 10).unwrap();
//! let b = Range::closed(3, 6).unwrap();
//! assert!(a.overlaps(&b));
//! assert_eq!(a.intersect(&b), b);
//!
//! let c = Range::half_open(5, 10).unwrap();
//! let d = Range::half_closed(1, 5).unwrap();
//! assert!(c.overlaps(&d));
//! assert_eq!(c.intersect(&d).to_string(), "[5..5]");
//!
//! let e = Range::new(1, 3).unwrap().join(&Range::new(9, 10).unwrap());
//! assert_eq!(e.to_string(), "[1..10]");
//! ```

use crate::bound::Bound;
use crate::ops::Join;
use crate::range::Range;
use gcollections::ops::*;

// Whether a range ending on `upper` lies entirely before a range starting on `lower`.
fn precedes<T: PartialOrd>(upper: &Bound<T>, lower: &Bound<T>) -> bool {
  upper.value() < lower.value()
  || (upper.value() == lower.value() && upper.is_open() && lower.is_open())
}

// Picks the bound with the greatest (or smallest) value; on equal values, the closed one.
fn select<'a, T: PartialOrd>(a: &'a Bound<T>, b: &'a Bound<T>, greatest: bool) -> &'a Bound<T> {
  if a.value() == b.value() {
    if a.is_closed() { a } else { b }
  }
  else if (a.value() > b.value()) == greatest { a }
  else { b }
}

// Whether the lower bound `outer` admits everything admitted by the lower bound `inner`.
fn lower_covers<T: PartialOrd>(outer: &Bound<T>, inner: &Bound<T>) -> bool {
  outer.value() < inner.value()
  || (outer.value() == inner.value() && (outer.is_closed() || inner.is_open()))
}

fn upper_covers<T: PartialOrd>(outer: &Bound<T>, inner: &Bound<T>) -> bool {
  outer.value() > inner.value()
  || (outer.value() == inner.value() && (outer.is_closed() || inner.is_open()))
}

impl<T> Range<T> where
  T: PartialOrd
{
  /// Whether both ranges share at least one value.
  pub fn overlaps(&self, other: &Range<T>) -> bool {
    match (self.bounds(), other.bounds()) {
      (Some((lower, upper)), Some((other_lower, other_upper))) =>
        !precedes(upper, other_lower) && !precedes(other_upper, lower),
      _ => false
    }
  }

  pub fn is_disjoint(&self, other: &Range<T>) -> bool {
    !self.overlaps(other)
  }

  /// Whether every value of `self` belongs to `other`. The empty range is a subset of every range.
  pub fn is_subset(&self, other: &Range<T>) -> bool {
    match (self.bounds(), other.bounds()) {
      (None, _) => true,
      (_, None) => false,
      (Some((lower, upper)), Some((other_lower, other_upper))) =>
        lower_covers(other_lower, lower) && upper_covers(other_upper, upper)
    }
  }
}

impl<T> Range<T> where
  T: PartialOrd + Clone
{
  /// Narrowest extent of both ranges, or the empty range when they do not overlap.
  ///
  /// On equal raw values the closed bound is kept, so `[1..5] ∩ (1..5)` is `[1..5]`. Ranges in contact on a single value intersect to that value, closed.
  pub fn intersect(&self, other: &Range<T>) -> Range<T> {
    match (self.bounds(), other.bounds()) {
      (Some((lower, upper)), Some((other_lower, other_upper))) if self.overlaps(other) => {
        if upper.value() == other_lower.value() {
          Range::singleton(upper.value().clone())
        }
        else if other_upper.value() == lower.value() {
          Range::singleton(lower.value().clone())
        }
        else {
          Range::with_bounds(
            select(lower, other_lower, true).clone(),
            select(upper, other_upper, false).clone())
        }
      }
      _ => Range::empty_value()
    }
  }

  /// Smallest range spanning both operands.
  pub fn join(&self, other: &Range<T>) -> Range<T> {
    match (self.bounds(), other.bounds()) {
      (Some((lower, upper)), Some((other_lower, other_upper))) => {
        Range::with_bounds(
          select(lower, other_lower, false).clone(),
          select(upper, other_upper, true).clone())
      }
      (None, _) => other.clone(),
      (_, None) => self.clone()
    }
  }
}

impl<T: PartialOrd> Overlap for Range<T>
{
  fn overlap(&self, other: &Range<T>) -> bool {
    self.overlaps(other)
  }
}

impl<T: PartialOrd> Overlap<Option<Range<T>>> for Range<T>
{
  fn overlap(&self, other: &Option<Range<T>>) -> bool {
    other.as_ref().map_or(false, |other| self.overlaps(other))
  }
}

impl<T: PartialOrd> Disjoint for Range<T>
{
  fn is_disjoint(&self, other: &Range<T>) -> bool {
    Range::is_disjoint(self, other)
  }
}

impl<T: PartialOrd> Subset for Range<T>
{
  fn is_subset(&self, other: &Range<T>) -> bool {
    Range::is_subset(self, other)
  }
}

impl<T: PartialOrd + Clone> Intersection for Range<T>
{
  type Output = Range<T>;

  fn intersection(&self, other: &Range<T>) -> Range<T> {
    self.intersect(other)
  }
}

impl<T: PartialOrd + Clone> Intersection<Option<Range<T>>> for Range<T>
{
  type Output = Range<T>;

  fn intersection(&self, other: &Option<Range<T>>) -> Range<T> {
    match other {
      Some(other) => self.intersect(other),
      None => Range::empty_value()
    }
  }
}

impl<T: PartialOrd + Clone> Join for Range<T>
{
  type Output = Range<T>;

  fn join(&self, other: &Range<T>) -> Range<T> {
    Range::join(self, other)
  }
}

impl<T: PartialOrd + Clone> Join<Option<Range<T>>> for Range<T>
{
  type Output = Range<T>;

  fn join(&self, other: &Option<Range<T>>) -> Range<T> {
    match other {
      Some(other) => Range::join(self, other),
      None => self.clone()
    }
  }
}
