// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One endpoint of a range.
//!
//! A bound does not know whether it is the lower or the upper endpoint of a range. The role is chosen by the predicate invoked on it: [`less_than`](Bound::less_than) asks "is `x` at or past me?" (lower role) and [`more_than`](Bound::more_than) asks "is `x` at or before me?" (upper role).
//!
//! # Examples
//!
//! ```rust
//! use range::Bound;
//!
//! let lower = Bound::Open(1);
//! assert!(!lower.less_than(&1));
//! assert!(lower.less_than(&2));
//!
//! let upper = Bound::Closed(5);
//! assert!(upper.more_than(&5));
//! assert!(!upper.more_than(&6));
//! assert_eq!(upper.to_assertion(), "5 (inclusive)");
//! ```

use std::fmt::{Display, Formatter, Error};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Bound<T> {
  /// The endpoint belongs to the range.
  Closed(T),
  /// The endpoint is excluded from the range.
  Open(T)
}

impl<T> Bound<T>
{
  pub fn closed(value: T) -> Bound<T> {
    Bound::Closed(value)
  }

  pub fn open(value: T) -> Bound<T> {
    Bound::Open(value)
  }

  /// The raw value of the endpoint, whatever its inclusivity.
  pub fn value(&self) -> &T {
    match self {
      Bound::Closed(v) | Bound::Open(v) => v
    }
  }

  pub fn into_value(self) -> T {
    match self {
      Bound::Closed(v) | Bound::Open(v) => v
    }
  }

  pub fn is_closed(&self) -> bool {
    match self {
      Bound::Closed(_) => true,
      Bound::Open(_) => false
    }
  }

  pub fn is_open(&self) -> bool {
    !self.is_closed()
  }

  /// Transforms the value while keeping the inclusivity.
  pub fn map<U, F>(self, f: F) -> Bound<U> where
    F: FnOnce(T) -> U
  {
    match self {
      Bound::Closed(v) => Bound::Closed(f(v)),
      Bound::Open(v) => Bound::Open(f(v))
    }
  }
}

impl<T: PartialOrd> Bound<T>
{
  /// Whether this bound, taken as a lower bound, admits `x`.
  pub fn less_than(&self, x: &T) -> bool {
    match self {
      Bound::Closed(v) => v <= x,
      Bound::Open(v) => v < x
    }
  }

  /// Whether this bound, taken as an upper bound, admits `x`.
  pub fn more_than(&self, x: &T) -> bool {
    match self {
      Bound::Closed(v) => v >= x,
      Bound::Open(v) => v > x
    }
  }

  /// Two bounds touch when they are both closed on the same value, so two ranges meeting there share exactly that point.
  pub fn touches(&self, other: &Bound<T>) -> bool {
    match (self, other) {
      (Bound::Closed(a), Bound::Closed(b)) => a == b,
      _ => false
    }
  }
}

impl<T: Clone> Bound<T>
{
  /// First element generated from this bound in the lower role: the value itself when closed, its successor when open.
  pub fn generate<F>(&self, next: F) -> T where
    F: FnOnce(&T) -> T
  {
    match self {
      Bound::Closed(v) => v.clone(),
      Bound::Open(v) => next(v)
    }
  }
}

impl<T: Display> Bound<T>
{
  /// `"[v"` or `"(v"`.
  pub fn to_lower_string(&self) -> String {
    match self {
      Bound::Closed(v) => format!("[{}", v),
      Bound::Open(v) => format!("({}", v)
    }
  }

  /// `"v]"` or `"v)"`.
  pub fn to_upper_string(&self) -> String {
    match self {
      Bound::Closed(v) => format!("{}]", v),
      Bound::Open(v) => format!("{})", v)
    }
  }

  pub fn to_assertion(&self) -> String {
    self.to_string()
  }
}

/// Renders the inclusivity of the bound, e.g. `1 (inclusive)`.
impl<T: Display> Display for Bound<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    match self {
      Bound::Closed(v) => write!(formatter, "{} (inclusive)", v),
      Bound::Open(v) => write!(formatter, "{} (not inclusive)", v)
    }
  }
}
