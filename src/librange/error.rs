// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised when building ranges, asserting arguments against them or generating their elements.
//!
//! Every error is raised at the point of detection and indicates a programming error of the caller; none of them is retryable.

use crate::bound::Bound;
use crate::range::Range;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Category of a [`RangeError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  OutOfRange,
  InvalidArgument,
  NullArgument
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError<T> {
  /// The lower bound does not admit the raw value of the upper bound.
  #[error("{param}: the lower bound {lower} does not admit the upper bound {value}")]
  BoundsOrder {
    param: &'static str,
    lower: T,
    value: T
  },
  /// A value asserted against a range is not contained in it.
  #[error("{param}: {value} is out of the range {range}, expected {expected}")]
  OutOfRange {
    param: String,
    value: T,
    range: Range<T>,
    expected: Expectation<T>
  },
  /// The step function of a generation did not move strictly forward.
  #[error("{param}: the function is not incrementing, it maps {from} to {to}")]
  NotIncreasing {
    param: &'static str,
    from: T,
    to: T
  },
  #[error("{param}: the sequence of values is missing")]
  MissingSequence {
    param: String
  }
}

impl<T> RangeError<T>
{
  pub fn kind(&self) -> ErrorKind {
    match self {
      RangeError::BoundsOrder{..}
    | RangeError::OutOfRange{..} => ErrorKind::OutOfRange,
      RangeError::NotIncreasing{..} => ErrorKind::InvalidArgument,
      RangeError::MissingSequence{..} => ErrorKind::NullArgument
    }
  }

  /// Name of the offending parameter.
  pub fn param_name(&self) -> &str {
    match self {
      RangeError::BoundsOrder{param, ..}
    | RangeError::NotIncreasing{param, ..} => *param,
      RangeError::OutOfRange{param, ..}
    | RangeError::MissingSequence{param} => param.as_str()
    }
  }
}

/// Inclusivity of both bounds of a range, as expected from an asserted value.
#[derive(Debug, Clone, PartialEq)]
pub struct Expectation<T> {
  bounds: Option<(Bound<T>, Bound<T>)>
}

impl<T: Clone> Expectation<T>
{
  pub(crate) fn of(range: &Range<T>) -> Expectation<T> {
    Expectation {
      bounds: range.lower().cloned().zip(range.upper().cloned())
    }
  }
}

impl<T: Display> Display for Expectation<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
    match &self.bounds {
      Some((lower, upper)) => write!(formatter, "a value from {} to {}", lower, upper),
      None => formatter.write_str("no value since the range is empty")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kind_and_param_test() {
    let order: RangeError<i32> = RangeError::BoundsOrder { param: "upper", lower: 5, value: 1 };
    assert_eq!(order.kind(), ErrorKind::OutOfRange);
    assert_eq!(order.param_name(), "upper");

    let step: RangeError<i32> = RangeError::NotIncreasing { param: "next", from: 3, to: 3 };
    assert_eq!(step.kind(), ErrorKind::InvalidArgument);
    assert_eq!(step.param_name(), "next");

    let missing: RangeError<i32> = RangeError::MissingSequence { param: "values".to_string() };
    assert_eq!(missing.kind(), ErrorKind::NullArgument);
    assert_eq!(missing.param_name(), "values");
  }

  #[test]
  fn message_test() {
    let order: RangeError<i32> = RangeError::BoundsOrder { param: "upper", lower: 5, value: 1 };
    assert_eq!(order.to_string(), "upper: the lower bound 5 does not admit the upper bound 1");

    let step: RangeError<i32> = RangeError::NotIncreasing { param: "next", from: -10, to: -10 };
    assert_eq!(step.to_string(), "next: the function is not incrementing, it maps -10 to -10");

    let range = Range::half_open(1, 5).unwrap();
    let out = RangeError::OutOfRange {
      param: "x".to_string(),
      value: 7,
      expected: Expectation::of(&range),
      range
    };
    assert_eq!(out.to_string(),
      "x: 7 is out of the range [1..5), expected a value from 1 (inclusive) to 5 (not inclusive)");
  }
}
