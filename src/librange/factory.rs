// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Free functions building ranges with the right combination of bounds, and the bound ordering checks run by every constructor.
//!
//! ```rust
//! use range::factory::*;
//! use range::Bound;
//!
//! assert!(check_values(&1, &1));
//! assert!(check_bounds(&Bound::Closed(1), &Bound::Open(1)));
//! assert!(!check_bounds(&Bound::Open(1), &Bound::Closed(1)));
//! assert_eq!(half_open(1, 5).unwrap().to_string(), "[1..5)");
//! ```

use crate::bound::Bound;
use crate::error::RangeError;
use crate::range::Range;

/// Parameter named by the errors of the bound checks.
pub const UPPER_BOUND: &str = "upper";

/// Raw value check, ignoring the openness of the bounds.
pub fn check_values<T: PartialOrd>(lower: &T, upper: &T) -> bool {
  lower <= upper
}

/// Whether `lower`, in the lower role, admits the raw value of `upper`.
pub fn check_bounds<T: PartialOrd>(lower: &Bound<T>, upper: &Bound<T>) -> bool {
  lower.less_than(upper.value())
}

pub fn assert_values<T>(lower: &T, upper: &T) -> Result<(), RangeError<T>> where
  T: PartialOrd + Clone
{
  if check_values(lower, upper) { Ok(()) }
  else { Err(order_error(lower, upper)) }
}

pub fn assert_bounds<T>(lower: &Bound<T>, upper: &Bound<T>) -> Result<(), RangeError<T>> where
  T: PartialOrd + Clone
{
  if check_bounds(lower, upper) { Ok(()) }
  else { Err(order_error(lower.value(), upper.value())) }
}

fn order_error<T: Clone>(lower: &T, upper: &T) -> RangeError<T> {
  log::debug!("range rejected: the upper bound precedes the lower bound");
  RangeError::BoundsOrder {
    param: UPPER_BOUND,
    lower: lower.clone(),
    value: upper.clone()
  }
}

pub fn closed<T>(lower: T, upper: T) -> Result<Range<T>, RangeError<T>> where
  T: PartialOrd + Clone
{
  Range::from_bounds(Bound::Closed(lower), Bound::Closed(upper))
}

pub fn open<T>(lower: T, upper: T) -> Result<Range<T>, RangeError<T>> where
  T: PartialOrd + Clone
{
  Range::from_bounds(Bound::Open(lower), Bound::Open(upper))
}

/// Closed on the lower bound, open on the upper one.
pub fn half_open<T>(lower: T, upper: T) -> Result<Range<T>, RangeError<T>> where
  T: PartialOrd + Clone
{
  Range::from_bounds(Bound::Closed(lower), Bound::Open(upper))
}

/// Open on the lower bound, closed on the upper one.
pub fn half_closed<T>(lower: T, upper: T) -> Result<Range<T>, RangeError<T>> where
  T: PartialOrd + Clone
{
  Range::from_bounds(Bound::Open(lower), Bound::Closed(upper))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ErrorKind;

  #[test]
  fn check_values_test() {
    assert!(check_values(&1, &2));
    assert!(check_values(&2, &2));
    assert!(!check_values(&3, &2));
    assert!(check_values(&"a", &"b"));
  }

  #[test]
  fn check_bounds_test() {
    let cases = vec![
      (1, Bound::Closed(1), Bound::Closed(1), true),
      (2, Bound::Closed(1), Bound::Open(1), true),
      (3, Bound::Open(1), Bound::Closed(1), false),
      (4, Bound::Open(1), Bound::Open(1), false),
      (5, Bound::Open(1), Bound::Open(2), true),
      (6, Bound::Closed(2), Bound::Closed(1), false),
    ];
    for (id, lower, upper, expected) in cases {
      assert_eq!(check_bounds(&lower, &upper), expected,
        "test #{}: check_bounds({:?}, {:?})", id, lower, upper);
      assert_eq!(assert_bounds(&lower, &upper).is_ok(), expected, "test #{}", id);
    }
  }

  #[test]
  fn assert_values_test() {
    assert_eq!(assert_values(&1, &5), Ok(()));
    let err = assert_values(&5, &1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(err, RangeError::BoundsOrder { param: UPPER_BOUND, lower: 5, value: 1 });
  }

  #[test]
  fn assert_bounds_error_test() {
    let err = assert_bounds(&Bound::Open(3), &Bound::Closed(3)).unwrap_err();
    assert_eq!(err.param_name(), UPPER_BOUND);
    assert_eq!(err.to_string(), "upper: the lower bound 3 does not admit the upper bound 3");
  }

  #[test]
  fn factory_bounds_test() {
    let r = half_open(1, 5).unwrap();
    assert_eq!(r.lower(), Some(&Bound::Closed(1)));
    assert_eq!(r.upper(), Some(&Bound::Open(5)));
    let r = half_closed(1, 5).unwrap();
    assert_eq!(r.lower(), Some(&Bound::Open(1)));
    assert_eq!(r.upper(), Some(&Bound::Closed(5)));
    assert_eq!(open(1, 5).unwrap(), Range::open(1, 5).unwrap());
    assert_eq!(closed(1, 5).unwrap(), Range::new(1, 5).unwrap());
    assert!(closed(5, 1).is_err());
  }
}
