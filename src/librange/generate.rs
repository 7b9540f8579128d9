// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lazy enumeration of the elements of a range.
//!
//! The sequence starts at the lower bound (or at its successor when the bound is open) and follows a step function until the upper bound rejects the current element. Each step must move strictly forward: a step function returning a value that is not greater than its input yields a [`NotIncreasing`](../error/enum.RangeError.html) error in place of the next element, and the sequence stops there. Nothing is computed before the iteration starts.
//!
//! # Examples
//!
//! ```rust
//! use range::Range;
//!
//! let r = Range::closed(1, 5).unwrap();
//! let all: Vec<i32> = r.generate(|x| x + 1).collect::<Result<_, _>>().unwrap();
//! assert_eq!(all, vec![1, 2, 3, 4, 5]);
//!
//! let odd: Vec<i32> = Range::open(1, 5).unwrap().generate_by(2).collect::<Result<_, _>>().unwrap();
//! assert_eq!(odd, vec![3]);
//!
//! let stuck = Range::closed(-10, -1).unwrap().generate(|x| *x);
//! assert!(stuck.collect::<Result<Vec<i32>, _>>().is_err());
//! ```

use crate::bound::Bound;
use crate::error::RangeError;
use crate::ops::Increment;
use crate::range::Range;
use std::iter::FusedIterator;
use std::mem;

/// Name of the step function in the errors of the generation.
pub const STEP_FUNCTION: &str = "next";

enum State<T> {
  Start(Bound<T>),
  After(T),
  Done
}

/// Iterator returned by [`Range::generate`], [`Range::generate_by`] and [`Range::generate_checked`].
pub struct Generate<T, F> {
  state: State<T>,
  upper: Option<Bound<T>>,
  next: F
}

impl<T, F> Generate<T, F> where
  T: PartialOrd + Clone,
  F: FnMut(&T) -> Option<T>
{
  fn new(range: &Range<T>, next: F) -> Generate<T, F> {
    match (range.lower(), range.upper()) {
      (Some(lower), Some(upper)) => Generate {
        state: State::Start(lower.clone()),
        upper: Some(upper.clone()),
        next
      },
      _ => Generate {
        state: State::Done,
        upper: None,
        next
      }
    }
  }

  // `None` when the step leaves the domain of `T`.
  fn step(&mut self, from: T) -> Option<Result<T, RangeError<T>>> {
    let to = (self.next)(&from)?;
    if to > from {
      Some(Ok(to))
    }
    else {
      log::debug!("range generation stopped on a step function that is not incrementing");
      Some(Err(RangeError::NotIncreasing {
        param: STEP_FUNCTION,
        from,
        to
      }))
    }
  }
}

impl<T, F> Iterator for Generate<T, F> where
  T: PartialOrd + Clone,
  F: FnMut(&T) -> Option<T>
{
  type Item = Result<T, RangeError<T>>;

  fn next(&mut self) -> Option<Self::Item> {
    let current = match mem::replace(&mut self.state, State::Done) {
      State::Done => return None,
      State::Start(Bound::Closed(first)) => first,
      State::Start(Bound::Open(from))
    | State::After(from) => {
        match self.step(from)? {
          Ok(to) => to,
          Err(e) => return Some(Err(e))
        }
      }
    };
    match &self.upper {
      Some(upper) if upper.more_than(&current) => {
        self.state = State::After(current.clone());
        Some(Ok(current))
      }
      _ => None
    }
  }
}

impl<T, F> FusedIterator for Generate<T, F> where
  T: PartialOrd + Clone,
  F: FnMut(&T) -> Option<T>
{}

impl<T> Range<T> where
  T: PartialOrd + Clone
{
  /// Elements of the range, from the lower bound and following `next`.
  ///
  /// Every step must increase its input, otherwise the sequence yields a `NotIncreasing` error and ends. This includes the step from an open lower bound to the first element: `(1..5)` generated with a step that does not move fails before yielding anything, it never yields the excluded `1`.
  pub fn generate<F>(&self, mut next: F) -> Generate<T, impl FnMut(&T) -> Option<T>> where
    F: FnMut(&T) -> T
  {
    self.generate_checked(move |x| Some(next(x)))
  }

  /// Same as [`generate`](Range::generate) with a step function returning `None` when it cannot go further, which ends the sequence.
  pub fn generate_checked<F>(&self, next: F) -> Generate<T, F> where
    F: FnMut(&T) -> Option<T>
  {
    Generate::new(self, next)
  }
}

impl<T> Range<T> where
  T: Increment
{
  /// Elements of the range separated by `step`. The sequence ends early if the next element overflows `T`.
  pub fn generate_by(&self, step: T) -> Generate<T, impl FnMut(&T) -> Option<T>> {
    self.generate_checked(move |x| x.increment(&step))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ErrorKind;

  fn collect<I: Iterator<Item=Result<i32, RangeError<i32>>>>(iter: I) -> Vec<i32> {
    iter.collect::<Result<Vec<_>, _>>().unwrap()
  }

  #[test]
  fn generate_test() {
    let cases = vec![
      (1, Range::closed(1, 5), 1, vec![1, 2, 3, 4, 5]),
      (2, Range::open(1, 5), 2, vec![3]),
      (3, Range::open(1, 5), 1, vec![2, 3, 4]),
      (4, Range::half_open(1, 5), 1, vec![1, 2, 3, 4]),
      (5, Range::half_closed(1, 5), 1, vec![2, 3, 4, 5]),
      (6, Range::closed(1, 5), 2, vec![1, 3, 5]),
      (7, Range::half_open(1, 5), 2, vec![1, 3]),
      (8, Range::closed(3, 3), 1, vec![3]),
      (9, Range::half_open(3, 3), 1, vec![]),
      (10, Range::closed(-10, -1), 4, vec![-10, -6, -2]),
    ];
    for (id, r, step, expected) in cases {
      let r = r.unwrap();
      assert_eq!(collect(r.generate(|x| x + step)), expected, "test #{}: {} by {}", id, r, step);
      assert_eq!(collect(r.generate_by(step)), expected, "test #{}: {} by {}", id, r, step);
    }
  }

  #[test]
  fn generated_values_are_contained_test() {
    let ranges = vec![
      Range::closed(-7, 13),
      Range::open(-7, 13),
      Range::half_open(-7, 13),
      Range::half_closed(-7, 13),
    ];
    for r in ranges {
      let r = r.unwrap();
      for step in 1..6 {
        for v in collect(r.generate_by(step)) {
          assert!(r.contains(&v), "{} generated {} with a step of {}", r, v, step);
        }
      }
    }
  }

  #[test]
  fn not_increasing_test() {
    let r = Range::closed(-10, -1).unwrap();
    let mut it = r.generate(|x| *x);
    assert_eq!(it.next(), Some(Ok(-10)));
    let err = it.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.param_name(), STEP_FUNCTION);
    assert_eq!(err, RangeError::NotIncreasing { param: STEP_FUNCTION, from: -10, to: -10 });
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
  }

  #[test]
  fn not_increasing_later_test() {
    let r = Range::closed(0, 100).unwrap();
    let stalls_at_two = r.generate(|x| if *x < 2 { x + 1 } else { x - 1 });
    let mut items: Vec<Result<i32, RangeError<i32>>> = stalls_at_two.collect();
    assert_eq!(items.len(), 4);
    assert_eq!(items.pop(), Some(Err(RangeError::NotIncreasing { param: STEP_FUNCTION, from: 2, to: 1 })));
    assert_eq!(collect(items.into_iter()), vec![0, 1, 2]);

    assert!(r.generate_by(0).collect::<Result<Vec<_>, _>>().is_err());
    assert!(r.generate_by(-1).collect::<Result<Vec<_>, _>>().is_err());
  }

  #[test]
  fn not_increasing_from_open_lower_test() {
    let r = Range::open(1, 5).unwrap();
    let mut it = r.generate(|x| *x);
    assert_eq!(it.next().unwrap().unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(it.next(), None);
  }

  #[test]
  fn laziness_test() {
    let r = Range::closed(1, 5).unwrap();
    let mut calls = 0;
    {
      let it = r.generate(|x| { calls += 1; *x });
      drop(it);
    }
    assert_eq!(calls, 0);

    let mut it = r.generate_by(1);
    assert_eq!(it.next(), Some(Ok(1)));
    assert_eq!(it.next(), Some(Ok(2)));
  }

  #[test]
  fn independent_sequences_test() {
    let r = Range::closed(1, 3).unwrap();
    let mut a = r.generate_by(1);
    assert_eq!(a.next(), Some(Ok(1)));
    assert_eq!(collect(r.generate_by(1)), vec![1, 2, 3]);
    assert_eq!(collect(a), vec![2, 3]);
  }

  #[test]
  fn empty_test() {
    let empty = Range::<i32>::empty();
    assert_eq!(empty.generate(|x| x + 1).next(), None);
    assert_eq!(empty.generate(|x| *x).next(), None);
    assert_eq!(empty.generate_by(1).count(), 0);
  }

  #[test]
  fn overflow_test() {
    let r = Range::closed(250u8, 255).unwrap();
    let all: Vec<u8> = r.generate_by(1).collect::<Result<_, _>>().unwrap();
    assert_eq!(all, vec![250, 251, 252, 253, 254, 255]);
    let sparse: Vec<u8> = r.generate_by(3).collect::<Result<_, _>>().unwrap();
    assert_eq!(sparse, vec![250, 253]);
    let checked: Vec<u8> = r.generate_checked(|x| x.checked_add(1)).collect::<Result<_, _>>().unwrap();
    assert_eq!(checked, all);
  }

  #[test]
  fn floating_test() {
    let r = Range::closed(0.0, 1.0).unwrap();
    let quarters: Vec<f64> = r.generate_by(0.25).collect::<Result<_, _>>().unwrap();
    assert_eq!(quarters, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    let r = Range::half_open(0.0, 1.0).unwrap();
    let quarters: Vec<f64> = r.generate_by(0.25).collect::<Result<_, _>>().unwrap();
    assert_eq!(quarters, vec![0.0, 0.25, 0.5, 0.75]);
  }
}
