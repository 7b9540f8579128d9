// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Range specific operations.

use num_traits::{CheckedAdd, PrimInt, Unsigned};
use num_integer::Integer;

/// Smallest range spanning both operands, even when they are disjoint.
pub trait Join<RHS = Self>
{
  type Output;
  fn join(&self, rhs: &RHS) -> Self::Output;
}

/// Element types that can be stepped forward by a fixed increment.
///
/// The result is `None` when the step leaves the domain of the type.
pub trait Increment : PartialOrd + Clone
{
  fn increment(&self, step: &Self) -> Option<Self>;
}

macro_rules! integer_increment_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Increment for $t
    {
      fn increment(&self, step: &$t) -> Option<$t> {
        <$t as CheckedAdd>::checked_add(self, step)
      }
    }
  )*}
}

macro_rules! float_increment_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Increment for $t
    {
      fn increment(&self, step: &$t) -> Option<$t> {
        Some(*self + *step)
      }
    }
  )*}
}

integer_increment_impl!(i8,u8,i16,u16,i32,u32,i64,u64,i128,u128,isize,usize);
float_increment_impl!(f32,f64);

/// Number of values between two integers, both included, represented in a type wide enough for the whole domain of `Self`.
pub trait Width : PrimInt
{
  type Output: Unsigned + Integer + Clone;

  fn width(lower: &Self, upper: &Self) -> <Self as Width>::Output;
}

macro_rules! width_impl
{
  ( $( $t: ty, $u: ty ),* ) =>
  {$(
    impl Width for $t
    {
      type Output = $u;

      fn width(lower: &$t, upper: &$t) -> $u {
        debug_assert!(lower <= upper);
        // Computed in `i128` so the difference of two signed values cannot overflow.
        (*upper as i128 - *lower as i128) as $u + 1
      }
    }
  )*}
}

width_impl!(i8,u16,u8,u16,i16,u32,u16,u32,i32,u64,u32,u64,i64,u128,u64,u128,isize,u128,usize,u128);
