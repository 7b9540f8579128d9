// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Process-wide registry of the empty range of each element type.
//!
//! Generic statics do not exist, so the sentinel of `Range<T>` is created on first access, leaked, and stored under the `TypeId` of `Range<T>`. It lives from its first access until process exit and is never reclaimed.

use crate::range::Range;
use lazy_static::lazy_static;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

type Sentinel = &'static (dyn Any + Send + Sync);

lazy_static! {
  static ref SENTINELS: Mutex<HashMap<TypeId, Sentinel>> = Mutex::new(HashMap::new());
}

pub(crate) fn sentinel<T>() -> &'static Range<T> where
  T: Send + Sync + 'static
{
  // Nothing panics while the lock is held, but a poisoned map is still consistent.
  let mut sentinels = SENTINELS.lock().unwrap_or_else(PoisonError::into_inner);
  let sentinel: Sentinel = *sentinels.entry(TypeId::of::<Range<T>>())
    .or_insert_with(|| {
      log::trace!("registering the empty range of `{}`", std::any::type_name::<T>());
      let leaked: &'static Range<T> = Box::leak(Box::new(Range::empty_value()));
      leaked as Sentinel
    });
  match sentinel.downcast_ref::<Range<T>>() {
    Some(empty) => empty,
    None => unreachable!("the sentinel registered for `{}` has another type", std::any::type_name::<T>())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::thread;

  #[test]
  fn same_instance_test() {
    let a: &'static Range<i32> = sentinel();
    let b: &'static Range<i32> = sentinel();
    assert!(std::ptr::eq(a, b));
    assert!(a.is_empty());
  }

  #[test]
  fn one_instance_per_type_test() {
    let ints: &'static Range<i32> = sentinel();
    let longs: &'static Range<i64> = sentinel();
    let ints_addr = ints as *const Range<i32> as usize;
    let longs_addr = longs as *const Range<i64> as usize;
    assert!(ints_addr != longs_addr);
  }

  #[test]
  fn concurrent_first_access_test() {
    let handles: Vec<_> = (0..8)
      .map(|_| thread::spawn(|| sentinel::<u16>() as *const Range<u16> as usize))
      .collect();
    let addresses: Vec<usize> = handles.into_iter()
      .map(|h| h.join().unwrap())
      .collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
  }
}
