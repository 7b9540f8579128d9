// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library proposes a generic range over any partially ordered type, where each bound is either closed (the endpoint is included) or open (the endpoint is excluded). A range is validated at construction and immutable afterwards. It supports membership tests, clamping, lazy generation of its elements and the interval algebra (overlap, intersection and join), with a distinguished empty range per element type.
//!
//! The operations are also available through the traits of [gcollections](https://docs.rs/gcollections) so ranges can be used in generic collection code.
//!
//! # Examples
//!
//! ```rust
//! use range::Range;
//!
//! let r = Range::closed(1, 5).unwrap();
//! assert_eq!(r.to_string(), "[1..5]");
//! assert!(r.contains(&5));
//!
//! let odds: Vec<i32> = r.generate(|x| x + 2).collect::<Result<_, _>>().unwrap();
//! assert_eq!(odds, vec![1, 3, 5]);
//!
//! let hull = r.join(&Range::half_open(8, 10).unwrap());
//! assert_eq!(hull.to_string(), "[1..10)");
//!
//! let empty = Range::<i32>::empty();
//! assert!(std::ptr::eq(empty, Range::<i32>::empty()));
//! assert_eq!(r.intersect(empty), *empty);
//! ```
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//!

pub mod algebra;
pub mod bound;
mod empty;
pub mod error;
pub mod factory;
pub mod generate;
pub mod ops;
pub mod range;
pub mod serialization;

pub use crate::bound::Bound;
pub use crate::error::{ErrorKind, RangeError};
pub use crate::generate::Generate;
pub use crate::range::Range;
