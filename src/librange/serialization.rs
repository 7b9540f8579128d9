// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serde support.
//!
//! A bound is an externally tagged enum (`Closed` or `Open`) holding its value. A range is an optional pair of bounds, `None` being the empty range. Deserialized ranges are validated like any other construction.

use crate::bound::Bound;
use crate::range::Range;
use serde::de::{self, Deserialize, Deserializer, EnumAccess, VariantAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

const BOUND: &str = "Bound";
const VARIANTS: &[&str] = &["Closed", "Open"];

impl<T: Serialize> Serialize for Bound<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    match self {
      Bound::Closed(v) => serializer.serialize_newtype_variant(BOUND, 0, VARIANTS[0], v),
      Bound::Open(v) => serializer.serialize_newtype_variant(BOUND, 1, VARIANTS[1], v)
    }
  }
}

enum Kind {
  Closed,
  Open
}

struct KindVisitor;

impl<'de> Visitor<'de> for KindVisitor
{
  type Value = Kind;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("`Closed` or `Open`")
  }

  fn visit_u64<E: de::Error>(self, value: u64) -> Result<Kind, E> {
    match value {
      0 => Ok(Kind::Closed),
      1 => Ok(Kind::Open),
      _ => Err(E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }
  }

  fn visit_str<E: de::Error>(self, value: &str) -> Result<Kind, E> {
    match value {
      "Closed" => Ok(Kind::Closed),
      "Open" => Ok(Kind::Open),
      _ => Err(E::unknown_variant(value, VARIANTS))
    }
  }
}

impl<'de> Deserialize<'de> for Kind
{
  fn deserialize<D>(deserializer: D) -> Result<Kind, D::Error> where
    D: Deserializer<'de>
  {
    deserializer.deserialize_identifier(KindVisitor)
  }
}

struct BoundVisitor<T> {
  marker: PhantomData<T>
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for BoundVisitor<T>
{
  type Value = Bound<T>;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a closed or open bound")
  }

  fn visit_enum<A>(self, data: A) -> Result<Bound<T>, A::Error> where
    A: EnumAccess<'de>
  {
    let (kind, variant) = data.variant::<Kind>()?;
    match kind {
      Kind::Closed => variant.newtype_variant().map(Bound::Closed),
      Kind::Open => variant.newtype_variant().map(Bound::Open)
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Bound<T>
{
  fn deserialize<D>(deserializer: D) -> Result<Bound<T>, D::Error> where
    D: Deserializer<'de>
  {
    deserializer.deserialize_enum(BOUND, VARIANTS, BoundVisitor { marker: PhantomData })
  }
}

impl<T: Serialize> Serialize for Range<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
    S: Serializer
  {
    match self.bounds() {
      Some(bounds) => serializer.serialize_some(&bounds),
      None => serializer.serialize_none()
    }
  }
}

impl<'de, T> Deserialize<'de> for Range<T> where
  T: Deserialize<'de> + PartialOrd + Clone
{
  fn deserialize<D>(deserializer: D) -> Result<Range<T>, D::Error> where
    D: Deserializer<'de>
  {
    match Option::<(Bound<T>, Bound<T>)>::deserialize(deserializer)? {
      Some((lower, upper)) => Range::from_bounds(lower, upper)
        .map_err(|_| de::Error::custom("invalid range: the lower bound does not admit the upper bound")),
      None => Ok(Range::empty_value())
    }
  }
}
