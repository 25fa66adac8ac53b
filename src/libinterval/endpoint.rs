// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One side of an interval.
//!
//! An endpoint is either unbounded, open (the value is excluded) or closed (the value is included). The same endpoint value does not sit at the same place depending on the side it bounds: as a lower edge, `Closed(v)` starts before `Open(v)`, while as an upper edge `Open(v)` ends before `Closed(v)`. The comparison functions of this module encode these two orders; every interval operation is expressed with them.

use crate::ops::Scalar;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Bound;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Endpoint<T>
{
  /// Extends to infinity (negative on the lower side, positive on the upper side).
  Unbounded,
  /// Bounded, the value is excluded.
  Open(T),
  /// Bounded, the value is included.
  Closed(T)
}

impl<T> Endpoint<T>
{
  /// Endpoint described by the `(value, included, unbounded)` attributes. `value` and `included` are ignored when `unbounded` is set.
  pub fn from_parts(value: T, included: bool, unbounded: bool) -> Endpoint<T> {
    if unbounded { Endpoint::Unbounded }
    else if included { Endpoint::Closed(value) }
    else { Endpoint::Open(value) }
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      Endpoint::Unbounded => None,
      Endpoint::Open(v) | Endpoint::Closed(v) => Some(v)
    }
  }

  pub fn is_included(&self) -> bool {
    matches!(self, Endpoint::Closed(_))
  }

  pub fn is_unbounded(&self) -> bool {
    matches!(self, Endpoint::Unbounded)
  }

  /// Same value with the inclusion flipped. This is the edge of the complementary piece starting, or ending, where `self` is.
  pub fn complement(self) -> Endpoint<T> {
    match self {
      Endpoint::Unbounded => Endpoint::Unbounded,
      Endpoint::Open(v) => Endpoint::Closed(v),
      Endpoint::Closed(v) => Endpoint::Open(v)
    }
  }

  /// Maps the value, keeping the modality. `f` must be strictly increasing for the orders between endpoints to be preserved.
  pub fn map<U, F>(self, f: F) -> Endpoint<U> where
   F: FnOnce(T) -> U
  {
    match self {
      Endpoint::Unbounded => Endpoint::Unbounded,
      Endpoint::Open(v) => Endpoint::Open(f(v)),
      Endpoint::Closed(v) => Endpoint::Closed(f(v))
    }
  }

  pub fn as_bound(&self) -> Bound<&T> {
    match self {
      Endpoint::Unbounded => Bound::Unbounded,
      Endpoint::Open(v) => Bound::Excluded(v),
      Endpoint::Closed(v) => Bound::Included(v)
    }
  }
}

impl<T: Scalar> Endpoint<T>
{
  /// Whether `value` satisfies `self` used as a lower edge.
  pub fn admits_as_lower(&self, value: &T) -> bool {
    match self {
      Endpoint::Unbounded => true,
      Endpoint::Open(l) => l.compare(value) == Ordering::Less,
      Endpoint::Closed(l) => l.compare(value) != Ordering::Greater
    }
  }

  /// Whether `value` satisfies `self` used as an upper edge.
  pub fn admits_as_upper(&self, value: &T) -> bool {
    match self {
      Endpoint::Unbounded => true,
      Endpoint::Open(u) => value.compare(u) == Ordering::Less,
      Endpoint::Closed(u) => value.compare(u) != Ordering::Greater
    }
  }

  pub fn is_comparable(&self) -> bool {
    self.value().map_or(true, |v| v.is_comparable())
  }
}

impl<T> From<Bound<T>> for Endpoint<T>
{
  fn from(bound: Bound<T>) -> Endpoint<T> {
    match bound {
      Bound::Unbounded => Endpoint::Unbounded,
      Bound::Excluded(v) => Endpoint::Open(v),
      Bound::Included(v) => Endpoint::Closed(v)
    }
  }
}

/// Position of two lower edges on the line. Unbounded is leftmost, and at equal values the closed edge starts first.
pub fn cmp_lower<T: Scalar>(a: &Endpoint<T>, b: &Endpoint<T>) -> Ordering {
  use self::Endpoint::*;
  match (a, b) {
    (Unbounded, Unbounded) => Ordering::Equal,
    (Unbounded, _) => Ordering::Less,
    (_, Unbounded) => Ordering::Greater,
    (Closed(x), Open(y)) => x.compare(y).then(Ordering::Less),
    (Open(x), Closed(y)) => x.compare(y).then(Ordering::Greater),
    (Closed(x), Closed(y)) | (Open(x), Open(y)) => x.compare(y)
  }
}

/// Position of two upper edges on the line. Unbounded is rightmost, and at equal values the open edge ends first.
pub fn cmp_upper<T: Scalar>(a: &Endpoint<T>, b: &Endpoint<T>) -> Ordering {
  use self::Endpoint::*;
  match (a, b) {
    (Unbounded, Unbounded) => Ordering::Equal,
    (Unbounded, _) => Ordering::Greater,
    (_, Unbounded) => Ordering::Less,
    (Open(x), Closed(y)) => x.compare(y).then(Ordering::Less),
    (Closed(x), Open(y)) => x.compare(y).then(Ordering::Greater),
    (Closed(x), Closed(y)) | (Open(x), Open(y)) => x.compare(y)
  }
}

/// The lower edge `a` lies strictly left of the lower edge `b`.
pub fn lower_begins_before<T: Scalar>(a: &Endpoint<T>, b: &Endpoint<T>) -> bool {
  cmp_lower(a, b) == Ordering::Less
}

/// The upper edge `a` lies strictly left of the upper edge `b`.
pub fn upper_ends_before<T: Scalar>(a: &Endpoint<T>, b: &Endpoint<T>) -> bool {
  cmp_upper(a, b) == Ordering::Less
}

/// An interval ending at `upper` and one starting at `lower` meet without overlapping: same value, exactly one side includes it.
pub fn adjacent<T: Scalar>(upper: &Endpoint<T>, lower: &Endpoint<T>) -> bool {
  match (upper, lower) {
    (Endpoint::Open(u), Endpoint::Closed(l))
  | (Endpoint::Closed(u), Endpoint::Open(l)) => u.compare(l) == Ordering::Equal,
    _ => false
  }
}

/// No gap is left between an interval ending at `upper` and one starting at `lower`.
pub fn touches_or_passes<T: Scalar>(upper: &Endpoint<T>, lower: &Endpoint<T>) -> bool {
  match (upper.value(), lower.value()) {
    (Some(u), Some(l)) =>
      match u.compare(l) {
        Ordering::Greater => true,
        Ordering::Equal => upper.is_included() || lower.is_included(),
        Ordering::Less => false
      },
    _ => true
  }
}

/// `lower` and `upper` delimit at least one value.
pub fn spans<T: Scalar>(lower: &Endpoint<T>, upper: &Endpoint<T>) -> bool {
  match (lower, upper) {
    (Endpoint::Closed(l), Endpoint::Closed(u)) => l.compare(u) != Ordering::Greater,
    _ => match (lower.value(), upper.value()) {
      (Some(l), Some(u)) => l.compare(u) == Ordering::Less,
      _ => true
    }
  }
}

pub fn leftmost_lower<T: Scalar>(a: Endpoint<T>, b: Endpoint<T>) -> Endpoint<T> {
  if cmp_lower(&b, &a) == Ordering::Less { b } else { a }
}

pub fn rightmost_lower<T: Scalar>(a: Endpoint<T>, b: Endpoint<T>) -> Endpoint<T> {
  if cmp_lower(&b, &a) == Ordering::Greater { b } else { a }
}

pub fn leftmost_upper<T: Scalar>(a: Endpoint<T>, b: Endpoint<T>) -> Endpoint<T> {
  if cmp_upper(&b, &a) == Ordering::Less { b } else { a }
}

pub fn rightmost_upper<T: Scalar>(a: Endpoint<T>, b: Endpoint<T>) -> Endpoint<T> {
  if cmp_upper(&b, &a) == Ordering::Greater { b } else { a }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use super::Endpoint::*;

  const inf: Endpoint<i32> = Unbounded;
  const o4: Endpoint<i32> = Open(4);
  const c4: Endpoint<i32> = Closed(4);
  const o5: Endpoint<i32> = Open(5);
  const c5: Endpoint<i32> = Closed(5);

  #[test]
  fn lower_order() {
    let cases = vec![
      (inf, c4, true, false),
      (inf, inf, false, false),
      (c4, c5, true, false),
      (o4, c5, true, false),
      (o5, c4, false, true),
      (c4, o4, true, false),
      (c4, c4, false, false),
      (o4, o4, false, false),
    ];
    for (a, b, a_first, b_first) in cases {
      assert_eq!(lower_begins_before(&a, &b), a_first, "{:?} before {:?}", a, b);
      assert_eq!(lower_begins_before(&b, &a), b_first, "{:?} before {:?}", b, a);
    }
  }

  #[test]
  fn upper_order() {
    let cases = vec![
      (c4, inf, true, false),
      (inf, inf, false, false),
      (c4, c5, true, false),
      (c4, o5, true, false),
      (o4, c4, true, false),
      (c5, c5, false, false),
      (o5, o5, false, false),
    ];
    for (a, b, a_first, b_first) in cases {
      assert_eq!(upper_ends_before(&a, &b), a_first, "{:?} before {:?}", a, b);
      assert_eq!(upper_ends_before(&b, &a), b_first, "{:?} before {:?}", b, a);
    }
  }

  #[test]
  fn meeting_edges() {
    assert!(adjacent(&o4, &c4));
    assert!(adjacent(&c4, &o4));
    assert!(!adjacent(&c4, &c4));
    assert!(!adjacent(&o4, &o4));
    assert!(!adjacent(&o4, &c5));
    assert!(!adjacent(&inf, &c4));

    assert!(touches_or_passes(&c5, &c4));
    assert!(touches_or_passes(&c4, &c4));
    assert!(touches_or_passes(&o4, &c4));
    assert!(touches_or_passes(&c4, &o4));
    assert!(!touches_or_passes(&o4, &o4));
    assert!(!touches_or_passes(&c4, &c5));
    assert!(touches_or_passes(&inf, &c5));
    assert!(touches_or_passes(&c4, &inf));
  }

  #[test]
  fn spanning() {
    assert!(spans(&c4, &c4));
    assert!(!spans(&o4, &c4));
    assert!(!spans(&c4, &o4));
    assert!(spans(&o4, &o5));
    assert!(!spans(&c5, &c4));
    assert!(spans(&inf, &c4));
    assert!(spans(&c5, &inf));
  }

  #[test]
  fn extremes() {
    assert_eq!(leftmost_lower(o4, c4), c4);
    assert_eq!(rightmost_lower(o4, c4), o4);
    assert_eq!(leftmost_upper(o4, c4), o4);
    assert_eq!(rightmost_upper(o4, c4), c4);
    assert_eq!(leftmost_lower(c5, inf), inf);
    assert_eq!(rightmost_upper(inf, c5), inf);
  }

  #[test]
  fn membership() {
    assert!(c4.admits_as_lower(&4));
    assert!(!o4.admits_as_lower(&4));
    assert!(o4.admits_as_lower(&5));
    assert!(c4.admits_as_upper(&4));
    assert!(!o4.admits_as_upper(&4));
    assert!(inf.admits_as_lower(&i32::min_value()));
    assert!(inf.admits_as_upper(&i32::max_value()));
  }

  #[test]
  fn conversions() {
    assert_eq!(Endpoint::from_parts(3, true, false), Closed(3));
    assert_eq!(Endpoint::from_parts(3, false, false), Open(3));
    assert_eq!(Endpoint::from_parts(3, true, true), inf);
    assert_eq!(Endpoint::from(Bound::Excluded(4)), o4);
    assert_eq!(c4.as_bound(), Bound::Included(&4));
    assert_eq!(c4.complement(), o4);
    assert_eq!(inf.complement(), inf);
    assert_eq!(o4.map(|v| v as f64 / 2.0), Open(2.0));
    assert!(!Closed(f64::NAN).is_comparable());
  }
}
