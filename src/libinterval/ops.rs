// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and bound specific operations.

use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Smallest value covering both operands (the convex hull for intervals).
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// The value covering the whole domain.
pub trait Whole
{
  fn whole() -> Self;
}

/// Values usable as interval bounds.
///
/// Only a total order on the valid values is required: bounds are compared, never added or subtracted. Floating point types are supported as long as NaN stays out of the intervals.
pub trait Scalar : Copy + PartialOrd + Debug
{
  /// Total order on valid values. Values that cannot be compared (NaN) are considered equal, the result is meaningless for them.
  fn compare(&self, other: &Self) -> Ordering;

  /// `false` if the value is outside the ordered domain.
  fn is_comparable(&self) -> bool {
    true
  }
}

macro_rules! integer_scalar_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Scalar for $t
    {
      fn compare(&self, other: &$t) -> Ordering {
        Ord::cmp(self, other)
      }
    }
  )*}
}

macro_rules! float_scalar_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Scalar for $t
    {
      fn compare(&self, other: &$t) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
      }

      fn is_comparable(&self) -> bool {
        !<$t as Float>::is_nan(*self)
      }
    }
  )*}
}

integer_scalar_impl!(i8,u8,i16,u16,i32,u32,i64,u64,i128,u128,isize,usize);
float_scalar_impl!(f32,f64);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn integer_compare() {
    assert_eq!(3i32.compare(&4), Ordering::Less);
    assert_eq!(4u8.compare(&4), Ordering::Equal);
    assert_eq!(i64::max_value().compare(&i64::min_value()), Ordering::Greater);
    assert!(0usize.is_comparable());
  }

  #[test]
  fn float_compare() {
    assert_eq!(1.5f64.compare(&2.0), Ordering::Less);
    assert_eq!(0.0f32.compare(&-0.0), Ordering::Equal);
    assert_eq!(f64::INFINITY.compare(&f64::MAX), Ordering::Greater);
    assert!(f64::NEG_INFINITY.is_comparable());
    assert!(!f64::NAN.is_comparable());
    assert!(!f32::NAN.is_comparable());
  }
}
