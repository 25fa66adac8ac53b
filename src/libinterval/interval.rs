// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convex interval with open, closed or unbounded endpoints.
//!
//! An interval is a connected subset of an ordered line. Each side is an [`Endpoint`](../endpoint/enum.Endpoint.html): unbounded, open or closed. There is no empty interval: operations whose result would be empty return `None` instead.
//!
//! # Examples
//!
//! ```rust
//! use interval::Interval;
//!
//! let a = Interval::closed(0, 12);
//! let b = Interval::closed(4, 8);
//!
//! assert_eq!(a.intersect(&b), Some(b));
//! assert_eq!(a.subtract(&b), (Some(Interval::closed_open(0, 4)), Some(Interval::open_closed(8, 12))));
//! assert_eq!(Interval::closed_open(0, 6).adjoin(&Interval::closed(6, 12)), Some(a));
//! assert_eq!(Interval::closed_open(0, 6).adjoin(&Interval::open_closed(6, 12)), None);
//! assert_eq!(format!("{}", Interval::at_most(7)), "(-∞, 7]");
//! ```
//!
//! Floating point bounds work the same way, NaN excepted:
//!
//! ```rust
//! use interval::Interval;
//!
//! let a = Interval::at_most(10.0);
//! assert_eq!(a.intersect(&Interval::at_least(5.0)), Some(Interval::closed(5.0, 10.0)));
//! assert!(Interval::try_new(interval::Endpoint::Closed(f64::NAN), interval::Endpoint::Unbounded).is_err());
//! ```

use crate::endpoint::*;
use crate::error::IntervalError;
use crate::ops::*;
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Difference, Disjoint, Intersection, Overlap, ProperSubset, Subset, Union};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Interval<T>
{
  lower: Endpoint<T>,
  upper: Endpoint<T>
}

impl<T> Interval<T>
{
  /// Interval between two endpoints. The endpoints are not validated: a lower value above the upper one, or equal values with an excluded side, give unspecified (but never panicking) results. See [`try_new`](#method.try_new).
  pub fn new(lower: Endpoint<T>, upper: Endpoint<T>) -> Interval<T> {
    Interval { lower: lower, upper: upper }
  }

  pub fn lower_endpoint(&self) -> &Endpoint<T> {
    &self.lower
  }

  pub fn upper_endpoint(&self) -> &Endpoint<T> {
    &self.upper
  }

  pub fn lower_included(&self) -> bool {
    self.lower.is_included()
  }

  pub fn upper_included(&self) -> bool {
    self.upper.is_included()
  }

  pub fn lower_unbounded(&self) -> bool {
    self.lower.is_unbounded()
  }

  pub fn upper_unbounded(&self) -> bool {
    self.upper.is_unbounded()
  }

  pub fn is_bounded(&self) -> bool {
    !self.lower_unbounded() && !self.upper_unbounded()
  }
}

impl<T: Scalar> Interval<T>
{
  /// Interval from the six attributes `lower`, `upper`, `lower_included`, `lower_unbounded`, `upper_included` and `upper_unbounded`. The value and inclusion of an unbounded side are dropped. No validation is performed.
  pub fn from_parts(lower: T, upper: T, lower_included: bool, lower_unbounded: bool,
    upper_included: bool, upper_unbounded: bool) -> Interval<T>
  {
    Interval::new(
      Endpoint::from_parts(lower, lower_included, lower_unbounded),
      Endpoint::from_parts(upper, upper_included, upper_unbounded))
  }

  /// Validating constructor: the endpoints must delimit at least one value.
  pub fn try_new(lower: Endpoint<T>, upper: Endpoint<T>) -> Result<Interval<T>, IntervalError> {
    let interval = Interval::new(lower, upper);
    interval.check()
      .map(|_| interval)
      .map_err(|e| {
        debug!("rejected interval {:?}: {}", interval, e);
        e
      })
  }

  /// `[lower, upper]`
  pub fn closed(lower: T, upper: T) -> Interval<T> {
    Interval::new(Endpoint::Closed(lower), Endpoint::Closed(upper))
  }

  /// `(lower, upper)`
  pub fn open(lower: T, upper: T) -> Interval<T> {
    Interval::new(Endpoint::Open(lower), Endpoint::Open(upper))
  }

  /// `[lower, upper)`
  pub fn closed_open(lower: T, upper: T) -> Interval<T> {
    Interval::new(Endpoint::Closed(lower), Endpoint::Open(upper))
  }

  /// `(lower, upper]`
  pub fn open_closed(lower: T, upper: T) -> Interval<T> {
    Interval::new(Endpoint::Open(lower), Endpoint::Closed(upper))
  }

  /// `(-∞, upper]`
  pub fn at_most(upper: T) -> Interval<T> {
    Interval::new(Endpoint::Unbounded, Endpoint::Closed(upper))
  }

  /// `(-∞, upper)`
  pub fn below(upper: T) -> Interval<T> {
    Interval::new(Endpoint::Unbounded, Endpoint::Open(upper))
  }

  /// `[lower, +∞)`
  pub fn at_least(lower: T) -> Interval<T> {
    Interval::new(Endpoint::Closed(lower), Endpoint::Unbounded)
  }

  /// `(lower, +∞)`
  pub fn above(lower: T) -> Interval<T> {
    Interval::new(Endpoint::Open(lower), Endpoint::Unbounded)
  }

  pub fn singleton(value: T) -> Interval<T> {
    Interval::closed(value, value)
  }

  /// Lower value, `None` if the interval extends to -∞.
  pub fn lower(&self) -> Option<T> {
    self.lower.value().cloned()
  }

  /// Upper value, `None` if the interval extends to +∞.
  pub fn upper(&self) -> Option<T> {
    self.upper.value().cloned()
  }

  /// True for `[v, v]` only.
  pub fn is_singleton(&self) -> bool {
    match (&self.lower, &self.upper) {
      (Endpoint::Closed(l), Endpoint::Closed(u)) => l.compare(u) == Ordering::Equal,
      _ => false
    }
  }

  pub fn is_well_formed(&self) -> bool {
    self.check().is_ok()
  }

  fn check(&self) -> Result<(), IntervalError> {
    let not_comparable = self.lower.value().into_iter()
      .chain(self.upper.value())
      .find(|v| !v.is_comparable());
    if let Some(v) = not_comparable {
      return Err(IntervalError::NotComparable { value: format!("{:?}", v) });
    }
    match (self.lower.value(), self.upper.value()) {
      (Some(l), Some(u)) =>
        match l.compare(u) {
          Ordering::Greater => Err(IntervalError::Inverted {
            lower: format!("{:?}", l),
            upper: format!("{:?}", u)
          }),
          Ordering::Equal if !spans(&self.lower, &self.upper) =>
            Err(IntervalError::EmptyPoint { value: format!("{:?}", l) }),
          _ => Ok(())
        },
      _ => Ok(())
    }
  }

  /// Whether `value` belongs to the interval.
  pub fn has(&self, value: &T) -> bool {
    self.lower.admits_as_lower(value) && self.upper.admits_as_upper(value)
  }

  /// `self` begins strictly before `other` begins.
  ///
  /// ```text
  ///    [-----self----
  ///       [----other---     true
  ///    (-----self----
  ///    [-----other---       false
  /// ```
  pub fn lt_begin_of(&self, other: &Interval<T>) -> bool {
    lower_begins_before(&self.lower, &other.lower)
  }

  /// `self` ends at the same place as `other` or before.
  pub fn le_end_of(&self, other: &Interval<T>) -> bool {
    cmp_upper(&self.upper, &other.upper) != Ordering::Greater
  }

  /// Every value of `other` belongs to `self`.
  pub fn contains(&self, other: &Interval<T>) -> bool {
    cmp_lower(&self.lower, &other.lower) != Ordering::Greater
      && cmp_upper(&other.upper, &self.upper) != Ordering::Greater
  }

  /// At least one value belongs to both intervals.
  pub fn overlaps(&self, other: &Interval<T>) -> bool {
    self.intersect(other).is_some()
  }

  /// The two intervals share no value but their union leaves no gap: they meet at a value included by exactly one of them.
  pub fn is_adjacent_to(&self, other: &Interval<T>) -> bool {
    adjacent(&self.upper, &other.lower) || adjacent(&other.upper, &self.lower)
  }

  /// Values belonging to both intervals, `None` if there are none.
  pub fn intersect(&self, other: &Interval<T>) -> Option<Interval<T>> {
    let lower = rightmost_lower(self.lower, other.lower);
    let upper = leftmost_upper(self.upper, other.upper);
    if spans(&lower, &upper) {
      Some(Interval::new(lower, upper))
    }
    else {
      trace!("{:?} and {:?} do not overlap", self, other);
      None
    }
  }

  /// Smallest interval containing both intervals (convex hull).
  pub fn encompass(&self, other: &Interval<T>) -> Interval<T> {
    Interval::new(
      leftmost_lower(self.lower, other.lower),
      rightmost_upper(self.upper, other.upper))
  }

  /// Union of the two intervals when it is itself an interval: they overlap or are adjacent. The result is then the same as [`encompass`](#method.encompass).
  pub fn adjoin(&self, other: &Interval<T>) -> Option<Interval<T>> {
    if touches_or_passes(&self.upper, &other.lower)
     && touches_or_passes(&other.upper, &self.lower)
    {
      Some(self.encompass(other))
    }
    else {
      trace!("gap between {:?} and {:?}", self, other);
      None
    }
  }

  /// Values of `self` not in `other`, as the pieces left and right of `other`.
  ///
  /// ```text
  ///    [----------- self -----------]
  ///           [--- other ---]
  ///    [------)             (-------]
  ///     before               after
  /// ```
  pub fn subtract(&self, other: &Interval<T>) -> (Option<Interval<T>>, Option<Interval<T>>) {
    if !self.overlaps(other) {
      return
        if self.lt_begin_of(other) { (Some(*self), None) }
        else { (None, Some(*self)) };
    }
    let before =
      if self.lt_begin_of(other) {
        piece(self.lower, leftmost_upper(other.lower.complement(), self.upper))
      }
      else { None };
    let after =
      if upper_ends_before(&other.upper, &self.upper) {
        piece(rightmost_lower(other.upper.complement(), self.lower), self.upper)
      }
      else { None };
    (before, after)
  }
}

fn piece<T: Scalar>(lower: Endpoint<T>, upper: Endpoint<T>) -> Option<Interval<T>> {
  if spans(&lower, &upper) {
    Some(Interval::new(lower, upper))
  }
  else {
    trace!("dropping empty piece {:?}, {:?}", lower, upper);
    None
  }
}

impl<T: Scalar> Whole for Interval<T>
{
  fn whole() -> Interval<T> {
    Interval::new(Endpoint::Unbounded, Endpoint::Unbounded)
  }
}

impl<T: Scalar> Hull for Interval<T>
{
  type Output = Interval<T>;

  fn hull(&self, rhs: &Interval<T>) -> Interval<T> {
    self.encompass(rhs)
  }
}

impl<T: Scalar + Display> Display for Interval<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    match &self.lower {
      Endpoint::Unbounded => formatter.write_str("(-∞")?,
      Endpoint::Open(v) => write!(formatter, "({}", v)?,
      Endpoint::Closed(v) => write!(formatter, "[{}", v)?
    }
    formatter.write_str(", ")?;
    match &self.upper {
      Endpoint::Unbounded => formatter.write_str("+∞)"),
      Endpoint::Open(v) => write!(formatter, "{})", v),
      Endpoint::Closed(v) => write!(formatter, "{}]", v)
    }
  }
}

impl<T> Collection for Interval<T>
{
  type Item = T;
}

impl<T: Scalar> Contains for Interval<T>
{
  fn contains(&self, value: &T) -> bool {
    self.has(value)
  }
}

impl<T: Scalar> Subset for Interval<T>
{
  fn is_subset(&self, other: &Interval<T>) -> bool {
    Interval::contains(other, self)
  }
}

impl<T: Scalar> ProperSubset for Interval<T>
{
  fn is_proper_subset(&self, other: &Interval<T>) -> bool {
    self.is_subset(other) && self != other
  }
}

impl<T: Scalar> Overlap for Interval<T>
{
  fn overlap(&self, other: &Interval<T>) -> bool {
    self.overlaps(other)
  }
}

impl<T: Scalar> Disjoint for Interval<T>
{
  fn is_disjoint(&self, other: &Interval<T>) -> bool {
    !self.overlaps(other)
  }
}

impl<T: Scalar> Intersection for Interval<T>
{
  type Output = Option<Interval<T>>;

  fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>> {
    self.intersect(other)
  }
}

impl<T: Scalar> Union for Interval<T>
{
  type Output = Option<Interval<T>>;

  fn union(&self, other: &Interval<T>) -> Option<Interval<T>> {
    self.adjoin(other)
  }
}

impl<T: Scalar> Difference for Interval<T>
{
  type Output = (Option<Interval<T>>, Option<Interval<T>>);

  fn difference(&self, other: &Interval<T>) -> (Option<Interval<T>>, Option<Interval<T>>) {
    self.subtract(other)
  }
}

impl<T: Scalar> RangeBounds<T> for Interval<T>
{
  fn start_bound(&self) -> Bound<&T> {
    self.lower.as_bound()
  }

  fn end_bound(&self) -> Bound<&T> {
    self.upper.as_bound()
  }
}

impl<T: Scalar> From<Range<T>> for Interval<T>
{
  fn from(range: Range<T>) -> Interval<T> {
    Interval::closed_open(range.start, range.end)
  }
}

impl<T: Scalar> From<RangeInclusive<T>> for Interval<T>
{
  fn from(range: RangeInclusive<T>) -> Interval<T> {
    let (lower, upper) = range.into_inner();
    Interval::closed(lower, upper)
  }
}

impl<T: Scalar> From<RangeFrom<T>> for Interval<T>
{
  fn from(range: RangeFrom<T>) -> Interval<T> {
    Interval::at_least(range.start)
  }
}

impl<T: Scalar> From<RangeTo<T>> for Interval<T>
{
  fn from(range: RangeTo<T>) -> Interval<T> {
    Interval::below(range.end)
  }
}

impl<T: Scalar> From<RangeToInclusive<T>> for Interval<T>
{
  fn from(range: RangeToInclusive<T>) -> Interval<T> {
    Interval::at_most(range.end)
  }
}

impl<T: Scalar> From<RangeFull> for Interval<T>
{
  fn from(_: RangeFull) -> Interval<T> {
    Interval::whole()
  }
}

pub trait ToInterval<T>
{
  fn to_interval(self) -> Interval<T>;
}

impl<T: Scalar> ToInterval<T> for Interval<T>
{
  fn to_interval(self) -> Interval<T> { self }
}

impl<T: Scalar> ToInterval<T> for (T, T)
{
  fn to_interval(self) -> Interval<T> {
    let (a, b) = self;
    Interval::closed(a, b)
  }
}

macro_rules! singleton_to_interval_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl ToInterval<$t> for $t
    {
      fn to_interval(self) -> Interval<$t> {
        Interval::singleton(self)
      }
    }
  )*}
}

singleton_to_interval_impl!(i8,u8,i16,u16,i32,u32,i64,u64,i128,u128,isize,usize,f32,f64);
