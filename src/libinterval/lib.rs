// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides a generic convex interval over totally ordered scalars (integers or floating point numbers), each side being unbounded, open or closed. It implements the algebra needed to reason about ranges: membership, ordering of endpoints, containment, intersection, difference, union of adjoining intervals and convex hull.
//!
//! The type never represents an empty set: an operation with an empty result returns `None`, and the difference returns the (optional) pieces left and right of the subtracted interval. No arithmetic is done on the bounds, only comparisons.
//!
//! The interval implements the collection traits of [gcollections](https://docs.rs/gcollections) so it can be used by algorithms generic over these operations.
//!
//! # Examples
//!
//! For examples see the [interval module](interval/index.html).
//!
//! # References
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//!

pub mod endpoint;
pub mod error;
pub mod interval;
pub mod ops;

pub use crate::endpoint::Endpoint;
pub use crate::error::IntervalError;
pub use crate::interval::{Interval, ToInterval};
pub use crate::ops::{Hull, Scalar, Whole};
