// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Reasons for which a pair of endpoints does not describe an interval.
///
/// Only the validating constructor [`Interval::try_new`](../interval/struct.Interval.html#method.try_new) reports them, the algebraic operations never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
  #[error("lower bound {lower} lies above upper bound {upper}")]
  Inverted { lower: String, upper: String },

  #[error("bounds meet at {value} but one side excludes it")]
  EmptyPoint { value: String },

  #[error("bound {value} is not comparable")]
  NotComparable { value: String },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    let inverted = IntervalError::Inverted { lower: "5".into(), upper: "2".into() };
    assert_eq!(inverted.to_string(), "lower bound 5 lies above upper bound 2");
    let point = IntervalError::EmptyPoint { value: "3".into() };
    assert_eq!(point.to_string(), "bounds meet at 3 but one side excludes it");
    let nan = IntervalError::NotComparable { value: "NaN".into() };
    assert_eq!(nan.to_string(), "bound NaN is not comparable");
  }
}
