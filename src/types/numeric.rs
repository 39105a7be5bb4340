// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use serde_derive::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A number on the dual channel the library computes with: an exact 64-bit
/// integer where possible, a machine float otherwise.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

/// The result of coercing a pair of `Numeric`s into the same underlying
/// representation. If either is a float, both become floats.
enum Parity {
    Integer(i64, i64),
    Float(f64, f64),
}

impl Numeric {
    /// Parses integer first, float second, so that values within the
    /// 64-bit range keep exact semantics.
    pub fn parse(text: &str) -> Result<Numeric, Error> {
        if let Ok(value) = text.parse::<i64>() {
            return Ok(Numeric::Integer(value));
        }
        match text.parse::<f64>() {
            Ok(value) => Ok(Numeric::Float(value)),
            Err(_) => Err(Error::NotANumber(text.to_owned())),
        }
    }

    /// The canonical form of a computed value: an integer when the value
    /// is mathematically one and inside the 64-bit range, a float
    /// otherwise.
    pub fn canonical(value: f64) -> Numeric {
        if value.ceil() == value && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
            Numeric::Integer(value as i64)
        } else {
            Numeric::Float(value)
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Numeric::Integer(value) => value as f64,
            Numeric::Float(value) => value,
        }
    }

    /// Conversion to the integer channel, clamping at the range ends.
    pub fn saturating_i64(self) -> i64 {
        match self {
            Numeric::Integer(value) => value,
            Numeric::Float(value) => {
                if value > i64::MAX as f64 {
                    i64::MAX
                } else if value > i64::MIN as f64 {
                    value as i64
                } else {
                    i64::MIN
                }
            }
        }
    }

    fn parity(self, other: Numeric) -> Parity {
        match (self, other) {
            (Numeric::Integer(left), Numeric::Integer(right)) => Parity::Integer(left, right),
            (left, right) => Parity::Float(left.to_f64(), right.to_f64()),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Numeric {
        Numeric::Integer(value)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Numeric {
        Numeric::Float(value)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Numeric) -> Option<Ordering> {
        match self.parity(*other) {
            Parity::Integer(left, right) => Some(left.cmp(&right)),
            Parity::Float(left, right) => left.partial_cmp(&right),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(value) => value.fmt(f),
            Numeric::Float(value) => value.fmt(f),
        }
    }
}
