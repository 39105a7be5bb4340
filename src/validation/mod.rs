// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validation of quantities against ordered lists of intervals.

use crate::error::Error;
use crate::parsing;
use crate::types::{DimensionalUnit, Numeric, QuantityInterval};
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The capability every validator offers: produce the canonical form of
/// the data or fail with a named error.
pub trait Validator {
    fn normalize(&self, data: &str) -> Result<String, Error>;

    /// `true` when [normalize][Validator::normalize] succeeds. Failures
    /// are expected here and never surface to the caller.
    fn is_valid(&self, data: &str) -> bool {
        match self.normalize(data) {
            Ok(_) => true,
            Err(error) => {
                log::trace!("rejected {data:?}: {error}");
                false
            }
        }
    }
}

/// Validates that a numeric quantity falls within one of an ordered,
/// non-overlapping list of intervals, converting it into the validator's
/// unit of measurement first.
///
/// The textual form is an optional unit label terminated by a colon,
/// followed by one or more intervals:
///
/// ```rust
/// use mensura::{IntervalsValidator, Validator};
///
/// let validator: IntervalsValidator = "Mbps: (0, 10000000]".parse().unwrap();
/// assert_eq!(validator.normalize("0.25 Tbps").unwrap(), "250000 Mbps");
/// assert!(!validator.is_valid("0 Mbps"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct IntervalsValidator {
    unit: DimensionalUnit,
    intervals: Vec<QuantityInterval>,
}

/// Running maxima for the endpoint ordering check, local to one parse.
/// Each endpoint advances the channel it parses in; the other channel is
/// derived by exact or saturating conversion. Keeping both channels makes
/// the check precision-aware: endpoints that collide as doubles can still
/// order correctly as integers, and vice versa.
struct Monotone {
    greatest_double: f64,
    greatest_long: i64,
}

impl Monotone {
    fn new() -> Monotone {
        Monotone {
            greatest_double: -f64::MAX,
            greatest_long: i64::MIN,
        }
    }

    fn advance(&mut self, endpoint: Numeric) -> bool {
        match endpoint {
            Numeric::Integer(value) => {
                if value < self.greatest_long {
                    return false;
                }
                self.greatest_long = value;
                self.greatest_double = value as f64;
            }
            Numeric::Float(value) => {
                if value < self.greatest_double {
                    return false;
                }
                self.greatest_double = value;
                self.greatest_long = endpoint.saturating_i64();
            }
        }
        true
    }
}

impl IntervalsValidator {
    pub fn parse(expression: &str) -> Result<IntervalsValidator, Error> {
        let parsed = parsing::interval::parse_validator(expression)?;
        let unit = DimensionalUnit::parse(parsed.unit.as_deref().unwrap_or(""))?;

        let mut intervals: Vec<QuantityInterval> = Vec::with_capacity(parsed.intervals.len());
        let mut order = Monotone::new();
        for interval in parsed.intervals {
            let quantity = QuantityInterval::new(interval, unit.clone());
            if intervals.contains(&quantity) {
                return Err(Error::DuplicateInterval(quantity.to_string()));
            }
            let left = quantity
                .interval()
                .left_value()
                .unwrap_or(Numeric::Integer(i64::MIN));
            let right = quantity
                .interval()
                .right_value()
                .unwrap_or(Numeric::Integer(i64::MAX));
            if !order.advance(left) || !order.advance(right) {
                return Err(Error::NotInOrder(quantity.to_string()));
            }
            intervals.push(quantity);
        }
        log::debug!(
            "parsed {} interval(s) with unit {:?}",
            intervals.len(),
            unit.to_string()
        );
        Ok(IntervalsValidator { unit, intervals })
    }

    /// The unit of measurement all values are normalised to. For example,
    /// with a unit of `Mbps` the expression `0.25 Tbps` normalises to
    /// `250000 Mbps`.
    pub fn unit(&self) -> &DimensionalUnit {
        &self.unit
    }

    /// `true` when this validator specifies a unit of measurement.
    pub fn has_unit(&self) -> bool {
        !self.unit.to_string().is_empty()
    }

    pub fn intervals(&self) -> &[QuantityInterval] {
        &self.intervals
    }
}

impl Validator for IntervalsValidator {
    fn normalize(&self, data: &str) -> Result<String, Error> {
        let data = parsing::trim(data);
        for interval in &self.intervals {
            if interval.contains(data)? {
                let value = interval.normalise(data)?;
                return Ok(if self.has_unit() {
                    format!("{} {}", value, self.unit)
                } else {
                    value.to_string()
                });
            }
        }
        Err(Error::NotWithin)
    }
}

impl fmt::Display for IntervalsValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_unit() {
            write!(f, "{}: ", self.unit)?;
        }
        for (at, interval) in self.intervals.iter().enumerate() {
            if at > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", interval.interval())?;
        }
        Ok(())
    }
}

impl FromStr for IntervalsValidator {
    type Err = Error;

    fn from_str(expression: &str) -> Result<IntervalsValidator, Error> {
        IntervalsValidator::parse(expression)
    }
}

impl From<IntervalsValidator> for String {
    fn from(validator: IntervalsValidator) -> String {
        validator.to_string()
    }
}

impl TryFrom<String> for IntervalsValidator {
    type Error = Error;

    fn try_from(expression: String) -> Result<IntervalsValidator, Error> {
        IntervalsValidator::parse(&expression)
    }
}
