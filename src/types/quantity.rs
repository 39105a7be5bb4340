// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use crate::parsing;
use crate::types::{DimensionalUnit, Interval, Numeric};
use serde_derive::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An interval that also specifies its unit of measurement. Incoming
/// quantities may use any commensurable unit; they are converted to the
/// target unit before the containment test.
#[derive(Clone, Debug, Serialize)]
#[serde(into = "String")]
pub struct QuantityInterval {
    interval: Interval,
    unit: DimensionalUnit,
}

impl QuantityInterval {
    pub fn new(interval: Interval, unit: DimensionalUnit) -> QuantityInterval {
        QuantityInterval { interval, unit }
    }

    /// Parses an interval together with its unit label. The label must be
    /// given even for plain quantities: the empty string denotes the
    /// dimensionless unit.
    pub fn parse(interval: &str, unit: Option<&str>) -> Result<QuantityInterval, Error> {
        let label = unit.ok_or_else(|| {
            Error::InvalidExpression(
                "the unit of measurement must be specified (even if it's empty)".to_owned(),
            )
        })?;
        Ok(QuantityInterval {
            interval: Interval::parse(interval)?,
            unit: DimensionalUnit::parse(label)?,
        })
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// The unit of measurement all values are converted into.
    pub fn unit(&self) -> &DimensionalUnit {
        &self.unit
    }

    /// Extracts the decimal head and unit label from the quantity,
    /// converts into the target unit, and delegates to the interval.
    pub fn contains(&self, quantity: &str) -> Result<bool, Error> {
        let value = self.converted(quantity)?;
        Ok(self.interval.contains(value))
    }

    /// The quantity converted into the target unit, as an integer when the
    /// scaled value is exactly one.
    pub fn normalise(&self, quantity: &str) -> Result<Numeric, Error> {
        Ok(Numeric::canonical(self.converted(quantity)?))
    }

    fn converted(&self, quantity: &str) -> Result<f64, Error> {
        let (value, label) = parsing::split_quantity(quantity)?;
        let given = DimensionalUnit::parse(label)?;
        let ratio = given.to(&self.unit).map_err(|_| Error::IncompatibleUnit {
            given: given.to_string(),
            target: self.unit.to_string(),
        })?;
        Ok(value.to_f64() * ratio)
    }
}

impl fmt::Display for QuantityInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.interval, self.unit)
    }
}

impl From<QuantityInterval> for String {
    fn from(interval: QuantityInterval) -> String {
        interval.to_string()
    }
}

impl PartialEq for QuantityInterval {
    fn eq(&self, other: &QuantityInterval) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for QuantityInterval {}

impl Hash for QuantityInterval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}
