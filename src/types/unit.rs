// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use crate::parsing;
use crate::types::prefix::{self, PrefixFamily};
use crate::types::{factor, Factor, Numeric};
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A unit of measurement: a scalar value and a product of factors in
/// canonical order.
///
/// Canonical order means like terms have been combined, factors with
/// positive exponents precede those with negative ones, and within each
/// group the original insertion order is preserved. Two units compare
/// equal when the conversion ratio between them is exactly 1.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DimensionalUnit {
    value: f64,
    factors: Vec<Factor>,
}

impl DimensionalUnit {
    /// The empty product: the dimensionless unit 1.
    pub fn dimensionless() -> DimensionalUnit {
        DimensionalUnit {
            value: 1.0,
            factors: Vec::new(),
        }
    }

    /// Parses a unit expression, guessing whether to use binary or metric
    /// prefixes: if any factor carries a binary prefix, the binary table
    /// is assumed for the whole unit.
    pub fn parse(expression: &str) -> Result<DimensionalUnit, Error> {
        let factors = parsing::unit::parse_expression(expression)?;
        let family = detect_family(&factors);
        Ok(DimensionalUnit::simplify(factors, family))
    }

    /// Parses a unit expression against an explicit prefix family.
    pub fn parse_with(expression: &str, family: PrefixFamily) -> Result<DimensionalUnit, Error> {
        let factors = parsing::unit::parse_expression(expression)?;
        Ok(DimensionalUnit::simplify(factors, family))
    }

    fn simplify(factors: Vec<Factor>, family: PrefixFamily) -> DimensionalUnit {
        let (value, factors) = factor::simplify_product(&factors, family.table());
        DimensionalUnit { value, factors }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    pub fn is_dimensionless(&self) -> bool {
        self.factors.is_empty()
    }

    /// The scalar conversion rate that takes a value of this unit into a
    /// value of the other. Fails when the dimensions differ.
    pub fn to(&self, other: &DimensionalUnit) -> Result<f64, Error> {
        let mut all = self.factors.clone();
        all.extend(other.factors.iter().map(|factor| factor.raise(-1)));
        let (ratio, residue) = factor::normalise_product(&all);
        if residue.is_empty() {
            Ok(ratio)
        } else {
            Err(Error::NonScalarDimension {
                from: self.to_string(),
                to: other.to_string(),
                residue: factor::format_product(&residue),
            })
        }
    }
}

fn detect_family(factors: &[Factor]) -> PrefixFamily {
    for factor in factors {
        let used = factor.prefix();
        if used.is_empty() {
            continue;
        }
        for prefix in prefix::BINARY {
            if prefix.label.is_empty() {
                continue;
            }
            if used.starts_with(prefix.label) || used.starts_with(prefix.name) {
                return PrefixFamily::Binary;
            }
        }
    }
    PrefixFamily::Metric
}

impl fmt::Display for DimensionalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let product = factor::format_product(&self.factors);
        if self.value != 1.0 {
            write!(f, "{}", Numeric::canonical(self.value))?;
            if !product.is_empty() {
                f.write_str(" ")?;
            }
        }
        f.write_str(&product)
    }
}

impl FromStr for DimensionalUnit {
    type Err = Error;

    fn from_str(expression: &str) -> Result<DimensionalUnit, Error> {
        DimensionalUnit::parse(expression)
    }
}

impl From<DimensionalUnit> for String {
    fn from(unit: DimensionalUnit) -> String {
        unit.to_string()
    }
}

impl TryFrom<String> for DimensionalUnit {
    type Error = Error;

    fn try_from(expression: String) -> Result<DimensionalUnit, Error> {
        DimensionalUnit::parse(&expression)
    }
}

impl PartialEq for DimensionalUnit {
    fn eq(&self, other: &DimensionalUnit) -> bool {
        matches!(self.to(other), Ok(ratio) if ratio == 1.0)
    }
}

impl Hash for DimensionalUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The ordering of factors must not affect the hash, so the
        // per-factor hashes combine multiplicatively.
        let bits = self.value.to_bits();
        let mut combined = bits ^ (bits >> 32);
        for factor in &self.factors {
            combined = combined.wrapping_mul(factor.mix());
        }
        state.write_u64(combined);
    }
}
