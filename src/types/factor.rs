// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use crate::parsing;
use crate::types::prefix::Prefix;
use crate::types::Numeric;
use std::fmt;

/// The character joining multiplicative terms in canonical output.
pub(crate) const CHAR_MULTIPLY: char = '\u{b7}';

/// An individual multiplicative term in a product of variables with
/// integer exponents: `value · (prefix symbol)^exponent`.
///
/// The prefix is stored together with its resolved numeric factor, so the
/// effective factor is total; construction validates the prefix.
#[derive(Clone, Debug)]
pub struct Factor {
    value: f64,
    prefix: String,
    prefix_factor: f64,
    symbol: String,
    exponent: i32,
}

impl Factor {
    /// Parses one term. `sign` multiplies the exponent and is −1 for
    /// denominator terms.
    pub fn parse(expression: &str, sign: i32) -> Result<Factor, Error> {
        parsing::term::parse_term(expression, sign)
    }

    pub(crate) fn from_parts(
        value: f64,
        prefix: &str,
        prefix_factor: f64,
        symbol: String,
        exponent: i32,
    ) -> Factor {
        Factor {
            value,
            prefix: prefix.to_owned(),
            prefix_factor,
            symbol,
            exponent,
        }
    }

    /// The scalar multiplier not absorbed into the prefix; normally 1.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The value multiplied by the exponentiated prefix.
    ///
    /// Computed by repeated multiplication on the double channel; beyond
    /// the exa/exbi scale the 52-bit fraction makes round trips with exact
    /// 64-bit integers lossy.
    pub fn effective_factor(&self) -> f64 {
        let mut exponent = self.exponent;
        let nominal = if exponent < 0 {
            exponent = -exponent;
            1.0 / self.prefix_factor
        } else {
            self.prefix_factor
        };
        let mut factor = 1.0;
        for _ in 0..exponent {
            factor *= nominal;
        }
        self.value * factor
    }

    pub fn symbol_equals(&self, other: &Factor) -> bool {
        self.symbol == other.symbol
    }

    /// Same symbol and same exponent.
    pub fn dimension_equals(&self, other: &Factor) -> bool {
        self.symbol_equals(other) && self.exponent == other.exponent
    }

    /// Combines two occurrences of the same variable: exponents add, the
    /// effective factors multiply, and the prefix resets so that the
    /// caller can assign a best fit afterwards.
    pub fn combine(a: &Factor, b: &Factor) -> Result<Factor, Error> {
        if !a.symbol_equals(b) {
            return Err(Error::DifferentSymbols {
                left: a.symbol.clone(),
                right: b.symbol.clone(),
            });
        }
        Ok(merged(a, b))
    }

    /// Multiplies the exponent, typically by ±1.
    pub fn raise(&self, exponent: i32) -> Factor {
        Factor {
            value: self.value,
            prefix: self.prefix.clone(),
            prefix_factor: self.prefix_factor,
            symbol: self.symbol.clone(),
            exponent: self.exponent * exponent,
        }
    }

    /// A copy with value 1 and no prefix; the caller accounts for the
    /// dropped contribution on the scalar channel.
    pub fn normalised(&self) -> Factor {
        Factor {
            value: 1.0,
            prefix: String::new(),
            prefix_factor: 1.0,
            symbol: self.symbol.clone(),
            exponent: self.exponent,
        }
    }

    /// A copy with value 1 and the best-fitting prefix from the table.
    pub fn simplified(&self, table: &'static [Prefix]) -> Factor {
        let prefix = Prefix::for_value(self.effective_factor(), self.exponent, table);
        Factor {
            value: 1.0,
            prefix: prefix.label.to_owned(),
            prefix_factor: prefix.factor,
            symbol: self.symbol.clone(),
            exponent: self.exponent,
        }
    }

    /// `sign` multiplies the exponent before rendering; denominator factors
    /// print with sign −1.
    fn render(&self, sign: i32) -> String {
        let exponent = self.exponent * sign;
        let mut out = String::new();
        if self.value != 1.0 {
            out.push_str(&Numeric::canonical(self.value).to_string());
            out.push(' ');
        }
        out.push_str(&self.prefix);
        out.push_str(&self.symbol);
        if exponent != 1 {
            out.push_str(&parsing::format_superscript(exponent));
        }
        out
    }

    /// A per-factor hash that a product combines multiplicatively, so the
    /// ordering of factors cannot affect the product's hash.
    pub(crate) fn mix(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        let mut hash = OFFSET;
        for byte in self.symbol.as_bytes() {
            hash = (hash ^ u64::from(*byte)).wrapping_mul(PRIME);
        }
        hash = (hash ^ self.exponent as u64).wrapping_mul(PRIME);
        hash ^ self.effective_factor().to_bits()
    }
}

/// Assumes equal symbols.
fn merged(a: &Factor, b: &Factor) -> Factor {
    Factor {
        value: a.effective_factor() * b.effective_factor(),
        prefix: String::new(),
        prefix_factor: 1.0,
        symbol: a.symbol.clone(),
        exponent: a.exponent + b.exponent,
    }
}

/// Combines occurrences of the same variable, preserving the order of
/// first occurrence.
fn combine_like(factors: &[Factor]) -> Vec<Factor> {
    let mut combined: Vec<Factor> = Vec::new();
    for factor in factors {
        match combined.iter_mut().find(|other| other.symbol_equals(factor)) {
            Some(other) => *other = merged(other, factor),
            None => combined.push(factor.clone()),
        }
    }
    combined
}

/// Combines like terms, cancels zero exponents, re-prefixes each survivor
/// against the table, and moves negative exponents after positive ones.
/// Returns the accumulated ratio of old to new effective factors together
/// with the simplified product.
pub(crate) fn simplify_product(factors: &[Factor], table: &'static [Prefix]) -> (f64, Vec<Factor>) {
    let mut value = 1.0;
    let mut numerator = Vec::new();
    let mut denominator = Vec::new();
    for factor in combine_like(factors) {
        let simplified = factor.simplified(table);
        value *= factor.effective_factor() / simplified.effective_factor();
        if factor.exponent > 0 {
            numerator.push(simplified);
        } else if factor.exponent < 0 {
            denominator.push(simplified);
        }
    }
    numerator.extend(denominator);
    (value, numerator)
}

/// Like [simplify_product], but absorbs every prefix into the scalar
/// channel instead of choosing new ones.
pub(crate) fn normalise_product(factors: &[Factor]) -> (f64, Vec<Factor>) {
    let mut value = 1.0;
    let mut numerator = Vec::new();
    let mut denominator = Vec::new();
    for factor in combine_like(factors) {
        value *= factor.effective_factor();
        if factor.exponent > 0 {
            numerator.push(factor.normalised());
        } else if factor.exponent < 0 {
            denominator.push(factor.normalised());
        }
    }
    numerator.extend(denominator);
    (value, numerator)
}

/// Renders a product of factors: positive exponents joined by `·`, a
/// single `/` before the negative ones, which print with their exponents
/// negated.
pub(crate) fn format_product(factors: &[Factor]) -> String {
    let mut out = String::new();
    let mut iter = factors.iter();
    let mut multiply = false;
    while let Some(factor) = iter.next() {
        if factor.exponent < 0 {
            out.push('/');
            out.push_str(&factor.render(-1));
            for negative in iter.by_ref() {
                debug_assert!(negative.exponent < 0, "positive exponent after negative");
                out.push(CHAR_MULTIPLY);
                out.push_str(&negative.render(-1));
            }
            break;
        }
        if multiply {
            out.push(CHAR_MULTIPLY);
        }
        multiply = true;
        out.push_str(&factor.render(1));
    }
    out
}

impl PartialEq for Factor {
    fn eq(&self, other: &Factor) -> bool {
        self.dimension_equals(other) && self.effective_factor() == other.effective_factor()
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(1))
    }
}
