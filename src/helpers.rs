// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use crate::types::{DimensionalUnit, PrefixFamily};
use crate::validation::IntervalsValidator;

/// Parses a unit expression, guessing the prefix family from the factors.
pub fn parse_unit(text: &str) -> Result<DimensionalUnit, Error> {
    DimensionalUnit::parse(text)
}

/// Parses a unit expression against an explicit prefix family.
pub fn parse_unit_with(text: &str, family: PrefixFamily) -> Result<DimensionalUnit, Error> {
    DimensionalUnit::parse_with(text, family)
}

/// Parses an interval list such as `"MiB: (0, 2560]"` into a validator.
pub fn parse_intervals(text: &str) -> Result<IntervalsValidator, Error> {
    IntervalsValidator::parse(text)
}

/// Returns `env!("CARGO_PKG_VERSION")`, a string in `x.y.z` format.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
