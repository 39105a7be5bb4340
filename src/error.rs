// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Every failure the library reports. Validation never returns partial
/// results; an operation either produces a normalised value or exactly one
/// of these.
#[derive(thiserror::Error, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// The input does not match the grammar of the expression being parsed.
    #[error("{0}")]
    InvalidExpression(String),

    /// A prefix label that is in neither the metric nor the binary table.
    #[error("unknown prefix: {0:?}")]
    UnknownPrefix(String),

    /// Two factors with different symbols cannot be combined.
    #[error("different symbols: {left}\u{b7}{right}")]
    DifferentSymbols { left: String, right: String },

    /// A conversion left residual factors, so the units are not
    /// commensurable.
    #[error("conversion from {from:?} to {to:?} has nonscalar dimension: {residue}")]
    NonScalarDimension {
        from: String,
        to: String,
        residue: String,
    },

    /// A closed bracket around an infinite endpoint.
    #[error("ambiguous {side} endpoint is infinite and closed: {interval}")]
    AmbiguousInfinite {
        side: &'static str,
        interval: String,
    },

    /// An endpoint or quantity that parses as neither integer nor float.
    #[error("the value {0:?} is not a number")]
    NotANumber(String),

    /// The same canonical interval appears twice in one validator.
    #[error("duplicate interval {0}")]
    DuplicateInterval(String),

    /// Interval endpoints are not monotonically non-decreasing.
    #[error("the interval {0} is not in order")]
    NotInOrder(String),

    /// The incoming quantity's unit does not convert to the target unit.
    #[error("the unit {given:?} is not compatible with {target:?}")]
    IncompatibleUnit { given: String, target: String },

    /// The value is not inside any interval of the validator.
    #[error("not within a valid interval")]
    NotWithin,
}
