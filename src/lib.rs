// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mensura parses, converts, and validates physical quantities with units
//! of measurement. Human-friendly expressions such as `kilometres/h`,
//! `m²·kg/s²·A`, `2.5 GiB`, or `0.25 Tbps` become a canonical product of
//! prefixed symbols with integer exponents, supporting conversion between
//! commensurable units and range validation against ordered lists of
//! disjoint intervals.
//!
//! ## Units
//!
//! ```rust
//! # fn main() -> Result<(), mensura::Error> {
//! let kmh = mensura::parse_unit("kilometres/h")?;
//! assert_eq!(kmh.to_string(), "km/h");
//! assert_eq!(kmh.to(&mensura::parse_unit("m/h")?)?, 1000.0);
//!
//! // Like terms combine; binary prefixes are detected automatically.
//! let kib = mensura::parse_unit("kibibytes\u{b2}\u{b7}kibibytes\u{207B}\u{b9}")?;
//! assert_eq!(kib.to_string(), "KiB");
//! assert_eq!(kib.to(&mensura::parse_unit("kB")?)?, 1.024);
//! # Ok(())
//! # }
//! ```
//!
//! ## Interval validation
//!
//! A validator names a target unit and a list of intervals. Incoming
//! quantities may use any commensurable unit; they are converted and then
//! rendered in canonical form:
//!
//! ```rust
//! use mensura::Validator;
//!
//! # fn main() -> Result<(), mensura::Error> {
//! let validator = mensura::parse_intervals("MiB: (0, 2560]")?;
//! assert_eq!(validator.normalize("2.5 GiB")?, "2560 MiB");
//! assert!(validator.is_valid("1 GiB"));
//! assert!(!validator.is_valid("3 GiB"));
//! # Ok(())
//! # }
//! ```
//!
//! Unknown symbols flow through the algebra unchanged and only fail when a
//! conversion actually needs them to cancel, so `Mbps`, `bps`, or entirely
//! ad-hoc symbols work as long as both sides agree.

pub mod types;
pub mod validation;

mod error;
mod helpers;
mod parsing;

pub use crate::error::Error;
pub use crate::helpers::{parse_intervals, parse_unit, parse_unit_with, version};
pub use crate::types::{
    DimensionalUnit, Factor, Interval, Numeric, Prefix, PrefixFamily, QuantityInterval,
};
pub use crate::validation::{IntervalsValidator, Validator};
