// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The metric (SI) and binary (IEC 80000-13) prefix tables.
//!
//! All factors are IEEE 754 doubles with a 52-bit fraction. Exact
//! calculations mixing these factors with 64-bit integers work up to the
//! peta/pebi scale; exa, exbi, zetta, zebi, yotta and yobi exceed 52 bits
//! and round-trip equality with exact integers is not guaranteed there.

use crate::error::Error;
use serde_derive::{Deserialize, Serialize};

pub const YOCTO: f64 = 1e-24;
pub const ZEPTO: f64 = 1e-21;
pub const ATTO: f64 = 1e-18;
pub const FEMTO: f64 = 1e-15;
pub const PICO: f64 = 1e-12;
pub const NANO: f64 = 1e-9;
pub const MICRO: f64 = 1e-6;
pub const MILLI: f64 = 1e-3;
pub const CENTI: f64 = 1e-2;
pub const DECI: f64 = 1e-1;
pub const DECA: f64 = 1e1;
pub const HECTO: f64 = 1e2;
pub const KILO: f64 = 1e3;
pub const MEGA: f64 = 1e6;
pub const GIGA: f64 = 1e9;
pub const TERA: f64 = 1e12;
pub const PETA: f64 = 1e15;
pub const EXA: f64 = 1e18;
pub const ZETTA: f64 = 1e21;
pub const YOTTA: f64 = 1e24;

pub const KIBI: f64 = 1024.0;
pub const MEBI: f64 = KIBI * KIBI;
pub const GIBI: f64 = KIBI * MEBI;
pub const TEBI: f64 = KIBI * GIBI;
pub const PEBI: f64 = KIBI * TEBI;
pub const EXBI: f64 = KIBI * PEBI;
pub const ZEBI: f64 = KIBI * EXBI;
pub const YOBI: f64 = KIBI * ZEBI;

/// One prefix table entry: the short symbol used in canonical output, the
/// long form accepted on input, and the numeric factor. The identity entry
/// of each table has empty labels and factor 1.
#[derive(Clone, Copy, Debug)]
pub struct Prefix {
    pub label: &'static str,
    pub name: &'static str,
    pub factor: f64,
}

const fn entry(label: &'static str, name: &'static str, factor: f64) -> Prefix {
    Prefix {
        label,
        name,
        factor,
    }
}

/// SI prefixes, ascending by factor.
pub static METRIC: &[Prefix] = &[
    entry("y", "yocto", YOCTO),
    entry("z", "zepto", ZEPTO),
    entry("a", "atto", ATTO),
    entry("f", "femto", FEMTO),
    entry("p", "pico", PICO),
    entry("n", "nano", NANO),
    entry("\u{b5}", "micro", MICRO),
    entry("m", "milli", MILLI),
    entry("c", "centi", CENTI),
    entry("d", "deci", DECI),
    entry("", "", 1.0),
    entry("da", "deca", DECA),
    entry("h", "hecto", HECTO),
    entry("k", "kilo", KILO),
    entry("M", "mega", MEGA),
    entry("G", "giga", GIGA),
    entry("T", "tera", TERA),
    entry("P", "peta", PETA),
    entry("E", "exa", EXA),
    entry("Z", "zetta", ZETTA),
    entry("Y", "yotta", YOTTA),
];

/// IEC 80000-13 binary prefixes, ascending by factor.
pub static BINARY: &[Prefix] = &[
    entry("", "", 1.0),
    entry("Ki", "kibi", KIBI),
    entry("Mi", "mebi", MEBI),
    entry("Gi", "gibi", GIBI),
    entry("Ti", "tebi", TEBI),
    entry("Pi", "pebi", PEBI),
    entry("Ei", "exbi", EXBI),
    entry("Zi", "zebi", ZEBI),
    entry("Yi", "yobi", YOBI),
];

/// Candidate prefixes in matching order for the term parser: long forms
/// before short ones, and within the short forms `da` before `d`, `Ki`
/// before `k`, and so on, so that the longest label wins.
pub(crate) static PARSE_CANDIDATES: &[(&str, f64)] = &[
    ("yocto", YOCTO),
    ("zepto", ZEPTO),
    ("atto", ATTO),
    ("femto", FEMTO),
    ("pico", PICO),
    ("nano", NANO),
    ("micro", MICRO),
    ("milli", MILLI),
    ("centi", CENTI),
    ("deci", DECI),
    ("deca", DECA),
    ("hecto", HECTO),
    ("kilo", KILO),
    ("mega", MEGA),
    ("giga", GIGA),
    ("tera", TERA),
    ("peta", PETA),
    ("exa", EXA),
    ("zetta", ZETTA),
    ("yotta", YOTTA),
    ("kibi", KIBI),
    ("mebi", MEBI),
    ("tebi", TEBI),
    ("pebi", PEBI),
    ("exbi", EXBI),
    ("zebi", ZEBI),
    ("yobi", YOBI),
    ("y", YOCTO),
    ("z", ZEPTO),
    ("a", ATTO),
    ("f", FEMTO),
    ("p", PICO),
    ("n", NANO),
    ("\u{b5}", MICRO),
    ("m", MILLI),
    ("c", CENTI),
    ("da", DECA),
    ("d", DECI),
    ("h", HECTO),
    ("Ki", KIBI),
    ("k", KILO),
    ("Mi", MEBI),
    ("M", MEGA),
    ("Gi", GIBI),
    ("G", GIGA),
    ("Ti", TEBI),
    ("T", TERA),
    ("Pi", PEBI),
    ("P", PETA),
    ("Ei", EXBI),
    ("E", EXA),
    ("Zi", ZEBI),
    ("Z", ZETTA),
    ("Yi", YOBI),
    ("Y", YOTTA),
];

/// Which prefix table a unit uses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PrefixFamily {
    Metric,
    Binary,
}

impl PrefixFamily {
    pub fn table(self) -> &'static [Prefix] {
        match self {
            PrefixFamily::Metric => METRIC,
            PrefixFamily::Binary => BINARY,
        }
    }
}

/// Converts a short or long prefix label to its factor. The empty label is
/// the identity.
pub fn parse(label: &str) -> Result<f64, Error> {
    if label.is_empty() {
        return Ok(1.0);
    }
    for table in [METRIC, BINARY] {
        for prefix in table {
            if label == prefix.label || label == prefix.name {
                return Ok(prefix.factor);
            }
        }
    }
    Err(Error::UnknownPrefix(label.to_owned()))
}

impl Prefix {
    /// Finds the most suitable prefix for the given value when the prefix
    /// is raised to the given exponent: the largest entry not exceeding
    /// `value^(1/exponent)`, or the smallest entry when the value is below
    /// the whole table.
    pub fn for_value(value: f64, exponent: i32, table: &'static [Prefix]) -> &'static Prefix {
        let target = value.powf(1.0 / f64::from(exponent));
        match table.binary_search_by(|prefix| prefix.factor.total_cmp(&target)) {
            Ok(at) => &table[at],
            Err(0) => &table[0],
            Err(at) => &table[at - 1],
        }
    }
}
