// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mensura::{parse_unit, parse_unit_with, DimensionalUnit, Error, PrefixFamily};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn unit(expression: &str) -> DimensionalUnit {
    parse_unit(expression).unwrap()
}

fn hash(unit: &DimensionalUnit) -> u64 {
    let mut hasher = DefaultHasher::new();
    unit.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn kilometres_per_hour() {
    let kmph = unit("kilometres/h");
    assert_eq!(kmph.to_string(), "km/h");
    assert_eq!(kmph.value(), 1.0);
    assert_eq!(kmph, unit("km/h"));

    let metres_per_hour = unit("m/h");
    assert_eq!(metres_per_hour.value(), 1.0);
    assert_eq!(metres_per_hour, unit("metre/h"));

    assert_eq!(metres_per_hour.to(&kmph).unwrap(), 1.0 / 1000.0);
    assert_eq!(kmph.to(&metres_per_hour).unwrap(), 1000.0);
}

#[test]
fn kibibytes() {
    let kibib = parse_unit_with(
        "kibibytes\u{b2}\u{b7}kibibytes\u{207B}\u{b9}",
        PrefixFamily::Binary,
    )
    .unwrap();
    assert_eq!(kibib.to_string(), "KiB");
    assert_eq!(kibib.value(), 1.0);

    // long binary prefixes are detected without the explicit family too
    assert_eq!(
        unit("kibibytes\u{b2}\u{b7}kibibytes\u{207B}\u{b9}").to_string(),
        "KiB"
    );

    let kb = unit("kB");
    assert_eq!(kb, unit("kilobytes"));
    assert_eq!(kb.value(), 1.0);

    assert_ne!(kibib, kb);
    assert_eq!(kibib.to(&kb).unwrap(), 1.024);
    assert_eq!(kb.to(&kibib).unwrap(), 1.0 / 1.024);
}

#[test]
fn derived_units() {
    let weber = unit("metres\u{b2}\u{b7}seconds\u{207B}\u{b2}\u{b7}kilogram\u{b7}ampere\u{207B}\u{b9}");
    assert_eq!(weber.to_string(), "m\u{b2}\u{b7}kg/s\u{b2}\u{b7}A");

    let weber2 = unit("A\u{207B}\u{b9}\u{b7}second\u{207B}\u{b2}/(kg\u{207B}\u{b9}\u{b7}meter\u{207B}\u{b2})");
    assert_eq!(weber2.to_string(), "kg\u{b7}m\u{b2}/A\u{b7}s\u{b2}");

    assert_eq!(weber, weber2);
    assert_eq!(hash(&weber), hash(&weber2));

    let kiloweber = unit("A\u{207B}\u{b9}\u{b7}second\u{207B}\u{b2}/(Mg\u{207B}\u{b9}\u{b7}meter\u{207B}\u{b2})");
    assert_eq!(kiloweber.to_string(), "Mg\u{b7}m\u{b2}/A\u{b7}s\u{b2}");

    assert_eq!(weber.to(&kiloweber).unwrap(), 1.0 / 1000.0);
    assert_eq!(kiloweber.to(&weber).unwrap(), 1000.0);
}

#[test]
fn forcing_the_metric_family_reprefixes_binary_input() {
    // 1024 B against the metric table leaves a 1.024 scalar behind
    let kibi = parse_unit_with("kibibytes", PrefixFamily::Metric).unwrap();
    assert_eq!(kibi.value(), 1.024);
    assert_eq!(kibi.to_string(), "1.024 kB");
}

#[test]
fn canonical_form_is_a_fixed_point() {
    for expression in [
        "kilometres/h",
        "m\u{b2}\u{b7}kg/s\u{b2}\u{b7}A",
        "kibibytes",
        "square metres",
        "Mbps",
        "mol",
        "",
    ] {
        let parsed = unit(expression);
        let rendered = parsed.to_string();
        let reparsed = unit(&rendered);
        assert_eq!(reparsed.to_string(), rendered, "{expression:?}");
        assert_eq!(reparsed, parsed, "{expression:?}");
    }
}

#[test]
fn conversion_ratios_are_reciprocal() {
    let pairs = [
        ("km/h", "m/h"),
        ("kB", "KiB"),
        ("Tbps", "Mbps"),
        ("m\u{b2}\u{b7}kg/s\u{b2}\u{b7}A", "Mg\u{b7}m\u{b2}/A\u{b7}s\u{b2}"),
    ];
    for (left, right) in pairs {
        let a = unit(left);
        let b = unit(right);
        let product = a.to(&b).unwrap() * b.to(&a).unwrap();
        assert!((product - 1.0).abs() < 1e-12, "{left} <-> {right}");
    }
}

#[test]
fn word_exponents() {
    assert_eq!(unit("square metres").to_string(), "m\u{b2}");
    assert_eq!(unit("cubic metres").to_string(), "m\u{b3}");
    assert_eq!(unit("metres squared").to_string(), "m\u{b2}");
    assert!(matches!(
        parse_unit("square metres\u{b2}"),
        Err(Error::InvalidExpression(_))
    ));
}

#[test]
fn zero_exponents_cancel() {
    let unit = unit("m\u{2070}\u{b7}s");
    assert_eq!(unit.to_string(), "s");
}

#[test]
fn nonscalar_conversions_report_the_residue() {
    let metre = unit("m");
    let second = unit("s");
    match metre.to(&second) {
        Err(Error::NonScalarDimension { from, to, residue }) => {
            assert_eq!(from, "m");
            assert_eq!(to, "s");
            assert_eq!(residue, "m/s");
        }
        other => panic!("expected NonScalarDimension, got {other:?}"),
    }
}

#[test]
fn unknown_symbols_convert_by_prefix() {
    let tbps = unit("Tbps");
    let mbps = unit("Mbps");
    assert_eq!(tbps.to(&mbps).unwrap(), 1e6);
    assert!(tbps.to(&unit("MiB")).is_err());
}

#[test]
fn dimensionless_round_trip() {
    let one = unit("");
    assert!(one.is_dimensionless());
    assert_eq!(one.to(&one).unwrap(), 1.0);
    assert_eq!(unit("m/m"), one);
}
