// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for one multiplicative term: an optional `square `/`cubic `
//! word, a possibly prefixed label, and an optional superscript or
//! ` squared` exponent.

use crate::error::Error;
use crate::parsing::{is_label_char, is_superscript, parse_superscript};
use crate::types::prefix::PARSE_CANDIDATES;
use crate::types::{base_symbol, Factor};

pub(crate) fn parse_term(expression: &str, sign: i32) -> Result<Factor, Error> {
    let mut label = expression;

    let word_exponent = if let Some(rest) = label.strip_prefix("square ") {
        label = rest;
        Some(2)
    } else if let Some(rest) = label.strip_prefix("cubic ") {
        label = rest;
        Some(3)
    } else {
        None
    };

    let mut tail_exponent = None;
    if let Some(rest) = label.strip_suffix(" squared") {
        label = rest;
        tail_exponent = Some(2);
    } else if let Some(start) = superscript_run(label) {
        if let Some(exponent) = parse_superscript(&label[start..]) {
            label = &label[..start];
            tail_exponent = Some(exponent);
        }
    }

    let exponent = match (word_exponent, tail_exponent) {
        (Some(_), Some(_)) => {
            return Err(Error::InvalidExpression(format!(
                "duplicate exponent: {expression:?}"
            )))
        }
        (Some(exponent), None) | (None, Some(exponent)) => exponent,
        (None, None) => 1,
    };

    if !is_label(label) {
        return Err(Error::InvalidExpression(format!(
            "not a valid factor: {expression:?}"
        )));
    }

    let (prefix, prefix_factor, symbol) = resolve(label);
    Ok(Factor::from_parts(
        1.0,
        prefix,
        prefix_factor,
        symbol,
        exponent * sign,
    ))
}

/// The byte index where the trailing run of superscript characters
/// begins, if there is one.
fn superscript_run(label: &str) -> Option<usize> {
    label
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_superscript(*c))
        .last()
        .map(|(at, _)| at)
}

/// One or more runs of label characters joined by single interior ASCII
/// spaces.
fn is_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with(' ')
        && !label.ends_with(' ')
        && !label.contains("  ")
        && label.chars().all(|c| c == ' ' || is_label_char(c))
}

/// Splits the label into prefix and symbol. The known-symbol match runs
/// first over every prefix candidate, otherwise `metres` would come out as
/// `m` + `etres` (milli-etres); only when no known alias fits does the
/// generic prefix-plus-unknown-symbol split apply, and a label that
/// supports no prefix split at all is a bare unknown symbol.
fn resolve(label: &str) -> (&'static str, f64, String) {
    for (prefix, factor) in PARSE_CANDIDATES.iter().copied() {
        if let Some(rest) = label.strip_prefix(prefix) {
            if let Some(symbol) = base_symbol::lookup(rest) {
                return (prefix, factor, symbol.to_owned());
            }
        }
    }
    if let Some(symbol) = base_symbol::lookup(label) {
        return ("", 1.0, symbol.to_owned());
    }
    for (prefix, factor) in PARSE_CANDIDATES.iter().copied() {
        if let Some(rest) = label.strip_prefix(prefix) {
            if !rest.is_empty() && rest.chars().all(is_label_char) {
                return (prefix, factor, rest.to_owned());
            }
        }
    }
    ("", 1.0, label.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(expression: &str) -> (String, String, i32) {
        let factor = parse_term(expression, 1).unwrap();
        (
            factor.prefix().to_owned(),
            factor.symbol().to_owned(),
            factor.exponent(),
        )
    }

    #[test]
    fn bare_and_prefixed() {
        assert_eq!(parts("m"), ("".to_owned(), "m".to_owned(), 1));
        assert_eq!(parts("mm"), ("m".to_owned(), "m".to_owned(), 1));
        assert_eq!(parts("km"), ("k".to_owned(), "m".to_owned(), 1));
        assert_eq!(parts("dam"), ("da".to_owned(), "m".to_owned(), 1));
        assert_eq!(parts("kilogram"), ("kilo".to_owned(), "g".to_owned(), 1));
        assert_eq!(parts("micrometre"), ("micro".to_owned(), "m".to_owned(), 1));
        assert_eq!(parts("KiB"), ("Ki".to_owned(), "B".to_owned(), 1));
        assert_eq!(parts("kibibytes"), ("kibi".to_owned(), "B".to_owned(), 1));
        assert_eq!(parts("mol"), ("".to_owned(), "mol".to_owned(), 1));
    }

    #[test]
    fn unknown_labels() {
        assert_eq!(parts("Pa"), ("P".to_owned(), "a".to_owned(), 1));
        assert_eq!(parts("min"), ("m".to_owned(), "in".to_owned(), 1));
        assert_eq!(parts("x"), ("".to_owned(), "x".to_owned(), 1));
        assert_eq!(parts("bps"), ("".to_owned(), "bps".to_owned(), 1));
    }

    #[test]
    fn rejects_malformed_terms() {
        for expression in ["", " m", "m ", "a  b", "m(", "m\u{b2}\u{207B}", "\u{207B}m"] {
            assert!(parse_term(expression, 1).is_err(), "{expression:?}");
        }
    }
}
