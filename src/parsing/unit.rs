// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Splits a unit expression into multiplicative terms.
//!
//! At most one division operator is allowed at the top level; more than
//! one term after it must be parenthesised, and the parenthesis must close
//! at the end of the expression.

use crate::error::Error;
use crate::parsing::{is_division, is_forbidden, is_multiplication, term};
use crate::types::Factor;

pub(crate) fn parse_expression(expression: &str) -> Result<Vec<Factor>, Error> {
    if expression.is_empty() {
        return Ok(Vec::new());
    }
    let (numerator, denominator) = split_fraction(expression)?;
    let mut factors = Vec::new();
    for term in split_terms(numerator) {
        factors.push(term::parse_term(term, 1)?);
    }
    if let Some(denominator) = denominator {
        for term in split_terms(denominator) {
            factors.push(term::parse_term(term, -1)?);
        }
    }
    Ok(factors)
}

fn split_fraction(expression: &str) -> Result<(&str, Option<&str>), Error> {
    let invalid = || Error::InvalidExpression(format!("invalid expression: {expression:?}"));

    let mut division = None;
    for (at, c) in expression.char_indices() {
        if is_division(c) {
            division = Some((at, c.len_utf8()));
            break;
        }
    }
    let (numerator, rest) = match division {
        Some((at, len)) => (&expression[..at], Some(&expression[at + len..])),
        None => (expression, None),
    };
    if numerator.chars().any(is_forbidden) {
        return Err(invalid());
    }
    let denominator = match rest {
        None => None,
        Some(rest) => {
            let inner = match rest.strip_prefix('(') {
                Some(inner) => inner.strip_suffix(')').ok_or_else(invalid)?,
                None => {
                    if rest
                        .chars()
                        .any(|c| is_multiplication(c) || c == '(' || c == ')')
                    {
                        return Err(invalid());
                    }
                    rest
                }
            };
            if inner.is_empty() || inner.chars().any(|c| is_division(c) || is_forbidden(c)) {
                return Err(invalid());
            }
            Some(inner)
        }
    };
    Ok((numerator, denominator))
}

/// Trailing separators are tolerated the way the splitter has always
/// worked; interior empty terms are rejected by the term parser.
fn split_terms(part: &str) -> Vec<&str> {
    if part.is_empty() {
        return vec![part];
    }
    let mut terms: Vec<&str> = part.split(is_multiplication).collect();
    while terms.len() > 1 && terms.last() == Some(&"") {
        terms.pop();
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(expression: &str) -> Vec<(String, i32)> {
        parse_expression(expression)
            .unwrap()
            .iter()
            .map(|factor| (factor.symbol().to_owned(), factor.exponent()))
            .collect()
    }

    #[test]
    fn fraction_forms() {
        assert_eq!(
            symbols("m/s"),
            vec![("m".to_owned(), 1), ("s".to_owned(), -1)]
        );
        assert_eq!(
            symbols(
                "A\u{207B}\u{b9}\u{b7}second\u{207B}\u{b2}/(kg\u{207B}\u{b9}\u{b7}meter\u{207B}\u{b2})"
            ),
            vec![
                ("A".to_owned(), -1),
                ("s".to_owned(), -2),
                ("g".to_owned(), 1),
                ("m".to_owned(), 2),
            ]
        );
        assert_eq!(symbols(""), vec![]);
    }

    #[test]
    fn multiplication_operators() {
        for expression in ["m\u{b7}s", "m\u{a0}s", "m\u{d7}s", "m\u{22c5}s", "m*s"] {
            assert_eq!(
                symbols(expression),
                vec![("m".to_owned(), 1), ("s".to_owned(), 1)],
                "{expression:?}"
            );
        }
    }

    #[test]
    fn division_operators() {
        for expression in ["m/s", "m\u{f7}s", "m\u{2044}s", "m\u{2215}s"] {
            assert_eq!(
                symbols(expression),
                vec![("m".to_owned(), 1), ("s".to_owned(), -1)],
                "{expression:?}"
            );
        }
    }

    #[test]
    fn rejects_malformed_expressions() {
        for expression in [
            "m/s/s",
            "m/(s",
            "m/s)",
            "m/(s/A)",
            "m/s\u{b7}A",
            "m/()",
            "m/",
            "/s",
            "\u{b7}m",
            "m,s",
        ] {
            assert!(parse_expression(expression).is_err(), "{expression:?}");
        }
    }

    #[test]
    fn spaced_labels_are_single_terms() {
        assert_eq!(
            symbols("fluid ounces"),
            vec![("fluid ounces".to_owned(), 1)]
        );
    }
}
