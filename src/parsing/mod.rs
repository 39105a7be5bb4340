// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hand-written scanners shared by the [term][term], [unit
//! expression][unit], and [interval][interval] parsers.

pub(crate) mod interval;
pub(crate) mod term;
pub(crate) mod unit;

use crate::error::Error;
use crate::types::Numeric;

/// The whitespace class used throughout the grammar.
pub(crate) fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(is_ws)
}

/// Characters that may never appear in a unit label, at any level of the
/// grammar.
pub(crate) fn is_forbidden(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\x0B'
            | '\x0C'
            | '\r'
            | '!'
            | '"'
            | '&'
            | '`'
            | '+'
            | ','
            | '-'
            | '.'
            | ':'
            | ';'
            | '<'
            | '='
            | '>'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '^'
            | '\''
            | '{'
            | '|'
            | '}'
            | '~'
    )
}

/// Symbols for derived units formed by multiplication are joined with a
/// centre dot or a non-breaking space; the multiplication sign, the dot
/// operator, and the asterisk are also accepted.
pub(crate) fn is_multiplication(c: char) -> bool {
    matches!(c, '\u{A0}' | '\u{B7}' | '\u{D7}' | '\u{22C5}' | '*')
}

/// The slash, the division sign, the fraction slash, and the division
/// slash.
pub(crate) fn is_division(c: char) -> bool {
    matches!(c, '/' | '\u{F7}' | '\u{2044}' | '\u{2215}')
}

/// A single character of a factor label. Stricter than [is_forbidden]:
/// operators, brackets, superscripts, and whitespace are all excluded.
pub(crate) fn is_label_char(c: char) -> bool {
    if is_superscript(c) || is_multiplication(c) || is_ws(c) {
        return false;
    }
    !matches!(
        c,
        '[' | ']' | '(' | ')' | '{' | '}' | '\u{2044}' | '/' | '%' | '\u{2030}' | ',' | '.' | '-'
            | '+' | ':' | ';'
    )
}

pub(crate) fn is_superscript(c: char) -> bool {
    c == '\u{207B}' || superscript_value(c).is_some()
}

fn superscript_value(c: char) -> Option<i64> {
    match c {
        '\u{2070}' => Some(0),
        '\u{B9}' => Some(1),
        '\u{B2}' => Some(2),
        '\u{B3}' => Some(3),
        '\u{2074}'..='\u{2079}' => Some(i64::from(c as u32 - 0x2070)),
        _ => None,
    }
}

/// Parses an exponent written in Unicode superscript digits with an
/// optional leading superscript minus.
pub(crate) fn parse_superscript(text: &str) -> Option<i32> {
    let (negative, digits) = match text.strip_prefix('\u{207B}') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() {
        return None;
    }
    let mut value: i64 = 0;
    for c in digits.chars() {
        value = value * 10 + superscript_value(c)?;
        if value > i64::from(i32::MAX) {
            return None;
        }
    }
    let value = value as i32;
    Some(if negative { -value } else { value })
}

/// Renders an exponent using Unicode superscript digits.
pub(crate) fn format_superscript(exponent: i32) -> String {
    exponent
        .to_string()
        .chars()
        .map(|c| match c {
            '-' => '\u{207B}',
            '1' => '\u{B9}',
            '2' => '\u{B2}',
            '3' => '\u{B3}',
            c => char::from_u32(0x2070 + (c as u32 - '0' as u32)).unwrap_or(c),
        })
        .collect()
}

/// Returns the byte length of the longest prefix of `text` matching the
/// decimal grammar: an optional minus, an integer part without leading
/// zeros, an optional fraction, and an optional exponent marked by an
/// uppercase `E` whose only permitted sign is minus.
pub(crate) fn scan_decimal(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let digit = |at: usize| matches!(bytes.get(at).copied(), Some(b'0'..=b'9'));
    let mut at = 0;
    if bytes.get(at).copied() == Some(b'-') {
        at += 1;
    }
    match bytes.get(at).copied() {
        Some(b'0') => at += 1,
        Some(b'1'..=b'9') => {
            at += 1;
            while digit(at) {
                at += 1;
            }
        }
        _ => return None,
    }
    let mut end = at;
    if bytes.get(end).copied() == Some(b'.') {
        let mut at = end + 1;
        let digits = at;
        while digit(at) {
            at += 1;
        }
        if at > digits {
            end = at;
        }
    }
    if bytes.get(end).copied() == Some(b'E') {
        let mut at = end + 1;
        if bytes.get(at).copied() == Some(b'-') {
            at += 1;
        }
        match bytes.get(at).copied() {
            Some(b'0') => end = at + 1,
            Some(b'1'..=b'9') => {
                at += 1;
                while digit(at) {
                    at += 1;
                }
                end = at;
            }
            _ => {}
        }
    }
    Some(end)
}

pub(crate) fn is_decimal(text: &str) -> bool {
    scan_decimal(text) == Some(text.len())
}

/// Splits a quantity into its decimal head and trailing unit label. The
/// head must start the trimmed input; the label is everything after the
/// intervening whitespace.
pub(crate) fn split_quantity(text: &str) -> Result<(Numeric, &str), Error> {
    let text = trim(text);
    let head = scan_decimal(text).ok_or_else(|| Error::NotANumber(text.to_owned()))?;
    let (number, rest) = text.split_at(head);
    Ok((Numeric::parse(number)?, rest.trim_start_matches(is_ws)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals() {
        assert!(is_decimal("0"));
        assert!(is_decimal("-2"));
        assert!(is_decimal("0.9"));
        assert!(is_decimal("-0.0000000000001"));
        assert!(is_decimal("10000000"));
        assert!(is_decimal("2.5E9"));
        assert!(is_decimal("1E-3"));

        assert!(!is_decimal(""));
        assert!(!is_decimal("+1"));
        assert!(!is_decimal("01"));
        assert!(!is_decimal(".5"));
        assert!(!is_decimal("5."));
        assert!(!is_decimal("1e3"));
        assert!(!is_decimal("1E+3"));
        assert!(!is_decimal("-"));
        assert!(!is_decimal("*"));
    }

    #[test]
    fn decimal_prefix_is_maximal() {
        assert_eq!(scan_decimal("0.25 Tbps"), Some(4));
        assert_eq!(scan_decimal("5.x"), Some(1));
        assert_eq!(scan_decimal("-2m/s"), Some(2));
        assert_eq!(scan_decimal("x5"), None);
    }

    #[test]
    fn superscripts() {
        assert_eq!(parse_superscript("\u{B2}"), Some(2));
        assert_eq!(parse_superscript("\u{207B}\u{B9}"), Some(-1));
        assert_eq!(parse_superscript("\u{B9}\u{B2}"), Some(12));
        assert_eq!(parse_superscript("\u{2070}"), Some(0));
        assert_eq!(parse_superscript(""), None);
        assert_eq!(parse_superscript("\u{207B}"), None);
        assert_eq!(parse_superscript("2"), None);

        assert_eq!(format_superscript(2), "\u{B2}");
        assert_eq!(format_superscript(-1), "\u{207B}\u{B9}");
        assert_eq!(format_superscript(10), "\u{B9}\u{2070}");
        assert_eq!(
            format_superscript(456789),
            "\u{2074}\u{2075}\u{2076}\u{2077}\u{2078}\u{2079}"
        );
    }

    #[test]
    fn quantity_split() {
        let (value, label) = split_quantity("2.5 GiB").unwrap();
        assert_eq!(value.to_f64(), 2.5);
        assert_eq!(label, "GiB");

        let (value, label) = split_quantity("-2m/s").unwrap();
        assert_eq!(value.to_f64(), -2.0);
        assert_eq!(label, "m/s");

        assert!(split_quantity("over 9000").is_err());
    }
}
