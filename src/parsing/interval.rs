// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsers for single intervals and for interval lists with an optional
//! leading unit label.

use crate::error::Error;
use crate::parsing::{is_decimal, is_forbidden, is_ws, trim};
use crate::types::interval::Bound;
use crate::types::{Interval, Numeric};

pub(crate) fn parse_interval(expression: &str) -> Result<Interval, Error> {
    let invalid = || Error::InvalidExpression(format!("not a valid interval: {expression:?}"));

    let left_bracket = match expression.chars().next() {
        Some(c @ ('[' | ']' | '(')) => c,
        _ => return Err(invalid()),
    };
    let right_bracket = match expression.chars().last() {
        Some(c @ (']' | '[' | ')')) => c,
        _ => return Err(invalid()),
    };
    if expression.len() < 2 {
        return Err(invalid());
    }
    // both brackets are ASCII, so the byte slice is safe
    let inner = &expression[1..expression.len() - 1];
    let (left_raw, right_raw) = inner.split_once(',').ok_or_else(invalid)?;
    let left_raw = trim(left_raw);
    let right_raw = trim(right_raw);

    let left = endpoint(left_raw, '-').ok_or_else(invalid)?;
    let right = endpoint(right_raw, '+').ok_or_else(invalid)?;

    let left_open = match left_bracket {
        '[' => {
            if left.is_none() {
                return Err(Error::AmbiguousInfinite {
                    side: "left",
                    interval: expression.to_owned(),
                });
            }
            false
        }
        _ => true,
    };
    let right_open = match right_bracket {
        ']' => {
            if right.is_none() {
                return Err(Error::AmbiguousInfinite {
                    side: "right",
                    interval: expression.to_owned(),
                });
            }
            false
        }
        _ => true,
    };

    let bound = |text: Option<&str>| -> Result<Option<Bound>, Error> {
        match text {
            Some(text) => Ok(Some(Bound {
                text: text.to_owned(),
                value: Numeric::parse(text)?,
            })),
            None => Ok(None),
        }
    };
    Ok(Interval::from_bounds(
        left_open,
        bound(left)?,
        bound(right)?,
        right_open,
    ))
}

/// An endpoint token: infinity (`∞` or `*`, optionally signed — minus only
/// on the left, plus only on the right) maps to `None`; otherwise the
/// token must match the decimal grammar. The outer `Option` is the parse
/// result, the inner one distinguishes bounded from infinite.
#[allow(clippy::option_option)]
fn endpoint(token: &str, sign: char) -> Option<Option<&str>> {
    let tail = token.strip_prefix(sign).unwrap_or(token);
    if matches!(tail, "\u{221E}" | "*") {
        return Some(None);
    }
    if is_decimal(token) {
        return Some(Some(token));
    }
    None
}

pub(crate) struct ParsedValidator {
    pub(crate) unit: Option<String>,
    pub(crate) intervals: Vec<Interval>,
}

/// Parses `(unit ":")? interval+` over the trimmed input. The whole input
/// must be consumed; intervals are extracted left to right.
pub(crate) fn parse_validator(expression: &str) -> Result<ParsedValidator, Error> {
    let text = trim(expression);
    let invalid = || Error::InvalidExpression(format!("not a valid interval list: {expression:?}"));

    let (unit, mut rest) = match text.split_once(':') {
        Some((head, tail)) if !head.is_empty() && !head.chars().any(is_forbidden) => {
            (Some(trim(head).to_owned()), tail)
        }
        Some(_) => return Err(invalid()),
        None => (None, text),
    };

    let mut intervals = Vec::new();
    loop {
        rest = rest.trim_start_matches(is_ws);
        if rest.is_empty() {
            break;
        }
        if !rest.starts_with(['[', ']', '(']) {
            return Err(invalid());
        }
        let mut end = None;
        for (at, c) in rest.char_indices().skip(1) {
            if matches!(c, ']' | '[' | ')') {
                end = Some(at + c.len_utf8());
                break;
            }
        }
        let end = end.ok_or_else(invalid)?;
        intervals.push(parse_interval(&rest[..end])?);
        rest = &rest[end..];
    }
    if intervals.is_empty() {
        return Err(invalid());
    }
    Ok(ParsedValidator { unit, intervals })
}
