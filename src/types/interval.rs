// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use crate::parsing;
use crate::types::Numeric;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A numeric interval with individually open or closed endpoints. A
/// missing bound is an infinite endpoint, which is always open.
///
/// Both the ISO 80000-2 outward-pointing bracket notation `]a, b[` and the
/// parenthesis notation `(a, b)` denote open endpoints; mixing them works.
/// Bounds keep their source text, so `[-0.0000000000001, 0.9)` renders the
/// digits it was written with.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Interval {
    left_open: bool,
    left: Option<Bound>,
    right: Option<Bound>,
    right_open: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct Bound {
    pub(crate) text: String,
    pub(crate) value: Numeric,
}

impl Bound {
    fn parse(text: &str) -> Result<Bound, Error> {
        Ok(Bound {
            text: text.to_owned(),
            value: Numeric::parse(text)?,
        })
    }
}

impl Interval {
    /// Parses the bracket notation, e.g. `[0, 1)` or `]15, 120[`.
    pub fn parse(expression: &str) -> Result<Interval, Error> {
        parsing::interval::parse_interval(expression)
    }

    /// Builds an interval from its parts. A `None` endpoint is infinite
    /// and must be open; bounds must parse as numbers.
    pub fn new(
        left_open: bool,
        left: Option<&str>,
        right: Option<&str>,
        right_open: bool,
    ) -> Result<Interval, Error> {
        let left = match left {
            Some(text) => Some(Bound::parse(text)?),
            None if !left_open => {
                return Err(Error::AmbiguousInfinite {
                    side: "left",
                    interval: "[-\u{221E}, ...".to_owned(),
                })
            }
            None => None,
        };
        let right = match right {
            Some(text) => Some(Bound::parse(text)?),
            None if !right_open => {
                return Err(Error::AmbiguousInfinite {
                    side: "right",
                    interval: "..., +\u{221E}]".to_owned(),
                })
            }
            None => None,
        };
        Ok(Interval {
            left_open,
            left,
            right,
            right_open,
        })
    }

    pub(crate) fn from_bounds(
        left_open: bool,
        left: Option<Bound>,
        right: Option<Bound>,
        right_open: bool,
    ) -> Interval {
        Interval {
            left_open,
            left,
            right,
            right_open,
        }
    }

    /// The left bound's source text; `None` for −∞.
    pub fn left(&self) -> Option<&str> {
        self.left.as_ref().map(|bound| bound.text.as_str())
    }

    /// The right bound's source text; `None` for +∞.
    pub fn right(&self) -> Option<&str> {
        self.right.as_ref().map(|bound| bound.text.as_str())
    }

    pub fn left_open(&self) -> bool {
        self.left_open
    }

    pub fn right_open(&self) -> bool {
        self.right_open
    }

    pub fn is_bounded(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    pub fn is_half_bounded(&self) -> bool {
        self.left.is_some() ^ self.right.is_some()
    }

    pub(crate) fn left_value(&self) -> Option<Numeric> {
        self.left.as_ref().map(|bound| bound.value)
    }

    pub(crate) fn right_value(&self) -> Option<Numeric> {
        self.right.as_ref().map(|bound| bound.value)
    }

    /// Whether the value falls within the interval, compared on the
    /// double channel.
    pub fn contains(&self, value: impl Into<Numeric>) -> bool {
        let value = value.into().to_f64();
        if let Some(bound) = &self.left {
            let endpoint = bound.value.to_f64();
            let inside = if self.left_open {
                value > endpoint
            } else {
                value >= endpoint
            };
            if !inside {
                return false;
            }
        }
        if let Some(bound) = &self.right {
            let endpoint = bound.value.to_f64();
            let inside = if self.right_open {
                value < endpoint
            } else {
                value <= endpoint
            };
            if !inside {
                return false;
            }
        }
        true
    }

    /// Parses the text as an integer or float and tests containment.
    pub fn contains_str(&self, text: &str) -> Result<bool, Error> {
        Ok(self.contains(Numeric::parse(text)?))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.left_open { '(' } else { '[' },
            self.left().unwrap_or("-\u{221E}"),
            self.right().unwrap_or("+\u{221E}"),
            if self.right_open { ')' } else { ']' },
        )
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(expression: &str) -> Result<Interval, Error> {
        Interval::parse(expression)
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> String {
        interval.to_string()
    }
}

impl TryFrom<String> for Interval {
    type Error = Error;

    fn try_from(expression: String) -> Result<Interval, Error> {
        Interval::parse(&expression)
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Interval) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_respects_openness() {
        let interval = Interval::parse("[0, 1)").unwrap();
        assert!(interval.contains(0.0));
        assert!(interval.contains(0.5));
        assert!(!interval.contains(1.0));
        assert!(!interval.contains(-0.1));

        let open = Interval::parse("(0, 1]").unwrap();
        assert!(!open.contains(0.0));
        assert!(open.contains(1.0));
    }

    #[test]
    fn unbounded_sides_always_pass() {
        let left = Interval::parse("(*, -5)").unwrap();
        assert!(left.contains(-1e300));
        assert!(!left.contains(-5.0));
        assert!(left.is_half_bounded());
        assert!(!left.is_bounded());

        let all = Interval::parse("(-\u{221E}, +\u{221E})").unwrap();
        assert!(all.contains(0.0));
        assert!(!all.is_half_bounded());
    }

    #[test]
    fn rendering_preserves_source_digits() {
        let interval = Interval::parse("[-0.0000000000001,0.9)").unwrap();
        assert_eq!(interval.to_string(), "[-0.0000000000001, 0.9)");

        let outward = Interval::parse("]15, 120[").unwrap();
        assert_eq!(outward.to_string(), "(15, 120)");

        let unbounded = Interval::parse("(*,*)").unwrap();
        assert_eq!(unbounded.to_string(), "(-\u{221E}, +\u{221E})");
    }

    #[test]
    fn equality_is_canonical() {
        assert_eq!(
            Interval::parse("]0, 1[").unwrap(),
            Interval::parse("(0 , 1)").unwrap()
        );
        assert_ne!(
            Interval::parse("[0, 1]").unwrap(),
            Interval::parse("(0, 1)").unwrap()
        );
    }

    #[test]
    fn contains_str_wants_a_number() {
        let interval = Interval::parse("[0, 1]").unwrap();
        assert_eq!(interval.contains_str("0.5"), Ok(true));
        assert_eq!(interval.contains_str("2"), Ok(false));
        assert_eq!(
            interval.contains_str("x"),
            Err(Error::NotANumber("x".to_owned()))
        );
    }

    #[test]
    fn new_rejects_closed_infinities() {
        assert!(Interval::new(true, None, None, true).is_ok());
        assert!(matches!(
            Interval::new(false, None, Some("1"), false),
            Err(Error::AmbiguousInfinite { side: "left", .. })
        ));
        assert!(matches!(
            Interval::new(true, Some("1"), None, false),
            Err(Error::AmbiguousInfinite { side: "right", .. })
        ));
    }
}
