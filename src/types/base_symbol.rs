// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alias groups for the base unit symbols. The last alias of each group is
//! the canonical symbol. Lookup is exact and case-sensitive; unknown
//! symbols pass through the algebra unchanged.

static GROUPS: &[&[&str]] = &[
    &["metres", "meters", "metre", "meter", "m"],
    &["grams", "gram", "g"],
    &["seconds", "second", "s"],
    &["amperes", "ampere", "A"],
    // U+212A is the Kelvin sign.
    &["kelvins", "kelvin", "\u{212A}", "K"],
    &["candelas", "candela", "cd"],
    &["moles", "mole", "mol"],
    &["bytes", "byte", "B"],
    &["bits", "bit"],
];

pub(crate) fn lookup(label: &str) -> Option<&'static str> {
    GROUPS
        .iter()
        .find(|group| group.contains(&label))
        .map(|group| group[group.len() - 1])
}

/// Returns the canonical symbol for the given label, or the label itself
/// when it belongs to no group.
pub fn canonical_symbol(label: &str) -> &str {
    lookup(label).unwrap_or(label)
}

/// Returns the alias group containing the given label, if any.
pub fn aliases(label: &str) -> Option<&'static [&'static str]> {
    GROUPS.iter().copied().find(|group| group.contains(&label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_is_the_last_alias() {
        assert_eq!(canonical_symbol("metres"), "m");
        assert_eq!(canonical_symbol("meter"), "m");
        assert_eq!(canonical_symbol("m"), "m");
        assert_eq!(canonical_symbol("kelvins"), "K");
        assert_eq!(canonical_symbol("\u{212A}"), "K");
        assert_eq!(canonical_symbol("bits"), "bit");
        assert_eq!(canonical_symbol("byte"), "B");
    }

    #[test]
    fn unknown_labels_pass_through() {
        assert_eq!(canonical_symbol("h"), "h");
        assert_eq!(canonical_symbol("bps"), "bps");
        assert_eq!(aliases("bps"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(canonical_symbol("Metres"), "Metres");
        assert_eq!(canonical_symbol("b"), "b");
    }

    #[test]
    fn alias_groups() {
        assert_eq!(aliases("gram"), Some(&["grams", "gram", "g"][..]));
        assert_eq!(aliases("g"), aliases("grams"));
    }
}
