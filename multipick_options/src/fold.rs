// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale-aware case folding for filter and type-ahead comparisons.

use alloc::string::String;

/// Case folding rules, chosen from a locale tag.
///
/// Only the dotted/dotless `i` of Turkic languages differs from plain Unicode
/// lowercasing; every other locale folds the same way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Fold {
    /// Unicode lowercase.
    #[default]
    Unicode,
    /// Turkish and Azerbaijani: `I` folds to `ı`, `İ` folds to `i`.
    Turkic,
}

impl Fold {
    /// Picks folding rules for a BCP 47 tag such as `"tr-TR"`.
    ///
    /// `None` and unknown tags fold as [`Fold::Unicode`].
    #[must_use]
    pub fn for_locale(locale: Option<&str>) -> Self {
        let Some(tag) = locale else {
            return Self::Unicode;
        };
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        if language.eq_ignore_ascii_case("tr") || language.eq_ignore_ascii_case("az") {
            Self::Turkic
        } else {
            Self::Unicode
        }
    }

    /// Folds `text` for comparison.
    #[must_use]
    pub fn fold(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match (self, c) {
                (Self::Turkic, 'I') => out.push('ı'),
                (Self::Turkic, 'İ') => out.push('i'),
                _ => out.extend(c.to_lowercase()),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Fold;

    #[test]
    fn locale_tags_pick_rules() {
        assert_eq!(Fold::for_locale(None), Fold::Unicode);
        assert_eq!(Fold::for_locale(Some("en-US")), Fold::Unicode);
        assert_eq!(Fold::for_locale(Some("tr")), Fold::Turkic);
        assert_eq!(Fold::for_locale(Some("az_AZ")), Fold::Turkic);
        assert_eq!(Fold::for_locale(Some("TR-tr")), Fold::Turkic);
    }

    #[test]
    fn unicode_lowercases() {
        assert_eq!(Fold::Unicode.fold("ÄPFEL"), "äpfel");
        assert_eq!(Fold::Unicode.fold("Istanbul"), "istanbul");
    }

    #[test]
    fn turkic_keeps_dotless_i_apart() {
        assert_eq!(Fold::Turkic.fold("ISPARTA"), "ısparta");
        assert_eq!(Fold::Turkic.fold("İZMİR"), "izmir");
        assert_ne!(Fold::Turkic.fold("I"), Fold::Turkic.fold("i"));
    }
}
