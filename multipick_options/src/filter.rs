// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deriving the visible list from a source and a filter query.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{Fold, OptionAccess, OptionRef, OptionSource, VisibleEntry};

/// How a folded query is compared with a folded field text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MatchMode {
    /// Field text begins with the query.
    StartsWith,
    /// Field text contains the query.
    #[default]
    Contains,
    /// Field text does not contain the query.
    NotContains,
    /// Field text ends with the query.
    EndsWith,
    /// Field text equals the query.
    Equals,
    /// Field text differs from the query.
    NotEquals,
}

impl MatchMode {
    /// Compares already-folded strings.
    ///
    /// A query that is empty after trimming matches everything, in every mode.
    #[must_use]
    pub fn matches(self, text: &str, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        match self {
            Self::StartsWith => text.starts_with(query),
            Self::Contains => text.contains(query),
            Self::NotContains => !text.contains(query),
            Self::EndsWith => text.ends_with(query),
            Self::Equals => text == query,
            Self::NotEquals => text != query,
        }
    }
}

/// Filter settings: which fields to search, how, and with which case folding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    fields: Vec<String>,
    mode: MatchMode,
    fold: Fold,
}

impl Filter {
    /// A filter over option labels using [`MatchMode::Contains`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Searches the named fields instead of the label.
    ///
    /// An option matches when any field does. Fields the accessor does not know
    /// are skipped; an empty list means "the label".
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Sets the match mode.
    #[must_use]
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets folding rules from a locale tag.
    #[must_use]
    pub fn with_locale(mut self, locale: Option<&str>) -> Self {
        self.fold = Fold::for_locale(locale);
        self
    }

    /// The match mode in use.
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The folding rules in use.
    #[must_use]
    pub const fn fold(&self) -> Fold {
        self.fold
    }

    /// Returns `true` if `option` satisfies the already-folded `query`.
    pub fn matches<T, A>(&self, access: &A, option: &T, query: &str) -> bool
    where
        A: OptionAccess<T> + ?Sized,
    {
        let texts: SmallVec<[Cow<'_, str>; 2]> = if self.fields.is_empty() {
            SmallVec::from_iter([access.label(option)])
        } else {
            self.fields
                .iter()
                .filter_map(|field| access.field_text(option, field))
                .collect()
        };
        texts
            .iter()
            .any(|text| self.mode.matches(&self.fold.fold(text), query))
    }

    /// Computes the visible list for `query`.
    ///
    /// An empty query yields [`OptionSource::flatten`]. Otherwise, for grouped
    /// sources, a group survives iff at least one child matches, its header
    /// carries the number of matching children, and only those children follow
    /// it. The result is always a subsequence of the unfiltered list.
    pub fn apply<T, A>(&self, source: &OptionSource<T>, access: &A, query: &str) -> Vec<VisibleEntry>
    where
        A: OptionAccess<T> + ?Sized,
    {
        if query.is_empty() {
            return source.flatten();
        }
        let query = self.fold.fold(query);
        match source {
            OptionSource::Flat(items) => items
                .iter()
                .enumerate()
                .filter(|(_, item)| self.matches(access, *item, &query))
                .map(|(i, _)| VisibleEntry::Option(OptionRef::flat(i)))
                .collect(),
            OptionSource::Grouped(groups) => {
                let mut entries = Vec::new();
                for (g, group) in groups.iter().enumerate() {
                    let header = entries.len();
                    entries.push(VisibleEntry::Group {
                        group: g,
                        child_count: 0,
                    });
                    entries.extend(
                        group
                            .items
                            .iter()
                            .enumerate()
                            .filter(|(_, item)| self.matches(access, *item, &query))
                            .map(|(i, _)| VisibleEntry::Option(OptionRef::grouped(g, i))),
                    );
                    let matched = entries.len() - header - 1;
                    if matched == 0 {
                        entries.truncate(header);
                    } else {
                        entries[header] = VisibleEntry::Group {
                            group: g,
                            child_count: matched,
                        };
                    }
                }
                entries
            }
        }
    }
}

/// Computes the visible list of `source` for `query` under `filter`.
pub fn filter<T, A>(
    source: &OptionSource<T>,
    access: &A,
    query: &str,
    filter: &Filter,
) -> Vec<VisibleEntry>
where
    A: OptionAccess<T> + ?Sized,
{
    filter.apply(source, access, query)
}
