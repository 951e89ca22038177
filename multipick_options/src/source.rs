// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Option sources and the flattened entries that address them.

use alloc::string::String;
use alloc::vec::Vec;

/// A labelled group of options.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionGroup<T> {
    /// Text shown on the group header.
    pub label: String,
    /// Options under this header, in display order.
    pub items: Vec<T>,
}

impl<T> OptionGroup<T> {
    /// Creates a group.
    pub fn new(label: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// Options as supplied by the caller, either as one flat list or as groups.
///
/// A source is replaced wholesale on every update; nothing in this crate edits
/// it in place.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionSource<T> {
    /// A flat list of options.
    Flat(Vec<T>),
    /// Options partitioned under group headers.
    Grouped(Vec<OptionGroup<T>>),
}

impl<T> Default for OptionSource<T> {
    fn default() -> Self {
        Self::Flat(Vec::new())
    }
}

impl<T> From<Vec<T>> for OptionSource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Flat(items)
    }
}

/// Position of a single option inside an [`OptionSource`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionRef {
    /// Group index for grouped sources, `None` for flat ones.
    pub group: Option<usize>,
    /// Index within the flat list or within the group.
    pub index: usize,
}

impl OptionRef {
    /// Refers to an option of a flat source.
    #[must_use]
    pub const fn flat(index: usize) -> Self {
        Self { group: None, index }
    }

    /// Refers to an option inside group `group`.
    #[must_use]
    pub const fn grouped(group: usize, index: usize) -> Self {
        Self {
            group: Some(group),
            index,
        }
    }
}

/// One row of the visible list.
///
/// Entries borrow nothing: they are positions into the source, so a visible list
/// never copies option data. Positions are only meaningful for the source they
/// were computed from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisibleEntry {
    /// A group header, tagged with how many of its children follow it.
    Group {
        /// Index of the group in the source.
        group: usize,
        /// Number of visible children directly after this header.
        child_count: usize,
    },
    /// A selectable (unless disabled) option.
    Option(OptionRef),
}

impl VisibleEntry {
    /// Returns `true` for group headers.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// The option this entry points at, if it is not a header.
    #[must_use]
    pub const fn option(&self) -> Option<OptionRef> {
        match self {
            Self::Option(at) => Some(*at),
            Self::Group { .. } => None,
        }
    }
}

impl<T> OptionSource<T> {
    /// A flat source.
    #[must_use]
    pub const fn flat(items: Vec<T>) -> Self {
        Self::Flat(items)
    }

    /// A grouped source.
    #[must_use]
    pub const fn grouped(groups: Vec<OptionGroup<T>>) -> Self {
        Self::Grouped(groups)
    }

    /// Returns `true` for grouped sources.
    #[must_use]
    pub const fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }

    /// Looks up an option.
    #[must_use]
    pub fn get(&self, at: OptionRef) -> Option<&T> {
        match (self, at.group) {
            (Self::Flat(items), None) => items.get(at.index),
            (Self::Grouped(groups), Some(group)) => groups.get(group)?.items.get(at.index),
            _ => None,
        }
    }

    /// Looks up a group.
    #[must_use]
    pub fn group(&self, group: usize) -> Option<&OptionGroup<T>> {
        match self {
            Self::Grouped(groups) => groups.get(group),
            Self::Flat(_) => None,
        }
    }

    /// Total number of options, excluding headers.
    #[must_use]
    pub fn option_count(&self) -> usize {
        match self {
            Self::Flat(items) => items.len(),
            Self::Grouped(groups) => groups.iter().map(|g| g.items.len()).sum(),
        }
    }

    /// Iterates every option in display order with its position.
    pub fn options(&self) -> impl Iterator<Item = (OptionRef, &T)> + '_ {
        let (flat, grouped) = match self {
            Self::Flat(items) => (Some(items), None),
            Self::Grouped(groups) => (None, Some(groups)),
        };
        let flat = flat
            .into_iter()
            .flat_map(|items| items.iter().enumerate())
            .map(|(i, item)| (OptionRef::flat(i), item));
        let grouped = grouped
            .into_iter()
            .flat_map(|groups| groups.iter().enumerate())
            .flat_map(|(g, group)| {
                group
                    .items
                    .iter()
                    .enumerate()
                    .map(move |(i, item)| (OptionRef::grouped(g, i), item))
            });
        flat.chain(grouped)
    }

    /// Expands the source into visible entries, headers first within each group.
    #[must_use]
    pub fn flatten(&self) -> Vec<VisibleEntry> {
        match self {
            Self::Flat(items) => (0..items.len())
                .map(|i| VisibleEntry::Option(OptionRef::flat(i)))
                .collect(),
            Self::Grouped(groups) => {
                let mut entries = Vec::with_capacity(groups.len() + self.option_count());
                for (g, group) in groups.iter().enumerate() {
                    entries.push(VisibleEntry::Group {
                        group: g,
                        child_count: group.items.len(),
                    });
                    entries.extend(
                        (0..group.items.len()).map(|i| VisibleEntry::Option(OptionRef::grouped(g, i))),
                    );
                }
                entries
            }
        }
    }
}

/// 1-based position of `index` among the non-header entries, for `aria-posinset`.
///
/// Returns `None` for headers and out-of-range indices.
#[must_use]
pub fn pos_in_set(entries: &[VisibleEntry], index: usize) -> Option<usize> {
    if entries.get(index)?.is_group() {
        return None;
    }
    Some(entries[..index].iter().filter(|e| !e.is_group()).count() + 1)
}

/// Number of non-header entries, for `aria-setsize`.
#[must_use]
pub fn set_size(entries: &[VisibleEntry]) -> usize {
    entries.iter().filter(|e| !e.is_group()).count()
}
