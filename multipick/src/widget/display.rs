// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the trigger shows, and what screen readers hear.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use multipick_options::{OptionAccess, label_of_value};

use super::MultiSelect;
use crate::DisplayMode;
use crate::config::fill;

/// Summary used when no `selected_items_label` is configured.
const DEFAULT_SELECTED_ITEMS_LABEL: &str = "{0} items selected";

/// One selected value shown as a removable chip.
#[derive(Clone, Debug, PartialEq)]
pub struct Chip<V> {
    /// The selected value; pass it to
    /// [`remove_value`](MultiSelect::remove_value) when the chip is removed.
    pub value: V,
    /// The value's label; `None` while no option carries the value.
    pub label: Option<String>,
}

/// The trigger's content.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayLabel<V> {
    /// Nothing is selected.
    Placeholder(String),
    /// Selected labels joined with `", "`.
    Text(String),
    /// Too many values to list; a count instead.
    Summary(String),
    /// One chip per selected value.
    Chips(Vec<Chip<V>>),
}

impl<T, A: OptionAccess<T>> MultiSelect<T, A> {
    /// The trigger's content for the current selection and display mode.
    ///
    /// Labels come from the whole option set, so values hidden by the filter
    /// are still named. Values whose option is unknown are left out of the
    /// text.
    #[must_use]
    pub fn display_label(&self) -> DisplayLabel<A::Value> {
        let values = self.selection.values();
        if values.is_empty() {
            return DisplayLabel::Placeholder(self.config.placeholder.clone().unwrap_or_default());
        }
        if self
            .config
            .max_selected_labels
            .is_some_and(|max| values.len() > max)
        {
            let template = self
                .config
                .selected_items_label
                .as_deref()
                .unwrap_or(DEFAULT_SELECTED_ITEMS_LABEL);
            return DisplayLabel::Summary(fill(template, values.len()));
        }
        match self.config.display {
            DisplayMode::Comma => {
                let labels: Vec<String> = values
                    .iter()
                    .filter_map(|value| label_of_value(&self.source, &self.access, value))
                    .map(|label| label.to_string())
                    .collect();
                DisplayLabel::Text(labels.join(", "))
            }
            DisplayMode::Chip => DisplayLabel::Chips(
                values
                    .iter()
                    .map(|value| Chip {
                        value: value.clone(),
                        label: label_of_value(&self.source, &self.access, value)
                            .map(|label| label.to_string()),
                    })
                    .collect(),
            ),
        }
    }

    /// Announcement of the current selection size.
    #[must_use]
    pub fn selected_message(&self) -> String {
        let messages = &self.config.messages;
        if self.selection.is_empty() {
            messages.empty_selection.clone()
        } else {
            fill(&messages.selection, self.selection.len())
        }
    }

    /// Announcement of the filter result; counts every visible row.
    #[must_use]
    pub fn filter_result_message(&self) -> String {
        let messages = &self.config.messages;
        if self.visible.is_empty() {
            messages.empty_filter.clone()
        } else {
            fill(&messages.filter_result, self.visible.len())
        }
    }

    /// Text for an empty option list: the filter's message while filtering.
    #[must_use]
    pub fn empty_message(&self) -> &str {
        let messages = &self.config.messages;
        if self.filter_text.is_empty() {
            &messages.empty
        } else {
            &messages.empty_filter
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;

    use multipick_options::{Identity, OptionSource};
    use multipick_overlay::OverlayManager;

    use super::*;
    use crate::MultiSelectConfig;

    fn select(config: MultiSelectConfig) -> MultiSelect<&'static str, Identity> {
        MultiSelect::new(Identity, config, OverlayManager::shared())
            .unwrap()
            .with_options(Arc::new(OptionSource::flat(vec![
                "Apple", "Banana", "Cherry",
            ])))
    }

    #[test]
    fn placeholder_then_labels() {
        let mut s = select(MultiSelectConfig::default().with_placeholder("Pick fruit"));
        assert_eq!(
            s.display_label(),
            DisplayLabel::Placeholder(String::from("Pick fruit"))
        );

        // Selection order, and unknown values are left out.
        s.set_value(vec!["Cherry", "Durian", "Apple"]);
        assert_eq!(
            s.display_label(),
            DisplayLabel::Text(String::from("Cherry, Apple"))
        );
    }

    #[test]
    fn summary_past_the_label_limit() {
        let mut s = select(MultiSelectConfig::default().with_max_selected_labels(Some(2)));
        s.set_value(vec!["Apple", "Banana"]);
        assert!(matches!(s.display_label(), DisplayLabel::Text(_)));

        s.set_value(vec!["Apple", "Banana", "Cherry"]);
        assert_eq!(
            s.display_label(),
            DisplayLabel::Summary(String::from("3 items selected"))
        );
    }

    #[test]
    fn chips_name_hidden_values() {
        let mut s = select(MultiSelectConfig::default().with_display(DisplayMode::Chip));
        s.set_value(vec!["Apple", "Durian"]);
        s.set_filter("ch");

        assert_eq!(
            s.display_label(),
            DisplayLabel::Chips(vec![
                Chip {
                    value: "Apple",
                    label: Some(String::from("Apple")),
                },
                Chip {
                    value: "Durian",
                    label: None,
                },
            ])
        );
    }

    #[test]
    fn screen_reader_messages() {
        let mut s = select(MultiSelectConfig::default());
        assert_eq!(s.selected_message(), "No selected item");
        assert_eq!(s.filter_result_message(), "3 results are available");
        assert_eq!(s.empty_message(), "No available options");

        s.set_value(vec!["Apple"]);
        assert_eq!(s.selected_message(), "1 items selected");

        s.set_filter("zz");
        assert_eq!(s.filter_result_message(), "No results found");
        assert_eq!(s.empty_message(), "No results found");
    }
}
