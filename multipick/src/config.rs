// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget configuration and its validation.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use multipick_event_state::typeahead::DEFAULT_TIMEOUT_MS;
use multipick_options::{Filter, MatchMode};
use serde::{Deserialize, Serialize};

/// How the trigger shows the current selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// Labels joined with `", "`.
    #[default]
    Comma,
    /// One removable chip per selected value.
    Chip,
}

/// Fixed-extent virtualization of the option list.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VirtualScrollerConfig {
    /// Height of one row in logical pixels.
    pub item_size: f64,
    /// Height of the scrolling viewport in logical pixels.
    pub viewport_extent: f64,
    /// Extra pixels rendered above and below the viewport.
    pub overscan: f64,
}

impl Default for VirtualScrollerConfig {
    fn default() -> Self {
        Self {
            item_size: 38.0,
            viewport_extent: 200.0,
            overscan: 76.0,
        }
    }
}

/// Screen reader message templates; `{0}` is replaced by a count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    /// Announced while the filter matches something.
    pub filter_result: String,
    /// Announced when the filter matches nothing.
    pub empty_filter: String,
    /// Shown when there are no options at all.
    pub empty: String,
    /// Announced while something is selected.
    pub selection: String,
    /// Announced when nothing is selected.
    pub empty_selection: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            filter_result: "{0} results are available".to_string(),
            empty_filter: "No results found".to_string(),
            empty: "No available options".to_string(),
            selection: "{0} items selected".to_string(),
            empty_selection: "No selected item".to_string(),
        }
    }
}

/// Replaces `{0}` in `template` with `count`.
pub(crate) fn fill(template: &str, count: usize) -> String {
    template.replace("{0}", &count.to_string())
}

/// Everything a host can configure on a [`MultiSelect`](crate::MultiSelect).
///
/// Every field has a default, so partial JSON or TOML documents deserialize:
///
/// ```rust
/// use multipick::{DisplayMode, MultiSelectConfig};
///
/// let config = MultiSelectConfig::default()
///     .with_filter(true)
///     .with_display(DisplayMode::Chip)
///     .with_selection_limit(Some(3));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiSelectConfig {
    /// Shows a filter input in the overlay.
    pub filter: bool,
    /// How the filter query is compared.
    pub filter_match_mode: MatchMode,
    /// Option fields the filter looks at; the label when empty.
    pub filter_fields: Vec<String>,
    /// Locale used to fold case before comparing.
    pub filter_locale: Option<String>,
    /// Comma-joined text or chips.
    pub display: DisplayMode,
    /// Trigger text while nothing is selected.
    pub placeholder: Option<String>,
    /// Above this many selected values, the trigger shows a summary instead.
    pub max_selected_labels: Option<usize>,
    /// Summary template; `{0}` is the selected count.
    pub selected_items_label: Option<String>,
    /// Maximum number of selected values.
    pub selection_limit: Option<usize>,
    /// Shows the header checkbox that toggles every visible option.
    ///
    /// The checkbox is never shown while a selection limit is set.
    pub show_toggle_all: bool,
    /// Caller-owned toggle-all state; when set, the header checkbox only
    /// reports clicks.
    pub select_all: Option<bool>,
    /// Clears the filter whenever the overlay closes.
    pub reset_filter_on_hide: bool,
    /// Clears the filter when the clear icon empties the selection.
    pub reset_filter_on_clear: bool,
    /// Seeds the cursor on the first focusable option when the overlay opens.
    pub auto_option_focus: bool,
    /// Focuses the filter input when the overlay opens.
    pub auto_filter_focus: bool,
    /// Moves the cursor to the option under the pointer.
    pub focus_on_hover: bool,
    /// Ignores all interaction.
    pub disabled: bool,
    /// Shows a loading state; trigger clicks are ignored.
    pub loading: bool,
    /// Type-ahead buffer lifetime after the last keystroke, in milliseconds.
    pub type_ahead_timeout_ms: u64,
    /// Virtualizes the option list when set.
    pub virtual_scroller: Option<VirtualScrollerConfig>,
    /// Screen reader message templates.
    pub messages: Messages,
}

impl Default for MultiSelectConfig {
    fn default() -> Self {
        Self {
            filter: false,
            filter_match_mode: MatchMode::default(),
            filter_fields: Vec::new(),
            filter_locale: None,
            display: DisplayMode::default(),
            placeholder: None,
            max_selected_labels: None,
            selected_items_label: None,
            selection_limit: None,
            show_toggle_all: true,
            select_all: None,
            reset_filter_on_hide: false,
            reset_filter_on_clear: false,
            auto_option_focus: false,
            auto_filter_focus: false,
            focus_on_hover: true,
            disabled: false,
            loading: false,
            type_ahead_timeout_ms: DEFAULT_TIMEOUT_MS,
            virtual_scroller: None,
            messages: Messages::default(),
        }
    }
}

/// Errors reported for a configuration that cannot drive a widget.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Virtual rows need a positive, finite height.
    #[error("virtual scroller item size must be positive and finite, got {0}")]
    InvalidItemSize(f64),
    /// The virtual viewport needs a positive, finite height.
    #[error("virtual scroller viewport extent must be positive and finite, got {0}")]
    InvalidViewportExtent(f64),
    /// Overscan must be finite and not negative.
    #[error("virtual scroller overscan must be finite and non-negative, got {0}")]
    InvalidOverscan(f64),
    /// A selection limit of zero would disable every option.
    #[error("selection limit must be at least 1")]
    ZeroSelectionLimit,
    /// A summary after zero labels would never show a label.
    #[error("max selected labels must be at least 1")]
    ZeroMaxSelectedLabels,
    /// JSON options were configured inconsistently.
    #[cfg(feature = "json")]
    #[error(transparent)]
    Options(#[from] multipick_options::JsonSourceError),
}

impl MultiSelectConfig {
    /// Checks the values that cannot be clamped into something sensible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(scroller) = &self.virtual_scroller {
            if !scroller.item_size.is_finite() || scroller.item_size <= 0.0 {
                return Err(ConfigError::InvalidItemSize(scroller.item_size));
            }
            if !scroller.viewport_extent.is_finite() || scroller.viewport_extent <= 0.0 {
                return Err(ConfigError::InvalidViewportExtent(scroller.viewport_extent));
            }
            if !scroller.overscan.is_finite() || scroller.overscan < 0.0 {
                return Err(ConfigError::InvalidOverscan(scroller.overscan));
            }
        }
        if self.selection_limit == Some(0) {
            return Err(ConfigError::ZeroSelectionLimit);
        }
        if self.max_selected_labels == Some(0) {
            return Err(ConfigError::ZeroMaxSelectedLabels);
        }
        Ok(())
    }

    /// The filter described by the `filter_*` fields.
    #[must_use]
    pub fn build_filter(&self) -> Filter {
        Filter::new()
            .with_fields(self.filter_fields.clone())
            .with_mode(self.filter_match_mode)
            .with_locale(self.filter_locale.as_deref())
    }

    /// Enables or disables the filter input.
    #[must_use]
    pub fn with_filter(mut self, filter: bool) -> Self {
        self.filter = filter;
        self
    }

    /// Sets how the filter compares text.
    #[must_use]
    pub fn with_filter_match_mode(mut self, mode: MatchMode) -> Self {
        self.filter_match_mode = mode;
        self
    }

    /// Sets the option fields the filter looks at.
    #[must_use]
    pub fn with_filter_fields(mut self, fields: Vec<String>) -> Self {
        self.filter_fields = fields;
        self
    }

    /// Sets the filter locale.
    #[must_use]
    pub fn with_filter_locale(mut self, locale: Option<String>) -> Self {
        self.filter_locale = locale;
        self
    }

    /// Sets the display mode.
    #[must_use]
    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the label count above which a summary is shown.
    #[must_use]
    pub fn with_max_selected_labels(mut self, max: Option<usize>) -> Self {
        self.max_selected_labels = max;
        self
    }

    /// Sets the summary template.
    #[must_use]
    pub fn with_selected_items_label(mut self, label: impl Into<String>) -> Self {
        self.selected_items_label = Some(label.into());
        self
    }

    /// Caps the number of selected values.
    #[must_use]
    pub fn with_selection_limit(mut self, limit: Option<usize>) -> Self {
        self.selection_limit = limit;
        self
    }

    /// Shows or hides the header checkbox.
    #[must_use]
    pub fn with_show_toggle_all(mut self, show: bool) -> Self {
        self.show_toggle_all = show;
        self
    }

    /// Hands toggle-all state to the caller.
    #[must_use]
    pub fn with_select_all(mut self, select_all: Option<bool>) -> Self {
        self.select_all = select_all;
        self
    }

    /// Clears the filter on every close.
    #[must_use]
    pub fn with_reset_filter_on_hide(mut self, reset: bool) -> Self {
        self.reset_filter_on_hide = reset;
        self
    }

    /// Clears the filter when the selection is cleared.
    #[must_use]
    pub fn with_reset_filter_on_clear(mut self, reset: bool) -> Self {
        self.reset_filter_on_clear = reset;
        self
    }

    /// Seeds the cursor on open.
    #[must_use]
    pub fn with_auto_option_focus(mut self, auto: bool) -> Self {
        self.auto_option_focus = auto;
        self
    }

    /// Focuses the filter input on open.
    #[must_use]
    pub fn with_auto_filter_focus(mut self, auto: bool) -> Self {
        self.auto_filter_focus = auto;
        self
    }

    /// Moves the cursor on hover.
    #[must_use]
    pub fn with_focus_on_hover(mut self, hover: bool) -> Self {
        self.focus_on_hover = hover;
        self
    }

    /// Disables the widget.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the type-ahead timeout.
    #[must_use]
    pub fn with_type_ahead_timeout_ms(mut self, timeout: u64) -> Self {
        self.type_ahead_timeout_ms = timeout;
        self
    }

    /// Virtualizes the option list.
    #[must_use]
    pub fn with_virtual_scroller(mut self, scroller: Option<VirtualScrollerConfig>) -> Self {
        self.virtual_scroller = scroller;
        self
    }

    /// Replaces the message templates.
    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = MultiSelectConfig::default();
        assert_eq!(config.type_ahead_timeout_ms, 500);
        assert!(config.focus_on_hover);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_values() {
        let config = MultiSelectConfig::default().with_selection_limit(Some(0));
        assert_eq!(config.validate(), Err(ConfigError::ZeroSelectionLimit));

        let config = MultiSelectConfig::default().with_max_selected_labels(Some(0));
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxSelectedLabels));

        let config = MultiSelectConfig::default().with_virtual_scroller(Some(VirtualScrollerConfig {
            item_size: 0.0,
            ..VirtualScrollerConfig::default()
        }));
        assert_eq!(config.validate(), Err(ConfigError::InvalidItemSize(0.0)));

        let config = MultiSelectConfig::default().with_virtual_scroller(Some(VirtualScrollerConfig {
            viewport_extent: f64::INFINITY,
            ..VirtualScrollerConfig::default()
        }));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidViewportExtent(_))
        ));
    }

    #[test]
    fn fills_templates() {
        assert_eq!(fill("{0} items selected", 3), "3 items selected");
        assert_eq!(fill("none", 3), "none");
    }
}
