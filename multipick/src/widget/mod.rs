// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed multi-select widget.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use multipick_event_state::keys::RangeAnchor;
use multipick_event_state::typeahead::TypeAhead;
use multipick_focus::{FocusEntry, FocusPolicy, ListPolicy, ListSpace, Navigation};
use multipick_options::{Filter, OptionAccess, OptionSource, VisibleEntry, render_key};
use multipick_overlay::{
    OverlayController, OverlayEvent, OverlayEvents, OverlayState, SharedOverlayManager,
};
use multipick_selection::Selection;
use multipick_virtual_list::{ListWindow, ScrollOutcome, VirtualWindow};

use crate::visible::{CursorSpace, VisibleRows};
use crate::{ConfigError, Effect, FocusTarget, MultiSelectConfig, MultiSelectEvent};

mod display;
mod keyboard;
mod pointer;

pub use display::{Chip, DisplayLabel};

/// Default prefix of option element ids.
pub const DEFAULT_WIDGET_ID: &str = "multipick";

/// Host geometry the overlay is placed against, in viewport coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Bounds of the trigger control.
    pub trigger: Rect,
    /// Preferred size of the overlay panel.
    pub overlay_size: Size,
    /// The visible viewport.
    pub viewport: Rect,
}

/// A headless multi-select combo box.
///
/// The widget owns the selection, the filter text, the cursor, and the overlay
/// lifecycle. Options are borrowed from the caller through an [`Arc`] and read
/// through an [`OptionAccess`]. Input arrives through the `on_*` methods; the
/// widget answers with [`MultiSelectEvent`]s for the owning screen and
/// [`Effect`]s for the host, both collected until taken.
///
/// The visible list is recomputed whenever the options or the filter text
/// change, and only then. Visible indices are positions in that list and are
/// invalidated by the recomputation.
#[derive(Debug)]
pub struct MultiSelect<T, A: OptionAccess<T>> {
    config: MultiSelectConfig,
    access: A,
    source: Arc<OptionSource<T>>,
    filter: Filter,
    filter_text: String,
    visible: Vec<VisibleEntry>,
    selection: Selection<A::Value>,
    cursor: Option<usize>,
    anchor: RangeAnchor,
    type_ahead: TypeAhead,
    policy: ListPolicy,
    overlay: OverlayController,
    window: ListWindow,
    layout: Layout,
    overlay_focusables: Vec<FocusEntry<u32>>,
    id: String,
    focused: bool,
    /// Set by a trigger click and cleared by the next key press.
    clicked: bool,
    events: Vec<MultiSelectEvent<A::Value>>,
    effects: Vec<Effect>,
}

impl<T, A: OptionAccess<T>> MultiSelect<T, A> {
    /// Creates a widget without options or selection.
    ///
    /// The overlay registers with `manager`, which is shared by every widget
    /// on the same surface.
    pub fn new(
        access: A,
        config: MultiSelectConfig,
        manager: SharedOverlayManager,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let window = match config.virtual_scroller {
            Some(scroller) => ListWindow::virtualized(
                0,
                scroller.item_size,
                scroller.viewport_extent,
                scroller.overscan,
            ),
            None => ListWindow::direct(0),
        };
        Ok(Self {
            filter: config.build_filter(),
            selection: Selection::new().with_limit(config.selection_limit),
            type_ahead: TypeAhead::with_timeout(config.type_ahead_timeout_ms),
            config,
            access,
            source: Arc::new(OptionSource::default()),
            filter_text: String::new(),
            visible: Vec::new(),
            cursor: None,
            anchor: RangeAnchor::new(),
            policy: ListPolicy,
            overlay: OverlayController::new(manager),
            window,
            layout: Layout::default(),
            overlay_focusables: Vec::new(),
            id: String::from(DEFAULT_WIDGET_ID),
            focused: false,
            clicked: false,
            events: Vec::new(),
            effects: Vec::new(),
        })
    }

    /// Sets the prefix of option element ids.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the options.
    #[must_use]
    pub fn with_options(mut self, source: Arc<OptionSource<T>>) -> Self {
        self.set_options(source);
        self
    }

    /// Sets the initial selection.
    ///
    /// Values without a matching option are kept; an option that arrives later
    /// shows up as selected.
    #[must_use]
    pub fn with_value(mut self, values: Vec<A::Value>) -> Self {
        self.set_value(values);
        self
    }

    /// Replaces the options and recomputes the visible list.
    pub fn set_options(&mut self, source: Arc<OptionSource<T>>) {
        self.source = source;
        self.recompute_visible();
    }

    /// Replaces the selection without emitting a change, as when the owning
    /// screen pushes a new value down.
    pub fn set_value(&mut self, values: Vec<A::Value>) {
        let rows = VisibleRows::new(&self.source, &self.access, &self.visible);
        self.selection.replace(&rows, values);
    }

    /// Updates the geometry used to place the overlay, re-placing it if shown.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        if self.overlay.is_visible() {
            self.realign();
        }
    }

    /// Registers the focusable elements inside the overlay, for the tab trap.
    pub fn set_overlay_focusables(&mut self, focusables: Vec<FocusEntry<u32>>) {
        self.overlay_focusables = focusables;
    }

    /// Disables or enables the widget; disabling closes the overlay.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.hide_with(false);
        }
    }

    /// Shows or clears the loading state.
    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
    }

    /// Pushes caller-owned toggle-all state down; `None` hands it back to the
    /// widget.
    pub fn set_select_all(&mut self, select_all: Option<bool>) {
        self.config.select_all = select_all;
    }

    /// Sets the filter text, as typed into the filter input.
    ///
    /// Recomputes the visible list, unsets the cursor, and scrolls the list
    /// back to the top.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.filter_text {
            return;
        }
        self.filter_text = text;
        self.cursor = None;
        self.recompute_visible();
        tracing::debug!(query = %self.filter_text, visible = self.visible.len(), "filter changed");
        self.events.push(MultiSelectEvent::Filter {
            value: self.filter_text.clone(),
        });
        if self.window.is_virtualized() {
            self.window.reset();
            self.effects.push(Effect::ScrollTo { offset: 0.0 });
        }
        if self.overlay.is_visible() {
            self.realign();
        }
    }

    /// Opens the overlay.
    pub fn show(&mut self) {
        self.show_with(false);
    }

    /// Closes the overlay without moving focus.
    pub fn hide(&mut self) {
        self.hide_with(false);
    }

    /// Runs deferred work: the pending overlay step, and expiry of the
    /// type-ahead buffer at `now` milliseconds.
    ///
    /// Hosts call this once after dispatching each input event, and from a
    /// timer while the type-ahead buffer is not empty.
    pub fn tick(&mut self, now: u64) {
        let events = self.overlay.tick();
        self.apply_overlay_events(events);
        if self.type_ahead.expire(now) {
            tracing::trace!("type-ahead buffer expired");
        }
    }

    /// Replaces the selection with every selectable visible option.
    pub fn select_all(&mut self) {
        let rows = VisibleRows::new(&self.source, &self.access, &self.visible);
        if self.selection.select_all(&rows) {
            self.emit_change();
        }
    }

    /// The header checkbox was clicked.
    ///
    /// With caller-owned toggle-all state only a
    /// [`MultiSelectEvent::SelectAllChange`] is emitted. Otherwise the visible
    /// options are deselected when all of them are selected, and selected
    /// when not. Ignored while the checkbox is hidden.
    pub fn toggle_all(&mut self) {
        if self.config.disabled || !self.is_toggle_all_visible() {
            return;
        }
        let checked = !self.all_selected();
        if self.config.select_all.is_some() {
            self.events.push(MultiSelectEvent::SelectAllChange { checked });
            return;
        }
        if checked {
            self.select_all();
        } else {
            let rows = VisibleRows::new(&self.source, &self.access, &self.visible);
            if self.selection.clear_visible(&rows) {
                self.emit_change();
            }
        }
    }

    /// Empties the selection, hidden values included; the clear icon.
    pub fn clear(&mut self) {
        if self.selection.clear_all() {
            self.emit_change();
        }
        if self.config.reset_filter_on_clear && !self.filter_text.is_empty() {
            self.filter_text.clear();
            self.recompute_visible();
        }
    }

    /// Deselects one value; a chip's remove icon.
    pub fn remove_value(&mut self, value: &A::Value) {
        let rows = VisibleRows::new(&self.source, &self.access, &self.visible);
        if self.selection.remove_value(&rows, value) {
            self.emit_change();
        }
    }

    /// Takes the notifications produced since the last call.
    pub fn take_events(&mut self) -> Vec<MultiSelectEvent<A::Value>> {
        core::mem::take(&mut self.events)
    }

    /// Takes the host effects produced since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        core::mem::take(&mut self.effects)
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &MultiSelectConfig {
        &self.config
    }

    /// The option accessors.
    #[must_use]
    pub fn access(&self) -> &A {
        &self.access
    }

    /// The options.
    #[must_use]
    pub fn options(&self) -> &Arc<OptionSource<T>> {
        &self.source
    }

    /// Selected values in selection order.
    #[must_use]
    pub fn value(&self) -> &[A::Value] {
        self.selection.values()
    }

    /// The current filter text.
    #[must_use]
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// The visible list.
    #[must_use]
    pub fn visible(&self) -> &[VisibleEntry] {
        &self.visible
    }

    /// The option behind visible row `index`; `None` for headers.
    #[must_use]
    pub fn option_at(&self, index: usize) -> Option<&T> {
        self.rows().option(index)
    }

    /// Label of visible row `index`: the option's label or the group's.
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<Cow<'_, str>> {
        match *self.visible.get(index)? {
            VisibleEntry::Group { group, .. } => self
                .source
                .group(group)
                .map(|g| Cow::Borrowed(g.label.as_str())),
            VisibleEntry::Option(at) => self.source.get(at).map(|o| self.access.label(o)),
        }
    }

    /// Reconciliation key of visible row `index`.
    #[must_use]
    pub fn render_key(&self, index: usize) -> Option<String> {
        match *self.visible.get(index)? {
            VisibleEntry::Group { group, .. } => self
                .source
                .group(group)
                .map(|g| format!("{}_{index}", g.label)),
            VisibleEntry::Option(at) => self
                .source
                .get(at)
                .map(|o| render_key(&self.access, o, index)),
        }
    }

    /// Returns `true` if visible row `index` holds a selected option.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected_at(&self.rows(), index)
    }

    /// Returns `true` if visible row `index` is disabled, by its option or by
    /// a reached selection limit.
    #[must_use]
    pub fn is_option_disabled(&self, index: usize) -> bool {
        self.selection.is_disabled_at(&self.rows(), index)
    }

    /// Returns `true` once the selection limit is reached.
    #[must_use]
    pub fn limit_reached(&self) -> bool {
        self.selection.limit_reached()
    }

    /// State of the header checkbox.
    ///
    /// Caller-owned state wins. Otherwise `true` when the visible list has
    /// rows and every option in it is selected or disabled.
    #[must_use]
    pub fn all_selected(&self) -> bool {
        match self.config.select_all {
            Some(checked) => checked,
            None => self.selection.all_selected(&self.rows()),
        }
    }

    /// Returns `true` if the header checkbox is shown: configured on and no
    /// selection limit.
    #[must_use]
    pub fn is_toggle_all_visible(&self) -> bool {
        self.config.show_toggle_all && self.config.selection_limit.is_none()
    }

    /// The cursor: a visible index, or unset.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Where the running Shift gesture started.
    #[must_use]
    pub fn range_anchor(&self) -> Option<usize> {
        self.anchor.get()
    }

    /// The type-ahead buffer.
    #[must_use]
    pub fn type_ahead(&self) -> &str {
        self.type_ahead.buffer()
    }

    /// When the type-ahead buffer expires, in the host's milliseconds.
    #[must_use]
    pub fn type_ahead_deadline(&self) -> Option<u64> {
        self.type_ahead.deadline()
    }

    /// The overlay's lifecycle state.
    #[must_use]
    pub fn overlay_state(&self) -> OverlayState {
        self.overlay.state()
    }

    /// Returns `true` while the overlay is shown.
    #[must_use]
    pub fn is_overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// The overlay controller.
    #[must_use]
    pub fn overlay(&self) -> &OverlayController {
        &self.overlay
    }

    /// Returns `true` while the widget has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The rows to render.
    pub fn window(&mut self) -> VirtualWindow {
        self.window.window()
    }

    /// The option list was scrolled by the user.
    pub fn on_list_scroll(&mut self, offset: f64) {
        self.window.on_scroll(offset);
    }

    /// A rendered row reported its measured height.
    pub fn on_row_measured(&mut self, index: usize, extent: f64) {
        self.window.measure(index, extent);
    }

    /// Element id of visible row `index`.
    #[must_use]
    pub fn option_id(&self, index: usize) -> String {
        format!("{}_{index}", self.id)
    }

    /// Element id of the row under the cursor, for `aria-activedescendant`.
    #[must_use]
    pub fn focused_option_id(&self) -> Option<String> {
        self.cursor.map(|index| self.option_id(index))
    }

    /// 1-based position of row `index` among the option rows.
    #[must_use]
    pub fn pos_in_set(&self, index: usize) -> Option<usize> {
        multipick_options::pos_in_set(&self.visible, index)
    }

    /// Number of option rows in the visible list.
    #[must_use]
    pub fn set_size(&self) -> usize {
        multipick_options::set_size(&self.visible)
    }

    fn rows(&self) -> VisibleRows<'_, T, A> {
        VisibleRows::new(&self.source, &self.access, &self.visible)
    }

    fn space(&self) -> CursorSpace<'_, T, A> {
        CursorSpace {
            rows: self.rows(),
            selection: &self.selection,
        }
    }

    fn recompute_visible(&mut self) {
        self.visible = self
            .filter
            .apply(&self.source, &self.access, &self.filter_text);
        self.window.set_len(self.visible.len());
        if self.cursor.is_some_and(|c| !self.space().is_focusable(c)) {
            self.cursor = None;
        }
        tracing::debug!(visible = self.visible.len(), "visible list recomputed");
    }

    fn emit_change(&mut self) {
        tracing::debug!(count = self.selection.len(), "selection changed");
        self.events.push(MultiSelectEvent::Change {
            value: self.selection.values().to_vec(),
        });
    }

    fn toggle_index(&mut self, index: usize) {
        let rows = VisibleRows::new(&self.source, &self.access, &self.visible);
        if self.selection.toggle_at(&rows, index) {
            self.emit_change();
        }
    }

    fn select_range(&mut self, from: Option<usize>, to: Option<usize>) {
        let rows = VisibleRows::new(&self.source, &self.access, &self.visible);
        if self.selection.select_range(&rows, from, to) {
            self.emit_change();
        }
    }

    /// Moves the cursor and scrolls its row into view; ignores `None`.
    fn move_cursor(&mut self, index: Option<usize>) {
        let Some(index) = index else {
            return;
        };
        if self.cursor != Some(index) {
            self.cursor = Some(index);
            tracing::trace!(index, "cursor moved");
            self.scroll_in_view(index);
        }
    }

    fn step(&self, direction: Navigation) -> Option<usize> {
        self.policy.next(self.cursor, direction, &self.space())
    }

    fn scroll_in_view(&mut self, index: usize) {
        match self.window.scroll_to_index(index) {
            ScrollOutcome::Idle => {}
            ScrollOutcome::IntoView(index) => self.effects.push(Effect::ScrollIntoView {
                index,
                id: self.option_id(index),
            }),
            ScrollOutcome::Scrolled { offset } => self.effects.push(Effect::ScrollTo { offset }),
        }
    }

    /// First selected row, else the first selectable one.
    fn first_focused(&self) -> Option<usize> {
        self.selection
            .first_selected_index(&self.rows())
            .or_else(|| self.space().first_focusable())
    }

    /// Row of the most recently selected value, else the last selectable one.
    fn last_focused(&self) -> Option<usize> {
        self.selection
            .selected_index(&self.rows())
            .or_else(|| self.space().last_focusable())
    }

    fn seed_cursor(&mut self) {
        if self.cursor.is_none() {
            self.cursor = if self.config.auto_option_focus {
                self.first_focused()
            } else {
                self.selection.selected_index(&self.rows())
            };
        }
    }

    fn show_with(&mut self, focus_trigger: bool) {
        if self.config.disabled {
            return;
        }
        let was_visible = self.overlay.is_visible();
        let events = self.overlay.show(
            self.layout.trigger,
            self.layout.overlay_size,
            self.layout.viewport,
        );
        self.apply_overlay_events(events);
        if focus_trigger {
            self.effects.push(Effect::Focus(FocusTarget::Trigger));
        }
        if was_visible || !self.overlay.is_visible() {
            return;
        }
        self.seed_cursor();
        self.position_overlay();
        if let Some(cursor) = self.cursor {
            self.scroll_in_view(cursor);
        }
        if self.config.filter && self.config.auto_filter_focus {
            self.effects.push(Effect::Focus(FocusTarget::Filter));
        }
    }

    fn hide_with(&mut self, restore_focus: bool) {
        let events = self.overlay.hide(restore_focus);
        self.apply_overlay_events(events);
    }

    fn realign(&mut self) {
        self.overlay.realign(
            self.layout.trigger,
            self.layout.overlay_size,
            self.layout.viewport,
        );
        self.position_overlay();
    }

    fn position_overlay(&mut self) {
        if let (Some(placement), Some(z_index)) = (self.overlay.placement(), self.overlay.z_index())
        {
            self.effects
                .push(Effect::PositionOverlay { placement, z_index });
        }
    }

    fn apply_overlay_events(&mut self, events: OverlayEvents) {
        for event in events {
            match event {
                OverlayEvent::BeforeShow => self.events.push(MultiSelectEvent::BeforeShow),
                OverlayEvent::Show => self.events.push(MultiSelectEvent::Show),
                OverlayEvent::BeforeHide => {
                    self.events.push(MultiSelectEvent::BeforeHide);
                    self.reset_on_close();
                }
                OverlayEvent::Hide => self.events.push(MultiSelectEvent::Hide),
                OverlayEvent::RestoreFocus => {
                    self.effects.push(Effect::Focus(FocusTarget::Trigger));
                }
            }
        }
    }

    /// Navigation state does not outlive an open/close cycle.
    fn reset_on_close(&mut self) {
        self.clicked = false;
        self.cursor = None;
        self.anchor.end();
        self.type_ahead.clear();
        self.window.reset();
        if self.config.reset_filter_on_hide && !self.filter_text.is_empty() {
            self.filter_text.clear();
            self.recompute_visible();
        }
    }
}
