// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input, focus changes, and overlay dismissal.

use kurbo::Point;
use multipick_focus::ListSpace;
use multipick_options::OptionAccess;

use super::MultiSelect;
use crate::{Effect, FocusTarget, MultiSelectEvent};

impl<T, A: OptionAccess<T>> MultiSelect<T, A> {
    /// The trigger was clicked: toggles the overlay and focuses the trigger.
    ///
    /// Ignored while disabled or loading.
    pub fn on_trigger_click(&mut self) {
        if self.config.disabled || self.config.loading {
            return;
        }
        if self.overlay.is_visible() {
            self.hide_with(true);
        } else {
            self.show_with(true);
        }
        self.clicked = true;
    }

    /// An option row was clicked: toggles it and puts the cursor there.
    ///
    /// Headers and disabled rows ignore clicks.
    pub fn on_option_click(&mut self, index: usize) {
        if self.config.disabled || !self.space().is_focusable(index) {
            return;
        }
        self.toggle_index(index);
        self.cursor = Some(index);
        self.effects.push(Effect::Focus(FocusTarget::Trigger));
    }

    /// The pointer moved over an option row.
    pub fn on_option_hover(&mut self, index: usize) {
        if self.config.focus_on_hover && self.space().is_focusable(index) {
            self.move_cursor(Some(index));
        }
    }

    /// The pointer went down at `point`, anywhere on the surface.
    ///
    /// Presses outside both the trigger and the overlay close it.
    pub fn on_pointer_down(&mut self, point: Point) {
        let events = self.overlay.on_pointer_down(point);
        self.apply_overlay_events(events);
    }

    /// A container of the trigger scrolled; closes the overlay.
    pub fn on_scroll(&mut self) {
        let events = self.overlay.on_scroll();
        self.apply_overlay_events(events);
    }

    /// The window was resized; closes the overlay unless `touch`.
    pub fn on_resize(&mut self, touch: bool) {
        let events = self.overlay.on_resize(touch);
        self.apply_overlay_events(events);
    }

    /// The trigger gained focus.
    pub fn on_focus(&mut self) {
        if self.config.disabled {
            return;
        }
        self.focused = true;
        if self.overlay.is_visible() {
            self.seed_cursor();
            if !self.config.auto_filter_focus {
                if let Some(cursor) = self.cursor {
                    self.scroll_in_view(cursor);
                }
            }
        }
        self.events.push(MultiSelectEvent::Focus);
    }

    /// The trigger lost focus.
    pub fn on_blur(&mut self) {
        self.clicked = false;
        self.focused = false;
        self.cursor = None;
        self.type_ahead.clear();
        self.events.push(MultiSelectEvent::Blur);
    }

    /// The filter input lost focus.
    pub fn on_filter_blur(&mut self) {
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size};
    use multipick_event_state::keys::{Key, KeyEvent};
    use multipick_options::{Identity, OptionSource};
    use multipick_overlay::{OverlayManager, OverlayState};

    use crate::{Effect, FocusTarget, Layout, MultiSelect, MultiSelectConfig, MultiSelectEvent};

    type Select = MultiSelect<&'static str, Identity>;

    fn select(config: MultiSelectConfig) -> Select {
        let mut select: Select = MultiSelect::new(Identity, config, OverlayManager::shared())
            .unwrap()
            .with_options(Arc::new(OptionSource::flat(vec![
                "Apple", "Banana", "Cherry",
            ])));
        select.set_layout(Layout {
            trigger: Rect::new(10.0, 10.0, 210.0, 40.0),
            overlay_size: Size::new(200.0, 150.0),
            viewport: Rect::new(0.0, 0.0, 800.0, 600.0),
        });
        select
    }

    #[test]
    fn trigger_click_toggles() {
        let mut s = select(MultiSelectConfig::default());
        s.on_trigger_click();
        s.tick(0);
        assert_eq!(s.overlay_state(), OverlayState::Open);
        let effects = s.take_effects();
        assert_eq!(effects[0], Effect::Focus(FocusTarget::Trigger));
        assert!(matches!(effects[1], Effect::PositionOverlay { z_index: 1000, .. }));

        s.on_trigger_click();
        s.tick(0);
        assert_eq!(s.overlay_state(), OverlayState::Closed);
    }

    #[test]
    fn loading_ignores_trigger_clicks() {
        let mut s = select(MultiSelectConfig::default());
        s.set_loading(true);
        s.on_trigger_click();
        assert!(!s.is_overlay_visible());
    }

    #[test]
    fn first_arrow_after_a_click_starts_at_the_top() {
        let mut s = select(MultiSelectConfig::default()).with_value(vec!["Cherry"]);
        s.on_trigger_click();
        // Seeded on the selection.
        assert_eq!(s.cursor(), Some(2));

        s.on_filter_blur();
        s.on_key_down(KeyEvent::new(Key::ArrowDown), 0);
        assert_eq!(s.cursor(), Some(0));

        // The click only counts for one key.
        s.on_filter_blur();
        s.on_key_down(KeyEvent::new(Key::ArrowDown), 0);
        assert_eq!(s.cursor(), Some(2));
    }

    #[test]
    fn option_click_toggles_and_focuses() {
        let mut s = select(MultiSelectConfig::default());
        s.show();
        s.on_option_click(1);
        assert_eq!(s.value(), &["Banana"]);
        assert_eq!(s.cursor(), Some(1));
        assert_eq!(s.take_effects().last(), Some(&Effect::Focus(FocusTarget::Trigger)));
    }

    #[test]
    fn limit_disables_unselected_rows() {
        let mut s = select(MultiSelectConfig::default().with_selection_limit(Some(1)));
        s.show();
        s.on_option_click(0);
        s.on_option_click(1);
        assert_eq!(s.value(), &["Apple"]);
        assert!(s.limit_reached());
        assert!(s.is_option_disabled(1));

        s.on_option_hover(2);
        assert_eq!(s.cursor(), Some(0));
    }

    #[test]
    fn hover_follows_the_config() {
        let mut s = select(MultiSelectConfig::default().with_focus_on_hover(false));
        s.show();
        s.on_option_hover(1);
        assert_eq!(s.cursor(), None);
    }

    #[test]
    fn outside_click_closes_without_refocus() {
        let mut s = select(MultiSelectConfig::default());
        s.show();
        s.tick(0);
        s.take_events();

        // Inside the overlay: stays open.
        s.on_pointer_down(Point::new(100.0, 100.0));
        assert!(s.is_overlay_visible());

        s.on_pointer_down(Point::new(700.0, 500.0));
        s.tick(0);
        assert_eq!(s.overlay_state(), OverlayState::Closed);
        assert_eq!(
            s.take_events(),
            vec![MultiSelectEvent::BeforeHide, MultiSelectEvent::Hide]
        );
        assert!(!s.take_effects().contains(&Effect::Focus(FocusTarget::Trigger)));
    }

    #[test]
    fn touch_resize_keeps_it_open() {
        let mut s = select(MultiSelectConfig::default());
        s.show();
        s.tick(0);
        s.on_resize(true);
        assert!(s.is_overlay_visible());
        s.on_resize(false);
        assert!(!s.is_overlay_visible());

        s.show();
        s.tick(0);
        s.on_scroll();
        assert!(!s.is_overlay_visible());
    }

    #[test]
    fn blur_resets_the_cursor() {
        let mut s = select(MultiSelectConfig::default().with_auto_option_focus(true));
        s.on_focus();
        s.show();
        assert_eq!(s.cursor(), Some(0));
        s.on_blur();
        assert_eq!(s.cursor(), None);
        assert!(!s.is_focused());

        // Focus while open seeds again.
        s.on_focus();
        assert_eq!(s.cursor(), Some(0));
        let events: Vec<_> = s
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, MultiSelectEvent::Focus | MultiSelectEvent::Blur))
            .collect();
        assert_eq!(
            events,
            vec![
                MultiSelectEvent::Focus,
                MultiSelectEvent::Blur,
                MultiSelectEvent::Focus
            ]
        );
    }
}
