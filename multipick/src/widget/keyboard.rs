// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard handling for the trigger and the filter input.

use multipick_event_state::keys::{Key, KeyEvent, Modifiers};
use multipick_event_state::typeahead::find_from;
use multipick_focus::{FocusOrigin, FocusSpace, ListSpace, Navigation, Sentinel, redirect};
use multipick_options::OptionAccess;

use super::MultiSelect;
use crate::visible::{CursorSpace, VisibleRows};
use crate::{Effect, FocusTarget};

impl<T, A: OptionAccess<T>> MultiSelect<T, A> {
    /// A key went down while the trigger had focus.
    ///
    /// `now` is the host clock in milliseconds, used by type-ahead.
    pub fn on_key_down(&mut self, event: KeyEvent, now: u64) {
        if self.config.disabled {
            return;
        }
        let modifiers = event.modifiers;
        match event.key {
            Key::ArrowDown => self.arrow_down(modifiers.shift()),
            Key::ArrowUp => self.arrow_up(modifiers, false),
            Key::Home => self.home(modifiers, false),
            Key::End => self.end(modifiers, false),
            Key::PageUp => self.scroll_in_view(0),
            Key::PageDown => self.scroll_in_view(self.visible.len().saturating_sub(1)),
            Key::Enter | Key::NumpadEnter | Key::Space => self.activate(modifiers.shift()),
            Key::Escape => self.escape(),
            Key::Tab => self.tab(modifiers.shift()),
            Key::Shift => self.anchor.begin(self.cursor),
            Key::Character(c) if modifiers.platform() && c.eq_ignore_ascii_case(&'a') => {
                self.select_all();
            }
            _ => {
                if let Some(c) = event.printable_char() {
                    if !self.overlay.is_visible() {
                        self.show_with(false);
                    }
                    self.search(c, now);
                }
            }
        }
        self.clicked = false;
    }

    /// A key went up while the trigger had focus.
    pub fn on_key_up(&mut self, event: KeyEvent) {
        if event.key == Key::Shift {
            self.anchor.end();
        }
    }

    /// A key went down in the filter input.
    ///
    /// Text editing stays with the input; only list navigation is handled.
    pub fn on_filter_key_down(&mut self, event: KeyEvent) {
        let modifiers = event.modifiers;
        match event.key {
            Key::ArrowDown => self.arrow_down(modifiers.shift()),
            Key::ArrowUp => self.arrow_up(modifiers, true),
            Key::ArrowLeft | Key::ArrowRight => self.cursor = None,
            Key::Home => self.home(modifiers, true),
            Key::End => self.end(modifiers, true),
            Key::Enter | Key::NumpadEnter => self.activate(modifiers.shift()),
            Key::Escape => self.escape(),
            // Tab leaves the input through the overlay's own tab order.
            _ => {}
        }
    }

    /// Focus landed on one of the two sentinels flanking the overlay content.
    ///
    /// Focus goes back inside the overlay so Tab cycles through it, or to the
    /// trigger when nothing inside can take it.
    pub fn on_sentinel_focus(&mut self, sentinel: Sentinel, origin: FocusOrigin) {
        if !self.overlay.is_visible() {
            return;
        }
        let space = FocusSpace {
            nodes: &self.overlay_focusables,
        };
        let target = redirect(sentinel, origin, &space).map_or(FocusTarget::Trigger, FocusTarget::Overlay);
        self.effects.push(Effect::Focus(target));
    }

    fn arrow_down(&mut self, shift: bool) {
        if !self.overlay.is_visible() {
            self.show_with(false);
            return;
        }
        let next = match self.cursor {
            Some(_) => self.step(Navigation::Next),
            None if self.clicked => self.space().first_focusable(),
            None => self.first_focused(),
        };
        if shift {
            self.select_range(self.anchor.get(), next);
        }
        self.move_cursor(next);
    }

    fn arrow_up(&mut self, modifiers: Modifiers, in_filter: bool) {
        if modifiers.alt() && !in_filter {
            if let Some(cursor) = self.cursor {
                self.toggle_index(cursor);
            }
            self.hide_with(false);
            return;
        }
        let prev = match self.cursor {
            Some(_) => self.step(Navigation::Prev),
            None if self.clicked => self.space().last_focusable(),
            None => self.last_focused(),
        };
        if modifiers.shift() {
            self.select_range(prev, self.anchor.get());
        }
        self.move_cursor(prev);
        if !self.overlay.is_visible() {
            self.show_with(false);
        }
    }

    fn home(&mut self, modifiers: Modifiers, in_filter: bool) {
        if in_filter {
            // Shift+Home selects text in the input.
            if !modifiers.shift() {
                self.cursor = None;
            }
            return;
        }
        let first = self.step(Navigation::First);
        if modifiers.shift() && modifiers.platform() {
            self.select_range(first, self.anchor.get());
        }
        self.move_cursor(first);
        if !self.overlay.is_visible() {
            self.show_with(false);
        }
    }

    fn end(&mut self, modifiers: Modifiers, in_filter: bool) {
        if in_filter {
            if !modifiers.shift() {
                self.cursor = None;
            }
            return;
        }
        let last = self.step(Navigation::Last);
        if modifiers.shift() && modifiers.platform() {
            self.select_range(self.anchor.get(), last);
        }
        self.move_cursor(last);
        if !self.overlay.is_visible() {
            self.show_with(false);
        }
    }

    /// Enter or Space.
    fn activate(&mut self, shift: bool) {
        if !self.overlay.is_visible() {
            self.cursor = None;
            self.arrow_down(false);
            return;
        }
        let Some(cursor) = self.cursor else {
            return;
        };
        if shift {
            self.select_range(Some(cursor), None);
        } else {
            self.toggle_index(cursor);
        }
    }

    fn escape(&mut self) {
        if self.overlay.is_visible() {
            self.hide_with(true);
        }
    }

    fn tab(&mut self, shift: bool) {
        let space = FocusSpace {
            nodes: &self.overlay_focusables,
        };
        if self.overlay.is_visible() && space.has_focusable() {
            let sentinel = if shift {
                Sentinel::Trailing
            } else {
                Sentinel::Leading
            };
            if let Some(target) = redirect(sentinel, FocusOrigin::Trigger, &space) {
                self.effects
                    .push(Effect::Focus(FocusTarget::Overlay(target)));
            }
            return;
        }
        if let Some(cursor) = self.cursor {
            self.toggle_index(cursor);
        }
        let restore = self.config.filter;
        self.hide_with(restore);
    }

    /// Type-ahead: jumps to the next option whose label starts with the
    /// buffer, searching from the cursor and then from the top.
    fn search(&mut self, c: char, now: u64) {
        let fold = self.filter.fold();
        let query = fold.fold(self.type_ahead.push(c, now));
        let space = CursorSpace {
            rows: VisibleRows::new(&self.source, &self.access, &self.visible),
            selection: &self.selection,
        };
        let hit = find_from(self.visible.len(), self.cursor, |i| {
            space.is_focusable(i)
                && space
                    .rows
                    .option(i)
                    .is_some_and(|option| fold.fold(&self.access.label(option)).starts_with(&query))
        });
        match hit {
            Some(index) => {
                tracing::trace!(query = %query, index, "type-ahead match");
                self.move_cursor(Some(index));
            }
            None => tracing::trace!(query = %query, "no type-ahead match"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Rect;
    use multipick_event_state::keys::{Key, KeyEvent, Modifiers};
    use multipick_focus::{FocusEntry, FocusOrigin, Sentinel};
    use multipick_options::{Identity, OptionGroup, OptionSource};
    use multipick_overlay::{OverlayManager, OverlayState};

    use crate::{Effect, FocusTarget, MultiSelect, MultiSelectConfig, MultiSelectEvent};

    type Select = MultiSelect<&'static str, Identity>;

    fn select(options: Vec<&'static str>) -> Select {
        MultiSelect::new(Identity, MultiSelectConfig::default(), OverlayManager::shared())
            .unwrap()
            .with_options(Arc::new(OptionSource::flat(options)))
    }

    fn press(select: &mut Select, key: Key) {
        select.on_key_down(KeyEvent::new(key), 0);
    }

    fn press_with(select: &mut Select, key: Key, modifiers: Modifiers) {
        select.on_key_down(KeyEvent::new(key).with_modifiers(modifiers), 0);
    }

    fn changes(select: &mut Select) -> Vec<Vec<&'static str>> {
        select
            .take_events()
            .into_iter()
            .filter_map(|e| match e {
                MultiSelectEvent::Change { value } => Some(value),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn arrow_down_opens_then_moves() {
        let mut s = select(vec!["Apple", "Banana", "Cherry"]);
        press(&mut s, Key::ArrowDown);
        assert!(s.is_overlay_visible());
        assert_eq!(s.cursor(), None);

        press(&mut s, Key::ArrowDown);
        press(&mut s, Key::ArrowDown);
        press(&mut s, Key::ArrowDown);
        assert_eq!(s.cursor(), Some(2));
        // Holds at the end.
        press(&mut s, Key::ArrowDown);
        assert_eq!(s.cursor(), Some(2));
    }

    #[test]
    fn arrow_up_from_unset_goes_to_the_end() {
        let mut s = select(vec!["Apple", "Banana", "Cherry"]);
        press(&mut s, Key::ArrowUp);
        assert!(s.is_overlay_visible());
        assert_eq!(s.cursor(), Some(2));
        press(&mut s, Key::ArrowUp);
        assert_eq!(s.cursor(), Some(1));
    }

    #[test]
    fn navigation_skips_group_headers() {
        let source = OptionSource::grouped(vec![
            OptionGroup::new("Fruit", vec!["Apple"]),
            OptionGroup::new("Veg", vec!["Leek"]),
        ]);
        let mut s: Select = MultiSelect::new(Identity, MultiSelectConfig::default(), OverlayManager::shared())
            .unwrap()
            .with_options(Arc::new(source));
        s.show();
        press(&mut s, Key::ArrowDown);
        assert_eq!(s.cursor(), Some(1));
        press(&mut s, Key::ArrowDown);
        assert_eq!(s.cursor(), Some(3));
        press(&mut s, Key::Home);
        assert_eq!(s.cursor(), Some(1));
        press(&mut s, Key::End);
        assert_eq!(s.cursor(), Some(3));
    }

    #[test]
    fn enter_toggles_twice_back_to_empty() {
        let mut s = select(vec!["Apple", "Banana"]);
        press(&mut s, Key::Enter);
        assert!(s.is_overlay_visible());
        press(&mut s, Key::ArrowDown);
        press(&mut s, Key::Enter);
        press(&mut s, Key::Space);
        assert!(s.value().is_empty());
        assert_eq!(changes(&mut s), vec![vec!["Apple"], vec![]]);
    }

    #[test]
    fn shift_arrows_select_from_the_anchor() {
        let mut s = select(vec!["A", "B", "C", "D"]);
        s.show();
        press(&mut s, Key::ArrowDown);
        press_with(&mut s, Key::Shift, Modifiers::SHIFT);
        assert_eq!(s.range_anchor(), Some(0));

        press_with(&mut s, Key::ArrowDown, Modifiers::SHIFT);
        press_with(&mut s, Key::ArrowDown, Modifiers::SHIFT);
        assert_eq!(s.value(), &["A", "B", "C"]);

        s.on_key_up(KeyEvent::new(Key::Shift));
        assert_eq!(s.range_anchor(), None);
    }

    #[test]
    fn shift_ctrl_end_extends_from_the_selection() {
        let mut s = select(vec!["A", "B", "C", "D"]).with_value(vec!["B"]);
        s.show();
        press_with(&mut s, Key::End, Modifiers::SHIFT | Modifiers::CTRL);
        assert_eq!(s.value(), &["B", "C", "D"]);
        assert_eq!(s.cursor(), Some(3));
    }

    #[test]
    fn shift_enter_selects_to_the_nearest_selected() {
        let mut s = select(vec!["A", "B", "C", "D"]).with_value(vec!["A"]);
        s.show();
        press(&mut s, Key::End);
        press_with(&mut s, Key::Enter, Modifiers::SHIFT);
        assert_eq!(s.value(), &["A", "B", "C", "D"]);
    }

    #[test]
    fn alt_up_toggles_and_closes() {
        let mut s = select(vec!["Apple", "Banana"]);
        s.show();
        press(&mut s, Key::ArrowDown);
        press_with(&mut s, Key::ArrowUp, Modifiers::ALT);
        assert_eq!(s.value(), &["Apple"]);
        assert_eq!(s.overlay_state(), OverlayState::Closing);
    }

    #[test]
    fn escape_restores_focus_after_tick() {
        let mut s = select(vec!["Apple"]);
        s.show();
        s.tick(0);
        s.take_effects();
        press(&mut s, Key::Escape);
        assert!(s.take_effects().is_empty());
        s.tick(0);
        assert_eq!(s.overlay_state(), OverlayState::Closed);
        assert_eq!(s.take_effects(), vec![Effect::Focus(FocusTarget::Trigger)]);
    }

    #[test]
    fn select_all_shortcut() {
        let mut s = select(vec!["Apple", "Banana"]);
        press_with(&mut s, Key::Character('a'), Modifiers::CTRL);
        assert_eq!(s.value(), &["Apple", "Banana"]);
        assert!(s.all_selected());
        // Not a type-ahead key.
        assert_eq!(s.type_ahead(), "");
    }

    #[test]
    fn type_ahead_searches_from_the_cursor() {
        let mut s = select(vec!["Blueberry", "Apple", "Banana", "Apricot"]);
        s.on_key_down(KeyEvent::new(Key::Character('b')), 0);
        assert!(s.is_overlay_visible());
        assert_eq!(s.cursor(), Some(0));

        // "ba" narrows to Banana.
        s.on_key_down(KeyEvent::new(Key::Character('a')), 100);
        assert_eq!(s.cursor(), Some(2));
        // A match keeps the buffer; only the deadline clears it.
        assert_eq!(s.type_ahead(), "ba");

        // After the timeout a fresh "a" matches at or after the cursor, then wraps.
        s.tick(700);
        assert_eq!(s.type_ahead(), "");
        s.on_key_down(KeyEvent::new(Key::Character('a')), 700);
        assert_eq!(s.cursor(), Some(3));

        // No match: the cursor stays.
        s.on_key_down(KeyEvent::new(Key::Character('z')), 800);
        assert_eq!(s.cursor(), Some(3));
    }

    #[test]
    fn tab_enters_the_trap_or_commits() {
        let mut s = select(vec!["Apple", "Banana"]);
        s.show();
        press(&mut s, Key::ArrowDown);
        s.set_overlay_focusables(vec![
            FocusEntry {
                id: 7,
                rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                order: None,
                enabled: true,
            },
            FocusEntry {
                id: 9,
                rect: Rect::new(0.0, 20.0, 10.0, 30.0),
                order: None,
                enabled: true,
            },
        ]);
        press_with(&mut s, Key::Tab, Modifiers::SHIFT);
        assert_eq!(s.take_effects().last(), Some(&Effect::Focus(FocusTarget::Overlay(9))));

        s.on_sentinel_focus(Sentinel::Trailing, FocusOrigin::Inside);
        assert_eq!(s.take_effects(), vec![Effect::Focus(FocusTarget::Overlay(7))]);

        s.set_overlay_focusables(Vec::new());
        press(&mut s, Key::Tab);
        assert_eq!(s.value(), &["Apple"]);
        assert!(!s.is_overlay_visible());
    }

    #[test]
    fn filter_keys_unset_the_cursor() {
        let mut s = select(vec!["Apple", "Banana"]);
        s.show();
        s.on_filter_key_down(KeyEvent::new(Key::ArrowDown));
        assert_eq!(s.cursor(), Some(0));
        s.on_filter_key_down(KeyEvent::new(Key::ArrowRight));
        assert_eq!(s.cursor(), None);

        s.on_filter_key_down(KeyEvent::new(Key::ArrowDown));
        s.on_filter_key_down(KeyEvent::new(Key::Home).with_modifiers(Modifiers::SHIFT));
        assert_eq!(s.cursor(), Some(0));
        s.on_filter_key_down(KeyEvent::new(Key::End));
        assert_eq!(s.cursor(), None);

        // Alt+Up is plain Up in the filter.
        s.on_filter_key_down(KeyEvent::new(Key::ArrowUp).with_modifiers(Modifiers::ALT));
        assert!(s.value().is_empty());
        assert_eq!(s.cursor(), Some(1));
    }

    #[test]
    fn disabled_ignores_keys() {
        let mut s: Select = MultiSelect::new(
            Identity,
            MultiSelectConfig::default().with_disabled(true),
            OverlayManager::shared(),
        )
        .unwrap()
        .with_options(Arc::new(OptionSource::flat(vec!["Apple"])));
        press(&mut s, Key::ArrowDown);
        assert!(!s.is_overlay_visible());
    }
}
