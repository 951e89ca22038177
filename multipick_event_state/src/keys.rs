// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input: keys, modifier state, and the shift-range gesture.
//!
//! Keys are identified by their physical role (`ArrowDown`, `Enter`, ...) rather
//! than by layout-dependent text, except for [`Key::Character`], which carries
//! the produced character for type-ahead and shortcuts.
//!
//! ```
//! use multipick_event_state::keys::{Key, KeyEvent, Modifiers};
//!
//! let select_all = KeyEvent::new(Key::Character('a')).with_modifiers(Modifiers::CTRL);
//! assert!(select_all.modifiers.platform());
//! assert!(!select_all.is_printable());
//!
//! assert!(KeyEvent::new(Key::Character('b')).is_printable());
//! ```

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1 << 0;
        /// Control.
        const CTRL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Windows.
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Returns `true` if the platform shortcut modifier (Ctrl or Meta) is held.
    pub fn platform(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }

    /// Returns `true` if Shift is held.
    pub fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns `true` if Alt is held.
    pub fn alt(self) -> bool {
        self.contains(Self::ALT)
    }
}

/// A key, by role.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Down arrow.
    ArrowDown,
    /// Up arrow.
    ArrowUp,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Main Enter / Return.
    Enter,
    /// Keypad Enter.
    NumpadEnter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Either Shift key on its own.
    Shift,
    /// A key that produced a character.
    Character(char),
    /// Anything else.
    Other,
}

/// A key press or release.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key event without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// The same event with `modifiers` held.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The character for type-ahead, if this is an unmodified printable key.
    ///
    /// Shift is allowed since it only changes which character is produced.
    pub fn printable_char(&self) -> Option<char> {
        match self.key {
            Key::Character(c)
                if !c.is_control()
                    && !self.modifiers.platform()
                    && !self.modifiers.alt() =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    /// Returns `true` if this key should feed the type-ahead buffer.
    pub fn is_printable(&self) -> bool {
        self.printable_char().is_some()
    }

    /// Returns `true` for Enter, keypad Enter, and Space.
    pub fn is_activation(&self) -> bool {
        matches!(self.key, Key::Enter | Key::NumpadEnter | Key::Space)
    }
}

/// The start of a Shift+navigation range gesture.
///
/// Pressing Shift records the cursor position; moves made while Shift is held
/// select from there. Releasing Shift ends the gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeAnchor {
    anchor: Option<usize>,
}

impl RangeAnchor {
    /// No gesture in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift went down with the cursor at `cursor`.
    pub fn begin(&mut self, cursor: Option<usize>) {
        self.anchor = cursor;
    }

    /// Shift came up.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Where the gesture started, if it did and the cursor was set.
    pub fn get(&self) -> Option<usize> {
        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_modifier_is_ctrl_or_meta() {
        assert!(Modifiers::CTRL.platform());
        assert!(Modifiers::META.platform());
        assert!(!(Modifiers::SHIFT | Modifiers::ALT).platform());
    }

    #[test]
    fn printable_keys() {
        // Shifted letters are still typed text
        let upper = KeyEvent::new(Key::Character('B')).with_modifiers(Modifiers::SHIFT);
        assert_eq!(upper.printable_char(), Some('B'));

        // Shortcuts and control characters are not
        let ctrl_a = KeyEvent::new(Key::Character('a')).with_modifiers(Modifiers::CTRL);
        assert!(!ctrl_a.is_printable());
        assert!(!KeyEvent::new(Key::Character('\u{8}')).is_printable());
        assert!(!KeyEvent::new(Key::Enter).is_printable());
    }

    #[test]
    fn activation_keys() {
        assert!(KeyEvent::new(Key::Space).is_activation());
        assert!(KeyEvent::new(Key::NumpadEnter).is_activation());
        assert!(!KeyEvent::new(Key::Tab).is_activation());
    }

    #[test]
    fn range_anchor_lifecycle() {
        let mut anchor = RangeAnchor::new();
        assert_eq!(anchor.get(), None);

        anchor.begin(Some(3));
        assert_eq!(anchor.get(), Some(3));

        anchor.end();
        assert_eq!(anchor.get(), None);
    }
}
