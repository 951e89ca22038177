// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The option list's rendered window.

use crate::{EstimatedExtentModel, ExtentModel, ScrollAlign, VirtualList};

/// The contiguous run of visible-list indices currently rendered.
///
/// Purely a rendering hint: cursor and selection indices always address the
/// full visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VirtualWindow {
    /// First rendered index.
    pub start: usize,
    /// Number of rendered rows.
    pub count: usize,
}

impl VirtualWindow {
    /// Returns `true` if `index` is rendered.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.start + self.count
    }
}

/// What the host has to do after a scroll request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    /// Nothing to scroll: the list is empty.
    Idle,
    /// Every row is rendered; the host brings the row's element into view itself.
    IntoView(usize),
    /// The virtual list moved to a new offset; the host re-renders the window.
    Scrolled {
        /// New scroll offset in logical pixels.
        offset: f64,
    },
}

#[derive(Debug)]
enum Mode {
    Direct { len: usize },
    Virtual(VirtualList<EstimatedExtentModel<f64>>),
}

/// Maps visible-list indices to the rendered window.
///
/// With virtualization disabled every row is rendered and the window is
/// `{0, len}`; scroll requests are forwarded to the host as
/// [`ScrollOutcome::IntoView`].
#[derive(Debug)]
pub struct ListWindow {
    mode: Mode,
}

impl ListWindow {
    /// A window that renders every row.
    #[must_use]
    pub fn direct(len: usize) -> Self {
        Self {
            mode: Mode::Direct { len },
        }
    }

    /// A virtualized window over `len` rows of roughly `item_size` each.
    #[must_use]
    pub fn virtualized(len: usize, item_size: f64, viewport_extent: f64, overscan: f64) -> Self {
        let model = EstimatedExtentModel::new(len, item_size);
        Self {
            mode: Mode::Virtual(VirtualList::new(model, viewport_extent, overscan)),
        }
    }

    /// Returns `true` if rows outside the window are skipped.
    #[must_use]
    pub const fn is_virtualized(&self) -> bool {
        matches!(self.mode, Mode::Virtual(_))
    }

    /// Number of rows in the visible list.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.mode {
            Mode::Direct { len } => *len,
            Mode::Virtual(list) => list.model().len(),
        }
    }

    /// Returns `true` when the visible list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Follows a recomputed visible list.
    pub fn set_len(&mut self, len: usize) {
        match &mut self.mode {
            Mode::Direct { len: current } => *current = len,
            Mode::Virtual(list) => {
                list.model_mut().set_len(len);
                list.clamp_scroll_to_content();
            }
        }
    }

    /// Records a rendered row's measured height.
    ///
    /// The visible list owns the row count, so measurements for rows past the
    /// end (stale reports from before a filter change) are dropped.
    pub fn measure(&mut self, index: usize, extent: f64) {
        if index >= self.len() {
            tracing::trace!(index, len = self.len(), "stale row measurement dropped");
            return;
        }
        if let Mode::Virtual(list) = &mut self.mode {
            list.model_mut().measure(index, extent);
        }
    }

    /// The host scrolled the list container.
    pub fn on_scroll(&mut self, offset: f64) {
        if let Mode::Virtual(list) = &mut self.mode {
            list.set_scroll_offset(offset);
        }
    }

    /// Current scroll offset; always zero for direct windows.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        match &self.mode {
            Mode::Direct { .. } => 0.0,
            Mode::Virtual(list) => list.scroll_offset(),
        }
    }

    /// The rows to render right now.
    #[must_use]
    pub fn window(&mut self) -> VirtualWindow {
        match &mut self.mode {
            Mode::Direct { len } => VirtualWindow {
                start: 0,
                count: *len,
            },
            Mode::Virtual(list) => {
                let strip = list.visible_strip();
                VirtualWindow {
                    start: strip.start,
                    count: strip.len(),
                }
            }
        }
    }

    /// Brings row `index` into view with the least movement.
    pub fn scroll_to_index(&mut self, index: usize) -> ScrollOutcome {
        let len = self.len();
        if len == 0 {
            return ScrollOutcome::Idle;
        }
        let index = index.min(len - 1);
        match &mut self.mode {
            Mode::Direct { .. } => ScrollOutcome::IntoView(index),
            Mode::Virtual(list) => {
                list.scroll_to_index(index, ScrollAlign::Nearest);
                tracing::trace!(index, offset = list.scroll_offset(), "virtual list scrolled");
                ScrollOutcome::Scrolled {
                    offset: list.scroll_offset(),
                }
            }
        }
    }

    /// Jumps back to the first row, as after a filter change or on close.
    pub fn reset(&mut self) {
        if let Mode::Virtual(list) = &mut self.mode {
            list.set_scroll_offset(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ListWindow, ScrollOutcome, VirtualWindow};

    #[test]
    fn direct_window_covers_everything() {
        let mut window = ListWindow::direct(3);
        assert!(!window.is_virtualized());
        assert_eq!(window.window(), VirtualWindow { start: 0, count: 3 });
        assert_eq!(window.scroll_to_index(7), ScrollOutcome::IntoView(2));
        window.set_len(0);
        assert_eq!(window.scroll_to_index(0), ScrollOutcome::Idle);
    }

    #[test]
    fn virtual_window_tracks_scroll_requests() {
        // 1000 rows of 20px in a 100px overlay.
        let mut window = ListWindow::virtualized(1000, 20.0, 100.0, 0.0);
        assert_eq!(window.window(), VirtualWindow { start: 0, count: 5 });

        assert_eq!(
            window.scroll_to_index(999),
            ScrollOutcome::Scrolled { offset: 19_900.0 }
        );
        let rendered = window.window();
        assert!(rendered.contains(999), "last row should be rendered");
        assert!(!rendered.contains(0), "first row should be culled");

        window.reset();
        assert_eq!(window.window().start, 0);
    }

    #[test]
    fn stale_measurements_never_add_rows() {
        let mut window = ListWindow::virtualized(3, 20.0, 50.0, 0.0);
        window.measure(9, 20.0);
        window.measure(usize::MAX, 20.0);
        assert_eq!(window.len(), 3);
        assert_eq!(window.window(), VirtualWindow { start: 0, count: 3 });

        // In-range rows still refine the estimate: a tall first row fills the viewport.
        window.measure(0, 60.0);
        assert_eq!(window.window(), VirtualWindow { start: 0, count: 1 });
    }

    #[test]
    fn shrinking_clamps_scroll() {
        let mut window = ListWindow::virtualized(100, 10.0, 50.0, 0.0);
        window.on_scroll(800.0);
        window.set_len(10);
        assert_eq!(window.scroll_offset(), 50.0);
        assert_eq!(window.window(), VirtualWindow { start: 5, count: 5 });
    }
}
