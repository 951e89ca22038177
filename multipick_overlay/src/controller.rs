// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Show/hide sequencing for one widget's overlay.

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::{
    Listeners, OverlayEvent, OverlayId, OverlayState, Placement, SharedOverlayManager,
    place_overlay,
};

/// Events produced by one lifecycle call.
pub type OverlayEvents = SmallVec<[OverlayEvent; 4]>;

/// Every listener kind an open overlay binds.
pub const ALL_LISTENERS: Listeners = Listeners::all();

/// Drives one overlay through `Closed -> Opening -> Open -> Closing -> Closed`.
///
/// All transitions are synchronous. The two deferred steps of the cycle are
/// run by [`tick`](Self::tick), which the host calls once after dispatching the
/// event that caused the transition:
///
/// - `Opening -> Open` binds the dismissal listeners and emits
///   [`OverlayEvent::Show`].
/// - `Closing -> Closed` releases the layer, emits [`OverlayEvent::Hide`] and,
///   if requested, [`OverlayEvent::RestoreFocus`]. Deferring the focus step keeps
///   it from racing the click that caused the close.
///
/// Dropping the controller releases its layer and listeners.
#[derive(Debug)]
pub struct OverlayController {
    manager: SharedOverlayManager,
    id: OverlayId,
    state: OverlayState,
    trigger: Rect,
    placement: Option<Placement>,
    restore_focus: bool,
}

impl OverlayController {
    /// Creates a closed controller registered with `manager`.
    pub fn new(manager: SharedOverlayManager) -> Self {
        let id = manager.borrow_mut().allocate();
        Self {
            manager,
            id,
            state: OverlayState::Closed,
            trigger: Rect::ZERO,
            placement: None,
            restore_focus: false,
        }
    }

    /// This overlay's owner id in the manager.
    #[must_use]
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Returns `true` while the overlay is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Where the overlay was last placed; `None` while closed.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// The overlay's z-index while it holds a layer.
    #[must_use]
    pub fn z_index(&self) -> Option<i32> {
        self.manager.borrow().z_index(self.id)
    }

    /// Listeners currently bound on this overlay's behalf.
    #[must_use]
    pub fn listeners(&self) -> Listeners {
        self.manager.borrow().bound(self.id)
    }

    /// Starts showing the overlay next to `trigger`.
    ///
    /// A no-op while `Opening` or `Open`. While `Closing`, the pending close is
    /// cancelled and the overlay is `Open` again immediately.
    pub fn show(&mut self, trigger: Rect, size: Size, viewport: Rect) -> OverlayEvents {
        let mut events = OverlayEvents::new();
        match self.state {
            OverlayState::Opening | OverlayState::Open => {}
            OverlayState::Closed => {
                events.push(OverlayEvent::BeforeShow);
                self.manager.borrow_mut().open_layer(self.id);
                self.place(trigger, size, viewport);
                self.state = OverlayState::Opening;
                tracing::debug!(id = self.id.0, "overlay opening");
            }
            OverlayState::Closing => {
                events.push(OverlayEvent::BeforeShow);
                self.place(trigger, size, viewport);
                self.restore_focus = false;
                self.manager.borrow_mut().bind(self.id, ALL_LISTENERS);
                self.state = OverlayState::Open;
                events.push(OverlayEvent::Show);
                tracing::debug!(id = self.id.0, "overlay close cancelled");
            }
        }
        events
    }

    /// Starts hiding the overlay, unbinding its listeners.
    ///
    /// `restore_focus` asks for focus to go back to the trigger once the
    /// deferred step runs. A no-op unless `Opening` or `Open`.
    pub fn hide(&mut self, restore_focus: bool) -> OverlayEvents {
        let mut events = OverlayEvents::new();
        if !self.state.is_visible() {
            return events;
        }
        events.push(OverlayEvent::BeforeHide);
        self.manager.borrow_mut().unbind(self.id, ALL_LISTENERS);
        self.restore_focus = restore_focus;
        self.state = OverlayState::Closing;
        tracing::debug!(id = self.id.0, restore_focus, "overlay closing");
        events
    }

    /// Runs the pending deferred step, if any.
    pub fn tick(&mut self) -> OverlayEvents {
        let mut events = OverlayEvents::new();
        match self.state {
            OverlayState::Opening => {
                self.manager.borrow_mut().bind(self.id, ALL_LISTENERS);
                self.state = OverlayState::Open;
                events.push(OverlayEvent::Show);
                tracing::debug!(id = self.id.0, "overlay open");
            }
            OverlayState::Closing => {
                self.manager.borrow_mut().close_layer(self.id);
                self.placement = None;
                self.state = OverlayState::Closed;
                events.push(OverlayEvent::Hide);
                if core::mem::take(&mut self.restore_focus) {
                    events.push(OverlayEvent::RestoreFocus);
                }
                tracing::debug!(id = self.id.0, "overlay closed");
            }
            OverlayState::Closed | OverlayState::Open => {}
        }
        events
    }

    /// Re-runs placement, for example after the filter changed the overlay size.
    pub fn realign(&mut self, trigger: Rect, size: Size, viewport: Rect) {
        if self.state.is_visible() {
            self.place(trigger, size, viewport);
        }
    }

    /// Pointer went down at `point`, in viewport coordinates.
    ///
    /// Presses inside this overlay, or inside an overlay stacked above it, keep
    /// it open. A press on the trigger is left to the host. Anything else hides
    /// the overlay without restoring focus, if the outside-click listener is
    /// bound.
    pub fn on_pointer_down(&mut self, point: Point) -> OverlayEvents {
        if self.placement.is_some_and(|p| p.rect.contains(point))
            || self.trigger.contains(point)
            || !self.listening(Listeners::OUTSIDE_CLICK)
            || self.stacked_above(point)
        {
            return OverlayEvents::new();
        }
        tracing::debug!(id = self.id.0, "outside click");
        self.hide(false)
    }

    /// A container of the trigger scrolled.
    pub fn on_scroll(&mut self) -> OverlayEvents {
        if !self.listening(Listeners::SCROLL) {
            return OverlayEvents::new();
        }
        self.hide(false)
    }

    /// The window was resized.
    ///
    /// Touch environments resize when the on-screen keyboard appears, so there
    /// the overlay stays open.
    pub fn on_resize(&mut self, touch: bool) -> OverlayEvents {
        if touch || !self.listening(Listeners::RESIZE) {
            return OverlayEvents::new();
        }
        self.hide(false)
    }

    fn stacked_above(&self, point: Point) -> bool {
        let manager = self.manager.borrow();
        let Some(hit) = manager.layer_at(point) else {
            return false;
        };
        hit != self.id && manager.z_index(hit) > manager.z_index(self.id)
    }

    fn listening(&self, kind: Listeners) -> bool {
        self.state == OverlayState::Open && self.listeners().contains(kind)
    }

    fn place(&mut self, trigger: Rect, size: Size, viewport: Rect) {
        let placement = place_overlay(trigger, size, viewport);
        self.trigger = trigger;
        self.placement = Some(placement);
        self.manager.borrow_mut().set_bounds(self.id, placement.rect);
    }
}

impl Drop for OverlayController {
    fn drop(&mut self) {
        if let Ok(mut manager) = self.manager.try_borrow_mut() {
            manager.close_layer(self.id);
        }
    }
}
