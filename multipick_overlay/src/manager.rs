// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay layer service shared by every widget on a surface.

use alloc::rc::Rc;
use core::cell::RefCell;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::Listeners;

/// Default z-index of the first overlay layer.
pub const DEFAULT_BASE_Z_INDEX: i32 = 1000;

/// Handle for one overlay owner (typically one widget instance).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u32);

/// A manager handle shared by all controllers on one surface.
pub type SharedOverlayManager = Rc<RefCell<OverlayManager>>;

#[derive(Clone, Debug)]
struct Layer {
    z_index: i32,
    listeners: Listeners,
    /// Where the overlay was last placed.
    bounds: Option<Rect>,
}

/// Registry of shown overlays: z stacking, bound listeners, placed bounds.
///
/// This replaces ambient global state (a z-index counter on the document, an
/// event bus singleton) with an explicit service that hosts create once and
/// hand to every widget. It enforces that an overlay never holds two bindings
/// of the same listener kind.
#[derive(Debug)]
pub struct OverlayManager {
    base_z_index: i32,
    next_id: u32,
    layers: HashMap<OverlayId, Layer>,
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_Z_INDEX)
    }
}

impl OverlayManager {
    /// Creates a manager whose first layer sits at `base_z_index`.
    #[must_use]
    pub fn new(base_z_index: i32) -> Self {
        Self {
            base_z_index,
            next_id: 0,
            layers: HashMap::new(),
        }
    }

    /// Creates a manager ready to be shared.
    #[must_use]
    pub fn shared() -> SharedOverlayManager {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Hands out a fresh owner id.
    pub fn allocate(&mut self) -> OverlayId {
        let id = OverlayId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Puts `id`'s overlay on top of every other layer and returns its z-index.
    ///
    /// Re-opening an open layer keeps its z-index.
    pub fn open_layer(&mut self, id: OverlayId) -> i32 {
        if let Some(layer) = self.layers.get(&id) {
            return layer.z_index;
        }
        let z_index = self
            .layers
            .values()
            .map(|l| l.z_index)
            .max()
            .map_or(self.base_z_index, |top| top + 1);
        self.layers.insert(
            id,
            Layer {
                z_index,
                listeners: Listeners::empty(),
                bounds: None,
            },
        );
        tracing::debug!(id = id.0, z_index, "overlay layer opened");
        z_index
    }

    /// Removes `id`'s layer, dropping any listeners it still held.
    pub fn close_layer(&mut self, id: OverlayId) {
        if let Some(layer) = self.layers.remove(&id) {
            if !layer.listeners.is_empty() {
                tracing::debug!(id = id.0, listeners = ?layer.listeners, "unbinding on close");
            }
            tracing::debug!(id = id.0, "overlay layer closed");
        }
    }

    /// The z-index of an open layer.
    #[must_use]
    pub fn z_index(&self, id: OverlayId) -> Option<i32> {
        self.layers.get(&id).map(|l| l.z_index)
    }

    /// Number of open layers.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.layers.len()
    }

    /// Binds listeners for an open layer and returns the kinds that were not
    /// already bound.
    ///
    /// Binding an already bound kind is a no-op. Binding for a layer that is not
    /// open is ignored.
    pub fn bind(&mut self, id: OverlayId, listeners: Listeners) -> Listeners {
        let Some(layer) = self.layers.get_mut(&id) else {
            tracing::warn!(id = id.0, "listener bind for an overlay without a layer");
            return Listeners::empty();
        };
        let added = listeners - layer.listeners;
        layer.listeners |= added;
        if !added.is_empty() {
            tracing::debug!(id = id.0, listeners = ?added, "listeners bound");
        }
        added
    }

    /// Unbinds listeners and returns the kinds that were actually bound.
    pub fn unbind(&mut self, id: OverlayId, listeners: Listeners) -> Listeners {
        let Some(layer) = self.layers.get_mut(&id) else {
            return Listeners::empty();
        };
        let removed = layer.listeners & listeners;
        layer.listeners -= removed;
        if !removed.is_empty() {
            tracing::debug!(id = id.0, listeners = ?removed, "listeners unbound");
        }
        removed
    }

    /// Listeners currently bound for `id`.
    #[must_use]
    pub fn bound(&self, id: OverlayId) -> Listeners {
        self.layers
            .get(&id)
            .map_or(Listeners::empty(), |l| l.listeners)
    }

    /// Records where `id`'s overlay was placed.
    pub fn set_bounds(&mut self, id: OverlayId, bounds: Rect) {
        match self.layers.get_mut(&id) {
            Some(layer) => layer.bounds = Some(bounds),
            None => tracing::warn!(id = id.0, "bounds for an overlay without a layer"),
        }
    }

    /// The topmost layer whose overlay contains `point`.
    ///
    /// Overlays are usually attached far from their owners in the element
    /// tree, so owners use this to tell a press inside an overlay stacked over
    /// theirs apart from a genuine outside press.
    #[must_use]
    pub fn layer_at(&self, point: Point) -> Option<OverlayId> {
        self.layers
            .iter()
            .filter(|(_, layer)| layer.bounds.is_some_and(|b| b.contains(point)))
            .max_by_key(|(_, layer)| layer.z_index)
            .map(|(id, _)| *id)
    }
}
