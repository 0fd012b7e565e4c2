// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for ranking: hit records, layer masks, and priority masks.
//!
//! ## Overview
//!
//! A [`ComparableHit`] is what a caster hands to the [comparer](crate::comparer).
//! It carries everything the [rules](crate::rules) look at plus an opaque
//! `container` handle for the [ancestry](crate::ancestry) query and a `meta`
//! payload that ranking never reads.
//!
//! [`PriorityMasks`] turn an ordered "prefer these layers" configuration into
//! the priority class consulted first by the default chain.

use alloc::vec::Vec;

/// A candidate hit from a UI or physics caster.
///
/// Fields are public so casters can build records with struct literals; the
/// `with_*` helpers cover the common cases.
///
/// ```
/// use understory_hit_rank::types::ComparableHit;
///
/// // A physics hit: no priority class, no UI stacking data.
/// let world = ComparableHit::new(7_u32, 2.5);
/// assert_eq!(world.priority, None);
/// assert_eq!((world.sorting_layer, world.sorting_order), (0, 0));
///
/// // A UI hit on layer 2, drawn at order 5, inside a panel nested twice.
/// let ui = ComparableHit::new(3_u32, 0.8)
///     .with_sorting(2, 5)
///     .with_depth(2)
///     .with_meta("button");
/// assert_eq!(ui.meta, "button");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ComparableHit<C, M = ()> {
    /// Caller-assigned priority class; lower ranks first.
    ///
    /// `None` means "not applicable" and makes the priority rule inert for
    /// any pair this hit takes part in.
    pub priority: Option<u32>,
    /// UI stacking layer; higher ranks first. Physics hits keep this constant.
    pub sorting_layer: i32,
    /// UI draw order within a layer; higher ranks first.
    pub sorting_order: i32,
    /// Handle of the originating container in the external hierarchy.
    pub container: C,
    /// Nesting depth of the originating container; higher ranks first, but
    /// only between related containers.
    pub depth: i32,
    /// Distance along the ray from its origin to the hit point; lower ranks first.
    ///
    /// Expected to be finite. NaN never decides an ordering.
    pub distance: f32,
    /// Payload carried alongside the hit (for example the hit object or a
    /// world position). Not consulted by ranking.
    pub meta: M,
}

impl<C> ComparableHit<C, ()> {
    /// Create a hit with no priority class and zeroed UI stacking data.
    pub fn new(container: C, distance: f32) -> Self {
        Self {
            priority: None,
            sorting_layer: 0,
            sorting_order: 0,
            container,
            depth: 0,
            distance,
            meta: (),
        }
    }
}

impl<C, M> ComparableHit<C, M> {
    /// Set the priority class.
    #[must_use]
    pub fn with_priority(mut self, priority: Option<u32>) -> Self {
        self.priority = priority;
        self
    }

    /// Set the UI sorting layer and sorting order.
    #[must_use]
    pub fn with_sorting(mut self, layer: i32, order: i32) -> Self {
        self.sorting_layer = layer;
        self.sorting_order = order;
        self
    }

    /// Set the container depth.
    #[must_use]
    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    /// Replace the payload, possibly changing its type.
    pub fn with_meta<N>(self, meta: N) -> ComparableHit<C, N> {
        ComparableHit {
            priority: self.priority,
            sorting_layer: self.sorting_layer,
            sorting_order: self.sorting_order,
            container: self.container,
            depth: self.depth,
            distance: self.distance,
            meta,
        }
    }
}

/// Convert a raw priority index that uses `-1` (or any negative value) for
/// "not applicable" into an explicit class.
///
/// ```
/// use understory_hit_rank::types::class_from_raw;
///
/// assert_eq!(class_from_raw(-1), None);
/// assert_eq!(class_from_raw(0), Some(0));
/// assert_eq!(class_from_raw(3), Some(3));
/// ```
pub fn class_from_raw(raw: i32) -> Option<u32> {
    u32::try_from(raw).ok()
}

bitflags::bitflags! {
    /// A set of object layers (0..32) a caster can test hits against.
    ///
    /// Only a few well-known layers are named; use [`LayerMask::layer`] for the rest.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LayerMask: u32 {
        /// Layer 0, where objects land unless told otherwise.
        const DEFAULT        = 1 << 0;
        /// Layer 1.
        const TRANSPARENT_FX = 1 << 1;
        /// Layer 2; usually excluded from pointer casts.
        const IGNORE_RAYCAST = 1 << 2;
        /// Layer 4.
        const WATER          = 1 << 4;
        /// Layer 5, used by UI surfaces.
        const UI             = 1 << 5;
    }
}

impl LayerMask {
    /// Number of addressable layers.
    pub const LAYER_COUNT: u8 = 32;

    /// Mask containing only `layer`. Out-of-range layers give an empty mask.
    pub const fn layer(layer: u8) -> Self {
        if layer < Self::LAYER_COUNT {
            Self::from_bits_retain(1 << layer)
        } else {
            Self::empty()
        }
    }

    /// Mask containing every layer, named or not.
    pub const fn everything() -> Self {
        Self::from_bits_retain(u32::MAX)
    }

    /// Returns true if `layer` is part of this mask.
    pub const fn contains_layer(self, layer: u8) -> bool {
        layer < Self::LAYER_COUNT && self.bits() & (1 << layer) != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::everything()
    }
}

/// Ordered layer masks used to bucket hits into priority classes.
///
/// The class of a layer is the index of the first mask that contains it, so
/// earlier masks win under [`by_priority_class`](crate::rules::by_priority_class).
/// Layers no mask mentions get no class, and the priority rule stays out of
/// their way.
///
/// ```
/// use understory_hit_rank::types::{LayerMask, PriorityMasks};
///
/// let masks = PriorityMasks::new([LayerMask::UI, LayerMask::DEFAULT | LayerMask::WATER]);
/// assert_eq!(masks.class_of(5), Some(0));
/// assert_eq!(masks.class_of(4), Some(1));
/// assert_eq!(masks.class_of(9), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriorityMasks {
    masks: Vec<LayerMask>,
}

impl PriorityMasks {
    /// Create from masks in priority order (highest priority first).
    pub fn new(masks: impl IntoIterator<Item = LayerMask>) -> Self {
        Self {
            masks: masks.into_iter().collect(),
        }
    }

    /// The masks, highest priority first.
    pub fn masks(&self) -> &[LayerMask] {
        &self.masks
    }

    /// Priority class for an object on `layer`, if any mask contains it.
    pub fn class_of(&self, layer: u8) -> Option<u32> {
        let idx = self.masks.iter().position(|m| m.contains_layer(layer))?;
        u32::try_from(idx).ok()
    }

    /// Priority class for a hit whose object sits on `layer`, applied in place.
    pub fn assign<C, M>(&self, hit: &mut ComparableHit<C, M>, layer: u8) {
        hit.priority = self.class_of(layer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_hit_is_physics_shaped() {
        let h = ComparableHit::new('a', 1.5);
        assert_eq!(h.priority, None);
        assert_eq!(h.sorting_layer, 0);
        assert_eq!(h.sorting_order, 0);
        assert_eq!(h.depth, 0);
        assert_eq!(h.distance, 1.5);
        assert_eq!(h.container, 'a');
    }

    #[test]
    fn builders_keep_other_fields() {
        let h = ComparableHit::new(1_u8, 4.0)
            .with_priority(Some(2))
            .with_sorting(3, -1)
            .with_depth(6)
            .with_meta(99_u64);
        assert_eq!(h.priority, Some(2));
        assert_eq!((h.sorting_layer, h.sorting_order), (3, -1));
        assert_eq!(h.depth, 6);
        assert_eq!(h.distance, 4.0);
        assert_eq!(h.container, 1);
        assert_eq!(h.meta, 99);
    }

    #[test]
    fn raw_sentinel_maps_to_none() {
        assert_eq!(class_from_raw(-1), None);
        assert_eq!(class_from_raw(i32::MIN), None);
        assert_eq!(class_from_raw(0), Some(0));
        assert_eq!(class_from_raw(i32::MAX), Some(i32::MAX as u32));
    }

    #[test]
    fn layer_mask_single_layers() {
        assert_eq!(LayerMask::layer(0), LayerMask::DEFAULT);
        assert_eq!(LayerMask::layer(5), LayerMask::UI);
        assert!(LayerMask::layer(31).contains_layer(31));
        assert!(LayerMask::layer(32).is_empty());
        assert!(!LayerMask::UI.contains_layer(32));
    }

    #[test]
    fn layer_mask_everything_covers_unnamed_layers() {
        let all = LayerMask::everything();
        assert!((0..32).all(|l| all.contains_layer(l)));
        assert_eq!(LayerMask::default(), all);
    }

    #[test]
    fn priority_masks_first_match_wins() {
        let masks = PriorityMasks::new([
            LayerMask::UI,
            LayerMask::UI | LayerMask::DEFAULT,
            LayerMask::everything(),
        ]);
        assert_eq!(masks.class_of(5), Some(0));
        assert_eq!(masks.class_of(0), Some(1));
        assert_eq!(masks.class_of(17), Some(2));
        assert_eq!(masks.masks().len(), 3);
    }

    #[test]
    fn priority_masks_empty_assigns_none() {
        let masks = PriorityMasks::default();
        let mut h = ComparableHit::new((), 1.0).with_priority(Some(4));
        masks.assign(&mut h, 5);
        assert_eq!(h.priority, None);
    }

    #[test]
    fn priority_masks_assign_in_place() {
        let masks = PriorityMasks::new([LayerMask::WATER, LayerMask::UI]);
        let mut h = ComparableHit::new((), 1.0);
        masks.assign(&mut h, 5);
        assert_eq!(h.priority, Some(1));
    }
}
