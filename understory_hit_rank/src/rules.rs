// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in pairwise ranking rules.
//!
//! ## Overview
//!
//! Each rule compares two hits on one criterion and returns
//! [`Ordering::Less`] when `left` should rank first, [`Ordering::Greater`]
//! when `right` should, and [`Ordering::Equal`] when the criterion does not
//! separate them or does not apply.
//!
//! [`default_rules`] returns them in the order the
//! [comparer](crate::comparer::HitComparer) evaluates by default:
//!
//! 1. [`by_priority_class`]: lower class first; inert if either class is unset.
//! 2. [`by_sorting_layer`]: higher layer first.
//! 3. [`by_sorting_order`]: higher order first.
//! 4. [`by_container_depth`]: deeper container first, only for related containers.
//! 5. [`by_distance`]: nearer hit first.
//!
//! Custom chains are plain slices of [`Rule`], so any function with the same
//! signature can be mixed in.

use core::cmp::Ordering;

use crate::ancestry::Ancestry;
use crate::types::ComparableHit;

/// A single pairwise rule.
///
/// The third argument is the comparer's [`Ancestry`] provider; most rules ignore it.
pub type Rule<C, M, A> = fn(&ComparableHit<C, M>, &ComparableHit<C, M>, &A) -> Ordering;

/// The default chain: priority class, sorting layer, sorting order, container
/// depth, distance.
pub fn default_rules<C, M, A: Ancestry<C>>() -> [Rule<C, M, A>; 5] {
    [
        by_priority_class,
        by_sorting_layer,
        by_sorting_order,
        by_container_depth,
        by_distance,
    ]
}

/// Lower priority class ranks first. Unset on either side: `Equal`.
pub fn by_priority_class<C, M, A: ?Sized>(
    left: &ComparableHit<C, M>,
    right: &ComparableHit<C, M>,
    _ancestry: &A,
) -> Ordering {
    match (left.priority, right.priority) {
        (Some(l), Some(r)) => l.cmp(&r),
        _ => Ordering::Equal,
    }
}

/// Higher sorting layer ranks first.
pub fn by_sorting_layer<C, M, A: ?Sized>(
    left: &ComparableHit<C, M>,
    right: &ComparableHit<C, M>,
    _ancestry: &A,
) -> Ordering {
    right.sorting_layer.cmp(&left.sorting_layer)
}

/// Higher sorting order ranks first.
pub fn by_sorting_order<C, M, A: ?Sized>(
    left: &ComparableHit<C, M>,
    right: &ComparableHit<C, M>,
    _ancestry: &A,
) -> Ordering {
    right.sorting_order.cmp(&left.sorting_order)
}

/// Deeper container ranks first, when one container contains the other.
///
/// Unrelated (or stale) containers give `Equal` so the next rule decides.
pub fn by_container_depth<C, M, A: Ancestry<C> + ?Sized>(
    left: &ComparableHit<C, M>,
    right: &ComparableHit<C, M>,
    ancestry: &A,
) -> Ordering {
    if ancestry.is_parent_or_child_of(&left.container, &right.container) {
        right.depth.cmp(&left.depth)
    } else {
        Ordering::Equal
    }
}

/// Nearer hit ranks first. Incomparable distances (NaN) give `Equal`.
pub fn by_distance<C, M, A: ?Sized>(
    left: &ComparableHit<C, M>,
    right: &ComparableHit<C, M>,
    _ancestry: &A,
) -> Ordering {
    left.distance
        .partial_cmp(&right.distance)
        .unwrap_or(Ordering::Equal)
}
