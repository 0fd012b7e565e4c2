// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchy queries used by the container-depth rule.
//!
//! ## Overview
//!
//! Depth only means something when one hit's container contains, or is
//! contained by, the other's. The [comparer](crate::comparer) asks an
//! [`Ancestry`] implementation that question and nothing else.
//!
//! Implementations must:
//! - be symmetric in their two arguments,
//! - answer `true` for a live container compared with itself,
//! - answer `false` for stale or unknown handles instead of panicking.
//!
//! [`ParentChain`] builds such a query from a [`ParentLookup`], which is the
//! cheapest thing most scene graphs can provide.

/// Answers whether two containers are in an ancestor/descendant relationship.
pub trait Ancestry<C> {
    /// Returns true if `a` is an ancestor of `b`, a descendant of `b`, or `b` itself.
    fn is_parent_or_child_of(&self, a: &C, b: &C) -> bool;
}

impl<C, T: Ancestry<C> + ?Sized> Ancestry<C> for &T {
    #[inline]
    fn is_parent_or_child_of(&self, a: &C, b: &C) -> bool {
        (**self).is_parent_or_child_of(a, b)
    }
}

/// Treats every pair of containers as unrelated.
///
/// Suitable when all candidates are physics hits, or when depth should never
/// decide. With this provider the container-depth rule is always inert.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoAncestry;

impl<C> Ancestry<C> for NoAncestry {
    #[inline]
    fn is_parent_or_child_of(&self, _a: &C, _b: &C) -> bool {
        false
    }
}

/// Look up the parent of a container.
pub trait ParentLookup<C> {
    /// Returns the parent of `node`, or `None` if `node` is a root or unknown.
    fn parent_of(&self, node: &C) -> Option<C>;

    /// Returns false for stale or invalid handles.
    fn is_live(&self, _node: &C) -> bool {
        true
    }
}

/// [`Ancestry`] derived from parent links.
///
/// Walks from each container toward the root looking for the other. Stale
/// handles are unrelated to everything, themselves included. Walks stop after
/// `max_depth` steps, so a cyclic hierarchy answers `false` rather than
/// spinning.
///
/// ```
/// use understory_hit_rank::ancestry::{Ancestry, ParentChain, ParentLookup};
///
/// struct Panels;
/// impl ParentLookup<u32> for Panels {
///     fn parent_of(&self, node: &u32) -> Option<u32> {
///         match node {
///             3 => Some(2),
///             2 => Some(1),
///             _ => None,
///         }
///     }
/// }
///
/// let chain = ParentChain::new(Panels);
/// assert!(chain.is_parent_or_child_of(&1, &3));
/// assert!(chain.is_parent_or_child_of(&3, &1));
/// assert!(!chain.is_parent_or_child_of(&3, &7));
/// ```
#[derive(Clone, Debug)]
pub struct ParentChain<P> {
    lookup: P,
    max_depth: usize,
}

impl<P> ParentChain<P> {
    /// Default bound on parent walks.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Wrap a parent lookup with the default walk bound.
    pub fn new(lookup: P) -> Self {
        Self {
            lookup,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Wrap a parent lookup, stopping walks after `max_depth` parent steps.
    pub fn with_max_depth(lookup: P, max_depth: usize) -> Self {
        Self { lookup, max_depth }
    }

    /// The wrapped lookup.
    pub fn lookup(&self) -> &P {
        &self.lookup
    }

    /// Maximum number of parent steps per walk.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn is_ancestor<C: PartialEq>(&self, ancestor: &C, node: &C) -> bool
    where
        P: ParentLookup<C>,
    {
        let mut cur = self.lookup.parent_of(node);
        let mut steps = 0;
        while let Some(p) = cur {
            if &p == ancestor {
                return true;
            }
            steps += 1;
            if steps >= self.max_depth {
                return false;
            }
            cur = self.lookup.parent_of(&p);
        }
        false
    }
}

impl<C: PartialEq, P: ParentLookup<C>> Ancestry<C> for ParentChain<P> {
    fn is_parent_or_child_of(&self, a: &C, b: &C) -> bool {
        if !self.lookup.is_live(a) || !self.lookup.is_live(b) {
            return false;
        }
        a == b || self.is_ancestor(a, b) || self.is_ancestor(b, a)
    }
}
