// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Comparer implementation.
//!
//! ## Overview
//!
//! [`HitComparer`] owns an ordered list of [rules](crate::rules) and an
//! [`Ancestry`] provider, and evaluates the rules in order until one of them
//! separates the two hits.
//!
//! ## Ordering
//!
//! - [`HitComparer::compare`] returns [`Ordering::Less`] when `left` ranks first.
//!   It plugs straight into `sort_by`.
//! - [`HitComparer::sort`] sorts best first. The sort is stable, so hits equal
//!   under every rule keep their input order.
//! - [`HitComparer::best`] picks the first element that sort would produce
//!   without sorting or allocating.
//!
//! ## Custom chains
//!
//! [`HitComparer::with_rules`] accepts any rule list. Start from
//! [`default_rules`] to reorder, drop, or replace entries, or append your own
//! functions with the [`Rule`] signature.
//!
//! ## Consistency
//!
//! Every built-in rule is a consistent ordering on its own, and the chain of
//! them is a lexicographic order, with two caveats inherited from the inputs:
//! - An unset priority class ties with every class, so a candidate set mixing
//!   set and unset classes can be intransitive. Assign classes to all
//!   candidates of a query or to none.
//! - The container-depth rule only applies to related containers. When hits
//!   from one container tree interleave by distance with hits from an
//!   unrelated tree, depth and distance can disagree and form a cycle.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::ancestry::{Ancestry, NoAncestry};
use crate::rules::{Rule, default_rules};
use crate::types::ComparableHit;

/// Ranks candidate hits by evaluating a rule chain in order.
///
/// ## Usage
///
/// - Construct with [`HitComparer::new`] for the default chain, or with
///   [`HitComparer::with_rules`] for a specialized one.
/// - Call [`HitComparer::sort`] or [`HitComparer::best`] each query, or pass
///   [`HitComparer::compare`] to your own sort.
///
/// ```
/// use understory_hit_rank::ancestry::NoAncestry;
/// use understory_hit_rank::comparer::HitComparer;
/// use understory_hit_rank::types::ComparableHit;
///
/// let comparer = HitComparer::new(NoAncestry);
/// let mut hits = vec![
///     ComparableHit::new(1_u32, 2.0),
///     ComparableHit::new(2_u32, 0.8),
///     ComparableHit::new(3_u32, 10.0).with_sorting(2, 0),
///     ComparableHit::new(4_u32, 10.0).with_sorting(2, 5),
/// ];
/// comparer.sort(&mut hits);
/// let order: Vec<u32> = hits.iter().map(|h| h.container).collect();
/// assert_eq!(order, [4, 3, 2, 1]);
/// ```
pub struct HitComparer<C, M = (), A = NoAncestry> {
    ancestry: A,
    rules: Vec<Rule<C, M, A>>,
}

impl<C, M, A: core::fmt::Debug> core::fmt::Debug for HitComparer<C, M, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HitComparer")
            .field("ancestry", &self.ancestry)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<C, M, A: Clone> Clone for HitComparer<C, M, A> {
    fn clone(&self) -> Self {
        Self {
            ancestry: self.ancestry.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<C, M, A: Ancestry<C> + Default> Default for HitComparer<C, M, A> {
    fn default() -> Self {
        Self::new(A::default())
    }
}

impl<C, M, A: Ancestry<C>> HitComparer<C, M, A> {
    /// Create a comparer with the default rule chain.
    pub fn new(ancestry: A) -> Self {
        Self {
            ancestry,
            rules: default_rules::<C, M, A>().to_vec(),
        }
    }

    /// Create a comparer with an explicit rule chain, evaluated in order.
    ///
    /// An empty chain considers every pair equal.
    pub fn with_rules(ancestry: A, rules: impl IntoIterator<Item = Rule<C, M, A>>) -> Self {
        Self {
            ancestry,
            rules: rules.into_iter().collect(),
        }
    }

    /// The rule chain, in evaluation order.
    pub fn rules(&self) -> &[Rule<C, M, A>] {
        &self.rules
    }

    /// The ancestry provider consulted by depth rules.
    pub fn ancestry(&self) -> &A {
        &self.ancestry
    }

    /// Compare two hits. `Less` means `left` ranks first.
    ///
    /// The first rule that does not return `Equal` decides; if all do, the
    /// hits are equal.
    pub fn compare(&self, left: &ComparableHit<C, M>, right: &ComparableHit<C, M>) -> Ordering {
        for rule in &self.rules {
            let ord = rule(left, right, &self.ancestry);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Sort hits best first. Stable.
    pub fn sort(&self, hits: &mut [ComparableHit<C, M>]) {
        hits.sort_by(|a, b| self.compare(a, b));
    }

    /// Index of the best hit, or `None` if `hits` is empty.
    ///
    /// Among hits that compare equal, the earliest wins.
    pub fn best_index(&self, hits: &[ComparableHit<C, M>]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, h) in hits.iter().enumerate() {
            match best {
                None => best = Some(i),
                Some(j) => {
                    if self.compare(h, &hits[j]) == Ordering::Less {
                        best = Some(i);
                    }
                }
            }
        }
        best
    }

    /// The best hit, or `None` if `hits` is empty.
    ///
    /// Same result as the first element after [`HitComparer::sort`].
    pub fn best<'a>(&self, hits: &'a [ComparableHit<C, M>]) -> Option<&'a ComparableHit<C, M>> {
        self.best_index(hits).map(|i| &hits[i])
    }
}
