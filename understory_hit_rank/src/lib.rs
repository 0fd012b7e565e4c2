// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_hit_rank --heading-base-level=0

//! Understory Hit Rank: deterministic, `no_std` ranking of ray-cast hits.
//!
//! ## Overview
//!
//! A pointer ray usually lands on several things at once: a button on a UI
//! panel, the panel behind it, and a few physics colliders in the world. This
//! crate decides which of those candidates is *the* target.
//! It does not cast rays and it does not dispatch events.
//! Feed it [`ComparableHit`](crate::types::ComparableHit) records from your casters and it gives you a
//! deterministic order, best first.
//!
//! ## Ranking
//!
//! [`HitComparer`](crate::comparer::HitComparer) evaluates a chain of pairwise
//! [rules](crate::rules); the first rule that separates two hits decides.
//! The default chain is:
//!
//! 1. Priority class: lower wins. Hits without a class never decide here.
//! 2. Sorting layer: higher wins.
//! 3. Sorting order: higher wins.
//! 4. Container depth: higher wins, but only when one hit's container contains
//!    the other's, per the [`Ancestry`](crate::ancestry::Ancestry) provider.
//! 5. Distance: lower wins.
//!
//! Physics hits leave the UI fields at zero, so among themselves they fall
//! through to distance. UI hits outrank physics hits whenever they sit on a
//! higher sorting layer.
//!
//! ## Inputs
//!
//! - Priority classes are optional. [`PriorityMasks`](crate::types::PriorityMasks) maps object
//!   layers to classes from an ordered "prefer these layers" list, and
//!   [`class_from_raw`](crate::types::class_from_raw) converts a `-1` sentinel convention.
//! - Container relationships come from an [`Ancestry`](crate::ancestry::Ancestry) implementation.
//!   [`ParentChain`](crate::ancestry::ParentChain) derives one from a parent lookup;
//!   [`NoAncestry`](crate::ancestry::NoAncestry) treats all containers as unrelated.
//!
//! ## Custom chains
//!
//! Rules are plain `fn` pointers. Build a comparer with
//! [`HitComparer::with_rules`](crate::comparer::HitComparer::with_rules) to reorder, drop, or add
//! rules while keeping the same first-decisive-rule evaluation.
//!
//! ## Example
//!
//! ```
//! use understory_hit_rank::ancestry::NoAncestry;
//! use understory_hit_rank::comparer::HitComparer;
//! use understory_hit_rank::types::ComparableHit;
//!
//! let comparer = HitComparer::new(NoAncestry);
//! let hits = [
//!     // Physics hits.
//!     ComparableHit::new("crate", 0.8),
//!     ComparableHit::new("wall", 2.0),
//!     // UI hits on sorting layer 2.
//!     ComparableHit::new("panel", 1.5).with_sorting(2, 0),
//!     ComparableHit::new("button", 1.5).with_sorting(2, 5),
//! ];
//!
//! let best = comparer.best(&hits).unwrap();
//! assert_eq!(best.container, "button");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod ancestry;
pub mod comparer;
pub mod rules;
pub mod types;
