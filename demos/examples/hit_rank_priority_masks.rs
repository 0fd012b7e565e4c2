// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority masks and a specialized rule chain.
//!
//! Priority classes come from an ordered list of layer masks, so "prefer UI,
//! then anything on the default layer" is configuration rather than code.
//! The second half builds a chain that ignores UI stacking entirely and ranks
//! by class, then distance.
//!
//! Run:
//! - `cargo run -p understory_demos --example hit_rank_priority_masks`

use understory_hit_rank::ancestry::NoAncestry;
use understory_hit_rank::comparer::HitComparer;
use understory_hit_rank::rules::{Rule, by_distance, by_priority_class};
use understory_hit_rank::types::{ComparableHit, LayerMask, PriorityMasks, class_from_raw};

type Hit = ComparableHit<u32, &'static str>;

fn main() {
    let masks = PriorityMasks::new([LayerMask::UI, LayerMask::DEFAULT]);

    // (name, object layer, sorting layer, distance)
    let raw = [
        ("hologram", 5_u8, 0, 4.0_f32),
        ("table", 0, 0, 1.0),
        ("water surface", 4, 0, 0.3),
        ("tooltip", 5, 3, 4.5),
    ];

    let mut hits: Vec<Hit> = raw
        .iter()
        .enumerate()
        .map(|(i, &(name, layer, sorting_layer, distance))| {
            let mut hit = ComparableHit::new(i as u32, distance)
                .with_sorting(sorting_layer, 0)
                .with_meta(name);
            masks.assign(&mut hit, layer);
            hit
        })
        .collect();

    // Producers that still speak the -1 convention can be bridged.
    hits.push(
        ComparableHit::new(99, 0.1)
            .with_priority(class_from_raw(-1))
            .with_meta("legacy probe"),
    );

    let default_chain = HitComparer::new(NoAncestry);
    let mut ranked = hits.clone();
    default_chain.sort(&mut ranked);
    println!("== Default chain ==");
    for h in &ranked {
        println!(
            "  {:<14} class={:?} layer={} distance={}",
            h.meta, h.priority, h.sorting_layer, h.distance
        );
    }

    let class_then_distance: [Rule<u32, &'static str, NoAncestry>; 2] =
        [by_priority_class, by_distance];
    let world_chain = HitComparer::with_rules(NoAncestry, class_then_distance);
    let mut ranked = hits;
    world_chain.sort(&mut ranked);
    println!("== Class, then distance ==");
    for h in &ranked {
        println!(
            "  {:<14} class={:?} distance={}",
            h.meta, h.priority, h.distance
        );
    }
}
