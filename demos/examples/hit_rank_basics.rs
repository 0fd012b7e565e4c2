// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit rank basics.
//!
//! Two UI hits and two physics hits, none with a priority class and no
//! container relationships. UI hits on a higher sorting layer come first,
//! then draw order, then physics hits by distance.
//!
//! Run:
//! - `cargo run -p understory_demos --example hit_rank_basics`

use understory_hit_rank::ancestry::NoAncestry;
use understory_hit_rank::comparer::HitComparer;
use understory_hit_rank::types::ComparableHit;

fn main() {
    let comparer = HitComparer::new(NoAncestry);

    let mut hits = vec![
        ComparableHit::new(1_u32, 3.0)
            .with_sorting(2, 0)
            .with_meta("ui: panel"),
        ComparableHit::new(2_u32, 3.0)
            .with_sorting(2, 5)
            .with_meta("ui: button"),
        ComparableHit::new(100_u32, 0.8).with_meta("physics: crate"),
        ComparableHit::new(101_u32, 2.0).with_meta("physics: wall"),
    ];

    comparer.sort(&mut hits);
    println!("== Ranked hits (best first) ==");
    for (i, h) in hits.iter().enumerate() {
        println!(
            "  #{i}  {:<16} layer={} order={} distance={}",
            h.meta, h.sorting_layer, h.sorting_order, h.distance
        );
    }

    if let Some(target) = comparer.best(&hits) {
        println!("Target: {}", target.meta);
    }
}
