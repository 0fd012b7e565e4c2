// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_hit_rank::ancestry::{NoAncestry, ParentChain, ParentLookup};
use understory_hit_rank::comparer::HitComparer;
use understory_hit_rank::rules::{Rule, by_distance};
use understory_hit_rank::types::{ComparableHit, LayerMask, PriorityMasks};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// Panels form chains of four: 4k is a root, 4k+1 its child, and so on.
#[derive(Clone, Copy)]
struct PanelChains;

impl ParentLookup<u32> for PanelChains {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        (node % 4 != 0).then(|| node - 1)
    }
}

/// Half UI hits on a handful of panels, half physics hits, priority from layer masks.
fn gen_hits(n: usize, seed: u64) -> Vec<ComparableHit<u32>> {
    let masks = PriorityMasks::new([LayerMask::UI, LayerMask::DEFAULT]);
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let distance = rng.next_f32() * 20.0;
        let mut hit = if rng.below(2) == 0 {
            let panel = rng.below(32) as u32;
            ComparableHit::new(panel, distance)
                .with_sorting(rng.below(3) as i32, rng.below(8) as i32)
                .with_depth((panel % 4) as i32)
        } else {
            ComparableHit::new(1000 + rng.below(1000) as u32, distance)
        };
        let layer = if hit.container < 1000 { 5 } else { rng.below(6) as u8 };
        masks.assign(&mut hit, layer);
        out.push(hit);
    }
    out
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_rank_sort");
    let chain: HitComparer<u32, (), _> = HitComparer::new(ParentChain::new(PanelChains));
    let flat: HitComparer<u32> = HitComparer::new(NoAncestry);
    let distance_only: [Rule<u32, (), NoAncestry>; 1] = [by_distance];
    let distance_only = HitComparer::with_rules(NoAncestry, distance_only);
    for &n in &[16usize, 256, 4096] {
        let hits = gen_hits(n, 0x5eed_u64 ^ n as u64);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("default_chain_parent_chain_n{}", n), |b| {
            b.iter_batched(
                || hits.clone(),
                |mut v| {
                    chain.sort(&mut v);
                    black_box(v);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("default_chain_no_ancestry_n{}", n), |b| {
            b.iter_batched(
                || hits.clone(),
                |mut v| {
                    flat.sort(&mut v);
                    black_box(v);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("distance_only_n{}", n), |b| {
            b.iter_batched(
                || hits.clone(),
                |mut v| {
                    distance_only.sort(&mut v);
                    black_box(v);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_best(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_rank_best");
    let chain: HitComparer<u32, (), _> = HitComparer::new(ParentChain::new(PanelChains));
    for &n in &[16usize, 256, 4096] {
        let hits = gen_hits(n, 0xbe57_u64 ^ n as u64);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("best_n{}", n), |b| {
            b.iter(|| black_box(chain.best_index(black_box(&hits))))
        });

        group.bench_function(format!("sort_then_first_n{}", n), |b| {
            b.iter_batched(
                || hits.clone(),
                |mut v| {
                    chain.sort(&mut v);
                    black_box(v.first().map(|h| h.container));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_best);
criterion_main!(benches);
