// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested panels and world colliders.
//!
//! A toy UI caster tests a screen-space pointer against nested panels, and a
//! toy physics caster intersects a top-down ray with wall segments. Both feed
//! one comparer. Depth decides between a panel and its sub-panel; unrelated
//! panels fall through to distance.
//!
//! Run:
//! - `cargo run -p understory_demos --example hit_rank_nested_panels`

use kurbo::{Line, Point, Rect};
use understory_hit_rank::ancestry::{ParentChain, ParentLookup};
use understory_hit_rank::comparer::HitComparer;
use understory_hit_rank::types::ComparableHit;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Container {
    Panel(usize),
    World,
}

struct Panel {
    name: &'static str,
    parent: Option<usize>,
    bounds: Rect,
    sorting_layer: i32,
    sorting_order: i32,
    // Distance from the eye to the panel's plane.
    plane_distance: f32,
}

struct Scene {
    panels: Vec<Panel>,
}

impl Scene {
    fn depth_of(&self, mut idx: usize) -> i32 {
        let mut depth = 0;
        while let Some(p) = self.panels[idx].parent {
            depth += 1;
            idx = p;
        }
        depth
    }
}

impl ParentLookup<Container> for &Scene {
    fn parent_of(&self, node: &Container) -> Option<Container> {
        match node {
            Container::Panel(idx) => self.panels.get(*idx)?.parent.map(Container::Panel),
            Container::World => None,
        }
    }

    fn is_live(&self, node: &Container) -> bool {
        match node {
            Container::Panel(idx) => *idx < self.panels.len(),
            Container::World => true,
        }
    }
}

type Hit = ComparableHit<Container, &'static str>;

fn cast_ui(scene: &Scene, pointer: Point) -> Vec<Hit> {
    scene
        .panels
        .iter()
        .enumerate()
        .filter(|(_, p)| p.bounds.contains(pointer))
        .map(|(i, p)| {
            ComparableHit::new(Container::Panel(i), p.plane_distance)
                .with_sorting(p.sorting_layer, p.sorting_order)
                .with_depth(scene.depth_of(i))
                .with_meta(p.name)
        })
        .collect()
}

fn cast_physics(walls: &[(&'static str, Line)], ray: Line) -> Vec<Hit> {
    walls
        .iter()
        .filter_map(|(name, wall)| {
            let p = ray.crossing_point(*wall)?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Hit distances are stored as f32."
            )]
            let distance = ray.p0.distance(p) as f32;
            Some(ComparableHit::new(Container::World, distance).with_meta(*name))
        })
        .collect()
}

fn main() {
    let scene = Scene {
        panels: vec![
            Panel {
                name: "window",
                parent: None,
                bounds: Rect::new(0.0, 0.0, 400.0, 300.0),
                sorting_layer: 1,
                sorting_order: 0,
                plane_distance: 2.0,
            },
            Panel {
                name: "toolbar",
                parent: Some(0),
                bounds: Rect::new(0.0, 0.0, 400.0, 40.0),
                sorting_layer: 1,
                sorting_order: 0,
                plane_distance: 2.0,
            },
            Panel {
                name: "save button",
                parent: Some(1),
                bounds: Rect::new(10.0, 5.0, 80.0, 35.0),
                sorting_layer: 1,
                sorting_order: 0,
                plane_distance: 2.0,
            },
            Panel {
                name: "floating hint",
                parent: None,
                bounds: Rect::new(50.0, 0.0, 150.0, 60.0),
                sorting_layer: 1,
                sorting_order: 0,
                plane_distance: 1.5,
            },
        ],
    };
    let walls = [
        ("near wall", Line::new((5.0, -5.0), (5.0, 5.0))),
        ("far wall", Line::new((12.0, -5.0), (12.0, 5.0))),
    ];

    let comparer = HitComparer::new(ParentChain::new(&scene));

    for pointer in [Point::new(20.0, 20.0), Point::new(60.0, 20.0), Point::new(300.0, 200.0)] {
        let mut hits = cast_ui(&scene, pointer);
        hits.extend(cast_physics(&walls, Line::new((0.0, 0.0), (100.0, 0.0))));
        comparer.sort(&mut hits);

        println!("== Pointer at ({}, {}) ==", pointer.x, pointer.y);
        for h in &hits {
            println!(
                "  {:<14} layer={} order={} depth={} distance={:.2}",
                h.meta, h.sorting_layer, h.sorting_order, h.depth, h.distance
            );
        }
        if let Some(target) = comparer.best(&hits) {
            println!("  -> target: {}", target.meta);
        }
    }
}
