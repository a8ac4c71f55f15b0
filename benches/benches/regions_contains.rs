// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use wayfind_controller::controller::MenuController;
use wayfind_controller::types::{MenuRegion, NoNav, Viewport};
use wayfind_menu::{GroupId, MenuGroup, MenuItem, NavMenu};
use wayfind_regions::OutsideRegions;

fn gen_row_regions(n: usize) -> OutsideRegions<usize> {
    let mut regions = OutsideRegions::new();
    for i in 0..n {
        let x0 = i as f64 * 100.0;
        regions.register(i, Rect::new(x0, 0.0, x0 + 80.0, 40.0));
    }
    regions
}

fn wide_menu(groups: usize) -> NavMenu {
    let groups = (0..groups)
        .map(|g| {
            MenuGroup::new(
                format!("group-{g}"),
                format!("Group {g}"),
                vec![MenuItem::new(format!("Item {g}"), format!("/item-{g}"))],
            )
        })
        .collect();
    NavMenu::new(MenuItem::new("Home", "/"), vec![], groups).expect("generated menu is valid")
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions_contains");
    for &n in &[1_usize, 4, 16, 64] {
        let regions = gen_row_regions(n);
        // Hit lands in the last region; miss is below every region.
        let hit = Point::new((n - 1) as f64 * 100.0 + 40.0, 20.0);
        let miss = Point::new(40.0, 500.0);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("hit/{n}"), |b| {
            b.iter(|| black_box(regions.contains(black_box(hit))));
        });
        group.bench_function(format!("miss/{n}"), |b| {
            b.iter(|| black_box(regions.contains(black_box(miss))));
        });
    }
    group.finish();
}

fn bench_toggle_outside_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_cycle");
    for &n in &[2_usize, 8, 32] {
        let menu = wide_menu(n);
        let ids: Vec<GroupId> = menu.groups().iter().map(|g| g.id.clone()).collect();
        let mut controller = MenuController::new(menu, Viewport::Desktop, NoNav);

        let mut regions = OutsideRegions::new();
        regions.register(
            MenuRegion::DropdownToggle(ids[0].clone()),
            Rect::new(0.0, 0.0, 80.0, 40.0),
        );

        group.bench_function(format!("toggle_then_outside/{n}"), |b| {
            b.iter(|| {
                for id in &ids {
                    black_box(controller.toggle_dropdown(id));
                }
                black_box(controller.outside_pointer(Point::new(900.0, 900.0), &regions));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contains, bench_toggle_outside_cycle);
criterion_main!(benches);
