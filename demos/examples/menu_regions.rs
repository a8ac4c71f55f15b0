// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region registry mechanics.
//!
//! Shows replace-on-reregister, idempotent unregister, guard-scoped release,
//! and parking a region with flags instead of tearing it down.
//!
//! Run:
//! - `cargo run -p wayfind_demos --example menu_regions`

use kurbo::{Point, Rect};
use wayfind_regions::{OutsideRegions, RegionFlags, RegionGuard, shared};

fn main() {
    let mut regions: OutsideRegions<&str> = OutsideRegions::new();

    regions.register("panel", Rect::new(0.0, 40.0, 200.0, 240.0));
    regions.register("toggle", Rect::new(0.0, 0.0, 80.0, 40.0));
    println!("registered {} regions", regions.len());

    // Relayout: re-registering replaces the bounds, the count is unchanged.
    regions.register("panel", Rect::new(0.0, 48.0, 240.0, 260.0));
    println!(
        "after relayout: {} regions, panel at {:?}",
        regions.len(),
        regions.bounds_of(&"panel").unwrap()
    );

    // Park the panel while it animates out: still registered, but outside.
    regions.set_flags(&"panel", RegionFlags::empty());
    assert!(!regions.contains(Point::new(100.0, 100.0)));
    regions.set_flags(&"panel", RegionFlags::INTERACTIVE);
    assert!(regions.contains(Point::new(100.0, 100.0)));

    // Unregister is idempotent.
    regions.unregister(&"panel");
    regions.unregister(&"panel");
    assert!(!regions.contains(Point::new(100.0, 100.0)));

    // Guards release on every exit path.
    let regions = shared::<&str>();
    {
        let _panel = RegionGuard::register(&regions, "panel", Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(regions.borrow().contains(Point::new(50.0, 50.0)));
    }
    assert!(!regions.borrow().contains(Point::new(50.0, 50.0)));
    println!("guard released its region on drop");
}
