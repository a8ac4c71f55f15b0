// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile panel and viewport switching.
//!
//! The same controller drives both layouts: the breakpoint observer reports a
//! viewport change, transient state resets, and the mobile toggle takes over.
//!
//! Run:
//! - `cargo run -p wayfind_demos --example menu_mobile`

use kurbo::{Point, Rect};
use wayfind_controller::controller::MenuController;
use wayfind_controller::types::{MenuRegion, Navigator, Viewport};
use wayfind_menu::{MenuGroup, MenuItem, NavMenu};
use wayfind_regions::{RegionGuard, shared};

struct PageRouter;

impl Navigator for PageRouter {
    fn navigate(&mut self, path: &str) {
        println!("  router: navigate → {path}");
    }
}

fn main() {
    let menu = NavMenu::new(
        MenuItem::new("Home", "/"),
        vec![],
        vec![MenuGroup::new(
            "basics",
            "Basics",
            vec![
                MenuItem::new("Navigation", "/navigation"),
                MenuItem::new("Components", "/components"),
            ],
        )],
    )
    .expect("menu config is valid");

    let mut controller = MenuController::new(menu, Viewport::Desktop, PageRouter);
    let regions = shared::<MenuRegion>();

    // Open a dropdown, then shrink the window below the breakpoint.
    controller.toggle_dropdown(&"basics".into());
    println!("== Viewport shrinks to Mobile ==");
    println!("  {:?}", controller.viewport_changed(Viewport::Mobile));
    assert!(controller.state().is_idle(), "no transient state survives");

    // The hamburger is mounted; open the panel.
    let _toggle = RegionGuard::register(
        &regions,
        MenuRegion::MobileToggle,
        Rect::new(280.0, 0.0, 320.0, 40.0),
    );
    println!("== Hamburger opens the panel ==");
    println!("  {:?}", controller.toggle_mobile_panel());
    let panel = RegionGuard::register(
        &regions,
        MenuRegion::MobilePanel,
        Rect::new(0.0, 40.0, 320.0, 400.0),
    );

    // A tap on the panel itself is inside.
    let inside = controller.outside_pointer(Point::new(160.0, 200.0), &regions.borrow());
    assert!(inside.is_empty());

    // Selecting home closes the panel and navigates once.
    println!("== Selecting Home ==");
    println!("  {:?}", controller.select_item("/"));
    drop(panel);
    assert!(controller.state().is_idle());
}
