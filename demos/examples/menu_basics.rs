// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Desktop menu basics.
//!
//! This minimal example builds a grouped menu, opens a dropdown, displaces it
//! with another, and dismisses it with an outside click. Region registrations
//! follow the open surface's lifecycle via guards.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p wayfind_demos --example menu_basics`

use kurbo::{Point, Rect};
use wayfind_controller::controller::MenuController;
use wayfind_controller::types::{MenuChange, MenuRegion, Navigator, Viewport};
use wayfind_menu::{GroupId, MenuGroup, MenuItem, NavMenu};
use wayfind_regions::{RegionGuard, shared};

struct PageRouter;

impl Navigator for PageRouter {
    fn navigate(&mut self, path: &str) {
        println!("  router: navigate → {path}");
    }
}

fn main() {
    env_logger::init();

    let menu = NavMenu::new(
        MenuItem::new("Home", "/"),
        vec![MenuItem::new("Troubleshooting", "/troubleshooting")],
        vec![
            MenuGroup::new(
                "setup",
                "Setup",
                vec![MenuItem::new("Project Setup", "/project-setup")],
            ),
            MenuGroup::new(
                "basics",
                "Basics",
                vec![
                    MenuItem::new("Navigation", "/navigation"),
                    MenuItem::new("Components", "/components"),
                ],
            ),
        ],
    )
    .expect("menu config is valid");

    let mut controller = MenuController::new(menu, Viewport::Desktop, PageRouter);
    let regions = shared::<MenuRegion>();

    // The bar's toggle buttons are always mounted on desktop.
    let basics: GroupId = "basics".into();
    let setup: GroupId = "setup".into();
    let _basics_toggle = RegionGuard::register(
        &regions,
        MenuRegion::DropdownToggle(basics.clone()),
        Rect::new(80.0, 0.0, 160.0, 40.0),
    );
    let _setup_toggle = RegionGuard::register(
        &regions,
        MenuRegion::DropdownToggle(setup.clone()),
        Rect::new(0.0, 0.0, 80.0, 40.0),
    );

    println!("== Open `basics` ==");
    report(&controller.toggle_dropdown(&basics));
    // The panel mounts; its region lives as long as the panel does.
    let basics_panel = RegionGuard::register(
        &regions,
        MenuRegion::DropdownPanel(basics.clone()),
        Rect::new(80.0, 40.0, 280.0, 200.0),
    );

    println!("== A click inside the open panel changes nothing ==");
    report(&controller.outside_pointer(Point::new(150.0, 100.0), &regions.borrow()));

    println!("== Toggling `setup` displaces `basics` ==");
    report(&controller.toggle_dropdown(&setup));
    drop(basics_panel);
    let _setup_panel = RegionGuard::register(
        &regions,
        MenuRegion::DropdownPanel(setup.clone()),
        Rect::new(0.0, 40.0, 200.0, 160.0),
    );

    println!("== An outside click dismisses the menu ==");
    report(&controller.outside_pointer(Point::new(600.0, 400.0), &regions.borrow()));
    assert!(controller.state().is_idle());

    println!("== Selecting an item navigates ==");
    report(&controller.select_item("/navigation"));
}

fn report(changes: &[MenuChange]) {
    if changes.is_empty() {
        println!("  (no change)");
    }
    for change in changes {
        println!("  {change:?}");
    }
}
