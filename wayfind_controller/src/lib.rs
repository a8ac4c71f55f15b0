// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Controller: a deterministic state machine for a navigation menu.
//!
//! ## Overview
//!
//! This crate decides, given user input events, which menu surface is open:
//! one dropdown group on desktop, the collapsible panel on mobile, or nothing.
//! It reconciles per-group toggling with global outside-click dismissal and
//! with viewport switches. It does not render anything and performs no I/O;
//! a renderer paints from the controller's state and forwards events in.
//!
//! ## Events
//!
//! Five entry points, all synchronous and run-to-completion, processed
//! strictly in arrival order
//! (see [`MenuController`](crate::controller::MenuController)):
//!
//! - `toggle_dropdown(g)` — open/close a group; opening one closes another.
//! - `select_item(path)` — navigate and close everything.
//! - `toggle_mobile_panel()` — flip the collapsible panel.
//! - `outside_pointer(pt, &regions)` — dismiss when the click is outside
//!   every registered region.
//! - `viewport_changed(v)` — adopt the new layout mode, resetting all
//!   transient state.
//!
//! Each handler returns the ordered [`MenuChange`](crate::types::MenuChange)
//! list it caused, so a renderer can repaint exactly what moved. Events that
//! do not apply to the current viewport, or that name an unknown group, are
//! absorbed as no-ops: they arise benignly from stale event queues during a
//! viewport transition and are never errors.
//!
//! ## Collaborators
//!
//! - Navigation goes through the [`Navigator`](crate::types::Navigator)
//!   trait, called exactly once per selection.
//! - Outside-click containment comes from a `wayfind_regions` registry passed
//!   into the handler; the renderer keeps it in sync with what is physically
//!   mounted, using the region vocabulary in
//!   [`MenuRegion`](crate::types::MenuRegion). Toggle buttons register
//!   themselves, which is what keeps one physical click from both toggling a
//!   dropdown and immediately dismissing it.
//!
//! ## Minimal example
//!
//! ```rust
//! use wayfind_controller::controller::MenuController;
//! use wayfind_controller::types::{MenuChange, NoNav, Viewport};
//! use wayfind_menu::{MenuGroup, MenuItem, NavMenu};
//!
//! let menu = NavMenu::new(
//!     MenuItem::new("Home", "/"),
//!     vec![],
//!     vec![MenuGroup::new(
//!         "basics",
//!         "Basics",
//!         vec![MenuItem::new("Navigation", "/navigation")],
//!     )],
//! )
//! .unwrap();
//!
//! let mut controller = MenuController::new(menu, Viewport::Desktop, NoNav);
//! let changes = controller.toggle_dropdown(&"basics".into());
//! assert_eq!(changes, vec![MenuChange::DropdownOpened("basics".into())]);
//! assert_eq!(controller.active_dropdown(), Some(&"basics".into()));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod types;
