// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Regions: the outside-click registry.
//!
//! A menu dismisses itself when the user clicks somewhere that is not part of
//! the menu. Deciding "not part of the menu" needs exactly one predicate: does
//! the interaction point fall inside any currently live interactive region
//! (the open dropdown's panel, its toggle button, the mobile panel, its
//! toggle). [`OutsideRegions`] tracks those regions, keyed by a caller-chosen
//! logical id, and answers that predicate with [`OutsideRegions::contains`].
//!
//! ## Lifecycle discipline
//!
//! Registrations must follow the lifecycle of the physical region they stand
//! for: acquired when the region mounts or opens, released when it closes or
//! unmounts. A registration that outlives its region makes `contains` report
//! "inside" for a widget that no longer exists, which silently disables
//! outside-click dismissal. Only the *open* surfaces may be registered at any
//! time; registering every group's panel unconditionally is a correctness bug,
//! not a pessimization.
//!
//! Release is structural rather than hoped-for: wrap a registration in a
//! [`RegionGuard`] and the region is unregistered on drop, on every exit path.
//!
//! ## Containment semantics
//!
//! Regions are axis-aligned [`kurbo::Rect`] bounds and checks are closed on
//! all four edges, so a click exactly on a region's border counts as inside.
//! Checks are a linear scan over the registered set, which is the right
//! backend for a set this small.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use wayfind_regions::OutsideRegions;
//!
//! let mut regions: OutsideRegions<&str> = OutsideRegions::new();
//! regions.register("panel", Rect::new(0.0, 40.0, 200.0, 240.0));
//! regions.register("toggle", Rect::new(0.0, 0.0, 80.0, 40.0));
//!
//! assert!(regions.contains(Point::new(100.0, 100.0)));
//! assert!(!regions.contains(Point::new(300.0, 100.0)));
//!
//! regions.unregister(&"panel");
//! assert!(!regions.contains(Point::new(100.0, 100.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use bitflags::bitflags;
use core::cell::RefCell;
use kurbo::{Point, Rect};

bitflags! {
    /// Flags controlling a region's participation in containment checks.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Region counts as "inside" for [`OutsideRegions::contains`].
        /// Clear this to park a region (e.g. while it animates out) without
        /// tearing down its registration.
        const INTERACTIVE = 0b0000_0001;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::INTERACTIVE
    }
}

#[derive(Clone, Debug)]
struct Entry<R> {
    id: R,
    bounds: Rect,
    flags: RegionFlags,
}

/// Registry of the currently live interactive regions of a menu.
///
/// Keyed by a logical id `R` chosen by the caller (a controller crate
/// typically uses an enum naming its toggles and panels). Re-registering an id
/// replaces the prior bounds; unregistering an absent id is a no-op.
#[derive(Clone, Debug)]
pub struct OutsideRegions<R> {
    entries: Vec<Entry<R>>,
}

impl<R> Default for OutsideRegions<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> OutsideRegions<R> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of currently registered regions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no regions are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// True iff `pt` lies within any registered interactive region.
    ///
    /// Closed on all edges: border points are inside.
    pub fn contains(&self, pt: Point) -> bool {
        self.entries
            .iter()
            .filter(|e| e.flags.contains(RegionFlags::INTERACTIVE))
            .any(|e| rect_contains(&e.bounds, pt))
    }
}

impl<R: Clone + Eq> OutsideRegions<R> {
    /// Register `id` with the given world-space bounds.
    ///
    /// Re-registering an id replaces its prior bounds and resets its flags to
    /// the default; the region count does not grow.
    pub fn register(&mut self, id: R, bounds: Rect) {
        if let Some(i) = self.entries.iter().position(|e| e.id == id) {
            self.entries[i].bounds = bounds;
            self.entries[i].flags = RegionFlags::default();
        } else {
            self.entries.push(Entry {
                id,
                bounds,
                flags: RegionFlags::default(),
            });
        }
    }

    /// Remove `id` from the registry. Idempotent; unknown ids are a no-op.
    pub fn unregister(&mut self, id: &R) {
        self.entries.retain(|e| e.id != *id);
    }

    /// Update the bounds of a registered region. Unknown ids are a no-op.
    pub fn set_bounds(&mut self, id: &R, bounds: Rect) {
        if let Some(e) = self.entry_mut(id) {
            e.bounds = bounds;
        }
    }

    /// Update the flags of a registered region. Unknown ids are a no-op.
    pub fn set_flags(&mut self, id: &R, flags: RegionFlags) {
        if let Some(e) = self.entry_mut(id) {
            e.flags = flags;
        }
    }

    /// The registered bounds of `id`, if present.
    pub fn bounds_of(&self, id: &R) -> Option<Rect> {
        self.entries.iter().find(|e| e.id == *id).map(|e| e.bounds)
    }

    /// Whether `id` is currently registered.
    pub fn is_registered(&self, id: &R) -> bool {
        self.entries.iter().any(|e| e.id == *id)
    }

    fn entry_mut(&mut self, id: &R) -> Option<&mut Entry<R>> {
        self.entries.iter_mut().find(|e| e.id == *id)
    }
}

/// Closed-interval containment on all four edges.
fn rect_contains(r: &Rect, pt: Point) -> bool {
    r.x0 <= pt.x && pt.x <= r.x1 && r.y0 <= pt.y && pt.y <= r.y1
}

/// Shared handle to a registry, for registrations spread across renderer
/// parts. Single-threaded by design; the menu core has no internal
/// parallelism.
pub type SharedRegions<R> = Rc<RefCell<OutsideRegions<R>>>;

/// Create an empty [`SharedRegions`].
pub fn shared<R>() -> SharedRegions<R> {
    Rc::new(RefCell::new(OutsideRegions::new()))
}

/// Scoped registration: unregisters its region when dropped.
///
/// This is the structural answer to the stale-registration leak: tie the
/// registration to the lifetime of whatever owns the physical region, and
/// release happens on every exit path, including unwinding teardown.
///
/// # Example
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use wayfind_regions::{RegionGuard, shared};
///
/// let regions = shared::<&str>();
/// {
///     let _panel = RegionGuard::register(&regions, "panel", Rect::new(0.0, 0.0, 100.0, 100.0));
///     assert!(regions.borrow().contains(Point::new(50.0, 50.0)));
/// }
/// // Guard dropped: the panel no longer counts as inside.
/// assert!(!regions.borrow().contains(Point::new(50.0, 50.0)));
/// ```
#[derive(Debug)]
pub struct RegionGuard<R: Clone + Eq> {
    regions: SharedRegions<R>,
    id: R,
}

impl<R: Clone + Eq> RegionGuard<R> {
    /// Register `id` in `regions` and return the owning guard.
    ///
    /// If `id` was already registered, the guard takes over the replacement
    /// registration; the earlier owner's eventual drop will then unregister
    /// it, so keep at most one guard per id alive.
    pub fn register(regions: &SharedRegions<R>, id: R, bounds: Rect) -> Self {
        regions.borrow_mut().register(id.clone(), bounds);
        Self {
            regions: Rc::clone(regions),
            id,
        }
    }

    /// The guarded region id.
    pub fn id(&self) -> &R {
        &self.id
    }

    /// Move the guarded region's bounds (e.g. after a relayout).
    pub fn set_bounds(&self, bounds: Rect) {
        self.regions.borrow_mut().set_bounds(&self.id, bounds);
    }

    /// Update the guarded region's flags.
    pub fn set_flags(&self, flags: RegionFlags) {
        self.regions.borrow_mut().set_flags(&self.id, flags);
    }
}

impl<R: Clone + Eq> Drop for RegionGuard<R> {
    fn drop(&mut self) {
        // try_borrow_mut: never turn teardown into a second panic if the
        // registry is borrowed while unwinding.
        if let Ok(mut regions) = self.regions.try_borrow_mut() {
            regions.unregister(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_closed_on_edges() {
        let mut regions: OutsideRegions<u32> = OutsideRegions::new();
        regions.register(1, Rect::new(10.0, 10.0, 20.0, 20.0));
        assert!(regions.contains(Point::new(10.0, 10.0)));
        assert!(regions.contains(Point::new(20.0, 20.0)));
        assert!(regions.contains(Point::new(15.0, 20.0)));
        assert!(!regions.contains(Point::new(20.000001, 20.0)));
        assert!(!regions.contains(Point::new(9.999, 15.0)));
    }

    #[test]
    fn empty_registry_contains_nothing() {
        let regions: OutsideRegions<u32> = OutsideRegions::new();
        assert!(!regions.contains(Point::new(0.0, 0.0)));
        assert!(regions.is_empty());
    }

    #[test]
    fn register_replaces_existing_id() {
        let mut regions: OutsideRegions<&str> = OutsideRegions::new();
        regions.register("panel", Rect::new(0.0, 0.0, 10.0, 10.0));
        regions.register("panel", Rect::new(100.0, 100.0, 110.0, 110.0));
        assert_eq!(regions.len(), 1);
        assert!(!regions.contains(Point::new(5.0, 5.0)));
        assert!(regions.contains(Point::new(105.0, 105.0)));
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut regions: OutsideRegions<&str> = OutsideRegions::new();
        regions.register("panel", Rect::new(0.0, 0.0, 10.0, 10.0));
        regions.unregister(&"panel");
        regions.unregister(&"panel");
        regions.unregister(&"never-registered");
        assert!(regions.is_empty());
    }

    #[test]
    fn non_interactive_region_is_outside() {
        let mut regions: OutsideRegions<&str> = OutsideRegions::new();
        regions.register("panel", Rect::new(0.0, 0.0, 10.0, 10.0));
        regions.set_flags(&"panel", RegionFlags::empty());
        assert!(!regions.contains(Point::new(5.0, 5.0)));
        // Still registered: flipping the flag back restores containment.
        regions.set_flags(&"panel", RegionFlags::INTERACTIVE);
        assert!(regions.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn set_bounds_moves_region() {
        let mut regions: OutsideRegions<&str> = OutsideRegions::new();
        regions.register("panel", Rect::new(0.0, 0.0, 10.0, 10.0));
        regions.set_bounds(&"panel", Rect::new(50.0, 0.0, 60.0, 10.0));
        assert!(!regions.contains(Point::new(5.0, 5.0)));
        assert!(regions.contains(Point::new(55.0, 5.0)));
        assert_eq!(
            regions.bounds_of(&"panel"),
            Some(Rect::new(50.0, 0.0, 60.0, 10.0))
        );
    }

    #[test]
    fn multiple_regions_any_counts() {
        let mut regions: OutsideRegions<&str> = OutsideRegions::new();
        regions.register("toggle", Rect::new(0.0, 0.0, 40.0, 20.0));
        regions.register("panel", Rect::new(0.0, 20.0, 200.0, 220.0));
        assert!(regions.contains(Point::new(30.0, 10.0)));
        assert!(regions.contains(Point::new(150.0, 100.0)));
        assert!(!regions.contains(Point::new(300.0, 10.0)));
    }

    #[test]
    fn guard_releases_on_drop() {
        let regions = shared::<&str>();
        {
            let _guard =
                RegionGuard::register(&regions, "panel", Rect::new(0.0, 0.0, 10.0, 10.0));
            assert!(regions.borrow().is_registered(&"panel"));
        }
        assert!(!regions.borrow().is_registered(&"panel"));
        assert!(!regions.borrow().contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn guard_set_bounds_updates_registry() {
        let regions = shared::<&str>();
        let guard = RegionGuard::register(&regions, "panel", Rect::new(0.0, 0.0, 10.0, 10.0));
        guard.set_bounds(Rect::new(20.0, 0.0, 30.0, 10.0));
        assert!(regions.borrow().contains(Point::new(25.0, 5.0)));
        assert!(!regions.borrow().contains(Point::new(5.0, 5.0)));
    }
}
