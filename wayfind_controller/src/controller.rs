// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller implementation.
//!
//! ## Overview
//!
//! Owns the [`MenuState`] and applies input events to it, one at a time, in
//! arrival order. Every handler runs to completion synchronously and returns
//! the ordered list of [`MenuChange`]s it caused; inapplicable events return
//! an empty list and change nothing.
//!
//! ## Single-active-region policy
//!
//! At most one surface is open: opening group `g2` while `g1` is open closes
//! `g1` in the same event. This is the intended tie-break, not a bug.
//!
//! ## Outside dismissal
//!
//! [`MenuController::outside_pointer`] consults a caller-supplied
//! [`OutsideRegions`] registry; the controller never owns the registry, in
//! the same way an event router takes pre-resolved hits as arguments rather
//! than owning the picker. While nothing is open the handler is inert.

use alloc::vec::Vec;

use kurbo::Point;
use log::{debug, trace};

use wayfind_menu::{GroupId, NavMenu};
use wayfind_regions::OutsideRegions;

use crate::types::{MenuChange, MenuRegion, MenuState, Navigator, Viewport};

/// The navigation-menu state machine.
///
/// ## Usage
///
/// - Construct with [`MenuController::new`], passing the validated menu, the
///   current viewport classification, and the embedder's [`Navigator`].
/// - Feed it the renderer's input events through the five handlers:
///   [`toggle_dropdown`](Self::toggle_dropdown),
///   [`select_item`](Self::select_item),
///   [`toggle_mobile_panel`](Self::toggle_mobile_panel),
///   [`outside_pointer`](Self::outside_pointer), and
///   [`viewport_changed`](Self::viewport_changed).
/// - Repaint from [`state`](Self::state) using the returned change lists.
///
/// The controller is discarded with the app shell; its state does not persist.
pub struct MenuController<N: Navigator> {
    menu: NavMenu,
    state: MenuState,
    navigator: N,
}

impl<N: Navigator> core::fmt::Debug for MenuController<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<N: Navigator> MenuController<N> {
    /// Create a controller in the idle state for `viewport`.
    pub fn new(menu: NavMenu, viewport: Viewport, navigator: N) -> Self {
        Self {
            menu,
            state: MenuState::idle(viewport),
            navigator,
        }
    }

    /// The immutable menu structure.
    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    /// The current state.
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// The active layout mode.
    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    /// The open dropdown group, if any.
    pub fn active_dropdown(&self) -> Option<&GroupId> {
        self.state.active_dropdown.as_ref()
    }

    /// Whether the mobile panel is open.
    pub fn is_mobile_open(&self) -> bool {
        self.state.mobile_open
    }

    /// The embedder's navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Toggle the dropdown for `id`.
    ///
    /// Desktop only. Toggling the open group closes it; toggling another
    /// group closes the open one and opens `id` in the same event. Unknown
    /// group ids and Mobile viewport are no-ops: layout mode governs which
    /// events the renderer even dispatches, so a stray event here is benign.
    pub fn toggle_dropdown(&mut self, id: &GroupId) -> Vec<MenuChange> {
        if self.state.viewport != Viewport::Desktop {
            trace!("toggle_dropdown({id}) ignored outside Desktop viewport");
            return Vec::new();
        }
        if self.menu.group_of(id).is_none() {
            trace!("toggle_dropdown ignored for unknown group `{id}`");
            return Vec::new();
        }

        let mut changes = Vec::new();
        match self.state.active_dropdown.take() {
            Some(open) if open == *id => {
                debug!("dropdown `{open}` closed by its own toggle");
                changes.push(MenuChange::DropdownClosed(open));
            }
            Some(open) => {
                debug!("dropdown `{open}` displaced by `{id}`");
                changes.push(MenuChange::DropdownClosed(open));
                changes.push(MenuChange::DropdownOpened(id.clone()));
                self.state.active_dropdown = Some(id.clone());
            }
            None => {
                debug!("dropdown `{id}` opened");
                changes.push(MenuChange::DropdownOpened(id.clone()));
                self.state.active_dropdown = Some(id.clone());
            }
        }
        changes
    }

    /// Select a destination: navigate to `path` and close every open surface.
    ///
    /// Total over both viewports and any state; the navigator is invoked
    /// exactly once per call, whether or not anything was open.
    pub fn select_item(&mut self, path: &str) -> Vec<MenuChange> {
        let mut changes = self.close_all();
        debug!("navigating to `{path}`");
        self.navigator.navigate(path);
        changes.push(MenuChange::Navigated(path.into()));
        changes
    }

    /// Flip the mobile collapsible panel.
    ///
    /// Mobile only; a no-op on Desktop.
    pub fn toggle_mobile_panel(&mut self) -> Vec<MenuChange> {
        if self.state.viewport != Viewport::Mobile {
            trace!("toggle_mobile_panel ignored outside Mobile viewport");
            return Vec::new();
        }
        self.state.mobile_open = !self.state.mobile_open;
        if self.state.mobile_open {
            debug!("mobile panel opened");
            [MenuChange::MobileOpened].into()
        } else {
            debug!("mobile panel closed");
            [MenuChange::MobileClosed].into()
        }
    }

    /// Apply a global pointer event at `pt`.
    ///
    /// Inert while idle. Otherwise, closes every open surface unless `pt`
    /// falls inside a registered region of `regions`. Toggle buttons must be
    /// registered while their surface is open: the click that toggles is then
    /// "inside" here, and open/close stays driven solely by the paired toggle
    /// event.
    pub fn outside_pointer(
        &mut self,
        pt: Point,
        regions: &OutsideRegions<MenuRegion>,
    ) -> Vec<MenuChange> {
        if self.state.is_idle() {
            return Vec::new();
        }
        if regions.contains(pt) {
            trace!("pointer at ({}, {}) is inside the menu", pt.x, pt.y);
            return Vec::new();
        }
        debug!("outside pointer at ({}, {}) dismisses the menu", pt.x, pt.y);
        self.close_all()
    }

    /// Switch layout mode.
    ///
    /// Always lands in the idle state for `viewport`: no transient open
    /// surface survives a layout-mode change.
    pub fn viewport_changed(&mut self, viewport: Viewport) -> Vec<MenuChange> {
        let changes = self.close_all();
        if self.state.viewport != viewport {
            debug!("viewport changed to {viewport:?}");
        }
        self.state.viewport = viewport;
        changes
    }

    /// Close whatever is open, reporting what closed.
    fn close_all(&mut self) -> Vec<MenuChange> {
        let mut changes = Vec::new();
        if let Some(open) = self.state.active_dropdown.take() {
            changes.push(MenuChange::DropdownClosed(open));
        }
        if self.state.mobile_open {
            self.state.mobile_open = false;
            changes.push(MenuChange::MobileClosed);
        }
        changes
    }
}
