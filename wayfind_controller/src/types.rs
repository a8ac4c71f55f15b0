// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the controller: viewports, state, changes, and the
//! navigator seam.
//!
//! ## Overview
//!
//! These types describe the controller's state and outputs. They are used by
//! [`controller`](crate::controller) and by downstream renderers.

use alloc::string::String;

use wayfind_menu::GroupId;

/// Which layout mode the menu is presented in.
///
/// Desktop renders dropdown groups; Mobile renders a single collapsible
/// panel. The classification comes from the embedder's breakpoint observer,
/// not from this crate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Viewport {
    /// Dropdown-based presentation.
    Desktop,
    /// Single collapsible panel presentation.
    Mobile,
}

/// The menu's mutable state. At most one surface is open at a time.
///
/// Owned and mutated only by
/// [`MenuController`](crate::controller::MenuController); renderers read it
/// through [`MenuController::state`](crate::controller::MenuController::state).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuState {
    /// Active layout mode.
    pub viewport: Viewport,
    /// The open dropdown group, if any. Meaningful only on Desktop.
    pub active_dropdown: Option<GroupId>,
    /// Whether the collapsible panel is open. Meaningful only on Mobile.
    pub mobile_open: bool,
}

impl MenuState {
    /// The initial state for a viewport: nothing open.
    pub fn idle(viewport: Viewport) -> Self {
        Self {
            viewport,
            active_dropdown: None,
            mobile_open: false,
        }
    }

    /// Whether no surface is open.
    pub fn is_idle(&self) -> bool {
        self.active_dropdown.is_none() && !self.mobile_open
    }
}

/// An observable state change, in the order it occurred.
///
/// Returned by every controller event handler so a renderer can repaint
/// exactly what moved. An event that does not apply (wrong viewport, unknown
/// group, click inside the menu) returns no changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MenuChange {
    /// A dropdown group expanded.
    DropdownOpened(GroupId),
    /// A dropdown group collapsed.
    DropdownClosed(GroupId),
    /// The mobile panel expanded.
    MobileOpened,
    /// The mobile panel collapsed.
    MobileClosed,
    /// The navigator was invoked with this path.
    Navigated(String),
}

/// The abstract "navigate to path" capability, provided by the page router.
///
/// Called exactly once per item selection. Implementations should not feed
/// events back into the controller synchronously; the controller has already
/// settled its state when this fires.
pub trait Navigator {
    /// Navigate to the given route path.
    fn navigate(&mut self, path: &str);
}

/// A no-op navigator for headless use and tests.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoNav;

impl Navigator for NoNav {
    #[inline]
    fn navigate(&mut self, _path: &str) {}
}

/// Region id vocabulary for the outside-click registry.
///
/// The renderer registers each physically mounted surface under one of these
/// ids (via `wayfind_regions`), and the controller's outside-pointer handler
/// treats a click in any of them as "inside". Toggle buttons register
/// themselves too: that is what keeps the click that toggled a dropdown from
/// also being seen as an outside dismissal.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum MenuRegion {
    /// A group's toggle button in the desktop bar.
    DropdownToggle(GroupId),
    /// A group's expanded panel.
    DropdownPanel(GroupId),
    /// The hamburger button in the mobile bar.
    MobileToggle,
    /// The expanded mobile panel.
    MobilePanel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_has_nothing_open() {
        let s = MenuState::idle(Viewport::Desktop);
        assert!(s.is_idle());
        assert_eq!(s.viewport, Viewport::Desktop);
        assert_eq!(s.active_dropdown, None);
        assert!(!s.mobile_open);
    }

    #[test]
    fn open_states_are_not_idle() {
        let mut s = MenuState::idle(Viewport::Desktop);
        s.active_dropdown = Some("basics".into());
        assert!(!s.is_idle());

        let mut s = MenuState::idle(Viewport::Mobile);
        s.mobile_open = true;
        assert!(!s.is_idle());
    }

    #[test]
    fn region_ids_distinguish_groups() {
        let a = MenuRegion::DropdownToggle("setup".into());
        let b = MenuRegion::DropdownToggle("basics".into());
        assert_ne!(a, b);
        assert_eq!(a, MenuRegion::DropdownToggle("setup".into()));
    }
}
