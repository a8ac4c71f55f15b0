// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfind Menu: the immutable description of a navigation menu.
//!
//! A [`NavMenu`] is the structure a renderer paints and a controller walks: a
//! home item, a sequence of always-visible top-level links, and a sequence of
//! dropdown groups. It is built once, validated eagerly, and never mutated.
//! All open/closed state lives elsewhere (see the `wayfind_controller` crate).
//!
//! ## Ordering
//!
//! Groups and items keep their insertion order, and that order is the display
//! order. [`NavMenu::groups`] and [`MenuGroup::items`] are stable slices.
//!
//! ## Validation
//!
//! Construction fails fast with a [`MenuError`] when the description is
//! inconsistent: a duplicate group id, a duplicate target path anywhere in the
//! menu (home, links, and group items share one namespace), or a group with no
//! items. A misconfigured menu never reaches a running controller.
//!
//! # Example
//!
//! ```rust
//! use wayfind_menu::{MenuGroup, MenuItem, NavMenu};
//!
//! let menu = NavMenu::new(
//!     MenuItem::new("Home", "/"),
//!     vec![MenuItem::new("Troubleshooting", "/troubleshooting")],
//!     vec![
//!         MenuGroup::new("setup", "Setup", vec![MenuItem::new("Project Setup", "/project-setup")]),
//!         MenuGroup::new(
//!             "basics",
//!             "Basics",
//!             vec![
//!                 MenuItem::new("Navigation", "/navigation"),
//!                 MenuItem::new("Components", "/components"),
//!             ],
//!         ),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(menu.groups().len(), 2);
//! assert_eq!(menu.group_of(&"basics".into()).unwrap().items.len(), 2);
//! assert_eq!(menu.item_for_path("/components").unwrap().label, "Components");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use thiserror::Error;

/// Identifier for a dropdown group, unique across the menu.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GroupId(String);

impl GroupId {
    /// Create a group id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GroupId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for GroupId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single navigation destination.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuItem {
    /// Text shown to the user.
    pub label: String,
    /// Route path handed to the navigator on selection. Unique menu-wide.
    pub target_path: String,
}

impl MenuItem {
    /// Create an item from a label and its target path.
    pub fn new(label: impl Into<String>, target_path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_path: target_path.into(),
        }
    }
}

/// A named dropdown group of items.
///
/// In desktop layout a group renders as one label that expands into a panel;
/// in mobile layout its items are listed under a section heading inside the
/// collapsible panel. `items` must be non-empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuGroup {
    /// Identifier, unique across all groups.
    pub id: GroupId,
    /// Text shown on the group's toggle.
    pub label: String,
    /// Destinations in display order.
    pub items: Vec<MenuItem>,
}

impl MenuGroup {
    /// Create a group from an id, a label, and its items.
    pub fn new(id: impl Into<GroupId>, label: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items,
        }
    }
}

/// Errors reported by [`NavMenu::new`].
///
/// All of these are configuration errors: they are raised once, synchronously,
/// at construction, and the menu cannot be built.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum MenuError {
    /// Two groups share the same id.
    #[error("duplicate group id `{0}`")]
    DuplicateGroupId(GroupId),
    /// Two items (home, top-level links, or group items) share a target path.
    #[error("duplicate target path `{0}`")]
    DuplicateTargetPath(String),
    /// A group was declared with no items.
    #[error("group `{0}` has no items")]
    EmptyGroup(GroupId),
}

/// The immutable menu structure: home item, top-level links, dropdown groups.
///
/// A flat menu is simply a `NavMenu` with zero groups and every destination in
/// `links`. Constructed once via [`NavMenu::new`]; lookup only afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavMenu {
    home: MenuItem,
    links: Vec<MenuItem>,
    groups: Vec<MenuGroup>,
}

impl NavMenu {
    /// Build and validate a menu.
    ///
    /// Returns a [`MenuError`] if any group id repeats, any target path
    /// repeats anywhere in the menu, or any group is empty. Group order and
    /// item order are preserved as given.
    pub fn new(
        home: MenuItem,
        links: Vec<MenuItem>,
        groups: Vec<MenuGroup>,
    ) -> Result<Self, MenuError> {
        let mut seen_ids: Vec<&GroupId> = Vec::with_capacity(groups.len());
        for group in &groups {
            if group.items.is_empty() {
                return Err(MenuError::EmptyGroup(group.id.clone()));
            }
            if seen_ids.contains(&&group.id) {
                return Err(MenuError::DuplicateGroupId(group.id.clone()));
            }
            seen_ids.push(&group.id);
        }

        // One path namespace across home, links, and every group item.
        let mut seen_paths: Vec<&str> = Vec::new();
        let all_items = core::iter::once(&home)
            .chain(links.iter())
            .chain(groups.iter().flat_map(|g| g.items.iter()));
        for item in all_items {
            if seen_paths.contains(&item.target_path.as_str()) {
                return Err(MenuError::DuplicateTargetPath(item.target_path.clone()));
            }
            seen_paths.push(&item.target_path);
        }

        Ok(Self {
            home,
            links,
            groups,
        })
    }

    /// The home item.
    pub fn home(&self) -> &MenuItem {
        &self.home
    }

    /// Always-visible top-level links, in display order. May be empty.
    pub fn links(&self) -> &[MenuItem] {
        &self.links
    }

    /// All groups in display order.
    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// Look up a group by id.
    pub fn group_of(&self, id: &GroupId) -> Option<&MenuGroup> {
        self.groups.iter().find(|g| g.id == *id)
    }

    /// Find the item with the given target path.
    ///
    /// Searches home, then links, then group items in display order. Paths are
    /// unique, so at most one item matches.
    pub fn item_for_path(&self, path: &str) -> Option<&MenuItem> {
        core::iter::once(&self.home)
            .chain(self.links.iter())
            .chain(self.groups.iter().flat_map(|g| g.items.iter()))
            .find(|item| item.target_path == path)
    }

    /// The group containing the item with the given target path, if any.
    ///
    /// Home and top-level links belong to no group. Useful for highlighting
    /// the active trail in a renderer.
    pub fn group_for_path(&self, path: &str) -> Option<&GroupId> {
        self.groups
            .iter()
            .find(|g| g.items.iter().any(|item| item.target_path == path))
            .map(|g| &g.id)
    }
}
