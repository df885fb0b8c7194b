// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Switchscan Tree: an arena-backed vocabulary tree.
//!
//! Switchscan Tree is the data layer behind switch-access communication boards.
//!
//! - Represents a hierarchy of vocabulary nodes, each tagged with a [`NodeKind`] that decides
//!   what selecting it does.
//! - Stores display, cue, and spoken strings separately in [`NodeText`].
//! - Addresses nodes through generational [`NodeId`] handles, so a handle to a removed node can be
//!   detected instead of silently pointing at whatever reused its slot.
//!
//! ## Ownership
//!
//! Children are owned by their parent and kept in order. The parent link is a back-handle only:
//! [`Tree::remove`] walks down from the removed node and frees its subtree, and
//! [`Tree::replace_children`] drops a whole generation of children at once, which is how spelling
//! lists are rebuilt.
//!
//! Navigation code treats a live node without a parent as an orphan. [`Tree::detach`] produces one
//! on purpose (for example when an editor cuts a node); [`Tree::root_of`] and
//! [`Tree::is_descendant_of`] let callers check whether a node is still reachable from the root
//! they care about.
//!
//! ## API overview
//!
//! - [`Tree::insert`] → [`NodeId`]
//! - [`Tree::remove`], [`Tree::detach`], [`Tree::reparent`], [`Tree::replace_children`]
//! - [`Tree::set_text`] / [`Tree::set_kind`]
//! - [`Tree::parent_of`], [`Tree::children_of`], [`Tree::siblings_of`],
//!   [`Tree::index_in_parent`], [`Tree::is_last_sibling`]
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::Tree;
pub use types::{NodeId, NodeKind, NodeText};
