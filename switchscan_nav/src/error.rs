// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural faults reported by the navigator.

use alloc::string::String;

use switchscan_tree::NodeKind;
use thiserror::Error;

/// A recoverable navigation fault.
///
/// By the time a public [`Navigator`](crate::Navigator) method returns one of these, the engine
/// has already recovered: timers are cancelled, speech is stopped, and focus is back at the top of
/// the vocabulary. The error exists for logging and telemetry.
///
/// Node descriptions come from [`Tree::describe`](switchscan_tree::Tree::describe).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Tried to enter a root or branch that has no children.
    #[error("{node} has no children")]
    NoChildren {
        /// The childless node.
        node: String,
    },
    /// Spelling regeneration was asked to fill a parent that is gone or detached.
    #[error("spelling parent of {node} is missing")]
    NoParent {
        /// The node whose spelling parent could not be found.
        node: String,
    },
    /// The sibling list of the focused node is unavailable.
    #[error("no siblings for {node} in {call_site}")]
    NoSiblings {
        /// The orphaned node.
        node: String,
        /// Operation that needed the sibling list.
        call_site: &'static str,
    },
    /// A wrapped sibling index fell outside the sibling list.
    #[error("sibling index {index} out of bounds for {len} siblings")]
    InvalidNodeIndex {
        /// Computed index.
        index: usize,
        /// Number of siblings.
        len: usize,
    },
    /// Dispatch reached a kind that cannot be handled where it was found.
    #[error("cannot handle {kind:?} node {node} here")]
    UnhandledNodeKind {
        /// Kind of the offending node.
        kind: NodeKind,
        /// The offending node.
        node: String,
    },
    /// Tried to focus a vocabulary root.
    #[error("attempted to hover root node {node}")]
    HoveredRootNode {
        /// The root node.
        node: String,
    },
    /// Tried to focus a node whose kind is never focusable.
    #[error("attempted to hover {kind:?} node {node}")]
    HoveredInvalidKind {
        /// Kind of the offending node.
        kind: NodeKind,
        /// The offending node.
        node: String,
    },
    /// A node handle no longer refers to a live node.
    #[error("{node} is no longer in the tree ({call_site})")]
    StaleNode {
        /// Description of the stale handle.
        node: String,
        /// Operation that used the handle.
        call_site: &'static str,
    },
}
