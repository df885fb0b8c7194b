// Copyright 2025 the Switchscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, mutation, queries.

use alloc::{format, string::String, vec::Vec};

use crate::types::{NodeId, NodeKind, NodeText};

/// Arena holding a vocabulary tree.
///
/// Nodes live in slots addressed by generational [`NodeId`]s. A node owns its
/// ordered children; the parent link is a back-handle used only for lookups.
/// Removing a node removes its whole subtree and makes every affected id stale.
///
/// ## Example
///
/// ```rust
/// use switchscan_tree::{NodeKind, Tree};
///
/// let mut tree = Tree::new();
/// let root = tree.insert(None, NodeKind::Root, "root");
/// let food = tree.insert(Some(root), NodeKind::Branch, "food");
/// let apple = tree.insert(Some(food), NodeKind::Phrase, "apple");
///
/// assert_eq!(tree.parent_of(apple), Some(food));
/// assert_eq!(tree.children_of(root), &[food]);
///
/// tree.remove(food);
/// assert!(!tree.is_alive(apple));
/// ```
#[derive(Clone, Default)]
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
    text: NodeText,
}

impl Node {
    fn new(generation: u32, kind: NodeKind, text: NodeText) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            kind,
            text,
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    ///
    /// A stale `parent` is ignored and the node is inserted as a root.
    pub fn insert(
        &mut self,
        parent: Option<NodeId>,
        kind: NodeKind,
        text: impl Into<NodeText>,
    ) -> NodeId {
        let text = text.into();
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, kind, text));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, kind, text)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node (and its subtree) from the tree.
    ///
    /// Every removed identifier becomes stale immediately.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        self.free_subtree(id);
    }

    /// Unlink `id` from its parent, keeping it (and its subtree) alive as a new root.
    pub fn detach(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
    }

    /// Move `id` to the end of `new_parent`'s children (or make it a root if `None`).
    ///
    /// Moving a node under itself or one of its descendants is ignored.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent
            && (!self.is_alive(p) || p == id || self.is_descendant_of(p, id))
        {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Replace all children of `parent` with freshly inserted nodes.
    ///
    /// The previous children and their subtrees are removed. Returns the new
    /// children in order, or an empty list if `parent` is stale.
    pub fn replace_children<I, T>(&mut self, parent: NodeId, children: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = (NodeKind, T)>,
        T: Into<NodeText>,
    {
        if !self.is_alive(parent) {
            return Vec::new();
        }
        let old = core::mem::take(&mut self.node_mut(parent).children);
        for child in old {
            if self.is_alive(child) {
                self.node_mut(child).parent = None;
                self.free_subtree(child);
            }
        }
        children
            .into_iter()
            .map(|(kind, text)| self.insert(Some(parent), kind, text))
            .collect()
    }

    /// Update the texts of a node.
    pub fn set_text(&mut self, id: NodeId, text: NodeText) {
        if let Some(n) = self.node_opt_mut(id) {
            n.text = text;
        }
    }

    /// Update the kind of a node.
    pub fn set_kind(&mut self, id: NodeId, kind: NodeKind) {
        if let Some(n) = self.node_opt_mut(id) {
            n.kind = kind;
        }
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Returns the kind of a live node.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node_opt(id).map(|n| n.kind)
    }

    /// Returns the texts of a live node.
    pub fn text(&self, id: NodeId) -> Option<&NodeText> {
        self.node_opt(id).map(|n| &n.text)
    }

    /// Returns the parent of a node if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Get the children of a node, or empty slice if node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        match self.node_opt(id) {
            Some(n) => &n.children,
            None => &[],
        }
    }

    /// Returns the first child of a live node.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children_of(id).first().copied()
    }

    /// Get the sibling list a node belongs to (its parent's children, itself included).
    ///
    /// Returns `None` for stale ids and for nodes without a parent.
    pub fn siblings_of(&self, id: NodeId) -> Option<&[NodeId]> {
        let parent = self.parent_of(id)?;
        Some(self.children_of(parent))
    }

    /// Position of a node among its siblings.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        self.siblings_of(id)?.iter().position(|&c| c == id)
    }

    /// Whether a node is the last entry of its sibling list.
    pub fn is_last_sibling(&self, id: NodeId) -> bool {
        self.siblings_of(id)
            .and_then(|s| s.last())
            .is_some_and(|&last| last == id)
    }

    /// Walk parent links up to the topmost ancestor of a live node.
    pub fn root_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        let mut node = id;
        while let Some(parent) = self.parent_of(node) {
            node = parent;
        }
        Some(node)
    }

    /// Returns true if `ancestor` is a strict ancestor of `id`.
    pub fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent_of(id);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent_of(p);
        }
        false
    }

    /// Short human-readable description of a node for diagnostics.
    pub fn describe(&self, id: NodeId) -> String {
        match self.node_opt(id) {
            Some(n) => format!("{:?} {:?} ({}v{})", n.kind, n.text.display, id.0, id.1),
            None => format!("stale node ({}v{})", id.0, id.1),
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Whether the tree holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- internals ---

    /// Access a node; panics if `id` is stale.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for child in children {
            if self.is_alive(child) {
                self.free_subtree(child);
            }
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> (Tree, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = Tree::new();
        let root = tree.insert(None, NodeKind::Root, "root");
        let a = tree.insert(Some(root), NodeKind::Phrase, "a");
        let b = tree.insert(Some(root), NodeKind::Branch, "b");
        let b1 = tree.insert(Some(b), NodeKind::Phrase, "b1");
        (tree, root, a, b, b1)
    }

    #[test]
    fn removed_handles_stay_stale_after_slot_reuse() {
        let (mut tree, root, a, _b, _b1) = sample();
        tree.remove(a);
        assert!(!tree.is_alive(a));
        assert_eq!(tree.kind(a), None);

        // Same text and likely the same slot, but a different node.
        let again = tree.insert(Some(root), NodeKind::Phrase, "a");
        assert!(tree.is_alive(again));
        assert!(!tree.is_alive(a));
        assert_ne!(a, again);
        if a.0 == again.0 {
            assert!(again.1 > a.1, "reused slot must bump its generation");
        }
    }

    #[test]
    fn remove_frees_whole_subtree() {
        let (mut tree, root, a, b, b1) = sample();
        tree.remove(b);
        assert!(!tree.is_alive(b));
        assert!(!tree.is_alive(b1));
        assert_eq!(tree.children_of(root), &[a]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn parent_of_respects_liveness_and_roots() {
        let (mut tree, root, a, _b, _b1) = sample();
        assert_eq!(tree.parent_of(root), None);
        assert_eq!(tree.parent_of(a), Some(root));
        tree.remove(a);
        assert_eq!(tree.parent_of(a), None);
    }

    #[test]
    fn detach_keeps_subtree_alive_without_parent() {
        let (mut tree, root, a, b, b1) = sample();
        tree.detach(b);
        assert!(tree.is_alive(b));
        assert!(tree.is_alive(b1));
        assert_eq!(tree.parent_of(b), None);
        assert_eq!(tree.children_of(root), &[a]);
        assert_eq!(tree.root_of(b1), Some(b));
        assert!(!tree.is_descendant_of(b1, root));
    }

    #[test]
    fn reparent_moves_to_end_and_rejects_cycles() {
        let (mut tree, root, a, b, b1) = sample();
        tree.reparent(a, Some(b));
        assert_eq!(tree.children_of(b), &[b1, a]);
        assert_eq!(tree.children_of(root), &[b]);

        // Moving a node below its own descendant is ignored.
        tree.reparent(b, Some(b1));
        assert_eq!(tree.parent_of(b), Some(root));
    }

    #[test]
    fn siblings_and_indices() {
        let (tree, root, a, b, b1) = sample();
        assert_eq!(tree.siblings_of(a), Some(&[a, b][..]));
        assert_eq!(tree.siblings_of(root), None);
        assert_eq!(tree.index_in_parent(b), Some(1));
        assert!(tree.is_last_sibling(b));
        assert!(!tree.is_last_sibling(a));
        assert!(tree.is_last_sibling(b1));
        assert_eq!(tree.first_child(root), Some(a));
        assert_eq!(tree.first_child(a), None);
    }

    #[test]
    fn replace_children_discards_previous_generation() {
        let mut tree = Tree::new();
        let spelling = tree.insert(None, NodeKind::Spelling, "spell");
        let first = tree.replace_children(
            spelling,
            vec![(NodeKind::Letter, "a"), (NodeKind::Letter, "b")],
        );
        assert_eq!(first.len(), 2);

        let second = tree.replace_children(spelling, vec![(NodeKind::Clear, "clear")]);
        assert!(first.iter().all(|&id| !tree.is_alive(id)));
        assert_eq!(tree.children_of(spelling), &second[..]);
        assert_eq!(tree.kind(second[0]), Some(NodeKind::Clear));
    }

    #[test]
    fn replace_children_on_stale_parent_is_empty() {
        let mut tree = Tree::new();
        let spelling = tree.insert(None, NodeKind::Spelling, "spell");
        tree.remove(spelling);
        let created = tree.replace_children(spelling, vec![(NodeKind::Letter, "a")]);
        assert!(created.is_empty());
        assert!(tree.is_empty());
    }

    #[test]
    fn insert_under_stale_parent_creates_root() {
        let mut tree = Tree::new();
        let gone = tree.insert(None, NodeKind::Branch, "gone");
        tree.remove(gone);
        let orphan = tree.insert(Some(gone), NodeKind::Phrase, "orphan");
        assert_eq!(tree.parent_of(orphan), None);
    }

    #[test]
    fn set_text_and_kind_update_live_nodes_only() {
        let (mut tree, _root, a, _b, _b1) = sample();
        tree.set_text(
            a,
            NodeText {
                display: "Hi".into(),
                cue: "greeting".into(),
                speak: "Hello there".into(),
            },
        );
        tree.set_kind(a, NodeKind::Branch);
        assert_eq!(tree.text(a).map(|t| t.speak.as_str()), Some("Hello there"));
        assert_eq!(tree.kind(a), Some(NodeKind::Branch));

        tree.remove(a);
        tree.set_kind(a, NodeKind::Phrase);
        assert_eq!(tree.kind(a), None);
    }

    #[test]
    fn describe_reports_stale_nodes() {
        let (mut tree, _root, a, _b, _b1) = sample();
        assert!(tree.describe(a).contains("Phrase"));
        tree.remove(a);
        assert!(tree.describe(a).starts_with("stale node"));
    }
}
