// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File-tree node model.
//!
//! Nodes live in an arena owned by the [`Forest`]; parents refer to children
//! by id and children keep a non-owning id back-reference used only for path
//! reconstruction. Child names are unique within a parent: attaching an
//! already-present name returns the existing child instead of duplicating
//! it, and attaching anything flips the parent to a directory.

use std::path::PathBuf;

/// Index of a node within its forest's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One file or directory in the parsed tree.
#[derive(Debug)]
pub struct Node {
    /// Sanitized path segment, free of separators and decorations.
    pub name: String,
    /// True for files. Forced to false the moment a child is attached.
    pub is_leaf: bool,
    /// Annotation captured from the source line, if any.
    pub comment: Option<String>,
    /// Ordered children, unique by name.
    pub children: Vec<NodeId>,
    /// Back-reference for path reconstruction; `None` for forest roots.
    pub parent: Option<NodeId>,
}

/// Ordered collection of root nodes plus the arena backing them.
#[derive(Debug, Default)]
pub struct Forest {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Forest {
    pub fn new() -> Forest {
        Forest::default()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Add a new root node.
    pub fn push_root(&mut self, name: String, is_leaf: bool, comment: Option<String>) -> NodeId {
        let id = self.alloc(name, is_leaf, comment, None);
        self.roots.push(id);
        id
    }

    /// Find an existing root by name.
    pub fn find_root(&self, name: &str) -> Option<NodeId> {
        self.roots
            .iter()
            .copied()
            .find(|&id| self.node(id).name == name)
    }

    /// Find a direct child of `parent` by name.
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent)
            .children
            .iter()
            .copied()
            .find(|&id| self.node(id).name == name)
    }

    /// Attach a child to `parent`, reusing an existing same-named child.
    ///
    /// Returns the child id. The parent is forced to non-leaf either way.
    /// When the child already exists, `is_leaf` is not overwritten (a node
    /// that has grown children stays a directory) and a missing comment is
    /// backfilled.
    pub fn attach_child(
        &mut self,
        parent: NodeId,
        name: String,
        is_leaf: bool,
        comment: Option<String>,
    ) -> NodeId {
        self.node_mut(parent).is_leaf = false;

        if let Some(existing) = self.find_child(parent, &name) {
            let node = self.node_mut(existing);
            if node.comment.is_none() {
                node.comment = comment;
            }
            return existing;
        }

        let id = self.alloc(name, is_leaf, comment, Some(parent));
        self.node_mut(parent).children.push(id);
        id
    }

    /// Path of a node relative to its forest root, built by walking the
    /// parent back-references.
    pub fn path(&self, id: NodeId) -> PathBuf {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(c) = current {
            let node = self.node(c);
            segments.push(node.name.as_str());
            current = node.parent;
        }
        segments.iter().rev().collect()
    }

    /// Depth-first walk over every node, roots first, in document order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        order.into_iter()
    }

    fn alloc(
        &mut self,
        name: String,
        is_leaf: bool,
        comment: Option<String>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            is_leaf,
            comment,
            children: Vec::new(),
            parent,
        });
        id
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
