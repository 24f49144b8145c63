// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Arena-backed splay tree
//!
//! Nodes live in a `Vec` arena and link to each other by index, so the
//! parent back-reference needed for splaying is a plain copyable id rather
//! than a shared-ownership cycle. The arena only grows: no operation removes
//! nodes, so every minted id stays valid for the life of the tree.

use std::cmp::Ordering;

/// Index of a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which child slot of a parent a node occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Self-adjusting binary search tree with unique, totally ordered keys
///
/// Every successful [`search`](Self::search) and every [`insert`](Self::insert)
/// of a new key splays the touched node to the root, so recently accessed
/// keys are cheap to reach again. Inserting a key that already exists is a
/// no-op: the stored value is kept and the tree is not restructured
/// (insert-if-absent, not upsert).
///
/// There is no per-key removal; the tree grows until dropped as a whole.
///
/// # Examples
///
/// ```
/// use semiocache::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(5u64, "five");
/// tree.insert(3, "three");
///
/// assert_eq!(tree.search(&5), Some(&"five"));
/// assert_eq!(tree.root_key(), Some(&5));
/// assert_eq!(tree.search(&7), None);
/// ```
#[derive(Debug, Clone)]
pub struct SplayTree<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
}

impl<K: Ord, V> SplayTree<K, V> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Insert a key if absent, then splay the new node to the root
    ///
    /// If `key` is already present the call returns without touching the
    /// stored value or the tree structure.
    pub fn insert(&mut self, key: K, value: V) {
        let Some(mut current) = self.root else {
            let id = self.alloc(key, value, None);
            self.root = Some(id);
            return;
        };

        let new_id = loop {
            let side = match key.cmp(&self.node(current).key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return,
            };
            match self.child(current, side) {
                Some(next) => current = next,
                None => {
                    let id = self.alloc(key, value, Some(current));
                    self.set_child(current, side, Some(id));
                    break id;
                }
            }
        };

        self.splay(new_id);
    }

    /// Look up a key, splaying it to the root on a hit
    ///
    /// A miss returns `None` and leaves the tree untouched.
    pub fn search(&mut self, key: &K) -> Option<&V> {
        let mut current = self.root?;
        loop {
            match key.cmp(&self.node(current).key) {
                Ordering::Less => current = self.node(current).left?,
                Ordering::Greater => current = self.node(current).right?,
                Ordering::Equal => break,
            }
        }

        self.splay(current);
        Some(&self.node(current).value)
    }

    /// Check membership without restructuring the tree
    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            match key.cmp(&self.node(id).key) {
                Ordering::Less => current = self.node(id).left,
                Ordering::Greater => current = self.node(id).right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Key at the root, if any
    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|id| &self.node(id).key)
    }

    /// Number of keys in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All keys in ascending order
    pub fn keys_in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left;
            }
            if let Some(id) = stack.pop() {
                keys.push(&self.node(id).key);
                current = self.node(id).right;
            }
        }

        keys
    }

    /// Splay a node to the root via zig, zig-zig, and zig-zag steps
    fn splay(&mut self, x: NodeId) {
        while let Some((parent, x_side)) = self.branch(x) {
            match self.branch(parent) {
                // Zig: the parent is the root, one rotation finishes
                None => self.rotate_up(x),
                // Zig-zig: same side twice, the parent rotates first
                Some((_, parent_side)) if parent_side == x_side => {
                    self.rotate_up(parent);
                    self.rotate_up(x);
                }
                // Zig-zag: opposite sides, x rotates through both levels
                Some(_) => {
                    self.rotate_up(x);
                    self.rotate_up(x);
                }
            }
        }
    }

    /// Rotate `x` one level up, preserving in-order traversal
    ///
    /// Relinks three spots: x's inner subtree moves to the former parent,
    /// the former parent becomes x's child, and x takes the parent's place
    /// under the grandparent (or becomes the root). Each relink updates the
    /// matching parent back-reference.
    fn rotate_up(&mut self, x: NodeId) {
        let Some((parent, side)) = self.branch(x) else {
            return;
        };
        let grandparent = self.branch(parent);

        let inner = self.child(x, side.opposite());
        self.set_child(parent, side, inner);
        if let Some(moved) = inner {
            self.node_mut(moved).parent = Some(parent);
        }

        self.set_child(x, side.opposite(), Some(parent));
        self.node_mut(parent).parent = Some(x);

        match grandparent {
            Some((g, g_side)) => {
                self.set_child(g, g_side, Some(x));
                self.node_mut(x).parent = Some(g);
            }
            None => {
                self.root = Some(x);
                self.node_mut(x).parent = None;
            }
        }
    }

    /// Parent of a node together with the side the node hangs on
    fn branch(&self, id: NodeId) -> Option<(NodeId, Side)> {
        let parent = self.node(id).parent?;
        let side = if self.node(parent).left == Some(id) {
            Side::Left
        } else {
            Side::Right
        };
        Some((parent, side))
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        let node = self.node(id);
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        let node = self.node_mut(id);
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }

    fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.index()]
    }

    fn alloc(&mut self, key: K, value: V, parent: Option<NodeId>) -> NodeId {
        debug_assert!(self.nodes.len() < u32::MAX as usize);
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            key,
            value,
            parent,
            left: None,
            right: None,
        });
        id
    }
}

impl<K: Ord, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
