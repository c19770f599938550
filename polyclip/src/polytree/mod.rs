//! Output polygon tree: closed boolean/offset results arranged by containment.
//!
//! Nodes live in a flat arena and reference each other by index. A child is always added after
//! its parent so parent indexes are strictly smaller than child indexes, which keeps the owner
//! relation acyclic.

use crate::{
    core::traits::Coord,
    path::{Path, Paths, area},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single node of a [PolyTree].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PolyPath<T> {
    polygon: Path<T>,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl<T> PolyPath<T> {
    /// The node's closed path (empty for the root).
    #[inline]
    pub fn polygon(&self) -> &Path<T> {
        &self.polygon
    }

    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[usize] {
        &self.children
    }
}

/// Hierarchy of closed result paths. Node 0 is the root and holds no polygon; its children are
/// outer rings, their children holes, the holes' children islands, and so on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PolyTree<T> {
    nodes: Vec<PolyPath<T>>,
}

/// Poly tree in the exact integer coordinate domain.
pub type PolyTree64 = PolyTree<i64>;

/// Poly tree in the real coordinate domain.
pub type PolyTreeD = PolyTree<f64>;

impl<T> Default for PolyTree<T>
where
    T: Coord,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PolyTree<T>
where
    T: Coord,
{
    /// Index of the root node.
    pub const ROOT: usize = 0;

    /// Create a tree holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![PolyPath {
                polygon: Vec::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Remove every node except the root.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[Self::ROOT].children.clear();
    }

    /// Add `polygon` as a child of `parent`, returning the new node's index.
    pub(crate) fn add_child(&mut self, parent: usize, polygon: Path<T>) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(PolyPath {
            polygon,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(idx);
        idx
    }

    #[inline]
    pub fn root(&self) -> &PolyPath<T> {
        &self.nodes[Self::ROOT]
    }

    #[inline]
    pub fn node(&self, idx: usize) -> &PolyPath<T> {
        &self.nodes[idx]
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&PolyPath<T>> {
        self.nodes.get(idx)
    }

    #[inline]
    pub fn polygon(&self, idx: usize) -> &Path<T> {
        &self.nodes[idx].polygon
    }

    #[inline]
    pub fn children(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].children
    }

    #[inline]
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.nodes[idx].parent
    }

    /// Nesting depth of a node: 0 for the root, 1 for outer rings, 2 for their holes, etc.
    pub fn level(&self, idx: usize) -> usize {
        let mut level = 0;
        let mut curr = self.nodes[idx].parent;
        while let Some(p) = curr {
            level += 1;
            curr = self.nodes[p].parent;
        }
        level
    }

    /// Returns true for holes (even, non-zero levels).
    #[inline]
    pub fn is_hole(&self, idx: usize) -> bool {
        let level = self.level(idx);
        level != 0 && level % 2 == 0
    }

    /// Number of polygon nodes (the root is not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Depth first iteration over all polygon node indexes (parents before children).
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let mut stack: Vec<usize> = self.nodes[Self::ROOT].children.iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let idx = stack.pop()?;
            stack.extend(self.nodes[idx].children.iter().rev().copied());
            Some(idx)
        })
    }

    /// Sum of the signed areas of every polygon in the tree (holes subtract).
    pub fn area(&self) -> f64 {
        self.nodes.iter().skip(1).map(|n| area(&n.polygon)).sum()
    }

    /// Flatten into a path set in depth first order.
    pub fn to_paths(&self) -> Paths<T> {
        self.iter().map(|idx| self.nodes[idx].polygon.clone()).collect()
    }

    /// Build a tree with the same shape whose polygons are mapped by `f`.
    pub(crate) fn map_polygons<U, F>(&self, mut f: F) -> PolyTree<U>
    where
        U: Coord,
        F: FnMut(&Path<T>) -> Path<U>,
    {
        PolyTree {
            nodes: self
                .nodes
                .iter()
                .map(|n| PolyPath {
                    polygon: f(&n.polygon),
                    parent: n.parent,
                    children: n.children.clone(),
                })
                .collect(),
        }
    }
}
