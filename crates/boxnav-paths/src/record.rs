//! Per-search bookkeeping shared by both engines.

use std::cmp::Ordering;

use boxnav_core::{BoxId, Point};

/// Parent sentinel for the start node of a search.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Which way a predecessor chain is read when turned into a path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Parents point back toward the start: the chain is reversed so the
    /// result runs start → box.
    Forward,
    /// Parents point toward the goal: the chain is already box → goal.
    Backward,
}

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) entry: Point,
    pub(crate) reached: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: NO_PARENT,
            entry: Point::ZERO,
            reached: false,
            closed: false,
        }
    }
}

/// Dense node table for one search direction of one query.
///
/// Breadth-first search keeps a node per box (indexed by [`BoxId::index`]);
/// the bidirectional search keeps one per directed crossing between boxes.
/// Parents are indices into the same table.
pub(crate) struct SearchRecord {
    nodes: Vec<Node>,
}

impl SearchRecord {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
        }
    }

    /// Mark `idx` as the start of the search, entered at `entry` with zero cost.
    pub(crate) fn seed(&mut self, idx: usize, entry: Point) {
        let n = &mut self.nodes[idx];
        n.g = 0.0;
        n.parent = NO_PARENT;
        n.entry = entry;
        n.reached = true;
    }

    /// Record `idx` as reached from `parent` without cost information.
    pub(crate) fn link(&mut self, idx: usize, parent: usize) {
        let n = &mut self.nodes[idx];
        n.parent = parent;
        n.reached = true;
    }

    /// Record a move into `idx` if `g` strictly improves on the best known
    /// cost. Returns whether the node was updated.
    pub(crate) fn relax(&mut self, idx: usize, parent: usize, g: f64, entry: Point) -> bool {
        let n = &mut self.nodes[idx];
        if n.reached && g >= n.g {
            return false;
        }
        n.g = g;
        n.parent = parent;
        n.entry = entry;
        n.reached = true;
        true
    }

    #[inline]
    pub(crate) fn reached(&self, idx: usize) -> bool {
        self.nodes[idx].reached
    }

    #[inline]
    pub(crate) fn closed(&self, idx: usize) -> bool {
        self.nodes[idx].closed
    }

    #[inline]
    pub(crate) fn close(&mut self, idx: usize) {
        self.nodes[idx].closed = true;
    }

    #[inline]
    pub(crate) fn g(&self, idx: usize) -> f64 {
        self.nodes[idx].g
    }

    #[inline]
    pub(crate) fn entry(&self, idx: usize) -> Point {
        self.nodes[idx].entry
    }

    #[inline]
    pub(crate) fn parent(&self, idx: usize) -> Option<usize> {
        match self.nodes[idx].parent {
            NO_PARENT => None,
            p => Some(p),
        }
    }

    /// Walk the predecessor chain from `from` to the start node and map every
    /// node to a point.
    ///
    /// `from` must have been reached.
    pub(crate) fn walk(
        &self,
        from: usize,
        direction: Direction,
        mut point: impl FnMut(usize) -> Point,
    ) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(from);
        while let Some(idx) = cur {
            path.push(point(idx));
            cur = self.parent(idx);
        }
        if direction == Direction::Forward {
            path.reverse();
        }
        path
    }
}

/// Boxes touched by a search, in discovery order, without duplicates.
pub(crate) struct Explored {
    seen: Vec<bool>,
    order: Vec<BoxId>,
}

impl Explored {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            seen: vec![false; len],
            order: Vec::new(),
        }
    }

    pub(crate) fn mark(&mut self, id: BoxId) {
        if !self.seen[id.0] {
            self.seen[id.0] = true;
            self.order.push(id);
        }
    }

    pub(crate) fn into_vec(self) -> Vec<BoxId> {
        self.order
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, then the
        // lowest node index.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Append `p` unless it repeats the last point.
pub(crate) fn push_distinct(path: &mut Vec<Point>, p: Point) {
    if path.last() != Some(&p) {
        path.push(p);
    }
}
