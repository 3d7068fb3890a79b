use boxnav_core::{BoxId, Mesh, Point, Rect};

/// Read-only view of a box navigation mesh, as needed by the searches.
///
/// Box ids must be dense: every id in `0..box_count()` is valid.
pub trait NavGraph {
    /// Number of boxes.
    fn box_count(&self) -> usize;

    /// Bounds of box `id`.
    fn rect(&self, id: BoxId) -> Rect;

    /// Boxes bordering `id`. Adjacency must be symmetric.
    fn neighbors(&self, id: BoxId) -> &[BoxId];

    /// The box containing `p`, if any. Must return the same box for the same
    /// point on every call.
    fn locate(&self, p: Point) -> Option<BoxId>;
}

impl NavGraph for Mesh {
    #[inline]
    fn box_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn rect(&self, id: BoxId) -> Rect {
        Mesh::rect(self, id)
    }

    #[inline]
    fn neighbors(&self, id: BoxId) -> &[BoxId] {
        Mesh::neighbors(self, id)
    }

    #[inline]
    fn locate(&self, p: Point) -> Option<BoxId> {
        Mesh::locate(self, p)
    }
}
