//! The navigation [`Mesh`]: boxes plus their adjacency.

use std::fmt;

use crate::error::{GeometryIssue, MeshError};
use crate::geom::{Point, Rect, shared_edges};

/// Index of a box inside a [`Mesh`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct BoxId(pub usize);

impl BoxId {
    /// The raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable set of boxes and the symmetric adjacency between them.
///
/// Construction checks the structural invariants (finite bounds, indices in
/// range, no self loops or duplicates, symmetry) and fails with a
/// [`MeshError`] otherwise. Geometric consistency is not enforced; see
/// [`geometry_issues`](Self::geometry_issues).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MeshData", into = "MeshData")
)]
pub struct Mesh {
    boxes: Vec<Rect>,
    adjacency: Vec<Vec<BoxId>>,
}

impl Mesh {
    /// Build a mesh from its boxes and one neighbor list per box.
    ///
    /// `adjacency[i]` holds the indices of the boxes bordering `boxes[i]`.
    pub fn new(boxes: Vec<Rect>, adjacency: Vec<Vec<usize>>) -> Result<Self, MeshError> {
        if boxes.len() != adjacency.len() {
            return Err(MeshError::AdjacencyLength {
                boxes: boxes.len(),
                lists: adjacency.len(),
            });
        }
        for (index, rect) in boxes.iter().enumerate() {
            if !rect.is_finite() {
                return Err(MeshError::NonFiniteBounds { index, rect: *rect });
            }
            if rect.min_x > rect.max_x || rect.min_y > rect.max_y {
                return Err(MeshError::InvertedBounds { index, rect: *rect });
            }
        }

        let len = boxes.len();
        for (from, list) in adjacency.iter().enumerate() {
            for (k, &to) in list.iter().enumerate() {
                if to >= len {
                    return Err(MeshError::NeighborOutOfRange { from, to, len });
                }
                if to == from {
                    return Err(MeshError::SelfAdjacent(from));
                }
                if list[..k].contains(&to) {
                    return Err(MeshError::DuplicateNeighbor { from, to });
                }
            }
        }
        for (from, list) in adjacency.iter().enumerate() {
            for &to in list {
                if !adjacency[to].contains(&from) {
                    return Err(MeshError::Asymmetric { from, to });
                }
            }
        }

        let adjacency = adjacency
            .into_iter()
            .map(|list| list.into_iter().map(BoxId).collect())
            .collect();
        Ok(Self { boxes, adjacency })
    }

    /// Build a mesh from an undirected list of adjacent box pairs.
    ///
    /// Each pair is recorded in both directions; a pair listed twice (in
    /// either order) is an error.
    pub fn from_pairs(boxes: Vec<Rect>, pairs: &[(usize, usize)]) -> Result<Self, MeshError> {
        let mut adjacency = vec![Vec::new(); boxes.len()];
        for &(a, b) in pairs {
            let len = boxes.len();
            if a >= len {
                return Err(MeshError::NeighborOutOfRange { from: b, to: a, len });
            }
            if b >= len {
                return Err(MeshError::NeighborOutOfRange { from: a, to: b, len });
            }
            adjacency[a].push(b);
            if a != b {
                adjacency[b].push(a);
            }
        }
        Self::new(boxes, adjacency)
    }

    /// Build a mesh from a box list and a box → neighbors mapping keyed by
    /// box value.
    ///
    /// Boxes missing from the mapping have no neighbors. When the box list
    /// holds equal boxes, the first one is used.
    pub fn from_rect_adjacency<I>(boxes: Vec<Rect>, adjacency: I) -> Result<Self, MeshError>
    where
        I: IntoIterator<Item = (Rect, Vec<Rect>)>,
    {
        let position = |r: &Rect| {
            boxes
                .iter()
                .position(|b| b == r)
                .ok_or(MeshError::UnknownRect(*r))
        };
        let mut lists = vec![Vec::new(); boxes.len()];
        for (rect, neighbors) in adjacency {
            let from = position(&rect)?;
            for n in &neighbors {
                lists[from].push(position(n)?);
            }
        }
        Self::new(boxes, lists)
    }

    /// Number of boxes.
    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the mesh has no boxes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// All boxes, in mesh order.
    #[inline]
    pub fn boxes(&self) -> &[Rect] {
        &self.boxes
    }

    /// Iterate over all box ids in mesh order.
    pub fn ids(&self) -> impl Iterator<Item = BoxId> + use<> {
        (0..self.boxes.len()).map(BoxId)
    }

    /// The box with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this mesh.
    #[inline]
    pub fn rect(&self, id: BoxId) -> Rect {
        self.boxes[id.0]
    }

    /// The box with the given id, or `None` if out of range.
    #[inline]
    pub fn get(&self, id: BoxId) -> Option<Rect> {
        self.boxes.get(id.0).copied()
    }

    /// Boxes bordering `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this mesh.
    #[inline]
    pub fn neighbors(&self, id: BoxId) -> &[BoxId] {
        &self.adjacency[id.0]
    }

    /// Whether `a` lists `b` as a neighbor.
    #[inline]
    pub fn are_adjacent(&self, a: BoxId, b: BoxId) -> bool {
        self.adjacency
            .get(a.0)
            .is_some_and(|list| list.contains(&b))
    }

    /// Find the first box, in mesh order, that contains `p` (borders
    /// included).
    ///
    /// A point on a border shared by several boxes always resolves to the
    /// same box.
    pub fn locate(&self, p: Point) -> Option<BoxId> {
        self.boxes.iter().position(|r| r.contains(p)).map(BoxId)
    }

    /// Id of the first box equal to `rect`.
    pub fn position_of(&self, rect: Rect) -> Option<BoxId> {
        self.boxes.iter().position(|r| *r == rect).map(BoxId)
    }

    /// Report adjacencies without a positive-length shared edge and boxes
    /// with overlapping interiors. Each unordered pair is reported once.
    pub fn geometry_issues(&self) -> Vec<GeometryIssue> {
        let mut issues = Vec::new();
        for (i, list) in self.adjacency.iter().enumerate() {
            for &j in list {
                if i < j.0 && shared_edges(self.boxes[i], self.boxes[j.0]).is_empty() {
                    issues.push(GeometryIssue::NoSharedEdge(BoxId(i), j));
                }
            }
        }
        for i in 0..self.boxes.len() {
            for j in i + 1..self.boxes.len() {
                if self.boxes[i].overlaps(self.boxes[j]) {
                    issues.push(GeometryIssue::Overlap(BoxId(i), BoxId(j)));
                }
            }
        }
        issues
    }
}

/// Plain serialized form of a [`Mesh`].
#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct MeshData {
    boxes: Vec<Rect>,
    adjacency: Vec<Vec<usize>>,
}

#[cfg(feature = "serde")]
impl TryFrom<MeshData> for Mesh {
    type Error = MeshError;

    fn try_from(data: MeshData) -> Result<Self, MeshError> {
        Mesh::new(data.boxes, data.adjacency)
    }
}

#[cfg(feature = "serde")]
impl From<Mesh> for MeshData {
    fn from(mesh: Mesh) -> Self {
        MeshData {
            boxes: mesh.boxes,
            adjacency: mesh
                .adjacency
                .into_iter()
                .map(|list| list.into_iter().map(BoxId::index).collect())
                .collect(),
        }
    }
}
