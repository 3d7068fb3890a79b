use std::fmt;

use crate::geom::Rect;
use crate::mesh::BoxId;

/// Errors that can occur when building a [`Mesh`](crate::Mesh).
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A box has a NaN or infinite bound.
    NonFiniteBounds { index: usize, rect: Rect },
    /// A box has a minimum bound above its maximum on some axis.
    InvertedBounds { index: usize, rect: Rect },
    /// The adjacency table does not have one entry per box.
    AdjacencyLength { boxes: usize, lists: usize },
    /// A neighbor index does not name a box of the mesh.
    NeighborOutOfRange { from: usize, to: usize, len: usize },
    /// A box lists itself as a neighbor.
    SelfAdjacent(usize),
    /// A neighbor appears twice in the same list.
    DuplicateNeighbor { from: usize, to: usize },
    /// `from` lists `to` as a neighbor but not the other way around.
    Asymmetric { from: usize, to: usize },
    /// An adjacency entry refers to a box that is not in the box list.
    UnknownRect(Rect),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBounds { index, rect } => {
                write!(f, "mesh: box {index} has non-finite bounds {rect}")
            }
            Self::InvertedBounds { index, rect } => {
                write!(f, "mesh: box {index} has inverted bounds {rect}")
            }
            Self::AdjacencyLength { boxes, lists } => {
                write!(f, "mesh: {boxes} boxes but {lists} adjacency lists")
            }
            Self::NeighborOutOfRange { from, to, len } => {
                write!(f, "mesh: box {from} lists neighbor {to} but there are only {len} boxes")
            }
            Self::SelfAdjacent(i) => write!(f, "mesh: box {i} is adjacent to itself"),
            Self::DuplicateNeighbor { from, to } => {
                write!(f, "mesh: box {from} lists neighbor {to} more than once")
            }
            Self::Asymmetric { from, to } => {
                write!(f, "mesh: box {from} lists {to} as a neighbor but {to} does not list {from}")
            }
            Self::UnknownRect(r) => write!(f, "mesh: adjacency refers to unknown box {r}"),
        }
    }
}

impl std::error::Error for MeshError {}

/// A geometric inconsistency found by [`Mesh::geometry_issues`](crate::Mesh::geometry_issues).
///
/// These do not prevent searching: adjacent boxes without a shared edge are
/// crossed through the neighbor's midpoint instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryIssue {
    /// Two adjacent boxes have no shared edge of positive length.
    NoSharedEdge(BoxId, BoxId),
    /// Two boxes have intersecting interiors.
    Overlap(BoxId, BoxId),
}

impl fmt::Display for GeometryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSharedEdge(a, b) => write!(f, "boxes {a} and {b} are adjacent but share no edge"),
            Self::Overlap(a, b) => write!(f, "boxes {a} and {b} overlap"),
        }
    }
}
