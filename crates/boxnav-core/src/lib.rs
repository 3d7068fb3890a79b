//! **boxnav-core** — geometry and mesh types for box navigation meshes.
//!
//! A navigation mesh here is a set of axis-aligned boxes covering the
//! walkable area, plus the adjacency between boxes that share an edge. This
//! crate provides the geometry primitives ([`Point`], [`Rect`], [`Segment`],
//! [`shared_edges`]) and the immutable [`Mesh`] consumed by the search
//! algorithms in `boxnav-paths`.

pub mod error;
pub mod geom;
pub mod mesh;

pub use error::{GeometryIssue, MeshError};
pub use geom::{Point, Rect, Segment, SharedEdges, distance, shared_edges};
pub use mesh::{BoxId, Mesh};
