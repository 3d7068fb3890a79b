//! Pathfinding over box navigation meshes.
//!
//! Two strategies search a [`Mesh`](boxnav_core::Mesh) (or any [`NavGraph`])
//! from a source point to a destination point:
//!
//! - **Breadth-first** ([`Algorithm::BreadthFirst`]): unweighted reachability
//!   over box adjacency, returning the chain of box midpoints.
//! - **Bidirectional A\*** ([`Algorithm::Bidirectional`]): two best-first
//!   searches grown from both ends, costed by the distance between shared-edge
//!   midpoints and guided by the straight-line distance to the other end.
//!
//! Queries go through [`find_path`] or a configured [`Pathfinder`] and return a
//! [`SearchResult`] holding the point path and the boxes explored on the way.
//! Search state is allocated per query, so a mesh can be shared between
//! threads freely.
//!
//! ```
//! use boxnav_core::{Mesh, Point, Rect};
//! use boxnav_paths::{Algorithm, find_path};
//!
//! let mesh = Mesh::from_pairs(
//!     vec![Rect::new(0.0, 1.0, 0.0, 1.0), Rect::new(1.0, 2.0, 0.0, 1.0)],
//!     &[(0, 1)],
//! )
//! .unwrap();
//! let res = find_path(Point::new(0.5, 0.5), Point::new(1.5, 0.5), &mesh, Algorithm::Bidirectional);
//! assert_eq!(res.path, vec![Point::new(0.5, 0.5), Point::new(1.0, 0.5), Point::new(1.5, 0.5)]);
//! ```

mod bfs;
mod bidir;
mod config;
mod error;
mod record;
mod search;
mod traits;

pub use config::{Algorithm, FrontierOrder, PathConfig};
pub use error::{Endpoint, ParseAlgorithmError, PathError};
pub use search::{
    Pathfinder, SearchResult, SearchStatus, find_path, locate_box, path_length,
};
pub use traits::NavGraph;
