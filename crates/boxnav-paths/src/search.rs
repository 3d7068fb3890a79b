//! Query entry points and the [`SearchResult`] they return.

use boxnav_core::{BoxId, Point, distance};

use crate::config::{Algorithm, PathConfig};
use crate::error::{Endpoint, PathError};
use crate::traits::NavGraph;

/// How a path query ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SearchStatus {
    /// A path was found.
    Found,
    /// The search space was exhausted without connecting the endpoints.
    NoPath,
    /// An endpoint lies outside every mesh box.
    NotInMesh { endpoint: Endpoint, point: Point },
}

/// Outcome of a path query.
///
/// Both strategies report every failure here rather than as an `Err`: the
/// path is empty unless `status` is [`SearchStatus::Found`], and `explored`
/// always holds the boxes touched before the search stopped. Use
/// [`into_path`](Self::into_path) to turn failures into a [`PathError`].
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Points from source to destination.
    pub path: Vec<Point>,
    /// Boxes reached by the search, in discovery order.
    pub explored: Vec<BoxId>,
    pub status: SearchStatus,
}

impl SearchResult {
    pub(crate) fn found(path: Vec<Point>, explored: Vec<BoxId>) -> Self {
        Self {
            path,
            explored,
            status: SearchStatus::Found,
        }
    }

    pub(crate) fn no_path(explored: Vec<BoxId>) -> Self {
        Self {
            path: Vec::new(),
            explored,
            status: SearchStatus::NoPath,
        }
    }

    pub(crate) fn not_in_mesh(endpoint: Endpoint, point: Point) -> Self {
        Self {
            path: Vec::new(),
            explored: Vec::new(),
            status: SearchStatus::NotInMesh { endpoint, point },
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Total length of the path.
    #[inline]
    pub fn length(&self) -> f64 {
        path_length(&self.path)
    }

    /// The path, or the reason there is none.
    pub fn into_path(self) -> Result<Vec<Point>, PathError> {
        match self.status {
            SearchStatus::Found => Ok(self.path),
            SearchStatus::NoPath => Err(PathError::NoPath),
            SearchStatus::NotInMesh { endpoint, point } => Err(PathError::PointNotInMesh {
                point,
                endpoint: Some(endpoint),
            }),
        }
    }
}

/// Sum of the distances between consecutive points.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Find the box containing `point`.
pub fn locate_box<G: NavGraph>(point: Point, graph: &G) -> Result<BoxId, PathError> {
    graph.locate(point).ok_or(PathError::PointNotInMesh {
        point,
        endpoint: None,
    })
}

/// Locate both endpoints of a query.
pub(crate) fn locate_endpoints<G: NavGraph>(
    graph: &G,
    source: Point,
    destination: Point,
) -> Result<(BoxId, BoxId), SearchResult> {
    let Some(src) = graph.locate(source) else {
        log::debug!("source {source} is outside the mesh");
        return Err(SearchResult::not_in_mesh(Endpoint::Source, source));
    };
    let Some(dst) = graph.locate(destination) else {
        log::debug!("destination {destination} is outside the mesh");
        return Err(SearchResult::not_in_mesh(Endpoint::Destination, destination));
    };
    Ok((src, dst))
}

/// Runs path queries with a fixed [`PathConfig`].
///
/// A `Pathfinder` holds no search state: every query allocates its own
/// records, so one mesh can be searched from many threads at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pathfinder {
    config: PathConfig,
}

impl Pathfinder {
    /// Create a pathfinder with the given configuration.
    pub fn new(config: PathConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Search for a path from `source` to `destination` through `graph`.
    pub fn find_path<G: NavGraph>(
        &self,
        source: Point,
        destination: Point,
        graph: &G,
    ) -> SearchResult {
        match self.config.algorithm {
            Algorithm::BreadthFirst => crate::bfs::breadth_first(
                graph,
                source,
                destination,
                self.config.frontier,
                self.config.anchor_endpoints,
            ),
            Algorithm::Bidirectional => crate::bidir::bidirectional(graph, source, destination),
        }
    }
}

/// Search for a path from `source` to `destination` with the default
/// settings of `algorithm`.
pub fn find_path<G: NavGraph>(
    source: Point,
    destination: Point,
    graph: &G,
    algorithm: Algorithm,
) -> SearchResult {
    Pathfinder::new(PathConfig::with_algorithm(algorithm)).find_path(source, destination, graph)
}
