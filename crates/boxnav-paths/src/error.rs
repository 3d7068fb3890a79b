use std::fmt;

use boxnav_core::Point;

/// One end of a path query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Errors reported by path queries.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// A point lies outside every box of the mesh. `endpoint` is known when
    /// the point was one end of a query.
    PointNotInMesh {
        point: Point,
        endpoint: Option<Endpoint>,
    },
    /// Both endpoints are in the mesh but no chain of adjacent boxes connects
    /// them.
    NoPath,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointNotInMesh {
                point,
                endpoint: Some(e),
            } => write!(f, "{e} point {point} is not inside any mesh box"),
            Self::PointNotInMesh {
                point,
                endpoint: None,
            } => write!(f, "point {point} is not inside any mesh box"),
            Self::NoPath => f.write_str("no path between source and destination"),
        }
    }
}

impl std::error::Error for PathError {}

/// Error returned when parsing an [`Algorithm`](crate::Algorithm) name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search algorithm '{}' (expected breadth-first or bidirectional)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
