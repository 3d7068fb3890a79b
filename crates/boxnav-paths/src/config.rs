use std::fmt;
use std::str::FromStr;

use crate::error::ParseAlgorithmError;

/// Search strategy used by a [`Pathfinder`](crate::Pathfinder).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Algorithm {
    /// Unweighted reachability over box adjacency; the path joins box
    /// midpoints. Fast, but not geometrically shortest.
    #[default]
    BreadthFirst,
    /// Two A* searches grown from both endpoints, costed by the distance
    /// between shared-edge midpoints.
    Bidirectional,
}

impl Algorithm {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breadth-first" | "bfs" | "brs" => Ok(Self::BreadthFirst),
            "bidirectional" | "bidir" | "bidirectional-astar" => Ok(Self::Bidirectional),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Order in which the breadth-first frontier is consumed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum FrontierOrder {
    /// Queue: finds a path through the fewest boxes.
    #[default]
    Fifo,
    /// Stack: depth-first flavoured, finds *a* path.
    Lifo,
}

/// Configuration for a [`Pathfinder`](crate::Pathfinder).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PathConfig {
    /// Search strategy.
    pub algorithm: Algorithm,
    /// Frontier order for [`Algorithm::BreadthFirst`].
    pub frontier: FrontierOrder,
    /// For [`Algorithm::BreadthFirst`]: put the source point before the
    /// first box midpoint and the destination point after the last one.
    pub anchor_endpoints: bool,
}

impl PathConfig {
    /// Default configuration with the given algorithm.
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::BreadthFirst));
        assert_eq!("brs".parse::<Algorithm>(), Ok(Algorithm::BreadthFirst));
        assert_eq!(" Bidirectional ".parse::<Algorithm>(), Ok(Algorithm::Bidirectional));
        for a in [Algorithm::BreadthFirst, Algorithm::Bidirectional] {
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn parse_unknown_algorithm_fails() {
        let err = "dijsktra".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, ParseAlgorithmError("dijsktra".into()));
        assert_eq!(
            err.to_string(),
            "unknown search algorithm 'dijsktra' (expected breadth-first or bidirectional)"
        );
    }

    #[test]
    fn defaults() {
        let c = PathConfig::default();
        assert_eq!(c.algorithm, Algorithm::BreadthFirst);
        assert_eq!(c.frontier, FrontierOrder::Fifo);
        assert!(!c.anchor_endpoints);
        assert_eq!(
            PathConfig::with_algorithm(Algorithm::Bidirectional).algorithm,
            Algorithm::Bidirectional
        );
    }
}
