use std::collections::VecDeque;

use boxnav_core::{BoxId, Point};

use crate::config::FrontierOrder;
use crate::record::{Direction, Explored, SearchRecord, push_distinct};
use crate::search::{SearchResult, locate_endpoints};
use crate::traits::NavGraph;

/// Unweighted search over box adjacency.
///
/// Expansion stops once the destination box has been reached, after the
/// current box's neighbors have all been recorded. When both endpoints share
/// a box no neighbor is looked at. The path visits the
/// midpoint of every box on the chain, so it is a reachability path rather
/// than a geometrically shortest one.
pub(crate) fn breadth_first<G: NavGraph>(
    graph: &G,
    source: Point,
    destination: Point,
    order: FrontierOrder,
    anchor_endpoints: bool,
) -> SearchResult {
    let (src, dst) = match locate_endpoints(graph, source, destination) {
        Ok(ends) => ends,
        Err(res) => return res,
    };

    let midpoints_to_path = |mids: Vec<Point>| {
        if !anchor_endpoints {
            return mids;
        }
        let mut path = Vec::with_capacity(mids.len() + 2);
        push_distinct(&mut path, source);
        for p in mids {
            push_distinct(&mut path, p);
        }
        push_distinct(&mut path, destination);
        path
    };

    if src == dst {
        log::debug!("bfs: {source} and {destination} share box {src}");
        let path = midpoints_to_path(vec![graph.rect(src).midpoint()]);
        return SearchResult::found(path, vec![src]);
    }

    let len = graph.box_count();
    let mut record = SearchRecord::new(len);
    let mut explored = Explored::new(len);
    let mut frontier: VecDeque<BoxId> = VecDeque::new();

    record.seed(src.index(), source);
    explored.mark(src);
    frontier.push_back(src);

    log::debug!("bfs: {source} in box {src} -> {destination} in box {dst}");

    loop {
        let next = match order {
            FrontierOrder::Fifo => frontier.pop_front(),
            FrontierOrder::Lifo => frontier.pop_back(),
        };
        let Some(current) = next else {
            break;
        };
        log::trace!("bfs: expanding {current}");

        for &nb in graph.neighbors(current) {
            if record.reached(nb.index()) {
                continue;
            }
            record.link(nb.index(), current.index());
            explored.mark(nb);
            frontier.push_back(nb);
        }

        if record.reached(dst.index()) {
            break;
        }
    }

    let explored = explored.into_vec();
    if !record.reached(dst.index()) {
        log::debug!("bfs: no path after exploring {} boxes", explored.len());
        return SearchResult::no_path(explored);
    }

    let mids = record.walk(dst.index(), Direction::Forward, |idx| {
        graph.rect(BoxId(idx)).midpoint()
    });
    let path = midpoints_to_path(mids);

    log::debug!(
        "bfs: path of {} points, {} boxes explored",
        path.len(),
        explored.len()
    );
    SearchResult::found(path, explored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchStatus, path_length};
    use boxnav_core::{Mesh, Rect};

    fn run(mesh: &Mesh, from: Point, to: Point) -> SearchResult {
        breadth_first(mesh, from, to, FrontierOrder::Fifo, false)
    }

    /// Boxes `0..n` in a row along x, each 1 × 1.
    fn corridor(n: usize) -> Mesh {
        let boxes = (0..n)
            .map(|i| Rect::new(i as f64, i as f64 + 1.0, 0.0, 1.0))
            .collect();
        let pairs: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
        Mesh::from_pairs(boxes, &pairs).unwrap()
    }

    #[test]
    fn same_box_gives_its_midpoint() {
        let mesh = Mesh::new(vec![Rect::new(0.0, 10.0, 0.0, 10.0)], vec![vec![]]).unwrap();
        let res = run(&mesh, Point::new(1.0, 1.0), Point::new(9.0, 9.0));
        assert_eq!(res.status, SearchStatus::Found);
        assert_eq!(res.path, vec![Point::new(5.0, 5.0)]);
        assert_eq!(res.explored, vec![BoxId(0)]);
    }

    #[test]
    fn same_box_skips_neighbor_scan() {
        let mesh = corridor(3);
        let res = run(&mesh, Point::new(1.2, 0.3), Point::new(1.8, 0.7));
        assert!(res.is_found());
        assert_eq!(res.path, vec![Point::new(1.5, 0.5)]);
        assert_eq!(res.explored, vec![BoxId(1)]);

        let res = breadth_first(
            &mesh,
            Point::new(1.2, 0.3),
            Point::new(1.8, 0.7),
            FrontierOrder::Lifo,
            true,
        );
        assert_eq!(
            res.path,
            vec![Point::new(1.2, 0.3), Point::new(1.5, 0.5), Point::new(1.8, 0.7)]
        );
        assert_eq!(res.explored, vec![BoxId(1)]);
    }

    #[test]
    fn same_box_anchored() {
        let mesh = Mesh::new(vec![Rect::new(0.0, 10.0, 0.0, 10.0)], vec![vec![]]).unwrap();
        let res = breadth_first(
            &mesh,
            Point::new(1.0, 1.0),
            Point::new(5.0, 5.0),
            FrontierOrder::Fifo,
            true,
        );
        assert_eq!(res.path, vec![Point::new(1.0, 1.0), Point::new(5.0, 5.0)]);
    }

    #[test]
    fn corridor_path_joins_midpoints() {
        let mesh = corridor(4);
        let res = run(&mesh, Point::new(0.2, 0.2), Point::new(3.9, 0.9));
        assert!(res.is_found());
        assert_eq!(
            res.path,
            vec![
                Point::new(0.5, 0.5),
                Point::new(1.5, 0.5),
                Point::new(2.5, 0.5),
                Point::new(3.5, 0.5),
            ]
        );
        assert_eq!(path_length(&res.path), 3.0);
    }

    #[test]
    fn disconnected_mesh_is_no_path() {
        let mesh = Mesh::from_pairs(
            vec![
                Rect::new(0.0, 1.0, 0.0, 1.0),
                Rect::new(1.0, 2.0, 0.0, 1.0),
                Rect::new(5.0, 6.0, 0.0, 1.0),
            ],
            &[(0, 1)],
        )
        .unwrap();
        let res = run(&mesh, Point::new(0.5, 0.5), Point::new(5.5, 0.5));
        assert_eq!(res.status, SearchStatus::NoPath);
        assert!(res.path.is_empty());
        assert_eq!(res.explored, vec![BoxId(0), BoxId(1)]);
    }

    #[test]
    fn early_exit_after_reaching_destination() {
        // 0 - 1 - 2 - 3 - 4, destination in box 1.
        let mesh = corridor(5);
        let res = run(&mesh, Point::new(0.5, 0.5), Point::new(1.5, 0.5));
        assert!(res.is_found());
        assert_eq!(res.explored, vec![BoxId(0), BoxId(1)]);
    }

    #[test]
    fn fifo_finds_fewest_boxes() {
        //  0 1 2
        //  3   4
        //  5 6 7
        // Ring of boxes around a hole; from 0 to 7 both ways take 5 boxes,
        // but 0 -> 2 directly takes 3.
        let r = |x: f64, y: f64| Rect::new(x, x + 1.0, y, y + 1.0);
        let boxes = vec![
            r(0.0, 0.0),
            r(1.0, 0.0),
            r(2.0, 0.0),
            r(0.0, 1.0),
            r(2.0, 1.0),
            r(0.0, 2.0),
            r(1.0, 2.0),
            r(2.0, 2.0),
        ];
        let mesh = Mesh::from_pairs(
            boxes,
            &[(0, 1), (1, 2), (0, 3), (2, 4), (3, 5), (4, 7), (5, 6), (6, 7)],
        )
        .unwrap();
        let res = run(&mesh, Point::new(0.5, 0.5), Point::new(2.5, 0.5));
        assert_eq!(res.path.len(), 3);

        let res = run(&mesh, Point::new(0.5, 0.5), Point::new(2.5, 2.5));
        assert_eq!(res.path.len(), 5);
        assert_eq!(res.path.first(), Some(&Point::new(0.5, 0.5)));
        assert_eq!(res.path.last(), Some(&Point::new(2.5, 2.5)));
    }

    #[test]
    fn lifo_still_finds_a_path() {
        let mesh = corridor(6);
        let res = breadth_first(
            &mesh,
            Point::new(0.5, 0.5),
            Point::new(5.5, 0.5),
            FrontierOrder::Lifo,
            false,
        );
        assert!(res.is_found());
        assert_eq!(res.path.len(), 6);
    }
}
