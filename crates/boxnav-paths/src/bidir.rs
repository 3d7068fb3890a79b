//! Bidirectional A* over box adjacency.
//!
//! A forward search grows from the source and a backward search from the
//! destination, taking turns one expansion at a time. Search states are
//! directed crossings: "entered box `b` from neighbor `a`", located at the
//! midpoint of the edge the two boxes share. Each side also has a start state
//! at its own query point. Moving from a state to a crossing out of the same
//! box costs the straight-line distance between the two points, and the
//! heuristic is the straight-line distance to the opposite query point.
//!
//! Whenever a side finalizes a state, it is paired with every state the
//! other side has finalized in the same box. The cheapest pairing so far is
//! the meeting candidate. The searches stop once either open set has nothing
//! cheaper than that candidate left, or a side runs dry. The path is the
//! forward chain up to the meeting box followed by the backward chain from it
//! to the destination.

use std::collections::BinaryHeap;
use std::ops::Range;

use boxnav_core::{BoxId, Point, distance};

use crate::record::{Direction, Explored, NodeRef, SearchRecord, push_distinct};
use crate::search::{SearchResult, locate_endpoints};
use crate::traits::NavGraph;

/// State index of a side's start. Crossing `i` is state `i + 1`.
const START: usize = 0;

/// Directed crossings between adjacent boxes, shared by both sides.
///
/// Crossing `first[b] + k` enters box `b` from its `k`-th neighbor.
struct Crossings {
    from: Vec<BoxId>,
    into: Vec<BoxId>,
    entry: Vec<Point>,
    first: Vec<usize>,
    /// For slot `first[b] + k`, the crossing that leaves `b` toward its
    /// `k`-th neighbor. `None` when that neighbor does not list `b` back.
    exit: Vec<Option<usize>>,
}

impl Crossings {
    fn new<G: NavGraph>(graph: &G) -> Self {
        let len = graph.box_count();
        let mut first = Vec::with_capacity(len + 1);
        let mut from = Vec::new();
        let mut into = Vec::new();
        let mut entry = Vec::new();
        for b in (0..len).map(BoxId) {
            first.push(into.len());
            for &nb in graph.neighbors(b) {
                from.push(nb);
                into.push(b);
                entry.push(entry_point(graph, nb, b));
            }
        }
        first.push(into.len());

        let mut exit = Vec::with_capacity(into.len());
        for b in (0..len).map(BoxId) {
            for &nb in graph.neighbors(b) {
                let back = graph.neighbors(nb).iter().position(|&id| id == b);
                exit.push(back.map(|k| first[nb.index()] + k));
            }
        }

        Self {
            from,
            into,
            entry,
            first,
            exit,
        }
    }

    /// Number of search states, start included.
    #[inline]
    fn states(&self) -> usize {
        self.into.len() + 1
    }

    #[inline]
    fn slots(&self, b: BoxId) -> Range<usize> {
        self.first[b.index()]..self.first[b.index() + 1]
    }
}

/// One direction of the search.
struct Side {
    record: SearchRecord,
    open: BinaryHeap<NodeRef>,
    start: BoxId,
    /// Point the heuristic aims at.
    goal: Point,
}

impl Side {
    fn new(states: usize, start: BoxId, origin: Point, goal: Point) -> Self {
        let mut record = SearchRecord::new(states);
        record.seed(START, origin);
        let mut open = BinaryHeap::new();
        open.push(NodeRef {
            idx: START,
            f: distance(origin, goal),
        });
        Self {
            record,
            open,
            start,
            goal,
        }
    }

    fn box_of(&self, crossings: &Crossings, state: usize) -> BoxId {
        if state == START {
            self.start
        } else {
            crossings.into[state - 1]
        }
    }

    /// Finalized states located in box `b`.
    fn closed_in<'a>(
        &'a self,
        crossings: &'a Crossings,
        b: BoxId,
    ) -> impl Iterator<Item = usize> + 'a {
        let start = (self.start == b).then_some(START);
        start
            .into_iter()
            .chain(crossings.slots(b).map(|slot| slot + 1))
            .filter(|&state| self.record.closed(state))
    }

    /// Whether nothing left open can lead to a path cheaper than `bound`.
    ///
    /// The heap top may be stale, but stale entries never undercut a live one.
    fn settled(&self, bound: f64) -> bool {
        self.open.peek().is_none_or(|top| top.f >= bound)
    }
}

/// Cheapest known way to join the two sides.
#[derive(Copy, Clone, Debug)]
struct Meeting {
    cost: f64,
    forward: usize,
    backward: usize,
}

/// Point where a path coming from `from` enters `to`.
///
/// Falls back to the midpoint of `to` when the boxes have no shared edge.
fn entry_point<G: NavGraph>(graph: &G, from: BoxId, to: BoxId) -> Point {
    let to_rect = graph.rect(to);
    graph
        .rect(from)
        .shared_edges(to_rect)
        .first()
        .map_or_else(|| to_rect.midpoint(), |edge| edge.midpoint())
}

/// Finalize the best open state of `side`, pair it with what `other` has
/// finalized in the same box and relax its successors.
///
/// Returns `false` when `side` has nothing left to expand.
fn step<G: NavGraph>(
    graph: &G,
    crossings: &Crossings,
    side: &mut Side,
    other: &Side,
    direction: Direction,
    best: &mut Option<Meeting>,
    explored: &mut Explored,
) -> bool {
    let current = loop {
        let Some(top) = side.open.pop() else {
            return false;
        };
        // Skip stale entries.
        if !side.record.closed(top.idx) {
            break top.idx;
        }
    };
    side.record.close(current);

    let here = side.box_of(crossings, current);
    let g = side.record.g(current);
    let entry = side.record.entry(current);

    for opposite in other.closed_in(crossings, here) {
        let cost = g + distance(entry, other.record.entry(opposite)) + other.record.g(opposite);
        if best.as_ref().is_none_or(|m| cost < m.cost) {
            let (forward, backward) = match direction {
                Direction::Forward => (current, opposite),
                Direction::Backward => (opposite, current),
            };
            log::trace!("bidir: candidate of length {cost} in box {here}");
            *best = Some(Meeting {
                cost,
                forward,
                backward,
            });
        }
    }

    let came_from = (current != START).then(|| crossings.from[current - 1]);
    for (slot, &nb) in crossings.slots(here).zip(graph.neighbors(here)) {
        if came_from == Some(nb) {
            continue;
        }
        let Some(crossing) = crossings.exit[slot] else {
            continue;
        };
        let next = crossing + 1;
        if side.record.closed(next) {
            continue;
        }
        let next_entry = crossings.entry[crossing];
        let next_g = g + distance(entry, next_entry);
        if side.record.relax(next, current, next_g, next_entry) {
            explored.mark(nb);
            side.open.push(NodeRef {
                idx: next,
                f: next_g + distance(next_entry, side.goal),
            });
        }
    }

    true
}

pub(crate) fn bidirectional<G: NavGraph>(
    graph: &G,
    source: Point,
    destination: Point,
) -> SearchResult {
    let (src, dst) = match locate_endpoints(graph, source, destination) {
        Ok(ends) => ends,
        Err(res) => return res,
    };

    log::debug!("bidir: {source} in box {src} -> {destination} in box {dst}");

    if src == dst {
        let mut path = vec![source];
        push_distinct(&mut path, destination);
        return SearchResult::found(path, vec![src]);
    }

    let mut explored = Explored::new(graph.box_count());
    explored.mark(src);
    explored.mark(dst);

    let crossings = Crossings::new(graph);
    let mut forward = Side::new(crossings.states(), src, source, destination);
    let mut backward = Side::new(crossings.states(), dst, destination, source);
    let mut best = None;
    let mut turn = Direction::Forward;

    loop {
        if best.is_some_and(|m: Meeting| forward.settled(m.cost) || backward.settled(m.cost)) {
            break;
        }
        let expanded = match turn {
            Direction::Forward => step(
                graph,
                &crossings,
                &mut forward,
                &backward,
                turn,
                &mut best,
                &mut explored,
            ),
            Direction::Backward => step(
                graph,
                &crossings,
                &mut backward,
                &forward,
                turn,
                &mut best,
                &mut explored,
            ),
        };
        if !expanded {
            break;
        }
        turn = match turn {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        };
    }

    let explored = explored.into_vec();
    let Some(meeting) = best else {
        log::debug!("bidir: no path after exploring {} boxes", explored.len());
        return SearchResult::no_path(explored);
    };

    let mut path = forward
        .record
        .walk(meeting.forward, Direction::Forward, |s| forward.record.entry(s));
    let tail = backward
        .record
        .walk(meeting.backward, Direction::Backward, |s| backward.record.entry(s));
    for p in tail {
        push_distinct(&mut path, p);
    }

    log::debug!(
        "bidir: met in box {}, path of {} points, {} boxes explored",
        forward.box_of(&crossings, meeting.forward),
        path.len(),
        explored.len()
    );
    SearchResult::found(path, explored)
}
