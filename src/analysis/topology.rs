use crate::store::Diagram;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet, VecDeque};

/// Identifies all nodes reachable from the given start nodes along edge direction.
///
/// `removed` simulates deleting one node: it is never entered, and a start node
/// equal to it is ignored.
pub fn downstream_from(diagram: &Diagram, start_nodes: &[NodeIndex], removed: Option<NodeIndex>) -> HashSet<NodeIndex> {
    walk(diagram, start_nodes, removed, Direction::Outgoing)
}

/// Identifies all nodes from which any of the given nodes can be reached.
pub fn upstream_from(diagram: &Diagram, start_nodes: &[NodeIndex], removed: Option<NodeIndex>) -> HashSet<NodeIndex> {
    walk(diagram, start_nodes, removed, Direction::Incoming)
}

fn walk(diagram: &Diagram, start_nodes: &[NodeIndex], removed: Option<NodeIndex>, dir: Direction) -> HashSet<NodeIndex> {
    let graph = diagram.graph();
    let mut visited = HashSet::new();
    let mut queue: VecDeque<NodeIndex> = start_nodes.iter().copied().filter(|&n| Some(n) != removed).collect();

    while let Some(node) = queue.pop_front() {
        if visited.insert(node) {
            for next in graph.neighbors_directed(node, dir) {
                if Some(next) != removed && !visited.contains(&next) {
                    queue.push_back(next);
                }
            }
        }
    }
    visited
}

/// Breadth-first search from `start` that never expands through `blocked` nodes.
///
/// Returns the shortest path (start first) to every reached node accepted by
/// `is_target`, ordered by the target's position in the graph.
pub fn paths_avoiding(
    diagram: &Diagram,
    start: NodeIndex,
    blocked: impl Fn(NodeIndex) -> bool,
    is_target: impl Fn(NodeIndex) -> bool,
) -> Vec<Vec<NodeIndex>> {
    let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut targets = Vec::new();

    while let Some(node) = queue.pop_front() {
        if node != start && is_target(node) {
            targets.push(node);
        }
        if node != start && blocked(node) {
            continue;
        }
        for next in successors(diagram, node) {
            if seen.insert(next) {
                parent.insert(next, node);
                queue.push_back(next);
            }
        }
    }

    targets.sort();
    targets
        .into_iter()
        .map(|target| {
            let mut path = vec![target];
            let mut cursor = target;
            while let Some(&prev) = parent.get(&cursor) {
                path.push(prev);
                cursor = prev;
            }
            path.reverse();
            path
        })
        .collect()
}

/// Direct successors in edge declaration order, so searches are deterministic.
fn successors(diagram: &Diagram, node: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
    let mut edges: SmallVec<[(usize, NodeIndex); 4]> = diagram
        .graph()
        .edges_directed(node, Direction::Outgoing)
        .map(|e| (*e.weight(), e.target()))
        .collect();
    edges.sort_unstable();
    edges.into_iter().map(|(_, target)| target).collect()
}

/// Node indices for a list of ids, skipping unknown ids.
pub fn nodes_for<'a>(diagram: &Diagram, ids: impl IntoIterator<Item = &'a str>) -> Vec<NodeIndex> {
    ids.into_iter().filter_map(|id| diagram.node(id)).collect()
}
