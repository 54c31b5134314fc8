use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;
use crate::graph::GraphProvider;
use crate::Result;

/// Result of a point-to-point shortest path query
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Nodes from source to target, both inclusive
    pub path: Vec<N>,

    /// Sum of the arc weights along `path`
    pub total_distance: W,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// First node of the path
    pub fn source(&self) -> Option<&N> {
        self.path.first()
    }

    /// Last node of the path
    pub fn target(&self) -> Option<&N> {
        self.path.last()
    }

    /// Number of arcs traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Shortest distances and predecessor links from one source to every reachable node
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Source node ID
    pub source: N,

    /// Final distance of every reachable node
    pub distances: HashMap<N, W>,

    /// Previous node on the shortest path, for every reachable node except the source
    pub predecessors: HashMap<N, N>,
}

impl<N, W> ShortestPathTree<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Distance from the source, or `None` if the node is unreachable or unknown
    pub fn distance_to(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// Number of reachable nodes, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Get the shortest path from the source to `target` as a sequence of nodes
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.distances.contains_key(target) {
            return None;
        }

        // Build path in reverse order
        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.predecessors.get(current)?;
            path.push(current.clone());

            // Predecessor links form a tree rooted at the source
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
    G: GraphProvider<N, W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute the cheapest path from `source` to `target`
    fn shortest_path(
        &self,
        graph: &G,
        source: &N,
        target: &N,
    ) -> Result<ShortestPathResult<N, W>, N, W>;

    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N, W>, N, W>;
}
