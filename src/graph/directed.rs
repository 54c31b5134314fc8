use crate::graph::arc::Arc;
use crate::graph::traits::{GraphProvider, MutableGraph};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph implementation using adjacency lists
///
/// Nodes are kept in insertion order so that queries over the same graph visit
/// them in the same order every time. Arcs may point at nodes that were never
/// declared; the shortest path engine reports those as unknown nodes.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Declared nodes in insertion order
    nodes: Vec<N>,

    /// Node id -> position in `nodes`
    positions: HashMap<N, usize>,

    /// Outgoing arcs for each source: node_id -> [(target_node, weight)]
    outgoing_arcs: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            positions: HashMap::new(),
            outgoing_arcs: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(nodes),
            positions: HashMap::with_capacity(nodes),
            outgoing_arcs: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from arcs, declaring both endpoints of every arc as nodes
    pub fn from_arcs<I>(arcs: I) -> Self
    where
        I: IntoIterator<Item = Arc<N, W>>,
    {
        let mut graph = DirectedGraph::new();
        for arc in arcs {
            graph.add_node(arc.source.clone());
            graph.add_node(arc.target.clone());
            graph.add_arc(arc.source, arc.target, arc.weight);
        }
        graph
    }

    /// Returns the total number of arcs
    pub fn arc_count(&self) -> usize {
        self.outgoing_arcs.values().map(|arcs| arcs.len()).sum()
    }

    /// Looks up the arc between two nodes
    pub fn arc(&self, from: &N, to: &N) -> Option<Arc<N, W>> {
        self.arc_weight(from, to)
            .map(|weight| Arc::new(from.clone(), to.clone(), weight))
    }

    /// Returns an iterator over every arc in the graph
    pub fn arcs(&self) -> impl Iterator<Item = Arc<N, W>> + '_ {
        self.outgoing_arcs.iter().flat_map(|(source, arcs)| {
            arcs.iter()
                .map(move |(target, weight)| Arc::new(source.clone(), target.clone(), *weight))
        })
    }

    /// Returns the sum of the arc weights along `path`, or `None` if some hop has no arc
    pub fn path_weight(&self, path: &[N]) -> Option<W> {
        path.windows(2).try_fold(W::zero(), |total, hop| {
            self.arc_weight(&hop[0], &hop[1]).map(|weight| total + weight)
        })
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        for (_node, arcs) in &self.outgoing_arcs {
            for (_target, weight) in arcs {
                if *weight < W::zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> GraphProvider<N, W> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.nodes.iter().cloned())
    }

    fn outgoing_arcs(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        if let Some(arcs) = self.outgoing_arcs.get(node) {
            Box::new(arcs.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.positions.contains_key(node)
    }

    fn arc_weight(&self, from: &N, to: &N) -> Option<W> {
        self.outgoing_arcs
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.positions.contains_key(&node) {
            return false;
        }

        self.positions.insert(node.clone(), self.nodes.len());
        self.nodes.push(node);
        true
    }

    fn remove_node(&mut self, node: &N) -> bool {
        let Some(position) = self.positions.remove(node) else {
            return false;
        };

        self.nodes.remove(position);
        for slot in self.positions.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        // Remove all arcs connected to this node
        self.outgoing_arcs.remove(node);
        for arcs in self.outgoing_arcs.values_mut() {
            arcs.retain(|(target, _)| target != node);
        }

        true
    }

    fn add_arc(&mut self, from: N, to: N, weight: W) -> Option<W> {
        let arcs = self.outgoing_arcs.entry(from).or_default();

        // Check if arc already exists and update it if it does
        for arc in arcs.iter_mut() {
            if arc.0 == to {
                let previous = arc.1;
                arc.1 = weight;
                return Some(previous);
            }
        }

        arcs.push((to, weight));
        None
    }

    fn remove_arc(&mut self, from: &N, to: &N) -> Option<W> {
        let arcs = self.outgoing_arcs.get_mut(from)?;
        let position = arcs.iter().position(|(target, _)| target == to)?;
        let (_, weight) = arcs.remove(position);
        if arcs.is_empty() {
            self.outgoing_arcs.remove(from);
        }
        Some(weight)
    }
}

impl<N, W> FromIterator<Arc<N, W>> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    fn from_iter<I: IntoIterator<Item = Arc<N, W>>>(iter: I) -> Self {
        DirectedGraph::from_arcs(iter)
    }
}
