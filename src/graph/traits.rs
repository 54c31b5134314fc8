use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

/// Read-only view of a weighted directed graph, as consumed by the shortest path engine
///
/// Implementations must not change while a query is running. Queries only ever
/// take `&self`, so a provider that is `Sync` can serve concurrent queries.
pub trait GraphProvider<N, W>: Debug
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Returns an iterator over every declared node
    ///
    /// The engine ignores a repeated id after its first occurrence.
    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_>;

    /// Returns an iterator over the arcs leaving `node` as `(target, weight)` pairs
    ///
    /// Unknown nodes have no outgoing arcs.
    fn outgoing_arcs(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_>;

    /// Returns the number of declared nodes
    fn node_count(&self) -> usize;

    /// Returns true if the node is declared in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Gets the weight of the arc between the two nodes if it exists
    fn arc_weight(&self, from: &N, to: &N) -> Option<W> {
        self.outgoing_arcs(from)
            .find(|(target, _)| target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: GraphProvider<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Declares a node; returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Removes a node together with every arc entering or leaving it
    fn remove_node(&mut self, node: &N) -> bool;

    /// Adds a directed arc, replacing the weight of an existing arc between the same pair
    ///
    /// Returns the replaced weight, if any.
    fn add_arc(&mut self, from: N, to: N, weight: W) -> Option<W>;

    /// Removes an arc and returns its weight
    fn remove_arc(&mut self, from: &N, to: &N) -> Option<W>;
}
