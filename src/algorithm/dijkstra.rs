use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace};
use num_traits::Float;

use crate::graph::GraphProvider;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult, ShortestPathTree, VertexState};
use crate::data_structures::IndexedMinHeap;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with an indexed decrease-key heap
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

/// Per-query state left behind by a search
struct Search<N, W> {
    states: Vec<VertexState<N, W>>,
    settled: usize,
}

impl Dijkstra {
    /// Name reported by [`ShortestPathAlgorithm::name`]
    pub const NAME: &'static str = "Dijkstra";

    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs the main loop from `source`, stopping early once `target` is popped.
    ///
    /// Every arc leaving a settled node is checked, so negative weights are
    /// reported even when they would never lie on the answer.
    fn search<N, W, G>(
        &self,
        graph: &G,
        index: &HashMap<N, usize>,
        mut states: Vec<VertexState<N, W>>,
        source: usize,
        target: Option<usize>,
    ) -> Result<Search<N, W>, N, W>
    where
        N: Eq + Hash + Clone + Debug,
        W: Float + Debug + Copy,
        G: GraphProvider<N, W>,
    {
        states[source].distance = W::zero();

        // The source goes in first at distance zero and everything else at
        // infinity, so no insert has to sift.
        let mut queue = IndexedMinHeap::with_capacity(states.len());
        queue.insert(&mut states, source);
        for i in (0..states.len()).filter(|&i| i != source) {
            queue.insert(&mut states, i);
        }

        let mut settled = 0;
        while let Some(u) = queue.pop_minimum(&mut states) {
            if Some(u) == target {
                break;
            }

            let distance = states[u].distance;
            if !states[u].is_reached() {
                // Only unreachable nodes are left
                trace!("{} nodes left unreached", queue.len() + 1);
                break;
            }

            states[u].visited = true;
            settled += 1;

            let u_id = states[u].id.clone();
            for (v_id, weight) in graph.outgoing_arcs(&u_id) {
                if weight < W::zero() {
                    debug!("rejecting arc {:?} -> {:?} with weight {:?}", u_id, v_id, weight);
                    return Err(Error::NegativeWeight {
                        from: u_id,
                        to: v_id,
                        weight,
                    });
                }

                let v = lookup::<N, W>(index, &v_id)?;
                if states[v].visited {
                    continue;
                }

                let mut alt = distance + weight;
                if alt.is_infinite() && weight.is_finite() {
                    // Finite sums past the largest weight saturate so they never read as unreached
                    alt = W::max_value();
                }
                if alt < states[v].distance {
                    trace!("relax {:?} -> {:?}: {:?} -> {:?}", u_id, v_id, states[v].distance, alt);
                    states[v].distance = alt;
                    states[v].predecessor = Some(u);
                    queue.decrease_key(&mut states, v);
                }
            }
        }

        Ok(Search { states, settled })
    }
}

/// Creates one unreached record per declared node, keyed by node id
fn initialize<N, W, G>(graph: &G) -> (HashMap<N, usize>, Vec<VertexState<N, W>>)
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
    G: GraphProvider<N, W>,
{
    let mut index = HashMap::with_capacity(graph.node_count());
    let mut states = Vec::with_capacity(graph.node_count());

    for id in graph.nodes() {
        if index.contains_key(&id) {
            continue;
        }
        index.insert(id.clone(), states.len());
        states.push(VertexState::new(id));
    }

    (index, states)
}

fn lookup<N, W>(index: &HashMap<N, usize>, id: &N) -> Result<usize, N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Debug,
{
    index
        .get(id)
        .copied()
        .ok_or_else(|| Error::UnknownNode { id: id.clone() })
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
    G: GraphProvider<N, W>,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn shortest_path(
        &self,
        graph: &G,
        source: &N,
        target: &N,
    ) -> Result<ShortestPathResult<N, W>, N, W> {
        let (index, states) = initialize::<N, W, G>(graph);
        let source_idx = lookup::<N, W>(&index, source)?;
        let target_idx = lookup::<N, W>(&index, target)?;

        debug!(
            "shortest path {:?} -> {:?} over {} nodes",
            source,
            target,
            states.len()
        );

        let Search { states, settled } =
            self.search(graph, &index, states, source_idx, Some(target_idx))?;

        let total_distance = states[target_idx].distance;
        if !states[target_idx].is_reached() {
            debug!("{:?} is unreachable from {:?} after settling {} nodes", target, source, settled);
            return Err(Error::Unreachable {
                origin: source.clone(),
                target: target.clone(),
            });
        }

        // Walk predecessor links back to the source
        let mut path = Vec::new();
        let mut current = Some(target_idx);
        while let Some(i) = current {
            path.push(states[i].id.clone());
            current = states[i].predecessor;
        }
        path.reverse();

        debug!(
            "found path of {} hops with distance {:?} after settling {} nodes",
            path.len() - 1,
            total_distance,
            settled
        );

        Ok(ShortestPathResult {
            path,
            total_distance,
        })
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N, W>, N, W> {
        let (index, states) = initialize::<N, W, G>(graph);
        let source_idx = lookup::<N, W>(&index, source)?;

        debug!("shortest path tree from {:?} over {} nodes", source, states.len());

        let Search { states, settled } = self.search(graph, &index, states, source_idx, None)?;

        let mut distances = HashMap::with_capacity(settled);
        let mut predecessors = HashMap::with_capacity(settled);
        for state in states.iter().filter(|state| state.is_reached()) {
            distances.insert(state.id.clone(), state.distance);
            if let Some(pred) = state.predecessor {
                predecessors.insert(state.id.clone(), states[pred].id.clone());
            }
        }

        debug!("settled {} of {} nodes", settled, states.len());

        Ok(ShortestPathTree {
            source: source.clone(),
            distances,
            predecessors,
        })
    }
}
