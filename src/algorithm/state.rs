use std::fmt::Debug;
use num_traits::Float;

use crate::data_structures::HeapSlot;

/// Per-node bookkeeping for a single query
///
/// Records live in one arena per query; `predecessor` and the heap refer to
/// them by arena index, so the predecessor tree never borrows into the queue.
#[derive(Debug, Clone)]
pub struct VertexState<N, W> {
    /// Node this record belongs to
    pub id: N,

    /// Tentative distance from the source; final once `visited` is set
    pub distance: W,

    /// Arena index of the previous node on the best known path
    pub predecessor: Option<usize>,

    /// Current slot in the priority queue
    pub heap_slot: usize,

    /// Set when the node is popped and its distance is final
    pub visited: bool,
}

impl<N, W> VertexState<N, W>
where
    W: Float + Debug + Copy,
{
    /// Creates an unreached record
    pub fn new(id: N) -> Self {
        VertexState {
            id,
            distance: W::infinity(),
            predecessor: None,
            heap_slot: 0,
            visited: false,
        }
    }

    /// Returns true once a finite distance has been found
    pub fn is_reached(&self) -> bool {
        self.distance < W::infinity()
    }
}

impl<N, W> HeapSlot for VertexState<N, W>
where
    W: Float + Debug + Copy,
{
    type Key = W;

    fn key(&self) -> W {
        self.distance
    }

    fn heap_slot(&self) -> usize {
        self.heap_slot
    }

    fn set_heap_slot(&mut self, slot: usize) {
        self.heap_slot = slot;
    }
}
