pub mod traits;
pub mod state;
pub mod dijkstra;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult, ShortestPathTree};
pub use state::VertexState;
