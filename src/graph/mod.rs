pub mod arc;
pub mod traits;
pub mod directed;
pub mod generators;

pub use arc::Arc;
pub use traits::{GraphProvider, MutableGraph};
pub use directed::DirectedGraph;
