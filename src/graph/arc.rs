use std::fmt::Debug;

/// A directed, weighted arc from `source` to `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc<N, W> {
    pub source: N,
    pub target: N,
    pub weight: W,
}

impl<N, W> Arc<N, W>
where
    N: Debug,
    W: Debug + Copy,
{
    /// Creates a new arc
    pub fn new(source: N, target: N, weight: W) -> Self {
        Arc {
            source,
            target,
            weight,
        }
    }
}
