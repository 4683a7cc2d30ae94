use std::fmt;

use crate::directedness::Directedness;

/// The identity of an edge, independent of which adjacency list it was read
/// from.  Undirected keys always hold the smaller vertex first, so `(u, v)`
/// and `(v, u)` name the same edge.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeKey {
    source: usize,
    target: usize,
}

impl EdgeKey {
    pub fn new<D: Directedness>(from: usize, into: usize) -> Self {
        let (source, target) = D::canonical_ends(from, into);
        Self { source, target }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn ends(&self) -> (usize, usize) {
        (self.source, self.target)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<EdgeKey> for (usize, usize) {
    fn from(key: EdgeKey) -> Self {
        key.ends()
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}
