use crate::util::sort_pair;

/// Marker type representing directed graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker type representing undirected graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

/// Trait defining the directedness behavior of graph edges.
///
/// This trait is implemented by [`Directed`] and [`Undirected`] marker types
/// so that the storage rules of a [`Graph`](crate::Graph) are chosen at
/// compile time.  An undirected edge `(u, v)` is stored in the adjacency
/// lists of both `u` and `v`; a directed one only in the list of `u`.
pub trait Directedness: Sized + Copy + Default + 'static {
    fn is_directed() -> bool;

    /// Orders the ends of an edge into its canonical identity: unchanged for
    /// directed edges, sorted for undirected ones.
    fn canonical_ends(from: usize, into: usize) -> (usize, usize) {
        if Self::is_directed() {
            (from, into)
        } else {
            sort_pair(from, into)
        }
    }
}

impl Directedness for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl Directedness for Undirected {
    fn is_directed() -> bool {
        false
    }
}
