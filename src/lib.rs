//! Edge coloring of bipartite multigraphs.
//!
//! Graphs are adjacency-list multigraphs over dense vertex indices (see
//! [`Graph`]).  [`colorize`] colors the edges of a graph with either Vizing's
//! method, using at most Δ + 1 colors, or Cole and Hopcroft's divide and
//! conquer method, using exactly Δ colors on a bipartite graph.  The building
//! blocks of the latter, Euler partitions, covering partitions and covering
//! matchings, are public as well.
pub mod bipartite;
pub mod coloring;
pub mod directedness;
pub mod edge_key;
pub mod error;
pub mod euler;
pub mod graph;
pub mod matching;
pub mod partition;
pub mod prelude;
pub mod search;
pub mod tracing_support;

#[doc(hidden)]
pub mod graph_test_support;

mod util;

pub use bipartite::{bipartite_subgraph, bipartition, is_bipartite};
pub use coloring::{Algorithm, Coloring, colorize, colorize_by_name};
pub use directedness::{Directed, Directedness, Undirected};
pub use edge_key::EdgeKey;
pub use error::{GraphError, Result};
pub use euler::{Trail, euler_partition, euler_split};
pub use graph::{Graph, UDGraph};
pub use matching::covering_matching;
pub use partition::covering_partition;
pub use search::has_cycle;
