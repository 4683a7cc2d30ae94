pub use crate::coloring::{Algorithm, Coloring, colorize};
pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::edge_key::EdgeKey;
pub use crate::error::{GraphError, Result};
pub use crate::graph::{Graph, UDGraph};
