//! Cole and Hopcroft's divide and conquer edge coloring of bipartite
//! multigraphs.
//!
//! A graph of even maximum degree Δ is Euler split into two graphs of maximum
//! degree Δ / 2.  A graph of odd maximum degree gives up a matching covering
//! its maximum degree vertices, which leaves a graph of maximum degree Δ - 1.
//! Every matching reached this way is one color class, so exactly Δ colors
//! are used.
use crate::{
    directedness::Directedness,
    error::Result,
    euler::euler_split,
    graph::Graph,
    matching::covering_matching,
    tracing_support::{debug, info_span},
};

/// Collects the color classes of a bipartite graph.
pub struct ColeHopcroftColoring<D: Directedness> {
    classes: Vec<Graph<D>>,
}

impl<D: Directedness> Default for ColeHopcroftColoring<D> {
    fn default() -> Self {
        Self {
            classes: Vec::new(),
        }
    }
}

impl<D: Directedness> ColeHopcroftColoring<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `graph` into matchings, one per color.  The result has exactly
    /// as many classes as the maximum degree of `graph`, and their union is
    /// `graph`.
    ///
    /// `graph` must be bipartite; this is not checked.
    pub fn colorize(mut self, mut graph: Graph<D>) -> Result<Vec<Graph<D>>> {
        graph.update_max_degree();
        let _span = info_span!(
            "cole_hopcroft",
            vertices = graph.vertices_num(),
            max_degree = graph.max_degree()
        )
        .entered();

        let mut pending = vec![graph];
        while let Some(graph) = pending.pop() {
            self.split(graph, &mut pending)?;
        }
        debug!(classes = self.classes.len(), "colored");
        Ok(self.classes)
    }

    fn split(&mut self, mut graph: Graph<D>, pending: &mut Vec<Graph<D>>) -> Result<()> {
        match graph.update_max_degree() {
            0 => {}
            1 => self.classes.push(graph),
            degree if degree % 2 == 1 => {
                let (matching, rest) = covering_matching(&mut graph, true)?;
                self.classes.push(matching);
                pending.extend(rest);
            }
            _ => {
                let (first, second) = euler_split(&mut graph)?;
                pending.push(first);
                pending.push(second);
            }
        }
        Ok(())
    }
}
