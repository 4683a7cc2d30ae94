//! Matchings that cover every vertex of maximum degree.
use std::mem::swap;

use crate::{
    directedness::Directedness,
    error::Result,
    graph::Graph,
    partition::covering_partition,
    tracing_support::{debug, info_span},
};

/// Finds a matching of `graph` that covers every vertex of maximum degree,
/// by repeatedly taking a covering partition and keeping the half with the
/// smaller maximum degree (the first half on a tie) until the maximum degree
/// is at most one.  Consumes the edges of `graph`.
///
/// With `sustain_graph` the discarded halves are collected into a second
/// graph, so that the matching and the rest together hold exactly the edges
/// of `graph`; otherwise they are dropped and the rest is `None`.
///
/// `graph` must be bipartite; this is not checked.
pub fn covering_matching<D: Directedness>(
    graph: &mut Graph<D>,
    sustain_graph: bool,
) -> Result<(Graph<D>, Option<Graph<D>>)> {
    let mut matching = graph.take_edges();
    matching.update_max_degree();
    let _span = info_span!(
        "covering_matching",
        vertices = matching.vertices_num(),
        max_degree = matching.max_degree(),
        sustain_graph
    )
    .entered();

    let mut rest = sustain_graph.then(|| Graph::with_vertices(matching.vertices_num()));
    while matching.max_degree() > 1 {
        let (mut low, mut high) = covering_partition(&mut matching)?;
        if low.max_degree() > high.max_degree() {
            swap(&mut low, &mut high);
        }
        debug!(kept = low.max_degree(), dropped = high.max_degree(), "halved");

        matching = low;
        if let Some(rest) = rest.as_mut() {
            rest.absorb(high)?;
        }
    }

    if let Some(rest) = rest.as_mut() {
        rest.update_max_degree();
    }
    Ok((matching, rest))
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        graph::UDGraph,
        graph_test_support::{ArbBipartiteGraph, check_union},
    };

    fn covers_max_degree_once(original: &UDGraph, matching: &UDGraph) -> bool {
        original
            .max_degree_vertices()
            .iter_ones()
            .all(|vertex| matching.degree(vertex) == 1)
    }

    #[test]
    fn test_covering_matching_sustained() {
        let edges = [(0, 3), (0, 4), (1, 3), (1, 4), (1, 5), (2, 3)];
        let mut graph = UDGraph::from_edges(&edges);
        let original = graph.clone();

        let (matching, rest) = covering_matching(&mut graph, true).unwrap();
        let rest = rest.unwrap();
        assert!(graph.is_empty());
        assert_eq!(matching.max_degree(), 1);
        assert_eq!(matching.degree(1), 1);
        assert_eq!(matching.degree(3), 1);
        assert_eq!(rest.max_degree(), 2);
        assert!(check_union(&original, &matching, &rest));
    }

    #[test]
    fn test_covering_matching_dropped() {
        let edges = [(0, 3), (0, 4), (1, 3), (1, 4), (1, 5), (2, 3)];
        let mut graph = UDGraph::from_edges(&edges);
        let original = graph.clone();

        let (matching, rest) = covering_matching(&mut graph, false).unwrap();
        assert!(rest.is_none());
        assert!(covers_max_degree_once(&original, &matching));
        assert!(matching.edge_list().iter().all(|&(from, into)| {
            original.neighbors(from).contains(&into)
        }));
    }

    #[test]
    fn test_matching_is_returned_unchanged() {
        let mut graph = UDGraph::from_edges(&[(0, 1), (2, 3)]);
        let (matching, rest) = covering_matching(&mut graph, true).unwrap();
        assert_eq!(matching.edge_list(), vec![(0, 1), (2, 3)]);
        assert!(rest.unwrap().is_empty());
    }

    #[quickcheck]
    fn prop_matching_covers_max_degree(ArbBipartiteGraph { graph }: ArbBipartiteGraph) -> bool {
        let mut consumed = graph.clone();
        let (matching, rest) = covering_matching(&mut consumed, true).unwrap();
        let Some(rest) = rest else {
            return false;
        };
        matching.compute_max_degree() <= 1
            && covers_max_degree_once(&graph, &matching)
            && check_union(&graph, &matching, &rest)
    }
}
