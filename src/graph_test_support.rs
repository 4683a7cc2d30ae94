//! Arbitrary graphs and invariant checks shared by the unit tests and the
//! integration tests.
use quickcheck::{Arbitrary, Gen};

use crate::{directedness::Directedness, graph::Graph, graph::UDGraph};

/// A random bipartite multigraph.  Each vertex is dealt to one of the two
/// sides at random, and edges join random vertices of opposite sides, so
/// parallel edges and isolated vertices are common.
#[derive(Debug, Clone)]
pub struct ArbBipartiteGraph {
    pub graph: UDGraph,
}

impl Arbitrary for ArbBipartiteGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 16; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 48;

        let sides: Vec<bool> = (0..num_vertices).map(|_| bool::arbitrary(g)).collect();
        let left: Vec<usize> = (0..num_vertices).filter(|&v| sides[v]).collect();
        let right: Vec<usize> = (0..num_vertices).filter(|&v| !sides[v]).collect();

        let mut graph = UDGraph::with_vertices(num_vertices);
        if !left.is_empty() && !right.is_empty() {
            for _ in 0..num_edges {
                let one = left[usize::arbitrary(g) % left.len()];
                let two = right[usize::arbitrary(g) % right.len()];
                if bool::arbitrary(g) {
                    graph.add_edge(one, two);
                } else {
                    graph.add_edge(two, one);
                }
            }
        }
        graph.update_max_degree();
        ArbBipartiteGraph { graph }
    }
}

/// A random simple undirected graph, bipartite or not.
#[derive(Debug, Clone)]
pub struct ArbSimpleGraph {
    pub graph: UDGraph,
}

impl Arbitrary for ArbSimpleGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 12;
        let density = 1 + u8::arbitrary(g) % 4;

        let mut graph = UDGraph::with_vertices(num_vertices);
        for from in 0..num_vertices {
            for into in from + 1..num_vertices {
                if u8::arbitrary(g) % 5 < density {
                    graph.add_edge(from, into);
                }
            }
        }
        graph.update_max_degree();
        ArbSimpleGraph { graph }
    }
}

/// Checks that `one` and `two` partition the edges of `original` and that
/// every vertex has its degree split as evenly as possible.
pub fn check_split<D: Directedness>(original: &Graph<D>, one: &Graph<D>, two: &Graph<D>) -> bool {
    let balanced = original
        .vertices()
        .all(|vertex| one.degree(vertex).abs_diff(two.degree(vertex)) <= 1);
    balanced && check_union(original, one, two)
}

/// Checks that the edges of `one` and `two` together are exactly the edges
/// of `original`.
pub fn check_union<D: Directedness>(original: &Graph<D>, one: &Graph<D>, two: &Graph<D>) -> bool {
    let mut joined = one.clone();
    match joined.union(two) {
        Ok(joined) => joined.edge_multiset() == original.edge_multiset(),
        Err(_) => false,
    }
}

/// Checks that every vertex of maximum degree in `original` also has the
/// maximum degree of `half`.
pub fn check_covers_max_degree<D: Directedness>(original: &Graph<D>, half: &Graph<D>) -> bool {
    let max_degree = half.compute_max_degree();
    original
        .max_degree_vertices()
        .iter_ones()
        .all(|vertex| half.degree(vertex) == max_degree)
}
