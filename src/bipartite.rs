//! Bipartiteness by breadth-first 2-coloring.
use pathfinding::prelude::bfs_reach;

use crate::{
    directedness::Directedness,
    error::{GraphError, Result},
    graph::Graph,
};

/// Splits the vertices of `graph` into two sides so that every edge joins
/// the two sides, or returns `None` if that is impossible.  The lowest vertex
/// of each component goes on side `false`.  Edge directions are ignored, and
/// a self-loop makes a graph non-bipartite.
pub fn bipartition<D: Directedness>(graph: &Graph<D>) -> Option<Vec<bool>> {
    let mut neighbors = vec![Vec::new(); graph.vertices_num()];
    for (from, into) in graph.edge_list() {
        neighbors[from].push(into);
        neighbors[into].push(from);
    }

    let mut sides: Vec<Option<bool>> = vec![None; graph.vertices_num()];
    let mut odd_cycle = false;
    for root in graph.vertices() {
        if sides[root].is_some() {
            continue;
        }
        sides[root] = Some(false);
        let component = bfs_reach(root, |&vertex| {
            let mut next = Vec::new();
            let Some(here) = sides[vertex] else {
                return next;
            };
            for &neighbor in &neighbors[vertex] {
                match sides[neighbor] {
                    Some(there) => odd_cycle |= there == here,
                    None => {
                        sides[neighbor] = Some(!here);
                        next.push(neighbor);
                    }
                }
            }
            next
        });
        component.for_each(drop);
        if odd_cycle {
            return None;
        }
    }
    Some(sides.into_iter().map(Option::unwrap_or_default).collect())
}

pub fn is_bipartite<D: Directedness>(graph: &Graph<D>) -> bool {
    bipartition(graph).is_some()
}

/// Keeps the edges of `graph` whose ends lie on different sides, where
/// `sides[v]` names the side of vertex `v`.
pub fn bipartite_subgraph<D: Directedness>(graph: &Graph<D>, sides: &[bool]) -> Result<Graph<D>> {
    if sides.len() != graph.vertices_num() {
        return Err(GraphError::InvalidInitialState(format!(
            "{} sides given for {} vertices",
            sides.len(),
            graph.vertices_num()
        )));
    }

    let mut subgraph = Graph::with_vertices(graph.vertices_num());
    for (from, into) in graph.edge_list() {
        if sides[from] != sides[into] {
            subgraph.add_edge(from, into);
        }
    }
    subgraph.update_max_degree();
    Ok(subgraph)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{
        directedness::Directed,
        graph::UDGraph,
        graph_test_support::{ArbBipartiteGraph, ArbSimpleGraph},
    };

    #[test]
    fn test_bipartition() {
        let graph = UDGraph::from_edges(&[(0, 3), (0, 4), (1, 3), (1, 4), (1, 5), (2, 3)]);
        assert_eq!(
            bipartition(&graph),
            Some(vec![false, false, false, true, true, true])
        );
    }

    #[test]
    fn test_components_are_colored_separately() {
        let graph = UDGraph::new(Some(&[(1, 2), (4, 3)][..]), None, Some(6));
        assert_eq!(
            bipartition(&graph),
            Some(vec![false, false, true, false, true, false])
        );
    }

    #[test]
    fn test_odd_cycles_are_rejected() {
        assert!(!is_bipartite(&UDGraph::from_edges(&[(0, 1), (1, 2), (2, 0)])));
        assert!(!is_bipartite(&UDGraph::from_edges(&[(0, 1), (1, 1)])));
        assert!(is_bipartite(&UDGraph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0)])));
    }

    #[test]
    fn test_directions_are_ignored() {
        // A directed triangle is still an odd cycle.
        let triangle = Graph::<Directed>::from_edges(&[(0, 1), (1, 2), (2, 0)]);
        assert!(!is_bipartite(&triangle));
        let path = Graph::<Directed>::from_edges(&[(2, 1), (0, 1)]);
        assert_eq!(bipartition(&path), Some(vec![false, true, false]));
    }

    #[test]
    fn test_bipartite_subgraph() {
        let graph = UDGraph::from_edges(&[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let subgraph = bipartite_subgraph(&graph, &[false, true, false, true]).unwrap();
        assert_eq!(subgraph.edge_list(), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(subgraph.max_degree(), 2);
        assert!(is_bipartite(&subgraph));

        assert!(matches!(
            bipartite_subgraph(&graph, &[false, true]),
            Err(GraphError::InvalidInitialState(_))
        ));
    }

    #[quickcheck]
    fn prop_generated_graphs_are_bipartite(ArbBipartiteGraph { graph }: ArbBipartiteGraph) -> bool {
        is_bipartite(&graph)
    }

    #[quickcheck]
    fn prop_sides_split_every_edge(ArbSimpleGraph { graph }: ArbSimpleGraph) -> bool {
        match bipartition(&graph) {
            Some(sides) => graph
                .edge_list()
                .into_iter()
                .all(|(from, into)| sides[from] != sides[into]),
            None => !is_bipartite(&graph),
        }
    }

    #[quickcheck]
    fn prop_subgraph_is_bipartite(ArbSimpleGraph { graph }: ArbSimpleGraph, seed: Vec<bool>) -> bool {
        let sides: Vec<bool> = graph
            .vertices()
            .map(|vertex| seed.get(vertex).copied().unwrap_or(vertex % 2 == 0))
            .collect();
        let subgraph = bipartite_subgraph(&graph, &sides).unwrap();
        is_bipartite(&subgraph)
    }
}
