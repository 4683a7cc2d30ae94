//! Euler partitions and Euler splits, after Gabow, "Using Euler Partitions to
//! Edge Color Bipartite Multigraphs" (1976).
//!
//! An Euler partition divides the edges of a graph into open and closed
//! trails so that every vertex of odd degree ends exactly one open trail and
//! no vertex of even degree ends an open trail.  Splitting every trail into
//! alternate edges then halves each vertex degree, rounding either way.
use std::collections::VecDeque;

use crate::{
    directedness::Directedness,
    error::Result,
    graph::Graph,
    tracing_support::{debug, info_span},
};

/// A walk through a graph, given by the vertices it passes.  Consecutive
/// vertices were joined by an edge of the partitioned graph.
pub type Trail = Vec<usize>;

/// Finds an Euler partition of `graph`, removing every edge from it.
///
/// Odd-degree vertices are queued ahead of even-degree ones so that every
/// open trail starts at an odd vertex.  A trail follows the first remaining
/// edge of its current end until it reaches a vertex with no edges left; a
/// start vertex that still has edges afterwards is queued again behind all
/// the others.
pub fn euler_partition<D: Directedness>(graph: &mut Graph<D>) -> Result<Vec<Trail>> {
    let _span = info_span!(
        "euler_partition",
        vertices = graph.vertices_num(),
        edges = graph.num_edges()
    )
    .entered();

    // Pop from the back; odd vertices are pushed there.
    let mut queue = VecDeque::with_capacity(graph.vertices_num());
    for vertex in graph.vertices() {
        if graph.degree(vertex) % 2 == 1 {
            queue.push_back(vertex);
        } else {
            queue.push_front(vertex);
        }
    }

    let mut partition = Vec::new();
    while let Some(start) = queue.pop_back() {
        if graph.degree(start) == 0 {
            continue;
        }

        let mut trail = vec![start];
        let mut pivot = start;
        while let Some(&next) = graph.neighbors(pivot).first() {
            graph.remove_edge(pivot, next)?;
            trail.push(next);
            pivot = next;
        }
        partition.push(trail);

        if graph.degree(start) > 0 {
            queue.push_front(start);
        }
    }

    debug!(trails = partition.len(), "euler partition found");
    Ok(partition)
}

/// Splits `graph` into two graphs over the same vertices by dealing the
/// edges of each trail of its Euler partition alternately to either half,
/// starting over at every trail.  Consumes the edges of `graph`.
///
/// The degrees of every vertex in the two halves differ by at most one,
/// except at the start of a closed trail of odd length, which gets both of
/// its end edges in the second half.  A bipartite graph has no such trails.
/// Both halves have their maximum degree computed.
pub fn euler_split<D: Directedness>(graph: &mut Graph<D>) -> Result<(Graph<D>, Graph<D>)> {
    let _span = info_span!("euler_split", vertices = graph.vertices_num()).entered();

    let mut first = Graph::with_vertices(graph.vertices_num());
    let mut second = Graph::with_vertices(graph.vertices_num());

    for trail in euler_partition(graph)? {
        for (index, step) in trail.windows(2).enumerate() {
            let half = if index % 2 == 1 { &mut first } else { &mut second };
            half.add_edge(step[0], step[1]);
        }
    }

    first.update_max_degree();
    second.update_max_degree();
    Ok((first, second))
}
