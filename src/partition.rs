//! Degree-preserving graph halving, after Cole and Hopcroft, "On Edge
//! Coloring Bipartite Graphs" (1982).
//!
//! A covering partition splits a graph into two edge-disjoint halves such
//! that every vertex of maximum degree in the graph has maximum degree in
//! both halves.  For an even maximum degree an Euler split already does
//! this.  For an odd maximum degree `D = 4k + d` (`d = ±1`) an Euler split
//! gives each maximum-degree vertex degrees `2k + d` and `2k` in some order;
//! the minority with the "wrong" order is fixed by repeatedly Euler
//! splitting the half they are unbalanced in and moving one of its halves
//! across, which at least halves the minority every round.
use std::mem::swap;

use bitvec::vec::BitVec;

use crate::{
    directedness::Directedness,
    error::Result,
    euler::euler_split,
    graph::Graph,
    tracing_support::{debug, info_span},
};

/// Partitions the edges of `graph` into two halves whose maximum-degree
/// vertices include every maximum-degree vertex of `graph`.  Consumes the
/// edges of `graph`; the halves have their maximum degree computed.
///
/// `graph` must be bipartite; this is not checked.
pub fn covering_partition<D: Directedness>(graph: &mut Graph<D>) -> Result<(Graph<D>, Graph<D>)> {
    let max_degree = graph.update_max_degree();
    let _span = info_span!(
        "covering_partition",
        vertices = graph.vertices_num(),
        max_degree
    )
    .entered();

    if max_degree % 2 == 0 {
        return euler_split(graph);
    }

    let (mut k, mut d) = if max_degree % 4 == 3 {
        (max_degree / 4 + 1, -1)
    } else {
        (max_degree / 4, 1)
    };

    let covered = graph.max_degree_vertices();
    let (mut first, mut second) = euler_split(graph)?;

    // Vertices of `covered` with degree 2k + d in `first` are balanced:
    // they have degree 2k in `second`.  Keep the majority balanced.
    let (balanced, mut unbalanced) = split_by_degree(&covered, &first, (2 * k).checked_add_signed(d));
    if 2 * balanced.count_ones() < covered.count_ones() {
        swap(&mut first, &mut second);
        unbalanced = balanced;
    }

    // Invariant: balanced vertices have degree 2k in `second` and the
    // unbalanced ones have degree 2k + d there.
    while unbalanced.any() {
        debug!(k, d, unbalanced = unbalanced.count_ones(), "balancing round");

        let (mut moved, mut kept) = euler_split(&mut second)?;
        let (fixed, mut still_unbalanced) = split_by_degree(&unbalanced, &moved, k.checked_add_signed(d));
        if 2 * fixed.count_ones() < unbalanced.count_ones() {
            swap(&mut moved, &mut kept);
            still_unbalanced = fixed;
        }

        first.absorb(moved)?;
        second = kept;
        unbalanced = still_unbalanced;

        if k % 2 == 0 {
            k /= 2;
        } else {
            swap(&mut first, &mut second);
            k = (max_degree - k) / 2;
            d = -d;
        }
    }

    first.update_max_degree();
    second.update_max_degree();
    Ok((first, second))
}

/// Splits `vertices` into the members whose degree in `graph` is `degree`
/// and the rest.
fn split_by_degree<D: Directedness>(
    vertices: &BitVec,
    graph: &Graph<D>,
    degree: Option<usize>,
) -> (BitVec, BitVec) {
    let mut matching = BitVec::repeat(false, vertices.len());
    let mut others = BitVec::repeat(false, vertices.len());
    for vertex in vertices.iter_ones() {
        if Some(graph.degree(vertex)) == degree {
            matching.set(vertex, true);
        } else {
            others.set(vertex, true);
        }
    }
    (matching, others)
}
