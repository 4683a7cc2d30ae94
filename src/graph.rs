//! The adjacency-list multigraph every algorithm in this crate works on.
//!
//! Vertices are the dense indices `0..vertices_num`; there is no vertex
//! object.  Edges live only in the adjacency lists, in insertion order, and
//! duplicates are allowed.  The directedness parameter decides whether an
//! edge is stored once (in the list of its source) or mirrored in the lists
//! of both ends; see [`Directedness`].
//!
//! The maximum degree is cached and is *not* kept up to date by
//! [`Graph::add_edge`] and friends.  Call [`Graph::update_max_degree`] after
//! mutating a graph whose maximum degree is consulted later.
use std::{collections::BTreeMap, fmt, marker::PhantomData, ops::Range};

use bitvec::vec::BitVec;
use derivative::Derivative;

use crate::{
    directedness::{Directed, Directedness, Undirected},
    edge_key::EdgeKey,
    error::{GraphError, Result},
    util::remove_first,
};

/// An undirected multigraph: every edge appears in the adjacency lists of
/// both of its ends.
pub type UDGraph = Graph<Undirected>;

#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Graph<D: Directedness = Directed> {
    edges: Vec<Vec<usize>>,
    #[derivative(PartialEq = "ignore")]
    max_degree: usize,
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    directedness: PhantomData<D>,
}

impl<D: Directedness> Graph<D> {
    /// Creates a graph from an edge list, a source graph whose adjacency
    /// lists are copied, or both.  The new adjacency list of each vertex holds
    /// the entries from `edges` first and then the entries copied from
    /// `source`.
    ///
    /// The vertex count is the largest of `vertices_num`, one past the
    /// largest endpoint in `edges`, and the vertex count of `source`.
    pub fn new(
        edges: Option<&[(usize, usize)]>,
        source: Option<&Graph<D>>,
        vertices_num: Option<usize>,
    ) -> Self {
        let from_edges = edges
            .into_iter()
            .flatten()
            .map(|&(from, into)| from.max(into) + 1)
            .max()
            .unwrap_or(0);
        let from_source = source.map_or(0, Graph::vertices_num);
        let vertices_num = vertices_num.unwrap_or(0).max(from_edges).max(from_source);

        let mut graph = Self::with_vertices(vertices_num);
        for &(from, into) in edges.into_iter().flatten() {
            graph.add_edge(from, into);
        }
        if let Some(source) = source {
            for (ends, source_ends) in graph.edges.iter_mut().zip(&source.edges) {
                ends.extend_from_slice(source_ends);
            }
        }
        graph.update_max_degree();
        graph
    }

    /// Creates a graph with `vertices_num` isolated vertices.
    pub fn with_vertices(vertices_num: usize) -> Self {
        Self {
            edges: vec![Vec::new(); vertices_num],
            max_degree: 0,
            directedness: PhantomData,
        }
    }

    pub fn from_edges(edges: &[(usize, usize)]) -> Self {
        Self::new(Some(edges), None, None)
    }

    /// Creates an independent copy of the structure of `source`.
    pub fn from_graph(source: &Graph<D>) -> Self {
        Self::new(None, Some(source), None)
    }

    pub fn is_directed(&self) -> bool {
        D::is_directed()
    }

    pub fn vertices_num(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> Range<usize> {
        0..self.vertices_num()
    }

    /// The adjacency lists, indexed by vertex.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.edges
    }

    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.edges[vertex]
    }

    /// Gets the degree of a vertex: the length of its adjacency list.  For a
    /// directed graph this is the out-degree; in an undirected graph a
    /// self-loop counts twice.
    pub fn degree(&self, vertex: usize) -> usize {
        self.edges[vertex].len()
    }

    /// Gets the number of edges.  Each undirected edge is counted once.
    pub fn num_edges(&self) -> usize {
        let entries: usize = self.edges.iter().map(Vec::len).sum();
        if D::is_directed() { entries } else { entries / 2 }
    }

    /// Returns true if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.iter().all(Vec::is_empty)
    }

    /// Gets the cached maximum degree, as of the last call to
    /// [`Self::update_max_degree`] or construction.
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Scans every adjacency list for the maximum degree without touching
    /// the cache.
    pub fn compute_max_degree(&self) -> usize {
        self.edges.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Recomputes the cached maximum degree and returns it.
    pub fn update_max_degree(&mut self) -> usize {
        self.max_degree = self.compute_max_degree();
        self.max_degree
    }

    /// Gets the set of vertices whose degree is exactly `degree`.
    pub fn vertices_of_degree(&self, degree: usize) -> BitVec {
        self.edges.iter().map(|ends| ends.len() == degree).collect()
    }

    /// Gets the set of vertices having the (cached) maximum degree.  Empty if
    /// the graph has no edges.
    pub fn max_degree_vertices(&self) -> BitVec {
        if self.max_degree == 0 {
            BitVec::repeat(false, self.vertices_num())
        } else {
            self.vertices_of_degree(self.max_degree)
        }
    }

    /// Adds an edge from `from` to `into`.  Does not update the cached
    /// maximum degree.
    ///
    /// # Panics
    ///
    /// Panics if either end is not a vertex of the graph.
    pub fn add_edge(&mut self, from: usize, into: usize) {
        assert!(
            from < self.vertices_num() && into < self.vertices_num(),
            "edge ({from}, {into}) out of range for {} vertices",
            self.vertices_num()
        );
        self.edges[from].push(into);
        if !D::is_directed() {
            self.edges[into].push(from);
        }
    }

    /// Removes one edge from `from` to `into`: the first matching entry of
    /// each affected adjacency list.  Nothing is removed if the edge is
    /// absent, and an undirected edge is removed from both lists or neither.
    /// Does not update the cached maximum degree.
    pub fn remove_edge(&mut self, from: usize, into: usize) -> Result<()> {
        let missing = GraphError::MissingEdge { from, into };
        if from >= self.vertices_num() || into >= self.vertices_num() {
            return Err(missing);
        }
        if D::is_directed() {
            return if remove_first(&mut self.edges[from], &into) {
                Ok(())
            } else {
                Err(missing)
            };
        }

        let present = if from == into {
            self.edges[from].iter().filter(|&&end| end == into).count() >= 2
        } else {
            self.edges[from].contains(&into) && self.edges[into].contains(&from)
        };
        if !present {
            return Err(missing);
        }
        remove_first(&mut self.edges[from], &into);
        remove_first(&mut self.edges[into], &from);
        Ok(())
    }

    /// Appends the adjacency entries of `other` onto those of `self`.  Does
    /// not update the cached maximum degree.
    pub fn union(&mut self, other: &Graph<D>) -> Result<&mut Self> {
        self.check_same_vertices(other)?;
        for (ends, other_ends) in self.edges.iter_mut().zip(&other.edges) {
            ends.extend_from_slice(other_ends);
        }
        Ok(self)
    }

    /// Like [`Self::union`], but consumes `other`, reusing its storage when
    /// `self` has no edges yet.
    pub fn absorb(&mut self, other: Graph<D>) -> Result<()> {
        self.check_same_vertices(&other)?;
        if self.is_empty() {
            self.edges = other.edges;
        } else {
            for (ends, other_ends) in self.edges.iter_mut().zip(other.edges) {
                ends.extend(other_ends);
            }
        }
        Ok(())
    }

    /// Moves every edge out of `self` into a new graph, leaving `self` with
    /// the same vertices and no edges.
    pub fn take_edges(&mut self) -> Graph<D> {
        let vertices_num = self.vertices_num();
        let edges = std::mem::replace(&mut self.edges, vec![Vec::new(); vertices_num]);
        let max_degree = std::mem::take(&mut self.max_degree);
        Graph {
            edges,
            max_degree,
            directedness: PhantomData,
        }
    }

    /// Lists every edge once as `(from, into)`, ordered by `from` and then by
    /// adjacency order.  An undirected edge is reported from its smaller end.
    pub fn edge_list(&self) -> Vec<(usize, usize)> {
        let mut list = Vec::with_capacity(self.num_edges());
        for (from, ends) in self.edges.iter().enumerate() {
            let mut self_loops = 0;
            for &into in ends {
                if D::is_directed() || from < into {
                    list.push((from, into));
                } else if from == into {
                    // Each undirected self-loop occupies two entries.
                    self_loops += 1;
                    if self_loops % 2 == 0 {
                        list.push((from, into));
                    }
                }
            }
        }
        list
    }

    /// Counts the edges by identity, for comparing graphs as edge multisets
    /// regardless of adjacency order.
    pub fn edge_multiset(&self) -> BTreeMap<EdgeKey, usize> {
        let mut counts = BTreeMap::new();
        for (from, into) in self.edge_list() {
            *counts.entry(EdgeKey::new::<D>(from, into)).or_insert(0) += 1;
        }
        counts
    }

    fn check_same_vertices(&self, other: &Graph<D>) -> Result<()> {
        if self.vertices_num() == other.vertices_num() {
            Ok(())
        } else {
            Err(GraphError::VertexCountMismatch {
                left: self.vertices_num(),
                right: other.vertices_num(),
            })
        }
    }
}

impl<D: Directedness> fmt::Display for Graph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDGES_LIST: [(usize, usize); 6] = [(0, 1), (0, 3), (1, 2), (2, 0), (2, 3), (3, 2)];

    fn edges_incidence() -> Vec<Vec<usize>> {
        vec![vec![1, 3], vec![2], vec![0, 3], vec![2]]
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::<Directed>::default();
        assert_eq!(graph.vertices_num(), 0);
        assert_eq!(graph.max_degree(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_creation_by_edges() {
        let graph = Graph::<Directed>::from_edges(&EDGES_LIST);
        assert_eq!(graph.adjacency(), edges_incidence().as_slice());
        assert_eq!(graph.max_degree(), 2);
        assert_eq!(graph.num_edges(), 6);
    }

    #[test]
    fn test_creation_by_graph() {
        let origin = Graph::<Directed>::from_edges(&EDGES_LIST);
        let graph = Graph::from_graph(&origin);
        assert_eq!(graph.adjacency(), edges_incidence().as_slice());
        assert_eq!(graph.max_degree(), 2);
    }

    #[test]
    fn test_creation_by_edges_and_larger_graph() {
        let origin = Graph::<Directed>::from_edges(&EDGES_LIST);
        let graph = Graph::new(Some(&[(0, 2), (1, 0)][..]), Some(&origin), None);
        assert_eq!(
            graph.adjacency(),
            &[vec![2, 1, 3], vec![0, 2], vec![0, 3], vec![2]]
        );
        assert_eq!(graph.max_degree(), 3);
    }

    #[test]
    fn test_creation_by_larger_edges_and_graph() {
        let origin = Graph::<Directed>::from_edges(&EDGES_LIST);
        let graph = Graph::new(Some(&[(4, 0), (4, 2)][..]), Some(&origin), None);
        assert_eq!(
            graph.adjacency(),
            &[vec![1, 3], vec![2], vec![0, 3], vec![2], vec![0, 2]]
        );
        assert_eq!(graph.max_degree(), 2);
    }

    #[test]
    fn test_creation_with_vertices_only() {
        let graph = Graph::<Directed>::with_vertices(5);
        assert_eq!(graph.adjacency(), &[vec![], vec![], vec![], vec![], vec![]]);
        assert_eq!(graph.max_degree(), 0);
    }

    #[test]
    fn test_explicit_vertex_count() {
        let tight = Graph::<Directed>::new(Some(&EDGES_LIST[..]), None, Some(4));
        assert_eq!(tight.adjacency(), edges_incidence().as_slice());

        let wide = Graph::<Directed>::new(Some(&EDGES_LIST[..]), None, Some(5));
        let mut expected = edges_incidence();
        expected.push(vec![]);
        assert_eq!(wide.adjacency(), expected.as_slice());
        assert_eq!(wide.max_degree(), 2);

        // An explicit count never truncates.
        let short = Graph::<Directed>::new(Some(&EDGES_LIST[..]), None, Some(2));
        assert_eq!(short.vertices_num(), 4);
    }

    #[test]
    fn test_undirected_storage_is_symmetric() {
        let graph = UDGraph::from_edges(&[(0, 3), (0, 4), (1, 3)]);
        assert_eq!(
            graph.adjacency(),
            &[vec![3, 4], vec![3], vec![], vec![0, 1], vec![0]]
        );
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.edge_list(), vec![(0, 3), (0, 4), (1, 3)]);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = UDGraph::from_edges(&[(0, 1), (0, 1), (1, 2)]);
        graph.remove_edge(1, 0).unwrap();
        assert_eq!(graph.adjacency(), &[vec![1], vec![0, 2], vec![1]]);
        assert_eq!(
            graph.remove_edge(0, 2),
            Err(GraphError::MissingEdge { from: 0, into: 2 })
        );
        assert_eq!(graph.adjacency(), &[vec![1], vec![0, 2], vec![1]]);

        let mut directed = Graph::<Directed>::from_edges(&[(0, 1)]);
        assert!(directed.remove_edge(1, 0).is_err());
        directed.remove_edge(0, 1).unwrap();
        assert!(directed.is_empty());
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph = UDGraph::from_edges(&[(1, 1), (0, 1)]);
        assert_eq!(graph.degree(1), 3);
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.edge_list(), vec![(0, 1), (1, 1)]);
        graph.remove_edge(1, 1).unwrap();
        assert_eq!(graph.adjacency(), &[vec![1], vec![0]]);
        assert!(graph.remove_edge(1, 1).is_err());
    }

    #[test]
    fn test_max_degree_is_refreshed_on_demand() {
        let mut graph = UDGraph::from_edges(&[(0, 1)]);
        graph.add_edge(0, 1);
        assert_eq!(graph.max_degree(), 1);
        assert_eq!(graph.compute_max_degree(), 2);
        assert_eq!(graph.update_max_degree(), 2);
        assert_eq!(graph.max_degree(), 2);
        assert_eq!(graph.max_degree_vertices().iter_ones().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_union() {
        let mut graph = UDGraph::from_edges(&[(0, 1)]);
        let other = UDGraph::from_edges(&[(1, 2)]);
        assert_eq!(
            graph.union(&other).map(|_| ()),
            Err(GraphError::VertexCountMismatch { left: 2, right: 3 })
        );

        let mut graph = UDGraph::new(Some(&[(0, 1)][..]), None, Some(3));
        graph.union(&other).unwrap();
        assert_eq!(graph.adjacency(), &[vec![1], vec![0, 2], vec![1]]);
        assert_eq!(graph.max_degree(), 1);
    }

    #[test]
    fn test_absorb_and_take_edges() {
        let mut graph = UDGraph::new(Some(&[(0, 1)][..]), None, Some(3));
        let taken = graph.take_edges();
        assert!(graph.is_empty());
        assert_eq!(graph.vertices_num(), 3);
        assert_eq!(taken.max_degree(), 1);

        graph.absorb(taken).unwrap();
        graph.absorb(UDGraph::from_edges(&[(1, 2)])).unwrap();
        assert_eq!(graph.adjacency(), &[vec![1], vec![0, 2], vec![1]]);
    }

    #[test]
    fn test_edge_multiset_ignores_order() {
        let one = UDGraph::from_edges(&[(0, 1), (1, 2), (0, 1)]);
        let two = UDGraph::from_edges(&[(2, 1), (1, 0), (0, 1)]);
        assert_ne!(one, two);
        assert_eq!(one.edge_multiset(), two.edge_multiset());
    }
}
