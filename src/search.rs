//! Breadth-first and depth-first traversals over vertex indices, and cycle
//! detection.
use std::{collections::VecDeque, ops::Range};

use bitvec::vec::BitVec;
use pathfinding::prelude::bfs_reach;

use crate::{directedness::Directedness, graph::Graph};

/// Yields each vertex reachable from the start vertices once, nearest first.
/// Created with [`BfsIterator::all`], it then continues from the lowest
/// unvisited vertex until every vertex is visited.
pub struct BfsIterator<'g, D: Directedness> {
    graph: &'g Graph<D>,
    visited: BitVec,
    queue: VecDeque<usize>,
    roots: Option<Range<usize>>,
}

impl<'g, D: Directedness> BfsIterator<'g, D> {
    pub fn new(graph: &'g Graph<D>, start: Vec<usize>) -> Self {
        Self {
            graph,
            visited: BitVec::repeat(false, graph.vertices_num()),
            queue: start.into(),
            roots: None,
        }
    }

    /// Visits every component, in order of its lowest vertex.
    pub fn all(graph: &'g Graph<D>) -> Self {
        Self {
            roots: Some(graph.vertices()),
            ..Self::new(graph, Vec::new())
        }
    }
}

impl<D: Directedness> Iterator for BfsIterator<'_, D> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(vertex) = self.queue.pop_front() {
                if self.visited.replace(vertex, true) {
                    continue;
                }
                self.queue.extend(
                    self.graph
                        .neighbors(vertex)
                        .iter()
                        .filter(|&&neighbor| !self.visited[neighbor]),
                );
                return Some(vertex);
            }
            let root = self.roots.as_mut()?.find(|&root| !self.visited[root])?;
            self.queue.push_back(root);
        }
    }
}

/// Yields each vertex reachable from the start vertices once, following the
/// first unexplored edge of the latest vertex first.  Created with
/// [`DfsIterator::all`], it covers every component like
/// [`BfsIterator::all`].
pub struct DfsIterator<'g, D: Directedness> {
    graph: &'g Graph<D>,
    visited: BitVec,
    stack: Vec<usize>,
    roots: Option<Range<usize>>,
}

impl<'g, D: Directedness> DfsIterator<'g, D> {
    pub fn new(graph: &'g Graph<D>, start: Vec<usize>) -> Self {
        let mut stack = start;
        stack.reverse();
        Self {
            graph,
            visited: BitVec::repeat(false, graph.vertices_num()),
            stack,
            roots: None,
        }
    }

    pub fn all(graph: &'g Graph<D>) -> Self {
        Self {
            roots: Some(graph.vertices()),
            ..Self::new(graph, Vec::new())
        }
    }
}

impl<D: Directedness> Iterator for DfsIterator<'_, D> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(vertex) = self.stack.pop() {
                if self.visited.replace(vertex, true) {
                    continue;
                }
                self.stack
                    .extend(self.graph.neighbors(vertex).iter().rev().copied());
                return Some(vertex);
            }
            let root = self.roots.as_mut()?.find(|&root| !self.visited[root])?;
            self.stack.push(root);
        }
    }
}

impl<D: Directedness> Graph<D> {
    /// Breadth-first traversal of every vertex.
    pub fn bfs(&self) -> BfsIterator<'_, D> {
        BfsIterator::all(self)
    }

    /// Depth-first traversal of every vertex.
    pub fn dfs(&self) -> DfsIterator<'_, D> {
        DfsIterator::all(self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    Active,
    Done,
}

/// Returns true if `graph` contains a cycle.  In an undirected graph a
/// self-loop or a pair of parallel edges is a cycle; in a directed graph only
/// a directed cycle counts.
pub fn has_cycle<D: Directedness>(graph: &Graph<D>) -> bool {
    if D::is_directed() {
        has_directed_cycle(graph)
    } else {
        // A forest has exactly one edge fewer than vertices per component.
        let mut seen = BitVec::<usize>::repeat(false, graph.vertices_num());
        let mut components = 0;
        for root in graph.vertices() {
            if seen[root] {
                continue;
            }
            components += 1;
            for vertex in bfs_reach(root, |&vertex| graph.neighbors(vertex).iter().copied()) {
                seen.set(vertex, true);
            }
        }
        graph.num_edges() + components > graph.vertices_num()
    }
}

fn has_directed_cycle<D: Directedness>(graph: &Graph<D>) -> bool {
    let mut visits = vec![Visit::New; graph.vertices_num()];
    for root in graph.vertices() {
        if visits[root] != Visit::New {
            continue;
        }
        visits[root] = Visit::Active;
        let mut stack = vec![(root, 0)];
        while let Some((vertex, index)) = stack.last_mut() {
            let vertex = *vertex;
            let Some(&next) = graph.neighbors(vertex).get(*index) else {
                visits[vertex] = Visit::Done;
                stack.pop();
                continue;
            };
            *index += 1;
            match visits[next] {
                Visit::Active => return true,
                Visit::New => {
                    visits[next] = Visit::Active;
                    stack.push((next, 0));
                }
                Visit::Done => {}
            }
        }
    }
    false
}
