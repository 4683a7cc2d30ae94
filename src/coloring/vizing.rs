//! Vizing's edge coloring with Δ + 1 colors.
//!
//! Edges are colored one at a time.  An edge whose ends share a missing
//! color takes it.  Otherwise, with `a` missing at one end `u` and `b`
//! missing at the other end `v`, the edge takes `a` and the path of edges
//! colored `a`, `b`, `a`, ... leaving `v` has its two colors swapped.  In a
//! bipartite graph that path can never reach `u`.  When it would (an odd
//! cycle), the edge is colored by a Misra–Gries fan rotation instead.
use std::marker::PhantomData;

use bitvec::vec::BitVec;

use crate::{
    coloring::Coloring,
    directedness::Directedness,
    error::{GraphError, Result},
    graph::Graph,
    tracing_support::{debug, info_span},
};

type EdgeIndex = usize;

/// Vizing coloring state for one graph.  Edges are numbered in the order of
/// [`Graph::edge_list`], so parallel edges are told apart.
pub struct VizingColoring<D: Directedness> {
    ends: Vec<(usize, usize)>,
    incidence: Vec<Vec<EdgeIndex>>,
    color: Vec<Option<usize>>,
    num_colors: usize,
    directedness: PhantomData<D>,
}

impl<D: Directedness> VizingColoring<D> {
    /// Prepares to color `graph`.  The colors are `0..=Δ`, where Δ counts
    /// every edge touching a vertex, whatever its direction.
    pub fn new(graph: &Graph<D>) -> Result<Self> {
        let ends = graph.edge_list();
        let mut incidence = vec![Vec::new(); graph.vertices_num()];
        for (edge, &(from, into)) in ends.iter().enumerate() {
            if from == into {
                return Err(GraphError::SelfLoop(from));
            }
            incidence[from].push(edge);
            incidence[into].push(edge);
        }
        let max_degree = incidence.iter().map(Vec::len).max().unwrap_or(0);

        Ok(Self {
            color: vec![None; ends.len()],
            ends,
            incidence,
            num_colors: max_degree + 1,
            directedness: PhantomData,
        })
    }

    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    pub fn colorize(mut self) -> Result<Coloring<D>> {
        let _span = info_span!(
            "vizing",
            edges = self.ends.len(),
            colors = self.num_colors
        )
        .entered();

        for edge in 0..self.ends.len() {
            if self.color[edge].is_none() {
                self.color_edge(edge)?;
            }
        }

        let mut coloring = Coloring::new();
        for (&(from, into), color) in self.ends.iter().zip(&self.color) {
            if let Some(color) = *color {
                coloring.set_color(from, into, color);
            }
        }
        Ok(coloring)
    }

    fn color_edge(&mut self, edge: EdgeIndex) -> Result<()> {
        let (start, end) = self.ends[edge];
        let missing_start = self.missing_colors(start);
        let missing_end = self.missing_colors(end);

        if let Some(common) = missing_start.iter_ones().find(|&color| missing_end[color]) {
            self.set_color(edge, Some(common));
            return Ok(());
        }

        let exhausted = GraphError::ColorsExhausted {
            from: start,
            into: end,
            num_colors: self.num_colors,
        };
        let color = missing_start.first_one().ok_or(exhausted.clone())?;
        let color_next = missing_end.first_one().ok_or(exhausted)?;

        let (path, path_end) = self.alternating_path(end, color, color_next);
        if path_end == start {
            debug!(start, end, "alternating path closes an odd cycle, rotating fan");
            return self.rotate_fan(edge, start, end);
        }

        debug!(start, end, length = path.len(), "swapping alternating path");
        self.set_color(edge, Some(color));
        self.swap_colors(&path, color, color_next);
        Ok(())
    }

    /// Misra–Gries step for the uncolored `edge` from `center` to `first`.
    fn rotate_fan(&mut self, edge: EdgeIndex, center: usize, first: usize) -> Result<()> {
        let exhausted = GraphError::ColorsExhausted {
            from: center,
            into: first,
            num_colors: self.num_colors,
        };

        // A maximal fan: each next edge has a color missing at the previous
        // fan vertex.
        let mut fan = vec![(first, edge)];
        loop {
            let (last, _) = fan[fan.len() - 1];
            let missing_last = self.missing_colors(last);
            let next = self.incidence[center].iter().copied().find_map(|candidate| {
                let vertex = self.other_end(candidate, center);
                let color = self.color[candidate]?;
                (missing_last[color] && fan.iter().all(|&(member, _)| member != vertex))
                    .then_some((vertex, candidate))
            });
            match next {
                Some(member) => fan.push(member),
                None => break,
            }
        }

        let (last, _) = fan[fan.len() - 1];
        let free_center = self
            .missing_colors(center)
            .first_one()
            .ok_or(exhausted.clone())?;
        let free_last = self
            .missing_colors(last)
            .first_one()
            .ok_or(exhausted.clone())?;

        if free_center != free_last {
            let (path, _) = self.alternating_path(center, free_last, free_center);
            self.swap_colors(&path, free_last, free_center);
        }

        // The shortest prefix of the fan, still a fan after the swap, that
        // ends at a vertex missing `free_last`.
        let mut pivot = None;
        for index in 0..fan.len() {
            if index > 0 {
                let (previous, _) = fan[index - 1];
                let (_, member_edge) = fan[index];
                let still_fan = self.color[member_edge]
                    .is_some_and(|color| self.missing_colors(previous)[color]);
                if !still_fan {
                    break;
                }
            }
            if self.missing_colors(fan[index].0)[free_last] {
                pivot = Some(index);
                break;
            }
        }
        let pivot = pivot.ok_or(exhausted)?;

        for index in 0..pivot {
            let shifted = self.color[fan[index + 1].1];
            self.set_color(fan[index].1, shifted);
        }
        self.set_color(fan[pivot].1, Some(free_last));
        Ok(())
    }

    /// Follows edges colored `color`, `color_next`, `color`, ... from
    /// `start` for as long as possible.  Returns the edges passed and the
    /// vertex the path ends at.
    fn alternating_path(
        &self,
        start: usize,
        color: usize,
        color_next: usize,
    ) -> (Vec<EdgeIndex>, usize) {
        let mut path = Vec::new();
        let mut vertex = start;
        let (mut wanted, mut other) = (color, color_next);
        while let Some(edge) = self.edge_with_color(vertex, wanted) {
            path.push(edge);
            vertex = self.other_end(edge, vertex);
            (wanted, other) = (other, wanted);
        }
        (path, vertex)
    }

    fn swap_colors(&mut self, path: &[EdgeIndex], one: usize, two: usize) {
        for &edge in path {
            let swapped = match self.color[edge] {
                Some(color) if color == one => two,
                _ => one,
            };
            self.set_color(edge, Some(swapped));
        }
    }

    fn set_color(&mut self, edge: EdgeIndex, color: Option<usize>) {
        self.color[edge] = color;
    }

    /// Gets the set of colors not used by any edge at `vertex`.
    fn missing_colors(&self, vertex: usize) -> BitVec {
        let mut missing = BitVec::repeat(true, self.num_colors);
        for &edge in &self.incidence[vertex] {
            if let Some(color) = self.color[edge] {
                missing.set(color, false);
            }
        }
        missing
    }

    fn edge_with_color(&self, vertex: usize, color: usize) -> Option<EdgeIndex> {
        self.incidence[vertex]
            .iter()
            .copied()
            .find(|&edge| self.color[edge] == Some(color))
    }

    fn other_end(&self, edge: EdgeIndex, vertex: usize) -> usize {
        let (from, into) = self.ends[edge];
        if from == vertex { into } else { from }
    }
}
