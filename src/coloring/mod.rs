//! Edge colorings and the algorithms that compute them.
//!
//! An edge coloring assigns a color index to every edge so that edges
//! sharing a vertex get different colors.  Two algorithms are provided:
//!
//! - [`Algorithm::Vizing`]: any loopless graph, at most Δ + 1 colors for
//!   simple graphs and bipartite multigraphs.
//! - [`Algorithm::ColeHopcroft`]: bipartite (multi)graphs, exactly Δ colors.
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    marker::PhantomData,
    str::FromStr,
};

use derivative::Derivative;

use crate::{
    bipartite::is_bipartite,
    directedness::{Directedness, Undirected},
    edge_key::EdgeKey,
    error::{GraphError, Result},
    graph::Graph,
    tracing_support::info_span,
};

pub mod cole_hopcroft;
pub mod vizing;

use self::{cole_hopcroft::ColeHopcroftColoring, vizing::VizingColoring};

/// The colors assigned to the edges of a graph.  Each edge identity maps to
/// the colors of its parallel copies, in the order they were assigned.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Coloring<D: Directedness = Undirected> {
    colors: BTreeMap<EdgeKey, Vec<usize>>,
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    directedness: PhantomData<D>,
}

impl<D: Directedness> Coloring<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colors one copy of the edge between `from` and `into`.  For an
    /// undirected graph both orientations name the same edge.
    pub fn set_color(&mut self, from: usize, into: usize, color: usize) {
        self.colors
            .entry(EdgeKey::new::<D>(from, into))
            .or_default()
            .push(color);
    }

    /// Gets the color of the edge between `from` and `into`, or of its first
    /// copy if it has parallel copies.
    pub fn color(&self, from: usize, into: usize) -> Option<usize> {
        self.colors(from, into).first().copied()
    }

    /// Gets the colors of every copy of the edge between `from` and `into`.
    pub fn colors(&self, from: usize, into: usize) -> &[usize] {
        self.colors
            .get(&EdgeKey::new::<D>(from, into))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Gets the number of colored edges, counting parallel copies.
    pub fn len(&self) -> usize {
        self.colors.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Gets the number of distinct colors in use.
    pub fn num_colors(&self) -> usize {
        self.colors.values().flatten().collect::<BTreeSet<_>>().len()
    }

    /// Iterates over every colored edge copy, ordered by edge identity.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, usize)> + '_ {
        self.colors
            .iter()
            .flat_map(|(&key, colors)| colors.iter().map(move |&color| (key, color)))
    }

    /// Collects the edges of each color into a graph over `vertices_num`
    /// vertices, indexed by color.
    ///
    /// # Panics
    ///
    /// Panics if an edge end is not below `vertices_num`.
    pub fn color_classes(&self, vertices_num: usize) -> Vec<Graph<D>> {
        let mut classes = Vec::new();
        for (key, color) in self.iter() {
            if classes.len() <= color {
                classes.resize_with(color + 1, || Graph::with_vertices(vertices_num));
            }
            classes[color].add_edge(key.source(), key.target());
        }
        for class in &mut classes {
            class.update_max_degree();
        }
        classes
    }

    /// Checks that this colors exactly the edges of `graph` and that no two
    /// edges sharing a vertex have the same color.
    pub fn is_proper(&self, graph: &Graph<D>) -> bool {
        let counts: BTreeMap<EdgeKey, usize> = self
            .colors
            .iter()
            .map(|(&key, colors)| (key, colors.len()))
            .collect();
        if counts != graph.edge_multiset() {
            return false;
        }

        let mut seen: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); graph.vertices_num()];
        self.iter().all(|(key, color)| {
            !key.is_self_loop()
                && seen[key.source()].insert(color)
                && seen[key.target()].insert(color)
        })
    }
}

/// The edge coloring algorithms understood by [`colorize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Vizing,
    ColeHopcroft,
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "Vizing" | "Vising" | "vizing" => Ok(Algorithm::Vizing),
            "Cole-Hopcroft" | "ColeHopcroft" | "cole-hopcroft" => Ok(Algorithm::ColeHopcroft),
            _ => Err(GraphError::UnknownAlgorithm(name.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Vizing => write!(f, "Vizing"),
            Algorithm::ColeHopcroft => write!(f, "Cole-Hopcroft"),
        }
    }
}

/// Edge colors `graph` with the given algorithm.  `graph` itself is left
/// untouched.
///
/// Both algorithms count Δ on the underlying undirected graph: an arc uses up
/// a color at both of its ends.  For a directed graph this can exceed
/// [`Graph::max_degree`], which counts out-degrees only.
/// [`Algorithm::ColeHopcroft`] uses exactly that Δ colors and
/// [`Algorithm::Vizing`] at most Δ + 1.
///
/// [`Algorithm::ColeHopcroft`] fails with [`GraphError::NotBipartite`] on a
/// graph that is not bipartite.  [`Algorithm::Vizing`] fails with
/// [`GraphError::SelfLoop`] on a graph with a self-loop.
pub fn colorize<D: Directedness>(graph: &Graph<D>, algorithm: Algorithm) -> Result<Coloring<D>> {
    let _span = info_span!(
        "colorize",
        %algorithm,
        vertices = graph.vertices_num(),
        edges = graph.num_edges()
    )
    .entered();

    match algorithm {
        Algorithm::Vizing => VizingColoring::new(graph)?.colorize(),
        Algorithm::ColeHopcroft => {
            if !is_bipartite(graph) {
                return Err(GraphError::NotBipartite);
            }
            // Colors are shared by both ends of an arc, so the halving runs on
            // the underlying undirected graph.  Orientations are restored per
            // parallel copy afterwards.
            let mut underlying = Graph::<Undirected>::with_vertices(graph.vertices_num());
            let mut orientations: BTreeMap<EdgeKey, Vec<(usize, usize)>> = BTreeMap::new();
            for (from, into) in graph.edge_list() {
                underlying.add_edge(from, into);
                orientations
                    .entry(EdgeKey::new::<Undirected>(from, into))
                    .or_default()
                    .push((from, into));
            }

            let classes = ColeHopcroftColoring::new().colorize(underlying)?;
            let mut coloring = Coloring::new();
            for (color, class) in classes.iter().enumerate() {
                for (from, into) in class.edge_list() {
                    if let Some((from, into)) = orientations
                        .get_mut(&EdgeKey::new::<Undirected>(from, into))
                        .and_then(Vec::pop)
                    {
                        coloring.set_color(from, into, color);
                    }
                }
            }
            Ok(coloring)
        }
    }
}

/// Like [`colorize`], with the algorithm given by name (`"Vizing"` or
/// `"Cole-Hopcroft"`).
pub fn colorize_by_name<D: Directedness>(graph: &Graph<D>, algorithm: &str) -> Result<Coloring<D>> {
    colorize(graph, algorithm.parse()?)
}
