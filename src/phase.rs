use std::collections::{HashSet, VecDeque};
use tracing::debug;
use crate::coloring::{make_coloring, Coloring};
use crate::error::{Invariant, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::repair::try_replace_vertex;

/// State of a single phase: the frozen tree of the previous phase and the tree that is
/// built in this phase, from which all vertices at the degree ceiling have been removed.
///
#[derive(Debug)]
pub struct Workspace<'a> {
    pub g:         &'a Graph,         // input graph
    pub prev_iter: &'a Graph,         // tree accepted at the start of the phase
    pub iter:      Graph,             // tree under construction, forbidden vertices removed
    pub forbidden: HashSet<Vertex>,   // vertices of degree `ceiling` in prev_iter
    pub ceiling:   usize,
}

impl<'a> Workspace<'a> {

    /// Copy prev_iter and remove every vertex that attains the ceiling.
    ///
    pub fn new(g: &'a Graph, prev_iter: &'a Graph, ceiling: usize) -> Workspace<'a> {
        let mut iter = prev_iter.clone();
        let mut forbidden = HashSet::new();
        for &v in prev_iter.vertices() {
            if prev_iter.degree(v) == ceiling {
                iter.remove_vertex(v);
                forbidden.insert(v);
            }
        }
        Workspace { g, prev_iter, iter, forbidden, ceiling }
    }

    /// Non-forbidden vertices must stay strictly below this degree before a merge edge
    /// is attached to them.
    ///
    pub fn limit(&self) -> usize {
        self.ceiling.saturating_sub(1)
    }

    /// Degree u will have in the finished tree, i.e., its degree in the working tree
    /// plus its edges to forbidden vertices that get reattached at the end of the phase.
    ///
    pub fn projected_degree(&self, u: Vertex) -> usize {
        let to_forbidden = self.prev_iter.neighbors(u)
                                         .filter(|w| self.forbidden.contains(w))
                                         .count();
        self.iter.degree(u) + to_forbidden
    }
}

#[derive(Debug)]
pub struct PhaseOutcome {
    pub tree:            Graph,
    pub success:         bool,
    pub last_bottleneck: bool, // exactly one vertex was at the ceiling
}

impl PhaseOutcome {
    fn failed(tree: Graph) -> PhaseOutcome {
        PhaseOutcome { tree, success: false, last_bottleneck: false }
    }
}

/// One round of degree reduction under a fixed ceiling.
///
/// The vertices of degree `ceiling` are cut out of the tree, which splits it into
/// components. An edge of g joining two components is added, and when the forbidden
/// vertices are reattached the one tree edge that would close a cycle is left out. That
/// edge always touches a forbidden vertex, so the number of vertices at the ceiling drops.
///
/// On failure the returned tree is prev_iter itself.
///
pub fn phase(g: &Graph, prev_iter: Graph, ceiling: usize) -> Result<PhaseOutcome> {
    let outcome = match rebuild(g, &prev_iter, ceiling)? {
        Some((tree, last_bottleneck)) => PhaseOutcome { tree, success: true, last_bottleneck },
        None                          => PhaseOutcome::failed(prev_iter),
    };
    Ok(outcome)
}

/// The new tree of a successful phase, and whether a single vertex was at the ceiling.
///
fn rebuild(g: &Graph, prev_iter: &Graph, ceiling: usize) -> Result<Option<(Graph, bool)>> {
    let mut ws = Workspace::new(g, prev_iter, ceiling);
    if ws.iter.number_of_vertices() == 0 {
        debug!(ceiling, "every vertex is at the ceiling");
        return Ok(None);
    }

    // for quick partition identifying
    let colors = make_coloring(&ws.iter, &ws.forbidden, ws.iter.vertices().iter().copied());
    debug!(ceiling, forbidden = ws.forbidden.len(), components = colors.number_of_colors(), "phase");

    let limit = ws.limit();
    let mut merge = g.edges()
                     .iter()
                     .copied()
                     .find(|&(u, w)| colors.separates(u, w)
                                     && ws.projected_degree(u) < limit
                                     && ws.projected_degree(w) < limit);
    if merge.is_none() {
        merge = find_repaired_merge(&mut ws, &colors)?;
    }
    let edge = match merge {
        Some(e) => e,
        None => {
            debug!(ceiling, "no merge edge");
            return Ok(None);
        }
    };
    ws.iter.add_edge(edge);

    let dropped = dropped_edge(prev_iter, &colors, edge)
        .ok_or(Invariant::NoDroppableEdge { edge })?;
    debug!(?edge, ?dropped, "merged components");

    for &f in ws.forbidden.iter() {
        ws.iter.add_vertex(f);
        for to in prev_iter.neighbors(f) {
            if dropped == (f, to) || dropped == (to, f) {
                continue;
            }
            ws.iter.add_edge((f, to));
        }
    }

    let last_bottleneck = ws.forbidden.len() == 1;
    Ok(Some((ws.iter, last_bottleneck)))
}

/// Second pass of the merge search: accept endpoints at the limit if a local repair
/// makes room at them first. Repairs done for an edge that is skipped later stay in place.
///
fn find_repaired_merge(ws: &mut Workspace, colors: &Coloring) -> Result<Option<Edge>> {
    let g = ws.g;
    for &(u, w) in g.edges() {
        if !colors.separates(u, w) {
            continue;
        }
        if !make_room(ws, u)? || !make_room(ws, w)? {
            continue;
        }
        return Ok(Some((u, w)));
    }
    Ok(None)
}

fn make_room(ws: &mut Workspace, u: Vertex) -> Result<bool> {
    let limit = ws.limit();
    let degree = ws.projected_degree(u);
    if degree < limit {
        Ok(true)
    } else if degree == limit {
        try_replace_vertex(u, ws)
    } else {
        Ok(false)
    }
}

/// The edge of prev_iter that closes a cycle together with the merge edge {first, second}.
///
/// First mark everything reachable in prev_iter from `first` without entering the
/// component of `second`, then search from `second` for the first marked vertex.
///
fn dropped_edge(prev_iter: &Graph, colors: &Coloring, (first, second): Edge) -> Option<Edge> {
    let blocked = colors.color(second);
    let mut first_side = HashSet::new();
    let mut queue = VecDeque::new();
    first_side.insert(first);
    queue.push_back(first);
    while let Some(u) = queue.pop_front() {
        for w in prev_iter.neighbors(u) {
            if first_side.contains(&w) || (blocked.is_some() && colors.color(w) == blocked) {
                continue;
            }
            first_side.insert(w);
            queue.push_back(w);
        }
    }

    let mut visited = HashSet::new();
    visited.insert(second);
    queue.push_back(second);
    while let Some(u) = queue.pop_front() {
        for w in prev_iter.neighbors(u) {
            if first_side.contains(&w) {
                return Some((u, w));
            }
            if visited.insert(w) {
                queue.push_back(w);
            }
        }
    }
    None
}
