use std::collections::HashSet;
use tracing::trace;
use crate::coloring::{make_coloring, Coloring};
use crate::error::{Invariant, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::phase::Workspace;

/// Try to lower the degree of v in the working tree by one, using an edge of the
/// original graph that reconnects two of the subtrees hanging off v.
///
/// The subtrees are found by coloring the working tree without v, seeded at v's
/// neighbors. Any edge of g between two different colors whose endpoints both stay
/// strictly below the ceiling minus one may be added; afterwards the tree edge from v
/// into one of the two merged subtrees is redundant and gets removed.
///
/// Returns Ok(false), and leaves the workspace untouched, if no such edge exists.
///
/// *Assumes:*
/// - the working tree restricted to v's component is a tree
///
pub fn try_replace_vertex(v: Vertex, ws: &mut Workspace) -> Result<bool> {
    let seeds: Vec<Vertex> = ws.iter.neighbors(v).collect();
    let mut without_v = HashSet::new();
    without_v.insert(v);
    let colors = make_coloring(&ws.iter, &without_v, seeds);
    if colors.number_of_colors() < 2 {
        return Ok(false);
    }

    let limit = ws.limit();
    let candidate = ws.g.edges()
                        .iter()
                        .copied()
                        .find(|&(x, y)| colors.separates(x, y)
                                        && ws.projected_degree(x) < limit
                                        && ws.projected_degree(y) < limit);
    let (x, y) = match candidate {
        Some(e) => e,
        None    => return Ok(false),
    };

    ws.iter.add_edge((x, y));
    detach_redundant_edge(&mut ws.iter, v, &colors, (x, y))?;
    Ok(true)
}

/// After {x,y} joined two subtrees of v, remove the edge from v into one of them.
///
/// The subtree of `to` now hangs off the new edge as well, so {v,to} closes a cycle.
/// `colors` has to be the coloring of the subtrees around v the edge was chosen with.
///
fn detach_redundant_edge(iter: &mut Graph, v: Vertex, colors: &Coloring, (x, y): Edge) -> Result<Vertex> {
    let (cx, cy) = (colors.color(x), colors.color(y));
    let to = iter.neighbors(v).find(|&to| {
        let c = colors.color(to);
        c.is_some() && (c == cx || c == cy)
    });
    match to {
        Some(to) => {
            iter.remove_edge((v, to));
            trace!(v, x, y, to, "replaced tree edge");
            Ok(to)
        }
        None => Err(Invariant::NoReplacementNeighbor { vertex: v, edge: (x, y) }.into()),
    }
}
