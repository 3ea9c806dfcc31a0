use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};
use crate::error::Result;
use crate::graph::Graph;
use crate::phase::phase;

/// Set from the signal handler of the binary. The driver then stops after the current
/// phase and returns its (valid) intermediate tree.
pub static ABORT: AtomicBool = AtomicBool::new(false);

/// Some spanning tree of a connected graph, obtained by breadth-first search from an
/// arbitrary vertex. Every vertex of `from` is in the result.
///
pub fn any_spanning_tree(from: &Graph) -> Graph {
    let mut result = Graph::with_vertices(from.vertices().iter().copied());
    if let Some(&start) = from.vertices().iter().next() {
        for e in from.bfs_edges(start) {
            result.add_edge(e);
        }
    }
    result
}

/// Compute a spanning tree of g whose maximum degree is at most one above the optimum.
///
/// Starting from a BFS tree, phases are run under a degree ceiling d, which is lowered
/// whenever a phase removes the last vertex of degree d. The first phase that finds no
/// merge edge ends the search.
///
/// Returns the empty graph if g is empty or not connected.
///
pub fn find_mdst(g: &Graph) -> Result<Graph> {
    if g.number_of_vertices() == 0 || !g.is_linked() {
        info!(n = g.number_of_vertices(), "graph is empty or disconnected, no spanning tree");
        return Ok(Graph::new());
    }

    let mut tree = any_spanning_tree(g);
    let mut ceiling = tree.max_degree();
    let initial = ceiling;
    let mut phases = 0usize;
    while ceiling > 0 {
        if ABORT.load(Ordering::Relaxed) {
            warn!(ceiling, "aborted, returning intermediate tree");
            break;
        }
        let outcome = phase(g, tree, ceiling)?;
        phases += 1;
        tree = outcome.tree;
        if !outcome.success {
            break;
        }
        if outcome.last_bottleneck {
            ceiling -= 1;
            debug!(ceiling, "lowered ceiling");
        }
    }

    info!(n = g.number_of_vertices(), m = g.number_of_edges(), phases,
          initial, max_degree = tree.max_degree(), "spanning tree found");
    Ok(tree)
}
