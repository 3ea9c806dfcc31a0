use std::collections::{HashMap, HashSet};
use crate::graph::{Graph, Vertex};

/// Component ids of all vertices reachable from some seed while avoiding a forbidden set.
///
#[derive(Debug, Clone, Default)]
pub struct Coloring {
    colors: HashMap<Vertex, usize>,
    count:  usize,
}

impl Coloring {

    /// Color of v, None if v is forbidden or not reachable from any seed.
    ///
    pub fn color(&self, v: Vertex) -> Option<usize> {
        self.colors.get(&v).copied()
    }

    /// Both vertices are colored and lie in different components.
    ///
    pub fn separates(&self, u: Vertex, w: Vertex) -> bool {
        match (self.color(u), self.color(w)) {
            (Some(cu), Some(cw)) => cu != cw,
            _ => false,
        }
    }

    pub fn number_of_colors(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Partition the vertices reachable from `seeds` into connected components of g - forbidden.
///
/// Every seed that has not been reached before opens a fresh color, which is then
/// propagated by depth-first search. Forbidden vertices are neither entered nor colored,
/// seeds that are forbidden or missing from g are skipped.
///
pub fn make_coloring<I>(g: &Graph, forbidden: &HashSet<Vertex>, seeds: I) -> Coloring
where I: IntoIterator<Item = Vertex>
{
    let mut coloring = Coloring::default();
    let mut stack = Vec::new();
    for seed in seeds {
        if forbidden.contains(&seed) || !g.contains(seed) || coloring.colors.contains_key(&seed) {
            continue;
        }
        let color = coloring.count;
        coloring.count += 1;
        coloring.colors.insert(seed, color);
        stack.push(seed);
        while let Some(u) = stack.pop() {
            for w in g.neighbors(u) {
                if forbidden.contains(&w) || coloring.colors.contains_key(&w) {
                    continue;
                }
                coloring.colors.insert(w, color);
                stack.push(w);
            }
        }
    }
    coloring
}
