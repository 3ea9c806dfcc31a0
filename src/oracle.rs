//! Exact minimum-degree spanning trees by exhaustive search.
//!
//! Only meant as a reference for small instances: all subsets of n-1 edges are
//! enumerated, which restricts the input to [`MAX_ORACLE_EDGES`] edges.

use std::collections::HashMap;
use tracing::{debug, warn};
use union_find::{QuickUnionUf, UnionBySize, UnionFind};
use crate::error::{MdstError, Result};
use crate::graph::{Graph, Vertex};

pub const MAX_ORACLE_EDGES: usize = 28;

/// Next larger integer with the same number of set bits (Gosper's hack).
///
fn next_subset(mask: u64) -> u64 {
    let lowest = mask & mask.wrapping_neg();
    let ripple = mask + lowest;
    (((ripple ^ mask) >> 2) / lowest) | ripple
}

/// Maximum degree of the edge subset `mask`, if it is a spanning tree whose maximum
/// degree is below `bound`.
///
fn tree_degree(n: usize, edges: &[(usize, usize)], mask: u64, bound: usize, degree: &mut [usize]) -> Option<usize> {
    for d in degree.iter_mut() { *d = 0; }
    let mut max = 0usize;
    for (i, &(a, b)) in edges.iter().enumerate() {
        if mask & (1 << i) == 0 {
            continue;
        }
        degree[a] += 1;
        degree[b] += 1;
        max = max.max(degree[a]).max(degree[b]);
        if max >= bound {
            return None;
        }
    }

    // n-1 edges without a cycle span all n vertices
    let mut uf: QuickUnionUf<UnionBySize> = QuickUnionUf::new(n);
    for (i, &(a, b)) in edges.iter().enumerate() {
        if mask & (1 << i) != 0 && !uf.union(a, b) {
            return None;
        }
    }
    Some(max)
}

/// Spanning tree of minimum maximum degree.
///
/// Returns the empty graph if the input is empty or disconnected, and the input itself
/// if it consists of a single vertex.
///
pub fn find_exact_mdst(input: &Graph) -> Result<Graph> {
    let n = input.number_of_vertices();
    if n == 0 || !input.is_linked() {
        return Ok(Graph::new());
    }
    if n == 1 {
        return Ok(input.clone());
    }
    let m = input.number_of_edges();
    if m > MAX_ORACLE_EDGES {
        warn!(m, "exact solver called on too many edges");
        return Err(MdstError::TooManyEdges { max: MAX_ORACLE_EDGES, got: m });
    }

    let to_initial: Vec<Vertex> = input.vertices().iter().copied().collect();
    let to_mine: HashMap<Vertex, usize> = to_initial.iter()
                                                    .enumerate()
                                                    .map(|(i, &v)| (v, i))
                                                    .collect();
    let edges: Vec<(usize, usize)> = input.edges()
                                          .iter()
                                          .map(|(a, b)| (to_mine[a], to_mine[b]))
                                          .collect();

    // a path is optimal, no tree on three or more vertices does better
    let lower_bound = if n == 2 { 1 } else { 2 };
    let mut best: Option<(usize, u64)> = None;
    let mut degree = vec![0; n];
    let mut mask: u64 = (1 << (n - 1)) - 1;
    let end: u64 = 1 << m;
    while mask < end {
        let bound = best.map_or(n, |(d, _)| d);
        if let Some(d) = tree_degree(n, &edges, mask, bound, &mut degree) {
            best = Some((d, mask));
            if d <= lower_bound {
                break;
            }
        }
        mask = next_subset(mask);
    }

    let mut result = Graph::with_vertices(to_initial.iter().copied());
    if let Some((d, mask)) = best {
        debug!(n, m, max_degree = d, "exact spanning tree");
        for (i, &(a, b)) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                result.add_edge((to_initial[a], to_initial[b]));
            }
        }
    }
    Ok(result)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gosper_enumerates_fixed_popcount() {
        let mut mask = 0b0111u64;
        let mut seen = vec![];
        while mask < 1 << 5 {
            assert_eq!(mask.count_ones(), 3);
            seen.push(mask);
            mask = next_subset(mask);
        }
        assert_eq!(seen.len(), 10); // 5 choose 3
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn wheel_has_a_hamiltonian_path() {
        let mut g = Graph::from_edges((1..=5).map(|v| (0, v)));
        for v in 1..=5 {
            g.add_edge((v, v % 5 + 1));
        }
        let t = find_exact_mdst(&g).unwrap();
        assert!(t.is_spanning_tree_of(&g));
        assert_eq!(t.max_degree(), 2);
    }

    #[test]
    fn spider_and_its_shortcut() {
        // center 0 with three legs of length two
        let g = Graph::from_edges(vec![(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6), (2, 4)]);
        let t = find_exact_mdst(&g).unwrap();
        assert!(t.is_spanning_tree_of(&g));
        assert_eq!(t.max_degree(), 2);

        let tree = Graph::from_edges(vec![(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]);
        assert_eq!(find_exact_mdst(&tree).unwrap(), tree);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(find_exact_mdst(&Graph::new()).unwrap(), Graph::new());
        let single = Graph::with_vertices(vec![3]);
        assert_eq!(find_exact_mdst(&single).unwrap(), single);
        let split = Graph::from_edges(vec![(0, 1), (2, 3)]);
        assert_eq!(find_exact_mdst(&split).unwrap(), Graph::new());
        let pair = Graph::from_edges(vec![(0, 1)]);
        assert_eq!(find_exact_mdst(&pair).unwrap(), pair);
    }

    #[test]
    fn too_many_edges() {
        let mut g = Graph::new();
        for u in 0..9 {
            for v in u + 1..9 {
                g.add_edge((u, v)); // 36 edges
            }
        }
        match find_exact_mdst(&g) {
            Err(MdstError::TooManyEdges { max, got }) => {
                assert_eq!(max, MAX_ORACLE_EDGES);
                assert_eq!(got, 36);
            }
            other => panic!("expected capacity error, got {:?}", other),
        }
    }
}
