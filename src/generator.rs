use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use crate::graph::{Graph, Vertex};

/// Random connected instances on the vertices 1..=vertex_count.
///
/// A uniformly random recursive tree guarantees connectivity, further edges are added at
/// random until edge_count is reached (or the graph is complete).
///
pub struct Generator {
    pub vertex_count: usize,
    pub edge_count:   usize,
    rng:              StdRng,
}

impl Generator {

    pub fn new(vertex_count: usize, edge_count: usize, seed: u64) -> Generator {
        Generator {
            vertex_count,
            edge_count,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self) -> Graph {
        let n = self.vertex_count as Vertex;
        let mut g = Graph::with_vertices(1..=n);
        if n < 2 {
            return g;
        }
        for v in 2..=n {
            let parent = self.rng.gen_range(1..v);
            g.add_edge((parent, v));
        }

        let max_edges = self.vertex_count * (self.vertex_count - 1) / 2;
        let target = self.edge_count.min(max_edges);
        if target <= g.number_of_edges() {
            return g;
        }
        if 2 * target > max_edges {
            // dense: pick from the explicit list of missing edges
            let mut missing: Vec<(Vertex, Vertex)> = (1..=n).flat_map(|u| (u + 1..=n).map(move |v| (u, v)))
                                                           .filter(|&e| !g.has_edge(e))
                                                           .collect();
            missing.shuffle(&mut self.rng);
            let needed = target - g.number_of_edges();
            for e in missing.into_iter().take(needed) {
                g.add_edge(e);
            }
        } else {
            while g.number_of_edges() < target {
                let u = self.rng.gen_range(1..=n);
                let v = self.rng.gen_range(1..=n);
                g.add_edge((u, v)); // self-loops and duplicates are no-ops
            }
        }
        g
    }

    /// Disjoint union of `parts` generated graphs, the i-th one shifted by i*vertex_count.
    ///
    pub fn generate_components(&mut self, parts: usize) -> Graph {
        let shift = self.vertex_count as Vertex;
        let mut g = Graph::new();
        for i in 0..parts as Vertex {
            let part = self.generate();
            add_shifted(&mut g, &part, i * shift);
        }
        g
    }

    /// Two generated graphs on 1..=n and n+1..=2n, joined by a single random bridge.
    ///
    /// The result is connected with 2*edge_count+1 edges (after clamping), and every
    /// spanning tree has to use the bridge.
    ///
    pub fn generate_bridged(&mut self) -> Graph {
        let n = self.vertex_count as Vertex;
        let mut g = self.generate();
        if n == 0 {
            return g;
        }
        let second = self.generate();
        add_shifted(&mut g, &second, n);
        let a = self.rng.gen_range(1..=n);
        let b = self.rng.gen_range(n + 1..=2 * n);
        g.add_edge((a, b));
        g
    }
}

fn add_shifted(g: &mut Graph, part: &Graph, shift: Vertex) {
    for &v in part.vertices() {
        g.add_vertex(v + shift);
    }
    for &(a, b) in part.edges() {
        g.add_edge((a + shift, b + shift));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_instances_are_connected() {
        let mut gen = Generator::new(30, 45, 7);
        for _ in 0..10 {
            let g = gen.generate();
            assert_eq!(g.number_of_vertices(), 30);
            assert_eq!(g.number_of_edges(), 45);
            assert!(g.is_linked());
            assert!((1..=30).all(|v| g.contains(v)));
        }
    }

    #[test]
    fn edge_count_is_clamped() {
        let complete = Generator::new(6, 100, 1).generate();
        assert_eq!(complete.number_of_edges(), 15);
        let tree = Generator::new(6, 0, 1).generate();
        assert!(tree.is_tree());
        assert_eq!(Generator::new(1, 5, 1).generate().number_of_vertices(), 1);
        assert_eq!(Generator::new(0, 5, 1).generate(), Graph::new());
    }

    #[test]
    fn dense_instances() {
        let g = Generator::new(10, 40, 3).generate();
        assert_eq!(g.number_of_edges(), 40);
        assert!(g.is_linked());
    }

    #[test]
    fn same_seed_same_graph() {
        let a = Generator::new(20, 35, 99).generate();
        let b = Generator::new(20, 35, 99).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn components_are_disjoint() {
        let g = Generator::new(5, 7, 11).generate_components(3);
        assert_eq!(g.number_of_vertices(), 15);
        assert_eq!(g.number_of_edges(), 21);
        assert!(!g.is_linked());
        assert!(Generator::new(5, 7, 11).generate_components(1).is_linked());
    }

    #[test]
    fn bridged_instances_are_connected() {
        let mut gen = Generator::new(6, 9, 23);
        for _ in 0..5 {
            let g = gen.generate_bridged();
            assert_eq!(g.number_of_vertices(), 12);
            assert_eq!(g.number_of_edges(), 19);
            assert!(g.is_linked());
            let crossing: Vec<_> = g.edges()
                                    .iter()
                                    .filter(|&&(a, b)| (a <= 6) != (b <= 6))
                                    .collect();
            assert_eq!(crossing.len(), 1);
        }
        assert_eq!(Generator::new(0, 3, 1).generate_bridged(), Graph::new());
        assert_eq!(Generator::new(1, 3, 1).generate_bridged(), Graph::from_edges(vec![(1, 2)]));
    }
}
