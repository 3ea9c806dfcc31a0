use std::collections::{HashMap, HashSet, VecDeque};
use union_find::{QuickUnionUf, UnionBySize, UnionFind};
use crate::error::{MdstError, Result};

pub type Vertex = u64;

/// An undirected edge. Stored as ordered pair, but (a,b) and (b,a) denote the same edge.
pub type Edge = (Vertex, Vertex);

#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices:  HashSet<Vertex>,                 // vertex identifiers, not necessarily 0..n-1
    edges:     HashSet<Edge>,                   // each edge stored once, in the orientation it was added
    adjacency: HashMap<Vertex, HashSet<Vertex>>, // neighbors of each vertex, symmetric
}

impl Graph {

    pub fn new() -> Graph {
        Graph::default()
    }

    /// Graph with the given vertices and no edges. Duplicates are ignored.
    ///
    pub fn with_vertices<I: IntoIterator<Item = Vertex>>(vertices: I) -> Graph {
        let mut g = Graph::new();
        for v in vertices {
            g.add_vertex(v);
        }
        g
    }

    /// Graph spanned by the given edges, endpoints become vertices.
    ///
    pub fn from_edges<I: IntoIterator<Item = Edge>>(edges: I) -> Graph {
        let mut g = Graph::new();
        for e in edges {
            g.add_edge(e);
        }
        g
    }

    pub fn vertices(&self) -> &HashSet<Vertex> {
        &self.vertices
    }

    pub fn edges(&self) -> &HashSet<Edge> {
        &self.edges
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.vertices.contains(&v)
    }

    /// Neighbors of v. Empty for vertices that are not in the graph.
    ///
    pub fn neighbors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.get(&v).into_iter().flatten().copied()
    }

    pub fn degree(&self, v: Vertex) -> usize {
        self.adjacency.get(&v).map_or(0, |n| n.len())
    }

    pub fn has_edge(&self, (a, b): Edge) -> bool {
        self.edges.contains(&(a, b)) || self.edges.contains(&(b, a))
    }

    /// Add the undirected edge {a,b}, adding missing endpoints as vertices.
    /// Returns false if the edge was already present or is a self-loop.
    ///
    pub fn add_edge(&mut self, (a, b): Edge) -> bool {
        if a == b || self.has_edge((a, b)) {
            return false;
        }
        self.add_vertex(a);
        self.add_vertex(b);
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        self.edges.insert((a, b));
        true
    }

    /// Remove the undirected edge {a,b} in whatever orientation it was stored.
    ///
    pub fn remove_edge(&mut self, (a, b): Edge) -> bool {
        if !self.has_edge((a, b)) {
            return false;
        }
        if let Some(n) = self.adjacency.get_mut(&a) { n.remove(&b); }
        if let Some(n) = self.adjacency.get_mut(&b) { n.remove(&a); }
        self.edges.remove(&(a, b));
        self.edges.remove(&(b, a));
        true
    }

    pub fn add_vertex(&mut self, v: Vertex) -> bool {
        if !self.vertices.insert(v) {
            return false;
        }
        self.adjacency.insert(v, HashSet::new());
        true
    }

    /// Remove v together with all incident edges.
    ///
    pub fn remove_vertex(&mut self, v: Vertex) -> bool {
        if !self.vertices.contains(&v) {
            return false;
        }
        let incident: Vec<Edge> = self.neighbors(v).map(|w| (v, w)).collect();
        for e in incident {
            self.remove_edge(e);
        }
        self.vertices.remove(&v);
        self.adjacency.remove(&v);
        true
    }

    /// Some vertex of maximum degree. Ties are broken by hash order.
    ///
    pub fn vertex_of_maximum_degree(&self) -> Result<Vertex> {
        self.vertices.iter()
                     .copied()
                     .max_by_key(|&v| self.degree(v))
                     .ok_or(MdstError::EmptyGraph)
    }

    /// Maximum degree of the graph, 0 if it is empty.
    ///
    pub fn max_degree(&self) -> usize {
        self.vertices.iter().map(|&v| self.degree(v)).max().unwrap_or(0)
    }

    /// Edges of a breadth-first search tree rooted at start_at, in discovery order.
    ///
    pub fn bfs_edges(&self, start_at: Vertex) -> Vec<Edge> {
        let mut edges = Vec::new();
        let mut queue = VecDeque::with_capacity(self.vertices.len());
        let mut visited = HashSet::new();
        visited.insert(start_at);
        queue.push_back(start_at);
        while let Some(u) = queue.pop_front() {
            for v in self.neighbors(u) {
                if !visited.insert(v) {
                    continue;
                }
                queue.push_back(v);
                edges.push((u, v));
            }
        }
        edges
    }

    /// Is every vertex reachable from any other one? The empty graph is linked.
    ///
    pub fn is_linked(&self) -> bool {
        match self.vertices.iter().next() {
            None => true,
            Some(&start) => self.bfs_edges(start).len() + 1 == self.vertices.len(),
        }
    }

    /// Tests whether the graph is a (non-empty) tree: linked, n-1 edges and no cycle.
    /// The cycle test runs a union-find over the edge list, independent of the adjacency.
    ///
    pub fn is_tree(&self) -> bool {
        let n = self.vertices.len();
        if n == 0 || self.edges.len() != n - 1 {
            return false;
        }
        let index: HashMap<Vertex, usize> = self.vertices.iter()
                                                         .enumerate()
                                                         .map(|(i, &v)| (v, i))
                                                         .collect();
        let mut uf: QuickUnionUf<UnionBySize> = QuickUnionUf::new(n);
        for (a, b) in self.edges.iter() {
            if !uf.union(index[a], index[b]) {
                return false; // a and b were connected already
            }
        }
        self.is_linked()
    }

    /// Does this graph span g using only edges of g?
    ///
    pub fn is_spanning_tree_of(&self, g: &Graph) -> bool {
        self.vertices == g.vertices
            && self.edges.iter().all(|&e| g.has_edge(e))
            && self.is_tree()
    }
}


/// Graphs are equal if they have the same vertices and the same undirected edges,
/// regardless of the orientation in which edges were stored.
impl PartialEq for Graph {
    fn eq(&self, other: &Graph) -> bool {
        self.vertices == other.vertices
            && self.edges.len() == other.edges.len()
            && self.edges.iter().all(|&e| other.has_edge(e))
    }
}

impl Eq for Graph {}
