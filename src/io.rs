use std::collections::HashSet;
use std::io::{Read, Write};
use std::str::SplitWhitespace;
use crate::error::{MdstError, Result};
use crate::graph::{Graph, Vertex};

/// Printed in place of the vertex list if there is no spanning tree.
pub const NO_TREE: &str = "no spanning tree";

fn next_number(tokens: &mut SplitWhitespace, what: &str) -> Result<u64> {
    let token = tokens.next()
                      .ok_or_else(|| MdstError::Malformed(format!("expected {}, found end of input", what)))?;
    token.parse::<u64>()
         .map_err(|_| MdstError::Malformed(format!("expected {}, found '{}'", what, token)))
}

/// Read a graph given as whitespace separated tokens:
///
/// ```text
/// n m
/// v_1 ... v_n
/// a_1 b_1
/// ...
/// a_m b_m
/// ```
///
/// Vertices have to be pairwise distinct and every endpoint has to be declared.
/// Repeated edges are accepted and stored once.
///
pub fn read_graph<R: Read>(mut input: R) -> Result<Graph> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let n = next_number(&mut tokens, "vertex count")?;
    let m = next_number(&mut tokens, "edge count")?;

    let mut declared = HashSet::new();
    for _ in 0..n {
        let v = next_number(&mut tokens, "vertex")?;
        if !declared.insert(v) {
            return Err(MdstError::DuplicateVertex(v));
        }
    }

    let mut g = Graph::with_vertices(declared.iter().copied());
    for _ in 0..m {
        let a = next_number(&mut tokens, "edge endpoint")?;
        let b = next_number(&mut tokens, "edge endpoint")?;
        if !declared.contains(&a) || !declared.contains(&b) {
            return Err(MdstError::UnknownVertex(a, b));
        }
        if a == b {
            return Err(MdstError::SelfLoop(a));
        }
        g.add_edge((a, b));
    }
    Ok(g)
}

/// Write g in the input format. Vertices and edges are sorted, so equal graphs give equal
/// output. With `stats`, the maximum degree is appended to the first line.
///
/// The empty graph is written as a zero header followed by [`NO_TREE`].
///
pub fn write_graph<W: Write>(out: &mut W, g: &Graph, stats: bool) -> Result<()> {
    write!(out, "{} {}", g.number_of_vertices(), g.number_of_edges())?;
    if stats {
        write!(out, " {}", g.max_degree())?;
    }
    writeln!(out)?;

    if g.number_of_vertices() == 0 {
        writeln!(out, "{}", NO_TREE)?;
        return Ok(());
    }

    let mut vertices: Vec<Vertex> = g.vertices().iter().copied().collect();
    vertices.sort_unstable();
    let line: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
    writeln!(out, "{}", line.join(" "))?;

    let mut edges: Vec<(Vertex, Vertex)> = g.edges()
                                            .iter()
                                            .map(|&(a, b)| if a < b { (a, b) } else { (b, a) })
                                            .collect();
    edges.sort_unstable();
    for (a, b) in edges {
        writeln!(out, "{} {}", a, b)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Graph> {
        read_graph(text.as_bytes())
    }

    fn write(g: &Graph, stats: bool) -> String {
        let mut out = Vec::new();
        write_graph(&mut out, g, stats).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reads_a_triangle_with_isolated_vertex() {
        let g = read("4 3\n1 2 3 10\n1 2\n2 3\n3 1\n").unwrap();
        assert_eq!(g.number_of_vertices(), 4);
        assert_eq!(g.number_of_edges(), 3);
        assert!(g.has_edge((1, 3)));
        assert_eq!(g.degree(10), 0);
    }

    #[test]
    fn repeated_edges_are_stored_once() {
        let g = read("2 3 5 6 5 6 6 5 5 6").unwrap();
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(matches!(read("2 0\n1 1\n"), Err(MdstError::DuplicateVertex(1))));
        assert!(matches!(read("2 1\n1 2\n1 3\n"), Err(MdstError::UnknownVertex(1, 3))));
        assert!(matches!(read("2 1\n1 2\n2 2\n"), Err(MdstError::SelfLoop(2))));
        assert!(matches!(read("3 1\n1 2"), Err(MdstError::Malformed(_))));
        assert!(matches!(read("1 0\nx\n"), Err(MdstError::Malformed(_))));
        assert!(matches!(read(""), Err(MdstError::Malformed(_))));
    }

    #[test]
    fn writes_sorted_output() {
        let g = Graph::from_edges(vec![(3, 1), (1, 2)]);
        assert_eq!(write(&g, false), "3 2\n1 2 3\n1 2\n1 3\n");
        assert_eq!(write(&g, true), "3 2 2\n1 2 3\n1 2\n1 3\n");
    }

    #[test]
    fn writes_sentinel_for_empty_graph() {
        assert_eq!(write(&Graph::new(), false), format!("0 0\n{}\n", NO_TREE));
        assert_eq!(write(&Graph::new(), true), format!("0 0 0\n{}\n", NO_TREE));
        // the sentinel is ignored when reading back
        assert_eq!(read(&write(&Graph::new(), false)).unwrap(), Graph::new());
    }

    #[test]
    fn output_reads_back() {
        let g = read("5 5\n9 7 5 3 1\n1 3\n3 5\n5 7\n7 9\n9 1\n").unwrap();
        assert_eq!(read(&write(&g, true)).unwrap().edges().len(), 5);
        let again = read(&write(&g, false)).unwrap();
        assert_eq!(write(&again, false), write(&g, false));
    }
}
