use std::fs::File;
use std::path::PathBuf;
use mdst::{
    graph::{Graph, Vertex},
    io::{read_graph, write_graph, NO_TREE},
    mdst::find_mdst,
    oracle::find_exact_mdst,
};

fn fixture(name: &str) -> Graph {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "data", name].iter().collect();
    read_graph(File::open(path).expect("fixture exists")).expect("fixture parses")
}

fn path_graph(n: Vertex) -> Graph {
    Graph::from_edges((1..n).map(|v| (v - 1, v)))
}

/// Result is a valid spanning tree whose maximum degree is within one of the optimum.
fn assert_near_optimal(g: &Graph) {
    let tree = find_mdst(g).unwrap();
    let exact = find_exact_mdst(g).unwrap();
    assert!(tree.is_spanning_tree_of(g));
    assert!(exact.is_spanning_tree_of(g));
    assert!(tree.max_degree() >= exact.max_degree());
    assert!(tree.max_degree() <= exact.max_degree() + 1);
}

#[test]
fn star_is_returned_unchanged() {
    let g = fixture("star.in");
    let tree = find_mdst(&g).unwrap();
    assert_eq!(tree, g);
    assert_eq!(tree.max_degree(), 5);
    assert_near_optimal(&g);
}

#[test]
fn path_is_returned_unchanged() {
    let g = path_graph(5);
    let tree = find_mdst(&g).unwrap();
    assert_eq!(tree, g);
    assert_eq!(tree.max_degree(), 2);
}

#[test]
fn cycle_becomes_a_hamiltonian_path() {
    let g = fixture("cycle.in");
    let tree = find_mdst(&g).unwrap();
    assert!(tree.is_spanning_tree_of(&g));
    assert_eq!(tree.number_of_edges(), 4);
    assert_eq!(tree.max_degree(), 2);
}

#[test]
fn wheel_is_near_optimal() {
    let g = fixture("wheel.in");
    assert_near_optimal(&g);
}

#[test]
fn complete_graph_is_near_optimal() {
    let mut g = Graph::new();
    for u in 0..7 {
        for v in u + 1..7 {
            g.add_edge((u, v));
        }
    }
    // 21 edges, still within reach of the exact solver
    assert_near_optimal(&g);
}

#[test]
fn single_vertex_is_a_tree() {
    let g = fixture("single.in");
    let tree = find_mdst(&g).unwrap();
    assert_eq!(tree.number_of_vertices(), 1);
    assert_eq!(tree.number_of_edges(), 0);
    assert!(tree.contains(42));
}

#[test]
fn disconnected_graph_has_no_tree() {
    let g = fixture("disconnected.in");
    assert_eq!(find_mdst(&g).unwrap().number_of_vertices(), 0);
    assert_eq!(find_exact_mdst(&g).unwrap().number_of_vertices(), 0);

    let mut out = Vec::new();
    write_graph(&mut out, &find_mdst(&g).unwrap(), false).unwrap();
    assert!(String::from_utf8(out).unwrap().contains(NO_TREE));
}

#[test]
fn empty_graph_has_no_tree() {
    assert_eq!(find_mdst(&Graph::new()).unwrap(), Graph::new());
}

#[test]
fn result_survives_a_write_read_cycle() {
    let g = fixture("wheel.in");
    let tree = find_mdst(&g).unwrap();
    let mut out = Vec::new();
    write_graph(&mut out, &tree, true).unwrap();
    let again = read_graph(out.as_slice()).unwrap();
    assert_eq!(again.vertices(), tree.vertices());
    assert!(again.edges().iter().all(|&e| tree.has_edge(e)));
    assert_eq!(again.number_of_edges(), tree.number_of_edges());
}
