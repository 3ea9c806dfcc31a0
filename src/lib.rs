//! Spanning trees of small maximum degree.
//!
//! [`mdst::find_mdst`] implements the local improvement algorithm for the
//! minimum-degree spanning tree problem. It returns a tree whose maximum degree is at most
//! one above the optimum; [`oracle::find_exact_mdst`] computes the optimum for small
//! graphs by brute force, and [`validate`] compares the two on generated instances.

pub mod coloring;
pub mod error;
pub mod generator;
pub mod graph;
pub mod io;
pub mod mdst;
pub mod oracle;
pub mod phase;
pub mod repair;
pub mod validate;

pub use error::{Invariant, MdstError, Result};
pub use graph::{Edge, Graph, Vertex};
