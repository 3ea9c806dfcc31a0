//! Batch comparison of [`find_mdst`] against the exact solver on generated groups of
//! small instances.
//!
//! Every instance must come back as a spanning tree with n vertices and n-1 edges whose
//! maximum degree is the optimum or one above it. The accuracy of a group is the share
//! of instances on which the optimum was hit.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{info, warn};
use crate::error::Result;
use crate::generator::Generator;
use crate::graph::Graph;
use crate::mdst::find_mdst;
use crate::oracle::find_exact_mdst;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupKind {
    /// connected instances from [`Generator::generate`]
    Usual,
    /// two instances joined by one bridge, see [`Generator::generate_bridged`]
    Bridged,
    /// two disjoint instances, no spanning tree exists
    Disconnected,
}

#[derive(Clone, Debug)]
pub struct TestGroup {
    pub name:         String,
    pub kind:         GroupKind,
    pub regen_factor: usize,               // instances per parameter pair
    pub parameters:   Vec<(usize, usize)>, // (vertex count, edge count) of one part
}

impl TestGroup {
    pub fn new(name: &str, kind: GroupKind, regen_factor: usize, parameters: Vec<(usize, usize)>) -> TestGroup {
        TestGroup { name: name.to_string(), kind, regen_factor, parameters }
    }
}

/// Groups small enough for the exact solver.
pub fn default_groups() -> Vec<TestGroup> {
    vec![
        TestGroup::new("sparse", GroupKind::Usual, 20, vec![(6, 7), (8, 10), (10, 13)]),
        TestGroup::new("dense", GroupKind::Usual, 20, vec![(6, 12), (7, 16), (8, 20)]),
        TestGroup::new("bridged", GroupKind::Bridged, 15, vec![(5, 7), (6, 9), (7, 10)]),
        TestGroup::new("disconnected", GroupKind::Disconnected, 10, vec![(4, 5), (6, 8)]),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Optimal,
    NearOptimal,
    Failed(String),
}

/// Solve g with both solvers and judge the heuristic's answer.
///
/// Errors only if the exact solver cannot handle g; faults of [`find_mdst`] are
/// reported as [`Verdict::Failed`].
///
pub fn validate_instance(g: &Graph) -> Result<Verdict> {
    let exact = find_exact_mdst(g)?;
    let tree = match find_mdst(g) {
        Ok(tree) => tree,
        Err(e)   => return Ok(Verdict::Failed(e.to_string())),
    };

    if exact.number_of_vertices() == 0 {
        return Ok(if tree.number_of_vertices() == 0 {
            Verdict::Optimal
        } else {
            Verdict::Failed("tree returned for a graph without spanning tree".to_string())
        });
    }

    let n = g.number_of_vertices();
    if tree.number_of_vertices() != n {
        return Ok(Verdict::Failed(format!("{} vertices instead of {}", tree.number_of_vertices(), n)));
    }
    if tree.number_of_edges() != n - 1 {
        return Ok(Verdict::Failed(format!("{} edges instead of {}", tree.number_of_edges(), n - 1)));
    }
    if !tree.is_spanning_tree_of(g) {
        return Ok(Verdict::Failed("not a spanning tree of the input".to_string()));
    }

    let (d, opt) = (tree.max_degree(), exact.max_degree());
    Ok(if d == opt {
        Verdict::Optimal
    } else if d == opt + 1 {
        Verdict::NearOptimal
    } else {
        Verdict::Failed(format!("maximum degree {} outside [{}, {}]", d, opt, opt + 1))
    })
}

#[derive(Clone, Debug, Default)]
pub struct GroupReport {
    pub name:         String,
    pub total:        usize,
    pub optimal:      usize,
    pub near_optimal: usize,
    pub failures:     Vec<(Graph, String)>,
}

impl GroupReport {

    fn record(&mut self, g: &Graph, verdict: Verdict) {
        self.total += 1;
        match verdict {
            Verdict::Optimal       => self.optimal += 1,
            Verdict::NearOptimal   => self.near_optimal += 1,
            Verdict::Failed(cause) => {
                warn!(group = %self.name, %cause, "instance failed");
                self.failures.push((g.clone(), cause));
            }
        }
    }

    /// Share of instances solved optimally, 1 for an empty group.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.optimal as f64 / self.total as f64
    }
}

/// Generate and check all instances of a group. Each parameter pair gets its own
/// generator, seeded from `seed`, so a run is reproducible.
///
pub fn run_group(group: &TestGroup, seed: u64) -> Result<GroupReport> {
    let mut seeds = StdRng::seed_from_u64(seed);
    let mut report = GroupReport { name: group.name.clone(), ..GroupReport::default() };
    for &(n, m) in group.parameters.iter() {
        let mut generator = Generator::new(n, m, seeds.gen());
        for _ in 0..group.regen_factor {
            let g = match group.kind {
                GroupKind::Usual        => generator.generate(),
                GroupKind::Bridged      => generator.generate_bridged(),
                GroupKind::Disconnected => generator.generate_components(2),
            };
            let verdict = validate_instance(&g)?;
            report.record(&g, verdict);
        }
    }
    info!(group = %report.name, total = report.total, optimal = report.optimal,
          failed = report.failures.len(), "group done");
    Ok(report)
}
