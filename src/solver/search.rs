//! Forward label-correcting search over the worklist.

use std::collections::VecDeque;
use std::time::Instant;

use crate::error::SolveError;
use crate::models::{Graph, Label, PricingSolution, SearchMetrics};

use super::dominance::Frontier;
use super::{extension, reduction};

/// Caller-supplied bounds on a search run.
///
/// The label-correcting loop terminates on any finite input, but
/// pathological data (for example inconsistent windows that admit huge
/// frontiers) can make convergence arbitrarily slow; a budget turns that
/// into a reported failure instead of an open-ended run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of worklist pops before giving up; `None` is
    /// unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchLimits {
    /// Unbounded search.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Search bounded to at most `max_expansions` node expansions.
    pub fn bounded(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Solution and diagnostics from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    /// Best path found, or the infeasible solution.
    pub solution: PricingSolution,
    /// Diagnostic counters and timing.
    pub metrics: SearchMetrics,
}

/// Monodirectional labeling solver for the resource-constrained shortest
/// path problem.
///
/// Construction reduces a private copy of the graph (see
/// [`reduction::reduce`]) and computes the time-horizon bound. Each
/// [`solve`](Self::solve) call runs an independent search with its own
/// frontiers and worklist, so repeated calls are deterministic.
///
/// The search does not guarantee elementary paths: a node may be revisited
/// unless the flag mechanism excludes it.
///
/// # Examples
///
/// ```
/// use u_labeling::models::{Graph, GraphData, Matrix};
/// use u_labeling::solver::{LabelingSolver, SearchLimits};
///
/// // 0 -> 1 -> 3 (cost 5) and 0 -> 2 -> 3 (cost 10).
/// let mut cost = Matrix::filled(4, f64::INFINITY);
/// let mut time = Matrix::filled(4, f64::INFINITY);
/// let mut load = Matrix::new(4);
/// for (i, j, c, t, l) in [
///     (0usize, 1usize, 2.0, 2.0, 1.0),
///     (1, 3, 3.0, 2.0, 1.0),
///     (0, 2, 5.0, 1.0, 1.0),
///     (2, 3, 5.0, 1.0, 1.0),
/// ] {
///     cost.set(i, j, c);
///     time.set(i, j, t);
///     load.set(i, j, l);
/// }
/// let graph = Graph::new(GraphData {
///     origin: 0,
///     destination: 3,
///     capacity: 5.0,
///     cost,
///     time,
///     load,
///     early_time: vec![0.0; 4],
///     late_time: vec![100.0; 4],
///     service_time: vec![0.0; 4],
///     forward_star: vec![vec![1, 2], vec![3], vec![3], vec![]],
/// })
/// .expect("valid graph");
///
/// let solver = LabelingSolver::new(graph);
/// let outcome = solver.solve(&SearchLimits::unbounded()).expect("within budget");
/// assert_eq!(outcome.solution.path(), &[0, 1, 3]);
/// assert_eq!(outcome.solution.cost(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct LabelingSolver {
    graph: Graph,
    horizon: f64,
}

impl LabelingSolver {
    /// Creates a solver, reducing its private copy of the graph.
    pub fn new(mut graph: Graph) -> Self {
        reduction::reduce(&mut graph);
        let horizon = reduction::horizon_bound(&graph);
        Self { graph, horizon }
    }

    /// The reduced graph this solver searches.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Latest time at which the destination can still be served (see
    /// [`reduction::horizon_bound`]).
    pub fn horizon_bound(&self) -> f64 {
        self.horizon
    }

    /// Runs the forward search to its fixpoint and extracts the best label
    /// at the destination.
    ///
    /// An infeasible instance converges to an empty destination frontier
    /// and yields [`PricingSolution::infeasible`]; that is a normal
    /// outcome, not an error.
    ///
    /// # Errors
    ///
    /// [`SolveError::SearchBudgetExceeded`] if `limits.max_expansions` runs
    /// out before the worklist empties.
    pub fn solve(&self, limits: &SearchLimits) -> Result<SolveOutcome, SolveError> {
        let started = Instant::now();
        let mut metrics = SearchMetrics::default();
        let mut frontier = Frontier::new(self.graph.num_nodes());
        let mut worklist: VecDeque<usize> = VecDeque::new();

        let mut initial = Label::at_origin(&self.graph);
        extension::update_flags(&self.graph, &mut initial);
        let seeded = frontier.insert(self.graph.origin(), initial);
        if seeded.inserted {
            metrics.non_dominated_labels += 1;
        }
        worklist.push_back(self.graph.origin());

        while let Some(node) = worklist.pop_front() {
            if let Some(budget) = limits.max_expansions {
                if metrics.expansions >= budget {
                    return Err(SolveError::SearchBudgetExceeded {
                        expansions: metrics.expansions,
                    });
                }
            }
            metrics.expansions += 1;

            // Stable snapshot: labels inserted at `node` during this very
            // expansion are only seen after a re-enqueue.
            let snapshot: Vec<Label> = frontier.node(node).to_vec();
            for label in &snapshot {
                for &next in self.graph.neighbors(node) {
                    if label.flag[next] {
                        continue;
                    }
                    if !extension::feasible(&self.graph, label, node, next) {
                        continue;
                    }
                    let extended = extension::extend(&self.graph, label, node, next);
                    let outcome = frontier.insert(next, extended);
                    if outcome.inserted {
                        metrics.non_dominated_labels += 1;
                    }
                    if outcome.changed {
                        worklist.push_back(next);
                        metrics.requeues += 1;
                    }
                }
            }
        }

        let solution = best_label(&frontier, self.graph.destination());
        metrics.duration = started.elapsed();
        Ok(SolveOutcome { solution, metrics })
    }
}

/// Scans the destination's frontier for the minimum-cost label.
///
/// Ties are broken by insertion order (first encountered wins); alternate
/// valid implementations may return a different equal-cost path.
fn best_label(frontier: &Frontier, destination: usize) -> PricingSolution {
    let mut best_cost = f64::INFINITY;
    let mut best_path: Vec<usize> = Vec::new();
    for label in frontier.node(destination) {
        if label.cost < best_cost {
            best_cost = label.cost;
            best_path = label.path.clone();
        }
    }
    if best_path.is_empty() {
        PricingSolution::infeasible()
    } else {
        PricingSolution::feasible(best_path, best_cost)
    }
}
