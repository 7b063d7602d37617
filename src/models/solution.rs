//! Pricing solution and search diagnostics.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The outcome of one pricing run: the best path found and its cost.
///
/// Infeasibility (no origin→destination path satisfies the resource
/// constraints) is a normal outcome, represented by an empty path and a
/// cost of `+infinity` — never an error.
///
/// # Examples
///
/// ```
/// use u_labeling::models::PricingSolution;
///
/// let best = PricingSolution::feasible(vec![0, 1, 3], 5.0);
/// assert!(best.is_feasible());
/// assert_eq!(best.path(), &[0, 1, 3]);
/// assert_eq!(best.cost(), 5.0);
///
/// let none = PricingSolution::infeasible();
/// assert!(!none.is_feasible());
/// assert!(none.cost().is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSolution {
    path: Vec<usize>,
    cost: f64,
}

impl PricingSolution {
    /// Creates a feasible solution from a path and its cost.
    pub fn feasible(path: Vec<usize>, cost: f64) -> Self {
        Self { path, cost }
    }

    /// Creates the infeasible solution (empty path, infinite cost).
    pub fn infeasible() -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    /// The optimal path, origin first; empty when infeasible.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Cost of the optimal path; `+infinity` when infeasible.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns `true` if a feasible path was found.
    pub fn is_feasible(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Diagnostic counters from one search run.
///
/// Not part of the functional contract; useful for tuning and for sizing
/// pricing instances in a column-generation loop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetrics {
    /// Labels that survived dominance filtering and entered a frontier.
    pub non_dominated_labels: u64,
    /// Worklist re-pushes caused by a frontier change.
    pub requeues: u64,
    /// Worklist pops (node expansions) performed.
    pub expansions: u64,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}
