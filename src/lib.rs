//! # u-labeling
//!
//! Resource-constrained shortest path solver (ESPPRC without an
//! elementarity guarantee), intended as the pricing subroutine in
//! column-generation approaches to vehicle routing.
//!
//! Given a directed graph with per-edge cost, travel time, and load, a
//! time window and service duration per node, and a vehicle capacity, the
//! solver finds a minimum-cost origin→destination path by label-correcting
//! dynamic programming with Pareto-dominance pruning over
//! (cost, time, load, reachability flags).
//!
//! ## Modules
//!
//! - [`models`] — Problem data (matrices, validated graph), labels, results
//! - [`solver`] — Graph reduction, label extension, dominance, worklist search
//! - [`error`] — Construction and search error types
//!
//! ## Example
//!
//! ```
//! use u_labeling::models::{Graph, GraphData, Matrix};
//! use u_labeling::solver::{LabelingSolver, SearchLimits};
//!
//! let mut cost = Matrix::filled(3, f64::INFINITY);
//! let mut time = Matrix::filled(3, f64::INFINITY);
//! cost.set(0, 1, -1.5); // reduced costs may be negative
//! time.set(0, 1, 2.0);
//! cost.set(1, 2, 1.0);
//! time.set(1, 2, 2.0);
//!
//! let graph = Graph::new(GraphData {
//!     origin: 0,
//!     destination: 2,
//!     capacity: 10.0,
//!     cost,
//!     time,
//!     load: Matrix::new(3),
//!     early_time: vec![0.0; 3],
//!     late_time: vec![50.0; 3],
//!     service_time: vec![0.0; 3],
//!     forward_star: vec![vec![1], vec![2], vec![]],
//! })?;
//!
//! let solver = LabelingSolver::new(graph);
//! let outcome = solver.solve(&SearchLimits::unbounded()).expect("unbounded");
//! assert_eq!(outcome.solution.path(), &[0, 1, 2]);
//! assert_eq!(outcome.solution.cost(), -0.5);
//! # Ok::<(), u_labeling::error::BuildError>(())
//! ```

pub mod error;
pub mod models;
pub mod solver;
