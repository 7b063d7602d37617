//! Domain model types for the pricing problem.
//!
//! Provides the immutable problem data (edge-attribute matrices, validated
//! graph), the dynamic-programming state (labels), and the result types
//! returned by the solver.

mod graph;
mod label;
mod matrix;
mod solution;

pub use graph::{Graph, GraphData};
pub use label::Label;
pub use matrix::Matrix;
pub use solution::{PricingSolution, SearchMetrics};
