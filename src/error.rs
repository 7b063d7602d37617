//! Error types for graph construction and the labeling search.

use thiserror::Error;

/// Errors raised while validating problem data at construction time.
///
/// Every malformed input is rejected here, before the search runs; the
/// solver itself relies on the invariants established by a successful
/// [`Graph::new`](crate::models::Graph::new).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// The graph has no nodes.
    #[error("graph must contain at least one node")]
    EmptyGraph,

    /// A matrix is not n×n for the node count n.
    #[error("{matrix} matrix is {actual}x{actual}, expected {expected}x{expected}")]
    MatrixSizeMismatch {
        /// Which matrix ("cost", "time", or "load").
        matrix: &'static str,
        /// Expected dimension (the node count).
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// A per-node vector does not have length n.
    #[error("{vector} vector has length {actual}, expected {expected}")]
    VectorLengthMismatch {
        /// Which vector ("early_time", "late_time", "service_time", or "forward_star").
        vector: &'static str,
        /// Expected length (the node count).
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// The origin or destination index is not a valid node.
    #[error("{role} node {index} is out of range for {nodes} nodes")]
    NodeOutOfRange {
        /// Which role ("origin" or "destination").
        role: &'static str,
        /// The offending index.
        index: usize,
        /// Number of nodes in the graph.
        nodes: usize,
    },

    /// Origin and destination refer to the same node.
    #[error("origin and destination must be distinct (both are node {node})")]
    OriginIsDestination {
        /// The shared node index.
        node: usize,
    },

    /// Capacity is negative or not a number.
    #[error("capacity must be finite and non-negative, got {capacity}")]
    InvalidCapacity {
        /// The offending capacity value.
        capacity: f64,
    },

    /// A node's time window is non-finite or opens after it closes.
    #[error("time window at node {node} is invalid (early {early}, late {late})")]
    InvalidTimeWindow {
        /// The offending node.
        node: usize,
        /// Earliest service time.
        early: f64,
        /// Latest service time.
        late: f64,
    },

    /// A node's service time is negative or not finite.
    #[error("service time at node {node} must be finite and non-negative, got {value}")]
    InvalidServiceTime {
        /// The offending node.
        node: usize,
        /// The offending value.
        value: f64,
    },

    /// A matrix entry is NaN, or negative where negatives are disallowed
    /// (travel time and load; cost may be negative for reduced-cost pricing).
    #[error("{matrix}[{row}][{col}] has invalid value {value}")]
    InvalidMatrixEntry {
        /// Which matrix ("cost", "time", or "load").
        matrix: &'static str,
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// A forward-star entry references a node outside the graph.
    #[error("forward star of node {node} references node {neighbor}, out of range for {nodes} nodes")]
    NeighborOutOfRange {
        /// The node whose adjacency list is malformed.
        node: usize,
        /// The out-of-range neighbor index.
        neighbor: usize,
        /// Number of nodes in the graph.
        nodes: usize,
    },
}

/// Errors raised by the search itself.
///
/// Infeasibility is not an error: a run that converges without reaching the
/// destination returns an infeasible
/// [`PricingSolution`](crate::models::PricingSolution).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The caller-supplied expansion budget was exhausted before the
    /// worklist emptied.
    #[error("search budget exceeded after {expansions} node expansions")]
    SearchBudgetExceeded {
        /// Expansions performed before giving up.
        expansions: u64,
    },
}
