//! Pricing graph data and validation.

use crate::error::BuildError;

use super::Matrix;

/// Caller-owned configuration for a pricing graph.
///
/// Collects everything [`Graph::new`] needs in one explicit struct: the
/// distinguished origin/destination pair, the vehicle capacity, the three
/// edge-attribute matrices, the per-node time windows and service times, and
/// the forward-star adjacency lists. `f64::INFINITY` in a matrix means "no
/// edge". The node count is taken from the cost matrix dimension.
#[derive(Debug, Clone)]
pub struct GraphData {
    /// Origin node index.
    pub origin: usize,
    /// Destination node index.
    pub destination: usize,
    /// Upper bound on accumulated load along a path.
    pub capacity: f64,
    /// Edge costs; may be negative (reduced costs in column generation).
    pub cost: Matrix,
    /// Edge travel times; non-negative or `+infinity`.
    pub time: Matrix,
    /// Edge loads; non-negative or `+infinity`.
    pub load: Matrix,
    /// Earliest service time per node.
    pub early_time: Vec<f64>,
    /// Latest service time per node.
    pub late_time: Vec<f64>,
    /// Service (dwell) duration per node.
    pub service_time: Vec<f64>,
    /// Out-neighbor lists, one per node.
    pub forward_star: Vec<Vec<usize>>,
}

/// A validated, immutable pricing graph.
///
/// All structural invariants (square matrices, index ranges, well-formed
/// time windows) are established at construction; the solver trusts them
/// thereafter instead of re-checking on every access.
///
/// # Examples
///
/// ```
/// use u_labeling::models::{Graph, GraphData, Matrix};
///
/// let mut cost = Matrix::filled(2, f64::INFINITY);
/// cost.set(0, 1, 4.0);
/// let mut time = Matrix::filled(2, f64::INFINITY);
/// time.set(0, 1, 3.0);
///
/// let graph = Graph::new(GraphData {
///     origin: 0,
///     destination: 1,
///     capacity: 10.0,
///     cost,
///     time,
///     load: Matrix::new(2),
///     early_time: vec![0.0, 0.0],
///     late_time: vec![100.0, 100.0],
///     service_time: vec![0.0, 0.0],
///     forward_star: vec![vec![1], vec![]],
/// })
/// .expect("valid graph");
///
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.cost(0, 1), 4.0);
/// assert_eq!(graph.neighbors(0), &[1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    n: usize,
    origin: usize,
    destination: usize,
    capacity: f64,
    cost: Matrix,
    time: Matrix,
    load: Matrix,
    early_time: Vec<f64>,
    late_time: Vec<f64>,
    service_time: Vec<f64>,
    forward_star: Vec<Vec<usize>>,
}

impl Graph {
    /// Validates the given data and builds a graph.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] describing the first malformed input found:
    /// empty graph, matrix/vector shape mismatch, out-of-range or coincident
    /// origin/destination, invalid capacity, ill-formed time window or
    /// service time, NaN entries (any matrix), negative entries (time and
    /// load matrices), or an out-of-range forward-star neighbor.
    pub fn new(data: GraphData) -> Result<Self, BuildError> {
        let n = data.cost.size();
        if n == 0 {
            return Err(BuildError::EmptyGraph);
        }
        for (name, matrix) in [("time", &data.time), ("load", &data.load)] {
            if matrix.size() != n {
                return Err(BuildError::MatrixSizeMismatch {
                    matrix: name,
                    expected: n,
                    actual: matrix.size(),
                });
            }
        }
        for (name, len) in [
            ("early_time", data.early_time.len()),
            ("late_time", data.late_time.len()),
            ("service_time", data.service_time.len()),
            ("forward_star", data.forward_star.len()),
        ] {
            if len != n {
                return Err(BuildError::VectorLengthMismatch {
                    vector: name,
                    expected: n,
                    actual: len,
                });
            }
        }
        for (role, index) in [("origin", data.origin), ("destination", data.destination)] {
            if index >= n {
                return Err(BuildError::NodeOutOfRange {
                    role,
                    index,
                    nodes: n,
                });
            }
        }
        if data.origin == data.destination {
            return Err(BuildError::OriginIsDestination { node: data.origin });
        }
        if !data.capacity.is_finite() || data.capacity < 0.0 {
            return Err(BuildError::InvalidCapacity {
                capacity: data.capacity,
            });
        }
        for node in 0..n {
            let early = data.early_time[node];
            let late = data.late_time[node];
            if !early.is_finite() || !late.is_finite() || early > late {
                return Err(BuildError::InvalidTimeWindow { node, early, late });
            }
            let service = data.service_time[node];
            if !service.is_finite() || service < 0.0 {
                return Err(BuildError::InvalidServiceTime {
                    node,
                    value: service,
                });
            }
        }
        for row in 0..n {
            for col in 0..n {
                if data.cost.get(row, col).is_nan() {
                    return Err(BuildError::InvalidMatrixEntry {
                        matrix: "cost",
                        row,
                        col,
                        value: data.cost.get(row, col),
                    });
                }
                for (name, matrix) in [("time", &data.time), ("load", &data.load)] {
                    let value = matrix.get(row, col);
                    if value.is_nan() || value < 0.0 {
                        return Err(BuildError::InvalidMatrixEntry {
                            matrix: name,
                            row,
                            col,
                            value,
                        });
                    }
                }
            }
        }
        for (node, neighbors) in data.forward_star.iter().enumerate() {
            for &neighbor in neighbors {
                if neighbor >= n {
                    return Err(BuildError::NeighborOutOfRange {
                        node,
                        neighbor,
                        nodes: n,
                    });
                }
            }
        }

        Ok(Self {
            n,
            origin: data.origin,
            destination: data.destination,
            capacity: data.capacity,
            cost: data.cost,
            time: data.time,
            load: data.load,
            early_time: data.early_time,
            late_time: data.late_time,
            service_time: data.service_time,
            forward_star: data.forward_star,
        })
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Origin node index.
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Destination node index.
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Cost of the edge from `from` to `to` (`+infinity` if absent or pruned).
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.cost.get(from, to)
    }

    /// Travel time of the edge from `from` to `to`.
    pub fn travel_time(&self, from: usize, to: usize) -> f64 {
        self.time.get(from, to)
    }

    /// Load picked up along the edge from `from` to `to`.
    pub fn load(&self, from: usize, to: usize) -> f64 {
        self.load.get(from, to)
    }

    /// Earliest service time at `node`.
    pub fn early_time(&self, node: usize) -> f64 {
        self.early_time[node]
    }

    /// Latest service time at `node`.
    pub fn late_time(&self, node: usize) -> f64 {
        self.late_time[node]
    }

    /// Service duration at `node`.
    pub fn service_time(&self, node: usize) -> f64 {
        self.service_time[node]
    }

    /// Out-neighbors of `node`, in insertion order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.forward_star[node]
    }

    /// Overwrites one cost entry. Used by graph reduction to prune edges.
    pub(crate) fn set_cost(&mut self, from: usize, to: usize, value: f64) {
        self.cost.set(from, to, value);
    }
}
