//! Label: the dynamic-programming state of a partial path.

use super::Graph;

/// A partial origin-rooted path together with its accumulated resources.
///
/// Labels are immutable once built: extending a path produces a new label,
/// never mutates an existing one. Each label owns its path and flag data.
///
/// `flag[v]` is true when node `v` is already visited on this path, or has
/// been proven unreachable from the current position under the remaining
/// time and capacity. The dominance relation compares flags so that a label
/// is only discarded in favor of one that keeps at least as much of the
/// future open.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Accumulated cost.
    pub cost: f64,
    /// Time at which service at the current node can start.
    pub time: f64,
    /// Accumulated load.
    pub load: f64,
    /// Visited nodes in order; first element is the origin.
    pub path: Vec<usize>,
    /// Visited-or-unreachable marks, one per graph node.
    pub flag: Vec<bool>,
}

impl Label {
    /// Builds the initial label at the graph's origin: zero cost and load,
    /// time at the origin's earliest service time, all flags clear.
    ///
    /// The caller is expected to apply
    /// [`update_flags`](crate::solver::extension::update_flags) before
    /// seeding the search with it.
    pub fn at_origin(graph: &Graph) -> Self {
        Self {
            cost: 0.0,
            time: graph.early_time(graph.origin()),
            load: 0.0,
            path: vec![graph.origin()],
            flag: vec![false; graph.num_nodes()],
        }
    }

    /// The node this label currently sits at (last path element).
    pub fn node(&self) -> usize {
        *self.path.last().expect("label path is never empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GraphData, Matrix};

    fn two_node_graph() -> Graph {
        Graph::new(GraphData {
            origin: 0,
            destination: 1,
            capacity: 5.0,
            cost: Matrix::filled(2, f64::INFINITY),
            time: Matrix::filled(2, f64::INFINITY),
            load: Matrix::new(2),
            early_time: vec![7.0, 0.0],
            late_time: vec![100.0, 100.0],
            service_time: vec![0.0, 0.0],
            forward_star: vec![vec![], vec![]],
        })
        .expect("valid")
    }

    #[test]
    fn test_at_origin() {
        let label = Label::at_origin(&two_node_graph());
        assert_eq!(label.cost, 0.0);
        assert_eq!(label.time, 7.0);
        assert_eq!(label.load, 0.0);
        assert_eq!(label.path, vec![0]);
        assert_eq!(label.flag, vec![false, false]);
    }

    #[test]
    fn test_node_is_last_path_element() {
        let label = Label {
            cost: 0.0,
            time: 0.0,
            load: 0.0,
            path: vec![0, 3, 1],
            flag: vec![false; 4],
        };
        assert_eq!(label.node(), 1);
    }
}
