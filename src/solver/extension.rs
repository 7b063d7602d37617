//! Label extension: feasibility check, resource accumulation, flag updates.

use crate::models::{Graph, Label};

/// Returns `true` if `label`, sitting at node `from`, can be extended over
/// the edge to `to` without violating `to`'s time window or the capacity.
///
/// Arrival is `max(label.time + service_time[from] + time[from][to],
/// early_time[to])` — waiting for the window to open is allowed. A missing
/// edge (`+infinity` travel time) always fails the window check. Pure, no
/// side effects.
pub fn feasible(graph: &Graph, label: &Label, from: usize, to: usize) -> bool {
    let arrival = (label.time + graph.service_time(from) + graph.travel_time(from, to))
        .max(graph.early_time(to));
    if arrival > graph.late_time(to) {
        return false;
    }
    if label.load + graph.load(from, to) > graph.capacity() {
        return false;
    }
    true
}

/// Builds the label reached by extending `label` from `from` over the edge
/// to `to`, including the flag update for the new position.
///
/// Must only be called when [`feasible`] holds for the same arguments.
pub fn extend(graph: &Graph, label: &Label, from: usize, to: usize) -> Label {
    let arrival = (label.time + graph.service_time(from) + graph.travel_time(from, to))
        .max(graph.early_time(to));
    let mut path = label.path.clone();
    path.push(to);
    let mut extended = Label {
        cost: label.cost + graph.cost(from, to),
        time: arrival,
        load: label.load + graph.load(from, to),
        path,
        flag: label.flag.clone(),
    };
    update_flags(graph, &mut extended);
    extended
}

/// Marks the label's current node as visited, then flags every forward
/// neighbor that is no longer reachable under the remaining resources.
///
/// Flagging unreachable nodes eagerly lets dominance compare the true
/// remaining future of two labels, not just their visited sets.
pub fn update_flags(graph: &Graph, label: &mut Label) {
    let here = label.node();
    label.flag[here] = true;

    for &next in graph.neighbors(here) {
        if !label.flag[next] && !feasible(graph, label, here, next) {
            label.flag[next] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GraphData, Matrix};

    fn line_graph() -> Graph {
        // 0 -> 1 -> 2 with per-edge load 2, service time 1 at node 1.
        let mut cost = Matrix::filled(3, f64::INFINITY);
        cost.set(0, 1, 4.0);
        cost.set(1, 2, 6.0);
        let mut time = Matrix::filled(3, f64::INFINITY);
        time.set(0, 1, 3.0);
        time.set(1, 2, 2.0);
        let mut load = Matrix::new(3);
        load.set(0, 1, 2.0);
        load.set(1, 2, 2.0);
        Graph::new(GraphData {
            origin: 0,
            destination: 2,
            capacity: 5.0,
            cost,
            time,
            load,
            early_time: vec![0.0, 5.0, 0.0],
            late_time: vec![100.0, 10.0, 100.0],
            service_time: vec![0.0, 1.0, 0.0],
            forward_star: vec![vec![1], vec![2], vec![]],
        })
        .expect("valid")
    }

    #[test]
    fn test_feasible_waits_for_window_open() {
        let g = line_graph();
        let label = Label::at_origin(&g);
        // Raw arrival at node 1 is 3.0, window opens at 5.0.
        assert!(feasible(&g, &label, 0, 1));
        let extended = extend(&g, &label, 0, 1);
        assert_eq!(extended.time, 5.0);
    }

    #[test]
    fn test_feasible_rejects_late_arrival() {
        let g = line_graph();
        let mut label = Label::at_origin(&g);
        label.time = 9.0; // 9 + 0 + 3 = 12 > late_time[1] = 10
        assert!(!feasible(&g, &label, 0, 1));
    }

    #[test]
    fn test_feasible_rejects_overload() {
        let g = line_graph();
        let mut label = Label::at_origin(&g);
        label.load = 4.0; // 4 + 2 > capacity 5
        assert!(!feasible(&g, &label, 0, 1));
    }

    #[test]
    fn test_feasible_rejects_missing_edge() {
        let g = line_graph();
        let label = Label::at_origin(&g);
        assert!(!feasible(&g, &label, 0, 2));
    }

    #[test]
    fn test_extend_accumulates_resources() {
        let g = line_graph();
        let origin = Label::at_origin(&g);
        let at_1 = extend(&g, &origin, 0, 1);
        assert_eq!(at_1.cost, 4.0);
        assert_eq!(at_1.time, 5.0);
        assert_eq!(at_1.load, 2.0);
        assert_eq!(at_1.path, vec![0, 1]);

        let at_2 = extend(&g, &at_1, 1, 2);
        assert_eq!(at_2.cost, 10.0);
        // Departure 5 + service 1 + travel 2.
        assert_eq!(at_2.time, 8.0);
        assert_eq!(at_2.load, 4.0);
        assert_eq!(at_2.path, vec![0, 1, 2]);
    }

    #[test]
    fn test_extend_does_not_mutate_parent() {
        let g = line_graph();
        let origin = Label::at_origin(&g);
        let snapshot = origin.clone();
        let _ = extend(&g, &origin, 0, 1);
        assert_eq!(origin, snapshot);
    }

    #[test]
    fn test_update_flags_marks_visited() {
        let g = line_graph();
        let origin = Label::at_origin(&g);
        let at_1 = extend(&g, &origin, 0, 1);
        assert!(at_1.flag[1]);
    }

    #[test]
    fn test_update_flags_marks_unreachable_neighbor() {
        // From node 1 the onward edge overloads the vehicle, so extension
        // flags node 2 as unreachable even though it was never visited.
        let g = line_graph();
        let mut origin = Label::at_origin(&g);
        origin.load = 2.0; // reaches node 1 at load 4; 4 + 2 > 5 onward
        assert!(feasible(&g, &origin, 0, 1));
        let at_1 = extend(&g, &origin, 0, 1);
        assert!(at_1.flag[2]);
    }

    #[test]
    fn test_initial_label_flags() {
        let g = line_graph();
        let mut label = Label::at_origin(&g);
        update_flags(&g, &mut label);
        assert_eq!(label.flag, vec![true, false, false]);
    }
}
