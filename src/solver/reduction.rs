//! Graph reduction and time-horizon bound.
//!
//! Runs once before the search. Reduction never removes edges structurally
//! (time and load still propagate over them); it only raises their cost to
//! `+infinity` so they can never appear on an optimal path.

use crate::models::Graph;

/// Prunes edges that can never be part of an optimal path.
///
/// Sets to `+infinity` the cost of every self-loop and of the direct
/// origin→destination arc (disallowed in this problem variant), and the
/// cost of every edge `(i, j)` between intermediate nodes whose earliest
/// possible departure from `i` already misses `j`'s time window:
/// `early_time[i] + service_time[i] + time[i][j] > late_time[j]`.
pub fn reduce(graph: &mut Graph) {
    let n = graph.num_nodes();
    let origin = graph.origin();
    let destination = graph.destination();

    graph.set_cost(origin, destination, f64::INFINITY);

    for i in 0..n {
        graph.set_cost(i, i, f64::INFINITY);
        for j in 0..n {
            if i == j || i == origin || i == destination || j == origin || j == destination {
                continue;
            }
            if graph.early_time(i) + graph.service_time(i) + graph.travel_time(i, j)
                > graph.late_time(j)
            {
                graph.set_cost(i, j, f64::INFINITY);
            }
        }
    }
}

/// Latest time at which the destination can still be served.
///
/// Over all nodes `i` with a finite travel time to the destination, takes
/// the maximum of `late_time[i] + service_time[i] + time[i][destination]`,
/// capped by the destination's own late time. The monodirectional search
/// does not consult this bound; it is computed for callers and for a
/// bidirectional extension, which meets forward and backward labels at
/// half the horizon.
pub fn horizon_bound(graph: &Graph) -> f64 {
    let destination = graph.destination();
    let mut latest = 0.0f64;
    for i in 0..graph.num_nodes() {
        let travel = graph.travel_time(i, destination);
        if travel.is_finite() {
            latest = latest.max(graph.late_time(i) + graph.service_time(i) + travel);
        }
    }
    latest.min(graph.late_time(destination))
}
