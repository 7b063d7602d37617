//! Dominance relation and per-node efficient frontiers.

use crate::models::Label;

/// Returns `true` if `a` dominates `b`: at least as good on cost, time, and
/// load, and at least as future-flexible (every node `a` has flagged as
/// visited-or-unreachable, `b` has flagged too).
///
/// Non-strict partial order: reflexive and transitive, but two labels with
/// equal resources and flags on different paths dominate each other. Such
/// ties are resolved by [`identical`].
///
/// # Examples
///
/// ```
/// use u_labeling::models::Label;
/// use u_labeling::solver::dominance::dominates;
///
/// let cheap = Label { cost: 2.0, time: 3.0, load: 1.0, path: vec![0, 1], flag: vec![true, true, false] };
/// let dear = Label { cost: 5.0, time: 3.0, load: 1.0, path: vec![0, 2, 1], flag: vec![true, true, true] };
/// assert!(dominates(&cheap, &dear));
/// assert!(!dominates(&dear, &cheap));
/// ```
pub fn dominates(a: &Label, b: &Label) -> bool {
    if a.cost > b.cost || a.time > b.time || a.load > b.load {
        return false;
    }
    a.flag.iter().zip(&b.flag).all(|(&fa, &fb)| !fa || fb)
}

/// Returns `true` if both labels describe the same path.
///
/// Deterministic extension means two labels on one path must carry the same
/// resources; if they don't, that is a data inconsistency upstream (for
/// example an edge matrix mutated between runs). It is logged as a warning
/// and the labels are still treated as identical, so the run continues.
pub fn identical(a: &Label, b: &Label) -> bool {
    if a.path != b.path {
        return false;
    }
    if a.cost != b.cost || a.time != b.time || a.load != b.load {
        log::warn!(
            "labels share path {:?} but differ in resources: cost {} vs {}, time {} vs {}, load {} vs {}",
            a.path,
            a.cost,
            b.cost,
            a.time,
            b.time,
            a.load,
            b.load,
        );
    }
    true
}

/// Result of offering a candidate label to a frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// The store changed, by deletion or insertion; the node should be
    /// re-enqueued for expansion.
    pub changed: bool,
    /// The candidate itself entered the store.
    pub inserted: bool,
}

/// Per-node efficient frontiers: one non-dominated label set per node.
///
/// [`Frontier::insert`] maintains the invariant that no label in a node's
/// set dominates another label on a different path.
#[derive(Debug, Clone)]
pub struct Frontier {
    stores: Vec<Vec<Label>>,
}

impl Frontier {
    /// Creates empty frontiers for `nodes` nodes.
    pub fn new(nodes: usize) -> Self {
        Self {
            stores: vec![Vec::new(); nodes],
        }
    }

    /// Offers `candidate` to the frontier at `node`.
    ///
    /// First drops every stored label the candidate dominates (identical
    /// labels are kept; a candidate never supersedes its own path). Then,
    /// if no survivor dominates or duplicates the candidate, appends it.
    /// The surviving subset is built in a single retain pass, never by
    /// erasing while iterating.
    pub fn insert(&mut self, node: usize, candidate: Label) -> InsertOutcome {
        let store = &mut self.stores[node];

        let before = store.len();
        store.retain(|stored| !(dominates(&candidate, stored) && !identical(&candidate, stored)));
        let mut changed = store.len() != before;

        let dominated = store
            .iter()
            .any(|stored| dominates(stored, &candidate) || identical(&candidate, stored));

        let inserted = !dominated;
        if inserted {
            store.push(candidate);
            changed = true;
        }
        InsertOutcome { changed, inserted }
    }

    /// The current non-dominated labels at `node`.
    pub fn node(&self, node: usize) -> &[Label] {
        &self.stores[node]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn label(cost: f64, time: f64, load: f64, path: Vec<usize>, flag: Vec<bool>) -> Label {
        Label {
            cost,
            time,
            load,
            path,
            flag,
        }
    }

    fn plain(cost: f64, time: f64, load: f64) -> Label {
        label(cost, time, load, vec![0, 1], vec![false; 3])
    }

    #[test]
    fn test_dominates_reflexive() {
        let a = plain(1.0, 2.0, 3.0);
        assert!(dominates(&a, &a));
    }

    #[test]
    fn test_dominates_transitive() {
        let a = plain(1.0, 1.0, 1.0);
        let b = plain(2.0, 1.0, 2.0);
        let c = plain(2.0, 3.0, 2.0);
        assert!(dominates(&a, &b));
        assert!(dominates(&b, &c));
        assert!(dominates(&a, &c));
    }

    #[test]
    fn test_dominates_rejects_worse_resource() {
        let a = plain(1.0, 5.0, 1.0);
        let b = plain(2.0, 4.0, 2.0);
        assert!(!dominates(&a, &b));
        assert!(!dominates(&b, &a));
    }

    #[test]
    fn test_dominates_respects_flags() {
        // Equal resources, but `a` has flagged a node `b` has not: `a` is
        // less future-flexible and must not dominate.
        let a = label(1.0, 1.0, 1.0, vec![0, 1], vec![true, true, false]);
        let b = label(1.0, 1.0, 1.0, vec![0, 2], vec![true, false, false]);
        assert!(!dominates(&a, &b));
        assert!(dominates(&b, &a));
    }

    #[test]
    fn test_identical_same_path() {
        let a = plain(1.0, 2.0, 3.0);
        let b = plain(1.0, 2.0, 3.0);
        assert!(identical(&a, &b));
    }

    #[test]
    fn test_identical_different_path() {
        let a = plain(1.0, 2.0, 3.0);
        let b = label(1.0, 2.0, 3.0, vec![0, 2], vec![false; 3]);
        assert!(!identical(&a, &b));
    }

    #[test]
    fn test_identical_same_path_differing_resources() {
        // Inconsistent upstream data: logged, still treated as identical.
        let a = plain(1.0, 2.0, 3.0);
        let b = plain(9.0, 2.0, 3.0);
        assert!(identical(&a, &b));
    }

    #[test]
    fn test_insert_into_empty() {
        let mut frontier = Frontier::new(2);
        let outcome = frontier.insert(1, plain(1.0, 1.0, 1.0));
        assert_eq!(
            outcome,
            InsertOutcome {
                changed: true,
                inserted: true,
            }
        );
        assert_eq!(frontier.node(1).len(), 1);
        assert!(frontier.node(0).is_empty());
    }

    #[test]
    fn test_insert_removes_dominated() {
        let mut frontier = Frontier::new(1);
        frontier.insert(0, plain(5.0, 5.0, 5.0));
        let outcome = frontier.insert(0, label(1.0, 1.0, 1.0, vec![0, 2], vec![false; 3]));
        assert!(outcome.inserted);
        assert_eq!(frontier.node(0).len(), 1);
        assert_eq!(frontier.node(0)[0].cost, 1.0);
    }

    #[test]
    fn test_insert_rejects_dominated_candidate() {
        let mut frontier = Frontier::new(1);
        frontier.insert(0, plain(1.0, 1.0, 1.0));
        let outcome = frontier.insert(0, label(5.0, 5.0, 5.0, vec![0, 2], vec![false; 3]));
        assert_eq!(
            outcome,
            InsertOutcome {
                changed: false,
                inserted: false,
            }
        );
        assert_eq!(frontier.node(0).len(), 1);
    }

    #[test]
    fn test_insert_idempotent_for_duplicate() {
        let mut frontier = Frontier::new(1);
        frontier.insert(0, plain(1.0, 1.0, 1.0));
        let outcome = frontier.insert(0, plain(1.0, 1.0, 1.0));
        assert_eq!(
            outcome,
            InsertOutcome {
                changed: false,
                inserted: false,
            }
        );
        assert_eq!(frontier.node(0).len(), 1);
    }

    #[test]
    fn test_insert_keeps_incomparable_labels() {
        let mut frontier = Frontier::new(1);
        frontier.insert(0, plain(1.0, 9.0, 1.0));
        let outcome = frontier.insert(0, label(9.0, 1.0, 1.0, vec![0, 2], vec![false; 3]));
        assert!(outcome.inserted);
        assert_eq!(frontier.node(0).len(), 2);
    }

    #[test]
    fn test_insert_evicts_several_dominated_labels() {
        let mut frontier = Frontier::new(1);
        frontier.insert(0, label(4.0, 1.0, 1.0, vec![0, 1], vec![false; 3]));
        frontier.insert(0, label(1.0, 4.0, 1.0, vec![0, 2], vec![false; 3]));
        let outcome = frontier.insert(0, label(1.0, 1.0, 1.0, vec![0, 3], vec![false; 3]));
        assert_eq!(
            outcome,
            InsertOutcome {
                changed: true,
                inserted: true,
            }
        );
        assert_eq!(frontier.node(0).len(), 1);
        assert_eq!(frontier.node(0)[0].path, vec![0, 3]);
    }

    proptest! {
        #[test]
        fn frontier_stays_minimal(
            entries in prop::collection::vec(
                (0.0..8.0f64, 0.0..8.0f64, 0.0..8.0f64, prop::collection::vec(any::<bool>(), 4)),
                1..40,
            )
        ) {
            let mut frontier = Frontier::new(1);
            for (idx, (cost, time, load, flag)) in entries.into_iter().enumerate() {
                // Unique path per candidate keeps `identical` out of play.
                frontier.insert(0, Label {
                    cost,
                    time,
                    load,
                    path: vec![0, idx + 1],
                    flag,
                });
                let store = frontier.node(0);
                for a in store {
                    for b in store {
                        if a.path != b.path {
                            prop_assert!(!dominates(a, b));
                        }
                    }
                }
            }
        }
    }
}
