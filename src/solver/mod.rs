//! The labeling algorithm, stage by stage.
//!
//! - [`reduction`] — One-shot graph reduction and time-horizon bound
//! - [`extension`] — Feasibility test, label extension, flag propagation
//! - [`dominance`] — Partial order over labels and per-node efficient frontiers
//! - [`search`] — FIFO worklist loop driving the search to a fixpoint

pub mod dominance;
pub mod extension;
pub mod reduction;
pub mod search;

pub use search::{LabelingSolver, SearchLimits, SolveOutcome};
