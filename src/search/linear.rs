//! Linear search generator: one step per index in storage order.

use super::trace::{Trace, Verdict};

/// One linear search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearStep {
    pub index: usize,
    pub value: u32,
}

/// Produces the linear search trace for `target` over `data` in storage
/// order. The trace is precomputed in full; `match_step` marks the first
/// occurrence and the playback controller halts advancement there, so the
/// tail steps are never exposed as current.
pub fn linear_trace(data: &[u32], target: u32) -> Trace<LinearStep> {
    let steps = data
        .iter()
        .enumerate()
        .map(|(index, &value)| LinearStep { index, value })
        .collect();
    match data.iter().position(|&v| v == target) {
        Some(at) => Trace::new(steps, Verdict::Found(at), Some(at)),
        None => Trace::new(steps, Verdict::NotFound, None),
    }
}
