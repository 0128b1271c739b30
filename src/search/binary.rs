//! # Binary Search Generator
//!
//! Classic interval halving over a sorted ascending slice. The midpoint
//! rounds down (`mid = (low + high) / 2`), which fixes the half chosen on
//! even-length intervals; step-by-step reproducibility depends on this
//! tie-break, so it must not change.

use std::cmp::Ordering;

use super::trace::{Trace, Verdict};

/// One binary search step: the current interval and the probed midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryStep {
    pub low: usize,
    pub high: usize,
    pub mid: usize,
    /// Value stored at `mid`.
    pub value: u32,
}

/// Produces the full step trace of a binary search for `target` over
/// `data`, which must be sorted ascending.
///
/// The first step always covers `[0, len - 1]`, each later step's
/// interval is a strict subset of the previous one (`low = mid + 1` or
/// `high = mid - 1`), and the trace ends when the midpoint matches or the
/// interval empties. Empty data yields an empty trace with
/// [`Verdict::NotFound`].
pub fn binary_trace(data: &[u32], target: u32) -> Trace<BinaryStep> {
    debug_assert!(data.windows(2).all(|w| w[0] <= w[1]));

    if data.is_empty() {
        return Trace::empty();
    }

    let mut steps = Vec::new();
    let mut low = 0usize;
    let mut high = data.len() - 1;
    loop {
        let mid = low + (high - low) / 2;
        steps.push(BinaryStep {
            low,
            high,
            mid,
            value: data[mid],
        });

        match data[mid].cmp(&target) {
            Ordering::Equal => {
                let at = steps.len() - 1;
                return Trace::new(steps, Verdict::Found(mid), Some(at));
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
        if low > high {
            break;
        }
    }
    Trace::new(steps, Verdict::NotFound, None)
}
