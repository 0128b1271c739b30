//! Collision resolution strategies and probe step traces.

use smallvec::{smallvec, SmallVec};

use crate::error::StructuralError;
use crate::search::Trace;

/// Collision resolution strategy, chosen once per table and fixed for its
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionMethod {
    /// No resolution: the initial slot or a collision error.
    Direct,
    /// `i0 + j (mod m)`.
    LinearProbe,
    /// `i0 + j² (mod m)`.
    QuadraticProbe,
    /// `i0 + j·h2(k) (mod m)` with `h2(k) = 1 + (k mod (m-1))`.
    DoubleHash,
    /// Unbounded list per slot; never fails on collision.
    Chaining,
    /// Fixed-width sub-array per slot.
    NestedArray { width: usize },
}

impl CollisionMethod {
    /// True for strategies that store keys in per-slot buckets rather
    /// than displacing them to other slots.
    pub fn is_bucketed(&self) -> bool {
        matches!(
            self,
            CollisionMethod::Chaining | CollisionMethod::NestedArray { .. }
        )
    }

    /// Ordered candidate slots for `key` starting at `i0` in a table of
    /// `m` slots. Open-addressing strategies enumerate up to `m`
    /// attempts; direct and bucketed strategies only ever visit `i0`.
    pub(crate) fn probe_order(
        &self,
        key: u32,
        i0: usize,
        m: usize,
    ) -> Result<SmallVec<[usize; 8]>, StructuralError> {
        match self {
            CollisionMethod::Direct
            | CollisionMethod::Chaining
            | CollisionMethod::NestedArray { .. } => Ok(smallvec![i0]),
            CollisionMethod::LinearProbe => Ok((0..m).map(|j| (i0 + j) % m).collect()),
            CollisionMethod::QuadraticProbe => Ok((0..m).map(|j| (i0 + j * j) % m).collect()),
            CollisionMethod::DoubleHash => {
                if m < 2 {
                    return Err(StructuralError::InvalidConfig {
                        reason: "double hashing needs at least two slots",
                    });
                }
                let h2 = 1 + key as usize % (m - 1);
                Ok((0..m).map(|j| (i0 + j * h2) % m).collect())
            }
        }
    }
}

/// One visited slot during insert/search/remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeStep {
    /// 0-based attempt number within the probe sequence.
    pub attempt: usize,
    /// Visited slot index.
    pub slot: usize,
    /// Occupant seen at that slot, for single-key slots. `None` for an
    /// empty slot and for bucket slots (the bucket contents are on the
    /// table snapshot itself).
    pub occupant: Option<u32>,
}

/// Step trace of one hash table operation, driven by the same playback
/// controller as the search traces.
pub type ProbeTrace = Trace<ProbeStep>;
