//! # Error Taxonomy
//!
//! Typed failures for the model layer. Every failure here is recoverable:
//! the attempted operation is rejected and the prior snapshot is left
//! untouched (trivially so, since models return new snapshots instead of
//! mutating in place). The model layer never logs and never formats
//! user-facing prose; presentation is the embedder's concern.
//!
//! A search that finds nothing is *not* an error — it is a normal
//! [`Verdict::NotFound`](crate::search::Verdict). `NotFound` only appears
//! here for `remove`, where the caller asked to delete a key that does
//! not exist.

use thiserror::Error;

/// Rejections raised while validating an operation's inputs against the
/// structure's configuration. These never depend on slot occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{input}' is not a decimal key")]
    InvalidFormat { input: String },
    #[error("key has {actual} digits, structure expects {expected}")]
    WrongDigitWidth { expected: u8, actual: u8 },
    #[error("key {key} is already present")]
    Duplicate { key: u32 },
    #[error("structure is full (capacity {capacity})")]
    Full { capacity: usize },
    #[error("cannot draw {requested} distinct keys; only {available} values have that digit width")]
    CapacityExceeded { requested: usize, available: usize },
    #[error("key {key} is not present")]
    NotFound { key: u32 },
}

/// Rejections raised by the hash table's placement machinery once the
/// inputs themselves are valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("collision at slot {slot}: already holds {occupant}")]
    Collision { slot: usize, occupant: u32 },
    #[error("no free slot after {attempts} probes")]
    TableFull { attempts: usize },
    #[error("bucket at slot {slot} is full (width {width})")]
    BucketFull { slot: usize, width: usize },
    #[error("invalid table configuration: {reason}")]
    InvalidConfig { reason: &'static str },
}

/// Umbrella error for operations that can fail either way, e.g. a hash
/// table insert (digit validation, then collision resolution).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Structural(#[from] StructuralError),
}
