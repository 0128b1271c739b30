//! # Search Step Generators
//!
//! Pure functions turning a key set and a target into a deterministic,
//! replayable [`Trace`] of algorithm steps. Generators run synchronously
//! and eagerly; the playback controller owns the cursor into the result.

mod binary;
mod linear;
mod trace;

pub use binary::{binary_trace, BinaryStep};
pub use linear::{linear_trace, LinearStep};
pub use trace::{Trace, Verdict};
