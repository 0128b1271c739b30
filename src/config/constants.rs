//! # Engine Constants
//!
//! All configuration constants for the trace engine. Constants that
//! constrain each other are co-located and documented here so a change to
//! one is checked against its dependents.
//!
//! ```text
//! MAX_DIGITS (6)
//!       │
//!       └─> keys are u32; a key of MAX_DIGITS decimal digits must fit,
//!           and key*key (mid-square hashing) must fit in u64. Both hold
//!           for any MAX_DIGITS <= 9.
//!
//! MAX_TABLE_CAPACITY (100)
//!       │
//!       └─> probe orders enumerate up to capacity slots; quadratic
//!           probing computes j*j for j < capacity, comfortably inside
//!           usize at this bound.
//!
//! NESTED_BUCKET_WIDTH (3)
//!       │
//!       └─> fixed sub-array width for the nested-array collision
//!           strategy; CHAIN_INLINE_KEYS should be >= this so nested
//!           buckets never spill to the heap.
//! ```

use std::time::Duration;

/// Smallest accepted key digit width.
pub const MIN_DIGITS: u8 = 1;

/// Largest accepted key digit width. UI-enforced in the embedder; the
/// models reject wider keys through digit-width validation.
pub const MAX_DIGITS: u8 = 6;

/// Smallest accepted table capacity.
pub const MIN_TABLE_CAPACITY: usize = 1;

/// Largest accepted table capacity.
pub const MAX_TABLE_CAPACITY: usize = 100;

/// Fixed sub-array width for [`CollisionMethod::NestedArray`] buckets.
///
/// [`CollisionMethod::NestedArray`]: crate::hash::CollisionMethod::NestedArray
pub const NESTED_BUCKET_WIDTH: usize = 3;

/// Inline capacity for chained/nested bucket storage before spilling.
pub const CHAIN_INLINE_KEYS: usize = 4;

/// Interval between autoplay ticks. The engine itself is timer-agnostic;
/// embedders read this off the [`AutoplayTicket`] and own the clock.
///
/// [`AutoplayTicket`]: crate::playback::AutoplayTicket
pub const AUTOPLAY_TICK: Duration = Duration::from_millis(650);

// Compile-time invariants. u32 holds any 9-digit decimal and u64 holds
// its square, so MAX_DIGITS <= 9 keeps all key arithmetic overflow-free.
const _: () = assert!(MIN_DIGITS >= 1);
const _: () = assert!(MAX_DIGITS <= 9);
const _: () = assert!(MIN_DIGITS <= MAX_DIGITS);
const _: () = assert!(MIN_TABLE_CAPACITY >= 1);
const _: () = assert!(MIN_TABLE_CAPACITY <= MAX_TABLE_CAPACITY);
const _: () = assert!(NESTED_BUCKET_WIDTH >= 1);
const _: () = assert!(CHAIN_INLINE_KEYS >= NESTED_BUCKET_WIDTH);
