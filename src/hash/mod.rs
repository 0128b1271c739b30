//! # Hash Table Model
//!
//! Fixed-size slot array with three hash schemes and five collision
//! resolution strategies, producing probe traces the playback controller
//! can replay. Slot indexes are 0-based throughout the engine.
//!
//! ## Schemes
//!
//! | Scheme     | Rule                                                    |
//! |------------|---------------------------------------------------------|
//! | Modulo     | `k mod capacity`                                        |
//! | MidSquare  | central `digits(capacity) - 1` digits of `k²`, mod cap  |
//! | Truncation | leading `digits(capacity) - 1` digits of `k`, mod cap   |
//!
//! ## Collision strategies
//!
//! | Strategy       | Probe order, from `i0 = h(k)`, `m = capacity`      |
//! |----------------|-----------------------------------------------------|
//! | Direct         | `i0` only; occupied slot is a collision error       |
//! | LinearProbe    | `i0 + j (mod m)`                                    |
//! | QuadraticProbe | `i0 + j² (mod m)`                                   |
//! | DoubleHash     | `i0 + j·h2(k) (mod m)`, `h2(k) = 1 + (k mod (m-1))` |
//! | Chaining       | unbounded bucket at `i0`                            |
//! | NestedArray    | fixed-width bucket at `i0`                          |
//!
//! Search always re-walks the same probe sequence used at insertion until
//! it finds the key, an empty slot, or exhausts `m` attempts. Checking
//! only the initial slot would report false negatives for displaced keys.

mod probe;
mod scheme;
mod table;

pub use probe::{CollisionMethod, ProbeStep, ProbeTrace};
pub use scheme::HashScheme;
pub use table::{HashTable, Slot};
