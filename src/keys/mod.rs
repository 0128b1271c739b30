//! # Key Set Model
//!
//! Ordered, duplicate-free collections of non-negative integer keys with a
//! fixed decimal digit width per session. The model owns every validation
//! rule (format, width, duplicates, capacity); callers only invoke
//! operations and render the structured results.
//!
//! All mutations are snapshot-style: they take `&self` and return the next
//! [`KeySet`], so a rejected operation cannot leave partial state behind
//! and history/undo are trivial for an embedder to add.

mod key_set;
mod random;

pub use key_set::{parse_key, parse_key_exact, KeyOrder, KeySet};

pub(crate) use key_set::decimal_len;
pub(crate) use random::generate_unique;
