//! # KeySet
//!
//! The key collection behind the search visualizers. Binary search keeps
//! its keys sorted ascending; linear search keeps insertion order. The
//! ordering is a per-structure choice made at construction, not a property
//! a caller can violate afterwards.

use crate::error::ValidationError;

/// Storage order for a [`KeySet`], chosen once per structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOrder {
    /// Keys kept sorted ascending (binary search).
    Sorted,
    /// Keys kept in insertion order (linear search).
    Insertion,
}

/// Immutable snapshot of a duplicate-free key collection.
///
/// Invariants:
/// - no duplicate values
/// - `len() <= capacity()`
/// - every key has exactly `digits()` decimal digits
/// - `order() == Sorted` implies the keys are sorted ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    keys: Vec<u32>,
    capacity: usize,
    digits: u8,
    order: KeyOrder,
}

impl KeySet {
    /// Creates an empty key set for the given session configuration.
    pub fn new(capacity: usize, digits: u8, order: KeyOrder) -> Self {
        Self {
            keys: Vec::new(),
            capacity,
            digits,
            order,
        }
    }

    /// Creates a full key set of `capacity` distinct random keys, each of
    /// exactly `digits` decimal digits (no leading zero unless
    /// `digits == 1`). Sorted ascending under [`KeyOrder::Sorted`],
    /// generation order otherwise.
    pub fn random(
        capacity: usize,
        digits: u8,
        order: KeyOrder,
    ) -> Result<Self, ValidationError> {
        let mut keys = super::random::generate_unique(capacity, digits)?;
        if order == KeyOrder::Sorted {
            keys.sort_unstable();
        }
        Ok(Self {
            keys,
            capacity,
            digits,
            order,
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn digits(&self) -> u8 {
        self.digits
    }

    pub fn order(&self) -> KeyOrder {
        self.order
    }

    /// Keys in storage order.
    pub fn keys(&self) -> &[u32] {
        &self.keys
    }

    pub fn contains(&self, key: u32) -> bool {
        self.keys.contains(&key)
    }

    /// Storage position of `key`, if present.
    pub fn position(&self, key: u32) -> Option<usize> {
        self.keys.iter().position(|&k| k == key)
    }

    /// Returns a new snapshot with `key` inserted, keeping the structure's
    /// ordering. Rejects keys of the wrong digit width, duplicates, and
    /// inserts into a full structure.
    pub fn insert(&self, key: u32) -> Result<Self, ValidationError> {
        let actual = decimal_len(key);
        if actual != self.digits {
            return Err(ValidationError::WrongDigitWidth {
                expected: self.digits,
                actual,
            });
        }
        if self.contains(key) {
            return Err(ValidationError::Duplicate { key });
        }
        if self.keys.len() >= self.capacity {
            return Err(ValidationError::Full {
                capacity: self.capacity,
            });
        }

        let mut next = self.clone();
        match self.order {
            KeyOrder::Sorted => {
                let at = next.keys.partition_point(|&k| k < key);
                next.keys.insert(at, key);
            }
            KeyOrder::Insertion => next.keys.push(key),
        }
        Ok(next)
    }

    /// Parses raw text entry and inserts it. This is the validation entry
    /// point for UI input; [`insert`](Self::insert) re-checks the width on
    /// the parsed value.
    pub fn insert_text(&self, input: &str) -> Result<Self, ValidationError> {
        self.insert(parse_key_exact(input, self.digits)?)
    }

    /// Returns a new snapshot with `key` removed. The remaining keys keep
    /// their relative order.
    pub fn remove(&self, key: u32) -> Result<Self, ValidationError> {
        let at = self
            .position(key)
            .ok_or(ValidationError::NotFound { key })?;
        let mut next = self.clone();
        next.keys.remove(at);
        Ok(next)
    }

    /// Empty snapshot with the same configuration.
    pub fn clear(&self) -> Self {
        Self::new(self.capacity, self.digits, self.order)
    }

    /// Rebuilds a snapshot from persisted keys, re-validating every
    /// structural invariant.
    pub fn restore(
        capacity: usize,
        digits: u8,
        order: KeyOrder,
        keys: &[u32],
    ) -> Result<Self, ValidationError> {
        let mut set = Self::new(capacity, digits, order);
        for &key in keys {
            set = set.insert(key)?;
        }
        Ok(set)
    }
}

/// Number of decimal digits in `n` (1 for 0).
pub(crate) fn decimal_len(n: u32) -> u8 {
    let mut len = 1u8;
    let mut rest = n / 10;
    while rest > 0 {
        len += 1;
        rest /= 10;
    }
    len
}

/// Parses raw text as a key: decimal digits only, no sign, no whitespace
/// inside. Used for search/remove targets, which are format-checked but
/// not width-checked.
pub fn parse_key(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            input: input.to_owned(),
        });
    }
    trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            input: input.to_owned(),
        })
}

/// Parses raw text as a key and enforces the exact digit width. Used for
/// insert paths. The width is checked on the parsed value, so a leading
/// zero (e.g. "07" with `digits == 2`) is rejected rather than stored as
/// a shorter key.
pub fn parse_key_exact(input: &str, digits: u8) -> Result<u32, ValidationError> {
    let key = parse_key(input)?;
    let actual = decimal_len(key);
    if actual != digits {
        return Err(ValidationError::WrongDigitWidth {
            expected: digits,
            actual,
        });
    }
    Ok(key)
}
