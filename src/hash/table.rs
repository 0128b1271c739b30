//! # HashTable
//!
//! Fixed-size slot array snapshot model. The slot count never changes
//! after creation; a key appears in at most one slot, enforced by a
//! global pre-insert scan that descends into bucket slots. Like
//! [`KeySet`](crate::keys::KeySet), every mutation returns the next
//! snapshot, so a rejected insert leaves no partial state.
//!
//! Removal clears the slot directly. Under open addressing a cleared slot
//! can hide a displaced key from later probe searches; tombstoning is a
//! known refinement this system's scope deliberately leaves out.

use smallvec::{smallvec, SmallVec};

use crate::config::CHAIN_INLINE_KEYS;
use crate::error::{ModelError, StructuralError, ValidationError};
use crate::keys::{decimal_len, parse_key, parse_key_exact};
use crate::search::{Trace, Verdict};

use super::probe::{CollisionMethod, ProbeStep, ProbeTrace};
use super::scheme::HashScheme;

/// Keys stored in one bucket slot.
pub type BucketKeys = SmallVec<[u32; CHAIN_INLINE_KEYS]>;

/// One fixed position in the table. The bucket form is only produced by
/// the chaining and nested-array strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Empty,
    Single(u32),
    Bucket(BucketKeys),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// The single occupant, for non-bucket slots.
    pub fn occupant(&self) -> Option<u32> {
        match *self {
            Slot::Single(key) => Some(key),
            _ => None,
        }
    }

    pub fn contains(&self, key: u32) -> bool {
        match self {
            Slot::Empty => false,
            Slot::Single(k) => *k == key,
            Slot::Bucket(keys) => keys.contains(&key),
        }
    }
}

/// Immutable snapshot of a fixed-size hash table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashTable {
    slots: Vec<Slot>,
    scheme: HashScheme,
    method: CollisionMethod,
    digits: u8,
}

impl HashTable {
    /// Creates an empty table. Configuration errors (a double-hash table
    /// with fewer than two slots, a zero-slot table, a zero-width nested
    /// bucket) are rejected here so later operations cannot hit them.
    pub fn new(
        capacity: usize,
        digits: u8,
        scheme: HashScheme,
        method: CollisionMethod,
    ) -> Result<Self, StructuralError> {
        Self::from_slots(vec![Slot::Empty; capacity], digits, scheme, method)
    }

    /// Rebuilds a snapshot from persisted slots, re-validating the
    /// configuration.
    pub fn from_slots(
        slots: Vec<Slot>,
        digits: u8,
        scheme: HashScheme,
        method: CollisionMethod,
    ) -> Result<Self, StructuralError> {
        if slots.is_empty() {
            return Err(StructuralError::InvalidConfig {
                reason: "table needs at least one slot",
            });
        }
        if method == CollisionMethod::DoubleHash && slots.len() < 2 {
            return Err(StructuralError::InvalidConfig {
                reason: "double hashing needs at least two slots",
            });
        }
        if let CollisionMethod::NestedArray { width } = method {
            if width == 0 {
                return Err(StructuralError::InvalidConfig {
                    reason: "nested buckets need a non-zero width",
                });
            }
        }
        Ok(Self {
            slots,
            scheme,
            method,
            digits,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn digits(&self) -> u8 {
        self.digits
    }

    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    pub fn method(&self) -> CollisionMethod {
        self.method
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    /// Number of keys stored, counting bucket members.
    pub fn key_count(&self) -> usize {
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Empty => 0,
                Slot::Single(_) => 1,
                Slot::Bucket(keys) => keys.len(),
            })
            .sum()
    }

    /// Global existence scan, descending into bucket slots.
    pub fn contains(&self, key: u32) -> bool {
        self.slots.iter().any(|slot| slot.contains(key))
    }

    /// Empty snapshot with the same configuration.
    pub fn clear(&self) -> Self {
        Self {
            slots: vec![Slot::Empty; self.slots.len()],
            scheme: self.scheme,
            method: self.method,
            digits: self.digits,
        }
    }

    /// Inserts `key`, returning the next snapshot together with the probe
    /// trace of the placement. The duplicate scan runs over the whole
    /// table before any collision resolution.
    pub fn insert(&self, key: u32) -> Result<(Self, ProbeTrace), ModelError> {
        let actual = decimal_len(key);
        if actual != self.digits {
            return Err(ValidationError::WrongDigitWidth {
                expected: self.digits,
                actual,
            }
            .into());
        }
        if self.contains(key) {
            return Err(ValidationError::Duplicate { key }.into());
        }

        let i0 = self.scheme.slot(key, self.capacity());
        if self.method.is_bucketed() {
            self.insert_into_bucket(key, i0)
        } else {
            self.insert_probing(key, i0)
        }
    }

    /// Text-entry insert: parses and width-checks the raw input first.
    pub fn insert_text(&self, input: &str) -> Result<(Self, ProbeTrace), ModelError> {
        self.insert(parse_key_exact(input, self.digits)?)
    }

    fn insert_into_bucket(&self, key: u32, i0: usize) -> Result<(Self, ProbeTrace), ModelError> {
        let placed: BucketKeys = match &self.slots[i0] {
            Slot::Empty => smallvec![key],
            Slot::Bucket(keys) => {
                if let CollisionMethod::NestedArray { width } = self.method {
                    if keys.len() >= width {
                        return Err(StructuralError::BucketFull { slot: i0, width }.into());
                    }
                }
                let mut keys = keys.clone();
                keys.push(key);
                keys
            }
            // A restored snapshot may hold a single-key slot; fold it
            // into a bucket of two when the width allows it.
            Slot::Single(existing) => {
                if let CollisionMethod::NestedArray { width } = self.method {
                    if width < 2 {
                        return Err(StructuralError::BucketFull { slot: i0, width }.into());
                    }
                }
                smallvec![*existing, key]
            }
        };

        let mut next = self.clone();
        next.slots[i0] = Slot::Bucket(placed);
        let steps = vec![ProbeStep {
            attempt: 0,
            slot: i0,
            occupant: None,
        }];
        Ok((next, Trace::new(steps, Verdict::Found(i0), Some(0))))
    }

    fn insert_probing(&self, key: u32, i0: usize) -> Result<(Self, ProbeTrace), ModelError> {
        let order = self.method.probe_order(key, i0, self.capacity())?;
        let attempts = order.len();
        let mut steps = Vec::new();
        for (attempt, slot) in order.into_iter().enumerate() {
            match &self.slots[slot] {
                Slot::Empty => {
                    steps.push(ProbeStep {
                        attempt,
                        slot,
                        occupant: None,
                    });
                    let mut next = self.clone();
                    next.slots[slot] = Slot::Single(key);
                    let at = steps.len() - 1;
                    return Ok((next, Trace::new(steps, Verdict::Found(slot), Some(at))));
                }
                Slot::Single(occupant) => {
                    steps.push(ProbeStep {
                        attempt,
                        slot,
                        occupant: Some(*occupant),
                    });
                    if self.method == CollisionMethod::Direct {
                        return Err(StructuralError::Collision {
                            slot,
                            occupant: *occupant,
                        }
                        .into());
                    }
                }
                Slot::Bucket(keys) => {
                    // Bucket slots only appear in restored snapshots of
                    // bucketed tables; under open addressing treat them
                    // as occupied.
                    steps.push(ProbeStep {
                        attempt,
                        slot,
                        occupant: keys.first().copied(),
                    });
                }
            }
        }
        Err(StructuralError::TableFull { attempts }.into())
    }

    /// Searches for `key`, re-walking the full probe sequence used at
    /// insertion time. Stops at the key, at an empty slot, or after
    /// `capacity` attempts. A miss is a normal [`Verdict::NotFound`], not
    /// an error.
    pub fn search(&self, key: u32) -> ProbeTrace {
        let i0 = self.scheme.slot(key, self.capacity());
        if self.method.is_bucketed() {
            let step = ProbeStep {
                attempt: 0,
                slot: i0,
                occupant: self.slots[i0].occupant(),
            };
            return if self.slots[i0].contains(key) {
                Trace::new(vec![step], Verdict::Found(i0), Some(0))
            } else {
                Trace::new(vec![step], Verdict::NotFound, None)
            };
        }

        // Construction rejects configurations the probe order can fail
        // on, so an error here cannot occur.
        let Ok(order) = self.method.probe_order(key, i0, self.capacity()) else {
            return Trace::empty();
        };
        let mut steps = Vec::new();
        for (attempt, slot) in order.into_iter().enumerate() {
            match &self.slots[slot] {
                Slot::Empty => {
                    steps.push(ProbeStep {
                        attempt,
                        slot,
                        occupant: None,
                    });
                    return Trace::new(steps, Verdict::NotFound, None);
                }
                occupied => {
                    steps.push(ProbeStep {
                        attempt,
                        slot,
                        occupant: occupied.occupant(),
                    });
                    if occupied.contains(key) {
                        let at = steps.len() - 1;
                        return Trace::new(steps, Verdict::Found(slot), Some(at));
                    }
                }
            }
        }
        Trace::new(steps, Verdict::NotFound, None)
    }

    /// Removes `key`, returning the next snapshot. Uses the same lookup
    /// as [`search`](Self::search); clears the slot directly (no
    /// tombstones), and collapses an emptied bucket back to
    /// [`Slot::Empty`].
    pub fn remove(&self, key: u32) -> Result<Self, ModelError> {
        if self.method.is_bucketed() {
            let i0 = self.scheme.slot(key, self.capacity());
            let mut next = self.clone();
            match &mut next.slots[i0] {
                Slot::Bucket(keys) => {
                    let at = keys
                        .iter()
                        .position(|&k| k == key)
                        .ok_or(ValidationError::NotFound { key })?;
                    keys.remove(at);
                    if keys.is_empty() {
                        next.slots[i0] = Slot::Empty;
                    }
                }
                Slot::Single(k) if *k == key => next.slots[i0] = Slot::Empty,
                _ => return Err(ValidationError::NotFound { key }.into()),
            }
            return Ok(next);
        }

        match self.search(key).verdict() {
            Verdict::Found(slot) => {
                let mut next = self.clone();
                next.slots[slot] = Slot::Empty;
                Ok(next)
            }
            Verdict::NotFound => Err(ValidationError::NotFound { key }.into()),
        }
    }

    /// Text-entry search target: format-checked, not width-checked.
    pub fn search_text(&self, input: &str) -> Result<ProbeTrace, ValidationError> {
        Ok(self.search(parse_key(input)?))
    }

    /// Text-entry removal target: format-checked, not width-checked.
    pub fn remove_text(&self, input: &str) -> Result<Self, ModelError> {
        self.remove(parse_key(input)?)
    }
}
