//! # Visualizer Sessions
//!
//! Facades wiring one model snapshot to the generic playback controller.
//! A single [`SearchSession`] parameterized by a [`SearchAlgorithm`]
//! covers both search screens, and [`HashSession`] covers the three hash
//! screens. Sessions orchestrate and log; every validation rule lives in
//! the models.
//!
//! A session owns its structures exclusively — there is no cross-session
//! sharing. Any mutation or new search replaces the playback trace, which
//! bumps the controller epoch and invalidates outstanding autoplay
//! tickets (see [`crate::playback`]).

use eyre::{bail, Result, WrapErr};
use log::debug;

use crate::error::{ModelError, StructuralError, ValidationError};
use crate::hash::{CollisionMethod, HashScheme, HashTable, ProbeStep};
use crate::keys::{parse_key, KeyOrder, KeySet};
use crate::playback::Playback;
use crate::search::{binary_trace, linear_trace, BinaryStep, LinearStep, Trace};
use crate::store::{Family, SavedStructure, StructureConfig, StructureData};

/// Search algorithm plugged into a [`SearchSession`]: the key ordering it
/// requires, the family it saves under, and its step generator.
pub trait SearchAlgorithm {
    type Step: Clone + std::fmt::Debug;
    const FAMILY: Family;
    const ORDER: KeyOrder;
    fn trace(data: &[u32], target: u32) -> Trace<Self::Step>;
}

/// Binary search over sorted keys.
#[derive(Debug, Clone, Copy)]
pub struct Binary;

impl SearchAlgorithm for Binary {
    type Step = BinaryStep;
    const FAMILY: Family = Family::BinarySearch;
    const ORDER: KeyOrder = KeyOrder::Sorted;

    fn trace(data: &[u32], target: u32) -> Trace<BinaryStep> {
        binary_trace(data, target)
    }
}

/// Linear search over insertion-ordered keys.
#[derive(Debug, Clone, Copy)]
pub struct Linear;

impl SearchAlgorithm for Linear {
    type Step = LinearStep;
    const FAMILY: Family = Family::LinearSearch;
    const ORDER: KeyOrder = KeyOrder::Insertion;

    fn trace(data: &[u32], target: u32) -> Trace<LinearStep> {
        linear_trace(data, target)
    }
}

/// One search visualizer session: the key set, the current trace and the
/// playback cursor into it.
#[derive(Debug, Clone)]
pub struct SearchSession<A: SearchAlgorithm> {
    keys: KeySet,
    playback: Playback<A::Step>,
    target: Option<u32>,
}

impl<A: SearchAlgorithm> SearchSession<A> {
    pub fn new(capacity: usize, digits: u8) -> Self {
        Self {
            keys: KeySet::new(capacity, digits, A::ORDER),
            playback: Playback::idle(),
            target: None,
        }
    }

    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    /// Target of the current trace, if a search has been started.
    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn playback(&self) -> &Playback<A::Step> {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut Playback<A::Step> {
        &mut self.playback
    }

    /// Fills the structure with fresh random keys and discards any
    /// running simulation.
    pub fn generate(&mut self) -> Result<(), ValidationError> {
        self.keys = KeySet::random(self.keys.capacity(), self.keys.digits(), A::ORDER)?;
        self.reset_playback();
        debug!(
            "{}: generated {} random keys",
            A::FAMILY.as_str(),
            self.keys.len()
        );
        Ok(())
    }

    /// Inserts one key from raw text entry; any running simulation is
    /// discarded since its trace no longer matches the data.
    pub fn insert_text(&mut self, input: &str) -> Result<(), ValidationError> {
        self.keys = self.keys.insert_text(input)?;
        self.reset_playback();
        Ok(())
    }

    pub fn remove(&mut self, key: u32) -> Result<(), ValidationError> {
        self.keys = self.keys.remove(key)?;
        self.reset_playback();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.keys = self.keys.clear();
        self.reset_playback();
    }

    /// Computes the full step trace for `target` and rewinds playback to
    /// its first step.
    pub fn search(&mut self, target: u32) {
        let trace = A::trace(self.keys.keys(), target);
        debug!(
            "{}: searching {} over {} keys, {} steps",
            A::FAMILY.as_str(),
            target,
            self.keys.len(),
            trace.len()
        );
        self.playback.start(trace);
        self.target = Some(target);
    }

    /// Search with a raw text target (format-checked, not width-checked).
    pub fn search_text(&mut self, input: &str) -> Result<(), ValidationError> {
        self.search(parse_key(input)?);
        Ok(())
    }

    /// Captures the structure for the persistence adapter.
    pub fn snapshot(&self) -> SavedStructure {
        SavedStructure {
            config: StructureConfig {
                capacity: self.keys.capacity(),
                digits: self.keys.digits(),
                order: Some(A::ORDER),
                scheme: None,
                method: None,
            },
            data: StructureData::Keys(self.keys.keys().to_vec()),
        }
    }

    /// Replaces the session's structure with a saved one. The keys are
    /// re-validated against the saved configuration and re-ordered for
    /// this session's algorithm.
    pub fn restore(&mut self, saved: &SavedStructure) -> Result<()> {
        let StructureData::Keys(keys) = &saved.data else {
            bail!("saved structure holds hash slots, not search keys");
        };
        self.keys = KeySet::restore(saved.config.capacity, saved.config.digits, A::ORDER, keys)
            .wrap_err("saved structure fails key validation")?;
        self.reset_playback();
        Ok(())
    }

    fn reset_playback(&mut self) {
        self.playback = Playback::idle();
        self.target = None;
    }
}

/// One hash visualizer session. The scheme decides which family it saves
/// under.
#[derive(Debug, Clone)]
pub struct HashSession {
    table: HashTable,
    playback: Playback<ProbeStep>,
    target: Option<u32>,
}

impl HashSession {
    pub fn new(
        capacity: usize,
        digits: u8,
        scheme: HashScheme,
        method: CollisionMethod,
    ) -> Result<Self, StructuralError> {
        Ok(Self {
            table: HashTable::new(capacity, digits, scheme, method)?,
            playback: Playback::idle(),
            target: None,
        })
    }

    pub fn table(&self) -> &HashTable {
        &self.table
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn playback(&self) -> &Playback<ProbeStep> {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut Playback<ProbeStep> {
        &mut self.playback
    }

    pub fn family(&self) -> Family {
        match self.table.scheme() {
            HashScheme::Modulo => Family::HashMod,
            HashScheme::MidSquare => Family::HashSquare,
            HashScheme::Truncation => Family::HashTrunc,
        }
    }

    /// Inserts one key from raw text entry and replays the placement's
    /// probe trace.
    pub fn insert_text(&mut self, input: &str) -> Result<(), ModelError> {
        let (table, trace) = self.table.insert_text(input)?;
        debug!(
            "{}: inserted into slot {:?}, {} probes",
            self.family().as_str(),
            trace.verdict().index(),
            trace.len()
        );
        self.table = table;
        self.playback.start(trace);
        self.target = None;
        Ok(())
    }

    /// Searches with a raw text target and replays the probe walk.
    pub fn search_text(&mut self, input: &str) -> Result<(), ValidationError> {
        let target = parse_key(input)?;
        let trace = self.table.search(target);
        self.playback.start(trace);
        self.target = Some(target);
        Ok(())
    }

    /// Removes a key by raw text target; any running simulation is
    /// discarded.
    pub fn remove_text(&mut self, input: &str) -> Result<(), ModelError> {
        self.table = self.table.remove_text(input)?;
        self.reset_playback();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.table = self.table.clear();
        self.reset_playback();
    }

    pub fn snapshot(&self) -> SavedStructure {
        SavedStructure {
            config: StructureConfig {
                capacity: self.table.capacity(),
                digits: self.table.digits(),
                order: None,
                scheme: Some(self.table.scheme()),
                method: Some(self.table.method()),
            },
            data: StructureData::Slots(self.table.slots().to_vec()),
        }
    }

    /// Replaces the session's table with a saved one, re-validating the
    /// saved configuration.
    pub fn restore(&mut self, saved: &SavedStructure) -> Result<()> {
        let StructureData::Slots(slots) = &saved.data else {
            bail!("saved structure holds search keys, not hash slots");
        };
        let (Some(scheme), Some(method)) = (saved.config.scheme, saved.config.method) else {
            bail!("saved hash structure is missing its scheme or collision method");
        };
        self.table = HashTable::from_slots(slots.clone(), saved.config.digits, scheme, method)
            .wrap_err("saved structure fails table validation")?;
        self.reset_playback();
        Ok(())
    }

    fn reset_playback(&mut self) {
        self.playback = Playback::idle();
        self.target = None;
    }
}
