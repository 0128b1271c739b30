//! # Persistence Adapter
//!
//! Named-blob save/load/delete of structure snapshots, keyed by
//! user-chosen names and scoped per algorithm family. Overwriting an
//! existing name is silent (last write wins); there is no versioning and
//! no durability guarantee. The in-memory [`MemoryStore`] is the default
//! backend; embedders with durable storage (a file, browser local
//! storage) implement [`StructureStore`] over it themselves.

mod memory;

pub use memory::MemoryStore;

use eyre::{bail, Result};

use crate::hash::{CollisionMethod, HashScheme, Slot};
use crate::keys::KeyOrder;

/// Algorithm family a saved structure belongs to. Families are isolated
/// namespaces: the same name can exist in several families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    BinarySearch,
    LinearSearch,
    HashMod,
    HashSquare,
    HashTrunc,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::BinarySearch => "binary_search",
            Family::LinearSearch => "linear_search",
            Family::HashMod => "hash_mod",
            Family::HashSquare => "hash_square",
            Family::HashTrunc => "hash_trunc",
        }
    }
}

/// Session configuration captured alongside the data. The optional
/// fields only apply to their family (ordering for search structures,
/// scheme/method for hash tables).
#[derive(Debug, Clone, PartialEq)]
pub struct StructureConfig {
    pub capacity: usize,
    pub digits: u8,
    pub order: Option<KeyOrder>,
    pub scheme: Option<HashScheme>,
    pub method: Option<CollisionMethod>,
}

/// The structure's payload.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureData {
    Keys(Vec<u32>),
    Slots(Vec<Slot>),
}

/// Named snapshot of one structure, independent of the in-memory model's
/// lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedStructure {
    pub config: StructureConfig,
    pub data: StructureData,
}

/// Named-blob store, scoped per algorithm family.
pub trait StructureStore {
    /// Saves `snapshot` under `name`, silently replacing an existing
    /// entry. Blank names are rejected.
    fn save(&self, family: Family, name: &str, snapshot: SavedStructure) -> Result<()>;

    /// Loads the snapshot saved under `name`.
    fn load(&self, family: Family, name: &str) -> Result<SavedStructure>;

    /// Deletes the snapshot saved under `name`.
    fn delete(&self, family: Family, name: &str) -> Result<()>;

    /// Names saved in `family`, sorted for deterministic listing.
    fn list(&self, family: Family) -> Vec<String>;
}

/// Validates a user-chosen structure name.
pub(crate) fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        bail!("structure name must not be blank");
    }
    Ok(trimmed)
}
