//! In-memory implementation of the named-blob store.

use std::sync::Arc;

use eyre::{bail, Result};
use hashbrown::HashMap;
use log::debug;
use parking_lot::RwLock;

use super::{validate_name, Family, SavedStructure, StructureStore};

/// Shared in-memory store. Cloning hands out another handle to the same
/// underlying map, so every visualizer session in a process sees the
/// same saved structures.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<(Family, String), SavedStructure>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StructureStore for MemoryStore {
    fn save(&self, family: Family, name: &str, snapshot: SavedStructure) -> Result<()> {
        let name = validate_name(name)?;
        debug!("saving structure '{}' in family {}", name, family.as_str());
        self.inner
            .write()
            .insert((family, name.to_owned()), snapshot);
        Ok(())
    }

    fn load(&self, family: Family, name: &str) -> Result<SavedStructure> {
        let name = validate_name(name)?;
        match self.inner.read().get(&(family, name.to_owned())) {
            Some(snapshot) => Ok(snapshot.clone()),
            None => bail!(
                "no structure named '{}' in family {}",
                name,
                family.as_str()
            ),
        }
    }

    fn delete(&self, family: Family, name: &str) -> Result<()> {
        let name = validate_name(name)?;
        if self.inner.write().remove(&(family, name.to_owned())).is_none() {
            bail!(
                "no structure named '{}' in family {}",
                name,
                family.as_str()
            );
        }
        debug!("deleted structure '{}' in family {}", name, family.as_str());
        Ok(())
    }

    fn list(&self, family: Family) -> Vec<String> {
        let mut names: Vec<String> = self
            .inner
            .read()
            .keys()
            .filter(|(f, _)| *f == family)
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        names
    }
}
