//! Read-only access to recorded pigeons and their parent references.

use crate::error::{Error, Result};
use crate::pedigree::Ancestor;
use crate::pigeon::{Pigeon, PigeonId};
use indexmap::IndexMap;
use serde::Deserialize;

pub trait PigeonStore {
    fn get(&self, id: &PigeonId) -> Option<&Pigeon>;

    /// Resolves an optional id; dangling ids become [`Ancestor::Unknown`].
    fn resolve(&self, id: Option<&PigeonId>) -> Ancestor<'_> {
        let Some(id) = id else {
            return Ancestor::Unknown;
        };
        match self.get(id) {
            Some(pigeon) => Ancestor::Known(pigeon),
            None => {
                tracing::debug!(%id, "parent reference not found in store");
                Ancestor::Unknown
            }
        }
    }

    fn sire_of(&self, pigeon: &Pigeon) -> Ancestor<'_> {
        self.resolve(pigeon.sire.as_ref())
    }

    fn dam_of(&self, pigeon: &Pigeon) -> Ancestor<'_> {
        self.resolve(pigeon.dam.as_ref())
    }
}

/// Insertion-ordered in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pigeons: IndexMap<PigeonId, Pigeon>,
}

#[derive(Debug, Deserialize)]
struct StoreFile {
    pigeons: Vec<Pigeon>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: StoreFile = serde_json::from_str(text)?;
        Self::from_pigeons(file.pigeons)
    }

    pub fn from_pigeons(pigeons: impl IntoIterator<Item = Pigeon>) -> Result<Self> {
        let mut store = Self::new();
        for pigeon in pigeons {
            store.insert(pigeon)?;
        }
        Ok(store)
    }

    pub fn insert(&mut self, pigeon: Pigeon) -> Result<()> {
        if self.pigeons.contains_key(&pigeon.id) {
            return Err(Error::DuplicatePigeon { id: pigeon.id });
        }
        self.pigeons.insert(pigeon.id.clone(), pigeon);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pigeons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pigeons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pigeon> {
        self.pigeons.values()
    }

    pub fn ancestor(&self, id: &PigeonId) -> Ancestor<'_> {
        self.resolve(Some(id))
    }
}

impl PigeonStore for MemoryStore {
    fn get(&self, id: &PigeonId) -> Option<&Pigeon> {
        self.pigeons.get(id)
    }
}
