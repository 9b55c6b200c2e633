// src/store.rs
//
// In-memory fight cache, keyed by registry index. Records are immutable once
// loaded, so a reload would always produce the same data; caching by source
// path is safe and keeps selector changes cheap.

use std::collections::HashMap;

use crate::data::FightData;
use crate::loader::{self, LoadError};
use crate::registry::{self, DatasetEntry};

#[derive(Default)]
pub struct Store {
    fights: HashMap<usize, FightData>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load-or-reuse the dataset at registry index `ix`.
    pub fn get(&mut self, ix: usize) -> Result<&FightData, LoadError> {
        if !self.fights.contains_key(&ix) {
            let entry: &DatasetEntry = &registry::all()[ix];
            let path = registry::data_path(entry);
            let fight = loader::load(&path, entry.label)?;
            self.fights.insert(ix, fight);
        }
        Ok(&self.fights[&ix])
    }

    /// Non-loading lookup, for render paths that must not trigger I/O.
    pub fn peek(&self, ix: usize) -> Option<&FightData> {
        self.fights.get(&ix)
    }

    /// Drop a cached dataset; the next `get` reloads it from disk.
    pub fn evict(&mut self, ix: usize) {
        self.fights.remove(&ix);
    }
}
