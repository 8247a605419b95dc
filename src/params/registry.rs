//! Process-wide network registry
//!
//! Owns the magic- and name-keyed maps of registered parameter sets.
//! Registration happens during a bounded initialization phase; lookups are
//! read-only for the life of the process. Both maps are updated under a
//! single write-lock acquisition so no observer can see a half-registered
//! network.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use super::{Params, ParamsError};

/// Registration failures; fatal at startup
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    InvalidParams(#[from] ParamsError),
    #[error("network {name:?} (magic 0x{net:08x}) is already registered")]
    DuplicateNetwork { name: String, net: u32 },
}

#[derive(Default)]
struct Maps {
    by_magic: HashMap<u32, Arc<Params>>,
    by_name: HashMap<String, Arc<Params>>,
    /// Registration order, for enumeration
    order: Vec<Arc<Params>>,
}

/// Registry of all known network parameter sets
///
/// Safe to share across threads; lookups may run concurrently with a
/// late registration, which stays all-or-nothing behind the write lock.
#[derive(Default)]
pub struct Registry {
    maps: RwLock<Maps>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Maps> {
        match self.maps.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Maps> {
        match self.maps.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Register a network's parameters
    ///
    /// Validates the set first, then inserts it into both maps atomically.
    /// Fails if the magic or the name is already taken; the registry is
    /// unchanged on any error.
    pub fn register(&self, params: Params) -> Result<(), RegistryError> {
        params.validate()?;

        let mut maps = self.write();
        if maps.by_magic.contains_key(&params.net) || maps.by_name.contains_key(&params.name) {
            return Err(RegistryError::DuplicateNetwork {
                name: params.name.clone(),
                net: params.net,
            });
        }

        let params = Arc::new(params);
        maps.by_magic.insert(params.net, Arc::clone(&params));
        maps.by_name.insert(params.name.clone(), Arc::clone(&params));
        maps.order.push(params);
        Ok(())
    }

    /// Resolve a parameter set by its wire magic
    pub fn lookup_by_magic(&self, net: u32) -> Option<Arc<Params>> {
        self.read().by_magic.get(&net).cloned()
    }

    /// Resolve a parameter set by its name
    pub fn lookup_by_name(&self, name: &str) -> Option<Arc<Params>> {
        self.read().by_name.get(name).cloned()
    }

    /// All registered networks in registration order
    pub fn networks(&self) -> Vec<Arc<Params>> {
        self.read().order.clone()
    }
}
