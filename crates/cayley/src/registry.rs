//! Sharing built tables between threads
//!
//! Building tables costs `O(n^3)` in the number of basis blades,
//! so applications typically build them once per algebra and share them.
//! A [Registry] is an ordinary value owned by the caller; there is no hidden global.
//!
//! ```
//! use std::sync::{Arc, OnceLock};
//! use cayley::{BladeBasis, MultiplicationTables, Registry, VectorSpace};
//!
//! fn algebras() -> &'static Registry<f64> {
//!     static ALGEBRAS: OnceLock<Registry<f64>> = OnceLock::new();
//!     ALGEBRAS.get_or_init(Registry::new)
//! }
//!
//! const E3: u32 = 3;
//!
//! let tables = algebras()
//!     .get_or_try_insert_with(E3, || {
//!         let space = Arc::new(VectorSpace::diagonal(vec![1.; 3])?.with_id(E3));
//!         MultiplicationTables::build(BladeBasis::generate(&space)?)
//!     })
//!     .unwrap();
//! assert_eq!(tables.len(), 8);
//! assert!(Arc::ptr_eq(&tables, &algebras().get(E3).unwrap()));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::table::MultiplicationTables;

/// Built tables keyed by the [id](crate::VectorSpace::id) of their vector space
pub struct Registry<T> {
    tables: RwLock<HashMap<u32, Arc<MultiplicationTables<T>>>>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Registry {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Add tables under the id of their vector space.
    ///
    /// Fails if that id is taken; the registered tables are never replaced.
    pub fn register(&self, tables: MultiplicationTables<T>) -> Result<Arc<MultiplicationTables<T>>> {
        let id = tables.basis().space().id();
        let mut map = self.tables.write();
        if map.contains_key(&id) {
            return Err(Error::AlreadyRegistered { id });
        }
        let tables = Arc::new(tables);
        map.insert(id, tables.clone());
        log::debug!("registered algebra {} with {} basis blades", id, tables.len());
        Ok(tables)
    }

    pub fn get(&self, id: u32) -> Option<Arc<MultiplicationTables<T>>> {
        self.tables.read().get(&id).cloned()
    }

    /// Get the tables for `id`, building and registering them first if needed.
    ///
    /// `build` runs without holding the lock, and must produce tables whose
    /// vector space has id `id`.
    /// If another thread registers `id` in the meantime, its tables win
    /// and the ones just built are dropped.
    pub fn get_or_try_insert_with(
        &self,
        id: u32,
        build: impl FnOnce() -> Result<MultiplicationTables<T>>,
    ) -> Result<Arc<MultiplicationTables<T>>> {
        if let Some(tables) = self.get(id) {
            return Ok(tables);
        }
        let built = build()?;
        let found = built.basis().space().id();
        if found != id {
            return Err(Error::IdMismatch {
                expected: id,
                found,
            });
        }
        let built = Arc::new(built);
        let mut map = self.tables.write();
        let tables = map.entry(id).or_insert_with(|| {
            log::debug!("registered algebra {} with {} basis blades", id, built.len());
            built.clone()
        });
        Ok(tables.clone())
    }

    pub fn remove(&self, id: u32) -> Option<Arc<MultiplicationTables<T>>> {
        self.tables.write().remove(&id)
    }

    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
