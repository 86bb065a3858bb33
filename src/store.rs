// 🗃️ Keyed Record Store - Unique-by-id collection with validated mutations
//
// Records are kept in insertion order. Identity is the id: two records with
// the same id are the same logical entity, so the store refuses the second.
//
// Callers never get a live reference into the store. `get` and `list_all`
// hand out clones, and `remove` hands ownership back.

use crate::error::StoreError;
use std::collections::HashMap;

/// Identifier of a record inside a store
pub type RecordId = u32;

// ============================================================================
// RECORD TRAITS
// ============================================================================

/// Anything with a stable integer identity
pub trait Keyed {
    fn id(&self) -> RecordId;

    /// Field-level checks run before the record enters a store.
    /// Stocked records must refuse a negative quantity here.
    fn validate(&self) -> Result<(), StoreError>;
}

/// Records carrying a mutable, never-negative quantity
pub trait Stocked: Keyed {
    fn quantity(&self) -> i64;
    fn set_quantity(&mut self, quantity: i64);
}

/// Records with a human-readable name (used in console messages)
pub trait Named {
    fn name(&self) -> &str;
}

/// Quantities are never negative
pub fn check_quantity(quantity: i64) -> Result<(), StoreError> {
    if quantity < 0 {
        return Err(StoreError::InvalidQuantity { quantity });
    }
    Ok(())
}

// ============================================================================
// RECORD STORE
// ============================================================================

#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    /// Records in insertion order
    records: Vec<T>,

    /// id → position in `records`
    index: HashMap<RecordId, usize>,
}

impl<T: Keyed + Clone> RecordStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a store from a sequence, failing on the first repeated id
    pub fn from_records<I>(records: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut store = RecordStore::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Add a record. Fails with `DuplicateKey` if the id is taken, or with the
    /// record's own validation error (e.g. `InvalidQuantity`).
    pub fn insert(&mut self, record: T) -> Result<(), StoreError> {
        let id = record.id();
        if self.index.contains_key(&id) {
            return Err(StoreError::DuplicateKey { id });
        }
        record.validate()?;

        self.index.insert(id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Copy of the record with this id
    pub fn get(&self, id: RecordId) -> Result<T, StoreError> {
        self.index
            .get(&id)
            .map(|&pos| self.records[pos].clone())
            .ok_or(StoreError::NotFound { id })
    }

    /// Delete the record with this id and return it to the caller
    pub fn remove(&mut self, id: RecordId) -> Result<T, StoreError> {
        let pos = self
            .index
            .remove(&id)
            .ok_or(StoreError::NotFound { id })?;

        let removed = self.records.remove(pos);

        // Everything after `pos` shifted one slot to the left
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }

        Ok(removed)
    }

    /// Run `f` against the stored record without copying it out
    pub fn inspect<R, F>(&self, id: RecordId, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&T) -> R,
    {
        self.index
            .get(&id)
            .map(|&pos| f(&self.records[pos]))
            .ok_or(StoreError::NotFound { id })
    }

    /// Snapshot of all records in insertion order
    pub fn list_all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Identifiers in insertion order
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(Keyed::id).collect()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Stocked + Clone> RecordStore<T> {
    /// Replace the quantity of a record, leaving its other attributes untouched.
    ///
    /// A negative quantity is refused before the id is even looked up.
    pub fn update_quantity(&mut self, id: RecordId, new_quantity: i64) -> Result<(), StoreError> {
        check_quantity(new_quantity)?;

        let pos = *self.index.get(&id).ok_or(StoreError::NotFound { id })?;
        self.records[pos].set_quantity(new_quantity);
        Ok(())
    }

    /// Add `delta` (possibly negative) to the current quantity.
    /// Returns the new quantity.
    pub fn adjust_quantity(&mut self, id: RecordId, delta: i64) -> Result<i64, StoreError> {
        let pos = *self.index.get(&id).ok_or(StoreError::NotFound { id })?;
        let current = self.records[pos].quantity();

        let new_quantity = current
            .checked_add(delta)
            .ok_or(StoreError::InvalidQuantity {
                quantity: current.saturating_add(delta),
            })?;

        self.update_quantity(id, new_quantity)?;
        Ok(new_quantity)
    }

    /// Sum of all quantities in the store, `None` on overflow
    pub fn total_quantity(&self) -> Option<i64> {
        self.records
            .iter()
            .try_fold(0i64, |total, record| total.checked_add(record.quantity()))
    }
}

impl<T: Keyed + Clone> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
