use crate::domain::ports::{Entity, EntityId, QuantityBearing};
use crate::error::{Result, StoreError};
use std::collections::HashMap;

/// An in-memory store of one entity type, keyed by identifier.
///
/// Entities are kept in insertion order for listing, with a `HashMap` index
/// from identifier to position for lookups. Every mutating operation validates
/// first and only then touches the storage, so a failed call leaves the
/// repository exactly as it was.
///
/// The repository does no locking of its own; share it across threads only
/// behind an external lock.
#[derive(Debug, Clone)]
pub struct EntityRepository<T> {
    items: Vec<T>,
    index: HashMap<EntityId, usize>,
}

impl<T> Default for EntityRepository<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Entity> EntityRepository<T> {
    /// Creates a new, empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` under its own identifier.
    ///
    /// Fails with `DuplicateKey` if the identifier is already taken; the stored
    /// entity is left untouched.
    pub fn add(&mut self, item: T) -> Result<()> {
        let id = item.id();
        if self.index.contains_key(&id) {
            return Err(StoreError::DuplicateKey(id));
        }
        self.index.insert(id, self.items.len());
        self.items.push(item);
        Ok(())
    }

    pub fn get_by_id(&self, id: EntityId) -> Result<&T> {
        self.index
            .get(&id)
            .map(|&pos| &self.items[pos])
            .ok_or(StoreError::NotFound(id))
    }

    /// Deletes and returns the entity stored under `id`.
    pub fn remove(&mut self, id: EntityId) -> Result<T> {
        let pos = self.index.remove(&id).ok_or(StoreError::NotFound(id))?;
        let removed = self.items.remove(pos);
        for item in &self.items[pos..] {
            if let Some(slot) = self.index.get_mut(&item.id()) {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    /// Removes the first entity (in insertion order) matching `predicate`.
    pub fn remove_where<P>(&mut self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        let id = self.find(predicate)?.id();
        self.remove(id).ok()
    }

    /// Returns an owned snapshot of every entity in insertion order.
    pub fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(*item))
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity + QuantityBearing> EntityRepository<T> {
    /// Replaces the stored quantity of entity `id`.
    ///
    /// The quantity is validated before the lookup, so a negative value fails
    /// with `InvalidQuantity` whether or not `id` exists.
    pub fn update_quantity(&mut self, id: EntityId, new_quantity: i64) -> Result<()> {
        let quantity =
            u32::try_from(new_quantity).map_err(|_| StoreError::InvalidQuantity(new_quantity))?;
        let pos = *self.index.get(&id).ok_or(StoreError::NotFound(id))?;
        self.items[pos].set_quantity(quantity);
        Ok(())
    }
}
