//! Keyed, insertion-ordered entity collection.
//!
//! [`OrderedEntityCollection`] stores entities under a unique string key and
//! iterates them in insertion order. It is an immutable value: every
//! mutating operation leaves the receiver untouched and returns a new
//! collection, so a caller can keep the old snapshot alongside the new one.
//!
//! Semantics worth knowing before using it:
//! - `add` of an existing key is a silent no-op (first write wins).
//! - `update` requires the key to already be present.
//! - `remove` of an absent key is a no-op; later positions shift down by one.
//! - The collection never sorts. Schedule order is whatever order the
//!   entities were inserted in.

use indexmap::map::Values;
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// An entity that can be stored in an [`OrderedEntityCollection`].
///
/// An empty key counts as a missing key field and is rejected with
/// [`CoreError::InvalidEntity`].
pub trait Keyed {
    /// Name of the key field, used in error messages.
    const KEY_FIELD: &'static str = "id";

    /// The entity's unique key.
    fn key(&self) -> &str;
}

/// Order-preserving map from entity key to entity.
#[derive(Debug, Clone)]
pub struct OrderedEntityCollection<E> {
    entities: IndexMap<String, E>,
}

impl<E> Default for OrderedEntityCollection<E> {
    fn default() -> Self {
        OrderedEntityCollection {
            entities: IndexMap::new(),
        }
    }
}

impl<E: Keyed> OrderedEntityCollection<E> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from an initial sequence, keeping its order.
    ///
    /// Fails with [`CoreError::InvalidEntity`] if any element has an empty
    /// key. When the sequence repeats a key, the first occurrence is kept.
    pub fn from_entities<I>(entities: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = E>,
    {
        let mut map = IndexMap::new();
        for entity in entities {
            let key = checked_key(&entity)?;
            map.entry(key).or_insert(entity);
        }
        Ok(OrderedEntityCollection { entities: map })
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Looks up an entity by key.
    pub fn get(&self, key: &str) -> Option<&E> {
        self.entities.get(key)
    }

    /// Entity at the given ordinal position, if in range.
    pub fn at(&self, index: usize) -> Option<&E> {
        self.entities.get_index(index).map(|(_, entity)| entity)
    }

    /// Ordinal position of a key, if present.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entities.get_index_of(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entities.contains_key(key)
    }

    /// The last entity in iteration order.
    pub fn last(&self) -> Option<&E> {
        self.entities.last().map(|(_, entity)| entity)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.entities.keys().map(String::as_str)
    }

    /// Entities in insertion order.
    pub fn iter(&self) -> Values<'_, String, E> {
        self.entities.values()
    }
}

impl<E: Keyed + Clone> OrderedEntityCollection<E> {
    /// Ordered snapshot of every entity.
    pub fn to_vec(&self) -> Vec<E> {
        self.entities.values().cloned().collect()
    }

    /// Returns a collection with `entity` appended.
    ///
    /// Returns [`CoreError::InvalidEntity`] if the entity has an empty key.
    /// If the key is already present the result equals the receiver: the
    /// stored entity is never overwritten through `add`.
    pub fn add(&self, entity: E) -> Result<Self, CoreError> {
        let key = checked_key(&entity)?;
        let mut next = self.clone();
        next.entities.entry(key).or_insert(entity);
        Ok(next)
    }

    /// Returns a collection with every entity of `entities` appended in
    /// order, with the same first-write-wins rule as [`add`](Self::add).
    ///
    /// The whole batch is rejected if any entity has an empty key.
    pub fn add_all<I>(&self, entities: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = E>,
    {
        let mut next = self.clone();
        for entity in entities {
            let key = checked_key(&entity)?;
            next.entities.entry(key).or_insert(entity);
        }
        Ok(next)
    }

    /// Returns a collection where the entity stored under `entity`'s key
    /// is replaced. The position of the entry does not change.
    ///
    /// Returns [`CoreError::InvalidEntity`] for an empty key and
    /// [`CoreError::EntityNotFound`] if the key is not present.
    pub fn update(&self, entity: E) -> Result<Self, CoreError> {
        let key = checked_key(&entity)?;
        if !self.entities.contains_key(&key) {
            return Err(CoreError::EntityNotFound { key });
        }
        let mut next = self.clone();
        if let Some(slot) = next.entities.get_mut(&key) {
            *slot = entity;
        }
        Ok(next)
    }

    /// Returns a collection without the entity stored under `key`.
    ///
    /// Absent keys are ignored. Later entities move down one position.
    pub fn remove(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.entities.shift_remove(key);
        next
    }
}

fn checked_key<E: Keyed>(entity: &E) -> Result<String, CoreError> {
    let key = entity.key();
    if key.is_empty() {
        return Err(CoreError::InvalidEntity {
            field: E::KEY_FIELD,
        });
    }
    Ok(key.to_string())
}

impl<E: PartialEq> PartialEq for OrderedEntityCollection<E> {
    // IndexMap equality ignores order; collections compare positionally.
    fn eq(&self, other: &Self) -> bool {
        self.entities.len() == other.entities.len()
            && self.entities.iter().eq(other.entities.iter())
    }
}

impl<'a, E> IntoIterator for &'a OrderedEntityCollection<E> {
    type Item = &'a E;
    type IntoIter = Values<'a, String, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.values()
    }
}

impl<E: Serialize> Serialize for OrderedEntityCollection<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entities.values())
    }
}

impl<'de, E> Deserialize<'de> for OrderedEntityCollection<E>
where
    E: Deserialize<'de> + Keyed,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entities = Vec::<E>::deserialize(deserializer)?;
        Self::from_entities(entities).map_err(D::Error::custom)
    }
}
