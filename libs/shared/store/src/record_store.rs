use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Typed view over one named sled tree. Each entity type owns a tree under
/// its fixed namespace tag, so identifiers never leak between entities.
///
/// Values are stored as JSON documents. Iteration order is the tree's key
/// order: implementation-defined from the caller's perspective, but stable
/// across calls and restarts.
pub struct RecordStore<V> {
    tree: sled::Tree,
    _marker: PhantomData<fn() -> V>,
}

impl<V> RecordStore<V>
where
    V: Serialize + DeserializeOwned,
{
    pub(crate) fn new(tree: sled::Tree) -> Self {
        Self {
            tree,
            _marker: PhantomData,
        }
    }

    /// Upsert: an existing record under the same key is overwritten.
    pub fn insert(&self, key: &str, value: &V) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec(value)?;
        self.tree.insert(key.as_bytes(), encoded)?;
        self.tree.flush()?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<V>, StoreError> {
        match self.tree.get(key.as_bytes())? {
            Some(raw) => Ok(Some(serde_json::from_slice(&raw)?)),
            None => Ok(None),
        }
    }

    /// Removing an absent key is a no-op; callers confirm existence first
    /// when they need to report a miss.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.tree.remove(key.as_bytes())?;
        self.tree.flush()?;
        Ok(())
    }

    pub fn values(&self) -> Result<Vec<V>, StoreError> {
        let mut values = Vec::new();
        for entry in self.tree.iter() {
            let (_, raw) = entry?;
            values.push(serde_json::from_slice(&raw)?);
        }
        Ok(values)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
