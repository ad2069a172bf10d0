//! In-memory key-value store.

use super::KeyValueStore;
use crate::errors::StoreResult;
use std::collections::HashMap;

/// A `HashMap`-backed store that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("score").unwrap(), None);

        store.set("score", "10").unwrap();
        assert_eq!(store.get("score").unwrap().as_deref(), Some("10"));

        store.set("score", "25").unwrap();
        assert_eq!(store.get("score").unwrap().as_deref(), Some("25"));
        assert_eq!(store.len(), 1);

        store.remove("score").unwrap();
        store.remove("score").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_many_writes_all() {
        let mut store = MemoryStore::new();
        store
            .set_many(&[("a", "1".to_string()), ("b", "2".to_string())])
            .unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }
}
