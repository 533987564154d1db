use hashbrown::HashMap;

use crate::error::{BenchError, Result};

/// Integer-keyed hash table with unique keys.
#[derive(Debug)]
pub struct KeyedTable<V> {
    map: HashMap<i64, V>,
}

impl<V> KeyedTable<V> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts `value` under `key`. The table is left unchanged if the key exists.
    pub fn insert(&mut self, key: i64, value: V) -> Result<()> {
        if self.map.contains_key(&key) {
            return Err(BenchError::DuplicateKey { key });
        }
        self.map.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: i64) -> Option<&V> {
        self.map.get(&key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Visits every entry once, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &V)> + '_ {
        self.map.iter().map(|(&k, v)| (k, v))
    }

    /// Removes every entry, yielding them by value.
    pub fn drain(&mut self) -> impl Iterator<Item = (i64, V)> + '_ {
        self.map.drain()
    }
}

impl<V> Default for KeyedTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
