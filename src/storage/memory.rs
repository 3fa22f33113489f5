use anyhow::Result;
use std::collections::HashMap;

use crate::storage::KeyValueSlot;

/// Process-local slot. Contents are lost when it is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: HashMap<String, Vec<u8>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-populated with one record.
    pub fn with(key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let mut slot = Self::new();
        slot.entries.insert(key.to_string(), bytes.into());
        slot
    }

    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
