use crate::sink::KeyValueSink;
use crate::sink::SinkError;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// An in-process store, mostly useful for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueSink for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SinkError> {
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SinkError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
