use std::collections::HashMap;

use crate::error::Error;
use crate::util;

/// Read side of a string-keyed, string-valued persistent store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
}

impl KeyValueStore for web_sys::Storage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.get_item(key).map_err(|err| Error::StorageRead {
            key: key.to_owned(),
            reason: util::describe(&err),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.0.get(key).cloned())
    }
}
