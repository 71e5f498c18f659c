use crate::error::{FuelError, Result};
use crate::store::KeyValueStore;
use rocksdb::{DB, Options};
use std::path::Path;
use std::sync::Arc;

/// A persistent key-value backend using RocksDB.
///
/// Entries live in the default column family as UTF-8 bytes. `Clone` shares
/// the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let db = DB::open(&opts, path)?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl KeyValueStore for RocksDbStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => {
                let value = String::from_utf8(bytes)
                    .map_err(|e| FuelError::Storage(format!("invalid UTF-8 entry: {}", e)))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.db.put(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }
}
