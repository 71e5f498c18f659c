use crate::decision::Percentage;
use crate::error::Result;
use crate::station::StationRecord;
use crate::store::{InMemoryStore, KeyValueStore};

/// Key holding the serialized station list.
pub const STATIONS_KEY: &str = "stations";
/// Key holding the threshold percentage preference.
pub const PERCENTAGE_KEY: &str = "percentage";

/// Sole owner of persisted state: the ordered station list and the threshold
/// preference. Every mutation is a whole-collection read-modify-write.
pub struct StationRepository<S: KeyValueStore = InMemoryStore> {
    store: S,
}

impl Default for StationRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StationRepository {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
        }
    }
}

impl<S: KeyValueStore> StationRepository<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Returns the full ordered station list. Absent or corrupt stored data
    /// reads as an empty list, never as an error.
    pub fn list(&self) -> Result<Vec<StationRecord>> {
        let raw = self.store.get(STATIONS_KEY)?;
        Ok(raw
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default())
    }

    /// Appends a record and persists the full list.
    pub fn add(&mut self, record: StationRecord) -> Result<()> {
        let mut stations = self.list()?;
        stations.push(record);
        self.save(&stations)
    }

    /// Replaces the record at `index` if in bounds; out of bounds is a no-op.
    pub fn edit(&mut self, index: usize, record: StationRecord) -> Result<()> {
        let mut stations = self.list()?;
        if let Some(slot) = stations.get_mut(index) {
            *slot = record;
        }
        self.save(&stations)
    }

    /// Removes the record at `index` if in bounds; out of bounds is a no-op.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        let mut stations = self.list()?;
        if index < stations.len() {
            stations.remove(index);
        }
        self.save(&stations)
    }

    /// Returns the stored threshold preference, defaulting to 70 when the
    /// entry is absent or not one of the supported values.
    pub fn percentage(&self) -> Result<Percentage> {
        let raw = self.store.get(PERCENTAGE_KEY)?;
        Ok(raw
            .and_then(|s| s.trim().parse::<u32>().ok())
            .and_then(|v| Percentage::try_from(v).ok())
            .unwrap_or_default())
    }

    pub fn set_percentage(&mut self, percentage: Percentage) -> Result<()> {
        self.store
            .put(PERCENTAGE_KEY, &percentage.as_u32().to_string())
    }

    fn save(&mut self, stations: &[StationRecord]) -> Result<()> {
        let raw = serde_json::to_string(stations)?;
        self.store.put(STATIONS_KEY, &raw)
    }
}
