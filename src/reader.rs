use crate::error::FuelError;
use crate::station::StationRecord;
use std::io::Read;

/// Reads station records from a CSV source.
///
/// Wraps `csv::Reader` and yields an iterator over `Result<StationRecord>`,
/// trimming whitespace and tolerating flexible record lengths. Numeric field
/// leniency comes from the record's own deserializer.
pub struct StationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> StationReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn stations(self) -> impl Iterator<Item = Result<StationRecord, FuelError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FuelError::from))
    }
}
