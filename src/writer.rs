use crate::error::Result;
use crate::station::StationRecord;
use std::io::Write;

/// Writes station records as CSV with the camelCase header row.
pub struct StationWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StationWriter<W> {
    pub fn new(target: W) -> Self {
        let writer = csv::WriterBuilder::new().from_writer(target);
        Self { writer }
    }

    pub fn write_stations(&mut self, stations: &[StationRecord]) -> Result<()> {
        for station in stations {
            self.writer.serialize(station)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
