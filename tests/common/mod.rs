use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record([
        "name",
        "alcoholPricePerLiter",
        "gasolinePricePerLiter",
        "location",
        "dateRecorded",
        "latitude",
        "longitude",
    ])?;

    for i in 1..=rows {
        wtr.write_record([
            &format!("Posto {}", i),
            "3.59",
            "5.89",
            "Centro",
            "2024-05-10",
            "0",
            "0",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
