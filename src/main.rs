use clap::{Args, Parser, Subcommand};
use flexfuel::decision::{self, Percentage};
use flexfuel::reader::StationReader;
use flexfuel::repository::StationRepository;
#[cfg(feature = "storage-rocksdb")]
use flexfuel::rocksdb::RocksDbStore;
use flexfuel::station::StationRecord;
use flexfuel::store::{FileStore, KeyValueStoreBox};
use flexfuel::writer::StationWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the station database file.
    #[arg(long, default_value = "stations.db")]
    db: PathBuf,

    /// Use RocksDB at this path instead of the file store.
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    rocksdb: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decide between alcohol and gasoline for the given pump prices.
    Calc {
        /// Alcohol price per liter.
        #[arg(long)]
        alcohol: String,

        /// Gasoline price per liter.
        #[arg(long)]
        gasoline: String,

        /// Threshold percentage (70 or 75). Defaults to the stored preference.
        #[arg(long, value_parser = parse_percentage)]
        percentage: Option<Percentage>,
    },
    /// Record a station observation.
    Add {
        #[command(flatten)]
        station: StationArgs,
    },
    /// Print the recorded stations.
    List,
    /// Replace the station at the given position.
    Edit {
        index: usize,
        #[command(flatten)]
        station: StationArgs,
    },
    /// Remove the station at the given position.
    Delete { index: usize },
    /// Show or change the threshold percentage preference.
    Percentage {
        #[arg(value_parser = parse_percentage)]
        value: Option<Percentage>,
    },
    /// Append stations from a CSV file.
    Import { input: PathBuf },
    /// Write the recorded stations as CSV to stdout.
    Export,
}

#[derive(Args)]
struct StationArgs {
    /// Station name.
    #[arg(long)]
    name: String,

    /// Alcohol price per liter.
    #[arg(long)]
    alcohol: String,

    /// Gasoline price per liter.
    #[arg(long)]
    gasoline: String,

    /// Free-text location.
    #[arg(long, default_value = "")]
    location: String,

    /// Date of the observation.
    #[arg(long, default_value = "")]
    date: String,

    #[arg(long)]
    latitude: Option<String>,

    #[arg(long)]
    longitude: Option<String>,
}

impl StationArgs {
    fn into_record(self) -> StationRecord {
        StationRecord::from_input(
            &self.name,
            &self.alcohol,
            &self.gasoline,
            &self.location,
            &self.date,
            self.latitude.as_deref(),
            self.longitude.as_deref(),
        )
    }
}

fn parse_percentage(text: &str) -> Result<Percentage, String> {
    text.parse::<u32>()
        .ok()
        .and_then(|v| Percentage::try_from(v).ok())
        .ok_or_else(|| "expected 70 or 75".to_string())
}

fn open_store(cli: &Cli) -> Result<KeyValueStoreBox> {
    #[cfg(feature = "storage-rocksdb")]
    if let Some(path) = &cli.rocksdb {
        let store = RocksDbStore::open(path).into_diagnostic()?;
        return Ok(Box::new(store));
    }
    let store = FileStore::open(&cli.db).into_diagnostic()?;
    Ok(Box::new(store))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = open_store(&cli)?;
    let mut repo = StationRepository::with_store(store);

    match cli.command {
        Command::Calc {
            alcohol,
            gasoline,
            percentage,
        } => {
            let percentage = match percentage {
                Some(p) => p,
                None => repo.percentage().into_diagnostic()?,
            };
            println!("{}", decision::recommend(&alcohol, &gasoline, percentage));
        }
        Command::Add { station } => {
            repo.add(station.into_record()).into_diagnostic()?;
        }
        Command::List => {
            for (index, station) in repo.list().into_diagnostic()?.iter().enumerate() {
                println!("{index}: {station}");
            }
        }
        Command::Edit { index, station } => {
            repo.edit(index, station.into_record()).into_diagnostic()?;
        }
        Command::Delete { index } => {
            repo.delete(index).into_diagnostic()?;
        }
        Command::Percentage { value } => match value {
            Some(percentage) => repo.set_percentage(percentage).into_diagnostic()?,
            None => println!("{}", repo.percentage().into_diagnostic()?),
        },
        Command::Import { input } => {
            let file = File::open(input).into_diagnostic()?;
            for result in StationReader::new(file).stations() {
                match result {
                    Ok(station) => repo.add(station).into_diagnostic()?,
                    Err(e) => eprintln!("Error reading station: {}", e),
                }
            }
        }
        Command::Export => {
            let stations = repo.list().into_diagnostic()?;
            let stdout = io::stdout();
            let mut writer = StationWriter::new(stdout.lock());
            writer.write_stations(&stations).into_diagnostic()?;
        }
    }

    Ok(())
}
